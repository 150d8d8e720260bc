use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Extract highlighted tables from page dumps and scanned images.
#[derive(Debug, Parser)]
#[command(name = "tabtint", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reconstruct a table from a scanned page image via OCR
    Image {
        /// Path to the image file (PNG, JPEG, ...)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Tesseract language
        #[arg(long, default_value = "eng")]
        lang: String,

        /// Tesseract page segmentation mode
        #[arg(long, default_value_t = 6)]
        psm: u32,
    },

    /// Extract tables with highlight colors from a JSON page dump
    Page {
        /// Path to the page-content JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for extracted tables.
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text grid plus a highlight listing
    Text,
    /// JSON array of tables with rows and fills
    Json,
}
