//! tabtint: Extract tables from PDF page content, preserving cell highlight
//! colors, with an OCR fallback for scanned/image-only pages.
//!
//! This is the public API facade crate. It ties together:
//!
//! - **tabtint-core**: geometry, color codes, the highlight mapping engine
//! - **tabtint-ocr**: OCR word grouping and pixel-based highlight estimation
//!
//! The pipeline consumes per-page [`PageContent`] records from a PDF
//! backend and produces a flat list of [`TableMatrix`] values, one per
//! detected or reconstructed table, in page order.

mod document;
mod extract;

pub use document::{Document, NoRasterizer, PageRasterizer, PrerenderedPages};
pub use extract::{Extractor, RENDER_DPI};

pub use tabtint_core::{
    AnnotRecord, AxisMeta, BBox, ColoredRegion, DetectedTable, PageContent, RawBox, RectRecord,
    RegionSource, TableMatrix, collect_colored_regions, color_to_hex, map_highlights,
};
pub use tabtint_ocr::{OcrEngine, OcrError, OcrWord, TesseractEngine, reconstruct_from_image};
