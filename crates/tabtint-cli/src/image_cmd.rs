use std::path::Path;

use tabtint::{OcrEngine, TableMatrix, TesseractEngine, reconstruct_from_image};

use crate::cli::OutputFormat;
use crate::shared::write_tables;

pub fn run(file: &Path, format: &OutputFormat, lang: &str, psm: u32) -> Result<(), i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let image = image::open(file)
        .map_err(|e| {
            eprintln!("Error: failed to read image: {e}");
            1
        })?
        .to_rgb8();

    let engine = TesseractEngine::new(lang, psm);
    if !engine.is_available() {
        eprintln!("Error: tesseract is not installed or not functional");
        return Err(2);
    }

    let words = engine.recognize_words(&image).map_err(|e| {
        eprintln!("Error: OCR failed: {e}");
        1
    })?;

    let (rows, fills) = reconstruct_from_image(&image, words);
    let tables = if rows.is_empty() {
        Vec::new()
    } else {
        vec![TableMatrix::new("page-1-ocr-1".to_string(), rows, fills)]
    };

    write_tables(&tables, format)
}
