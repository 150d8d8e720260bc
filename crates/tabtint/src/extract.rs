//! The document pipeline: per-page detection selection and table emission.
//!
//! Per page, the decision is a small state machine: vector tables found →
//! emit them with mapped highlights; none found but the page has positioned
//! text → skip (the text just isn't tabular); none found and no text → the
//! page is likely scanned, so rasterize it and reconstruct from OCR words.
//! Pages are processed independently; results concatenate in page order,
//! then table order within a page.

use tracing::debug;

use tabtint_core::{TableMatrix, map_highlights};
use tabtint_ocr::{OcrEngine, reconstruct_from_image};

use crate::document::{Document, PageRasterizer};

/// Resolution for the OCR fallback raster.
///
/// High enough that word boxes carry usable inter-word gaps; the grouping
/// thresholds in tabtint-ocr assume roughly this pixel density.
pub const RENDER_DPI: u32 = 400;

/// The extraction pipeline with its injected capabilities.
///
/// OCR availability is probed once per run, not per page.
pub struct Extractor<'a> {
    ocr: &'a dyn OcrEngine,
    rasterizer: &'a dyn PageRasterizer,
}

impl<'a> Extractor<'a> {
    pub fn new(ocr: &'a dyn OcrEngine, rasterizer: &'a dyn PageRasterizer) -> Self {
        Self { ocr, rasterizer }
    }

    /// Extract all tables from a document, in page order.
    pub fn extract_tables(&self, doc: &Document) -> Vec<TableMatrix> {
        let ocr_available = self.ocr.is_available();
        let mut results = Vec::new();

        for (page_idx, page) in doc.pages.iter().enumerate() {
            let page_no = page_idx + 1;

            if !page.tables.is_empty() {
                let mut emitted = 0;
                for (table_idx, table) in page.tables.iter().enumerate() {
                    if table.data.is_empty() {
                        continue;
                    }
                    emitted += 1;
                    let fills = map_highlights(table, page);
                    results.push(TableMatrix::new(
                        format!("page-{page_no}-table-{}", table_idx + 1),
                        table.data.clone(),
                        fills,
                    ));
                }
                debug!(page = page_no, tables = emitted, "vector tables emitted");
                continue;
            }

            if page.has_text {
                // Text is present but nothing tabular was detected.
                debug!(page = page_no, "no tables, page has text; skipping");
                continue;
            }

            if !ocr_available {
                debug!(page = page_no, "image-only page but OCR unavailable");
                continue;
            }

            if let Some(matrix) = self.ocr_fallback(page_no) {
                results.push(matrix);
            }
        }

        results
    }

    /// Rasterize an image-only page and reconstruct one table from OCR words.
    fn ocr_fallback(&self, page_no: usize) -> Option<TableMatrix> {
        let image = self.rasterizer.render(page_no - 1, RENDER_DPI)?;

        let words = match self.ocr.recognize_words(&image) {
            Ok(words) => words,
            Err(err) => {
                debug!(page = page_no, error = %err, "OCR failed; skipping page");
                return None;
            }
        };

        let (rows, fills) = reconstruct_from_image(&image, words);
        if rows.is_empty() {
            return None;
        }
        // One reconstructed table per page; no multi-table splitting.
        Some(TableMatrix::new(
            format!("page-{page_no}-ocr-1"),
            rows,
            fills,
        ))
    }
}
