//! tabtint-ocr: Table reconstruction from rasterized pages.
//!
//! Used when a page carries no extractable vector text: positioned OCR word
//! boxes are grouped into rows and columns by spacing heuristics, and each
//! reconstructed cell's highlight color is estimated from pixel statistics.
//!
//! The external OCR engine is an injected capability ([`OcrEngine`]); the
//! bundled [`TesseractEngine`] shells out to the `tesseract` binary and
//! parses its word-level TSV output. Availability is probed once, so a
//! machine without Tesseract simply contributes zero OCR tables.

mod engine;
mod estimate;
mod reconstruct;

pub use engine::{OcrEngine, OcrError, OcrWord, TesseractEngine};
pub use estimate::{
    BRIGHTNESS_THRESHOLD, CROP_PAD_PX, SATURATION_THRESHOLD, estimate_highlight_color,
};
pub use reconstruct::{
    DEFAULT_MEDIAN_GAP, GAP_FACTOR, MAX_GAP_THRESHOLD, MIN_GAP_THRESHOLD, MIN_ROW_THRESHOLD,
    MIN_WORD_CONF, ROW_HEIGHT_FACTOR, reconstruct_from_image,
};
