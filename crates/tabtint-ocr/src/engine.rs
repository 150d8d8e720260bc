//! The external OCR capability and its Tesseract-backed implementation.

use std::process::Command;

use image::RgbImage;
use tabtint_core::BBox;
use thiserror::Error;

/// Errors from the OCR capability layer.
#[derive(Debug, Error)]
pub enum OcrError {
    /// The OCR engine is not installed or not runtime-functional.
    #[error("OCR engine is not available")]
    EngineUnavailable,
    /// The engine ran but exited with a failure.
    #[error("OCR engine failed: {0}")]
    EngineFailed(String),
    /// Writing the temporary image for the engine failed.
    #[error("failed to encode page image: {0}")]
    ImageEncode(#[from] image::ImageError),
    /// I/O error spawning or reading the engine process.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A recognized word: text token, pixel box, and grouping hints.
///
/// Exists only during OCR reconstruction; consumed to build table rows
/// and discarded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OcrWord {
    /// The recognized text token.
    pub text: String,
    /// Confidence on a 0–100 scale.
    pub conf: f64,
    /// Bounding box in image pixel coordinates.
    pub bbox: BBox,
    /// Block identifier from the OCR engine.
    pub block: u32,
    /// Paragraph identifier within the block.
    pub par: u32,
    /// Line identifier within the paragraph.
    pub line: u32,
}

/// An external OCR engine, resolved once and injected into the pipeline.
///
/// Implementations must be stubbable in tests; the pipeline only asks for
/// word-level output over a rasterized page image.
pub trait OcrEngine {
    /// Whether the engine is installed and runtime-functional.
    fn is_available(&self) -> bool;

    /// Recognize words in a page image.
    fn recognize_words(&self, image: &RgbImage) -> Result<Vec<OcrWord>, OcrError>;
}

/// OCR engine backed by the `tesseract` command-line binary.
///
/// Writes the page image to a temporary PNG and runs
/// `tesseract <png> stdout -l <lang> --psm <psm> tsv`, parsing word-level
/// (level 5) rows from the TSV output.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    lang: String,
    psm: u32,
}

impl TesseractEngine {
    pub fn new(lang: impl Into<String>, psm: u32) -> Self {
        Self {
            lang: lang.into(),
            psm,
        }
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        // PSM 6: assume a single uniform block of text, the mode that keeps
        // word boxes usable for positional table reconstruction.
        Self::new("eng", 6)
    }
}

impl OcrEngine for TesseractEngine {
    fn is_available(&self) -> bool {
        Command::new("tesseract")
            .arg("--version")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    fn recognize_words(&self, image: &RgbImage) -> Result<Vec<OcrWord>, OcrError> {
        let tmp = tempfile::Builder::new()
            .prefix("tabtint-ocr-")
            .suffix(".png")
            .tempfile()?;
        image.save(tmp.path())?;

        let output = Command::new("tesseract")
            .arg(tmp.path())
            .arg("stdout")
            .args(["-l", &self.lang])
            .args(["--psm", &self.psm.to_string()])
            .arg("tsv")
            .output()
            .map_err(|_| OcrError::EngineUnavailable)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::EngineFailed(stderr.trim().to_string()));
        }

        Ok(parse_tsv_words(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Tesseract TSV column layout: level, page_num, block_num, par_num,
/// line_num, word_num, left, top, width, height, conf, text.
const TSV_COLUMNS: usize = 12;

/// Word rows carry level 5; higher levels describe containing structure.
const TSV_WORD_LEVEL: u32 = 5;

/// Parse Tesseract word-level TSV output into [`OcrWord`]s.
///
/// Rows that are not word-level, have negative confidence (structural rows
/// re-reported at word level), or carry empty text are dropped.
fn parse_tsv_words(tsv: &str) -> Vec<OcrWord> {
    let mut words = Vec::new();

    for row in tsv.lines().skip(1) {
        let cols: Vec<&str> = row.split('\t').collect();
        if cols.len() < TSV_COLUMNS {
            continue;
        }
        let level: u32 = cols[0].parse().unwrap_or(0);
        if level != TSV_WORD_LEVEL {
            continue;
        }
        let conf: f64 = cols[10].parse().unwrap_or(-1.0);
        let text = cols[11].trim();
        if text.is_empty() || conf < 0.0 {
            continue;
        }

        let block: u32 = cols[2].parse().unwrap_or(0);
        let par: u32 = cols[3].parse().unwrap_or(0);
        let line: u32 = cols[4].parse().unwrap_or(0);
        let left: f64 = cols[6].parse().unwrap_or(0.0);
        let top: f64 = cols[7].parse().unwrap_or(0.0);
        let width: f64 = cols[8].parse().unwrap_or(0.0);
        let height: f64 = cols[9].parse().unwrap_or(0.0);

        words.push(OcrWord {
            text: text.to_string(),
            conf,
            bbox: BBox::new(left, top, left + width, top + height),
            block,
            par,
            line,
        });
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    const TSV_HEADER: &str =
        "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";

    #[test]
    fn test_parse_word_rows() {
        let tsv = format!(
            "{TSV_HEADER}\n\
             1\t1\t0\t0\t0\t0\t0\t0\t600\t800\t-1\t\n\
             5\t1\t1\t1\t1\t1\t10\t20\t40\t15\t96.5\tName\n\
             5\t1\t1\t1\t1\t2\t60\t20\t30\t15\t88\tAge"
        );
        let words = parse_tsv_words(&tsv);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text, "Name");
        assert_eq!(words[0].conf, 96.5);
        assert_eq!(words[0].bbox, BBox::new(10.0, 20.0, 50.0, 35.0));
        assert_eq!(words[0].block, 1);
        assert_eq!(words[1].text, "Age");
    }

    #[test]
    fn test_parse_skips_structural_and_empty_rows() {
        let tsv = format!(
            "{TSV_HEADER}\n\
             4\t1\t1\t1\t1\t0\t10\t20\t100\t15\t-1\t\n\
             5\t1\t1\t1\t1\t1\t10\t20\t40\t15\t-1\t\n\
             5\t1\t1\t1\t1\t2\t60\t20\t30\t15\t91\t   "
        );
        assert!(parse_tsv_words(&tsv).is_empty());
    }

    #[test]
    fn test_parse_tolerates_short_rows() {
        let tsv = format!("{TSV_HEADER}\n5\t1\t1");
        assert!(parse_tsv_words(&tsv).is_empty());
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_tsv_words("").is_empty());
    }
}
