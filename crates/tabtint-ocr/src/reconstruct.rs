//! Row/column reconstruction from positioned OCR word boxes.
//!
//! Words are banded into rows by vertical position, then split into cells
//! by horizontal gaps. Both thresholds adapt to the page: the row threshold
//! follows the median word height, the gap threshold the median inter-word
//! gap, each clamped to keep degenerate pages from collapsing or exploding
//! the grid. Every reconstructed cell's highlight color is estimated from
//! the pixels under its word union box.

use image::RgbImage;

use crate::engine::OcrWord;
use crate::estimate::estimate_highlight_color;

/// Words below this confidence (0–100) are discarded before reconstruction.
pub const MIN_WORD_CONF: f64 = 40.0;

/// Floor for the row-banding threshold, in pixels.
pub const MIN_ROW_THRESHOLD: f64 = 25.0;

/// Fraction of the median word height used for row banding.
pub const ROW_HEIGHT_FACTOR: f64 = 0.8;

/// Median gap assumed when a row has fewer than two words.
pub const DEFAULT_MEDIAN_GAP: f64 = 25.0;

/// Fraction of the median inter-word gap used for column splitting.
pub const GAP_FACTOR: f64 = 0.8;

/// Floor for the column-split threshold, in pixels.
pub const MIN_GAP_THRESHOLD: f64 = 18.0;

/// Ceiling for the column-split threshold, in pixels.
pub const MAX_GAP_THRESHOLD: f64 = 120.0;

/// Reconstruct a table from a rasterized page image and its OCR words.
///
/// Returns the text matrix and the aligned fill-color matrix, both padded
/// rectangular. Low-confidence and empty-text words are dropped first; if
/// nothing remains, both matrices are empty.
pub fn reconstruct_from_image(
    image: &RgbImage,
    words: Vec<OcrWord>,
) -> (Vec<Vec<String>>, Vec<Vec<Option<String>>>) {
    let mut words: Vec<OcrWord> = words
        .into_iter()
        .filter(|w| w.conf >= MIN_WORD_CONF && !w.text.trim().is_empty())
        .collect();
    if words.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let row_threshold = MIN_ROW_THRESHOLD.max(ROW_HEIGHT_FACTOR * median_height(&words));
    words.sort_by(|a, b| a.bbox.top.total_cmp(&b.bbox.top));

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut fills: Vec<Vec<Option<String>>> = Vec::new();
    for band in band_rows(&words, row_threshold) {
        let (texts, colors) = split_cells(image, band);
        rows.push(texts);
        fills.push(colors);
    }

    // Pad jagged rows so both matrices are rectangular and aligned.
    let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(cols, String::new());
    }
    for row in &mut fills {
        row.resize(cols, None);
    }

    (rows, fills)
}

/// Band top-sorted words into rows.
///
/// A new row starts whenever a word's top exceeds the top of the current
/// row's first word by more than `row_threshold`.
fn band_rows(words: &[OcrWord], row_threshold: f64) -> Vec<Vec<&OcrWord>> {
    let mut bands: Vec<Vec<&OcrWord>> = Vec::new();
    let mut current: Vec<&OcrWord> = Vec::new();
    let mut current_top = 0.0;

    for word in words {
        if current.is_empty() {
            current_top = word.bbox.top;
        } else if word.bbox.top > current_top + row_threshold {
            bands.push(std::mem::take(&mut current));
            current_top = word.bbox.top;
        }
        current.push(word);
    }
    if !current.is_empty() {
        bands.push(current);
    }
    bands
}

/// Split one row band into cells by horizontal gaps.
///
/// Cell text is the left-to-right join of its words; cell color is
/// estimated over the tight union box of its words.
fn split_cells(image: &RgbImage, mut band: Vec<&OcrWord>) -> (Vec<String>, Vec<Option<String>>) {
    band.sort_by(|a, b| a.bbox.x0.total_cmp(&b.bbox.x0));

    let mut gaps: Vec<f64> = band
        .windows(2)
        .map(|pair| pair[1].bbox.x0 - pair[0].bbox.x1)
        .collect();
    let median_gap = if gaps.is_empty() {
        DEFAULT_MEDIAN_GAP
    } else {
        median(&mut gaps)
    };
    let gap_threshold = MIN_GAP_THRESHOLD.max(MAX_GAP_THRESHOLD.min(GAP_FACTOR * median_gap));

    let mut texts = Vec::new();
    let mut colors = Vec::new();
    let mut cell: Vec<&OcrWord> = Vec::new();

    for word in band {
        let starts_new_cell = cell
            .last()
            .is_some_and(|prev| word.bbox.x0 - prev.bbox.x1 > gap_threshold);
        if starts_new_cell {
            flush_cell(image, &mut cell, &mut texts, &mut colors);
        }
        cell.push(word);
    }
    flush_cell(image, &mut cell, &mut texts, &mut colors);

    (texts, colors)
}

fn flush_cell(
    image: &RgbImage,
    cell: &mut Vec<&OcrWord>,
    texts: &mut Vec<String>,
    colors: &mut Vec<Option<String>>,
) {
    if cell.is_empty() {
        return;
    }
    let text = cell
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let bbox = cell
        .iter()
        .skip(1)
        .fold(cell[0].bbox, |acc, w| acc.union(&w.bbox));
    texts.push(text);
    colors.push(estimate_highlight_color(image, &bbox));
    cell.clear();
}

fn median_height(words: &[OcrWord]) -> f64 {
    let mut heights: Vec<f64> = words.iter().map(|w| w.bbox.height()).collect();
    median(&mut heights)
}

/// Median of a non-empty slice; even lengths average the middle pair.
fn median(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}
