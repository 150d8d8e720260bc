//! Per-page input records as delivered by the PDF-parsing collaborator.
//!
//! The extraction pipeline never talks to a PDF backend directly; each page
//! arrives as a [`PageContent`] holding rectangle records, annotation
//! records, a text-presence flag, and the tables the backend's vector
//! detector found.

use crate::RawBox;

/// A rectangle or shape record with optional fill/stroke color.
///
/// Colors are PDF component arrays (grayscale or RGB fractions in [0, 1]).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectRecord {
    pub bbox: RawBox,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fill_color: Option<Vec<f64>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stroke_color: Option<Vec<f64>>,
}

/// An annotation record (subtype, color, box coordinates).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotRecord {
    /// Raw /Subtype name as it appears in the PDF (e.g. "Highlight").
    pub subtype: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<Vec<f64>>,
    pub bbox: RawBox,
}

/// Row or column metadata attached to a detected table.
///
/// Backends disagree on the shape of this metadata; the three variants
/// cover every form seen in the wild, resolved by a single adapter per
/// axis in the highlight mapping engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisMeta {
    /// An object exposing an explicit bounding box.
    Boxed(RawBox),
    /// A 4-element box-like sequence: `[x0, top, x1, bottom]`.
    Quad([f64; 4]),
    /// A flat numeric boundary; consecutive entries form an extent pair.
    Edge(f64),
}

/// A vector-detected table: extracted text plus row/column metadata.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectedTable {
    /// Extracted text matrix, row-major. Rows may be jagged.
    pub data: Vec<Vec<String>>,
    /// Vertical extent metadata, one entry per row (or rows + 1 edges).
    #[cfg_attr(feature = "serde", serde(default))]
    pub row_meta: Vec<AxisMeta>,
    /// Horizontal extent metadata, one entry per column (or columns + 1 edges).
    #[cfg_attr(feature = "serde", serde(default))]
    pub col_meta: Vec<AxisMeta>,
}

/// Everything the pipeline needs to know about one page.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageContent {
    /// Rectangle/shape records, in page paint order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rects: Vec<RectRecord>,
    /// Annotation records, in page order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub annots: Vec<AnnotRecord>,
    /// Whether the page exposes any positioned text glyphs.
    #[cfg_attr(feature = "serde", serde(default))]
    pub has_text: bool,
    /// Tables found by the backend's vector detector.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tables: Vec<DetectedTable>,
}
