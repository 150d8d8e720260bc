//! Colored regions: candidate highlight sources on a page.

use crate::BBox;

/// Where a colored region came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegionSource {
    /// A filled or stroked rectangle drawn on the page.
    Rect,
    /// A Highlight-subtype annotation.
    Annotation,
    /// A color estimated from rasterized pixels (OCR path).
    HighlightEstimate,
}

/// A box with a resolved fill code, produced transiently per page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColoredRegion {
    /// Normalized bounding box of the region.
    pub bbox: BBox,
    /// Resolved `FFrrggbb` fill code.
    pub color: String,
    /// Provenance of the region.
    pub source: RegionSource,
}
