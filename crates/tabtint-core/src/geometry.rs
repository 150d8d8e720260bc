//! Bounding boxes and axis-aligned overlap testing.
//!
//! Coordinates use a top-left origin: `top` and `bottom` are distances from
//! the top of the page, so `top < bottom` for any normalized box.

/// Bounding box with top-left origin coordinate system.
///
/// - `x0`: left edge
/// - `top`: top edge (distance from top of page)
/// - `x1`: right edge
/// - `bottom`: bottom edge (distance from top of page)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl BBox {
    pub fn new(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            x0,
            top,
            x1,
            bottom,
        }
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the bounding box.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Compute the union of two bounding boxes.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: self.x0.min(other.x0),
            top: self.top.min(other.top),
            x1: self.x1.max(other.x1),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Normalize a loosely-specified geometry record into a box.
    ///
    /// Accepts both coordinate conventions: the dedicated `top`/`bottom`
    /// fields, or PDF-native `y1`/`y0` (where `y1` maps to `top` and `y0`
    /// to `bottom`) when the dedicated fields are absent. Returns `None`
    /// if any of the four coordinates cannot be resolved.
    pub fn from_raw(raw: &RawBox) -> Option<BBox> {
        let x0 = raw.x0?;
        let x1 = raw.x1?;
        let top = raw.top.or(raw.y1)?;
        let bottom = raw.bottom.or(raw.y0)?;
        Some(BBox {
            x0,
            top,
            x1,
            bottom,
        })
    }

    /// Strict interior overlap test between two axis-aligned boxes.
    ///
    /// Touching edges (coordinate equality) count as non-overlapping.
    pub fn overlaps(&self, other: &BBox) -> bool {
        !(self.x1 <= other.x0
            || self.x0 >= other.x1
            || self.top >= other.bottom
            || self.bottom <= other.top)
    }
}

/// A geometry record as delivered by an upstream PDF backend.
///
/// Every coordinate is optional; backends disagree on whether vertical
/// extent arrives as `top`/`bottom` or as PDF-native `y0`/`y1`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawBox {
    #[cfg_attr(feature = "serde", serde(default))]
    pub x0: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub x1: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub top: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bottom: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub y0: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub y1: Option<f64>,
}

impl RawBox {
    /// Construct a record with all four dedicated fields present.
    pub fn full(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            x0: Some(x0),
            x1: Some(x1),
            top: Some(top),
            bottom: Some(bottom),
            y0: None,
            y1: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_new() {
        let bbox = BBox::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(bbox.x0, 10.0);
        assert_eq!(bbox.top, 20.0);
        assert_eq!(bbox.x1, 30.0);
        assert_eq!(bbox.bottom, 40.0);
    }

    #[test]
    fn test_bbox_dimensions() {
        let bbox = BBox::new(10.0, 20.0, 50.0, 60.0);
        assert_eq!(bbox.width(), 40.0);
        assert_eq!(bbox.height(), 40.0);
    }

    #[test]
    fn test_bbox_union() {
        let a = BBox::new(10.0, 20.0, 30.0, 40.0);
        let b = BBox::new(5.0, 25.0, 35.0, 45.0);
        let u = a.union(&b);
        assert_eq!(u.x0, 5.0);
        assert_eq!(u.top, 20.0);
        assert_eq!(u.x1, 35.0);
        assert_eq!(u.bottom, 45.0);
    }

    // --- from_raw ---

    #[test]
    fn test_from_raw_dedicated_fields() {
        let raw = RawBox::full(1.0, 2.0, 3.0, 4.0);
        assert_eq!(BBox::from_raw(&raw), Some(BBox::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_from_raw_pdf_native_fallback() {
        // y1 maps to top, y0 to bottom when top/bottom are absent
        let raw = RawBox {
            x0: Some(1.0),
            x1: Some(3.0),
            y1: Some(2.0),
            y0: Some(4.0),
            ..RawBox::default()
        };
        assert_eq!(BBox::from_raw(&raw), Some(BBox::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_from_raw_dedicated_fields_win_over_fallback() {
        let raw = RawBox {
            x0: Some(1.0),
            x1: Some(3.0),
            top: Some(2.0),
            bottom: Some(4.0),
            y1: Some(99.0),
            y0: Some(99.0),
        };
        assert_eq!(BBox::from_raw(&raw), Some(BBox::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_from_raw_missing_coordinate() {
        let raw = RawBox {
            x0: Some(1.0),
            top: Some(2.0),
            bottom: Some(4.0),
            ..RawBox::default()
        };
        assert_eq!(BBox::from_raw(&raw), None);
        assert_eq!(BBox::from_raw(&RawBox::default()), None);
    }

    // --- overlaps ---

    #[test]
    fn test_overlaps_basic() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BBox::new(5.0, 5.0, 15.0, 15.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_overlaps_disjoint() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BBox::new(20.0, 20.0, 30.0, 30.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_overlaps_symmetric() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BBox::new(5.0, 5.0, 15.0, 15.0);
        let c = BBox::new(20.0, 0.0, 30.0, 10.0);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert_eq!(a.overlaps(&c), c.overlaps(&a));
    }

    #[test]
    fn test_overlaps_self() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0);
        let right = BBox::new(10.0, 0.0, 20.0, 10.0);
        let below = BBox::new(0.0, 10.0, 10.0, 20.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_overlaps_one_axis_only() {
        // Overlapping horizontally but disjoint vertically
        let a = BBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BBox::new(5.0, 20.0, 15.0, 30.0);
        assert!(!a.overlaps(&b));
    }
}
