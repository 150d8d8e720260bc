//! The highlight mapping engine.
//!
//! Geometrically correlates a vector-detected table's cells with colored
//! rectangles and Highlight annotations on the page, producing a fill-code
//! matrix aligned 1:1 with the table's extracted text matrix. Every lookup
//! failure (missing coordinates, unresolvable row/column metadata,
//! unconvertible colors) degrades to "no highlight" for that unit; nothing
//! in here aborts table-level processing.

use crate::color::color_to_hex;
use crate::geometry::BBox;
use crate::page::{AxisMeta, DetectedTable, PageContent};
use crate::region::{ColoredRegion, RegionSource};

/// Collect candidate colored regions from a page.
///
/// Takes every rectangle carrying a fill or stroke color (fill preferred)
/// and every Highlight-subtype annotation (using the annotation's color and
/// its own box, with `y1`/`y0` standing in for `top`/`bottom` when absent).
/// Records whose color or box cannot be resolved are dropped — they could
/// never win a cell match anyway.
pub fn collect_colored_regions(page: &PageContent) -> Vec<ColoredRegion> {
    let mut regions = Vec::new();

    for rect in &page.rects {
        let color = rect
            .fill_color
            .as_deref()
            .and_then(color_to_hex)
            .or_else(|| rect.stroke_color.as_deref().and_then(color_to_hex));
        if let (Some(color), Some(bbox)) = (color, BBox::from_raw(&rect.bbox)) {
            regions.push(ColoredRegion {
                bbox,
                color,
                source: RegionSource::Rect,
            });
        }
    }

    for annot in &page.annots {
        if !annot.subtype.eq_ignore_ascii_case("highlight") {
            continue;
        }
        let color = annot.color.as_deref().and_then(color_to_hex);
        if let (Some(color), Some(bbox)) = (color, BBox::from_raw(&annot.bbox)) {
            regions.push(ColoredRegion {
                bbox,
                color,
                source: RegionSource::Annotation,
            });
        }
    }

    regions
}

/// Map page highlights onto a table's cells.
///
/// Returns a fill matrix with one entry per extracted cell (`None` = no
/// highlight). The matrix spans `rows × max(row length)` to tolerate jagged
/// source rows. For each resolvable cell box, candidate regions are scanned
/// in their original page order and the first overlapping one wins.
pub fn map_highlights(table: &DetectedTable, page: &PageContent) -> Vec<Vec<Option<String>>> {
    if table.data.is_empty() {
        return Vec::new();
    }

    let rows = table.data.len();
    let cols = table.data.iter().map(Vec::len).max().unwrap_or(0);
    let mut fills: Vec<Vec<Option<String>>> = vec![vec![None; cols]; rows];

    let regions = collect_colored_regions(page);
    if regions.is_empty() {
        return fills;
    }

    for (r_idx, row_cells) in table.data.iter().enumerate() {
        let Some((row_top, row_bottom)) = row_extent(&table.row_meta, r_idx) else {
            continue;
        };

        for c_idx in 0..row_cells.len() {
            let Some((x0, x1)) = col_extent(&table.col_meta, c_idx) else {
                continue;
            };
            let cell = BBox::new(x0, row_top, x1, row_bottom);

            for region in &regions {
                if cell.overlaps(&region.bbox) {
                    fills[r_idx][c_idx] = Some(region.color.clone());
                    break;
                }
            }
        }
    }

    fills
}

/// Resolve the vertical extent (top, bottom) of row `idx`.
pub fn row_extent(meta: &[AxisMeta], idx: usize) -> Option<(f64, f64)> {
    match meta.get(idx)? {
        AxisMeta::Boxed(raw) => {
            let bbox = BBox::from_raw(raw)?;
            Some((bbox.top, bbox.bottom))
        }
        AxisMeta::Quad(q) => Some((q[1], q[3])),
        AxisMeta::Edge(a) => edge_pair(*a, meta.get(idx + 1)?),
    }
}

/// Resolve the horizontal extent (left, right) of column `idx`.
pub fn col_extent(meta: &[AxisMeta], idx: usize) -> Option<(f64, f64)> {
    match meta.get(idx)? {
        AxisMeta::Boxed(raw) => {
            let bbox = BBox::from_raw(raw)?;
            Some((bbox.x0, bbox.x1))
        }
        AxisMeta::Quad(q) => Some((q[0], q[2])),
        AxisMeta::Edge(a) => edge_pair(*a, meta.get(idx + 1)?),
    }
}

/// Form an extent from two consecutive numeric boundaries, swapped into
/// ascending order. The successor must itself be a boundary.
fn edge_pair(a: f64, next: &AxisMeta) -> Option<(f64, f64)> {
    let AxisMeta::Edge(b) = next else {
        return None;
    };
    if a <= *b { Some((a, *b)) } else { Some((*b, a)) }
}
