//! tabtint-core: Backend-independent data types and algorithms.
//!
//! This crate provides the foundational types (BBox, RawBox, TableMatrix,
//! ColoredRegion) and the highlight mapping engine used by tabtint. It has
//! no dependency on any PDF backend or raster library — page content arrives
//! as plain records and results leave as plain matrices.

mod color;
mod geometry;
mod highlight;
mod matrix;
mod page;
mod region;

pub use color::{color_to_hex, rgb_to_hex};
pub use geometry::{BBox, RawBox};
pub use highlight::{collect_colored_regions, map_highlights};
pub use matrix::TableMatrix;
pub use page::{AnnotRecord, AxisMeta, DetectedTable, PageContent, RectRecord};
pub use region::{ColoredRegion, RegionSource};
