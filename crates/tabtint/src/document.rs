//! Document model and the page rasterization capability.

use image::RgbImage;
use tabtint_core::PageContent;

/// An opened document: one [`PageContent`] per page, in page order.
///
/// All state is request-scoped; a document is created, processed, and
/// discarded within one extraction run.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub pages: Vec<PageContent>,
}

impl Document {
    pub fn new(pages: Vec<PageContent>) -> Self {
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Capability to render a page to pixels, injected into the pipeline.
///
/// The OCR fallback needs a raster of the page; how that raster is produced
/// (pdftoppm, an embedded renderer, a cache) is the backend's concern.
pub trait PageRasterizer {
    /// Render page `page_index` (0-based) at the given resolution.
    ///
    /// Returns `None` when the page cannot be rendered; the pipeline then
    /// contributes zero tables for that page.
    fn render(&self, page_index: usize, dpi: u32) -> Option<RgbImage>;
}

/// Rasterizer backed by pre-rendered page images.
///
/// Pages without a raster (vector pages, typically) hold `None`.
#[derive(Debug, Clone, Default)]
pub struct PrerenderedPages {
    images: Vec<Option<RgbImage>>,
}

impl PrerenderedPages {
    pub fn new(images: Vec<Option<RgbImage>>) -> Self {
        Self { images }
    }
}

impl PageRasterizer for PrerenderedPages {
    fn render(&self, page_index: usize, _dpi: u32) -> Option<RgbImage> {
        self.images.get(page_index).cloned().flatten()
    }
}

/// Rasterizer that renders nothing. Disables the OCR fallback entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRasterizer;

impl PageRasterizer for NoRasterizer {
    fn render(&self, _page_index: usize, _dpi: u32) -> Option<RgbImage> {
        None
    }
}
