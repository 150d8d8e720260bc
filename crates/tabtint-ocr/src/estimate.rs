//! Highlight color estimation from pixel statistics.

use image::RgbImage;
use tabtint_core::{BBox, rgb_to_hex};

/// Minimum saturation for a region to count as a highlight.
///
/// Plain white, gray, and black backgrounds all sit near zero saturation;
/// real highlight fills (yellow, green, pink markers) sit well above it.
pub const SATURATION_THRESHOLD: f64 = 0.25;

/// Minimum mean channel brightness for a region to count as a highlight.
///
/// Dark regions are ink or borders, not background fills.
pub const BRIGHTNESS_THRESHOLD: f64 = 120.0;

/// Outward padding applied to the sampled box, in pixels.
///
/// Word boxes hug the glyphs; the pad pulls in the surrounding background
/// the highlight actually covers.
pub const CROP_PAD_PX: u32 = 2;

/// Estimate the highlight color behind a pixel region.
///
/// Pads `bbox` outward by [`CROP_PAD_PX`] (clamped to image bounds), then
/// computes the mean R/G/B over the crop. The region is classified as a
/// highlight only if its saturation `(max-min)/max` exceeds
/// [`SATURATION_THRESHOLD`] and its brightness `mean(R,G,B)` exceeds
/// [`BRIGHTNESS_THRESHOLD`]. Returns the mean color as an `FFrrggbb` code,
/// or `None` for non-highlight or degenerate (zero-area) regions.
pub fn estimate_highlight_color(image: &RgbImage, bbox: &BBox) -> Option<String> {
    let (width, height) = image.dimensions();

    let pad = f64::from(CROP_PAD_PX);
    let left = (bbox.x0 - pad).max(0.0) as u32;
    let top = (bbox.top - pad).max(0.0) as u32;
    let right = ((bbox.x1 + pad).max(0.0) as u32).min(width);
    let bottom = ((bbox.bottom + pad).max(0.0) as u32).min(height);
    if left >= right || top >= bottom {
        return None;
    }

    let mut sum = [0.0f64; 3];
    for y in top..bottom {
        for x in left..right {
            let px = image.get_pixel(x, y);
            sum[0] += f64::from(px[0]);
            sum[1] += f64::from(px[1]);
            sum[2] += f64::from(px[2]);
        }
    }
    let count = f64::from(right - left) * f64::from(bottom - top);
    let mean = [sum[0] / count, sum[1] / count, sum[2] / count];

    let brightness = (mean[0] + mean[1] + mean[2]) / 3.0;
    let max = mean[0].max(mean[1]).max(mean[2]);
    let min = mean[0].min(mean[1]).min(mean[2]);
    let saturation = if max > 0.0 { (max - min) / max } else { 0.0 };

    if saturation > SATURATION_THRESHOLD && brightness > BRIGHTNESS_THRESHOLD {
        // Pixel means are already 0–255: round, don't rescale.
        Some(rgb_to_hex(
            mean[0].round() as u8,
            mean[1].round() as u8,
            mean[2].round() as u8,
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn uniform_image(w: u32, h: u32, color: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb(color))
    }

    #[test]
    fn test_white_region_is_not_a_highlight() {
        let image = uniform_image(50, 50, [255, 255, 255]);
        let bbox = BBox::new(10.0, 10.0, 40.0, 40.0);
        assert_eq!(estimate_highlight_color(&image, &bbox), None);
    }

    #[test]
    fn test_black_region_is_not_a_highlight() {
        let image = uniform_image(50, 50, [0, 0, 0]);
        let bbox = BBox::new(10.0, 10.0, 40.0, 40.0);
        assert_eq!(estimate_highlight_color(&image, &bbox), None);
    }

    #[test]
    fn test_gray_region_is_not_a_highlight() {
        // Bright but unsaturated
        let image = uniform_image(50, 50, [200, 200, 200]);
        let bbox = BBox::new(10.0, 10.0, 40.0, 40.0);
        assert_eq!(estimate_highlight_color(&image, &bbox), None);
    }

    #[test]
    fn test_yellow_region_is_a_highlight() {
        // saturation = (255-170)/255 = 0.33, brightness = 226.7
        let image = uniform_image(50, 50, [255, 255, 170]);
        let bbox = BBox::new(10.0, 10.0, 40.0, 40.0);
        assert_eq!(
            estimate_highlight_color(&image, &bbox).as_deref(),
            Some("FFFFFFAA")
        );
    }

    #[test]
    fn test_dark_saturated_region_is_not_a_highlight() {
        // Saturated but too dark (brightness ~56.7)
        let image = uniform_image(50, 50, [170, 0, 0]);
        let bbox = BBox::new(10.0, 10.0, 40.0, 40.0);
        assert_eq!(estimate_highlight_color(&image, &bbox), None);
    }

    #[test]
    fn test_box_clamped_to_image_bounds() {
        let image = uniform_image(20, 20, [255, 255, 170]);
        // Box extends past every edge; clamping keeps it valid
        let bbox = BBox::new(-10.0, -10.0, 100.0, 100.0);
        assert_eq!(
            estimate_highlight_color(&image, &bbox).as_deref(),
            Some("FFFFFFAA")
        );
    }

    #[test]
    fn test_zero_area_crop_returns_none() {
        let image = uniform_image(20, 20, [255, 255, 170]);
        // Entirely outside the image
        let bbox = BBox::new(100.0, 100.0, 120.0, 120.0);
        assert_eq!(estimate_highlight_color(&image, &bbox), None);
    }

    #[test]
    fn test_pad_pulls_in_surrounding_background() {
        // Yellow background with a black "glyph" exactly under the box;
        // the 2px pad samples enough yellow to keep saturation up.
        let mut image = uniform_image(30, 30, [255, 255, 100]);
        for y in 12..18 {
            for x in 12..18 {
                image.put_pixel(x, y, Rgb([40, 40, 40]));
            }
        }
        let bbox = BBox::new(12.0, 12.0, 18.0, 18.0);
        // With the pad, the 10x10 crop is mostly yellow
        assert!(estimate_highlight_color(&image, &bbox).is_some());
    }
}
