//! Conversion from PDF color components to spreadsheet fill codes.
//!
//! Fill codes are 8-hex-digit ARGB strings (`FFrrggbb`, alpha fixed to
//! opaque), the format spreadsheet writers expect for solid cell fills.

/// Encode 8-bit RGB channels as an opaque `FFrrggbb` code.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("FF{r:02X}{g:02X}{b:02X}")
}

/// Convert a PDF color component array to an `FFrrggbb` code.
///
/// Accepts a 1-element grayscale fraction (replicated to R=G=B) or a
/// 3-or-more-element RGB fraction array, each component in [0, 1].
/// Returns `None` for empty or malformed input (e.g. a 2-element array).
pub fn color_to_hex(components: &[f64]) -> Option<String> {
    let (r, g, b) = match components {
        [] => return None,
        [gray] => (*gray, *gray, *gray),
        [r, g, b, ..] => (*r, *g, *b),
        _ => return None,
    };
    Some(rgb_to_hex(channel(r), channel(g), channel(b)))
}

/// Scale a [0, 1] fraction to an 8-bit channel, clamped.
fn channel(fraction: f64) -> u8 {
    (fraction * 255.0).round().clamp(0.0, 255.0) as u8
}
