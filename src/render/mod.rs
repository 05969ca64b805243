//! Icon rasterizer
//!
//! Draws the flag badge onto a fresh transparent canvas at any pixel size.

mod layout;
mod shapes;

pub use layout::BadgeLayout;

use crate::core::{IconSize, TRANSPARENT};
use image::RgbaImage;

/// Render the badge at `width` x `height`.
///
/// Pure and deterministic: the same size always yields the same pixels.
pub fn render(width: u32, height: u32) -> RgbaImage {
    let size = IconSize::new(width, height);
    let mut canvas = RgbaImage::from_pixel(width, height, TRANSPARENT);

    let layout = BadgeLayout::for_size(size);
    for (shape, color) in layout.layers() {
        shape.fill(&mut canvas, color);
    }

    tracing::debug!(size = %size, scale = size.scale().factor(), "rendered badge");
    canvas
}
