//! Badge colors

use image::Rgba;

/// Canvas background
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Circular badge behind the flag (#000000)
pub const BADGE_BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Triangular flag (#dc2626)
pub const FLAG_RED: Rgba<u8> = Rgba([220, 38, 38, 255]);

/// Flag pole (#333333)
pub const POLE_GRAY: Rgba<u8> = Rgba([51, 51, 51, 255]);

/// Format the RGB part of a color as `#rrggbb`
pub fn hex(color: Rgba<u8>) -> String {
    let [r, g, b, _] = color.0;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
