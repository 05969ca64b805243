//! Filled raster primitives
//!
//! Coordinates are pixel indices, so a shape whose bounds run from 4 to 5
//! covers two columns. All coverage tests are exact integer math.

use image::{Rgba, RgbaImage};

/// Inclusive pixel bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl Bounds {
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Intersect with a `width` x `height` canvas, `None` when nothing is left
    pub fn clip(&self, width: u32, height: u32) -> Option<Bounds> {
        let clipped = Bounds {
            left: self.left.max(0),
            top: self.top.max(0),
            right: self.right.min(width as i64 - 1),
            bottom: self.bottom.min(height as i64 - 1),
        };
        (clipped.left <= clipped.right && clipped.top <= clipped.bottom).then_some(clipped)
    }
}

/// A filled shape that can be painted onto a canvas
pub trait Shape {
    fn bounds(&self) -> Bounds;

    /// Whether pixel `(x, y)` is covered. Only meaningful inside `bounds()`.
    fn covers(&self, x: i64, y: i64) -> bool;

    fn contains(&self, x: i64, y: i64) -> bool {
        self.bounds().contains(x, y) && self.covers(x, y)
    }

    /// Paint every covered pixel with `color`, replacing what was there
    fn fill(&self, canvas: &mut RgbaImage, color: Rgba<u8>) {
        let Some(area) = self.bounds().clip(canvas.width(), canvas.height()) else {
            return;
        };
        for y in area.top..=area.bottom {
            for x in area.left..=area.right {
                if self.covers(x, y) {
                    canvas.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}

/// Filled circle spanning `2 * radius + 1` pixels, centered on a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disc {
    pub cx: i64,
    pub cy: i64,
    pub radius: i64,
}

impl Disc {
    pub fn new(cx: i64, cy: i64, radius: i64) -> Self {
        Self { cx, cy, radius }
    }
}

impl Shape for Disc {
    fn bounds(&self) -> Bounds {
        Bounds {
            left: self.cx - self.radius,
            top: self.cy - self.radius,
            right: self.cx + self.radius,
            bottom: self.cy + self.radius,
        }
    }

    fn covers(&self, x: i64, y: i64) -> bool {
        // Pixel centers within radius + 0.5 of the center pixel's center, doubled to stay integral
        let dx = 2 * (x - self.cx);
        let dy = 2 * (y - self.cy);
        let diameter = 2 * self.radius + 1;
        dx * dx + dy * dy <= diameter * diameter
    }
}

/// Closed triangle; edge pixels count as covered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub vertices: [(i64, i64); 3],
}

impl Triangle {
    pub fn new(a: (i64, i64), b: (i64, i64), c: (i64, i64)) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    fn edge(from: (i64, i64), to: (i64, i64), x: i64, y: i64) -> i64 {
        (to.0 - from.0) * (y - from.1) - (to.1 - from.1) * (x - from.0)
    }
}

impl Shape for Triangle {
    fn bounds(&self) -> Bounds {
        let [a, b, c] = self.vertices;
        Bounds {
            left: a.0.min(b.0).min(c.0),
            top: a.1.min(b.1).min(c.1),
            right: a.0.max(b.0).max(c.0),
            bottom: a.1.max(b.1).max(c.1),
        }
    }

    fn covers(&self, x: i64, y: i64) -> bool {
        let [a, b, c] = self.vertices;
        let e0 = Self::edge(a, b, x, y);
        let e1 = Self::edge(b, c, x, y);
        let e2 = Self::edge(c, a, x, y);
        (e0 >= 0 && e1 >= 0 && e2 >= 0) || (e0 <= 0 && e1 <= 0 && e2 <= 0)
    }
}

/// Axis-aligned filled rectangle with inclusive edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub bounds: Bounds,
}

impl Rect {
    /// Rectangle from an origin and a span. Both ends are inclusive, so a
    /// span of `width` covers `width + 1` columns.
    pub fn from_span(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self {
            bounds: Bounds {
                left,
                top,
                right: left + width,
                bottom: top + height,
            },
        }
    }
}

impl Shape for Rect {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn covers(&self, _x: i64, _y: i64) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Rgba<u8> = Rgba([1, 2, 3, 255]);

    fn covered(canvas: &RgbaImage) -> usize {
        canvas.pixels().filter(|p| **p == INK).count()
    }

    #[test]
    fn test_bounds_clip() {
        let b = Bounds {
            left: -3,
            top: 2,
            right: 40,
            bottom: 5,
        };
        assert_eq!(
            b.clip(16, 16),
            Some(Bounds {
                left: 0,
                top: 2,
                right: 15,
                bottom: 5
            })
        );

        let outside = Bounds {
            left: 20,
            top: 0,
            right: 30,
            bottom: 3,
        };
        assert_eq!(outside.clip(16, 16), None);
        assert_eq!(b.clip(0, 0), None);
    }

    #[test]
    fn test_rect_span_is_inclusive() {
        let rect = Rect::from_span(4, 5, 1, 5);
        let mut canvas = RgbaImage::new(16, 16);
        rect.fill(&mut canvas, INK);

        assert_eq!(covered(&canvas), 2 * 6);
        assert_eq!(*canvas.get_pixel(4, 5), INK);
        assert_eq!(*canvas.get_pixel(5, 10), INK);
        assert_ne!(*canvas.get_pixel(6, 10), INK);
        assert_ne!(*canvas.get_pixel(4, 11), INK);
    }

    #[test]
    fn test_disc_extent() {
        let disc = Disc::new(32, 32, 28);
        // Widest row spans exactly 2r + 1 pixels
        assert!(disc.contains(4, 32));
        assert!(disc.contains(60, 32));
        assert!(!disc.contains(3, 32));
        assert!(!disc.contains(61, 32));
        assert!(disc.contains(32, 4));
        assert!(!disc.contains(32, 3));
        // Corners of the bounding box stay outside
        assert!(!disc.contains(4, 4));
    }

    #[test]
    fn test_zero_radius_disc_is_one_pixel() {
        let mut canvas = RgbaImage::new(3, 3);
        Disc::new(1, 1, 0).fill(&mut canvas, INK);
        assert_eq!(covered(&canvas), 1);
        assert_eq!(*canvas.get_pixel(1, 1), INK);
    }

    #[test]
    fn test_triangle_includes_edges() {
        let tri = Triangle::new((20, 22), (44, 32), (20, 42));
        assert!(tri.contains(20, 22));
        assert!(tri.contains(20, 32));
        assert!(tri.contains(44, 32));
        assert!(tri.contains(30, 32));
        assert!(!tri.contains(19, 32));
        assert!(!tri.contains(44, 31));
        assert!(!tri.contains(40, 25));
    }

    #[test]
    fn test_triangle_winding_does_not_matter() {
        let cw = Triangle::new((20, 22), (44, 32), (20, 42));
        let ccw = Triangle::new((20, 42), (44, 32), (20, 22));
        for y in 20..45 {
            for x in 18..46 {
                assert_eq!(cw.contains(x, y), ccw.contains(x, y), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_degenerate_triangle_stays_in_bounds() {
        let mut canvas = RgbaImage::new(4, 4);
        Triangle::new((0, 0), (0, 0), (0, 0)).fill(&mut canvas, INK);
        assert_eq!(covered(&canvas), 1);
    }

    #[test]
    fn test_fill_clips_to_canvas() {
        let mut canvas = RgbaImage::new(8, 8);
        Disc::new(4, 4, 10).fill(&mut canvas, INK);
        assert_eq!(covered(&canvas), 64);
    }
}
