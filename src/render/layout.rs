//! Badge geometry
//!
//! The badge is designed on a 64x64 grid: a black disc of radius 28, a red
//! pennant pointing right, and a dark pole along the pennant's hoist.

use super::shapes::{Disc, Rect, Shape, Triangle};
use crate::core::{IconSize, BADGE_BLACK, FLAG_RED, POLE_GRAY};
use image::Rgba;

const DISC_RADIUS: u32 = 28;

/// Pennant corners: top of hoist, fly tip, bottom of hoist
const FLAG_POINTS: [(u32, u32); 3] = [(20, 22), (44, 32), (20, 42)];

const POLE_LEFT: u32 = 18;
const POLE_TOP: u32 = 22;
const POLE_WIDTH: u32 = 3;
const POLE_HEIGHT: u32 = 20;

/// Resolved pixel geometry of the badge for one canvas size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeLayout {
    pub disc: Disc,
    pub flag: Triangle,
    pub pole: Rect,
}

impl BadgeLayout {
    pub fn for_size(size: IconSize) -> Self {
        let scale = size.scale();
        let point = |(x, y): (u32, u32)| (scale.px(x), scale.px(y));

        let disc = Disc::new(
            (size.width / 2) as i64,
            (size.height / 2) as i64,
            scale.px(DISC_RADIUS),
        );
        let flag = Triangle::new(
            point(FLAG_POINTS[0]),
            point(FLAG_POINTS[1]),
            point(FLAG_POINTS[2]),
        );
        // Below 22px the pole would vanish, keep it one pixel wide
        let pole = Rect::from_span(
            scale.px(POLE_LEFT),
            scale.px(POLE_TOP),
            scale.px(POLE_WIDTH).max(1),
            scale.px(POLE_HEIGHT),
        );

        Self { disc, flag, pole }
    }

    /// Shapes in paint order. Later entries cover earlier ones.
    pub fn layers(&self) -> [(&dyn Shape, Rgba<u8>); 3] {
        [
            (&self.disc, BADGE_BLACK),
            (&self.flag, FLAG_RED),
            (&self.pole, POLE_GRAY),
        ]
    }
}
