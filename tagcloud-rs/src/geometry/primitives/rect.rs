use crate::geometry::CollidesWith;
use crate::geometry::primitives::{Point, Size};
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with integer edges. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl Rect {
    pub fn try_new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle of `size` whose center tracks `center`.
    /// Top-left corner = `center - (width / 2, height / 2)` (integer division),
    /// so for odd dimensions the extra pixel falls on the max side.
    pub fn centered_at(center: Point, size: Size) -> Self {
        let x_min = center.0 - size.width / 2;
        let y_min = center.1 - size.height / 2;
        Rect {
            x_min,
            y_min,
            x_max: x_min + size.width,
            y_max: y_min + size.height,
        }
    }

    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Exact geometric center; lands on half-pixels for odd dimensions.
    pub fn centroid(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) as f64 / 2.0,
            (self.y_min + self.y_max) as f64 / 2.0,
        )
    }

    /// Returns the smallest rectangle that contains both `a` and `b`.
    pub fn bounding_rect(a: Rect, b: Rect) -> Rect {
        Rect {
            x_min: i32::min(a.x_min, b.x_min),
            y_min: i32::min(a.y_min, b.y_min),
            x_max: i32::max(a.x_max, b.x_max),
            y_max: i32::max(a.y_max, b.y_max),
        }
    }
}

impl CollidesWith<Rect> for Rect {
    /// Open-interval overlap: both x- and y-intervals must overlap with
    /// positive length. Rectangles sharing only an edge or corner do not
    /// collide, which lets the layouter pack tags flush against each other.
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        i32::max(self.x_min, other.x_min) < i32::min(self.x_max, other.x_max)
            && i32::max(self.y_min, other.y_min) < i32::min(self.y_max, other.y_max)
    }
}
