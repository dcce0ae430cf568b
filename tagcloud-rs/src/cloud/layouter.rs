use anyhow::{Result, ensure};
use log::debug;

use crate::cloud::LayouterConfig;
use crate::curves::Curve;
use crate::geometry::CollidesWith;
use crate::geometry::primitives::{Point, Rect, Size};

/// Incrementally packs rectangles around the origin without overlaps,
/// prioritizing proximity to the center.
///
/// Each call to [`Self::put_next_rectangle`] walks the curve outward from
/// angle 0 and accepts the first position where a rectangle of the requested
/// size, centered on the curve point, does not collide with any previously
/// placed rectangle. The accepted rectangle is then slid back toward the
/// origin along the ray through its center until the step before the first
/// collision (or the origin itself), and committed.
///
/// The search always terminates: the curve is unbounded and centrally
/// expanding, so a free slot exists for every valid size. One instance per
/// cloud; calls must be serialized by the caller.
pub struct CircularCloudLayouter<C: Curve> {
    curve: C,
    config: LayouterConfig,
    rects: Vec<Rect>,
}

impl<C: Curve> CircularCloudLayouter<C> {
    pub fn new(curve: C) -> Self {
        Self::with_config(curve, LayouterConfig::default())
            .expect("default layouter config is valid")
    }

    pub fn with_config(curve: C, config: LayouterConfig) -> Result<Self> {
        ensure!(
            config.angle_step > 0.0 && config.angle_step.is_finite(),
            "angle step must be positive, got {}",
            config.angle_step
        );
        ensure!(
            config.compaction_step > 0.0 && config.compaction_step.is_finite(),
            "compaction step must be positive, got {}",
            config.compaction_step
        );
        Ok(CircularCloudLayouter {
            curve,
            config,
            rects: vec![],
        })
    }

    /// Places the next rectangle and returns it.
    ///
    /// Fails on non-positive dimensions without mutating the collection.
    pub fn put_next_rectangle(&mut self, size: Size) -> Result<Rect> {
        ensure!(
            size.width > 0 && size.height > 0,
            "rectangle dimensions must be positive, got {}x{}",
            size.width,
            size.height
        );

        let mut angle = 0.0;
        let mut steps = 0usize;
        let accepted = loop {
            let candidate = Rect::centered_at(self.curve.get_point(angle), size);
            if !self.collides_with_any(&candidate) {
                break candidate;
            }
            angle += self.config.angle_step;
            steps += 1;
        };

        let placed = self.compact(accepted);
        debug!(
            "placed {}x{} at ({}, {}) after {steps} curve steps",
            size.width, size.height, placed.x_min, placed.y_min
        );
        self.rects.push(placed);
        Ok(placed)
    }

    /// Ordered, read-only view of all placed rectangles (placement order,
    /// not spatial order).
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Smallest axis-aligned rectangle containing all placed rectangles,
    /// or `None` while the cloud is empty.
    pub fn bounding_extent(&self) -> Option<Rect> {
        self.rects.iter().copied().reduce(Rect::bounding_rect)
    }

    fn collides_with_any(&self, candidate: &Rect) -> bool {
        self.rects.iter().any(|r| r.collides_with(candidate))
    }

    /// Slides `rect` toward the origin along the ray through its center,
    /// in `compaction_step` increments, and returns the last collision-free
    /// position. Tightens the cloud beyond what the curve step alone
    /// achieves.
    fn compact(&self, rect: Rect) -> Rect {
        let (cx, cy) = rect.centroid();
        let dist = f64::hypot(cx, cy);
        if dist == 0.0 {
            return rect;
        }
        let (ux, uy) = (cx / dist, cy / dist);
        let size = rect.size();

        let mut best = rect;
        let mut d = dist - self.config.compaction_step;
        loop {
            let d_clamped = d.max(0.0);
            let center = Point(
                (ux * d_clamped).round() as i32,
                (uy * d_clamped).round() as i32,
            );
            let candidate = Rect::centered_at(center, size);
            if self.collides_with_any(&candidate) {
                break;
            }
            best = candidate;
            if d_clamped == 0.0 {
                break;
            }
            d -= self.config.compaction_step;
        }
        best
    }
}
