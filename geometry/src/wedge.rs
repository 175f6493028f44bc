//! Annular wedges: the drawable counterpart of a sector/band classification.
//!
//! A wedge's angular span comes from [`sector_span`], the same function that
//! defines which sector a classified angle falls in.

#[cfg(test)]
#[path = "wedge_test.rs"]
mod wedge_test;

use crate::classify::Point;
use crate::sector::{normalize_clock_deg, sector_span};

/// One step of a closed outline. Arc angles are clock degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSeg {
    MoveTo(Point),
    LineTo(Point),
    /// Arc around `center`. The current point is joined to the arc start.
    Arc { center: Point, radius: f64, start_deg: f64, end_deg: f64, clockwise: bool },
    Close,
}

/// Sector wedge between two radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub sector_index: usize,
    pub start_deg: f64,
    pub end_deg: f64,
    pub inner: f64,
    pub outer: f64,
}

/// Boundary of sector `sector_index` between `inner` and `outer` radii.
#[must_use]
pub fn wedge_boundary(sector_index: usize, inner: f64, outer: f64) -> Wedge {
    let (start_deg, end_deg) = sector_span(sector_index);
    Wedge { sector_index, start_deg, end_deg, inner, outer }
}

/// Point at `radius` from `center` along a clock angle.
#[must_use]
pub fn polar_point(center: Point, radius: f64, angle_deg: f64) -> Point {
    let a = (angle_deg - 90.0).to_radians();
    Point::new(radius.mul_add(a.cos(), center.x), radius.mul_add(a.sin(), center.y))
}

impl Wedge {
    /// Corners in drawing order: outer start, outer end, inner end, inner start.
    #[must_use]
    pub fn corners(&self, center: Point) -> [Point; 4] {
        [
            polar_point(center, self.outer, self.start_deg),
            polar_point(center, self.outer, self.end_deg),
            polar_point(center, self.inner, self.end_deg),
            polar_point(center, self.inner, self.start_deg),
        ]
    }

    /// Closed outline: radial edge out, outer arc clockwise, radial edge in,
    /// inner arc back.
    #[must_use]
    pub fn path(&self, center: Point) -> Vec<PathSeg> {
        let [outer_start, _, inner_end, inner_start] = self.corners(center);
        vec![
            PathSeg::MoveTo(inner_start),
            PathSeg::LineTo(outer_start),
            PathSeg::Arc {
                center,
                radius: self.outer,
                start_deg: self.start_deg,
                end_deg: self.end_deg,
                clockwise: true,
            },
            PathSeg::LineTo(inner_end),
            PathSeg::Arc {
                center,
                radius: self.inner,
                start_deg: self.end_deg,
                end_deg: self.start_deg,
                clockwise: false,
            },
            PathSeg::Close,
        ]
    }

    /// Whether a clock angle lies in `[start, end)`.
    #[must_use]
    pub fn contains_angle(&self, angle_deg: f64) -> bool {
        let a = normalize_clock_deg(angle_deg);
        a >= self.start_deg && a < self.end_deg
    }

    /// Whether a board-centered distance lies within `[inner, outer]`.
    #[must_use]
    pub fn contains_distance(&self, distance: f64) -> bool {
        distance >= self.inner && distance <= self.outer
    }
}
