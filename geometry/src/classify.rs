//! Point classification: board-centered coordinates to a scored [`Hit`].

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::radii::PixelRadii;
use crate::sector::{SectorOrder, normalize_clock_deg, sector_index};
use crate::wedge::{Wedge, wedge_boundary};

/// A point in surface pixels. Depending on context the origin is either the
/// surface's top-left corner or the board center.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Radial classification band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ring {
    InnerBull,
    OuterBull,
    Single,
    Triple,
    Double,
    Miss,
}

impl Ring {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InnerBull => "inner-bull",
            Self::OuterBull => "outer-bull",
            Self::Single => "single",
            Self::Triple => "triple",
            Self::Double => "double",
            Self::Miss => "miss",
        }
    }

    /// Whether hits in this ring carry a sector number.
    #[must_use]
    pub fn has_sector(self) -> bool {
        matches!(self, Self::Single | Self::Triple | Self::Double)
    }

    /// Score multiplier applied to the sector number.
    #[must_use]
    pub fn multiplier(self) -> u32 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
            Self::InnerBull | Self::OuterBull | Self::Miss => 0,
        }
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a single click.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hit {
    /// Sector number; `None` for bulls and misses.
    pub sector: Option<u8>,
    pub ring: Ring,
    /// Pixels from the board center.
    pub distance: f64,
    /// Clock angle in `[0, 360)`.
    pub angle_deg: f64,
    /// Sector index under the click, kept even when `sector` is `None`.
    pub sector_index: usize,
}

impl Hit {
    #[must_use]
    pub fn score(&self) -> u32 {
        score_for(self)
    }
}

/// Classify a board-centered point.
///
/// Ring tests run in a fixed order and the first match wins. The double and
/// triple bands are matched by absolute range, so "single" only covers what
/// neither band claims inside the double ring's inner edge. Total for any
/// input: non-finite coordinates fall through to [`Ring::Miss`].
#[must_use]
pub fn classify(point: Point, radii: &PixelRadii, order: &SectorOrder) -> Hit {
    let distance = point.x.hypot(point.y);
    let theta = point.y.atan2(point.x);
    let angle_deg = normalize_clock_deg(theta.to_degrees() + 90.0 + 360.0);
    let index = sector_index(angle_deg);

    let ring = if distance <= radii.inner_bull {
        Ring::InnerBull
    } else if distance <= radii.outer_bull {
        Ring::OuterBull
    } else if distance >= radii.double_inner && distance <= radii.double_outer {
        Ring::Double
    } else if distance >= radii.triple_inner && distance <= radii.triple_outer {
        Ring::Triple
    } else if distance < radii.double_inner {
        Ring::Single
    } else {
        Ring::Miss
    };

    Hit {
        sector: ring.has_sector().then(|| order.label(index)),
        ring,
        distance,
        angle_deg,
        sector_index: index,
    }
}

/// Points scored by a hit.
#[must_use]
pub fn score_for(hit: &Hit) -> u32 {
    match hit.ring {
        Ring::InnerBull => 50,
        Ring::OuterBull => 25,
        Ring::Miss => 0,
        ring => hit.sector.map_or(0, |s| u32::from(s) * ring.multiplier()),
    }
}

/// Region a highlight covers, in board-centered pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Zone {
    /// A disk centered on the board.
    Disk { radius: f64 },
    /// One sector, bounded by the matched band.
    Wedge(Wedge),
}

impl Hit {
    /// The region this hit should highlight, or `None` for a miss.
    ///
    /// A single hit picks whichever single band (inside or outside the
    /// triple ring) the click actually landed in.
    #[must_use]
    pub fn zone(&self, radii: &PixelRadii) -> Option<Zone> {
        let (inner, outer) = match self.ring {
            Ring::InnerBull => return Some(Zone::Disk { radius: radii.inner_bull }),
            Ring::OuterBull => return Some(Zone::Disk { radius: radii.outer_bull }),
            Ring::Miss => return None,
            Ring::Triple => (radii.triple_inner, radii.triple_outer),
            Ring::Double => (radii.double_inner, radii.double_outer),
            Ring::Single if self.distance < radii.triple_inner => (radii.outer_bull, radii.triple_inner),
            Ring::Single => (radii.triple_outer, radii.double_inner),
        };
        Some(Zone::Wedge(wedge_boundary(self.sector_index, inner, outer)))
    }
}
