//! Dartboard geometry: hit classification and the wedge shapes used to draw it.
//!
//! This crate is pure math with no browser dependencies, so both the wasm
//! widget and native tests consume it directly. Classification and rendering
//! share one angular model: 0° at 12 o'clock, increasing clockwise, with
//! sector index `i` covering `[i * 18°, (i + 1) * 18°)`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`radii`] | Validated ring radii (fractions) and their pixel-space form |
//! | [`sector`] | Sector label order and the angle-to-sector mapping |
//! | [`classify`] | Point-to-[`Hit`] classification, scoring, highlight zones |
//! | [`wedge`] | Annular wedge boundaries and drawable path segments |

pub mod classify;
pub mod radii;
pub mod sector;
pub mod wedge;

pub use classify::{Hit, Point, Ring, Zone, classify, score_for};
pub use radii::{PixelRadii, RadiiConfig, RawRadii};
pub use sector::{SECTOR_ANGLE_DEG, SECTOR_COUNT, STANDARD_ORDER, SectorOrder};
pub use wedge::{PathSeg, Wedge, polar_point, wedge_boundary};

/// Error returned when a radii set or sector order violates its invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A radius fraction is NaN or infinite.
    #[error("radius {name} is not a finite number")]
    NotFinite { name: &'static str },
    /// A radius fraction falls outside `(0, 1]`.
    #[error("radius {name} = {value} is outside (0, 1]")]
    OutOfRange { name: &'static str, value: f64 },
    /// Two adjacent radii are not strictly increasing.
    #[error("radius {inner} ({inner_value}) must be smaller than {outer} ({outer_value})")]
    NotIncreasing {
        inner: &'static str,
        inner_value: f64,
        outer: &'static str,
        outer_value: f64,
    },
    /// The sector order does not have exactly 20 entries.
    #[error("sector order has {0} entries, expected 20")]
    SectorCount(usize),
    /// A sector label falls outside `1..=20`.
    #[error("sector label {0} is outside 1..=20")]
    SectorLabel(u8),
    /// A sector label appears more than once.
    #[error("sector label {0} appears more than once")]
    DuplicateSector(u8),
}
