//! Sector labels and the clock-angle to sector mapping.
//!
//! Angles here are "clock degrees": 0° at 12 o'clock, increasing clockwise.

#[cfg(test)]
#[path = "sector_test.rs"]
mod sector_test;

use serde::{Deserialize, Serialize};

use crate::GeometryError;

/// Number of numbered sectors on the board.
pub const SECTOR_COUNT: usize = 20;

/// Angular width of one sector in degrees.
pub const SECTOR_ANGLE_DEG: f64 = 360.0 / SECTOR_COUNT as f64;

/// Standard clockwise label order starting at the top.
pub const STANDARD_ORDER: [u8; SECTOR_COUNT] = [20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5];

/// A permutation of `1..=20` assigning a label to each sector index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct SectorOrder([u8; SECTOR_COUNT]);

impl Default for SectorOrder {
    fn default() -> Self {
        Self(STANDARD_ORDER)
    }
}

impl TryFrom<Vec<u8>> for SectorOrder {
    type Error = GeometryError;

    fn try_from(labels: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(&labels)
    }
}

impl From<SectorOrder> for Vec<u8> {
    fn from(order: SectorOrder) -> Self {
        order.0.to_vec()
    }
}

impl SectorOrder {
    /// Validate a label sequence.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] unless `labels` is a permutation of `1..=20`.
    pub fn new(labels: &[u8]) -> Result<Self, GeometryError> {
        if labels.len() != SECTOR_COUNT {
            return Err(GeometryError::SectorCount(labels.len()));
        }
        let mut seen = [false; SECTOR_COUNT];
        let mut out = [0_u8; SECTOR_COUNT];
        for (slot, &label) in out.iter_mut().zip(labels) {
            if !(1..=20).contains(&label) {
                return Err(GeometryError::SectorLabel(label));
            }
            let idx = usize::from(label - 1);
            if seen[idx] {
                return Err(GeometryError::DuplicateSector(label));
            }
            seen[idx] = true;
            *slot = label;
        }
        Ok(Self(out))
    }

    /// Label of the sector at `index` (taken modulo 20).
    #[must_use]
    pub fn label(&self, index: usize) -> u8 {
        self.0[index % SECTOR_COUNT]
    }

    #[must_use]
    pub fn labels(&self) -> &[u8; SECTOR_COUNT] {
        &self.0
    }
}

/// Wrap any angle into `[0, 360)`. Non-finite angles become 0.
#[must_use]
pub fn normalize_clock_deg(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped.is_finite() && wrapped < 360.0 { wrapped } else { 0.0 }
}

/// Sector index covering a clock angle. Non-finite angles map to index 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sector_index(angle_deg: f64) -> usize {
    let normalized = normalize_clock_deg(angle_deg);
    ((normalized / SECTOR_ANGLE_DEG).floor() as usize) % SECTOR_COUNT
}

/// Half-open clock-angle span `[start, end)` of sector `index`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sector_span(index: usize) -> (f64, f64) {
    let i = (index % SECTOR_COUNT) as f64;
    (i * SECTOR_ANGLE_DEG, (i + 1.0) * SECTOR_ANGLE_DEG)
}

/// Clock angle at the middle of sector `index`, where its label sits.
#[must_use]
pub fn sector_center(index: usize) -> f64 {
    let (start, end) = sector_span(index);
    (start + end) * 0.5
}
