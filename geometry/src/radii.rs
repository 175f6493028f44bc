//! Ring radii, expressed as fractions of the board's half-size.

#[cfg(test)]
#[path = "radii_test.rs"]
mod radii_test;

use serde::{Deserialize, Serialize};

use crate::GeometryError;

/// Unvalidated radii as they arrive from configuration.
///
/// Missing keys take the standard board's value. The legacy key names
/// (`tripleRingInner`, ...) are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRadii {
    pub inner_bull: f64,
    pub outer_bull: f64,
    #[serde(alias = "tripleRingInner")]
    pub triple_inner: f64,
    #[serde(alias = "tripleRingOuter")]
    pub triple_outer: f64,
    #[serde(alias = "doubleRingInner")]
    pub double_inner: f64,
    #[serde(alias = "doubleRingOuter")]
    pub double_outer: f64,
}

impl Default for RawRadii {
    fn default() -> Self {
        Self {
            inner_bull: 0.05,
            outer_bull: 0.12,
            triple_inner: 0.40,
            triple_outer: 0.47,
            double_inner: 0.85,
            double_outer: 0.95,
        }
    }
}

impl RawRadii {
    fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("innerBull", self.inner_bull),
            ("outerBull", self.outer_bull),
            ("tripleInner", self.triple_inner),
            ("tripleOuter", self.triple_outer),
            ("doubleInner", self.double_inner),
            ("doubleOuter", self.double_outer),
        ]
    }
}

/// Validated ring radii.
///
/// Invariant: every value is finite, lies in `(0, 1]`, and the sequence
/// inner bull < outer bull < triple inner < triple outer < double inner <
/// double outer is strictly increasing. `double_outer` is the playable edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRadii", into = "RawRadii")]
pub struct RadiiConfig {
    raw: RawRadii,
}

impl Default for RadiiConfig {
    fn default() -> Self {
        Self { raw: RawRadii::default() }
    }
}

impl TryFrom<RawRadii> for RadiiConfig {
    type Error = GeometryError;

    fn try_from(raw: RawRadii) -> Result<Self, Self::Error> {
        let named = raw.named();
        for (name, value) in named {
            if !value.is_finite() {
                return Err(GeometryError::NotFinite { name });
            }
            if value <= 0.0 || value > 1.0 {
                return Err(GeometryError::OutOfRange { name, value });
            }
        }
        for pair in named.windows(2) {
            let (inner, inner_value) = pair[0];
            let (outer, outer_value) = pair[1];
            if inner_value >= outer_value {
                return Err(GeometryError::NotIncreasing { inner, inner_value, outer, outer_value });
            }
        }
        Ok(Self { raw })
    }
}

impl From<RadiiConfig> for RawRadii {
    fn from(config: RadiiConfig) -> Self {
        config.raw
    }
}

impl RadiiConfig {
    /// Build a validated config from six fractions, innermost first.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if any value is out of range or the
    /// sequence is not strictly increasing.
    pub fn new(
        inner_bull: f64,
        outer_bull: f64,
        triple_inner: f64,
        triple_outer: f64,
        double_inner: f64,
        double_outer: f64,
    ) -> Result<Self, GeometryError> {
        Self::try_from(RawRadii { inner_bull, outer_bull, triple_inner, triple_outer, double_inner, double_outer })
    }

    /// The underlying fractions.
    #[must_use]
    pub fn raw(&self) -> RawRadii {
        self.raw
    }

    /// Scale every fraction by the board's pixel half-size.
    #[must_use]
    pub fn to_pixels(&self, half_size: f64) -> PixelRadii {
        PixelRadii {
            inner_bull: self.raw.inner_bull * half_size,
            outer_bull: self.raw.outer_bull * half_size,
            triple_inner: self.raw.triple_inner * half_size,
            triple_outer: self.raw.triple_outer * half_size,
            double_inner: self.raw.double_inner * half_size,
            double_outer: self.raw.double_outer * half_size,
        }
    }
}

/// Ring radii in surface pixels, derived from a [`RadiiConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelRadii {
    pub inner_bull: f64,
    pub outer_bull: f64,
    pub triple_inner: f64,
    pub triple_outer: f64,
    pub double_inner: f64,
    pub double_outer: f64,
}
