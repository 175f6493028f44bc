//! Widget options: board geometry, timing, and colors, loaded from JSON.
//!
//! Every key is optional. A missing key takes the standard board's value, so
//! `{}` and an empty string both yield [`BoardOptions::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use geometry::{GeometryError, RadiiConfig, SectorOrder};
use serde::{Deserialize, Serialize};

use crate::consts::FADE_MS;

/// Error returned when options cannot be loaded or applied.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The options string is not valid JSON, or a value fails validation
    /// while deserializing.
    #[error("invalid options: {0}")]
    Json(#[from] serde_json::Error),
    /// A radii update produced an invalid configuration.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Full widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardOptions {
    pub radii: RadiiConfig,
    pub sector_order: SectorOrder,
    /// Highlight lifetime in milliseconds.
    pub fade_ms: u32,
    /// Draw the debug overlay after each hit.
    pub debug: bool,
    /// Forward clicks outside the board to the throw consumer as `MISS`.
    pub report_misses: bool,
    pub palette: Palette,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            radii: RadiiConfig::default(),
            sector_order: SectorOrder::default(),
            fade_ms: FADE_MS,
            debug: false,
            report_misses: false,
            palette: Palette::default(),
        }
    }
}

impl BoardOptions {
    /// Parse options from a JSON object. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON or values that fail
    /// radii / sector order validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}

/// CSS colors used when drawing the board.
///
/// Sector colors alternate by index: even sectors (20 at the top) use
/// `dark` singles with `red` rings, odd sectors use `light` singles with
/// `green` rings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    pub background: String,
    pub dark: String,
    pub light: String,
    pub red: String,
    pub green: String,
    pub label: String,
    pub highlight: String,
    pub bull_highlight: String,
    pub marker: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#07121a".to_owned(),
            dark: "#10121a".to_owned(),
            light: "#e9edf2".to_owned(),
            red: "#c92a2a".to_owned(),
            green: "#0f8f4f".to_owned(),
            label: "#e6eef7".to_owned(),
            highlight: "rgba(255,230,128,0.55)".to_owned(),
            bull_highlight: "rgba(255,230,128,0.85)".to_owned(),
            marker: "#ff7700".to_owned(),
        }
    }
}

impl Palette {
    /// Fill for the single bands of a sector.
    #[must_use]
    pub fn single(&self, sector_index: usize) -> &str {
        if sector_index % 2 == 0 { &self.dark } else { &self.light }
    }

    /// Fill for the triple and double bands of a sector.
    #[must_use]
    pub fn ring(&self, sector_index: usize) -> &str {
        if sector_index % 2 == 0 { &self.red } else { &self.green }
    }
}

/// Partial radii update. Unset fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiiPatch {
    pub inner_bull: Option<f64>,
    pub outer_bull: Option<f64>,
    #[serde(alias = "tripleRingInner")]
    pub triple_inner: Option<f64>,
    #[serde(alias = "tripleRingOuter")]
    pub triple_outer: Option<f64>,
    #[serde(alias = "doubleRingInner")]
    pub double_inner: Option<f64>,
    #[serde(alias = "doubleRingOuter")]
    pub double_outer: Option<f64>,
}

impl RadiiPatch {
    /// Parse a patch from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the input is not a JSON object of
    /// numbers.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Merge this patch over `base` and validate the result.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the merged radii break the ordering or
    /// range invariant. `base` is never modified.
    pub fn apply(&self, base: &RadiiConfig) -> Result<RadiiConfig, GeometryError> {
        let mut raw = base.raw();
        let fields = [
            (&mut raw.inner_bull, self.inner_bull),
            (&mut raw.outer_bull, self.outer_bull),
            (&mut raw.triple_inner, self.triple_inner),
            (&mut raw.triple_outer, self.triple_outer),
            (&mut raw.double_inner, self.double_inner),
            (&mut raw.double_outer, self.double_outer),
        ];
        for (slot, value) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        RadiiConfig::try_from(raw)
    }
}
