//! Board view: owns the surface and the board state, turns pointer input
//! into classified hits, and keeps the drawing in sync.
//!
//! [`BoardView`] has no browser dependencies. The wasm widget feeds it DOM
//! measurements, and tests drive it directly with a recording surface.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::fmt;

use geometry::{GeometryError, Hit, PixelRadii, Point, RadiiConfig, Ring, SectorOrder, classify};
use serde::Serialize;

use crate::config::{BoardOptions, RadiiPatch};
use crate::render;
use crate::surface::Surface;

/// Error from a view update that both validates input and redraws.
#[derive(Debug, thiserror::Error)]
pub enum ViewError<E: fmt::Debug> {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("drawing failed: {0:?}")]
    Surface(E),
}

/// Lifecycle of a view. Nothing is drawn before the first resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Ready,
}

/// Everything drawing depends on, besides the options.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub radii: RadiiConfig,
    pub order: SectorOrder,
    /// `radii` scaled by the current half-size.
    pub pixel_radii: PixelRadii,
    /// Board edge length in CSS pixels.
    pub css_size: f64,
    /// Backing store edge length in device pixels.
    pub size_px: u32,
    pub dpr: f64,
    pub last_hit: Option<Hit>,
    /// Bumped on every hit. A fade only applies to the generation it was
    /// scheduled for.
    pub generation: u64,
    pub phase: Phase,
}

impl BoardState {
    #[must_use]
    pub fn new(radii: RadiiConfig, order: SectorOrder) -> Self {
        Self {
            radii,
            order,
            pixel_radii: PixelRadii::default(),
            css_size: 0.0,
            size_px: 0,
            dpr: 1.0,
            last_hit: None,
            generation: 0,
            phase: Phase::Uninitialized,
        }
    }

    /// Half the backing store edge, in device pixels.
    #[must_use]
    pub fn half_size(&self) -> f64 {
        f64::from(self.size_px) * 0.5
    }

    /// Board center in surface pixels.
    #[must_use]
    pub fn center(&self) -> Point {
        let half = self.half_size();
        Point::new(half, half)
    }

    /// Fit the board into a `width` x `height` CSS viewport.
    ///
    /// Negative or non-finite sizes count as zero; the pixel ratio is at
    /// least 1.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn apply_resize(&mut self, width: f64, height: f64, dpr: f64) {
        let css_size = css_extent(width).min(css_extent(height));
        let dpr = if dpr.is_finite() { dpr.max(1.0) } else { 1.0 };
        let backing = (css_size * dpr).floor().min(f64::from(u32::MAX));

        self.css_size = css_size;
        self.dpr = dpr;
        self.size_px = backing as u32;
        self.pixel_radii = self.radii.to_pixels(self.half_size());
        self.phase = Phase::Ready;
    }

    /// Replace the radii and rescale them to the current size.
    pub fn set_radii(&mut self, radii: RadiiConfig) {
        self.radii = radii;
        self.pixel_radii = radii.to_pixels(self.half_size());
    }

    /// Convert a client-space pointer position to board-centered pixels.
    ///
    /// `origin` is the top-left of the surface's bounding rectangle in the
    /// same client space.
    #[must_use]
    pub fn to_board(&self, client: Point, origin: Point) -> Point {
        let half = self.half_size();
        Point::new(
            (client.x - origin.x).mul_add(self.dpr, -half),
            (client.y - origin.y).mul_add(self.dpr, -half),
        )
    }
}

/// Viewport a board is fitted into: the client area of the element that
/// contains the surface, or the window's inner size when there is none.
///
/// Never the surface itself, whose CSS size is pinned by the previous resize.
#[must_use]
pub fn viewport_size(container: Option<(i32, i32)>, window: (f64, f64)) -> (f64, f64) {
    match container {
        Some((width, height)) => (f64::from(width), f64::from(height)),
        None => window,
    }
}

fn css_extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// A hit in the form the throw consumer receives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Throw {
    /// `S20`, `D16`, `T19`, `SB`, `DB` or `MISS`.
    pub name: String,
    pub value: u32,
    /// True for the double ring and for the inner bull.
    pub is_double: bool,
}

impl Throw {
    #[must_use]
    pub fn from_hit(hit: &Hit) -> Self {
        let sector = hit.sector.unwrap_or_default();
        let name = match hit.ring {
            Ring::Single => format!("S{sector}"),
            Ring::Double => format!("D{sector}"),
            Ring::Triple => format!("T{sector}"),
            Ring::OuterBull => "SB".to_owned(),
            Ring::InnerBull => "DB".to_owned(),
            Ring::Miss => "MISS".to_owned(),
        };
        Self {
            name,
            value: hit.score(),
            is_double: matches!(hit.ring, Ring::Double | Ring::InnerBull),
        }
    }
}

/// Human-readable result line, e.g. `DOUBLE x 20 = 40`.
#[must_use]
pub fn result_text(hit: &Hit) -> String {
    match hit.ring {
        Ring::Miss => "Miss".to_owned(),
        Ring::InnerBull => "50 (Inner Bull)".to_owned(),
        Ring::OuterBull => "25 (Outer Bull)".to_owned(),
        ring => format!(
            "{} x {} = {}",
            ring.as_str().to_uppercase(),
            hit.sector.unwrap_or_default(),
            hit.score()
        ),
    }
}

/// Payload for the debug overlay and `debugJson`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugInfo {
    pub angle_deg: f64,
    pub sector_index: usize,
    pub sector: Option<u8>,
    pub distance: f64,
    pub ring: Ring,
}

impl From<&Hit> for DebugInfo {
    fn from(hit: &Hit) -> Self {
        Self {
            angle_deg: hit.angle_deg,
            sector_index: hit.sector_index,
            sector: hit.sector,
            distance: hit.distance,
            ring: hit.ring,
        }
    }
}

impl DebugInfo {
    /// Overlay text, one entry per line.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let sector = self.sector.map_or_else(|| "none".to_owned(), |s| s.to_string());
        vec![
            format!("angle: {:.0}°", self.angle_deg),
            format!("sectorIdx: {}", self.sector_index),
            format!("sector: {sector}"),
            format!("distance: {:.0}px", self.distance),
            format!("ring: {}", self.ring),
        ]
    }
}

/// A dartboard bound to one drawing surface.
pub struct BoardView<S: Surface> {
    surface: S,
    state: BoardState,
    options: BoardOptions,
}

impl<S: Surface> BoardView<S> {
    #[must_use]
    pub fn new(surface: S, options: BoardOptions) -> Self {
        let state = BoardState::new(options.radii, options.sector_order);
        Self { surface, state, options }
    }

    // --- Events ---

    /// Fit the board to a viewport, resize the surface, and redraw.
    ///
    /// # Errors
    ///
    /// Propagates surface errors.
    pub fn resize(&mut self, width: f64, height: f64, dpr: f64) -> Result<(), S::Error> {
        self.state.apply_resize(width, height, dpr);
        self.surface.resize(self.state.size_px, self.state.css_size)?;
        log::debug!(
            "board resized: css={} dpr={} backing={}",
            self.state.css_size,
            self.state.dpr,
            self.state.size_px
        );
        self.render()
    }

    /// Classify a pointer press and highlight it.
    ///
    /// `client` is the pointer position and `origin` the surface's
    /// bounding-rectangle corner, both in client (CSS) pixels. The hit is
    /// stored as the last hit even if redrawing fails.
    ///
    /// # Errors
    ///
    /// Propagates surface errors from the redraw.
    pub fn handle_pointer(&mut self, client: Point, origin: Point) -> Result<Hit, S::Error> {
        let point = self.state.to_board(client, origin);
        let hit = classify(point, &self.state.pixel_radii, &self.state.order);
        self.state.last_hit = Some(hit);
        self.state.generation = self.state.generation.wrapping_add(1);
        log::debug!("pointer at ({:.1}, {:.1}) -> {}", point.x, point.y, result_text(&hit));
        self.render()?;
        Ok(hit)
    }

    /// Clear the highlight scheduled as `generation`.
    ///
    /// Returns `true` if something was cleared. Stale generations and
    /// repeated calls are no-ops.
    ///
    /// # Errors
    ///
    /// Propagates surface errors from the redraw.
    pub fn fade(&mut self, generation: u64) -> Result<bool, S::Error> {
        if generation != self.state.generation || self.state.last_hit.is_none() {
            return Ok(false);
        }
        self.state.last_hit = None;
        self.render()?;
        Ok(true)
    }

    // --- Configuration ---

    /// Merge a partial radii update and redraw.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Geometry`] and leaves the board untouched if the
    /// merged radii are invalid.
    pub fn set_radii(&mut self, patch: &RadiiPatch) -> Result<(), ViewError<S::Error>>
    where
        S::Error: fmt::Debug,
    {
        let radii = patch.apply(&self.state.radii)?;
        self.state.set_radii(radii);
        self.options.radii = radii;
        self.render().map_err(ViewError::Surface)
    }

    /// Toggle the debug overlay and redraw.
    ///
    /// # Errors
    ///
    /// Propagates surface errors.
    pub fn set_debug(&mut self, debug: bool) -> Result<(), S::Error> {
        self.options.debug = debug;
        self.render()
    }

    /// Draw the current state. A no-op until the first resize.
    ///
    /// # Errors
    ///
    /// Propagates surface errors.
    pub fn render(&mut self) -> Result<(), S::Error> {
        if self.state.phase == Phase::Uninitialized {
            return Ok(());
        }
        render::draw(&mut self.surface, &self.state, &self.options)
    }

    // --- Queries ---

    /// The throw to forward for `hit`, or `None` for a miss when misses are
    /// not reported.
    #[must_use]
    pub fn throw_for(&self, hit: &Hit) -> Option<Throw> {
        if hit.ring == Ring::Miss && !self.options.report_misses {
            return None;
        }
        Some(Throw::from_hit(hit))
    }

    #[must_use]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    #[must_use]
    pub fn options(&self) -> &BoardOptions {
        &self.options
    }

    #[must_use]
    pub fn last_hit(&self) -> Option<Hit> {
        self.state.last_hit
    }

    /// Generation of the current highlight, for scheduling a fade.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.state.generation
    }

    #[must_use]
    pub fn debug_info(&self) -> Option<DebugInfo> {
        self.state.last_hit.as_ref().map(DebugInfo::from)
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
