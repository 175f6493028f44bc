//! Rendering: draws the board, the last hit, and the debug overlay onto a
//! [`Surface`].
//!
//! Drawing is a pure function of [`BoardState`] and [`BoardOptions`]. Every
//! wedge comes from [`wedge_boundary`], the same span model classification
//! uses, so what is drawn under the pointer is what gets scored.
//!
//! All surface calls propagate errors; the caller decides whether to log or
//! return them.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use geometry::sector::sector_center;
use geometry::{Hit, PixelRadii, Point, SECTOR_COUNT, Zone, polar_point, wedge_boundary};

use crate::config::{BoardOptions, Palette};
use crate::consts::{
    BAND_HIGHLIGHT_PAD_PX, BULL_HIGHLIGHT_PAD_PX, DEBUG_BACKDROP, DEBUG_BOX_WIDTH_PX, DEBUG_FONT_PX, DEBUG_LINE_PX,
    DEBUG_MARGIN_PX, DEBUG_PADDING_PX, DEBUG_TEXT, LABEL_EDGE_INSET_PX, LABEL_FONT_PX, LABEL_OFFSET_PX,
    MARKER_RADIUS_PX,
};
use crate::surface::{Surface, TextAlign, TextBaseline, TextStyle};
use crate::view::{BoardState, DebugInfo};

/// Draw the full board.
///
/// Layers, bottom first: background, single bands, triple ring, double
/// ring, bulls, sector numbers, hit highlight, debug overlay.
///
/// # Errors
///
/// Returns the first error any surface call reports.
pub fn draw<S: Surface>(surface: &mut S, state: &BoardState, options: &BoardOptions) -> Result<(), S::Error> {
    let center = state.center();
    let radii = &state.pixel_radii;
    let palette = &options.palette;

    // Layer 1: clear and background.
    surface.clear(f64::from(state.size_px))?;
    surface.fill_circle(center, state.half_size(), &palette.background)?;

    // Layer 2: rings and bulls.
    draw_bands(surface, center, radii, palette)?;
    surface.fill_circle(center, radii.outer_bull, &palette.green)?;
    surface.fill_circle(center, radii.inner_bull, &palette.red)?;

    // Layer 3: sector numbers.
    draw_labels(surface, state, palette)?;

    // Layer 4: highlight and debug overlay.
    if let Some(hit) = &state.last_hit {
        draw_highlight(surface, hit, center, radii, state.dpr, palette)?;
        if options.debug {
            draw_debug(surface, hit, state.dpr)?;
        }
    }

    Ok(())
}

// =============================================================
// Board
// =============================================================

fn draw_bands<S: Surface>(surface: &mut S, center: Point, radii: &PixelRadii, palette: &Palette) -> Result<(), S::Error> {
    for i in 0..SECTOR_COUNT {
        let color = palette.single(i);
        surface.fill_path(&wedge_boundary(i, radii.outer_bull, radii.triple_inner).path(center), color)?;
        surface.fill_path(&wedge_boundary(i, radii.triple_outer, radii.double_inner).path(center), color)?;
    }
    for i in 0..SECTOR_COUNT {
        let wedge = wedge_boundary(i, radii.triple_inner, radii.triple_outer);
        surface.fill_path(&wedge.path(center), palette.ring(i))?;
    }
    for i in 0..SECTOR_COUNT {
        let wedge = wedge_boundary(i, radii.double_inner, radii.double_outer);
        surface.fill_path(&wedge.path(center), palette.ring(i))?;
    }
    Ok(())
}

fn draw_labels<S: Surface>(surface: &mut S, state: &BoardState, palette: &Palette) -> Result<(), S::Error> {
    let center = state.center();
    // Small boards have no room past the double ring; pull labels in so
    // they stay on the surface.
    let radius = LABEL_OFFSET_PX
        .mul_add(state.dpr, state.pixel_radii.double_outer)
        .min(LABEL_EDGE_INSET_PX.mul_add(-state.dpr, state.half_size()));
    let style = TextStyle {
        font_px: LABEL_FONT_PX * state.dpr,
        family: "sans-serif",
        align: TextAlign::Center,
        baseline: TextBaseline::Middle,
        color: &palette.label,
    };
    for i in 0..SECTOR_COUNT {
        let at = polar_point(center, radius, sector_center(i));
        surface.fill_text(&state.order.label(i).to_string(), at, &style)?;
    }
    Ok(())
}

// =============================================================
// Hit feedback
// =============================================================

fn draw_highlight<S: Surface>(
    surface: &mut S,
    hit: &Hit,
    center: Point,
    radii: &PixelRadii,
    dpr: f64,
    palette: &Palette,
) -> Result<(), S::Error> {
    match hit.zone(radii) {
        None => Ok(()),
        Some(Zone::Disk { radius }) => {
            surface.fill_circle(center, BULL_HIGHLIGHT_PAD_PX.mul_add(dpr, radius), &palette.bull_highlight)
        }
        Some(Zone::Wedge(band)) => {
            let pad = BAND_HIGHLIGHT_PAD_PX * dpr;
            let padded = wedge_boundary(band.sector_index, (band.inner - pad).max(0.0), band.outer + pad);
            surface.fill_path(&padded.path(center), &palette.highlight)?;

            // Marker dot stays inside the band; too-narrow bands get it centered.
            let marker = MARKER_RADIUS_PX * dpr;
            let (lo, hi) = (band.inner + marker, band.outer - marker);
            let marker_r = if lo <= hi { hit.distance.clamp(lo, hi) } else { (band.inner + band.outer) * 0.5 };
            let at = polar_point(center, marker_r, hit.angle_deg);
            surface.fill_circle(at, marker, &palette.marker)
        }
    }
}

fn draw_debug<S: Surface>(surface: &mut S, hit: &Hit, dpr: f64) -> Result<(), S::Error> {
    let lines = DebugInfo::from(hit).lines();
    let margin = DEBUG_MARGIN_PX * dpr;
    let padding = DEBUG_PADDING_PX * dpr;
    let line_h = DEBUG_LINE_PX * dpr;
    let height = lines.iter().map(|_| line_h).sum::<f64>() + 2.0 * padding;

    surface.fill_rect(
        Point::new(margin - padding, margin - padding),
        DEBUG_BOX_WIDTH_PX * dpr,
        height,
        DEBUG_BACKDROP,
    )?;

    let style = TextStyle {
        font_px: DEBUG_FONT_PX * dpr,
        family: "monospace",
        align: TextAlign::Left,
        baseline: TextBaseline::Top,
        color: DEBUG_TEXT,
    };
    let mut y = margin;
    for line in &lines {
        surface.fill_text(line, Point::new(margin, y), &style)?;
        y += line_h;
    }
    Ok(())
}
