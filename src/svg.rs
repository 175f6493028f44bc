//! SVG surface: renders the board to a standalone `<svg>` document.
//!
//! Used for static export and for inspecting drawings in native tests.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use std::fmt::{self, Write};

use geometry::{PathSeg, Point, polar_point};

use crate::config::BoardOptions;
use crate::surface::{Surface, TextAlign, TextBaseline, TextStyle};
use crate::view::BoardView;

/// Accumulates SVG elements in drawing order.
#[derive(Debug, Default)]
pub struct SvgSurface {
    size: f64,
    body: String,
}

impl SvgSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The complete document.
    #[must_use]
    pub fn finish(&self) -> String {
        let s = self.size;
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}" viewBox="0 0 {s} {s}">{}</svg>"#,
            self.body
        )
    }
}

impl Surface for SvgSurface {
    type Error = fmt::Error;

    fn resize(&mut self, size_px: u32, _css_size: f64) -> fmt::Result {
        self.size = f64::from(size_px);
        Ok(())
    }

    fn clear(&mut self, _size_px: f64) -> fmt::Result {
        self.body.clear();
        Ok(())
    }

    fn fill_path(&mut self, path: &[PathSeg], color: &str) -> fmt::Result {
        self.body.push_str(r#"<path d=""#);
        for (i, seg) in path.iter().enumerate() {
            if i > 0 {
                self.body.push(' ');
            }
            write_segment(&mut self.body, seg)?;
        }
        write!(self.body, r#"" fill="{}"/>"#, escape(color))
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> fmt::Result {
        write!(
            self.body,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            center.x,
            center.y,
            radius,
            escape(color)
        )
    }

    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: &str) -> fmt::Result {
        write!(
            self.body,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
            origin.x,
            origin.y,
            width,
            height,
            escape(color)
        )
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle<'_>) -> fmt::Result {
        let anchor = match style.align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
        };
        let baseline = match style.baseline {
            TextBaseline::Top => "hanging",
            TextBaseline::Middle => "central",
        };
        write!(
            self.body,
            r#"<text x="{:.2}" y="{:.2}" font-size="{:.2}" font-family="{}" text-anchor="{anchor}" dominant-baseline="{baseline}" fill="{}">{}</text>"#,
            at.x,
            at.y,
            style.font_px,
            escape(style.family),
            escape(style.color),
            escape(text)
        )
    }
}

fn write_segment(out: &mut String, seg: &PathSeg) -> fmt::Result {
    match *seg {
        PathSeg::MoveTo(p) => write!(out, "M {:.2} {:.2}", p.x, p.y),
        PathSeg::LineTo(p) => write!(out, "L {:.2} {:.2}", p.x, p.y),
        PathSeg::Arc { center, radius, start_deg, end_deg, clockwise } => {
            let start = polar_point(center, radius, start_deg);
            let end = polar_point(center, radius, end_deg);
            let sweep = if clockwise { end_deg - start_deg } else { start_deg - end_deg };
            let large = u8::from(sweep.rem_euclid(360.0) > 180.0);
            // SVG's positive sweep direction is clockwise on a y-down canvas.
            let sweep_flag = u8::from(clockwise);
            write!(
                out,
                "L {:.2} {:.2} A {radius:.2} {radius:.2} 0 {large} {sweep_flag} {:.2} {:.2}",
                start.x, start.y, end.x, end.y
            )
        }
        PathSeg::Close => out.write_str("Z"),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a board of `size` pixels to an SVG document.
///
/// # Errors
///
/// Returns [`fmt::Error`] if writing the markup fails.
pub fn render_board_svg(size: u32, options: BoardOptions) -> Result<String, fmt::Error> {
    let mut view = BoardView::new(SvgSurface::new(), options);
    view.resize(f64::from(size), f64::from(size), 1.0)?;
    Ok(view.into_surface().finish())
}
