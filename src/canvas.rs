//! Canvas surface: the only place that touches
//! [`web_sys::CanvasRenderingContext2d`].
//!
//! Clock-degree arcs from the geometry crate are converted to the canvas
//! convention (radians, 0 at 3 o'clock) here.

use std::f64::consts::TAU;

use geometry::{PathSeg, Point};
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::surface::{Surface, TextAlign, TextBaseline, TextStyle};

/// A 2D canvas and its rendering context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Top-left corner of the canvas in client coordinates.
    #[must_use]
    pub fn client_origin(&self) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        Point::new(rect.left(), rect.top())
    }
}

fn canvas_angle(clock_deg: f64) -> f64 {
    (clock_deg - 90.0).to_radians()
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn resize(&mut self, size_px: u32, css_size: f64) -> Result<(), JsValue> {
        let style = self.canvas.style();
        style.set_property("width", &format!("{css_size}px"))?;
        style.set_property("height", &format!("{css_size}px"))?;
        self.canvas.set_width(size_px);
        self.canvas.set_height(size_px);
        Ok(())
    }

    fn clear(&mut self, size_px: f64) -> Result<(), JsValue> {
        self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        self.ctx.clear_rect(0.0, 0.0, size_px, size_px);
        Ok(())
    }

    fn fill_path(&mut self, path: &[PathSeg], color: &str) -> Result<(), JsValue> {
        self.ctx.begin_path();
        for seg in path {
            match *seg {
                PathSeg::MoveTo(p) => self.ctx.move_to(p.x, p.y),
                PathSeg::LineTo(p) => self.ctx.line_to(p.x, p.y),
                PathSeg::Arc { center, radius, start_deg, end_deg, clockwise } => {
                    self.ctx.arc_with_anticlockwise(
                        center.x,
                        center.y,
                        radius,
                        canvas_angle(start_deg),
                        canvas_angle(end_deg),
                        !clockwise,
                    )?;
                }
                PathSeg::Close => self.ctx.close_path(),
            }
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        Ok(())
    }

    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(origin.x, origin.y, width, height);
        Ok(())
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle<'_>) -> Result<(), JsValue> {
        self.ctx.set_font(&format!("{}px {}", style.font_px, style.family));
        self.ctx.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        self.ctx.set_text_baseline(match style.baseline {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
        });
        self.ctx.set_fill_style_str(style.color);
        self.ctx.fill_text(text, at.x, at.y)
    }
}
