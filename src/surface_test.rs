//! A surface that records draw calls, shared by the render and view tests.

use super::*;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Resize { size_px: u32, css_size: f64 },
    Clear(f64),
    Path { path: Vec<PathSeg>, color: String },
    Circle { center: Point, radius: f64, color: String },
    Rect { origin: Point, width: f64, height: f64, color: String },
    Text { text: String, at: Point, font_px: f64, color: String },
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub calls: Vec<Call>,
    /// When set, every call fails.
    pub broken: bool,
}

impl RecordingSurface {
    pub fn paths(&self) -> Vec<(&[PathSeg], &str)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Path { path, color } => Some((path.as_slice(), color.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(Point, f64, &str)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Circle { center, radius, color } => Some((*center, *radius, color.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Rect { .. })).count()
    }

    fn record(&mut self, call: Call) -> Result<(), String> {
        if self.broken {
            return Err("surface lost".to_owned());
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    type Error = String;

    fn resize(&mut self, size_px: u32, css_size: f64) -> Result<(), String> {
        self.record(Call::Resize { size_px, css_size })
    }

    fn clear(&mut self, size_px: f64) -> Result<(), String> {
        self.record(Call::Clear(size_px))
    }

    fn fill_path(&mut self, path: &[PathSeg], color: &str) -> Result<(), String> {
        self.record(Call::Path { path: path.to_vec(), color: color.to_owned() })
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), String> {
        self.record(Call::Circle { center, radius, color: color.to_owned() })
    }

    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: &str) -> Result<(), String> {
        self.record(Call::Rect { origin, width, height, color: color.to_owned() })
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle<'_>) -> Result<(), String> {
        self.record(Call::Text {
            text: text.to_owned(),
            at,
            font_px: style.font_px,
            color: style.color.to_owned(),
        })
    }
}
