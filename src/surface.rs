//! The drawing capability set the renderer needs.
//!
//! Coordinates are surface pixels with the origin at the top-left corner.
//! Implementations decide what "drawing" means: the canvas surface paints a
//! 2D context, the SVG surface accumulates markup, and tests record calls.

#[cfg(test)]
#[path = "surface_test.rs"]
pub(crate) mod surface_test;

use geometry::{PathSeg, Point};

/// Horizontal anchor for positioned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Vertical anchor for positioned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
}

/// Font and placement for [`Surface::fill_text`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle<'a> {
    pub font_px: f64,
    pub family: &'a str,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub color: &'a str,
}

/// A 2D target the board can be drawn onto.
pub trait Surface {
    type Error;

    /// Resize the backing store to a `size_px` square.
    ///
    /// # Errors
    ///
    /// Implementation-specific.
    fn resize(&mut self, size_px: u32, css_size: f64) -> Result<(), Self::Error>;

    /// Erase the whole `size_px` square.
    ///
    /// # Errors
    ///
    /// Implementation-specific.
    fn clear(&mut self, size_px: f64) -> Result<(), Self::Error>;

    /// Fill a closed outline.
    ///
    /// # Errors
    ///
    /// Implementation-specific.
    fn fill_path(&mut self, path: &[PathSeg], color: &str) -> Result<(), Self::Error>;

    /// # Errors
    ///
    /// Implementation-specific.
    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), Self::Error>;

    /// # Errors
    ///
    /// Implementation-specific.
    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: &str) -> Result<(), Self::Error>;

    /// # Errors
    ///
    /// Implementation-specific.
    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle<'_>) -> Result<(), Self::Error>;
}
