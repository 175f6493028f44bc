//! Shared constants for the dartboard widget.
//!
//! Pixel values are in CSS pixels and get multiplied by the device pixel
//! ratio before drawing.

// ── Timing ──────────────────────────────────────────────────────

/// Milliseconds a hit highlight stays up before fading.
pub const FADE_MS: u32 = 700;

// ── Labels ──────────────────────────────────────────────────────

/// Gap between the double ring's outer edge and the sector numbers.
pub const LABEL_OFFSET_PX: f64 = 18.0;

/// Sector number font size.
pub const LABEL_FONT_PX: f64 = 14.0;

/// Closest a label's anchor may sit to the board edge. Covers half of a
/// two-digit label at [`LABEL_FONT_PX`].
pub const LABEL_EDGE_INSET_PX: f64 = 9.0;

// ── Highlight ───────────────────────────────────────────────────

/// Extra radius added to a highlighted bull disk.
pub const BULL_HIGHLIGHT_PAD_PX: f64 = 6.0;

/// Radial overhang of a highlighted wedge on both sides of its band.
pub const BAND_HIGHLIGHT_PAD_PX: f64 = 2.0;

/// Radius of the dot drawn where the pointer landed.
pub const MARKER_RADIUS_PX: f64 = 6.0;

// ── Debug overlay ───────────────────────────────────────────────

pub const DEBUG_FONT_PX: f64 = 11.0;
pub const DEBUG_LINE_PX: f64 = 14.0;
pub const DEBUG_BOX_WIDTH_PX: f64 = 160.0;

/// Inset of the overlay from the board's top-left corner.
pub const DEBUG_MARGIN_PX: f64 = 12.0;

/// Backdrop padding around the overlay text.
pub const DEBUG_PADDING_PX: f64 = 6.0;

pub const DEBUG_BACKDROP: &str = "rgba(0,0,0,0.6)";
pub const DEBUG_TEXT: &str = "#fff";
