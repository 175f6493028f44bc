//! Dartboard input widget for the browser.
//!
//! Compiled to WebAssembly, the crate draws a dartboard on a `<canvas>`,
//! turns pointer presses into scored throws using the [`geometry`] crate,
//! highlights the hit, and reports it to a JavaScript callback. Everything
//! except [`widget`] and [`canvas`] is plain Rust and runs in native tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`view`] | [`view::BoardView`], board state, throws, result text |
//! | [`render`] | Layered board drawing onto any [`surface::Surface`] |
//! | [`surface`] | The drawing capability trait |
//! | [`canvas`] | `Surface` over `CanvasRenderingContext2d` |
//! | [`svg`] | `Surface` producing an SVG document, plus static export |
//! | [`config`] | JSON options, palette, partial radii updates |
//! | [`consts`] | Pixel sizes and timings |
//! | `widget` | wasm-bindgen entry point (wasm32 only) |

pub mod canvas;
pub mod config;
pub mod consts;
pub mod render;
pub mod surface;
pub mod svg;
pub mod view;
#[cfg(target_arch = "wasm32")]
pub mod widget;
