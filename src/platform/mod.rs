//! Platform abstraction layer
//!
//! The browser host lives in `web`: canvas and 2D context acquisition, pointer
//! listeners and the `requestAnimationFrame` loop. Native builds run headless
//! through `driver::run_headless` instead.

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Id of the canvas element the web host draws into
pub const CANVAS_ID: &str = "pong";
