//! Canvas Pong - classic two-paddle Pong on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, opponent, scoring)
//! - `renderer`: Drawing-surface abstraction and the per-frame painter
//! - `input`: Pointer position to player paddle mapping
//! - `driver`: One-frame transition and headless loop
//! - `platform`: Browser host (canvas, listeners, animation frames)

pub mod driver;
pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::Game;
pub use error::{Error, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default playfield size (used when the host does not dictate one)
    pub const DEFAULT_FIELD_WIDTH: f32 = 800.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 500.0;

    /// Paddle dimensions, shared by both sides
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 20.0;

    /// Ball bounding box edge length
    pub const BALL_SIZE: f32 = 18.0;
    /// Serve speed per frame, horizontal and vertical magnitudes
    pub const SERVE_VX: f32 = 6.0;
    pub const SERVE_VY: f32 = 4.0;
    /// Vertical velocity per pixel of strike offset from paddle center
    pub const SPIN_FACTOR: f32 = 0.2;

    /// Opponent tolerance band around the ball center
    pub const OPPONENT_DEAD_ZONE: f32 = 10.0;
    /// Opponent movement per frame
    pub const OPPONENT_STEP: f32 = 4.0;
}
