//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Randomness only through an injected `SignSource`
//! - No rendering or platform dependencies

pub mod collision;
pub mod opponent;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use rng::{FixedSigns, PcgSigns, SignSource};
pub use state::{Ball, Field, GameEvent, GameState, Paddle, Side};
pub use tick::tick;
