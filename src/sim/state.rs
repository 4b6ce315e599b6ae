//! Game state and core simulation types
//!
//! Everything a frame reads or writes lives in [`GameState`]; hosts hold one
//! instance per session and pass it by reference.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::rng::SignSource;
use crate::consts::*;
use crate::error::{Error, Result};

/// Which end of the table an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, pointer controlled
    Player,
    /// Right paddle, driven by the opponent controller
    Opponent,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Opponent => f.write_str("opponent"),
        }
    }
}

/// Playfield bounds (the drawing surface size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
        }
    }
}

impl Field {
    /// Smallest width that fits both paddles, their margins and a ball between them
    pub const MIN_WIDTH: f32 = 2.0 * (PADDLE_MARGIN + PADDLE_WIDTH) + BALL_SIZE;
    /// Smallest height that fits a paddle
    pub const MIN_HEIGHT: f32 = PADDLE_HEIGHT;

    pub fn new(width: f32, height: f32) -> Result<Self> {
        // Written negated so NaN is rejected too
        if !(width >= Self::MIN_WIDTH && height >= Self::MIN_HEIGHT) {
            return Err(Error::FieldTooSmall { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Lowest legal paddle top edge
    pub fn max_paddle_y(&self) -> f32 {
        self.height - PADDLE_HEIGHT
    }

    /// Lowest legal ball top edge
    pub fn max_ball_y(&self) -> f32 {
        self.height - BALL_SIZE
    }

    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }
}

/// One of the two paddles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Left edge, fixed for the session
    pub x: f32,
    /// Top edge, always within `[0, field.max_paddle_y()]`
    pub y: f32,
    pub score: u32,
}

impl Paddle {
    /// Create a paddle vertically centered against its wall
    pub fn new(side: Side, field: &Field) -> Self {
        let x = match side {
            Side::Player => PADDLE_MARGIN,
            Side::Opponent => field.width - PADDLE_WIDTH - PADDLE_MARGIN,
        };
        Self {
            side,
            x,
            y: field.height / 2.0 - PADDLE_HEIGHT / 2.0,
            score: 0,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }
}

/// The ball, tracked by the top-left corner of its bounding box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
}

impl Ball {
    /// Create a ball already served from the field center
    pub fn served(field: &Field, signs: &mut impl SignSource) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
        };
        ball.serve(field, signs);
        ball
    }

    /// Re-center and pick a fresh diagonal direction
    pub fn serve(&mut self, field: &Field, signs: &mut impl SignSource) {
        self.pos = field.center() - Vec2::splat(BALL_SIZE / 2.0);
        let sx = signs.next_sign();
        let sy = signs.next_sign();
        self.vel = Vec2::new(SERVE_VX * sx, SERVE_VY * sy);
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(BALL_SIZE / 2.0)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BALL_SIZE, BALL_SIZE)
    }
}

/// Things that happened during the last tick (for logging and host feedback)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Ball struck a paddle
    PaddleHit { side: Side },
    /// A side won the rally
    Scored { side: Side },
}

/// Complete session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub field: Field,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    /// Simulation tick counter
    pub frame: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(field: Field, signs: &mut impl SignSource) -> Self {
        Self {
            field,
            player: Paddle::new(Side::Player, &field),
            opponent: Paddle::new(Side::Opponent, &field),
            ball: Ball::served(&field, signs),
            frame: 0,
            events: Vec::new(),
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// (player, opponent)
    pub fn scores(&self) -> (u32, u32) {
        (self.player.score, self.opponent.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::FixedSigns;

    #[test]
    fn test_field_rejects_tiny_surface() {
        assert!(Field::new(400.0, 300.0).is_ok());
        assert!(matches!(
            Field::new(60.0, 300.0),
            Err(Error::FieldTooSmall { .. })
        ));
        assert!(Field::new(400.0, 99.0).is_err());
        assert!(Field::new(f32::NAN, 300.0).is_err());
    }

    #[test]
    fn test_paddles_start_centered() {
        let field = Field::new(400.0, 300.0).unwrap();
        let state = GameState::new(field, &mut FixedSigns::new(&[true]));

        assert_eq!(state.player.x, 20.0);
        assert_eq!(state.opponent.x, 400.0 - 15.0 - 20.0);
        assert_eq!(state.player.y, 100.0);
        assert_eq!(state.opponent.y, 100.0);
        assert_eq!(state.scores(), (0, 0));
    }

    #[test]
    fn test_paddle_mut_selects_side() {
        let field = Field::new(400.0, 300.0).unwrap();
        let mut state = GameState::new(field, &mut FixedSigns::new(&[true]));

        state.paddle_mut(Side::Opponent).score += 2;
        state.paddle_mut(Side::Player).score += 1;

        assert_eq!(state.scores(), (1, 2));
    }

    #[test]
    fn test_serve_direction_follows_signs() {
        let field = Field::new(400.0, 300.0).unwrap();
        let mut signs = FixedSigns::new(&[false, true]);
        let ball = Ball::served(&field, &mut signs);

        assert_eq!(ball.pos, Vec2::new(191.0, 141.0));
        assert_eq!(ball.vel, Vec2::new(-6.0, 4.0));
        assert_eq!(ball.center(), field.center());
    }
}
