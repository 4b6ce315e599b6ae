//! Scripted opponent
//!
//! A dead-band tracker: it chases the ball's current height at a fixed speed
//! and never predicts, so fast angled returns beat it.

use super::state::{Field, GameState};
use crate::consts::{OPPONENT_DEAD_ZONE, OPPONENT_STEP, PADDLE_HEIGHT};

/// Next top edge for a paddle at `paddle_y` chasing a ball centered at
/// `ball_center_y`. Not clamped.
pub fn steer(paddle_y: f32, ball_center_y: f32) -> f32 {
    let center = paddle_y + PADDLE_HEIGHT / 2.0;
    if center < ball_center_y - OPPONENT_DEAD_ZONE {
        paddle_y + OPPONENT_STEP
    } else if center > ball_center_y + OPPONENT_DEAD_ZONE {
        paddle_y - OPPONENT_STEP
    } else {
        paddle_y
    }
}

/// `steer` followed by clamping into the legal paddle range
pub fn next_y(paddle_y: f32, ball_center_y: f32, field: &Field) -> f32 {
    field.clamp_paddle_y(steer(paddle_y, ball_center_y))
}

/// Move the opponent paddle one step toward the ball
pub fn update(state: &mut GameState) {
    let ball_center_y = state.ball.center().y;
    state.opponent.y = next_y(state.opponent.y, ball_center_y, &state.field);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_down_when_ball_below() {
        // Paddle center at 150, ball center 20 px lower
        assert_eq!(steer(100.0, 170.0), 104.0);
    }

    #[test]
    fn test_moves_up_when_ball_above() {
        assert_eq!(steer(100.0, 130.0), 96.0);
    }

    #[test]
    fn test_holds_inside_dead_zone() {
        assert_eq!(steer(100.0, 150.0), 100.0);
        assert_eq!(steer(100.0, 160.0), 100.0);
        assert_eq!(steer(100.0, 140.0), 100.0);
        assert_eq!(steer(100.0, 160.5), 104.0);
    }

    #[test]
    fn test_clamped_at_walls() {
        let field = Field::new(400.0, 300.0).unwrap();
        assert_eq!(next_y(198.0, 295.0, &field), 200.0);
        assert_eq!(next_y(2.0, 5.0, &field), 0.0);
        assert_eq!(next_y(0.0, 5.0, &field), 0.0);
    }
}
