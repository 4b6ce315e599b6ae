//! Fixed-step simulation tick
//!
//! One call advances the game by exactly one frame. Order matters: walls are
//! resolved before paddles, and scoring only after both paddles had their chance.

use super::opponent;
use super::rng::SignSource;
use super::state::{Ball, Field, GameEvent, GameState, Paddle, Side};
use crate::consts::*;

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, signs: &mut impl SignSource) {
    state.events.clear();
    state.frame += 1;

    let field = state.field;
    state.ball.pos += state.ball.vel;

    if bounce_off_walls(&mut state.ball, &field) {
        state.events.push(GameEvent::WallBounce);
    }

    for side in [Side::Player, Side::Opponent] {
        // Borrow the paddle field directly so the ball stays mutably borrowable
        let paddle = match side {
            Side::Player => &state.player,
            Side::Opponent => &state.opponent,
        };
        if deflect_off_paddle(&mut state.ball, paddle) {
            state.events.push(GameEvent::PaddleHit { side });
        }
    }

    if let Some(side) = rally_winner(&state.ball, &field) {
        state.paddle_mut(side).score += 1;
        state.ball.serve(&field, signs);
        state.events.push(GameEvent::Scored { side });
    }

    opponent::update(state);
}

/// Reflect off the top/bottom wall. Returns true if the ball bounced.
fn bounce_off_walls(ball: &mut Ball, field: &Field) -> bool {
    if ball.pos.y <= 0.0 || ball.pos.y + BALL_SIZE >= field.height {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = ball.pos.y.clamp(0.0, field.max_ball_y());
        true
    } else {
        false
    }
}

/// Send the ball back toward the other side with spin from the strike offset.
/// Returns true on contact.
fn deflect_off_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !ball.rect().overlaps(&paddle.rect()) {
        return false;
    }

    let speed = ball.vel.x.abs();
    ball.vel.x = match paddle.side {
        Side::Player => speed,
        Side::Opponent => -speed,
    };
    ball.vel.y = (ball.center().y - paddle.center_y()) * SPIN_FACTOR;
    true
}

/// Side that wins the rally if the ball has left the field horizontally
fn rally_winner(ball: &Ball, field: &Field) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Opponent)
    } else if ball.pos.x + BALL_SIZE > field.width {
        Some(Side::Player)
    } else {
        None
    }
}
