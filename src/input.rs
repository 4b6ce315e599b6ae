//! Pointer input
//!
//! Pointer coordinates arrive relative to the surface origin. The paddle is
//! centered on the pointer and kept inside the field; the newest event wins.

use crate::consts::PADDLE_HEIGHT;
use crate::sim::{Field, GameState};

/// Player paddle top edge for a pointer at `pointer_y`
pub fn paddle_y_for_pointer(pointer_y: f32, field: &Field) -> f32 {
    field.clamp_paddle_y(pointer_y - PADDLE_HEIGHT / 2.0)
}

/// Move the player paddle under the pointer
pub fn apply_pointer(state: &mut GameState, pointer_y: f32) {
    state.player.y = paddle_y_for_pointer(pointer_y, &state.field);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::FixedSigns;

    #[test]
    fn test_pointer_centers_paddle() {
        let field = Field::new(400.0, 300.0).unwrap();
        assert_eq!(paddle_y_for_pointer(120.0, &field), 70.0);
    }

    #[test]
    fn test_pointer_clamped_to_field() {
        let field = Field::new(400.0, 300.0).unwrap();
        assert_eq!(paddle_y_for_pointer(10.0, &field), 0.0);
        assert_eq!(paddle_y_for_pointer(-40.0, &field), 0.0);
        assert_eq!(paddle_y_for_pointer(290.0, &field), 200.0);
        assert_eq!(paddle_y_for_pointer(1000.0, &field), 200.0);
    }

    #[test]
    fn test_last_event_wins() {
        let field = Field::new(400.0, 300.0).unwrap();
        let mut state = GameState::new(field, &mut FixedSigns::new(&[true]));

        apply_pointer(&mut state, 80.0);
        apply_pointer(&mut state, 210.0);

        assert_eq!(state.player.y, 160.0);
        assert_eq!(state.opponent.y, 100.0);
    }
}
