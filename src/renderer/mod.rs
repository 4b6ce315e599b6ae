//! Frame rendering
//!
//! The game draws through four primitives so that any 2D surface (the browser
//! canvas, or a recorder in tests and headless runs) can host it.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use crate::consts::{BALL_SIZE, PADDLE_HEIGHT, PADDLE_WIDTH};
use crate::settings::{NetStyle, Settings};
use crate::sim::{Field, GameState, Paddle};

/// A 2D drawing target
pub trait Surface {
    /// Wipe the whole surface
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str);
    /// Draw text with its baseline-left corner at `(x, y)`
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
}

/// Paint one frame. Reads state only.
pub fn render<S: Surface + ?Sized>(state: &GameState, settings: &Settings, surface: &mut S) {
    let field = &state.field;
    let theme = &settings.theme;

    surface.clear(field.width, field.height);

    draw_net(field, &settings.net, &theme.net, surface);
    draw_scores(state, settings, surface);

    draw_paddle(&state.player, &theme.player, surface);
    draw_paddle(&state.opponent, &theme.opponent, surface);

    let center = state.ball.center();
    surface.fill_circle(center.x, center.y, BALL_SIZE / 2.0, &theme.ball);
}

fn draw_net<S: Surface + ?Sized>(field: &Field, net: &NetStyle, color: &str, surface: &mut S) {
    if !net.is_valid() {
        return;
    }
    let x = field.width / 2.0 - net.dash_width / 2.0;
    // Spacing is at least MIN_SPACING, so this is bounded by the field height
    let dashes = (field.height / net.spacing).ceil() as u32;
    for i in 0..dashes {
        let y = i as f32 * net.spacing;
        surface.fill_rect(x, y, net.dash_width, net.dash_length, color);
    }
}

fn draw_scores<S: Surface + ?Sized>(state: &GameState, settings: &Settings, surface: &mut S) {
    let mid = state.field.width / 2.0;
    let layout = &settings.score;
    let theme = &settings.theme;

    surface.fill_text(
        &state.player.score.to_string(),
        mid + layout.player_offset,
        layout.baseline,
        &theme.score_font,
        &theme.player,
    );
    surface.fill_text(
        &state.opponent.score.to_string(),
        mid + layout.opponent_offset,
        layout.baseline,
        &theme.score_font,
        &theme.opponent,
    );
}

fn draw_paddle<S: Surface + ?Sized>(paddle: &Paddle, color: &str, surface: &mut S) {
    surface.fill_rect(paddle.x, paddle.y, PADDLE_WIDTH, PADDLE_HEIGHT, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::FixedSigns;
    use glam::Vec2;

    fn sample_state() -> GameState {
        let field = Field::new(400.0, 300.0).unwrap();
        let mut state = GameState::new(field, &mut FixedSigns::new(&[true]));
        state.player.score = 3;
        state.opponent.score = 7;
        state.ball.pos = Vec2::new(50.0, 60.0);
        state
    }

    #[test]
    fn test_frame_layout() {
        let state = sample_state();
        let settings = Settings::default();
        let mut surface = RecordingSurface::default();

        render(&state, &settings, &mut surface);
        let cmds = surface.commands();

        assert_eq!(
            cmds[0],
            DrawCommand::Clear {
                width: 400.0,
                height: 300.0
            }
        );

        // Dashes at y = 0, 30, ..., 270
        let dashes = cmds
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { color, .. } if color == "#555"))
            .count();
        assert_eq!(dashes, 10);

        assert!(cmds.contains(&DrawCommand::Text {
            text: "3".to_string(),
            x: 120.0,
            y: 50.0,
            font: "bold 36px Arial".to_string(),
            color: "#00e676".to_string(),
        }));
        assert!(cmds.contains(&DrawCommand::Text {
            text: "7".to_string(),
            x: 260.0,
            y: 50.0,
            font: "bold 36px Arial".to_string(),
            color: "#ff1744".to_string(),
        }));
        assert!(cmds.contains(&DrawCommand::Rect {
            x: 365.0,
            y: 100.0,
            w: 15.0,
            h: 100.0,
            color: "#ff1744".to_string(),
        }));
        assert_eq!(
            cmds.last(),
            Some(&DrawCommand::Circle {
                cx: 59.0,
                cy: 69.0,
                radius: 9.0,
                color: "#ffd600".to_string(),
            })
        );
    }

    #[test]
    fn test_render_twice_is_identical() {
        let state = sample_state();
        let before = state.clone();
        let settings = Settings::default();

        let mut first = RecordingSurface::default();
        let mut second = RecordingSurface::default();
        render(&state, &settings, &mut first);
        render(&state, &settings, &mut second);

        assert_eq!(first.commands(), second.commands());
        assert_eq!(state, before);
    }

    #[test]
    fn test_non_positive_net_spacing_skips_net() {
        let state = sample_state();
        let mut settings = Settings::default();
        settings.net.spacing = 0.0;
        let mut surface = RecordingSurface::default();

        render(&state, &settings, &mut surface);

        let rects = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        assert_eq!(rects, 2);
    }

    #[test]
    fn test_tiny_or_non_finite_spacing_renders_bounded_frame() {
        let state = sample_state();

        for spacing in [1e-6, 0.001, f32::NAN, f32::INFINITY, -5.0] {
            let mut settings = Settings::default();
            settings.net.spacing = spacing;
            let mut surface = RecordingSurface::default();

            render(&state, &settings, &mut surface);

            // Clear, two scores, two paddles, ball; no net
            assert_eq!(surface.commands().len(), 6, "spacing {spacing}");
        }
    }

    #[test]
    fn test_minimum_spacing_dash_count() {
        let state = sample_state();
        let mut settings = Settings::default();
        settings.net.spacing = NetStyle::MIN_SPACING;
        let mut surface = RecordingSurface::default();

        render(&state, &settings, &mut surface);

        let dashes = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { color, .. } if color == "#555"))
            .count();
        assert_eq!(dashes, 300);
    }
}
