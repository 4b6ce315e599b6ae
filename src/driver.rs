//! Frame driver
//!
//! [`Game`] bundles the session state with its serve randomness and settings.
//! A host calls [`Game::run_frame`] once per display refresh; pointer events go
//! through [`Game::on_pointer`] whenever they arrive.

use crate::input;
use crate::renderer::{self, Surface};
use crate::settings::Settings;
use crate::sim::{Field, GameEvent, GameState, PcgSigns, SignSource, tick};

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game<S: SignSource = PcgSigns> {
    pub state: GameState,
    pub settings: Settings,
    signs: S,
}

impl Game<PcgSigns> {
    /// New session with seeded serve directions
    pub fn new(field: Field, seed: u64, settings: Settings) -> Self {
        Self::with_signs(field, PcgSigns::new(seed), settings)
    }
}

impl<S: SignSource> Game<S> {
    pub fn with_signs(field: Field, mut signs: S, settings: Settings) -> Self {
        let state = GameState::new(field, &mut signs);
        log::info!(
            "Game initialized on {}x{} field",
            field.width,
            field.height
        );
        Self {
            state,
            settings,
            signs,
        }
    }

    /// Pointer moved to `pointer_y` (relative to the surface top)
    pub fn on_pointer(&mut self, pointer_y: f32) {
        input::apply_pointer(&mut self.state, pointer_y);
    }

    /// Advance the simulation one step and log what happened
    pub fn update(&mut self) {
        tick(&mut self.state, &mut self.signs);

        for event in &self.state.events {
            match event {
                GameEvent::Scored { side } => {
                    let (player, opponent) = self.state.scores();
                    log::info!("Point to {side} ({player} - {opponent})");
                }
                GameEvent::PaddleHit { side } => {
                    log::trace!(
                        "{side} paddle hit, ball vel ({:.1}, {:.1})",
                        self.state.ball.vel.x,
                        self.state.ball.vel.y
                    );
                }
                GameEvent::WallBounce => log::trace!("wall bounce at frame {}", self.state.frame),
            }
        }
    }

    /// Draw the current state
    pub fn render<T: Surface + ?Sized>(&self, surface: &mut T) {
        renderer::render(&self.state, &self.settings, surface);
    }

    /// One simulation step followed by one render
    pub fn run_frame<T: Surface + ?Sized>(&mut self, surface: &mut T) {
        self.update();
        self.render(surface);
    }
}

/// Drive `frames` frames back to back without a display.
///
/// `pointer` is consulted before every frame and stands in for the host's
/// input events; returning `None` leaves the paddle where it is.
pub fn run_headless<S, T, F>(game: &mut Game<S>, surface: &mut T, frames: u64, mut pointer: F)
where
    S: SignSource,
    T: Surface + ?Sized,
    F: FnMut(&GameState) -> Option<f32>,
{
    for _ in 0..frames {
        if let Some(y) = pointer(&game.state) {
            game.on_pointer(y);
        }
        game.run_frame(surface);
    }
}
