//! Canvas Pong entry point
//!
//! On the web this starts the browser host. Natively it plays a headless match
//! against a scripted pointer and prints a JSON summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    canvas_pong::platform::web::run().map_err(|e| {
        log::error!("Startup failed: {e}");
        e.into()
    })
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use canvas_pong::driver::run_headless;
    use canvas_pong::renderer::RecordingSurface;
    use canvas_pong::sim::{Field, GameState};
    use canvas_pong::{Game, Settings};
    use serde::Serialize;

    /// One minute at 60 Hz
    const DEFAULT_FRAMES: u64 = 3600;
    /// Scripted pointer speed; quicker than the opponent but still beatable
    const POINTER_SPEED: f32 = 7.0;

    #[derive(Debug, Serialize)]
    struct Summary<'a> {
        seed: u64,
        frames: u64,
        player_score: u32,
        opponent_score: u32,
        state: &'a GameState,
    }

    pub fn run() -> canvas_pong::Result<()> {
        let mut args = std::env::args().skip(1);
        let frames = parse_arg(args.next(), "frames").unwrap_or(DEFAULT_FRAMES);
        let seed = parse_arg(args.next(), "seed").unwrap_or_else(clock_seed);

        log::info!("Canvas Pong (native, headless) starting: {frames} frames, seed {seed}");

        let mut game = Game::new(Field::default(), seed, Settings::load());
        let mut surface = RecordingSurface::default();

        let mut pointer = game.state.player.center_y();
        run_headless(&mut game, &mut surface, frames, |state| {
            let target = state.ball.center().y;
            pointer += (target - pointer).clamp(-POINTER_SPEED, POINTER_SPEED);
            Some(pointer)
        });

        let (player_score, opponent_score) = game.state.scores();
        log::info!("Final score {player_score} - {opponent_score}");

        let summary = Summary {
            seed,
            frames: surface.frames(),
            player_score,
            opponent_score,
            state: &game.state,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }

    fn parse_arg(arg: Option<String>, name: &str) -> Option<u64> {
        let raw = arg?;
        match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid {name} '{raw}'");
                None
            }
        }
    }

    fn clock_seed() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    if let Err(e) = headless::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
