//! Stride - third-person locomotion on a fixed-step physics loop
//!
//! Runs a headless scripted session: walk, run, release, jump, and logs
//! the actor's state once per simulated second.

mod game;
mod settings;

use anyhow::Result;
use glam::Vec3;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use stride_game::InputHandler;

use crate::game::Game;
use crate::settings::Settings;

const FRAME_DT: f32 = 1.0 / 60.0;
const SESSION_FRAMES: u32 = 60 * 8;

/// Scripted key events, by frame number
fn scripted_events(frame: u32) -> &'static [(KeyCode, ElementState)] {
    match frame {
        60 => &[(KeyCode::KeyW, ElementState::Pressed)],
        180 => &[(KeyCode::ShiftLeft, ElementState::Pressed)],
        300 => &[(KeyCode::ShiftLeft, ElementState::Released)],
        360 => &[(KeyCode::KeyW, ElementState::Released)],
        400 => &[(KeyCode::Space, ElementState::Pressed)],
        401 => &[(KeyCode::Space, ElementState::Released)],
        _ => &[],
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting Stride locomotion session...");

    let settings = Settings::load();
    let mut game = Game::new(&settings, Vec3::new(0.0, 0.5, 0.0));
    let mut input = InputHandler::new();

    for frame in 0..SESSION_FRAMES {
        for &(key, state) in scripted_events(frame) {
            input.handle_keyboard(PhysicalKey::Code(key), state);
        }

        game.frame(FRAME_DT, &input.state);
        input.end_frame();

        if frame % 60 == 59 {
            let position = game.actor_position().unwrap_or_default();
            let tick = game.last_tick();
            info!(
                second = (frame + 1) / 60,
                x = position.x,
                y = position.y,
                z = position.z,
                grounded = game.controller.is_grounded(),
                speed = game.controller.current_speed(),
                velocity = ?tick.and_then(|t| t.velocity),
                camera = ?game.camera.position(),
                "actor"
            );
            debug!(segment = ?game.controller.sensor().debug_segment(position), "ground probe");
        }
    }

    if settings_missing() {
        settings.save()?;
    }

    info!(
        frames = game.time.frame_count,
        fixed_steps = game.time.fixed_step_count,
        "Session finished"
    );
    Ok(())
}

/// Write defaults on first run so they can be tuned by hand
fn settings_missing() -> bool {
    Settings::settings_path().is_some_and(|path| !path.exists())
}
