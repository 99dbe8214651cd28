//! Hook Drop headless demo
//!
//! Plays one game with the autopilot at a fixed frame rate and prints the
//! final snapshot as JSON. Usage: `hook-drop [settings.json] [keyboard|touch]`

use hook_drop::sim::autopilot;
use hook_drop::{ControlScheme, FrameLoop, LoopStatus, Settings};

fn main() {
    env_logger::init();
    log::info!("Hook Drop (headless) starting...");

    let mut args = std::env::args().skip(1);
    let mut settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    if let Some(name) = args.next() {
        match ControlScheme::from_str(&name) {
            Some(scheme) => settings.control = scheme,
            None => log::warn!(
                "Unknown control scheme '{}', keeping {}",
                name,
                settings.control.as_str()
            ),
        }
    }
    log::info!(
        "Control: {} (step {}), {} Hz, frame cap {}",
        settings.control.as_str(),
        settings.control.step(),
        settings.tick_rate_hz,
        settings.max_frames
    );

    let mut frame_loop = FrameLoop::from_settings(&settings);
    frame_loop.start();

    let frame_dt = settings.tick_dt();
    let mut frames = 0;
    while frames < settings.max_frames {
        let intent = autopilot::steer(&frame_loop.game().snapshot());
        frame_loop.forward_intent(settings.control, intent);

        frames += 1;
        if let LoopStatus::Over { final_score } = frame_loop.frame(frame_dt) {
            log::info!("Game over after {} frames, score {}", frames, final_score);
            break;
        }
    }
    frame_loop.shutdown();

    let snapshot = frame_loop.game().snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
}
