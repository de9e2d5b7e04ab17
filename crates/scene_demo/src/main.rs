//! Reflecting pool demo
//!
//! Builds the demo scene on an in-memory scene graph and runs a scripted,
//! fixed-step frame loop that fires a projectile every half second.
//!
//! ```text
//! scene_demo [config.toml|config.ron] [--frames N] [--dt SECONDS]
//! ```

use std::process::ExitCode;

use clap::Parser;
use scene_engine::foundation::logging;
use scene_engine::foundation::time::FrameClock;
use scene_engine::prelude::*;
use thiserror::Error;

const DEFAULT_CONFIG: &str = "scene_demo.toml";
const DEFAULT_FRAMES: u64 = 600;
const DEFAULT_DT: f32 = 1.0 / 60.0;
const FIRE_EVERY_FRAMES: u64 = 30;

#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[derive(Parser, Debug)]
#[command(
    name = "scene_demo",
    about = "Runs the reflecting pool demo headless, firing a projectile every half second"
)]
struct Args {
    /// Config file (.toml or .ron); defaults are used when it is missing
    #[arg(value_name = "CONFIG", default_value = DEFAULT_CONFIG)]
    config_path: String,

    /// Number of frames to simulate
    #[arg(long, value_name = "N", default_value_t = DEFAULT_FRAMES)]
    frames: u64,

    /// Fixed frame delta in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_DT, value_parser = parse_delta)]
    dt: f32,
}

fn parse_delta(value: &str) -> Result<f32, String> {
    let dt: f32 = value
        .parse()
        .map_err(|_| format!("invalid delta: {value}"))?;
    if dt.is_finite() && dt >= 0.0 {
        Ok(dt)
    } else {
        Err(format!("delta must be a non-negative number, got {value}"))
    }
}

fn run(args: &Args) -> Result<(), DemoError> {
    let config = DemoConfig::load_or_default(&args.config_path)?;
    logging::init(&config.engine.log_level);

    let mut demo = SceneDemo::new(config, SimpleListGraph::new())?;
    log::info!("Running {} frames at dt = {:.4}s", args.frames, args.dt);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let frames_per_second = (1.0 / args.dt.max(f32::EPSILON)).round().max(1.0) as u64;
    let mut fired = 0usize;
    let mut expired = 0usize;
    let mut faults = 0usize;
    let mut wall_clock = FrameClock::new();

    for frame in 0..args.frames {
        wall_clock.delta();
        if frame % FIRE_EVERY_FRAMES == 0 {
            demo.push_event(InputEvent::KeyPressed(KeyCode::Space));
        }

        let stats = demo.frame(args.dt);
        fired += stats.spawned;
        expired += stats.expired;
        faults += stats.scene_faults;

        if (frame + 1) % frames_per_second == 0 {
            log::info!(
                "frame {:>5}: {} live, {} fired, {} expired, water t = {:.2}",
                frame + 1,
                stats.live,
                fired,
                expired,
                demo.water_time()
            );
        }
    }

    if faults > 0 {
        log::warn!("{faults} scene graph operations failed");
    }
    log::info!(
        "Finished: {fired} fired, {expired} expired, {} still live, {} scene nodes ({:.0} frames/s wall clock)",
        demo.projectiles().len(),
        demo.graph().node_count(),
        wall_clock.average_fps()
    );
    demo.shutdown();
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Logging is not initialised when the config fails to load.
            logging::init("info");
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["scene_demo"]).unwrap();
        assert_eq!(args.config_path, DEFAULT_CONFIG);
        assert_eq!(args.frames, DEFAULT_FRAMES);
        assert!((args.dt - DEFAULT_DT).abs() < 1e-6);
    }

    #[test]
    fn test_options() {
        let args =
            Args::try_parse_from(["scene_demo", "demo.ron", "--frames", "10", "--dt", "0.5"])
                .unwrap();
        assert_eq!(args.config_path, "demo.ron");
        assert_eq!(args.frames, 10);
        assert_eq!(args.dt, 0.5);
    }

    #[test]
    fn test_bad_options() {
        assert!(Args::try_parse_from(["scene_demo", "--frames"]).is_err());
        assert!(Args::try_parse_from(["scene_demo", "--frames", "many"]).is_err());
        assert!(Args::try_parse_from(["scene_demo", "--dt", "-1"]).is_err());
        assert!(Args::try_parse_from(["scene_demo", "--dt", "inf"]).is_err());
        assert!(Args::try_parse_from(["scene_demo", "--verbose"]).is_err());
    }

    #[test]
    fn test_parse_delta() {
        assert_eq!(parse_delta("0.25"), Ok(0.25));
        assert_eq!(parse_delta("0"), Ok(0.0));
        assert!(parse_delta("NaN").is_err());
        assert!(parse_delta("-0.1").is_err());
    }
}
