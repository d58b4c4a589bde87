//! Headless driver for the floorcam engine.
//!
//! `floorcam [options.toml] [location.json] [seconds]`
//!
//! Loads options (defaults when omitted), reads the indoor location from a
//! JSON file that some other process keeps rewriting, follows it, and logs
//! the camera overlay once per second. Floor models resolve against the
//! working directory.

use std::path::Path;
use std::time::Duration;

use floorcam::engine::FloorCamEngine;
use floorcam::options::Options;
use floorcam::platform::{AssetFloorLoader, JsonFileLocation, Platform};
use web_time::Instant;

const DEFAULT_RUN_SECS: u64 = 10;
const VIEWPORT: (f32, f32) = (1280.0, 720.0);

fn load_options(arg: Option<&String>) -> Options {
    let Some(path) = arg else {
        return Options::default();
    };
    match Options::load(Path::new(path)) {
        Ok(opts) => opts,
        Err(e) => {
            log::error!("{e}; using defaults");
            Options::default()
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = load_options(args.first());
    let location_path = args.get(1).map_or("location.json", String::as_str);
    let run_for = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .map_or(Duration::from_secs(DEFAULT_RUN_SECS), Duration::from_secs);

    let platform = Platform {
        floor_loader: Box::new(AssetFloorLoader::new(
            ".",
            options.follow.floor_asset_patterns.clone(),
        )),
        location: Box::new(JsonFileLocation::new(location_path)),
        ..Platform::default()
    };

    let mut engine = match FloorCamEngine::new(options, platform, VIEWPORT.0, VIEWPORT.1) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    match engine.bootstrap() {
        Ok(loc) => log::info!("starting at ({}, {}) on floor {}", loc.x, loc.y, loc.floor),
        Err(e) => log::error!("bootstrap failed: {e}"),
    }
    engine.enable_follow();

    let started = Instant::now();
    let mut last_report = started;
    while started.elapsed() < run_for {
        if !engine.should_render() {
            std::thread::sleep(engine.time_to_next_frame());
            continue;
        }
        let _ = engine.frame();
        if last_report.elapsed() >= Duration::from_secs(1) {
            last_report = Instant::now();
            log::info!("{:.0} fps\n{}", engine.fps(), engine.debug_info());
        }
    }
    engine.dispose();
}
