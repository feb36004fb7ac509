//! Platformkit main entry point.
//!
//! Runs the platformer controller headless: a scripted sequence of input
//! frames is played back at a fixed tick and the player state is logged.
//!
//! # Project Structure
//!
//! - [`components`](platformkit::components) – locomotion controller, rigid body, shooter, etc.
//! - [`events`](platformkit::events) – ground contacts, camera shake, effect and audio commands
//! - [`game`](platformkit::game) – world and schedule construction
//! - [`resources`](platformkit::resources) – time, input, config, camera, animation clips
//! - [`systems`](platformkit::systems) – the per-tick systems
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --script demo.json --ticks 600
//! RUST_LOG=debug cargo run
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use bevy_ecs::entity::Entity;
use clap::Parser;
use log::{error, info, warn};

use platformkit::game::{Game, demo_script};
use platformkit::resources::gameconfig::GameConfig;
use platformkit::resources::inputscript::InputScript;

/// Headless platformer locomotion runner.
#[derive(Parser)]
#[command(version, about = "Plays an input script through the platformer controller.")]
struct Cli {
    /// INI file with movement, physics and shooting tunables.
    /// Defaults to ./config.ini, falling back to built-in values if missing.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON input script. Defaults to a built-in demo sequence.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Number of ticks to run. Defaults to the script length plus one second.
    #[arg(long)]
    ticks: Option<usize>,

    /// Seconds per tick.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Log the player state every N ticks (0 disables periodic reports).
    #[arg(long, default_value_t = 30)]
    report_every: usize,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        if cli.config.is_some() {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
        warn!("{}; using defaults", e);
    }

    let script = match &cli.script {
        Some(path) => match InputScript::load(path) {
            Ok(script) => script,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => demo_script(),
    };

    if cli.dt <= 0.0 {
        error!("--dt must be positive, got {}", cli.dt);
        return ExitCode::FAILURE;
    }
    let ticks = cli
        .ticks
        .unwrap_or_else(|| script.len() + (1.0 / cli.dt).ceil() as usize);

    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Running {} ticks at dt={}", ticks, cli.dt);
    for tick in 0..ticks {
        game.step(&script.frame(tick), cli.dt);
        if cli.report_every > 0 && (tick + 1) % cli.report_every == 0 {
            report(&game, tick + 1);
        }
    }
    report(&game, ticks);
    let alive = game.world.query::<Entity>().iter(&game.world).count();
    info!("Finished with {} entities alive", alive);
    ExitCode::SUCCESS
}

fn report(game: &Game, tick: usize) {
    let pos = game.player_position();
    let velocity = game.player_body().map_or_else(Default::default, |b| b.velocity);
    match game.player_controller() {
        Some(controller) => info!(
            "tick {:>5}: pos=({:.3}, {:.3}) vel=({:.3}, {:.3}) {:?} facing {:?}",
            tick,
            pos.x,
            pos.y,
            velocity.x,
            velocity.y,
            controller.status(),
            controller.facing()
        ),
        None => warn!("tick {:>5}: player has no locomotion controller", tick),
    }
}
