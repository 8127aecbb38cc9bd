//! SAV Converter entry point
//!
//! `sav-converter to-json <file.sav>` / `from-json <file.json>` run the
//! external converter; `credits [seconds]` plays the credits minigame headless
//! on autopilot.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};

use sav_converter::renderer::{Vertex, build_frame, to_clip_space};
use sav_converter::{AppContext, ConversionMode, Settings};

/// Simulated frame time for the headless credits run (~60 fps)
const FRAME: Duration = Duration::from_micros(16_667);

#[derive(Parser)]
#[command(author, version, about = "SAV <-> JSON save converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Convert a .sav file to JSON
    ToJson { input: PathBuf },
    /// Convert a JSON file back to .sav
    FromJson { input: PathBuf },
    /// Play the credits minigame on autopilot
    Credits {
        #[arg(default_value_t = 10)]
        seconds: u64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("SAV Converter starting...");

    let settings = Settings::load(&Settings::config_path());
    let app = AppContext::new(settings);

    match cli.cmd {
        Cmd::ToJson { input } => run_conversion(&app, ConversionMode::SavToJson, &input),
        Cmd::FromJson { input } => run_conversion(&app, ConversionMode::JsonToSav, &input),
        Cmd::Credits { seconds } => {
            run_credits(&app, seconds);
            ExitCode::SUCCESS
        }
    }
}

fn run_conversion(app: &AppContext, mode: ConversionMode, input: &Path) -> ExitCode {
    let result = app.convert(mode, input, |percent| {
        let filled = (percent / 5.0) as usize;
        eprint!("\r[{:<20}] {:3.0}%", "#".repeat(filled), percent);
        let _ = std::io::stderr().flush();
    });
    if app.settings.progress_animation {
        eprintln!();
    }

    match result {
        Ok(output) => {
            println!("Converted to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Conversion failed:\n{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run_credits(app: &AppContext, secs: u64) {
    println!("creator: bongoblob");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let mut game = app.credits(seed);
    game.autopilot = true;

    let frames = secs * 1_000_000 / FRAME.as_micros() as u64;
    let mut next_report = 1000;
    for _ in 0..frames {
        for event in game.update(FRAME) {
            log::debug!("{:?}", event);
        }
        let mut vertices = build_frame(&game.snapshot());
        to_clip_space(&mut vertices);
        if game.clock_ms() >= next_report {
            let snap = game.snapshot();
            log::info!(
                "t={}s score={} health={} hostiles={} toughness={} frame={}B",
                next_report / 1000,
                snap.score,
                snap.health,
                snap.hostiles.len(),
                snap.base_hits,
                vertices.len() * Vertex::STRIDE
            );
            next_report += 1000;
        }
    }

    let snap = game.snapshot();
    println!(
        "Final score {} after {} shots (health {})",
        snap.score,
        game.shots_fired(),
        snap.health
    );
    match serde_json::to_string(&snap) {
        Ok(json) => log::debug!("Final snapshot: {}", json),
        Err(err) => log::warn!("Could not serialize snapshot: {}", err),
    }
}
