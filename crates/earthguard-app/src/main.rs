//! EARTHGUARD runner: plays one session headless (or at wall-clock pace)
//! under the autopilot and reports the outcome.
//!
//! Usage:
//!   cargo run -p earthguard-app -- --seed 7 --ticks 7200
//!   RUST_LOG=earthguard_sim=debug cargo run -p earthguard-app -- --realtime

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use earthguard_app::autopilot::{Autopilot, DEFAULT_TAP_INTERVAL};
use earthguard_app::runner::{self, RunSummary};
use earthguard_core::config::Tuning;
use earthguard_sim::engine::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "earthguard")]
#[command(about = "Run an EARTHGUARD session under the autopilot")]
struct Args {
    /// RNG seed; the same seed replays the same session
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many ticks (60 per second) if the session has not ended
    #[arg(long, default_value_t = 18_000)]
    ticks: u64,

    /// JSON file with tuning overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run on the game loop thread at wall-clock pace
    #[arg(long)]
    realtime: bool,

    /// Playback speed for --realtime
    #[arg(long, default_value_t = 1.0)]
    time_scale: f64,

    /// Ticks between autopilot taps
    #[arg(long, default_value_t = DEFAULT_TAP_INTERVAL)]
    tap_interval: u64,

    /// Let the session play out with no taps at all
    #[arg(long)]
    no_autopilot: bool,

    /// Write the final snapshot as JSON
    #[arg(long)]
    snapshot_out: Option<PathBuf>,
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    Tuning::from_json_str(&text).with_context(|| format!("invalid config: {}", path.display()))
}

fn print_summary(summary: &RunSummary) {
    let snap = &summary.final_snapshot;
    println!("=== SESSION RESULT ===");
    println!("  Phase:            {:?}", snap.phase);
    println!("  Ticks:            {}", summary.ticks);
    println!("  Elapsed:          {:.1}s", snap.stats.elapsed_secs);
    println!("  Score:            {}", snap.stats.score);
    println!("  Enemies killed:   {}", snap.stats.enemies_destroyed);
    println!("  Shields broken:   {}", snap.stats.shields_broken);
    println!("  Pickups:          {}", snap.stats.pickups_collected);
    println!("  Mega blasts:      {}", snap.stats.mega_blasts_fired);
    println!(
        "  Earth:            {:.0}/{:.0}",
        snap.meters.earth, snap.meters.earth_max
    );
    println!(
        "  Mothership:       {:.0}/{:.0}",
        snap.meters.mothership, snap.meters.mothership_max
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = SimConfig {
        seed: args.seed,
        time_scale: args.time_scale,
        tuning: load_tuning(args.config.as_ref())?,
    };
    let pilot = (!args.no_autopilot).then(|| Autopilot::new(args.tap_interval));

    let summary = if args.realtime {
        runner::run_realtime(config, args.ticks, pilot)?
    } else {
        runner::run_headless(config, args.ticks, pilot)
    };
    print_summary(&summary);

    if let Some(path) = args.snapshot_out {
        let json = serde_json::to_vec_pretty(&summary.final_snapshot)
            .context("failed to serialize snapshot json")?;
        fs::write(&path, json)
            .with_context(|| format!("failed writing snapshot: {}", path.display()))?;
        println!("  Snapshot JSON:    {}", path.display());
    }

    Ok(())
}
