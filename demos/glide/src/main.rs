//! glide: command-line driver for the glide_swarm simulator.
//!
//! A swarm of drones searches a toroidal grid for thermal sites.  Drones that
//! land on a site claim it, and drones that miss fall back to cells already
//! claimed nearby.  Two subcommands:
//!
//! - `glide run`: one simulation, optional CSV/SQLite output, final summary.
//! - `glide sweep`: mean swarm speed over a range of site densities.
//!
//! Parameters come from an optional TOML file (`--params`, see
//! `params.toml`) and are overridden by CLI flags.  Logging goes through
//! `tracing`; set `RUST_LOG` or `--log` (e.g. `--log gs_sim=debug`).

mod params;


use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gs_core::Tick;
use gs_output::{CsvWriter, OutputWriter, SimOutputObserver, SweepCsvWriter};
use gs_sim::{DensitySweep, NoopObserver, Sim, SimBuilder, SimObserver};
use gs_swarm::TickStats;

use params::{MeasureArgs, Params, SwarmArgs};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "glide")]
#[command(about = "Drone swarm searching a toroidal grid for thermals")]
struct Cli {
    /// TOML parameter file; CLI flags override its values
    #[arg(long, global = true)]
    params: Option<PathBuf>,

    /// Log filter directive, e.g. `info` or `gs_swarm=debug` (default: RUST_LOG, then info)
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single simulation
    Run(RunArgs),
    /// Measure mean speed over a range of site densities
    Sweep(SweepArgs),
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    swarm: SwarmArgs,

    /// Number of ticks to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Snapshot every N ticks (0 disables snapshots)
    #[arg(long)]
    interval: Option<u64>,

    /// Directory for snapshot and tick summary files
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write output.db instead of CSV files
    #[cfg(feature = "sqlite")]
    #[arg(long, default_value_t = false)]
    sqlite: bool,
}

#[derive(clap::Args, Debug)]
struct SweepArgs {
    #[command(flatten)]
    swarm: SwarmArgs,

    #[command(flatten)]
    measure: MeasureArgs,

    /// First density measured
    #[arg(long)]
    start: Option<f64>,

    /// Upper density bound (exclusive)
    #[arg(long)]
    end: Option<f64>,

    /// Number of densities
    #[arg(long)]
    steps: Option<u32>,

    /// Write the sweep table to this CSV file
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    let mut params = Params::load(cli.params.as_deref())?;
    tracing::debug!(?params, "parameters loaded");
    match cli.command {
        Command::Run(args) => run(&mut params, &args),
        Command::Sweep(args) => sweep(&mut params, &args),
    }
}

fn init_logging(directive: Option<&str>) {
    let filter = match directive {
        Some(d) => EnvFilter::new(d),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

// ── glide run ─────────────────────────────────────────────────────────────────

/// Running totals over the whole run, for the final summary.
#[derive(Default)]
struct RunTally {
    ticks:     u64,
    direct:    u64,
    recruited: u64,
    rejected:  u64,
    stranded:  u64,
    speed_sum: f64,
}

impl SimObserver for RunTally {
    fn on_tick_end(&mut self, _tick: Tick, stats: &TickStats) {
        self.ticks += 1;
        self.direct += u64::from(stats.direct);
        self.recruited += u64::from(stats.recruited);
        self.rejected += u64::from(stats.rejected);
        self.stranded += u64::from(stats.stranded);
        self.speed_sum += stats.mean_speed;
    }
}

impl RunTally {
    fn mean_speed(&self) -> f64 {
        if self.ticks == 0 { 0.0 } else { self.speed_sum / self.ticks as f64 }
    }
}

fn run(params: &mut Params, args: &RunArgs) -> Result<()> {
    args.swarm.apply(&mut params.swarm);
    if let Some(t) = args.ticks {
        params.run.total_ticks = t;
    }
    if let Some(i) = args.interval {
        params.run.output_interval_ticks = i;
    }
    if args.out.is_some() {
        params.output.dir = args.out.clone();
    }

    let cfg = &params.swarm;
    println!("=== glide: thermal search ===");
    println!(
        "Grid: {n} × {n}  |  Sites: {}  |  Drones: {}  |  Max move: {}  |  Seed: {}",
        cfg.site_count,
        cfg.drone_count,
        cfg.max_move,
        cfg.seed,
        n = cfg.grid_size,
    );
    println!("Ticks: {}", params.run.total_ticks);
    println!();

    let mut sim = SimBuilder::new(params.run.clone(), params.swarm.clone())
        .build()
        .context("building simulation")?;
    println!(
        "Sampled {} sites (density {:.4})",
        sim.swarm.field().site_count(),
        sim.swarm.field().density()
    );

    let mut tally = RunTally::default();
    let t0 = Instant::now();
    match params.output.dir.clone() {
        None => sim.run(&mut (&mut tally, NoopObserver)),
        Some(dir) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            #[cfg(feature = "sqlite")]
            if args.sqlite {
                let writer = gs_output::SqliteWriter::new(&dir)?;
                run_with_output(&mut sim, &mut tally, writer)?;
                println!("Output written to {}", dir.join("output.db").display());
                return finish_run(&sim, &tally, t0);
            }
            run_with_output(&mut sim, &mut tally, CsvWriter::new(&dir)?)?;
            println!("Output written to {}", dir.display());
        }
    }
    finish_run(&sim, &tally, t0)
}

fn run_with_output<W: OutputWriter>(sim: &mut Sim, tally: &mut RunTally, writer: W) -> Result<()> {
    let mut obs = SimOutputObserver::new(writer);
    sim.run(&mut (tally, &mut obs));
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing simulation output");
    }
    Ok(())
}

fn finish_run(sim: &Sim, tally: &RunTally, t0: Instant) -> Result<()> {
    let elapsed = t0.elapsed();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!();
    println!("{:<22} {:>12}", "Ticks", tally.ticks);
    println!("{:<22} {:>12}", "Direct landings", tally.direct);
    println!("{:<22} {:>12}", "Recruited moves", tally.recruited);
    println!("{:<22} {:>12}", "Rejected draws", tally.rejected);
    println!("{:<22} {:>12}", "Stranded", tally.stranded);
    println!("{:<22} {:>12.4}", "Mean speed", tally.mean_speed());
    println!("{:<22} {:>12}", "Known cells", sim.swarm.knowledge().known_cells());
    println!(
        "{:<22} {:>12}",
        "Drones on sites",
        format!("{}/{}", sim.swarm.drones_on_sites(), sim.swarm.drone_count())
    );
    Ok(())
}

// ── glide sweep ───────────────────────────────────────────────────────────────

fn sweep(params: &mut Params, args: &SweepArgs) -> Result<()> {
    args.swarm.apply(&mut params.swarm);
    args.measure.apply(&mut params.measure);
    if let Some(s) = args.start {
        params.sweep.start_density = s;
    }
    if let Some(e) = args.end {
        params.sweep.end_density = e;
    }
    if let Some(n) = args.steps {
        params.sweep.steps = n;
    }
    if args.out.is_some() {
        params.output.sweep_csv = args.out.clone();
    }

    let mut csv = match &params.output.sweep_csv {
        Some(path) => {
            ensure_parent(path)?;
            let w = SweepCsvWriter::new(path)
                .with_context(|| format!("creating sweep table {}", path.display()))?;
            Some(w)
        }
        None => None,
    };

    let sweep = DensitySweep::new(params.swarm.clone(), params.measure, params.sweep);
    let t0 = Instant::now();
    let mut write_error = None;

    println!("{:>10} {:>8} {:>12} {:>12}", "density", "sites", "mean_speed", "std_dev");
    sweep
        .run_with(|row| {
            println!(
                "{:>10.4} {:>8} {:>12.4} {:>12.4}",
                row.density, row.site_count, row.mean_speed, row.std_dev
            );
            if let Some(w) = csv.as_mut() {
                if let Err(e) = w.write_row(row) {
                    write_error.get_or_insert(e);
                }
            }
        })
        .context("running density sweep")?;
    println!("Sweep complete in {:.3} s", t0.elapsed().as_secs_f64());

    if let Some(e) = write_error {
        return Err(e).context("writing sweep table");
    }
    if let Some(path) = &params.output.sweep_csv {
        println!("Sweep table written to {}", path.display());
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    Ok(())
}
