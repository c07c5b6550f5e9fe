//! relay_small: the default three-zone waste relay.
//!
//! Builds a 21 × 5 world (or the one described by the JSON config given as
//! the only argument), runs it to the last round, and writes per-round
//! summaries and per-robot snapshots to `output/relay_small/`.
//!
//! ```text
//! RUST_LOG=info cargo run -p relay_small -- [config.json]
//! ```

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wr_behavior::ZonePolicy;
use wr_core::{Color, Round, WorldConfig};
use wr_output::{CsvWriter, OutputWriter, SimOutputObserver};
use wr_sim::{Environment, RandomOrder, RoundSummary, SimBuilder, SimObserver, StepRecord, TracingObserver};

const OUTPUT_DIR: &str = "output/relay_small";

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Logs through `tracing` and writes CSV, keeping the last summary for the
/// final report.
struct RelayObserver<W: OutputWriter> {
    log:  TracingObserver,
    csv:  SimOutputObserver<W>,
    last: Option<RoundSummary>,
}

impl<W: OutputWriter> SimObserver for RelayObserver<W> {
    fn on_agent_step(&mut self, record: &StepRecord) {
        self.log.on_agent_step(record);
    }

    fn on_round_end(&mut self, summary: &RoundSummary) {
        self.log.on_round_end(summary);
        self.csv.on_round_end(summary);
        self.last = Some(*summary);
    }

    fn on_snapshot(&mut self, round: Round, env: &Environment) {
        self.csv.on_snapshot(round, env);
    }

    fn on_sim_end(&mut self, final_round: Round) {
        self.log.on_sim_end(final_round);
        self.csv.on_sim_end(final_round);
    }
}

fn load_config(path: Option<String>) -> Result<WorldConfig> {
    let Some(path) = path else {
        return Ok(WorldConfig::default());
    };
    let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = load_config(std::env::args().nth(1))?;
    info!(
        width = config.width,
        height = config.height,
        rounds = config.total_rounds,
        seed = config.seed,
        "=== relay_small ==="
    );

    let order = RandomOrder::seeded(config.seed);
    let mut sim = SimBuilder::new(config, ZonePolicy, order).build()?;
    for zone in sim.env.layout().zones() {
        info!(zone = %zone.color, x_min = zone.x_min, x_max = zone.x_max, "zone band");
    }

    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut observer = RelayObserver {
        log:  TracingObserver,
        csv:  SimOutputObserver::new(writer),
        last: None,
    };

    let started = Instant::now();
    sim.run(&mut observer)?;
    if let Some(e) = observer.csv.take_error() {
        return Err(e).context("writing CSV output");
    }

    if let Some(s) = observer.last {
        println!("Rounds run:        {}", s.round.0);
        for color in Color::ALL {
            println!("{:<8} on grid:   {}", color.as_str(), s.placed(color));
        }
        println!("Held by robots:    {}", s.held);
        println!("Destroyed:         {}", s.destroyed);
        println!("Inbox deliveries:  {}", sim.env.mailbox().delivered_total());
    }
    println!("Elapsed:           {:.2?}", started.elapsed());
    println!("Output:            {OUTPUT_DIR}/");
    Ok(())
}
