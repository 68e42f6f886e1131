use std::io::{self, BufWriter, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use u_partition::allocator::{AllocationKpi, ReusePolicy};
use u_partition::config::{PartitionConfig, DEFAULT_ACTIVITY_COUNT};
use u_partition::factory::ActivityFactory;
use u_partition::models::{Hour, DEFAULT_MAX_HOUR};
use u_partition::render::render_timeline;
use u_partition::validation::validate_allocation;

/// Generate random activities and assign the fewest resources to them.
#[derive(Debug, Parser)]
#[command(name = "u-partition", version, about, long_about = None)]
struct Cli {
    /// Number of activities to generate.
    #[arg(short = 'n', long, default_value_t = DEFAULT_ACTIVITY_COUNT)]
    count: usize,

    /// Last hour of the horizon (inclusive).
    #[arg(long, default_value_t = DEFAULT_MAX_HOUR)]
    max_hour: Hour,

    /// RNG seed for a reproducible pool.
    #[arg(long)]
    seed: Option<u64>,

    /// Reuse the longest-idle resource instead of the most recently freed.
    #[arg(long)]
    fifo: bool,

    /// Print the timeline of every activity.
    #[arg(long)]
    render: bool,

    /// Print KPIs as JSON.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> PartitionConfig {
        let mut config = PartitionConfig::default()
            .with_activity_count(self.count)
            .with_max_hour(self.max_hour)
            .with_reuse(if self.fifo {
                ReusePolicy::Fifo
            } else {
                ReusePolicy::Lifo
            });
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = cli.config();
    config.validate().context("invalid configuration")?;
    tracing::debug!(?config, "starting run");

    let mut factory = ActivityFactory::from_config(&config);
    let mut activities = match config.seed {
        Some(seed) => factory.generate_seeded(config.activity_count, seed),
        None => factory.generate(config.activity_count, &mut SmallRng::from_os_rng()),
    }
    .context("failed to generate activities")?;

    let allocation = config
        .allocator()
        .allocate(&mut activities)
        .context("allocation failed")?;

    if let Err(errors) = validate_allocation(&activities) {
        for e in &errors {
            tracing::error!(kind = ?e.kind, "{}", e.message);
        }
        bail!("allocation produced {} invalid assignments", errors.len());
    }

    let kpi = AllocationKpi::calculate(&activities, config.max_hour);
    tracing::info!(
        activities = allocation.activity_count,
        resources = allocation.resource_count,
        peak = kpi.peak_concurrency,
        minimal = kpi.is_minimal(),
        "allocation finished"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.render {
        render_timeline(&activities, config.max_hour, &mut out)
            .context("failed to write timeline")?;
    }

    if cli.json {
        serde_json::to_writer_pretty(&mut out, &kpi).context("failed to write KPIs")?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "{} activities, {} resources (peak concurrency {}), avg utilization {:.1}%",
            kpi.activity_count,
            kpi.resource_count,
            kpi.peak_concurrency,
            kpi.avg_utilization * 100.0
        )?;
    }
    out.flush()?;

    Ok(())
}
