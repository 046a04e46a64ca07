use thirdlaw::{run_experiment, summarize, write_summary, ExperimentConfig, MassConvention};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

/// Time full versus Newton's-third-law pair evaluation of 2-D gravity
#[derive(Parser, Debug)]
struct Args {
    /// Experiment YAML, as a path or a name under `scenarios/`.
    /// Without it the built-in experiment matrix runs.
    #[arg(short, long)]
    file_name: Option<String>,

    /// Print a snapshot of every body every K steps.
    #[arg(long, value_name = "K")]
    progress: Option<u64>,

    /// Divide force totals by each body's mass before integrating.
    #[arg(long, default_value_t = false)]
    newtonian: bool,

    /// Print mean timings and the symmetric speedup per size.
    #[arg(long, default_value_t = false)]
    summary: bool,
}

// load here to keep main clean
fn load_experiment(file_name: &str) -> Result<ExperimentConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.exists() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path)
        .with_context(|| format!("failed to open experiment {}", config_path.display()))?;
    let cfg = ExperimentConfig::from_reader(BufReader::new(file))?;
    Ok(cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut cfg = match &args.file_name {
        Some(name) => load_experiment(name)?,
        None => ExperimentConfig::default(),
    };
    if args.progress.is_some() {
        cfg.engine.report_every = args.progress;
    }
    if args.newtonian {
        cfg.engine.convention = MassConvention::Newtonian;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let records = run_experiment(&cfg, &mut out)?;

    if args.summary {
        write_summary(&summarize(&records), &mut out)?;
    }
    out.flush()?;

    Ok(())
}
