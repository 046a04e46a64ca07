use std::collections::BTreeMap;
use std::io::{self, Write};
use std::time::Duration;

use crate::configuration::config::{ExperimentConfig, ForceMode};
use crate::error::Result;
use crate::reporting::snapshot::SnapshotWriter;
use crate::simulation::scenario::Simulation;

/// Timing of one simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct BenchRecord {
    pub n: usize,
    pub mode: ForceMode,
    pub elapsed: Duration,
}

/// Mean timings of both modes at one population size
#[derive(Debug, Clone, PartialEq)]
pub struct ModeComparison {
    pub n: usize,
    pub full_secs: Option<f64>,
    pub symmetric_secs: Option<f64>,
}

impl ModeComparison {
    /// full / symmetric, when both modes were timed
    pub fn speedup(&self) -> Option<f64> {
        match (self.full_secs, self.symmetric_secs) {
            (Some(full), Some(sym)) if sym > 0.0 => Some(full / sym),
            _ => None,
        }
    }
}

pub const CSV_HEADER: &str = "NUM_OBJECTS, thirdLaw, time";

/// Run every entry of the experiment matrix `repetitions` times
///
/// Each run starts from a fresh line of `n` bodies and times only the
/// stepping loop. Writes the header and one line per run to `out`, a blank
/// line between entries. Snapshots, when enabled, go to the same writer.
pub fn run_experiment<W: Write>(
    cfg: &ExperimentConfig,
    out: &mut W,
) -> Result<Vec<BenchRecord>> {
    let parameters = cfg.parameters()?;
    let mut records = Vec::new();

    writeln!(out, "{CSV_HEADER}")?;

    for run in &cfg.runs {
        let engine = cfg.engine(run)?;

        for _ in 0..run.repetitions {
            let mut sim = Simulation::initialize(run.n, parameters.clone(), engine.clone())?;
            let elapsed = {
                let mut snapshots = SnapshotWriter::new(&mut *out);
                sim.run_reported(&mut snapshots)?
            };

            // record what the simulation actually ran
            let (n, mode) = (sim.bodies().len(), sim.mode());
            write_record(out, n, mode, elapsed)?;
            records.push(BenchRecord { n, mode, elapsed });
        }

        writeln!(out)?;
    }

    Ok(records)
}

fn write_record<W: Write>(
    out: &mut W,
    n: usize,
    mode: ForceMode,
    elapsed: Duration,
) -> io::Result<()> {
    let third_law = u8::from(mode.is_symmetric());
    writeln!(out, "  {},   {},   {:.6}", n, third_law, elapsed.as_secs_f64())
}

/// Group records by population size and average each mode
pub fn summarize(records: &[BenchRecord]) -> Vec<ModeComparison> {
    let mut sums: BTreeMap<(usize, ForceMode), (f64, u32)> = BTreeMap::new();
    for r in records {
        let entry = sums.entry((r.n, r.mode)).or_insert((0.0, 0));
        entry.0 += r.elapsed.as_secs_f64();
        entry.1 += 1;
    }

    let mut by_n: BTreeMap<usize, ModeComparison> = BTreeMap::new();
    for ((n, mode), (total, count)) in sums {
        let mean = total / count as f64;
        let cmp = by_n.entry(n).or_insert(ModeComparison {
            n,
            full_secs: None,
            symmetric_secs: None,
        });
        match mode {
            ForceMode::Full => cmp.full_secs = Some(mean),
            ForceMode::Symmetric => cmp.symmetric_secs = Some(mean),
        }
    }

    by_n.into_values().collect()
}

/// Print a summary table, one row per population size
pub fn write_summary<W: Write>(summary: &[ModeComparison], out: &mut W) -> io::Result<()> {
    writeln!(out, "N,full_s,symmetric_s,speedup")?;
    for c in summary {
        let secs = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |s| format!("{s:.6}"));
        let speedup = c
            .speedup()
            .map_or_else(|| "-".to_string(), |s| format!("{s:.3}"));
        writeln!(
            out,
            "{},{},{},{}",
            c.n,
            secs(c.full_secs),
            secs(c.symmetric_secs),
            speedup
        )?;
    }
    Ok(())
}
