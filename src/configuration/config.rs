//! Configuration types for loading benchmark experiments from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of an
//! experiment. An experiment consists of:
//!
//! - [`ParametersConfig`] – step count, step size and gravitational constant
//! - [`EngineConfig`]     – mass convention and snapshot stride
//! - [`RunConfig`]        – one entry of the experiment matrix
//! - [`ExperimentConfig`] – top-level wrapper used to load an experiment from YAML
//!
//! # YAML format
//! Every section and field is optional; omitted values fall back to the
//! defaults of the original timing experiment.
//!
//! ```yaml
//! parameters:
//!   steps: 4                # time steps per run
//!   dt: 0.001               # fixed step size
//!   G: 6.673e-11            # gravitational constant
//!
//! engine:
//!   convention: "legacy"    # or "newtonian"
//!   report_every: 10        # omit to disable snapshots
//!
//! runs:
//!   - n: 1000
//!     mode: "full"          # or "symmetric"
//!     repetitions: 4
//!   - n: 1000
//!     mode: "symmetric"
//!     repetitions: 4
//! ```
//!
//! The harness maps this configuration into the runtime `Parameters` and
//! `Engine` types, validating them on the way.

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::engine::Engine;
use crate::simulation::params::{Parameters, DEFAULT_DT, DEFAULT_STEPS, GRAV_CONST};

/// Population sizes of the original timing experiment
pub const DEFAULT_SIZES: [usize; 7] = [10, 100, 1000, 2000, 3000, 4000, 5000];
pub const DEFAULT_REPETITIONS: u32 = 4;

/// How pairwise forces are evaluated
/// `mode: "full"` or `mode: "symmetric"`
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ForceMode {
    #[serde(rename = "full")] // every ordered pair, N(N-1) evaluations
    Full,

    // every unordered pair once, Newton's third law, N(N-1)/2 evaluations
    #[serde(rename = "symmetric")]
    #[default]
    Symmetric,
}

impl ForceMode {
    pub fn is_symmetric(self) -> bool {
        self == ForceMode::Symmetric
    }
}

/// Whether the accumulated force total is divided by the body's own mass
/// `convention: "legacy"` or `convention: "newtonian"`
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MassConvention {
    #[serde(rename = "legacy")] // pair term G*m_j*r/|r|^3 integrated directly as acceleration
    #[default]
    Legacy,

    #[serde(rename = "newtonian")] // pair term G*m_i*m_j*r/|r|^3, acceleration = F / m_i
    Newtonian,
}

/// Global numerical and physical parameters for an experiment
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub steps: u64, // time steps per run
    pub dt: f64, // time step size
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            dt: DEFAULT_DT,
            g: GRAV_CONST,
        }
    }
}

/// Engine options shared by every run of an experiment
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub convention: MassConvention, // how force totals become accelerations
    pub report_every: Option<u64>, // snapshot stride, none = no snapshots
}

/// One entry of the experiment matrix
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub n: usize, // number of bodies
    pub mode: ForceMode, // pair evaluation mode
    #[serde(default = "default_repetitions")]
    pub repetitions: u32, // timed runs of this entry
}

fn default_repetitions() -> u32 {
    DEFAULT_REPETITIONS
}

/// Top-level experiment configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ExperimentConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // numerical and physical parameters
    #[serde(default)]
    pub engine: EngineConfig, // engine options
    #[serde(default = "default_runs")]
    pub runs: Vec<RunConfig>, // experiment matrix, executed in order
}

fn default_runs() -> Vec<RunConfig> {
    DEFAULT_SIZES
        .iter()
        .flat_map(|&n| {
            [ForceMode::Full, ForceMode::Symmetric].map(|mode| RunConfig {
                n,
                mode,
                repetitions: DEFAULT_REPETITIONS,
            })
        })
        .collect()
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            parameters: ParametersConfig::default(),
            engine: EngineConfig::default(),
            runs: default_runs(),
        }
    }
}

impl ExperimentConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Validated runtime parameters
    pub fn parameters(&self) -> Result<Parameters> {
        let p = &self.parameters;
        Parameters::new(p.steps, p.dt, p.g)
    }

    /// Validated runtime engine settings for one run entry
    pub fn engine(&self, run: &RunConfig) -> Result<Engine> {
        let engine = Engine {
            mode: run.mode,
            convention: self.engine.convention,
            report_every: self.engine.report_every,
        };
        engine.validate()?;
        Ok(engine)
    }
}
