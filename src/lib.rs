pub mod error;
pub mod simulation;
pub mod configuration;
pub mod reporting;
pub mod benchmark;

pub use error::{Result, SimError};

pub use simulation::states::{Body, System, NVec2};
pub use simulation::forces::{pair_force, ForceSet, ForceTerm, FullGravity, SymmetricGravity};
pub use simulation::integrator::euler_step;
pub use simulation::params::{Parameters, GRAV_CONST};
pub use simulation::engine::Engine;
pub use simulation::scenario::{run, run_with_reporter, Simulation};

pub use configuration::config::{
    EngineConfig, ExperimentConfig, ForceMode, MassConvention, ParametersConfig, RunConfig,
};

pub use reporting::snapshot::{Reporter, SnapshotWriter, TrajectoryRecorder};

pub use benchmark::benchmark::{
    run_experiment, summarize, write_summary, BenchRecord, ModeComparison,
};
