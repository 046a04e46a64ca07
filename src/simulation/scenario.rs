//! Build and run fully-initialized simulations
//!
//! A `Simulation` is the runtime bundle for one run:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System`)
//! - active force set (`ForceSet`) and its per-body force buffer
//!
//! Runs at different N are independent `Simulation` values; nothing is
//! shared between them.

use std::time::{Duration, Instant};

use crate::configuration::config::ForceMode;
use crate::error::Result;
use crate::reporting::snapshot::Reporter;
use crate::simulation::engine::Engine;
use crate::simulation::forces::ForceSet;
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System, NVec2};

/// Settings, kernel and body count are fixed at construction; the accessors
/// below are read-only.
///
/// ```compile_fail
/// use thirdlaw::{Engine, ForceMode, Parameters, Simulation};
///
/// let engine = Engine::new(ForceMode::Full);
/// let mut sim = Simulation::initialize(3, Parameters::default(), engine).unwrap();
/// sim.engine.mode = ForceMode::Symmetric;
/// ```
pub struct Simulation {
    engine: Engine,
    parameters: Parameters,
    system: System,
    forces: ForceSet,
    totals: Vec<NVec2>, // force totals of the last step
    evaluations: u64, // pair evaluations since construction
}

impl Simulation {
    /// Validate the settings and register the gravity kernel for `engine.mode`
    pub fn new(system: System, parameters: Parameters, engine: Engine) -> Result<Self> {
        parameters.validate()?;
        engine.validate()?;

        let forces = ForceSet::gravity(engine.mode, parameters.g, engine.convention);
        let totals = vec![NVec2::zeros(); system.len()];

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
            totals,
            evaluations: 0,
        })
    }

    /// Simulation over the default line of `n` bodies
    pub fn initialize(n: usize, parameters: Parameters, engine: Engine) -> Result<Self> {
        Self::new(System::initialize(n), parameters, engine)
    }

    /// Advance one time step, returning the pair evaluations it took
    pub fn step(&mut self) -> u64 {
        // Split &mut Simulation into &mut fields in one destructuring step
        let Simulation {
            system,
            parameters,
            forces,
            totals,
            evaluations,
            ..
        } = &mut *self;

        let step_evaluations = euler_step(system, forces, parameters, totals);
        *evaluations += step_evaluations;
        step_evaluations
    }

    /// Run `parameters.steps` steps and return the time spent stepping
    pub fn run(&mut self) -> Duration {
        let start = Instant::now();
        for _ in 0..self.parameters.steps {
            self.step();
        }
        start.elapsed()
    }

    /// Like [`Simulation::run`], snapshotting through `reporter`
    ///
    /// With `engine.report_every = Some(k)` the reporter sees the state at the
    /// start of every step whose index is a multiple of `k`, plus the final
    /// state after the last step. With `None` it is never called. Snapshot
    /// time is included in the returned duration.
    pub fn run_reported(&mut self, reporter: &mut dyn Reporter) -> Result<Duration> {
        let Some(stride) = self.engine.report_every else {
            return Ok(self.run());
        };

        let start = Instant::now();
        for _ in 0..self.parameters.steps {
            if self.system.step % stride == 0 {
                reporter.report(self.system.step, &self.system.bodies)?;
            }
            self.step();
        }
        let elapsed = start.elapsed();

        reporter.report(self.system.step, &self.system.bodies)?;
        Ok(elapsed)
    }

    /// Kernel selected at construction
    pub fn mode(&self) -> ForceMode {
        self.engine.mode
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn into_system(self) -> System {
        self.system
    }

    /// Per-body force totals computed by the most recent step
    pub fn force_totals(&self) -> &[NVec2] {
        &self.totals
    }

    pub fn pair_evaluations(&self) -> u64 {
        self.evaluations
    }
}

/// Simulate `n` bodies from the default line placement for `steps` steps
/// and return the wall-clock time of the stepping loop
pub fn run(n: usize, mode: ForceMode, steps: u64, dt: f64, g: f64) -> Result<Duration> {
    let parameters = Parameters::new(steps, dt, g)?;
    let mut sim = Simulation::initialize(n, parameters, Engine::new(mode))?;
    Ok(sim.run())
}

/// [`run`] with explicit engine settings and a reporter
pub fn run_with_reporter(
    n: usize,
    parameters: Parameters,
    engine: Engine,
    reporter: &mut dyn Reporter,
) -> Result<Duration> {
    let mut sim = Simulation::initialize(n, parameters, engine)?;
    sim.run_reported(reporter)
}
