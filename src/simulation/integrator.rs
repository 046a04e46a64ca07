//! Fixed-step explicit Euler integrator for the N-body system
//!
//! Driven by a `ForceSet` and `Parameters`

use super::states::{System, NVec2};
use super::forces::ForceSet;
use super::params::Parameters;
use crate::configuration::config::MassConvention;

/// Advance the system by one step of explicit Euler
///
/// All forces are accumulated into `forces` from the step-start positions
/// before any body moves. Each body then does
///   v_n+1 = v_n + dt * a_n
///   x_n+1 = x_n + dt * v_n
/// using the velocity captured before its update.
///
/// `forces` must hold one entry per body; it is zeroed here and left holding
/// this step's totals. Totals become accelerations per `set.convention()`.
/// Returns the number of pair evaluations.
pub fn euler_step(
    sys: &mut System,
    set: &ForceSet,
    params: &Parameters,
    forces: &mut [NVec2],
) -> u64 {
    debug_assert_eq!(forces.len(), sys.bodies.len());
    let dt = params.dt;
    let convention = set.convention();

    let evaluations = set.accumulate_forces(&*sys, forces);

    for (b, f) in sys.bodies.iter_mut().zip(forces.iter()) {
        let a = match convention {
            MassConvention::Legacy => *f,
            MassConvention::Newtonian => *f / b.m,
        };
        let v_old = b.v;
        b.v += dt * a;
        b.x += dt * v_old;
    }

    sys.step += 1;
    evaluations
}
