//! Force contributors for the n-body engine
//!
//! Defines the force-term trait, the direct pairwise gravity kernels
//! (full and symmetric) and the set that zeroes and sums them per step

use crate::configuration::config::{ForceMode, MassConvention};
use crate::simulation::states::{System, NVec2};

/// Collection of force terms
/// Each term implements [`ForceTerm`] and their contributions are summed
/// into a single force vector per body.
/// The set also carries the mass convention its terms were built for, so the
/// integrator turns totals into accelerations the same way.
pub struct ForceSet {
    terms: Vec<Box<dyn ForceTerm + Send + Sync>>,
    convention: MassConvention,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
            convention: MassConvention::Legacy,
        }
    }

    /// Set the convention used to turn totals into accelerations
    pub fn with_convention(mut self, convention: MassConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn convention(&self) -> MassConvention {
        self.convention
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceTerm + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Force set holding the gravity kernel selected by `mode`
    pub fn gravity(mode: ForceMode, g: f64, convention: MassConvention) -> Self {
        let set = Self::new().with_convention(convention);
        match mode {
            ForceMode::Full => set.with(FullGravity { g, convention }),
            ForceMode::Symmetric => set.with(SymmetricGravity { g, convention }),
        }
    }

    /// Compute total forces for all bodies in `sys`
    /// - `out[i]` is zeroed, then set to the sum of contributions from all terms
    /// - returns the number of pair evaluations performed
    pub fn accumulate_forces(&self, sys: &System, out: &mut [NVec2]) -> u64 {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        self.terms
            .iter()
            .map(|term| term.accumulate(sys, out))
            .sum()
    }
}

/// Trait for force sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body and
/// return how many pair evaluations they made.
/// Reads only `sys`, so every body sees the step-start positions.
pub trait ForceTerm {
    fn accumulate(&self, sys: &System, out: &mut [NVec2]) -> u64;
}

/// Gravitational pull of body `j` on body `i`
///
/// `Legacy` scales by `mj` only, leaving the accumulated total to be
/// integrated as an acceleration. `Newtonian` scales by `mi * mj`, giving a
/// true force. Swapping `i` and `j` negates the result exactly under
/// `Newtonian`, and under `Legacy` only when `mi == mj`; symmetric mode under
/// `Legacy` therefore pulls body `j` with `mj` instead of `mi`.
///
/// Coincident positions divide by zero and yield inf/NaN.
#[inline]
pub fn pair_force(
    g: f64,
    convention: MassConvention,
    xi: NVec2,
    mi: f64,
    xj: NVec2,
    mj: f64,
) -> NVec2 {
    // displacement from i to j; i is pulled along +r
    let r = xj - xi;
    let r2 = r.norm_squared();
    let inv_r3 = (r2 * r2.sqrt()).recip();

    let m = match convention {
        MassConvention::Legacy => mj,
        MassConvention::Newtonian => mi * mj,
    };

    (g * m * inv_r3) * r
}

/// Direct gravity over every ordered pair (i, j), i != j
/// N(N-1) pair evaluations
pub struct FullGravity {
    pub g: f64,
    pub convention: MassConvention,
}

impl ForceTerm for FullGravity {
    fn accumulate(&self, sys: &System, out: &mut [NVec2]) -> u64 {
        let n = sys.bodies.len();
        let mut evaluations = 0;

        for i in 0..n {
            let bi = &sys.bodies[i];
            let mut total = NVec2::zeros();

            // bj: every other body; (j, i) is evaluated again on j's pass
            for (j, bj) in sys.bodies.iter().enumerate() {
                if i == j {
                    continue;
                }
                // Pull on body i due to body j: along +r (r = xj - xi)
                total += pair_force(self.g, self.convention, bi.x, bi.m, bj.x, bj.m);
                evaluations += 1;
            }

            // Only body i is written on its pass
            out[i] += total;
        }

        evaluations
    }
}

/// Direct gravity over every unordered pair (i, j), i < j
/// Each pair is evaluated once and applied to both bodies with opposite sign
/// (Newton's third law), N(N-1)/2 pair evaluations
pub struct SymmetricGravity {
    pub g: f64,
    pub convention: MassConvention,
}

impl ForceTerm for SymmetricGravity {
    fn accumulate(&self, sys: &System, out: &mut [NVec2]) -> u64 {
        let n = sys.bodies.len();
        let mut evaluations = 0;

        for i in 0..n {
            let bi = &sys.bodies[i];

            // bj: body j (right side of the pair), j > i
            for j in (i + 1)..n {
                let bj = &sys.bodies[j];
                let f = pair_force(self.g, self.convention, bi.x, bi.m, bj.x, bj.m);

                // Pull on body i due to body j: along +r (r = xj - xi)
                out[i] += f;
                // Newton's third law: body j feels the same pull along -r
                out[j] -= f;
                evaluations += 1;
            }
        }

        evaluations
    }
}
