//! Numerical and physical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - number of fixed time steps and their size,
//! - gravitational constant `g`

use crate::error::{Result, SimError};

/// Gravitational constant used by the original experiment, in SI units
pub const GRAV_CONST: f64 = 6.673e-11;
pub const DEFAULT_STEPS: u64 = 4;
pub const DEFAULT_DT: f64 = 0.001;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub steps: u64, // number of time steps
    pub dt: f64, // step size
    pub g: f64, // gravitational constant
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            dt: DEFAULT_DT,
            g: GRAV_CONST,
        }
    }
}

impl Parameters {
    /// Build parameters, rejecting a non-positive or non-finite `dt` or `g`
    pub fn new(steps: u64, dt: f64, g: f64) -> Result<Self> {
        let params = Self { steps, dt, g };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "time step must be positive and finite, got {}",
                self.dt
            )));
        }
        if !(self.g.is_finite() && self.g > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "gravitational constant must be positive and finite, got {}",
                self.g
            )));
        }
        Ok(())
    }
}
