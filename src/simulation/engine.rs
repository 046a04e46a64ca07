//! High-level runtime engine settings
//!
//! Selects the force mode, the mass convention and the snapshot stride
//! used when building and running a `Simulation`. Fixed for the whole run.

use crate::configuration::config::{ForceMode, MassConvention};
use crate::error::{Result, SimError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    pub mode: ForceMode, // full or symmetric pair evaluation
    pub convention: MassConvention, // legacy (force as acceleration) or newtonian
    pub report_every: Option<u64>, // snapshot stride, None = never
}

impl Engine {
    pub fn new(mode: ForceMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_convention(mut self, convention: MassConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn with_report_every(mut self, stride: u64) -> Self {
        self.report_every = Some(stride);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.report_every == Some(0) {
            return Err(SimError::InvalidConfiguration(
                "report stride must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
