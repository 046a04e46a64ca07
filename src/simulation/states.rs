//! Core state types for the N-body simulation.
//!
//! - `Body` holds mass, position and velocity using `NVec2`
//! - `System` holds the ordered bodies and the current step index
//!
//! A body's identity is its index in `System::bodies`.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Mass given to every body by [`System::initialize`]
pub const DEFAULT_MASS: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
}

impl Body {
    pub fn at_rest(x: NVec2, m: f64) -> Self {
        Self { x, v: NVec2::zeros(), m }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // 2d collection of bodies
    pub step: u64, // completed time steps
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, step: 0 }
    }

    /// Place `n` bodies of mass 2 at rest along the x axis in `[0, 1)`
    ///
    /// Body `i` sits at `(i / n, 0)`. No randomness, so two systems built
    /// with the same `n` are bit-identical.
    pub fn initialize(n: usize) -> Self {
        let bodies = (0..n)
            .map(|i| {
                let x = NVec2::new(i as f64 / n as f64, 0.0);
                Body::at_rest(x, DEFAULT_MASS)
            })
            .collect();

        Self::new(bodies)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
