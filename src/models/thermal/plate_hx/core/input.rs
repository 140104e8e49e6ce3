use uom::si::f64::Velocity;

use crate::support::psychrometrics::MoistAir;

/// Operating point of a plate exchanger.
///
/// Both streams enter at the same face velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateHxInput {
    /// Warm stream entering the exchanger (typically exhaust air).
    pub hot: MoistAir,
    /// Cool stream entering the exchanger (typically outdoor air).
    pub cold: MoistAir,
    pub velocity: Velocity,
}

impl PlateHxInput {
    #[must_use]
    pub fn new(hot: MoistAir, cold: MoistAir, velocity: Velocity) -> Self {
        Self {
            hot,
            cold,
            velocity,
        }
    }
}
