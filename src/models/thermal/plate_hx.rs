//! Air-to-air plate heat exchanger model.
//!
//! [`PlateHx`] holds an exchanger's geometry and flow arrangement and
//! evaluates it at an operating point ([`PlateHxInput`]): the hot and cold
//! inlet air states and the common face velocity. The computational core is
//! in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use plate_hx::models::thermal::plate_hx::{PlateHx, PlateHxInput};
//! use plate_hx::support::{
//!     channel::PlateGeometry, hx::FlowArrangement, psychrometrics::MoistAir,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{Ratio, ThermodynamicTemperature, Velocity},
//!     ratio::percent,
//!     thermodynamic_temperature::degree_celsius,
//!     velocity::meter_per_second,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let hx = PlateHx::new(PlateGeometry::default(), "counter-flow".parse()?);
//!
//!     let input = PlateHxInput::new(
//!         MoistAir::from_relative_humidity_at_standard_pressure(
//!             ThermodynamicTemperature::new::<degree_celsius>(40.0),
//!             Ratio::new::<percent>(50.0),
//!         )?,
//!         MoistAir::from_relative_humidity_at_standard_pressure(
//!             ThermodynamicTemperature::new::<degree_celsius>(10.0),
//!             Ratio::new::<percent>(90.0),
//!         )?,
//!         Velocity::new::<meter_per_second>(6.0),
//!     );
//!
//!     let results = hx.call(&input)?;
//!     assert_eq!(hx.arrangement(), FlowArrangement::CounterFlow);
//!     assert!(results.thermal.heat_transfer_rate.value > 0.0);
//!     Ok(())
//! }
//! ```

mod core;

pub use self::core::{PlateHxInput, PlateHxResults, StreamResults};

use twine_core::Model;

use crate::support::{channel::PlateGeometry, error::DomainError, hx::FlowArrangement};

/// A plate heat exchanger with fixed geometry and flow arrangement.
///
/// The default is the reference exchanger of [`PlateGeometry::default`] in
/// cross-flow.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlateHx {
    geometry: PlateGeometry,
    arrangement: FlowArrangement,
}

impl PlateHx {
    #[must_use]
    pub fn new(geometry: PlateGeometry, arrangement: FlowArrangement) -> Self {
        Self {
            geometry,
            arrangement,
        }
    }

    #[must_use]
    pub fn geometry(&self) -> &PlateGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn arrangement(&self) -> FlowArrangement {
        self.arrangement
    }

    /// Evaluates the exchanger at one operating point.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the face velocity is negative.
    pub fn evaluate(&self, input: &PlateHxInput) -> Result<PlateHxResults, DomainError> {
        self::core::evaluate(&self.geometry, self.arrangement, input)
    }
}

impl Model for PlateHx {
    type Input = PlateHxInput;
    type Output = PlateHxResults;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.evaluate(input)
    }
}
