//! Extensions to [`uom`].
//!
//! Every dimensional input and output in this crate is a [`uom`] quantity.
//! This module adds the pieces [`uom`] doesn't ship.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use uom::si::temperature_interval::kelvin;
//! use plate_hx::support::units::TemperatureDifference;
//!
//! let hot_in = ThermodynamicTemperature::new::<degree_celsius>(30.0);
//! let cold_in = ThermodynamicTemperature::new::<degree_celsius>(10.0);
//! let approach = hot_in.minus(cold_in);
//! assert!((approach.get::<kelvin>() - 20.0).abs() < 1e-9);
//! ```
//!
//! ## Gas constants
//!
//! [`SpecificGasConstant`] shares its dimension with specific heat capacity, so
//! it is constructed with specific-heat units.

mod quantities;
mod temperature_difference;

pub use quantities::SpecificGasConstant;
pub use temperature_difference::TemperatureDifference;
