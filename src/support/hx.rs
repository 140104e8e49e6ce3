//! Heat exchanger analysis toolkit.
//!
//! Two concerns live here:
//!
//! - [`conductance`]: the overall U-value of a plate exchanger and the mass and
//!   volume flows its channels carry.
//! - The effectiveness-NTU method, which turns a conductance (`UA`) and two
//!   stream inlets into a [`ThermalResult`].
//!
//! # Overview
//!
//! The effectiveness-NTU method relates exchanger performance to its thermal
//! size (NTU = UA / `C_min`) and the capacity ratio of the streams.
//!
//! - **Core types**: [`CapacitanceRate`], [`CapacityRatio`], [`Effectiveness`], [`Ntu`]
//! - **Stream modeling**: [`StreamInlet`]
//! - **Flow arrangements**: [`CounterFlow`], [`CrossFlow`], and the runtime
//!   selector [`FlowArrangement`]
//! - **Analysis function**: [`functional::effectiveness_ntu`]
//!
//! # Example
//!
//! ```
//! use plate_hx::support::hx::{
//!     functional::effectiveness_ntu, CapacitanceRate, FlowArrangement, StreamInlet,
//! };
//! use uom::si::{
//!     f64::{ThermalConductance, ThermodynamicTemperature},
//!     thermal_conductance::watt_per_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let arrangement: FlowArrangement = "cross-flow".parse()?;
//!
//!     let result = effectiveness_ntu(
//!         &arrangement,
//!         ThermalConductance::new::<watt_per_kelvin>(500.0),
//!         StreamInlet::new(
//!             CapacitanceRate::new::<watt_per_kelvin>(4500.0)?,
//!             ThermodynamicTemperature::new::<degree_celsius>(30.0),
//!         ),
//!         StreamInlet::new(
//!             CapacitanceRate::new::<watt_per_kelvin>(4500.0)?,
//!             ThermodynamicTemperature::new::<degree_celsius>(10.0),
//!         ),
//!     )?;
//!
//!     let hot_in = ThermodynamicTemperature::new::<degree_celsius>(30.0);
//!     assert!(result.hot_outlet_temperature < hot_in);
//!     Ok(())
//! }
//! ```

pub mod arrangement;
mod capacitance_rate;
mod capacity_ratio;
pub mod conductance;
mod effectiveness_ntu;
pub mod functional;
mod stream;

pub use arrangement::{ConfigurationError, CounterFlow, CrossFlow, FlowArrangement};
pub use capacitance_rate::CapacitanceRate;
pub use capacity_ratio::CapacityRatio;
pub use effectiveness_ntu::{Effectiveness, EffectivenessRelation, Ntu};
pub use functional::ThermalResult;
pub use stream::StreamInlet;
