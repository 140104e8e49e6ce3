use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};
use uom::si::{f64::Ratio, ratio::ratio, thermal_conductance::watt_per_kelvin};

use super::CapacitanceRate;

/// Capacity ratio (`C_min` / `C_max`) for a heat exchanger.
///
/// The ratio quantifies how evenly the stream capacitance rates are matched and
/// must fall in the closed interval [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CapacityRatio(Constrained<Ratio, UnitInterval>);

impl CapacityRatio {
    /// Create a [`CapacityRatio`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        let quantity = Ratio::new::<ratio>(value);
        Self::from_quantity(quantity)
    }

    /// Create a [`CapacityRatio`] from a quantity with ratio units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }

    /// Create a [`CapacityRatio`] from the [capacitance rates](CapacitanceRate)
    /// of the two streams.
    ///
    /// The ratio is zero when `C_max` is zero (both streams stagnant) or
    /// infinite.
    ///
    /// # Errors
    ///
    /// Returns `Err` if both rates are infinite, since their ratio is undefined.
    pub fn from_capacitance_rates(
        capacitance_rates: [CapacitanceRate; 2],
    ) -> ConstraintResult<Self> {
        let (min, max) = CapacitanceRate::min_max(capacitance_rates);
        let max = max.get::<watt_per_kelvin>();

        let cr = if max == 0. {
            0.
        } else {
            min.get::<watt_per_kelvin>() / max
        };

        Self::new(cr)
    }
}

impl Deref for CapacityRatio {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
