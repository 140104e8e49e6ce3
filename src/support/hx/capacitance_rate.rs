use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};
use uom::si::f64::{MassRate, SpecificHeatCapacity, ThermalConductance};

/// Capacitance rate (`m_dot` * `c_p`) of an air stream in the exchanger.
///
/// The value must be non-negative. Zero describes a stagnant stream and
/// infinity a stream whose temperature does not change (for example, a
/// condensing one); the effectiveness-NTU evaluation handles both.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CapacitanceRate(Constrained<ThermalConductance, NonNegative>);

impl CapacitanceRate {
    /// Create a [`CapacitanceRate`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative or `NaN`.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::thermal_conductance::Unit + uom::Conversion<f64, T = f64>,
    {
        let quantity = ThermalConductance::new::<U>(value);
        Self::from_quantity(quantity)
    }

    /// Create a [`CapacitanceRate`] from a quantity with thermal-conductance units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is negative or `NaN`.
    pub fn from_quantity(quantity: ThermalConductance) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(quantity)?))
    }

    /// Create a [`CapacitanceRate`] from a mass rate and specific heat
    /// capacity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the product is negative or `NaN`.
    pub fn from_mass_rate_and_specific_heat(
        mass_rate: MassRate,
        specific_heat: SpecificHeatCapacity,
    ) -> ConstraintResult<Self> {
        CapacitanceRate::from_quantity(mass_rate * specific_heat)
    }

    /// Returns `(C_min, C_max)` for a pair of streams.
    #[must_use]
    pub(crate) fn min_max(capacitance_rates: [CapacitanceRate; 2]) -> (Self, Self) {
        let [first, second] = capacitance_rates;
        if first <= second {
            (first, second)
        } else {
            (second, first)
        }
    }
}

impl Deref for CapacitanceRate {
    type Target = ThermalConductance;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        mass_rate::kilogram_per_second, specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductance::watt_per_kelvin,
    };

    use super::*;

    #[test]
    fn from_mass_rate_and_specific_heat() -> ConstraintResult<()> {
        // Fifty channels of warm exhaust air.
        let mass_rate = MassRate::new::<kilogram_per_second>(0.14 * 49.);
        let specific_heat = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1050.);

        let capacitance_rate =
            CapacitanceRate::from_mass_rate_and_specific_heat(mass_rate, specific_heat)?;

        assert_relative_eq!(capacitance_rate.get::<watt_per_kelvin>(), 7203., max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn zero_and_infinite_are_allowed() -> ConstraintResult<()> {
        let stagnant = CapacitanceRate::new::<watt_per_kelvin>(0.)?;
        let condensing = CapacitanceRate::new::<watt_per_kelvin>(f64::INFINITY)?;

        let (min, max) = CapacitanceRate::min_max([condensing, stagnant]);
        assert_eq!(min, stagnant);
        assert_eq!(max, condensing);
        Ok(())
    }

    #[test]
    fn negative_is_rejected() {
        assert!(CapacitanceRate::new::<watt_per_kelvin>(-1.).is_err());
        assert!(CapacitanceRate::new::<watt_per_kelvin>(f64::NAN).is_err());
    }
}
