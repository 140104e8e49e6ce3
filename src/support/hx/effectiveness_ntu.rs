use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, UnitInterval};
use uom::si::{
    f64::{Ratio, ThermalConductance},
    ratio::ratio,
    thermal_conductance::watt_per_kelvin,
};

use super::{CapacitanceRate, CapacityRatio};

/// Trait for computing heat exchanger effectiveness from NTU.
pub trait EffectivenessRelation {
    /// Calculate the effectiveness for an arrangement given the [NTU](Ntu) and
    /// [capacity ratio](CapacityRatio).
    fn effectiveness(&self, ntu: Ntu, capacity_ratio: CapacityRatio) -> Effectiveness;
}

/// The effectiveness of a heat exchanger.
///
/// The effectiveness is the ratio of the actual amount of heat transferred to
/// the maximum possible amount of heat transferred in the heat exchanger.
///
/// The effectiveness must be in the interval [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Effectiveness(Constrained<Ratio, UnitInterval>);

impl Effectiveness {
    /// Create an [`Effectiveness`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        let quantity = Ratio::new::<ratio>(value);
        Self::from_quantity(quantity)
    }

    /// Create an [`Effectiveness`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }
}

impl Deref for Effectiveness {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// The number of transfer units for a heat exchanger.
///
/// The number of transfer units represents the dimensionless size of a heat
/// exchanger.
///
/// The number of transfer units must be >= 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ntu(Constrained<Ratio, NonNegative>);

impl Ntu {
    /// Create an [`Ntu`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        let quantity = Ratio::new::<ratio>(value);
        Self::from_quantity(quantity)
    }

    /// Create an [`Ntu`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is negative.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(quantity)?))
    }

    /// Create an [`Ntu`] from a heat exchanger conductance and
    /// [capacitance rates](CapacitanceRate).
    ///
    /// The [capacitance rates](CapacitanceRate) of both streams are required so
    /// that the minimum of the two can be used in the calculation.
    /// A stagnant stream (`C_min = 0`) gives zero NTU.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the resulting NTU would be negative (for example, when
    /// `ua` is negative).
    pub fn from_conductance_and_capacitance_rates(
        ua: ThermalConductance,
        capacitance_rates: [CapacitanceRate; 2],
    ) -> ConstraintResult<Self> {
        let (min, _) = CapacitanceRate::min_max(capacitance_rates);
        let c_min = min.get::<watt_per_kelvin>();

        if c_min == 0. {
            NonNegative::new(ua)?;
            return Self::new(0.);
        }
        Self::new(ua.get::<watt_per_kelvin>() / c_min)
    }
}

impl Deref for Ntu {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Evaluates a raw `ε(NTU, Cr)` expression and clamps it to [0, 1].
///
/// A `NaN` result maps to 1. It only arises from `∞ · 0` terms at extreme
/// inputs, such as a subnormal capacity ratio in cross-flow or infinite NTU
/// with balanced counter-flow, where the exchanger is saturated.
#[inline]
pub(crate) fn effectiveness_via(
    ntu: Ntu,
    capacity_ratio: CapacityRatio,
    fn_raw: impl Fn(f64, f64) -> f64,
) -> Effectiveness {
    let raw = fn_raw(ntu.get::<ratio>(), capacity_ratio.get::<ratio>());
    let clamped = if raw.is_nan() { 1. } else { raw.clamp(0., 1.) };
    Effectiveness::new(clamped).expect("clamped effectiveness should lie in [0, 1]")
}
