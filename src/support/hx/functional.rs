//! Functional helpers for heat exchanger calculations.

use uom::si::{
    f64::{Power, Ratio, ThermalConductance, ThermodynamicTemperature},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::{
    constraint::{ConstraintError, NonNegative},
    error::DomainError,
    units::TemperatureDifference,
};

use super::{
    CapacitanceRate, CapacityRatio, Effectiveness, Ntu, StreamInlet,
    effectiveness_ntu::EffectivenessRelation,
};

/// Performance of an exchanger evaluated with the effectiveness-NTU method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalResult {
    /// Heat moved from the hot stream to the cold stream.
    ///
    /// Negative when the "hot" inlet is cooler than the "cold" inlet.
    pub heat_transfer_rate: Power,
    pub ntu: Ntu,
    pub effectiveness: Effectiveness,
    pub hot_outlet_temperature: ThermodynamicTemperature,
    pub cold_outlet_temperature: ThermodynamicTemperature,
    /// Hot-side temperature change as a fraction of the inlet approach.
    pub hot_temperature_effectiveness: Ratio,
    /// Cold-side temperature change as a fraction of the inlet approach.
    pub cold_temperature_effectiveness: Ratio,
    pub capacity_ratio: CapacityRatio,
}

/// Analyze a heat exchanger when its conductance and inlet conditions are
/// known.
///
/// The steps are:
///
/// 1. `Cr = C_min / C_max` (zero when `C_max` is zero).
/// 2. `NTU = UA / C_min` (zero when `C_min` is zero).
/// 3. `ε` from the arrangement, clamped to [0, 1].
/// 4. `Q = ε · C_min · (T_hot,in − T_cold,in)`, keeping its sign.
/// 5. Outlet temperatures from each stream's energy balance.
/// 6. Temperature effectiveness of each side, zero when the inlets match.
///
/// # Errors
///
/// Returns [`DomainError`] if `ua` is negative, infinite, or `NaN`, or if
/// both capacitance rates are infinite.
pub fn effectiveness_ntu(
    arrangement: &impl EffectivenessRelation,
    ua: ThermalConductance,
    hot: StreamInlet,
    cold: StreamInlet,
) -> Result<ThermalResult, DomainError> {
    let ua = NonNegative::new(ua)
        .map_err(DomainError::invalid("conductance"))?
        .into_inner();
    if ua.is_infinite() {
        return Err(DomainError::Invalid {
            quantity: "conductance",
            source: ConstraintError::AboveMaximum,
        });
    }

    let capacitance_rates = [hot.capacitance_rate, cold.capacitance_rate];
    let capacity_ratio = CapacityRatio::from_capacitance_rates(capacitance_rates)
        .map_err(DomainError::invalid("capacitance rates"))?;
    let ntu = Ntu::from_conductance_and_capacitance_rates(ua, capacitance_rates)
        .map_err(DomainError::invalid("conductance"))?;
    let effectiveness = arrangement.effectiveness(ntu, capacity_ratio);

    let (min_rate, _) = CapacitanceRate::min_max(capacitance_rates);
    let approach = hot.temperature.minus(cold.temperature);
    let max_heat_transfer_rate = *min_rate * approach;
    let heat_transfer_rate = *effectiveness * max_heat_transfer_rate;

    let hot_outlet_temperature = hot.outlet_temperature(-heat_transfer_rate);
    let cold_outlet_temperature = cold.outlet_temperature(heat_transfer_rate);

    let span = approach.get::<delta_kelvin>();
    let fraction_of_span = |change: f64| {
        if span == 0. {
            Ratio::new::<ratio>(0.)
        } else {
            Ratio::new::<ratio>(change / span)
        }
    };
    let hot_temperature_effectiveness = fraction_of_span(
        hot.temperature
            .minus(hot_outlet_temperature)
            .get::<delta_kelvin>(),
    );
    let cold_temperature_effectiveness = fraction_of_span(
        cold_outlet_temperature
            .minus(cold.temperature)
            .get::<delta_kelvin>(),
    );

    tracing::trace!(
        ntu = ntu.get::<ratio>(),
        cr = capacity_ratio.get::<ratio>(),
        effectiveness = effectiveness.get::<ratio>(),
        q = ?heat_transfer_rate,
        "effectiveness-NTU evaluated"
    );

    Ok(ThermalResult {
        heat_transfer_rate,
        ntu,
        effectiveness,
        hot_outlet_temperature,
        cold_outlet_temperature,
        hot_temperature_effectiveness,
        cold_temperature_effectiveness,
        capacity_ratio,
    })
}
