//! Steady-state evaluation of an air-to-air plate exchanger.
//!
//! The evaluation runs leaf-first: moist-air properties feed the channel
//! convection correlations, the two film coefficients and the plate wall give
//! the U-value, and the stream capacitance rates together with `UA` feed the
//! effectiveness-NTU method.

mod input;
mod results;

pub use input::PlateHxInput;
pub use results::{PlateHxResults, StreamResults};

use uom::si::{
    area::square_meter,
    f64::{ThermalConductance, Velocity},
    heat_transfer::watt_per_square_meter_kelvin,
    ratio::ratio,
    thermal_conductance::watt_per_kelvin,
};

use crate::support::{
    channel::{PlateGeometry, channel_convection},
    error::DomainError,
    hx::{
        CapacitanceRate, FlowArrangement, StreamInlet,
        conductance::{mass_flow_rate, series_u_value, volume_flow_rate},
        functional::effectiveness_ntu,
    },
    psychrometrics::MoistAir,
};

/// Evaluates the exchanger at one operating point.
///
/// # Errors
///
/// Returns [`DomainError`] if the velocity is negative.
pub(crate) fn evaluate(
    geometry: &PlateGeometry,
    arrangement: FlowArrangement,
    input: &PlateHxInput,
) -> Result<PlateHxResults, DomainError> {
    let hot = stream_results(&input.hot, input.velocity, geometry)?;
    let cold = stream_results(&input.cold, input.velocity, geometry)?;

    let u_value = series_u_value(
        hot.convection_coefficient,
        cold.convection_coefficient,
        geometry,
    );

    let heat_transfer_area = geometry.heat_transfer_area();
    if heat_transfer_area.get::<square_meter>() <= 0. {
        tracing::warn!(
            plate_count = geometry.plate_count(),
            "exchanger has no active heat-transfer area, UA is zero"
        );
    }
    let ua = ThermalConductance::new::<watt_per_kelvin>(
        u_value.get::<watt_per_square_meter_kelvin>() * heat_transfer_area.get::<square_meter>(),
    );

    let thermal = effectiveness_ntu(
        &arrangement,
        ua,
        StreamInlet::new(hot.capacitance_rate, input.hot.temperature()),
        StreamInlet::new(cold.capacitance_rate, input.cold.temperature()),
    )?;

    tracing::debug!(
        %arrangement,
        u = u_value.get::<watt_per_square_meter_kelvin>(),
        ua = ua.get::<watt_per_kelvin>(),
        ntu = thermal.ntu.get::<ratio>(),
        effectiveness = thermal.effectiveness.get::<ratio>(),
        "plate exchanger evaluated"
    );

    Ok(PlateHxResults {
        u_value,
        ua,
        heat_transfer_area,
        hot,
        cold,
        thermal,
    })
}

fn stream_results(
    air: &MoistAir,
    velocity: Velocity,
    geometry: &PlateGeometry,
) -> Result<StreamResults, DomainError> {
    let properties = air.properties();
    let convection = channel_convection(&properties, velocity, geometry)?;

    let mass_flow_per_channel = mass_flow_rate(velocity, properties.density, geometry)?;
    let mass_flow = mass_flow_per_channel * f64::from(geometry.channel_count());
    let volume_flow_per_channel = volume_flow_rate(mass_flow_per_channel, properties.density)?;
    let volume_flow = volume_flow_rate(mass_flow, properties.density)?;
    let capacitance_rate =
        CapacitanceRate::from_mass_rate_and_specific_heat(mass_flow, properties.specific_heat)
            .map_err(DomainError::invalid("capacitance rate"))?;

    Ok(StreamResults {
        reynolds: convection.reynolds,
        regime: convection.regime,
        convection_coefficient: convection.coefficient,
        mass_flow_per_channel,
        mass_flow,
        volume_flow_per_channel,
        volume_flow,
        capacitance_rate,
    })
}
