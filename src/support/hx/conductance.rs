//! Overall conductance and flow rates of a plate exchanger.
//!
//! The two streams see the same plate and face velocity but their own
//! properties, so each side gets its own convection coefficient. The plate
//! wall sits between them as a pure conduction resistance:
//!
//! ```text
//! 1/U = 1/h_hot + t/k_plate + 1/h_cold
//! ```
//!
//! The U-value does not depend on the channel count. Mass flow, in contrast,
//! is computed per channel and scaled by the caller.

use uom::si::{
    area::square_meter,
    f64::{HeatTransfer, MassDensity, MassRate, Velocity, VolumeRate},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    thermal_conductivity::watt_per_meter_kelvin,
    velocity::meter_per_second,
    volume_rate::cubic_meter_per_second,
};

use crate::support::{
    channel::{PlateGeometry, convection_coefficient},
    constraint::{NonNegative, StrictlyPositive},
    error::DomainError,
    psychrometrics::MoistAir,
};

/// Overall heat-transfer coefficient between a hot and a cold stream.
///
/// # Errors
///
/// Returns [`DomainError`] if the velocity is negative.
pub fn overall_u_value(
    hot: &MoistAir,
    cold: &MoistAir,
    velocity: Velocity,
    geometry: &PlateGeometry,
) -> Result<HeatTransfer, DomainError> {
    let h_hot = convection_coefficient(&hot.properties(), velocity, geometry)?;
    let h_cold = convection_coefficient(&cold.properties(), velocity, geometry)?;

    Ok(series_u_value(h_hot, h_cold, geometry))
}

/// Combines two convection coefficients with the plate wall in series.
#[must_use]
pub fn series_u_value(
    h_hot: HeatTransfer,
    h_cold: HeatTransfer,
    geometry: &PlateGeometry,
) -> HeatTransfer {
    let wall = geometry.plate_thickness().get::<meter>()
        / geometry.plate_conductivity().get::<watt_per_meter_kelvin>();
    let resistance = 1. / h_hot.get::<watt_per_square_meter_kelvin>()
        + wall
        + 1. / h_cold.get::<watt_per_square_meter_kelvin>();

    HeatTransfer::new::<watt_per_square_meter_kelvin>(1. / resistance)
}

/// Mass flow through a single channel, `ρ·v·A_channel`.
///
/// Multiply by [`PlateGeometry::channel_count`] for the stream total.
///
/// # Errors
///
/// Returns [`DomainError`] if the velocity or density is negative.
pub fn mass_flow_rate(
    velocity: Velocity,
    density: MassDensity,
    geometry: &PlateGeometry,
) -> Result<MassRate, DomainError> {
    let v = NonNegative::new(velocity)
        .map_err(DomainError::invalid("velocity"))?
        .into_inner();
    let rho = NonNegative::new(density)
        .map_err(DomainError::invalid("density"))?
        .into_inner();

    Ok(MassRate::new::<kilogram_per_second>(
        rho.get::<kilogram_per_cubic_meter>()
            * v.get::<meter_per_second>()
            * geometry.flow_area_per_channel().get::<square_meter>(),
    ))
}

/// Volumetric flow carried by a mass flow at the given density.
///
/// # Errors
///
/// Returns [`DomainError`] if the density is not strictly positive.
pub fn volume_flow_rate(
    mass_rate: MassRate,
    density: MassDensity,
) -> Result<VolumeRate, DomainError> {
    let rho = StrictlyPositive::new(density)
        .map_err(DomainError::invalid("density"))?
        .into_inner();

    Ok(VolumeRate::new::<cubic_meter_per_second>(
        mass_rate.get::<kilogram_per_second>() / rho.get::<kilogram_per_cubic_meter>(),
    ))
}
