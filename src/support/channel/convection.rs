use uom::si::{
    f64::{HeatTransfer, Velocity},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::{error::DomainError, psychrometrics::AirProperties};

use super::{FlowRegime, PlateGeometry, friction_factor, nusselt_number, reynolds_number};

/// Convective state of one stream flowing through a plate channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelConvection {
    pub reynolds: f64,
    pub regime: FlowRegime,
    /// Darcy friction factor, present only for turbulent flow.
    pub friction_factor: Option<f64>,
    pub nusselt: f64,
    pub coefficient: HeatTransfer,
}

/// Evaluates the full correlation chain for a stream in one channel.
///
/// The friction factor is only computed for turbulent flow, since the laminar
/// Nusselt number does not depend on it. This keeps a stagnant stream
/// (`Re = 0`) valid: it is laminar with `Nu = 7.54`.
///
/// # Errors
///
/// Returns [`DomainError`] if the velocity is negative or the viscosity is
/// not strictly positive.
pub fn channel_convection(
    properties: &AirProperties,
    velocity: Velocity,
    geometry: &PlateGeometry,
) -> Result<ChannelConvection, DomainError> {
    let hydraulic_diameter = geometry.hydraulic_diameter();

    let reynolds = reynolds_number(
        velocity,
        properties.density,
        properties.dynamic_viscosity,
        hydraulic_diameter,
    )?;
    let regime = FlowRegime::from_reynolds(reynolds);

    let friction = match regime {
        FlowRegime::Laminar => None,
        FlowRegime::Turbulent => Some(friction_factor(
            reynolds,
            geometry.surface_roughness(),
            hydraulic_diameter,
        )?),
    };
    let nusselt = nusselt_number(reynolds, properties.prandtl, friction.unwrap_or(0.0));

    let coefficient = HeatTransfer::new::<watt_per_square_meter_kelvin>(
        nusselt * properties.thermal_conductivity.get::<watt_per_meter_kelvin>()
            / hydraulic_diameter.get::<meter>(),
    );

    tracing::trace!(reynolds, %regime, nusselt, h = ?coefficient, "channel convection");

    Ok(ChannelConvection {
        reynolds,
        regime,
        friction_factor: friction,
        nusselt,
        coefficient,
    })
}

/// Convection coefficient `h = Nu·k / D_h` for a stream in one channel.
///
/// # Errors
///
/// See [`channel_convection`].
pub fn convection_coefficient(
    properties: &AirProperties,
    velocity: Velocity,
    geometry: &PlateGeometry,
) -> Result<HeatTransfer, DomainError> {
    channel_convection(properties, velocity, geometry).map(|convection| convection.coefficient)
}
