use std::fmt;

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, Length, MassDensity, Velocity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    error::DomainError,
};

/// Reynolds number at which channel flow is taken to become turbulent.
pub const TRANSITION_REYNOLDS: f64 = 2300.0;

/// Nusselt number for fully developed laminar flow between parallel plates.
///
/// Independent of the Prandtl number.
pub const LAMINAR_NUSSELT: f64 = 7.54;

/// Flow regime of a channel stream.
///
/// The label shares its comparator with [`friction_factor`] and
/// [`nusselt_number`], so `Re = 2300` exactly is reported as turbulent. A
/// label computed with `Re > 2300` would call that point laminar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

impl FlowRegime {
    /// Classifies a Reynolds number: laminar strictly below 2300.
    #[must_use]
    pub fn from_reynolds(reynolds: f64) -> Self {
        if reynolds < TRANSITION_REYNOLDS {
            Self::Laminar
        } else {
            Self::Turbulent
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Laminar => f.write_str("laminar"),
            Self::Turbulent => f.write_str("turbulent"),
        }
    }
}

/// Reynolds number `ρ·v·D_h / μ`.
///
/// # Errors
///
/// Returns [`DomainError`] if the velocity is negative, or if the viscosity
/// or hydraulic diameter is not strictly positive.
pub fn reynolds_number(
    velocity: Velocity,
    density: MassDensity,
    viscosity: DynamicViscosity,
    hydraulic_diameter: Length,
) -> Result<f64, DomainError> {
    let v = NonNegative::new(velocity.get::<meter_per_second>())
        .map_err(DomainError::invalid("velocity"))?
        .into_inner();
    let mu = StrictlyPositive::new(viscosity.get::<pascal_second>())
        .map_err(DomainError::invalid("viscosity"))?
        .into_inner();
    let d_h = StrictlyPositive::new(hydraulic_diameter.get::<meter>())
        .map_err(DomainError::invalid("hydraulic diameter"))?
        .into_inner();

    Ok(density.get::<kilogram_per_cubic_meter>() * v * d_h / mu)
}

/// Darcy friction factor for channel flow.
///
/// Laminar flow uses `96/Re`. Turbulent flow uses the Haaland approximation of
/// Colebrook with relative roughness `ε/D_h`.
///
/// # Errors
///
/// Returns [`DomainError`] if the Reynolds number is not strictly positive.
pub fn friction_factor(
    reynolds: f64,
    roughness: Length,
    hydraulic_diameter: Length,
) -> Result<f64, DomainError> {
    let re = StrictlyPositive::new(reynolds)
        .map_err(DomainError::invalid("Reynolds number"))?
        .into_inner();

    Ok(match FlowRegime::from_reynolds(re) {
        FlowRegime::Laminar => 96.0 / re,
        FlowRegime::Turbulent => {
            let relative_roughness = roughness.get::<meter>() / hydraulic_diameter.get::<meter>();
            (-1.8 * ((relative_roughness / 3.7).powf(1.11) + 6.9 / re).log10()).powi(-2)
        }
    })
}

/// Nusselt number for channel flow.
///
/// Laminar flow returns [`LAMINAR_NUSSELT`] and ignores the other arguments.
/// Turbulent flow uses the Gnielinski correlation, which expects the friction
/// factor from the turbulent branch of [`friction_factor`].
#[must_use]
pub fn nusselt_number(reynolds: f64, prandtl: f64, friction_factor: f64) -> f64 {
    match FlowRegime::from_reynolds(reynolds) {
        FlowRegime::Laminar => LAMINAR_NUSSELT,
        FlowRegime::Turbulent => {
            let f_8 = friction_factor / 8.0;
            f_8 * (reynolds - 1000.0) * prandtl
                / (1.0 + 12.7 * f_8.sqrt() * (prandtl.powf(2.0 / 3.0) - 1.0))
        }
    }
}
