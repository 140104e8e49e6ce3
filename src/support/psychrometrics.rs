//! Moist-air property correlations.
//!
//! Functions here evaluate the properties of an air and water-vapor mixture
//! from its dry-bulb temperature, total pressure, and humidity ratio. They are
//! empirical engineering fits suited to HVAC conditions (roughly -40 °C to
//! 100 °C at atmospheric pressure), not reference-grade equations of state.
//!
//! Most callers will want [`MoistAir`], which carries a validated state and
//! exposes the derived properties as methods.
//!
//! # Example
//!
//! ```
//! use plate_hx::support::psychrometrics::MoistAir;
//! use uom::si::{
//!     f64::{Ratio, ThermodynamicTemperature},
//!     mass_density::kilogram_per_cubic_meter,
//!     ratio::percent,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let exhaust = MoistAir::from_relative_humidity_at_standard_pressure(
//!     ThermodynamicTemperature::new::<degree_celsius>(40.0),
//!     Ratio::new::<percent>(50.0),
//! )
//! .unwrap();
//!
//! let rho = exhaust.density().get::<kilogram_per_cubic_meter>();
//! assert!((rho - 1.111).abs() < 1e-3);
//! ```

mod moist_air;

pub use moist_air::{AirProperties, MoistAir};

use uom::si::{
    f64::{
        DynamicViscosity, MassDensity, Pressure, Ratio, SpecificHeatCapacity,
        ThermalConductivity, ThermodynamicTemperature,
    },
    dynamic_viscosity::pascal_second,
    pressure::pascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive, UnitInterval},
    error::DomainError,
    units::SpecificGasConstant,
};

/// Specific gas constant of dry air, J/(kg·K).
pub const R_DRY_AIR: f64 = 287.058;

/// Specific gas constant of water vapor, J/(kg·K).
pub const R_WATER_VAPOR: f64 = 461.495;

/// Specific heat of dry air, J/(kg·K).
pub const CP_DRY_AIR: f64 = 1006.0;

/// Specific heat of water vapor, J/(kg·K).
pub const CP_WATER_VAPOR: f64 = 1860.0;

/// Latent heat of vaporization of water at 0 °C, J/kg.
///
/// Not used by the sensible-only calculations in this crate.
pub const LATENT_HEAT: f64 = 2_501_000.0;

/// Standard atmospheric pressure, Pa.
pub const STANDARD_PRESSURE_PA: f64 = 101_325.0;

/// Ratio of the molar masses of water vapor and dry air.
const MOLAR_MASS_RATIO: f64 = 0.622;

/// Density correction for the lighter water vapor in the mixture.
const VAPOR_DENSITY_FACTOR: f64 = 0.608;

/// Prandtl number used when the thermal conductivity is not positive.
const FALLBACK_PRANDTL: f64 = 0.7;

/// Saturation pressure of water vapor from the Arden Buck equation.
///
/// Above 0 °C the liquid-water coefficients apply; at or below 0 °C the ice
/// coefficients apply.
#[must_use]
pub fn saturation_pressure(temperature: ThermodynamicTemperature) -> Pressure {
    let t = temperature.get::<degree_celsius>();

    let p_sat = if t > 0.0 {
        611.21 * ((18.678 - t / 234.5) * (t / (257.14 + t))).exp()
    } else {
        611.15 * ((23.036 - t / 333.7) * (t / (279.82 + t))).exp()
    };

    Pressure::new::<pascal>(p_sat)
}

/// Humidity ratio (kg water per kg dry air) at a given relative humidity.
///
/// Computes `0.622·p_v / (p − p_v)` with `p_v = φ·p_sat(T)`.
///
/// # Errors
///
/// Returns [`DomainError`] if the absolute temperature or the pressure is not
/// strictly positive, if the relative humidity lies outside [0, 1], or if the
/// vapor pressure is not below the total pressure.
pub fn humidity_ratio(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    relative_humidity: Ratio,
) -> Result<Ratio, DomainError> {
    StrictlyPositive::check(&temperature.get::<kelvin>())
        .map_err(DomainError::invalid("absolute temperature"))?;
    let pressure = StrictlyPositive::new(pressure)
        .map_err(DomainError::invalid("pressure"))?
        .into_inner();
    let relative_humidity = UnitInterval::new(relative_humidity)
        .map_err(DomainError::invalid("relative humidity"))?
        .into_inner();

    let vapor_pressure = saturation_pressure(temperature) * relative_humidity.get::<ratio>();
    if pressure <= vapor_pressure {
        return Err(DomainError::VaporPressureAtOrAboveTotal {
            vapor_pressure,
            pressure,
        });
    }

    let p_v = vapor_pressure.get::<pascal>();
    let p = pressure.get::<pascal>();
    Ok(Ratio::new::<ratio>(MOLAR_MASS_RATIO * p_v / (p - p_v)))
}

/// Partial pressure of water vapor implied by a humidity ratio.
///
/// Inverts the humidity-ratio definition: `p_v = p·w / (0.622 + w)`.
#[must_use]
pub fn vapor_pressure(pressure: Pressure, humidity_ratio: Ratio) -> Pressure {
    let w = humidity_ratio.get::<ratio>();
    pressure * (w / (MOLAR_MASS_RATIO + w))
}

/// Moist-air density from the ideal gas law with a humidity correction.
///
/// Computes `p / (R_dry·T·(1 + 0.608·w))`.
#[must_use]
pub fn air_density(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    humidity_ratio: Ratio,
) -> MassDensity {
    let r = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(R_DRY_AIR);
    let dry = pressure / (r * temperature);
    dry / (1.0 + VAPOR_DENSITY_FACTOR * humidity_ratio.get::<ratio>())
}

/// Dynamic viscosity of air from Sutherland's law.
#[must_use]
pub fn air_viscosity(temperature: ThermodynamicTemperature) -> DynamicViscosity {
    let t = temperature.get::<kelvin>();
    DynamicViscosity::new::<pascal_second>(1.458e-6 * t.powf(1.5) / (t + 110.4))
}

/// Thermal conductivity of air from a linear fit in °C.
#[must_use]
pub fn air_thermal_conductivity(temperature: ThermodynamicTemperature) -> ThermalConductivity {
    let t = temperature.get::<degree_celsius>();
    ThermalConductivity::new::<watt_per_meter_kelvin>(0.0241 + 6.8e-5 * t)
}

/// Specific heat of moist air per kg of dry air: `cp_dry + w·cp_vapor`.
#[must_use]
pub fn specific_heat(humidity_ratio: Ratio) -> SpecificHeatCapacity {
    SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
        CP_DRY_AIR + humidity_ratio.get::<ratio>() * CP_WATER_VAPOR,
    )
}

/// Prandtl number `cp·μ/k`.
///
/// Returns 0.7, a typical value for air, when `k` is not positive.
#[must_use]
pub fn prandtl_number(
    viscosity: DynamicViscosity,
    specific_heat: SpecificHeatCapacity,
    conductivity: ThermalConductivity,
) -> f64 {
    let k = conductivity.get::<watt_per_meter_kelvin>();
    if k > 0.0 {
        specific_heat.get::<joule_per_kilogram_kelvin>() * viscosity.get::<pascal_second>() / k
    } else {
        FALLBACK_PRANDTL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{mass_density::kilogram_per_cubic_meter, ratio::percent};

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    fn atmosphere() -> Pressure {
        Pressure::new::<pascal>(STANDARD_PRESSURE_PA)
    }

    #[test]
    fn saturation_pressure_branches() {
        assert_relative_eq!(
            saturation_pressure(celsius(20.0)).get::<pascal>(),
            2338.339_978_450_019,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            saturation_pressure(celsius(-10.0)).get::<pascal>(),
            259.946_916_487_809_9,
            max_relative = 1e-9
        );
    }

    #[test]
    fn saturation_pressure_at_freezing_uses_ice_branch() {
        assert_relative_eq!(saturation_pressure(celsius(0.0)).get::<pascal>(), 611.15);

        // The liquid branch evaluated at 0 °C gives its leading coefficient.
        let just_above = saturation_pressure(celsius(1e-9)).get::<pascal>();
        assert_relative_eq!(just_above, 611.21, max_relative = 1e-6);
        assert_relative_eq!(just_above, 611.15, max_relative = 1e-3);
    }

    #[test]
    fn humidity_ratio_at_half_saturation() -> Result<(), DomainError> {
        let w = humidity_ratio(celsius(20.0), atmosphere(), Ratio::new::<percent>(50.0))?;
        assert_relative_eq!(w.get::<ratio>(), 0.007_260_922_636_452_81, max_relative = 1e-9);
        Ok(())
    }

    #[test]
    fn dry_air_has_zero_humidity_ratio() -> Result<(), DomainError> {
        let w = humidity_ratio(celsius(25.0), atmosphere(), Ratio::new::<ratio>(0.0))?;
        assert_relative_eq!(w.get::<ratio>(), 0.0);
        Ok(())
    }

    #[test]
    fn humidity_ratio_rejects_low_pressure() {
        // Saturated air at 90 °C has a vapor pressure around 70 kPa.
        let result = humidity_ratio(
            celsius(90.0),
            Pressure::new::<pascal>(50_000.0),
            Ratio::new::<ratio>(1.0),
        );
        assert!(matches!(
            result,
            Err(DomainError::VaporPressureAtOrAboveTotal { .. })
        ));
    }

    #[test]
    fn humidity_ratio_rejects_bad_inputs() {
        let rh = Ratio::new::<ratio>(0.5);

        assert!(matches!(
            humidity_ratio(celsius(20.0), Pressure::new::<pascal>(-1.0), rh),
            Err(DomainError::Invalid {
                quantity: "pressure",
                ..
            })
        ));
        assert!(matches!(
            humidity_ratio(celsius(20.0), atmosphere(), Ratio::new::<ratio>(1.2)),
            Err(DomainError::Invalid {
                quantity: "relative humidity",
                ..
            })
        ));
        assert!(matches!(
            humidity_ratio(celsius(-300.0), atmosphere(), rh),
            Err(DomainError::Invalid {
                quantity: "absolute temperature",
                ..
            })
        ));
    }

    #[test]
    fn vapor_pressure_inverts_humidity_ratio() -> Result<(), DomainError> {
        let t = celsius(30.0);
        let w = humidity_ratio(t, atmosphere(), Ratio::new::<ratio>(0.6))?;

        let p_v = vapor_pressure(atmosphere(), w);

        assert_relative_eq!(
            p_v.get::<pascal>(),
            0.6 * saturation_pressure(t).get::<pascal>(),
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn density_of_humid_air() {
        let rho = air_density(celsius(40.0), atmosphere(), Ratio::new::<ratio>(0.0235));
        let expected = 101_325.0 / (R_DRY_AIR * 313.15 * (1.0 + 0.608 * 0.0235));
        assert_relative_eq!(
            rho.get::<kilogram_per_cubic_meter>(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn transport_properties() {
        let t = celsius(10.0);
        assert_relative_eq!(
            air_viscosity(t).get::<pascal_second>(),
            1.765_153_410_685_822_6e-5,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            air_thermal_conductivity(t).get::<watt_per_meter_kelvin>(),
            0.02478,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            specific_heat(Ratio::new::<ratio>(0.01)).get::<joule_per_kilogram_kelvin>(),
            1024.6,
            max_relative = 1e-12
        );
    }

    #[test]
    fn prandtl_falls_back_without_conductivity() {
        let mu = DynamicViscosity::new::<pascal_second>(1.8e-5);
        let cp = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1006.0);

        let zero = ThermalConductivity::new::<watt_per_meter_kelvin>(0.0);
        let negative = ThermalConductivity::new::<watt_per_meter_kelvin>(-0.01);
        assert_relative_eq!(prandtl_number(mu, cp, zero), 0.7);
        assert_relative_eq!(prandtl_number(mu, cp, negative), 0.7);

        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(0.025);
        assert_relative_eq!(prandtl_number(mu, cp, k), 1006.0 * 1.8e-5 / 0.025);
    }

    proptest! {
        #[test]
        fn saturation_pressure_increases_with_temperature(t in -40.0_f64..99.0, dt in 0.01_f64..1.0) {
            let lower = saturation_pressure(celsius(t)).get::<pascal>();
            let upper = saturation_pressure(celsius(t + dt)).get::<pascal>();
            prop_assert!(upper > lower);
        }

        #[test]
        fn humidity_ratio_increases_with_relative_humidity(
            t in -30.0_f64..60.0,
            rh in 0.0_f64..0.99,
            drh in 0.001_f64..0.01,
        ) {
            let p = atmosphere();
            let lower = humidity_ratio(celsius(t), p, Ratio::new::<ratio>(rh)).unwrap();
            let upper = humidity_ratio(celsius(t), p, Ratio::new::<ratio>(rh + drh)).unwrap();
            prop_assert!(upper.get::<ratio>() > lower.get::<ratio>());
        }
    }
}
