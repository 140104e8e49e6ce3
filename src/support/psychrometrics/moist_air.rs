use uom::si::{
    f64::{
        DynamicViscosity, MassDensity, Pressure, Ratio, SpecificHeatCapacity,
        ThermalConductivity, ThermodynamicTemperature,
    },
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    error::DomainError,
};

use super::STANDARD_PRESSURE_PA;

/// The state of a moist-air stream.
///
/// A `MoistAir` is fixed by its dry-bulb temperature, humidity ratio, and
/// total pressure. Everything else (density, transport properties, Prandtl
/// number) is derived on demand from these three values.
///
/// The fields are validated at construction and cannot change afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistAir {
    temperature: ThermodynamicTemperature,
    humidity_ratio: Ratio,
    pressure: Pressure,
}

/// Thermophysical properties of a moist-air state.
///
/// This is the property set consumed by the channel convection correlations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirProperties {
    pub density: MassDensity,
    pub dynamic_viscosity: DynamicViscosity,
    pub thermal_conductivity: ThermalConductivity,
    pub specific_heat: SpecificHeatCapacity,
    pub prandtl: f64,
}

impl MoistAir {
    /// Creates a moist-air state from a known humidity ratio.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the absolute temperature or the pressure is
    /// not strictly positive, or if the humidity ratio is negative.
    pub fn new(
        temperature: ThermodynamicTemperature,
        humidity_ratio: Ratio,
        pressure: Pressure,
    ) -> Result<Self, DomainError> {
        StrictlyPositive::check(&temperature.get::<kelvin>())
            .map_err(DomainError::invalid("absolute temperature"))?;
        let humidity_ratio = NonNegative::new(humidity_ratio)
            .map_err(DomainError::invalid("humidity ratio"))?
            .into_inner();
        let pressure = StrictlyPositive::new(pressure)
            .map_err(DomainError::invalid("pressure"))?
            .into_inner();

        Ok(Self {
            temperature,
            humidity_ratio,
            pressure,
        })
    }

    /// Creates a moist-air state from a relative humidity.
    ///
    /// The humidity ratio is computed with [`super::humidity_ratio`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the state is non-physical, including when
    /// the vapor pressure would reach the total pressure.
    pub fn from_relative_humidity(
        temperature: ThermodynamicTemperature,
        relative_humidity: Ratio,
        pressure: Pressure,
    ) -> Result<Self, DomainError> {
        let humidity_ratio = super::humidity_ratio(temperature, pressure, relative_humidity)?;
        Self::new(temperature, humidity_ratio, pressure)
    }

    /// Creates a moist-air state from a relative humidity at 101 325 Pa.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the state is non-physical.
    pub fn from_relative_humidity_at_standard_pressure(
        temperature: ThermodynamicTemperature,
        relative_humidity: Ratio,
    ) -> Result<Self, DomainError> {
        Self::from_relative_humidity(
            temperature,
            relative_humidity,
            Pressure::new::<pascal>(STANDARD_PRESSURE_PA),
        )
    }

    /// Dry-bulb temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Humidity ratio, kg of water vapor per kg of dry air.
    #[must_use]
    pub fn humidity_ratio(&self) -> Ratio {
        self.humidity_ratio
    }

    /// Total (barometric) pressure.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        super::air_density(self.temperature, self.pressure, self.humidity_ratio)
    }

    #[must_use]
    pub fn dynamic_viscosity(&self) -> DynamicViscosity {
        super::air_viscosity(self.temperature)
    }

    #[must_use]
    pub fn thermal_conductivity(&self) -> ThermalConductivity {
        super::air_thermal_conductivity(self.temperature)
    }

    #[must_use]
    pub fn specific_heat(&self) -> SpecificHeatCapacity {
        super::specific_heat(self.humidity_ratio)
    }

    #[must_use]
    pub fn prandtl_number(&self) -> f64 {
        super::prandtl_number(
            self.dynamic_viscosity(),
            self.specific_heat(),
            self.thermal_conductivity(),
        )
    }

    /// Saturation pressure of water vapor at this state's temperature.
    #[must_use]
    pub fn saturation_pressure(&self) -> Pressure {
        super::saturation_pressure(self.temperature)
    }

    /// Partial pressure of the water vapor in the mixture.
    #[must_use]
    pub fn vapor_pressure(&self) -> Pressure {
        super::vapor_pressure(self.pressure, self.humidity_ratio)
    }

    /// Relative humidity implied by the humidity ratio.
    ///
    /// Values above one indicate a supersaturated state, which can arise when
    /// a humidity ratio is supplied directly.
    #[must_use]
    pub fn relative_humidity(&self) -> Ratio {
        self.vapor_pressure() / self.saturation_pressure()
    }

    /// Collects the derived properties into a single record.
    #[must_use]
    pub fn properties(&self) -> AirProperties {
        AirProperties {
            density: self.density(),
            dynamic_viscosity: self.dynamic_viscosity(),
            thermal_conductivity: self.thermal_conductivity(),
            specific_heat: self.specific_heat(),
            prandtl: self.prandtl_number(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        dynamic_viscosity::pascal_second,
        mass_density::kilogram_per_cubic_meter,
        ratio::{percent, ratio},
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::constraint::ConstraintError;

    fn exhaust() -> Result<MoistAir, DomainError> {
        MoistAir::from_relative_humidity_at_standard_pressure(
            ThermodynamicTemperature::new::<degree_celsius>(40.0),
            Ratio::new::<percent>(50.0),
        )
    }

    #[test]
    fn warm_exhaust_properties() -> Result<(), DomainError> {
        let air = exhaust()?;

        assert_relative_eq!(
            air.humidity_ratio().get::<ratio>(),
            0.023_515_558_773_363_088,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            air.density().get::<kilogram_per_cubic_meter>(),
            1.111_294_599_580_398,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            air.dynamic_viscosity().get::<pascal_second>(),
            1.907_574_296_655_832_5e-5,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            air.thermal_conductivity().get::<watt_per_meter_kelvin>(),
            0.02682,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            air.specific_heat().get::<joule_per_kilogram_kelvin>(),
            1_049.738_939_318_455_3,
            max_relative = 1e-9
        );
        assert_relative_eq!(air.prandtl_number(), 0.746_627_523_804_117, max_relative = 1e-9);

        Ok(())
    }

    #[test]
    fn properties_record_matches_accessors() -> Result<(), DomainError> {
        let air = exhaust()?;
        let props = air.properties();

        assert_eq!(props.density, air.density());
        assert_eq!(props.dynamic_viscosity, air.dynamic_viscosity());
        assert_eq!(props.thermal_conductivity, air.thermal_conductivity());
        assert_eq!(props.specific_heat, air.specific_heat());
        assert_relative_eq!(props.prandtl, air.prandtl_number());

        Ok(())
    }

    #[test]
    fn relative_humidity_round_trips() -> Result<(), DomainError> {
        let air = exhaust()?;
        assert_relative_eq!(air.relative_humidity().get::<ratio>(), 0.5, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn rejects_non_physical_states() {
        let pressure = Pressure::new::<pascal>(STANDARD_PRESSURE_PA);

        let below_absolute_zero = MoistAir::new(
            ThermodynamicTemperature::new::<kelvin>(-1.0),
            Ratio::new::<ratio>(0.01),
            pressure,
        );
        assert_eq!(
            below_absolute_zero,
            Err(DomainError::Invalid {
                quantity: "absolute temperature",
                source: ConstraintError::Negative,
            })
        );

        let negative_humidity = MoistAir::new(
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
            Ratio::new::<ratio>(-0.001),
            pressure,
        );
        assert!(matches!(
            negative_humidity,
            Err(DomainError::Invalid {
                quantity: "humidity ratio",
                ..
            })
        ));

        let vacuum = MoistAir::from_relative_humidity(
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
            Ratio::new::<ratio>(0.5),
            Pressure::new::<pascal>(0.0),
        );
        assert!(matches!(
            vacuum,
            Err(DomainError::Invalid {
                quantity: "pressure",
                source: ConstraintError::Zero,
            })
        ));
    }

    #[test]
    fn relative_humidity_below_absolute_zero_is_rejected() {
        let pressure = Pressure::new::<pascal>(STANDARD_PRESSURE_PA);

        for temperature in [
            ThermodynamicTemperature::new::<kelvin>(-1.0),
            ThermodynamicTemperature::new::<degree_celsius>(-300.0),
        ] {
            let state =
                MoistAir::from_relative_humidity(temperature, Ratio::new::<ratio>(0.5), pressure);
            assert_eq!(
                state,
                Err(DomainError::Invalid {
                    quantity: "absolute temperature",
                    source: ConstraintError::Negative,
                })
            );
        }
    }
}
