use uom::si::{
    f64::{Power, ThermodynamicTemperature},
    thermal_conductance::watt_per_kelvin,
};

use super::CapacitanceRate;

/// Inlet state for a stream entering the heat exchanger.
///
/// Assumes the air's specific heat remains constant through the exchanger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamInlet {
    pub(crate) capacitance_rate: CapacitanceRate,
    pub(crate) temperature: ThermodynamicTemperature,
}

impl StreamInlet {
    /// Capture the inlet capacitance rate and temperature.
    #[must_use]
    pub fn new(capacitance_rate: CapacitanceRate, temperature: ThermodynamicTemperature) -> Self {
        Self {
            capacitance_rate,
            temperature,
        }
    }

    #[must_use]
    pub fn capacitance_rate(&self) -> CapacitanceRate {
        self.capacitance_rate
    }

    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Outlet temperature from the energy balance `Q = C * (T_out - T_in)`.
    ///
    /// `heat_in` is the heat absorbed by the stream and is negative when the
    /// stream gives heat up. A stagnant stream (zero capacitance rate) keeps
    /// its inlet temperature, as does one with an infinite capacitance rate.
    #[must_use]
    pub(crate) fn outlet_temperature(&self, heat_in: Power) -> ThermodynamicTemperature {
        if self.capacitance_rate.get::<watt_per_kelvin>() == 0. {
            self.temperature
        } else {
            self.temperature + heat_in / *self.capacitance_rate
        }
    }
}
