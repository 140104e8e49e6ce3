use thiserror::Error;
use uom::si::f64::Pressure;

use crate::support::constraint::ConstraintError;

/// Errors raised when an input describes a non-physical situation.
///
/// The calculations in this crate are closed-form, so every error is detected
/// up front from the inputs; nothing is retried or partially computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A quantity violated its physical bound.
    ///
    /// For example, a negative absolute pressure or a relative humidity above one.
    #[error("invalid {quantity}: {source}")]
    Invalid {
        quantity: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The water vapor partial pressure reached the total pressure.
    ///
    /// The humidity ratio `0.622·p_v / (p − p_v)` is undefined or negative here.
    #[error("vapor pressure {vapor_pressure:?} is not below total pressure {pressure:?}")]
    VaporPressureAtOrAboveTotal {
        vapor_pressure: Pressure,
        pressure: Pressure,
    },
}

impl DomainError {
    /// Returns a closure tagging a [`ConstraintError`] with the offending quantity.
    pub(crate) fn invalid(quantity: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::Invalid { quantity, source }
    }
}
