use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is greater than zero.
///
/// Plate dimensions, absolute pressures, and material conductivities all use
/// this bound.
///
/// # Examples
///
/// ```
/// use plate_hx::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Pressure, pressure::pascal};
///
/// assert!(StrictlyPositive::new(Pressure::new::<pascal>(101_325.0)).is_ok());
/// assert!(StrictlyPositive::new(Pressure::new::<pascal>(0.0)).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::millimeter};

    #[test]
    fn integers() {
        assert_eq!(StrictlyPositive::new(50).unwrap().into_inner(), 50);
        assert_eq!(StrictlyPositive::new(0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-3), Err(ConstraintError::Negative));
    }

    #[test]
    fn plate_thickness() {
        let thickness = Length::new::<millimeter>(0.5);
        assert!(StrictlyPositive::new(thickness).is_ok());

        let missing = Length::new::<millimeter>(0.0);
        assert_eq!(StrictlyPositive::new(missing), Err(ConstraintError::Zero));

        let nan = Length::new::<millimeter>(f64::NAN);
        assert_eq!(StrictlyPositive::new(nan), Err(ConstraintError::NotANumber));
    }
}
