use uom::si::{
    f64::{Area, Length, ThermalConductivity},
    length::{meter, micrometer, millimeter},
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::{
    constraint::{ConstraintError, NonNegative, StrictlyPositive},
    error::DomainError,
};

/// Geometry and material of a plate pack.
///
/// `N` parallel plates form `N − 1` channels, with the hot and cold streams in
/// alternating channels. The outermost two plates face the casing, so only
/// `N − 2` plates exchange heat, each through both of its faces.
///
/// # Two-plate packs
///
/// A pack with exactly two plates is accepted. It has one channel and no
/// active heat-transfer area, so an exchanger built from it transfers no heat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateGeometry {
    plate_width: Length,
    plate_height: Length,
    plate_gap: Length,
    plate_count: u32,
    plate_thickness: Length,
    plate_conductivity: ThermalConductivity,
    surface_roughness: Length,
}

impl PlateGeometry {
    /// Smallest plate count that still forms a channel.
    pub const MIN_PLATE_COUNT: u32 = 2;

    /// Creates a validated plate geometry.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if any length or the plate conductivity is not
    /// strictly positive, the roughness is negative, or there are fewer than
    /// two plates.
    pub fn new(
        plate_width: Length,
        plate_height: Length,
        plate_gap: Length,
        plate_count: u32,
        plate_thickness: Length,
        plate_conductivity: ThermalConductivity,
        surface_roughness: Length,
    ) -> Result<Self, DomainError> {
        if plate_count < Self::MIN_PLATE_COUNT {
            return Err(DomainError::Invalid {
                quantity: "plate count",
                source: ConstraintError::BelowMinimum,
            });
        }

        Ok(Self {
            plate_width: positive(plate_width, "plate width")?,
            plate_height: positive(plate_height, "plate height")?,
            plate_gap: positive(plate_gap, "plate gap")?,
            plate_count,
            plate_thickness: positive(plate_thickness, "plate thickness")?,
            plate_conductivity: StrictlyPositive::new(plate_conductivity)
                .map_err(DomainError::invalid("plate conductivity"))?
                .into_inner(),
            surface_roughness: NonNegative::new(surface_roughness)
                .map_err(DomainError::invalid("surface roughness"))?
                .into_inner(),
        })
    }

    #[must_use]
    pub fn plate_width(&self) -> Length {
        self.plate_width
    }

    #[must_use]
    pub fn plate_height(&self) -> Length {
        self.plate_height
    }

    /// Clear gap between adjacent plates.
    #[must_use]
    pub fn plate_gap(&self) -> Length {
        self.plate_gap
    }

    #[must_use]
    pub fn plate_count(&self) -> u32 {
        self.plate_count
    }

    #[must_use]
    pub fn plate_thickness(&self) -> Length {
        self.plate_thickness
    }

    #[must_use]
    pub fn plate_conductivity(&self) -> ThermalConductivity {
        self.plate_conductivity
    }

    /// Absolute surface roughness of the plates.
    #[must_use]
    pub fn surface_roughness(&self) -> Length {
        self.surface_roughness
    }

    /// Number of flow channels, one fewer than the plate count.
    #[must_use]
    pub fn channel_count(&self) -> u32 {
        self.plate_count - 1
    }

    /// Hydraulic diameter of a channel, twice the plate gap.
    #[must_use]
    pub fn hydraulic_diameter(&self) -> Length {
        self.plate_gap * 2.0
    }

    /// Cross-sectional flow area of one channel.
    #[must_use]
    pub fn flow_area_per_channel(&self) -> Area {
        self.plate_gap * self.plate_width
    }

    /// Total heat-transfer area, `(N − 2)·2·W·H`.
    ///
    /// Zero for a two-plate pack.
    #[must_use]
    pub fn heat_transfer_area(&self) -> Area {
        let active_plates = f64::from(self.plate_count - Self::MIN_PLATE_COUNT);
        self.plate_width * self.plate_height * (2.0 * active_plates)
    }

    /// Roughness relative to the hydraulic diameter.
    #[must_use]
    pub fn relative_roughness(&self) -> f64 {
        self.surface_roughness.get::<meter>() / self.hydraulic_diameter().get::<meter>()
    }
}

impl Default for PlateGeometry {
    /// A 1.4 m square pack of 50 aluminium plates, 0.5 mm thick, spaced 15 mm apart.
    fn default() -> Self {
        Self {
            plate_width: Length::new::<meter>(1.4),
            plate_height: Length::new::<meter>(1.4),
            plate_gap: Length::new::<millimeter>(15.0),
            plate_count: 50,
            plate_thickness: Length::new::<millimeter>(0.5),
            plate_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(237.0),
            surface_roughness: Length::new::<micrometer>(1.5),
        }
    }
}

fn positive(length: Length, quantity: &'static str) -> Result<Length, DomainError> {
    Ok(StrictlyPositive::new(length)
        .map_err(DomainError::invalid(quantity))?
        .into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::area::square_meter;

    fn pack(plate_count: u32) -> Result<PlateGeometry, DomainError> {
        let defaults = PlateGeometry::default();
        PlateGeometry::new(
            defaults.plate_width(),
            defaults.plate_height(),
            defaults.plate_gap(),
            plate_count,
            defaults.plate_thickness(),
            defaults.plate_conductivity(),
            defaults.surface_roughness(),
        )
    }

    #[test]
    fn default_pack_derived_dimensions() {
        let geometry = PlateGeometry::default();

        assert_eq!(geometry.channel_count(), 49);
        assert_relative_eq!(
            geometry.hydraulic_diameter().get::<millimeter>(),
            30.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            geometry.flow_area_per_channel().get::<square_meter>(),
            0.021,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            geometry.heat_transfer_area().get::<square_meter>(),
            188.16,
            max_relative = 1e-12
        );
        assert_relative_eq!(geometry.relative_roughness(), 5e-5, max_relative = 1e-9);
    }

    #[test]
    fn two_plates_form_one_channel_without_area() -> Result<(), DomainError> {
        let geometry = pack(2)?;

        assert_eq!(geometry.channel_count(), 1);
        assert_relative_eq!(geometry.heat_transfer_area().get::<square_meter>(), 0.0);
        Ok(())
    }

    #[test]
    fn three_plates_have_one_active_plate() -> Result<(), DomainError> {
        let geometry = pack(3)?;

        assert_eq!(geometry.channel_count(), 2);
        assert_relative_eq!(
            geometry.heat_transfer_area().get::<square_meter>(),
            2.0 * 1.4 * 1.4,
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn rejects_fewer_than_two_plates() {
        for count in [0, 1] {
            assert_eq!(
                pack(count),
                Err(DomainError::Invalid {
                    quantity: "plate count",
                    source: ConstraintError::BelowMinimum,
                })
            );
        }
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        let defaults = PlateGeometry::default();

        let no_gap = PlateGeometry::new(
            defaults.plate_width(),
            defaults.plate_height(),
            Length::new::<meter>(0.0),
            10,
            defaults.plate_thickness(),
            defaults.plate_conductivity(),
            defaults.surface_roughness(),
        );
        assert!(matches!(
            no_gap,
            Err(DomainError::Invalid {
                quantity: "plate gap",
                source: ConstraintError::Zero,
            })
        ));

        let negative_roughness = PlateGeometry::new(
            defaults.plate_width(),
            defaults.plate_height(),
            defaults.plate_gap(),
            10,
            defaults.plate_thickness(),
            defaults.plate_conductivity(),
            Length::new::<meter>(-1e-6),
        );
        assert!(matches!(
            negative_roughness,
            Err(DomainError::Invalid {
                quantity: "surface roughness",
                ..
            })
        ));
    }
}
