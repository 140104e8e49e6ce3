use uom::si::f64::{Area, HeatTransfer, MassRate, ThermalConductance, VolumeRate};

use crate::support::{
    channel::FlowRegime,
    hx::{CapacitanceRate, ThermalResult},
};

/// Results of a plate exchanger evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateHxResults {
    /// Overall heat-transfer coefficient across the plate.
    pub u_value: HeatTransfer,
    /// Conductance `U · A`.
    pub ua: ThermalConductance,
    pub heat_transfer_area: Area,
    pub hot: StreamResults,
    pub cold: StreamResults,
    /// Effectiveness-NTU performance of the exchanger.
    pub thermal: ThermalResult,
}

/// Hydraulic and flow results for one stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamResults {
    pub reynolds: f64,
    pub regime: FlowRegime,
    pub convection_coefficient: HeatTransfer,
    pub mass_flow_per_channel: MassRate,
    /// Mass flow summed over every channel.
    pub mass_flow: MassRate,
    pub volume_flow_per_channel: VolumeRate,
    /// Volume flow summed over every channel.
    pub volume_flow: VolumeRate,
    pub capacitance_rate: CapacitanceRate,
}
