//! Single-phase convection in the flat channels between exchanger plates.
//!
//! Each channel is treated as a parallel-plate duct whose hydraulic diameter
//! is twice the plate gap. The convection coefficient follows the usual chain:
//!
//! 1. Reynolds number from the stream's density, viscosity, and face velocity.
//! 2. Darcy friction factor: `96/Re` when laminar, Haaland when turbulent.
//! 3. Nusselt number: the fully developed laminar constant, or Gnielinski.
//! 4. `h = Nu·k / D_h`.
//!
//! The laminar/turbulent split is at `Re = 2300`, with 2300 itself counted as
//! turbulent.

mod convection;
mod correlations;
mod geometry;

pub use convection::{ChannelConvection, channel_convection, convection_coefficient};
pub use correlations::{
    FlowRegime, LAMINAR_NUSSELT, TRANSITION_REYNOLDS, friction_factor, nusselt_number,
    reynolds_number,
};
pub use geometry::PlateGeometry;
