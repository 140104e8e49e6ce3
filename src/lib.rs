//! # Plate HX
//!
//! Performance of air-to-air plate heat exchangers, as a
//! [Twine](https://github.com/isentropic-dev/twine) model.
//!
//! Given the hot and cold inlet air states, a face velocity, and the plate
//! geometry, the crate computes:
//!
//! - moist-air properties of both streams,
//! - channel Reynolds numbers and convection coefficients,
//! - the overall U-value, `UA`, and stream capacitance rates,
//! - effectiveness, heat transfer rate, and outlet temperatures via the
//!   effectiveness-NTU method for counter-flow or cross-flow.
//!
//! ## Crate layout
//!
//! - [`models`]: The [`twine_core::Model`] implementation,
//!   [`PlateHx`](models::thermal::plate_hx::PlateHx).
//! - [`support`]: The correlations and types the model is built from.
//!
//! Modules in [`support`] are part of the public API because they're useful
//! on their own, but their APIs are not stable.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`debug` per evaluation, `trace` per
//! correlation, `warn` for degenerate geometry) and never installs a
//! subscriber.

pub mod models;
pub mod support;
