//! Supporting utilities used by models.
//!
//! Everything here is a pure function of its inputs or an immutable value
//! type, so evaluations can run in parallel without coordination.

pub mod channel;
pub mod constraint;
pub mod error;
pub mod hx;
pub mod psychrometrics;
pub mod units;
