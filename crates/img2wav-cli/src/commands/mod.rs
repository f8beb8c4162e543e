//! CLI command implementations

pub mod combine;
pub mod convert;
pub mod signal;
