//! Numeric helpers shared by indicators and the forecast.

pub mod math;
