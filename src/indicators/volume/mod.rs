//! Volume indicators: spike detection

pub mod spike;

pub use spike::*;
