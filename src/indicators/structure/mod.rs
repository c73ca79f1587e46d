//! Price structure: Fibonacci retracement levels

pub mod fibonacci;

pub use fibonacci::*;
