//! Indicator library.
//!
//! Every function is pure: it reads a slice of bars or values and returns a new,
//! time-aligned series or a latest scalar. Undefined leading windows are `None`
//! and are never zero-filled.

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use momentum::*;
pub use structure::*;
pub use trend::*;
pub use volatility::*;
pub use volume::*;
