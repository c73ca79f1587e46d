//! Signal evaluation: indicator snapshot, decision cascade and readout log.

pub mod decision;
pub mod engine;
pub mod readout;

pub use decision::*;
pub use engine::*;
pub use readout::*;
