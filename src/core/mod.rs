//! Core application primitives (engines, orchestrators)

pub mod analysis;
pub mod http;

pub use analysis::*;
pub use http::*;
