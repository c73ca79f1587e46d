//! Shared data models spanning the engine layers.

pub mod bar;
pub mod forecast;
pub mod indicators;
pub mod signal;

pub use bar::{Bar, BarSeries};
pub use forecast::ForecastPoint;
pub use indicators::{FibonacciLevels, IndicatorSet};
pub use signal::{AnalysisReport, Decision, DecisionLabel};
