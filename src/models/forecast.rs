use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One extrapolated closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Predicted_Close")]
    pub predicted_close: f64,
}
