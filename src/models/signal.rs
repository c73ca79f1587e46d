use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::indicators::IndicatorSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionLabel {
    StrongBuy,
    BuyConsideration,
    Buy,
    BuyDip,
    TrimPosition,
    Sell,
    Hold,
    Pass,
}

impl DecisionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionLabel::StrongBuy => "STRONG_BUY",
            DecisionLabel::BuyConsideration => "BUY_CONSIDERATION",
            DecisionLabel::Buy => "BUY",
            DecisionLabel::BuyDip => "BUY_DIP",
            DecisionLabel::TrimPosition => "TRIM_POSITION",
            DecisionLabel::Sell => "SELL",
            DecisionLabel::Hold => "HOLD",
            DecisionLabel::Pass => "PASS",
        }
    }
}

impl fmt::Display for DecisionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recommendation and the user-facing reason for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    #[serde(rename = "decision")]
    pub label: DecisionLabel,
    #[serde(rename = "reason")]
    pub rationale: String,
}

impl Decision {
    pub fn new(label: DecisionLabel, rationale: impl Into<String>) -> Self {
        Self {
            label,
            rationale: rationale.into(),
        }
    }
}

impl Default for Decision {
    fn default() -> Self {
        Self::new(DecisionLabel::Pass, "No strong buy or sell signals detected.")
    }
}

/// Everything `analyze` returns for one ticker.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub ticker: String,
    pub full_name: String,
    #[serde(flatten)]
    pub indicators: IndicatorSet,
    #[serde(flatten)]
    pub decision: Decision,
    pub log: Vec<String>,
}
