//! Rule cascade turning an indicator snapshot into a recommendation.
//!
//! Rules are checked in order and the first match wins, so an earlier rule
//! takes precedence even when a later one also holds. Any comparison with an
//! undefined reading is false.

use crate::models::{Decision, DecisionLabel, IndicatorSet};

pub const STRONG_BUY_REASON: &str =
    "MACD crossover confirms bullish momentum. RSI is below 65 (not overbought). \
Price is above SMA50, confirming an uptrend. Volume spike adds confidence.";
pub const BUY_CONSIDERATION_REASON: &str =
    "MACD crossover and price above SMA50 suggest an uptrend, but no volume spike. \
Consider waiting for higher volume or further confirmation.";
pub const BUY_REASON: &str =
    "MACD is above the Signal Line, indicating bullish momentum. \
RSI is below overbought levels, and price is above EMA50, showing upward strength.";
pub const BUY_DIP_REASON: &str =
    "RSI near oversold levels (<40) and MACD weakness suggest a potential rebound opportunity.";
pub const TRIM_POSITION_REASON: &str =
    "RSI is in overbought territory (>75), suggesting potential pullback. \
Consider taking partial profits or monitoring for a reversal.";
pub const SELL_REASON: &str =
    "SMA50 and EMA50 are below long-term averages, suggesting a weakening trend. \
MACD below Signal Line confirms bearish momentum.";
pub const HOLD_REASON: &str =
    "No strong buy or sell signals detected. Monitor for trend confirmation.";

fn gt(a: Option<f64>, b: Option<f64>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a > b)
}

fn lt(a: Option<f64>, b: Option<f64>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a < b)
}

fn ge(a: Option<f64>, b: Option<f64>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a >= b)
}

pub struct DecisionEngine;

impl DecisionEngine {
    pub fn decide(set: &IndicatorSet) -> Decision {
        let close = Some(set.last_close);
        let macd_above = gt(set.macd, set.signal_line);
        let macd_below = lt(set.macd, set.signal_line);

        if macd_above && lt(set.rsi, Some(65.0)) && gt(close, set.sma50) {
            if set.volume_spike {
                Decision::new(DecisionLabel::StrongBuy, STRONG_BUY_REASON)
            } else {
                Decision::new(DecisionLabel::BuyConsideration, BUY_CONSIDERATION_REASON)
            }
        } else if macd_above && lt(set.rsi, Some(70.0)) && gt(close, set.ema50) {
            Decision::new(DecisionLabel::Buy, BUY_REASON)
        } else if macd_below && lt(set.rsi, Some(40.0)) {
            Decision::new(DecisionLabel::BuyDip, BUY_DIP_REASON)
        } else if gt(set.rsi, Some(75.0))
            || (ge(close, set.upper_band) && gt(set.rsi, Some(70.0)))
        {
            Decision::new(DecisionLabel::TrimPosition, TRIM_POSITION_REASON)
        } else if (lt(set.sma50, set.sma200) || lt(set.ema50, set.ema200)) && macd_below {
            Decision::new(DecisionLabel::Sell, SELL_REASON)
        } else {
            Decision::new(DecisionLabel::Hold, HOLD_REASON)
        }
    }
}
