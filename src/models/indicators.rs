use serde::{Deserialize, Serialize};

/// Retracement ratios applied to the recent high/low range.
pub const FIBONACCI_RATIOS: [(&str, f64); 4] = [
    ("23.6%", 0.236),
    ("38.2%", 0.382),
    ("50.0%", 0.5),
    ("61.8%", 0.618),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FibonacciLevels {
    #[serde(rename = "23.6%")]
    pub level_236: f64,
    #[serde(rename = "38.2%")]
    pub level_382: f64,
    #[serde(rename = "50.0%")]
    pub level_500: f64,
    #[serde(rename = "61.8%")]
    pub level_618: f64,
}

impl FibonacciLevels {
    /// Levels measured down from `high`: `high - ratio * (high - low)`.
    pub fn from_range(high: f64, low: f64) -> Self {
        let range = high - low;
        let [a, b, c, d] = FIBONACCI_RATIOS.map(|(_, ratio)| high - ratio * range);
        Self {
            level_236: a,
            level_382: b,
            level_500: c,
            level_618: d,
        }
    }

    /// `(label, level)` pairs in ratio order.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            (FIBONACCI_RATIOS[0].0, self.level_236),
            (FIBONACCI_RATIOS[1].0, self.level_382),
            (FIBONACCI_RATIOS[2].0, self.level_500),
            (FIBONACCI_RATIOS[3].0, self.level_618),
        ]
    }
}

/// Latest reading of every indicator the decision rules consume.
///
/// `None` means the series was too short for that indicator's window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    #[serde(rename = "last_close_price")]
    pub last_close: f64,
    #[serde(rename = "SMA50")]
    pub sma50: Option<f64>,
    #[serde(rename = "SMA200")]
    pub sma200: Option<f64>,
    #[serde(rename = "EMA50")]
    pub ema50: Option<f64>,
    #[serde(rename = "EMA200")]
    pub ema200: Option<f64>,
    #[serde(rename = "RSI")]
    pub rsi: Option<f64>,
    #[serde(rename = "MACD")]
    pub macd: Option<f64>,
    #[serde(rename = "Signal_Line")]
    pub signal_line: Option<f64>,
    #[serde(rename = "Upper_Bollinger_Band")]
    pub upper_band: Option<f64>,
    #[serde(rename = "Lower_Bollinger_Band")]
    pub lower_band: Option<f64>,
    #[serde(rename = "Fibonacci_Levels")]
    pub fibonacci: FibonacciLevels,
    #[serde(rename = "Volume_Spike")]
    pub volume_spike: bool,
}

impl IndicatorSet {
    /// An empty reading at `last_close`; every indicator undefined.
    pub fn new(last_close: f64) -> Self {
        Self {
            last_close,
            sma50: None,
            sma200: None,
            ema50: None,
            ema200: None,
            rsi: None,
            macd: None,
            signal_line: None,
            upper_band: None,
            lower_band: None,
            fibonacci: FibonacciLevels::from_range(last_close, last_close),
            volume_spike: false,
        }
    }

    pub fn with_sma(mut self, sma50: Option<f64>, sma200: Option<f64>) -> Self {
        self.sma50 = sma50;
        self.sma200 = sma200;
        self
    }

    pub fn with_ema(mut self, ema50: Option<f64>, ema200: Option<f64>) -> Self {
        self.ema50 = ema50;
        self.ema200 = ema200;
        self
    }

    pub fn with_rsi(mut self, rsi: Option<f64>) -> Self {
        self.rsi = rsi;
        self
    }

    pub fn with_macd(mut self, macd: Option<f64>, signal_line: Option<f64>) -> Self {
        self.macd = macd;
        self.signal_line = signal_line;
        self
    }

    pub fn with_bands(mut self, upper: Option<f64>, lower: Option<f64>) -> Self {
        self.upper_band = upper;
        self.lower_band = lower;
        self
    }

    pub fn with_fibonacci(mut self, fibonacci: FibonacciLevels) -> Self {
        self.fibonacci = fibonacci;
        self
    }

    pub fn with_volume_spike(mut self, volume_spike: bool) -> Self {
        self.volume_spike = volume_spike;
        self
    }
}
