//! Wire format of the TradingView chart websocket.
//!
//! Every payload is wrapped as `~m~<len>~m~<payload>` and one websocket text
//! message may carry several of them. Payloads are either heartbeats
//! (`~h~<n>`, echoed back verbatim) or JSON objects `{"m": method, "p": params}`.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ProviderError;

const FRAME_MARKER: &str = "~m~";
const HEARTBEAT_MARKER: &str = "~h~";

/// Series id used for the single series a session requests.
pub const SERIES_ID: &str = "s1";
const SYMBOL_ID: &str = "symbol_1";
const DAILY_RESOLUTION: &str = "1D";

pub fn encode_frame(payload: &str) -> String {
    format!("{}{}{}{}", FRAME_MARKER, payload.len(), FRAME_MARKER, payload)
}

/// Split a websocket text message into its payloads.
pub fn decode_frames(message: &str) -> Result<Vec<&str>, ProviderError> {
    let mut frames = Vec::new();
    let mut rest = message;
    while !rest.is_empty() {
        let body = rest
            .strip_prefix(FRAME_MARKER)
            .ok_or_else(|| malformed(message))?;
        let (len, body) = body.split_once(FRAME_MARKER).ok_or_else(|| malformed(message))?;
        let len: usize = len.parse().map_err(|_| malformed(message))?;
        let payload = body.get(..len).ok_or_else(|| malformed(message))?;
        frames.push(payload);
        rest = &body[len..];
    }
    Ok(frames)
}

fn malformed(message: &str) -> ProviderError {
    let preview: String = message.chars().take(80).collect();
    ProviderError::Protocol(format!("malformed frame: {}", preview))
}

pub fn command(method: &str, params: Value) -> String {
    encode_frame(&json!({ "m": method, "p": params }).to_string())
}

/// Commands that open a chart session and request `bars` daily bars of
/// `symbol` (exchange-qualified, e.g. `CSELK:JKH.N0000`).
pub fn series_request(session: &str, symbol: &str, bars: usize) -> Vec<String> {
    let resolve = json!({ "symbol": symbol, "adjustment": "splits" }).to_string();
    vec![
        command("set_auth_token", json!(["unauthorized_user_token"])),
        command("chart_create_session", json!([session, ""])),
        command(
            "resolve_symbol",
            json!([session, SYMBOL_ID, format!("={}", resolve)]),
        ),
        command(
            "create_series",
            json!([session, SERIES_ID, SERIES_ID, SYMBOL_ID, DAILY_RESOLUTION, bars]),
        ),
    ]
}

/// One bar as sent by the feed: `[time, open, high, low, close, volume]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedBar {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

#[derive(Debug, Deserialize)]
struct SeriesPoint {
    v: Vec<f64>,
}

impl SeriesPoint {
    fn into_bar(self) -> Option<FeedBar> {
        match self.v.as_slice() {
            [t, o, h, l, c, rest @ ..] => Some(FeedBar {
                timestamp: *t as i64,
                open: *o,
                high: *h,
                low: *l,
                close: *c,
                // Index series carry no volume.
                volume: rest.first().copied().unwrap_or(0.0),
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Heartbeat(String),
    SymbolResolved { description: Option<String> },
    Bars(Vec<FeedBar>),
    Completed,
    SymbolError(String),
    Error(String),
    Other,
}

/// Interpret one decoded payload.
pub fn classify(payload: &str) -> Result<SessionEvent, ProviderError> {
    if payload.starts_with(HEARTBEAT_MARKER) {
        return Ok(SessionEvent::Heartbeat(payload.to_string()));
    }

    let value: Value = serde_json::from_str(payload)
        .map_err(|e| ProviderError::Protocol(format!("invalid payload: {}", e)))?;
    // The greeting carries session metadata but no method.
    let Some(method) = value.get("m").and_then(Value::as_str) else {
        return Ok(SessionEvent::Other);
    };
    let params = value.get("p").cloned().unwrap_or(Value::Null);

    let event = match method {
        "symbol_resolved" => SessionEvent::SymbolResolved {
            description: params[2]["description"].as_str().map(str::to_string),
        },
        "timescale_update" | "du" => {
            let points = params[1][SERIES_ID]["s"].clone();
            if points.is_null() {
                return Ok(SessionEvent::Other);
            }
            let points: Vec<SeriesPoint> = serde_json::from_value(points)
                .map_err(|e| ProviderError::Protocol(format!("invalid series data: {}", e)))?;
            SessionEvent::Bars(points.into_iter().filter_map(SeriesPoint::into_bar).collect())
        }
        "series_completed" => SessionEvent::Completed,
        "symbol_error" => SessionEvent::SymbolError(params.to_string()),
        "critical_error" | "series_error" | "protocol_error" => {
            SessionEvent::Error(format!("{}: {}", method, params))
        }
        _ => SessionEvent::Other,
    };
    Ok(event)
}
