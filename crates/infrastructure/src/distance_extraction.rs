//! Distance extraction from generative replies
//!
//! The estimator is asked for `{"distance_km": <number>}`. A reply is
//! accepted by one of two rules, tried in order:
//!
//! 1. The whole text (optionally inside a Markdown code fence) is a JSON
//!    object with a finite, non-negative numeric `distance_km`.
//! 2. The first number in the text is immediately followed by a length
//!    unit (`km`, `mi`, `m` and their spelled-out forms).
//!
//! A reply that is a JSON object is judged by rule 1 alone.

use std::sync::LazyLock;

use domain::DistanceResult;
use regex::Regex;
use thiserror::Error;

const METERS_PER_MILE: f64 = 1609.344;

/// First numeric token: ASCII digits, optional thousands groups, optional fraction
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(r"[0-9]+(?:,[0-9]{3})*(?:\.[0-9]+)?").expect("number pattern")
});

/// Unit directly after the number
static UNIT: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(r"(?i)^\s*(kilometres?|kilometers?|km|miles?|mi|metres?|meters?|m)\b")
        .expect("unit pattern")
});

/// Why a reply was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// Nothing but whitespace
    #[error("reply is empty")]
    Empty,

    /// JSON object without a usable `distance_km`
    #[error("JSON reply has no finite, non-negative numeric distance_km")]
    InvalidPayload,

    /// No digits at all
    #[error("reply contains no number")]
    NoNumber,

    /// First number is preceded by a minus sign
    #[error("distance is negative")]
    Negative,

    /// First number is not followed by a length unit
    #[error("first number '{0}' has no length unit")]
    MissingUnit(String),

    /// Number could not be represented as a finite value
    #[error("distance '{0}' is not a finite number")]
    NotFinite(String),
}

/// Length unit recognized after a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LengthUnit {
    Kilometers,
    Miles,
    Meters,
}

impl LengthUnit {
    fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Some(Self::Kilometers)
            },
            "mi" | "mile" | "miles" => Some(Self::Miles),
            "m" | "meter" | "meters" | "metre" | "metres" => Some(Self::Meters),
            _ => None,
        }
    }

    const fn to_meters(self, value: f64) -> f64 {
        match self {
            Self::Kilometers => value * 1000.0,
            Self::Miles => value * METERS_PER_MILE,
            Self::Meters => value,
        }
    }
}

/// Extract a distance from a generative reply
///
/// The result carries no provider duration.
pub fn extract_distance(reply: &str) -> Result<DistanceResult, ExtractionError> {
    let text = reply.trim();
    if text.is_empty() {
        return Err(ExtractionError::Empty);
    }

    let unfenced = strip_code_fence(text);
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(unfenced) {
        return map
            .get("distance_km")
            .and_then(serde_json::Value::as_f64)
            .filter(|km| *km >= 0.0 && (km * 1000.0).is_finite())
            .map(|km| DistanceResult::new(km * 1000.0, format!("{km} km")))
            .ok_or(ExtractionError::InvalidPayload);
    }

    extract_number_with_unit(text)
}

fn extract_number_with_unit(text: &str) -> Result<DistanceResult, ExtractionError> {
    let number = NUMBER.find(text).ok_or(ExtractionError::NoNumber)?;

    if text[..number.start()].ends_with('-') {
        return Err(ExtractionError::Negative);
    }

    let rest = &text[number.end()..];
    let unit_match = UNIT
        .captures(rest)
        .ok_or_else(|| ExtractionError::MissingUnit(number.as_str().to_string()))?;
    let unit = unit_match
        .get(1)
        .and_then(|m| LengthUnit::parse(m.as_str()))
        .ok_or_else(|| ExtractionError::MissingUnit(number.as_str().to_string()))?;

    let value: f64 = number
        .as_str()
        .replace(',', "")
        .parse()
        .map_err(|_| ExtractionError::NotFinite(number.as_str().to_string()))?;
    let meters = unit.to_meters(value);
    if !meters.is_finite() {
        return Err(ExtractionError::NotFinite(number.as_str().to_string()));
    }

    let span_end = number.end() + unit_match.get(0).map_or(0, |m| m.end());
    let span = text[number.start()..span_end].to_string();

    Ok(DistanceResult::new(meters, span))
}

/// Remove a surrounding ```` ``` ```` or ```` ```json ```` fence
fn strip_code_fence(text: &str) -> &str {
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let Some(inner) = inner.strip_suffix("```") else {
        return text;
    };
    // Drop an info string such as `json` on the opening line
    match inner.split_once('\n') {
        Some((info, body)) if !info.trim_start().starts_with('{') => body.trim(),
        _ => inner.trim(),
    }
}
