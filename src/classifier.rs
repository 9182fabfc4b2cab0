use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::model::candle::Candle;

/// Single-candle classification used by the quiz and the `classify` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternLabel {
    Doji,
    Bullish,
    Bearish,
}

impl fmt::Display for PatternLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PatternLabel::Doji => "Doji",
            PatternLabel::Bullish => "Bullish",
            PatternLabel::Bearish => "Bearish",
        };
        f.write_str(s)
    }
}

impl FromStr for PatternLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "doji" | "d" => Ok(PatternLabel::Doji),
            "bullish" | "bull" | "u" => Ok(PatternLabel::Bullish),
            "bearish" | "bear" | "b" => Ok(PatternLabel::Bearish),
            other => Err(format!("unknown pattern label '{other}'")),
        }
    }
}

/// Classify one candle.
///
/// A body smaller than both wicks reads as indecision (Doji); otherwise the
/// close decides the direction. A fully degenerate bar (zero body and zero
/// range) is also a Doji: open equals close, which is the definition of
/// indecision, and letting it fall through the strict `body < wick`
/// comparison would mislabel it Bearish.
pub fn classify(candle: &Candle) -> Result<PatternLabel, AppError> {
    candle.validate()?;

    let body = candle.body();
    if body == 0.0 && candle.range() == 0.0 {
        return Ok(PatternLabel::Doji);
    }

    if body < candle.upper_wick() && body < candle.lower_wick() {
        Ok(PatternLabel::Doji)
    } else if candle.is_bullish() {
        Ok(PatternLabel::Bullish)
    } else {
        Ok(PatternLabel::Bearish)
    }
}
