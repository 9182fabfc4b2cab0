use crate::error::AppError;

/// One OHLC price bar. Synthetic fixtures are allowed to violate the usual
/// high/low envelope, so nothing here asserts `high >= max(open, close)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
        }
    }

    /// Absolute distance between open and close.
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Distance from the top of the body to the high. Negative when the
    /// fixture's high sits inside the body.
    pub fn upper_wick(&self) -> f64 {
        self.high - self.open.max(self.close)
    }

    /// Distance from the low to the bottom of the body.
    pub fn lower_wick(&self) -> f64 {
        self.open.min(self.close) - self.low
    }

    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Reject candles with NaN or infinite fields, naming the first bad one.
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if !value.is_finite() {
                return Err(AppError::InvalidCandle { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_metrics() {
        let candle = Candle::new(100.0, 106.0, 97.0, 104.0);
        assert!((candle.body() - 4.0).abs() < f64::EPSILON);
        assert!((candle.upper_wick() - 2.0).abs() < f64::EPSILON);
        assert!((candle.lower_wick() - 3.0).abs() < f64::EPSILON);
        assert!((candle.range() - 9.0).abs() < f64::EPSILON);
        assert!(candle.is_bullish());
    }

    #[test]
    fn bearish_body_is_positive() {
        let candle = Candle::new(104.0, 106.0, 97.0, 100.0);
        assert!((candle.body() - 4.0).abs() < f64::EPSILON);
        assert!(!candle.is_bullish());
    }

    #[test]
    fn malformed_envelope_yields_negative_wick() {
        // high below the body top, as some hand-authored fixtures do
        let candle = Candle::new(100.0, 99.0, 95.0, 102.0);
        assert!(candle.upper_wick() < 0.0);
    }

    #[test]
    fn validate_names_the_nan_field() {
        let candle = Candle::new(100.0, f64::NAN, 95.0, 102.0);
        let err = candle.validate().unwrap_err();
        match err {
            crate::error::AppError::InvalidCandle { field, .. } => assert_eq!(field, "high"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
