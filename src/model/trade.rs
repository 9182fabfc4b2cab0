use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One closed trade from a journal CSV.
///
/// `duration_minutes` is optional because older journal exports predate the
/// `Trade Duration` column. `strategy` is only present when the journal tags
/// trades with a strategy label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub ticker: String,
    pub date: NaiveDate,
    pub entry_price: f64,
    pub exit_price: f64,
    pub pnl: f64,
    pub volume: f64,
    pub duration_minutes: Option<f64>,
    pub strategy: Option<String>,
}

impl TradeRecord {
    pub fn is_win(&self) -> bool {
        self.pnl > 0.0
    }
}
