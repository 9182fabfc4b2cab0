use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::AppError;
use crate::model::trade::TradeRecord;

pub const COL_TICKER: &str = "Ticker";
pub const COL_DATE: &str = "Date";
pub const COL_ENTRY: &str = "Entry Price";
pub const COL_EXIT: &str = "Exit Price";
pub const COL_PNL: &str = "PnL";
pub const COL_VOLUME: &str = "Volume";
pub const COL_DURATION: &str = "Trade Duration";
pub const COL_STRATEGY: &str = "Strategy";

const REQUIRED_COLUMNS: [&str; 6] = [
    COL_TICKER, COL_DATE, COL_ENTRY, COL_EXIT, COL_PNL, COL_VOLUME,
];

/// Column indices resolved from the header row. Matching is
/// case-insensitive and order-independent; `Trade Duration` and `Strategy`
/// are optional.
#[derive(Debug, Clone)]
struct ColumnMap {
    ticker: usize,
    date: usize,
    entry: usize,
    exit: usize,
    pnl: usize,
    volume: usize,
    duration: Option<usize>,
    strategy: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, AppError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        for column in REQUIRED_COLUMNS {
            if find(column).is_none() {
                return Err(AppError::MissingColumn { column });
            }
        }

        Ok(Self {
            ticker: find(COL_TICKER).unwrap_or_default(),
            date: find(COL_DATE).unwrap_or_default(),
            entry: find(COL_ENTRY).unwrap_or_default(),
            exit: find(COL_EXIT).unwrap_or_default(),
            pnl: find(COL_PNL).unwrap_or_default(),
            volume: find(COL_VOLUME).unwrap_or_default(),
            duration: find(COL_DURATION),
            strategy: find(COL_STRATEGY),
        })
    }
}

fn cell<'r>(record: &'r csv::StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("").trim()
}

fn parse_number(
    record: &csv::StringRecord,
    index: usize,
    row: usize,
    column: &'static str,
) -> Result<f64, AppError> {
    let raw = cell(record, index);
    let value: f64 = raw.parse().map_err(|_| AppError::InvalidRow {
        row,
        column,
        reason: format!("'{raw}' is not a number"),
    })?;
    if !value.is_finite() {
        return Err(AppError::InvalidRow {
            row,
            column,
            reason: format!("'{raw}' is not finite"),
        });
    }
    Ok(value)
}

fn parse_date(
    record: &csv::StringRecord,
    index: usize,
    row: usize,
) -> Result<NaiveDate, AppError> {
    let raw = cell(record, index);
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| AppError::InvalidRow {
        row,
        column: COL_DATE,
        reason: format!("'{raw}' is not a YYYY-MM-DD date"),
    })
}

/// Read trade records from CSV, validating the header row before touching
/// any data. Rows are numbered from 1 in errors (the header is row 0).
pub fn read_trades<R: Read>(reader: R) -> Result<Vec<TradeRecord>, AppError> {
    let mut csv_reader = csv::ReaderBuilder::new().delimiter(b',').from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut trades = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        let record = result?;
        let row = i + 1;

        let duration_minutes = match columns.duration {
            Some(index) if !cell(&record, index).is_empty() => {
                Some(parse_number(&record, index, row, COL_DURATION)?)
            }
            _ => None,
        };
        let strategy = columns
            .strategy
            .map(|index| cell(&record, index))
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        trades.push(TradeRecord {
            ticker: cell(&record, columns.ticker).to_string(),
            date: parse_date(&record, columns.date, row)?,
            entry_price: parse_number(&record, columns.entry, row, COL_ENTRY)?,
            exit_price: parse_number(&record, columns.exit, row, COL_EXIT)?,
            pnl: parse_number(&record, columns.pnl, row, COL_PNL)?,
            volume: parse_number(&record, columns.volume, row, COL_VOLUME)?,
            duration_minutes,
            strategy,
        });
    }

    tracing::debug!(count = trades.len(), "Parsed trade journal");
    Ok(trades)
}

pub fn load_trades<P: AsRef<Path>>(path: P) -> Result<Vec<TradeRecord>, AppError> {
    let file = File::open(path.as_ref())?;
    read_trades(file)
}

/// Whole-journal metrics. `win_rate` and `avg_duration_minutes` are `None`
/// when the inputs that define them are absent, never a division by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JournalSummary {
    pub trade_count: usize,
    pub total_pnl: f64,
    pub win_rate: Option<f64>,
    pub avg_duration_minutes: Option<f64>,
}

impl fmt::Display for JournalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trades: {}, Total PnL: {:.2}",
            self.trade_count, self.total_pnl
        )?;
        match self.win_rate {
            Some(rate) => write!(f, ", Win Rate: {:.2}%", rate * 100.0)?,
            None => write!(f, ", Win Rate: n/a")?,
        }
        if let Some(avg) = self.avg_duration_minutes {
            write!(f, ", Avg Hold (min): {avg:.1}")?;
        }
        Ok(())
    }
}

pub fn summarize(trades: &[TradeRecord]) -> JournalSummary {
    let trade_count = trades.len();
    let total_pnl: f64 = trades.iter().map(|t| t.pnl).sum();

    let win_rate = if trade_count == 0 {
        None
    } else {
        let wins = trades.iter().filter(|t| t.is_win()).count();
        Some(wins as f64 / trade_count as f64)
    };

    let durations: Vec<f64> = trades.iter().filter_map(|t| t.duration_minutes).collect();
    let avg_duration_minutes = if durations.is_empty() {
        None
    } else {
        Some(durations.iter().sum::<f64>() / durations.len() as f64)
    };

    JournalSummary {
        trade_count,
        total_pnl,
        win_rate,
        avg_duration_minutes,
    }
}

/// Per-strategy breakdown for journals that tag trades with a label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategySummary {
    pub strategy: String,
    pub trade_count: usize,
    pub total_pnl: f64,
    pub mean_pnl: f64,
}

/// Group tagged trades by strategy label, sorted by label for stable output.
/// Untagged trades are left out of the breakdown.
pub fn summarize_by_strategy(trades: &[TradeRecord]) -> Vec<StrategySummary> {
    let mut groups: HashMap<&str, (usize, f64)> = HashMap::new();
    for trade in trades {
        let Some(label) = trade.strategy.as_deref() else {
            continue;
        };
        let entry = groups.entry(label).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += trade.pnl;
    }

    let mut summaries: Vec<StrategySummary> = groups
        .into_iter()
        .map(|(label, (count, total))| StrategySummary {
            strategy: label.to_string(),
            trade_count: count,
            total_pnl: total,
            mean_pnl: total / count as f64,
        })
        .collect();
    summaries.sort_by(|a, b| a.strategy.cmp(&b.strategy));
    summaries
}
