use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("journal is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("journal row {row}, column '{column}': {reason}")]
    InvalidRow {
        row: usize,
        column: &'static str,
        reason: String,
    },

    #[error("quiz error: {0}")]
    Quiz(String),

    #[error("invalid candle: field '{field}' is {value}")]
    InvalidCandle { field: &'static str, value: f64 },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
