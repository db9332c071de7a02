use std::path::PathBuf;
use thiserror::Error;

/// Ошибки загрузки датасета. Все они фатальны для дашборда.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Dataset file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required column is missing: {0}")]
    MissingColumn(String),

    #[error("Invalid {column} value {value:?} in row {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },
}
