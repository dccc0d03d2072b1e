use thiserror::Error;

use crate::unit::Unit;

#[derive(Error, Debug)]
pub enum PlateError {
    #[error("No {0}{1} plates exist.")]
    UnknownDenomination(f64, Unit),
    #[error("No settings directory is available on this platform.")]
    NoSettingsDir,
    #[error("Settings storage failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings could not be encoded: {0}")]
    Json(#[from] serde_json::Error),
}
