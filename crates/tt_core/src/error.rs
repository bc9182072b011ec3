use thiserror::Error;

use crate::models::ValidationError;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown chart type: {0}")]
    UnknownChartType(String),

    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    #[error("Invalid player record: {0}")]
    InvalidRecord(#[from] ValidationError),

    #[error("Duplicate player name: {0}")]
    DuplicateName(String),

    #[error("Unsupported schema version: {found} (expected {expected})")]
    UnsupportedSchemaVersion { found: u8, expected: u8 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl DashboardError {
    /// 사용자 입력(위젯 값)을 고치면 해결되는 오류인지 여부
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DashboardError::UnknownSortKey(_)
                | DashboardError::UnknownChartType(_)
                | DashboardError::UnknownCountry(_)
                | DashboardError::UnsupportedSchemaVersion { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
