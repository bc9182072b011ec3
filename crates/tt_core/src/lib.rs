//! # tt_core - Table Tennis Career Stats
//!
//! 탁구 선수 경력 통계 대시보드의 핵심 로직입니다.
//!
//! ## Features
//! - Embedded, validated player roster (loaded once per process)
//! - Pure filter → sort → aggregate pipeline (`compute_view`)
//! - Closed chart-type enum with exhaustive renderer dispatch
//! - JSON API for UI hosts

pub mod api;
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod pipeline;

// Re-export main API functions
pub use api::{compute_view_json, dashboard_options_json, ViewRequest, ViewResponse};
pub use chart::{
    chart_data, render_chart, ChartData, ChartKind, ChartPoint, ChartRenderer, ChartType, PieSlice,
};
pub use config::{DashboardConfig, DASHBOARD_CONFIG_PATH_ENV};
pub use data::get_roster;
pub use error::{DashboardError, Result};
pub use models::{FilterSortOptions, PlayerRecord, ResultView, Roster, SortKey};
pub use pipeline::{compute_view, StatsPipeline};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
