//! 대시보드 설정 (사이드바 위젯 초기값)
//!
//! `TT_DASHBOARD_CONFIG_PATH`가 가리키는 JSON 프리셋을 읽는다.
//! 설정되지 않았거나 비어 있으면 기본값(모든 국가, 승률 내림차순, 표 표시)을 쓴다.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};
use tracing::{info, warn};

use crate::chart::ChartType;
use crate::error::{DashboardError, Result};
use crate::models::{FilterSortOptions, Roster, SortKey};

pub const DASHBOARD_CONFIG_PATH_ENV: &str = "TT_DASHBOARD_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DashboardConfig {
    /// `None`이면 로스터의 모든 국가
    pub countries: Option<Vec<String>>,
    pub name_query: Option<String>,
    pub sort_key: SortKey,
    pub sort_ascending: bool,
    pub chart_type: ChartType,
    pub show_table: bool,
    pub show_summary: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            countries: None,
            name_query: None,
            sort_key: SortKey::WinRatePercent,
            sort_ascending: false,
            chart_type: ChartType::WinRateComparison,
            show_table: true,
            show_summary: true,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "failed to read dashboard config");
        })?;
        Self::from_json(&content).map_err(|e| {
            DashboardError::Config(format!(
                "Failed to parse dashboard config '{}': {e}",
                path.display()
            ))
        })
    }

    /// 환경 변수가 가리키는 프리셋을 읽는다. 없으면 기본값.
    pub fn load_from_env() -> Result<Self> {
        let Ok(path) = env::var(DASHBOARD_CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        let config = Self::from_path(Path::new(path))?;
        info!(path, "dashboard config loaded from {DASHBOARD_CONFIG_PATH_ENV}");
        Ok(config)
    }

    /// 로스터에 없는 국가를 거부한다 (파이프라인에 넘기기 전 경계 검사).
    pub fn validate(&self, roster: &Roster) -> Result<()> {
        let Some(countries) = &self.countries else {
            return Ok(());
        };
        let known = roster.countries();
        match countries.iter().find(|c| !known.contains(c)) {
            Some(unknown) => Err(DashboardError::UnknownCountry(unknown.clone())),
            None => Ok(()),
        }
    }

    pub fn to_options(&self, roster: &Roster) -> FilterSortOptions {
        let options = match &self.countries {
            Some(countries) => FilterSortOptions::default().with_countries(countries.iter().cloned()),
            None => FilterSortOptions::all_countries(roster),
        };
        FilterSortOptions {
            name_query: self.name_query.clone(),
            ..options.with_sort(self.sort_key, self.sort_ascending)
        }
    }
}
