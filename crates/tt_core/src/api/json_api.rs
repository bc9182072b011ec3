//! JSON API for the dashboard host
//!
//! The UI host collects widget states, sends them as a `ViewRequest` JSON
//! string and renders the returned `ViewResponse`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::chart::{chart_data, ChartData, ChartKind, ChartType};
use crate::data::get_roster;
use crate::error::{DashboardError, Result};
use crate::models::{FilterSortOptions, ResultView, Roster, SortKey};
use crate::pipeline::compute_view;

/// JSON schema version accepted and produced by this API
pub const SCHEMA_VERSION: u8 = 1;

/// 빈 결과일 때 보여줄 안내 문구
pub const EMPTY_RESULT_MESSAGE: &str = "조건에 맞는 선수가 없습니다.";

fn default_sort_key() -> String {
    SortKey::default().as_str().to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRequest {
    pub schema_version: u8,
    /// `None` = all countries (initial widget state), `Some([])` = none selected
    #[serde(default)]
    pub countries: Option<Vec<String>>,
    #[serde(default)]
    pub name_query: Option<String>,
    #[serde(default = "default_sort_key")]
    pub sort_key: String,
    #[serde(default)]
    pub sort_ascending: bool,
    #[serde(default)]
    pub chart_type: Option<String>,
}

impl ViewRequest {
    /// Validate raw widget values into pipeline options.
    pub fn to_options(&self, roster: &Roster) -> Result<FilterSortOptions> {
        let sort_key: SortKey = self.sort_key.parse()?;
        let base = match &self.countries {
            Some(countries) => FilterSortOptions::default().with_countries(countries.iter().cloned()),
            None => FilterSortOptions::all_countries(roster),
        };
        Ok(FilterSortOptions {
            name_query: self.name_query.clone(),
            ..base.with_sort(sort_key, self.sort_ascending)
        })
    }

    pub fn chart_type(&self) -> Result<Option<ChartType>> {
        self.chart_type.as_deref().map(str::parse::<ChartType>).transpose()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub chart_type: ChartType,
    pub kind: ChartKind,
    pub title: String,
    pub data: ChartData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub schema_version: u8,
    pub view: ResultView,
    /// Omitted for empty results or when no chart was requested
    pub chart: Option<ChartPayload>,
    pub empty_message: Option<String>,
}

impl ViewResponse {
    pub fn build(view: ResultView, chart_type: Option<ChartType>) -> Self {
        let chart = chart_type.and_then(|chart_type| {
            chart_data(chart_type, &view).map(|data| ChartPayload {
                chart_type,
                kind: chart_type.kind(),
                title: chart_type.title().to_string(),
                data,
            })
        });
        let empty_message = view.is_empty().then(|| EMPTY_RESULT_MESSAGE.to_string());

        Self {
            schema_version: SCHEMA_VERSION,
            view,
            chart,
            empty_message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionEntry {
    pub id: String,
    pub label: String,
    /// 그래프 제목 (그래프 종류에만 있음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Sidebar widget option lists
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOptions {
    pub schema_version: u8,
    pub countries: Vec<String>,
    pub sort_keys: Vec<OptionEntry>,
    pub chart_types: Vec<OptionEntry>,
}

impl DashboardOptions {
    pub fn for_roster(roster: &Roster) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            countries: roster.countries(),
            sort_keys: SortKey::ALL
                .iter()
                .map(|k| OptionEntry {
                    id: k.as_str().to_string(),
                    label: k.label().to_string(),
                    title: None,
                })
                .collect(),
            chart_types: ChartType::ALL
                .iter()
                .map(|t| OptionEntry {
                    id: t.as_str().to_string(),
                    label: t.label().to_string(),
                    title: Some(t.title().to_string()),
                })
                .collect(),
        }
    }
}

/// Compute a view for the embedded roster from a JSON request
///
/// # Arguments
///
/// * `request_json` - `ViewRequest` serialized as JSON
///
/// # Returns
///
/// `ViewResponse` serialized as JSON
pub fn compute_view_json(request_json: &str) -> Result<String> {
    compute_view_json_for(get_roster(), request_json)
}

pub fn compute_view_json_for(roster: &Roster, request_json: &str) -> Result<String> {
    let request: ViewRequest = serde_json::from_str(request_json)?;

    if request.schema_version != SCHEMA_VERSION {
        warn!(found = request.schema_version, "rejected view request");
        return Err(DashboardError::UnsupportedSchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let options = request.to_options(roster).inspect_err(|e| {
        warn!(error = %e, "rejected view request");
    })?;
    let chart_type = request.chart_type()?;

    let response = ViewResponse::build(compute_view(roster, &options), chart_type);
    Ok(serde_json::to_string(&response)?)
}

/// Widget option lists for the embedded roster as JSON
pub fn dashboard_options_json() -> Result<String> {
    Ok(serde_json::to_string(&DashboardOptions::for_roster(get_roster()))?)
}
