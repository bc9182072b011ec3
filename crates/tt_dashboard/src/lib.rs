//! Terminal Dashboard Library
//!
//! 필터 결과 → 요약 지표 + 선수 표 + 선택된 그래프 (텍스트)
//! 빈 결과는 그래프 대신 안내 문구를 출력한다.

pub mod render;
pub mod text_chart;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tt_core::api::{ViewResponse, EMPTY_RESULT_MESSAGE};
use tt_core::{render_chart, ChartType, DashboardConfig, ResultView};

pub use render::{render_summary, render_table, PAGE_DESCRIPTION, PAGE_TITLE};
pub use text_chart::TextRenderer;

/// 한 화면 분량의 대시보드 출력
pub fn render_dashboard(view: &ResultView, config: &DashboardConfig) -> String {
    render_dashboard_with(&mut TextRenderer::default(), view, config)
}

pub fn render_dashboard_with(
    renderer: &mut TextRenderer,
    view: &ResultView,
    config: &DashboardConfig,
) -> String {
    let mut sections = vec![format!("{PAGE_TITLE}\n{PAGE_DESCRIPTION}\n")];

    if config.show_summary {
        sections.push(format!("📊 요약\n{}", render_summary(view)));
    }

    if config.show_table {
        sections.push(format!("📋 선수 기본 데이터\n{}", render_table(view)));
    }

    sections.push(render_chart_section(renderer, config.chart_type, view));
    sections.join("\n")
}

fn render_chart_section(renderer: &mut TextRenderer, chart_type: ChartType, view: &ResultView) -> String {
    match render_chart(renderer, chart_type, view) {
        Some(chart) => chart,
        None => format!("ℹ️ {EMPTY_RESULT_MESSAGE}\n"),
    }
}

/// 응답 JSON 파일 저장
pub fn save_view_json(path: &Path, response: &ViewResponse) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(response).context("Failed to serialize view")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    tracing::info!(path = %path.display(), "view saved");
    Ok(())
}

/// 저장된 응답 JSON 읽기
pub fn load_view_json(path: &Path) -> Result<ViewResponse> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read view file: {}", path.display()))?;
    serde_json::from_str(&json).context("Failed to parse view JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tt_core::{compute_view, get_roster, FilterSortOptions, SortKey};

    fn korea_view() -> ResultView {
        let options = FilterSortOptions::default()
            .with_countries(["한국"])
            .with_sort(SortKey::WinRatePercent, false);
        compute_view(get_roster(), &options)
    }

    #[test]
    fn test_full_dashboard_sections() {
        let out = render_dashboard(&korea_view(), &DashboardConfig::default());
        assert!(out.starts_with(PAGE_TITLE));
        assert!(out.contains("평균 승률: 75.0%"));
        assert!(out.contains("📋 선수 기본 데이터"));
        assert!(out.contains("선수별 승률 비교"));

        let table_pos = out.find("📋").unwrap();
        let chart_pos = out.find("📈").unwrap();
        assert!(table_pos < chart_pos);
    }

    #[test]
    fn test_hidden_sections() {
        let config = DashboardConfig {
            show_table: false,
            show_summary: false,
            chart_type: ChartType::CountryDistribution,
            ..Default::default()
        };
        let out = render_dashboard(&korea_view(), &config);
        assert!(!out.contains("📋"));
        assert!(!out.contains("📊"));
        assert!(out.contains("국가별 선수 분포"));
    }

    #[test]
    fn test_empty_state_replaces_chart() {
        let options = FilterSortOptions::default().with_countries(["러시아"]);
        let view = compute_view(get_roster(), &options);

        let out = render_dashboard(&view, &DashboardConfig::default());
        assert!(out.contains("평균 승률: -"));
        assert!(out.contains(EMPTY_RESULT_MESSAGE));
        assert!(!out.contains("📈"));
    }

    #[test]
    fn test_save_and_load_view_json() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("out").join("view.json");

        let response = ViewResponse::build(korea_view(), Some(ChartType::WinRateComparison));
        save_view_json(&path, &response)?;

        let loaded = load_view_json(&path)?;
        assert_eq!(loaded, response);
        assert_eq!(loaded.view.count, 2);
        Ok(())
    }
}
