//! 그래프 종류와 렌더러 입력 데이터
//!
//! 네 가지 그래프 종류를 닫힌 enum으로 두고, 렌더러 디스패치는
//! `render_chart`의 전수 `match` 한 곳에서만 이루어진다.
//! 그래프를 그리는 일 자체는 `ChartRenderer` 구현체(표시 계층)의 몫이다.

mod series;

pub use series::{chart_data, ChartData, ChartPoint, PieSlice};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;
use crate::models::ResultView;

/// 그래프 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    #[default]
    WinRateComparison,
    MatchCountComparison,
    TitleCountComparison,
    CountryDistribution,
}

/// 그래프 모양
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

/// 막대 색을 나누는 기준
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorBy {
    Country,
    Player,
    None,
}

impl ChartType {
    pub const ALL: [ChartType; 4] = [
        ChartType::WinRateComparison,
        ChartType::MatchCountComparison,
        ChartType::TitleCountComparison,
        ChartType::CountryDistribution,
    ];

    /// 라디오 버튼 라벨
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::WinRateComparison => "승률 비교",
            ChartType::MatchCountComparison => "경기 수 비교",
            ChartType::TitleCountComparison => "우승 횟수 비교",
            ChartType::CountryDistribution => "국가 분포",
        }
    }

    /// 그래프 제목
    pub fn title(&self) -> &'static str {
        match self {
            ChartType::WinRateComparison => "선수별 승률 비교",
            ChartType::MatchCountComparison => "선수별 커리어 경기 수",
            ChartType::TitleCountComparison => "선수 우승 횟수 비교",
            ChartType::CountryDistribution => "국가별 선수 분포",
        }
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            ChartType::WinRateComparison | ChartType::TitleCountComparison => ChartKind::Bar,
            ChartType::MatchCountComparison => ChartKind::Line,
            ChartType::CountryDistribution => ChartKind::Pie,
        }
    }

    pub fn color_by(&self) -> ColorBy {
        match self {
            ChartType::WinRateComparison => ColorBy::Country,
            ChartType::TitleCountComparison => ColorBy::Player,
            ChartType::MatchCountComparison | ChartType::CountryDistribution => ColorBy::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::WinRateComparison => "winRateComparison",
            ChartType::MatchCountComparison => "matchCountComparison",
            ChartType::TitleCountComparison => "titleCountComparison",
            ChartType::CountryDistribution => "countryDistribution",
        }
    }

    fn snake_case(&self) -> &'static str {
        match self {
            ChartType::WinRateComparison => "win_rate_comparison",
            ChartType::MatchCountComparison => "match_count_comparison",
            ChartType::TitleCountComparison => "title_count_comparison",
            ChartType::CountryDistribution => "country_distribution",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ChartType::ALL
            .into_iter()
            .find(|t| t.as_str() == s || t.snake_case() == s || t.label() == s)
            .ok_or_else(|| DashboardError::UnknownChartType(s.to_string()))
    }
}

/// 그래프 종류별 렌더러
///
/// 새 그래프 종류를 추가하면 `render_chart`의 `match`가 컴파일되지 않으므로
/// 렌더러 메서드도 함께 추가해야 한다.
pub trait ChartRenderer {
    type Output;

    fn win_rate_bar(&mut self, title: &str, points: &[ChartPoint]) -> Self::Output;
    fn match_count_line(&mut self, title: &str, points: &[ChartPoint]) -> Self::Output;
    fn title_count_bar(&mut self, title: &str, points: &[ChartPoint]) -> Self::Output;
    fn country_pie(&mut self, title: &str, slices: &[PieSlice]) -> Self::Output;
}

/// 선택된 그래프 종류로 렌더러를 호출한다.
///
/// 빈 결과면 렌더러를 호출하지 않고 `None`을 돌려준다.
pub fn render_chart<R: ChartRenderer>(
    renderer: &mut R,
    chart_type: ChartType,
    view: &ResultView,
) -> Option<R::Output> {
    let data = chart_data(chart_type, view)?;
    let title = chart_type.title();

    let output = match chart_type {
        ChartType::WinRateComparison => renderer.win_rate_bar(title, data.points()),
        ChartType::MatchCountComparison => renderer.match_count_line(title, data.points()),
        ChartType::TitleCountComparison => renderer.title_count_bar(title, data.points()),
        ChartType::CountryDistribution => renderer.country_pie(title, data.slices()),
    };
    Some(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::get_roster;
    use crate::models::FilterSortOptions;
    use crate::pipeline::compute_view;

    /// 호출된 렌더러 메서드 이름과 데이터 개수를 기록한다.
    struct RecordingRenderer;

    impl ChartRenderer for RecordingRenderer {
        type Output = (&'static str, usize);

        fn win_rate_bar(&mut self, _title: &str, points: &[ChartPoint]) -> Self::Output {
            ("win_rate_bar", points.len())
        }
        fn match_count_line(&mut self, _title: &str, points: &[ChartPoint]) -> Self::Output {
            ("match_count_line", points.len())
        }
        fn title_count_bar(&mut self, _title: &str, points: &[ChartPoint]) -> Self::Output {
            ("title_count_bar", points.len())
        }
        fn country_pie(&mut self, _title: &str, slices: &[PieSlice]) -> Self::Output {
            ("country_pie", slices.len())
        }
    }

    #[test]
    fn test_dispatch_each_chart_type() {
        let roster = get_roster();
        let view = compute_view(roster, &FilterSortOptions::all_countries(roster));
        let mut renderer = RecordingRenderer;

        let calls: Vec<_> = ChartType::ALL
            .into_iter()
            .map(|t| render_chart(&mut renderer, t, &view).unwrap())
            .collect();

        assert_eq!(
            calls,
            vec![
                ("win_rate_bar", 6),
                ("match_count_line", 6),
                ("title_count_bar", 6),
                ("country_pie", 3),
            ]
        );
    }

    #[test]
    fn test_empty_view_is_not_rendered() {
        let mut renderer = RecordingRenderer;
        for chart_type in ChartType::ALL {
            assert!(render_chart(&mut renderer, chart_type, &ResultView::default()).is_none());
        }
    }

    #[test]
    fn test_chart_type_from_str() {
        assert_eq!("국가 분포".parse::<ChartType>().unwrap(), ChartType::CountryDistribution);
        assert_eq!(
            "match_count_comparison".parse::<ChartType>().unwrap(),
            ChartType::MatchCountComparison
        );
        assert_eq!(
            "titleCountComparison".parse::<ChartType>().unwrap(),
            ChartType::TitleCountComparison
        );
        assert!(matches!(
            "radar".parse::<ChartType>(),
            Err(DashboardError::UnknownChartType(_))
        ));
    }

    #[test]
    fn test_chart_kinds() {
        assert_eq!(ChartType::WinRateComparison.kind(), ChartKind::Bar);
        assert_eq!(ChartType::MatchCountComparison.kind(), ChartKind::Line);
        assert_eq!(ChartType::TitleCountComparison.kind(), ChartKind::Bar);
        assert_eq!(ChartType::CountryDistribution.kind(), ChartKind::Pie);
        assert_eq!(ChartType::WinRateComparison.color_by(), ColorBy::Country);
        assert_eq!(ChartType::TitleCountComparison.color_by(), ColorBy::Player);
    }
}
