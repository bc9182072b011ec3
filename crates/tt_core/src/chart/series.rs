use serde::{Deserialize, Serialize};

use super::{ChartType, ColorBy};
use crate::models::{PlayerRecord, ResultView};

/// 막대/선 그래프의 한 점
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// x축 라벨 (선수명)
    pub label: String,
    pub value: f64,
    /// 색상 그룹 (국가 또는 선수명)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// 원형 그래프 조각
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    /// 전체 대비 비율 (0.0-1.0)
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "camelCase")]
pub enum ChartData {
    Series { points: Vec<ChartPoint> },
    Slices { slices: Vec<PieSlice> },
}

impl ChartData {
    pub fn points(&self) -> &[ChartPoint] {
        match self {
            ChartData::Series { points } => points,
            ChartData::Slices { .. } => &[],
        }
    }

    pub fn slices(&self) -> &[PieSlice] {
        match self {
            ChartData::Slices { slices } => slices,
            ChartData::Series { .. } => &[],
        }
    }
}

/// 결과 뷰에서 그래프 입력을 만든다. 빈 결과면 `None`.
pub fn chart_data(chart_type: ChartType, view: &ResultView) -> Option<ChartData> {
    if view.is_empty() {
        return None;
    }

    let data = match chart_type {
        ChartType::WinRateComparison => series(view, chart_type.color_by(), |r| r.win_rate_percent),
        ChartType::MatchCountComparison => {
            series(view, chart_type.color_by(), |r| f64::from(r.career_match_count))
        }
        ChartType::TitleCountComparison => {
            series(view, chart_type.color_by(), |r| f64::from(r.title_count))
        }
        ChartType::CountryDistribution => ChartData::Slices {
            slices: country_slices(view),
        },
    };
    Some(data)
}

fn series(view: &ResultView, color_by: ColorBy, value: impl Fn(&PlayerRecord) -> f64) -> ChartData {
    let points = view
        .rows
        .iter()
        .map(|r| ChartPoint {
            label: r.name.clone(),
            value: value(r),
            group: match color_by {
                ColorBy::Country => Some(r.country.clone()),
                ColorBy::Player => Some(r.name.clone()),
                ColorBy::None => None,
            },
        })
        .collect();
    ChartData::Series { points }
}

/// 국가별 선수 수 (결과 행에서 처음 나온 순서)
fn country_slices(view: &ResultView) -> Vec<PieSlice> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for row in &view.rows {
        match counts.iter_mut().find(|(country, _)| *country == row.country) {
            Some((_, count)) => *count += 1,
            None => counts.push((row.country.clone(), 1)),
        }
    }

    let total = view.rows.len() as f64;
    counts
        .into_iter()
        .map(|(label, count)| PieSlice {
            label,
            count,
            share: count as f64 / total,
        })
        .collect()
}
