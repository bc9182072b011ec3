//! 표/요약 지표 텍스트 렌더링
//!
//! 한글은 터미널에서 두 칸을 차지하므로 정렬은 모두 표시 폭 기준이다.

use std::fmt::Write as _;
use tt_core::api::EMPTY_RESULT_MESSAGE;
use tt_core::{PlayerRecord, ResultView};
use unicode_width::UnicodeWidthStr;

pub const PAGE_TITLE: &str = "🏓 탁구 선수의 직업 경력 통계 분석";
pub const PAGE_DESCRIPTION: &str =
    "프로 탁구 선수들의 경기 수, 승률, 우승 기록 등을 시각화하여 한눈에 분석할 수 있는 대시보드입니다.";

const TABLE_HEADERS: [&str; 7] = [
    "선수명",
    "국가",
    "나이",
    "세계랭킹 최고",
    "우승 횟수",
    "커리어 경기 수",
    "승률(%)",
];

/// 표시 폭 기준 오른쪽 채우기
pub fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// 표시 폭 기준 왼쪽 채우기 (숫자 컬럼)
pub fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{text}", " ".repeat(fill))
}

pub fn format_win_rate(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn table_cells(record: &PlayerRecord) -> [String; 7] {
    [
        record.name.clone(),
        record.country.clone(),
        record.age.to_string(),
        record.best_world_ranking.to_string(),
        record.title_count.to_string(),
        record.career_match_count.to_string(),
        format_win_rate(record.win_rate_percent),
    ]
}

/// 선수 기본 데이터 표
pub fn render_table(view: &ResultView) -> String {
    let rows: Vec<[String; 7]> = view.rows.iter().map(table_cells).collect();

    let mut widths = TABLE_HEADERS.map(UnicodeWidthStr::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = TABLE_HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad_right(h, w))
        .collect();
    let _ = writeln!(out, "{}", header.join(" │ "));

    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("─┼─"));

    for row in &rows {
        // 이름/국가는 왼쪽 정렬, 숫자는 오른쪽 정렬
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, w))| if i < 2 { pad_right(cell, w) } else { pad_left(cell, w) })
            .collect();
        let _ = writeln!(out, "{}", cells.join(" │ "));
    }

    if rows.is_empty() {
        let _ = writeln!(out, "{EMPTY_RESULT_MESSAGE}");
    }
    out
}

/// 요약 지표 (선수 수, 평균 승률, 총 우승 횟수)
pub fn render_summary(view: &ResultView) -> String {
    let average = view
        .average_win_rate
        .map(|avg| format!("{avg:.1}%"))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "선수 수: {}  |  평균 승률: {}  |  총 우승 횟수: {}\n",
        view.count, average, view.total_titles
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn korea_view() -> ResultView {
        ResultView::from_rows(vec![
            PlayerRecord::new("장우진", "한국", 28, 5, 8, 410, 76.0),
            PlayerRecord::new("이상수", "한국", 33, 6, 5, 500, 74.0),
        ])
    }

    #[test]
    fn test_padding_uses_display_width() {
        assert_eq!(pad_right("마롱", 6), "마롱  ");
        assert_eq!(pad_left("42", 4), "  42");
        assert_eq!(pad_right("티모 볼", 3), "티모 볼");
    }

    #[test]
    fn test_format_win_rate() {
        assert_eq!(format_win_rate(76.0), "76");
        assert_eq!(format_win_rate(75.5), "75.5");
    }

    #[test]
    fn test_table_lines_have_equal_width() {
        let table = render_table(&korea_view());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("선수명"));
        assert!(lines[2].starts_with("장우진"));
        assert!(lines[3].starts_with("이상수"));
        assert_eq!(lines[2].width(), lines[3].width());
        assert_eq!(lines[1].width(), lines[2].width());
    }

    #[test]
    fn test_empty_table_shows_message() {
        let table = render_table(&ResultView::default());
        assert!(table.contains(EMPTY_RESULT_MESSAGE));
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            render_summary(&korea_view()),
            "선수 수: 2  |  평균 승률: 75.0%  |  총 우승 횟수: 13\n"
        );
        assert!(render_summary(&ResultView::default()).contains("평균 승률: -"));
    }
}
