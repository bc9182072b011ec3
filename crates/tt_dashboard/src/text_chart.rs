//! 터미널용 그래프 렌더러

use std::fmt::Write as _;
use tt_core::{ChartPoint, ChartRenderer, PieSlice};
use unicode_width::UnicodeWidthStr;

use crate::render::{format_win_rate, pad_left, pad_right};

const DEFAULT_BAR_WIDTH: usize = 40;

/// 막대/선/원형 그래프를 문자로 그린다.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// 가장 큰 값이 차지하는 칸 수
    pub bar_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

impl TextRenderer {
    pub fn new(bar_width: usize) -> Self {
        Self {
            bar_width: bar_width.max(1),
        }
    }

    fn scaled(&self, value: f64, max: f64) -> usize {
        if max <= 0.0 {
            return 0;
        }
        ((value / max) * self.bar_width as f64).round() as usize
    }

    fn bars(&self, title: &str, points: &[ChartPoint], glyph: &str) -> String {
        let label_width = points.iter().map(|p| p.label.width()).max().unwrap_or(0);
        let max = points.iter().map(|p| p.value).fold(0.0, f64::max);

        let mut out = format!("{title}\n");
        for point in points {
            let bar = glyph.repeat(self.scaled(point.value, max));
            let group = point
                .group
                .as_deref()
                .filter(|g| *g != point.label)
                .map(|g| format!("  [{g}]"))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "{} │{} {}{}",
                pad_right(&point.label, label_width),
                bar,
                format_win_rate(point.value),
                group
            );
        }
        out
    }
}

impl ChartRenderer for TextRenderer {
    type Output = String;

    fn win_rate_bar(&mut self, title: &str, points: &[ChartPoint]) -> String {
        self.bars(&format!("📈 {title}"), points, "█")
    }

    fn match_count_line(&mut self, title: &str, points: &[ChartPoint]) -> String {
        let label_width = points.iter().map(|p| p.label.width()).max().unwrap_or(0);
        let max = points.iter().map(|p| p.value).fold(0.0, f64::max);

        let mut out = format!("🏆 {title}\n");
        for point in points {
            // 마커 위치까지 점선
            let offset = self.scaled(point.value, max);
            let _ = writeln!(
                out,
                "{} │{}● {}",
                pad_right(&point.label, label_width),
                "·".repeat(offset),
                point.value
            );
        }
        out
    }

    fn title_count_bar(&mut self, title: &str, points: &[ChartPoint]) -> String {
        self.bars(&format!("🥇 {title}"), points, "▇")
    }

    fn country_pie(&mut self, title: &str, slices: &[PieSlice]) -> String {
        let label_width = slices.iter().map(|s| s.label.width()).max().unwrap_or(0);

        let mut out = format!("🌍 {title}\n");
        for slice in slices {
            let percent = format!("{:.1}%", slice.share * 100.0);
            let _ = writeln!(
                out,
                "{} │{} {} ({}명)",
                pad_right(&slice.label, label_width),
                "■".repeat(self.scaled(slice.share, 1.0)),
                pad_left(&percent, 6),
                slice.count
            );
        }
        out
    }
}
