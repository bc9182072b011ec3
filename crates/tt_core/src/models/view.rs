use serde::{Deserialize, Serialize};

use super::player::PlayerRecord;

/// 필터/정렬/집계가 끝난 화면용 데이터
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub rows: Vec<PlayerRecord>,
    pub count: usize,
    /// 행이 없으면 `None` (0으로 나누지 않는다)
    pub average_win_rate: Option<f64>,
    pub total_titles: u64,
}

impl ResultView {
    /// 정렬이 끝난 행으로부터 집계값을 계산해 만든다.
    pub fn from_rows(rows: Vec<PlayerRecord>) -> Self {
        let count = rows.len();
        let total_titles: u64 = rows.iter().map(|r| u64::from(r.title_count)).sum();
        let average_win_rate = if count == 0 {
            None
        } else {
            Some(rows.iter().map(|r| r.win_rate_percent).sum::<f64>() / count as f64)
        };

        Self {
            rows,
            count,
            average_win_rate,
            total_titles,
        }
    }

    /// 빈 결과 (오류가 아닌 정상 종료 상태)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.name.as_str()).collect()
    }
}
