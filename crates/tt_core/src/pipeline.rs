//! 필터 → 정렬 → 집계 파이프라인
//!
//! 로스터와 옵션만으로 결과가 결정되는 순수 함수입니다.
//! 같은 입력이면 항상 같은 `ResultView`를 돌려주며 로스터는 변경하지 않습니다.

use std::cmp::Ordering;

use tracing::debug;

use crate::data::get_roster;
use crate::models::{FilterSortOptions, PlayerRecord, ResultView, Roster, SortKey};

/// 로스터 + 옵션 → 결과 뷰
///
/// 1. 국가 필터 (선택된 국가가 없으면 결과도 없음)
/// 2. 선수명 필터 (대소문자 무시 부분 문자열)
/// 3. 정렬 (안정 정렬, 동점은 로스터 순서 유지)
/// 4. 집계 (행 수, 평균 승률, 총 우승 횟수)
pub fn compute_view(roster: &Roster, options: &FilterSortOptions) -> ResultView {
    let query_lower = options.effective_query().map(str::to_lowercase);

    let mut rows: Vec<PlayerRecord> = roster
        .iter()
        .filter(|r| options.countries.contains(&r.country))
        .filter(|r| {
            query_lower
                .as_deref()
                .map_or(true, |q| r.name_contains_lowercase(q))
        })
        .cloned()
        .collect();

    sort_rows(&mut rows, options.sort_key, options.sort_ascending);

    let view = ResultView::from_rows(rows);
    debug!(
        roster = roster.len(),
        countries = options.countries.len(),
        query = ?options.effective_query(),
        sort_key = %options.sort_key,
        ascending = options.sort_ascending,
        rows = view.count,
        "view computed"
    );
    view
}

/// 내림차순도 비교 함수를 뒤집어 처리하므로 동점 행은 어느 방향이든 원래 순서를 유지한다.
fn sort_rows(rows: &mut [PlayerRecord], key: SortKey, ascending: bool) {
    let compare = |a: &PlayerRecord, b: &PlayerRecord| -> Ordering {
        key.value_of(a).total_cmp(&key.value_of(b))
    };

    if ascending {
        rows.sort_by(compare);
    } else {
        rows.sort_by(|a, b| compare(b, a));
    }
}

/// 로스터를 빌려 쓰는 파이프라인 핸들
#[derive(Debug, Clone, Copy)]
pub struct StatsPipeline<'a> {
    roster: &'a Roster,
}

impl<'a> StatsPipeline<'a> {
    pub fn new(roster: &'a Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &'a Roster {
        self.roster
    }

    /// 초기 위젯 상태에 해당하는 옵션
    pub fn default_options(&self) -> FilterSortOptions {
        FilterSortOptions::all_countries(self.roster)
    }

    pub fn compute(&self, options: &FilterSortOptions) -> ResultView {
        compute_view(self.roster, options)
    }
}

impl StatsPipeline<'static> {
    /// 임베딩된 로스터를 쓰는 파이프라인
    pub fn embedded() -> Self {
        Self::new(get_roster())
    }
}
