use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::player::{PlayerRecord, Roster};
use crate::error::DashboardError;

/// 정렬 기준
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    WinRatePercent,
    TitleCount,
    CareerMatchCount,
    Age,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::WinRatePercent,
        SortKey::TitleCount,
        SortKey::CareerMatchCount,
        SortKey::Age,
    ];

    /// 정렬에 쓰이는 수치 값
    pub fn value_of(&self, record: &PlayerRecord) -> f64 {
        match self {
            SortKey::WinRatePercent => record.win_rate_percent,
            SortKey::TitleCount => f64::from(record.title_count),
            SortKey::CareerMatchCount => f64::from(record.career_match_count),
            SortKey::Age => f64::from(record.age),
        }
    }

    /// 표시용 컬럼 이름
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::WinRatePercent => "승률(%)",
            SortKey::TitleCount => "우승 횟수",
            SortKey::CareerMatchCount => "커리어 경기 수",
            SortKey::Age => "나이",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::WinRatePercent => "winRatePercent",
            SortKey::TitleCount => "titleCount",
            SortKey::CareerMatchCount => "careerMatchCount",
            SortKey::Age => "age",
        }
    }

    fn snake_case(&self) -> &'static str {
        match self {
            SortKey::WinRatePercent => "win_rate_percent",
            SortKey::TitleCount => "title_count",
            SortKey::CareerMatchCount => "career_match_count",
            SortKey::Age => "age",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DashboardError;

    /// camelCase / snake_case 식별자 또는 한글 컬럼 이름을 받는다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s || key.snake_case() == s || key.label() == s)
            .ok_or_else(|| DashboardError::UnknownSortKey(s.to_string()))
    }
}

/// 필터/정렬 옵션 (사용자 조작마다 새로 만든다)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSortOptions {
    /// 허용 국가 (비어 있으면 아무 행도 통과하지 않음)
    pub countries: BTreeSet<String>,
    /// 선수명 검색어 (대소문자 무시)
    #[serde(default)]
    pub name_query: Option<String>,
    #[serde(default)]
    pub sort_key: SortKey,
    #[serde(default)]
    pub sort_ascending: bool,
}

impl FilterSortOptions {
    /// 대시보드 초기 상태: 모든 국가 선택, 검색어 없음, 승률 내림차순
    pub fn all_countries(roster: &Roster) -> Self {
        Self {
            countries: roster.countries().into_iter().collect(),
            name_query: None,
            sort_key: SortKey::default(),
            sort_ascending: false,
        }
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_name_query(mut self, query: impl Into<String>) -> Self {
        self.name_query = Some(query.into());
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey, ascending: bool) -> Self {
        self.sort_key = sort_key;
        self.sort_ascending = ascending;
        self
    }

    /// 실제로 필터링에 쓰일 검색어 (빈 문자열만 없는 것으로 보고, 공백은 그대로 둔다)
    pub fn effective_query(&self) -> Option<&str> {
        self.name_query.as_deref().filter(|q| !q.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_from_str_variants() {
        assert_eq!("winRatePercent".parse::<SortKey>().unwrap(), SortKey::WinRatePercent);
        assert_eq!("career_match_count".parse::<SortKey>().unwrap(), SortKey::CareerMatchCount);
        assert_eq!("우승 횟수".parse::<SortKey>().unwrap(), SortKey::TitleCount);
        assert_eq!(" age ".parse::<SortKey>().unwrap(), SortKey::Age);

        let err = "height".parse::<SortKey>().unwrap_err();
        assert!(matches!(err, DashboardError::UnknownSortKey(ref k) if k == "height"));
    }

    #[test]
    fn test_sort_key_values() {
        let record = PlayerRecord::new("장우진", "한국", 28, 5, 8, 410, 76.0);
        assert_eq!(SortKey::WinRatePercent.value_of(&record), 76.0);
        assert_eq!(SortKey::TitleCount.value_of(&record), 8.0);
        assert_eq!(SortKey::CareerMatchCount.value_of(&record), 410.0);
        assert_eq!(SortKey::Age.value_of(&record), 28.0);
    }

    #[test]
    fn test_sort_key_serde_matches_as_str() {
        for key in SortKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn test_all_countries_defaults() {
        let roster = Roster::new(vec![
            PlayerRecord::new("A", "중국", 20, 1, 0, 0, 50.0),
            PlayerRecord::new("B", "독일", 20, 1, 0, 0, 50.0),
            PlayerRecord::new("C", "중국", 20, 1, 0, 0, 50.0),
        ]);
        let options = FilterSortOptions::all_countries(&roster);
        assert_eq!(options.countries.len(), 2);
        assert_eq!(options.sort_key, SortKey::WinRatePercent);
        assert!(!options.sort_ascending);
        assert!(options.effective_query().is_none());
    }

    #[test]
    fn test_effective_query_keeps_whitespace() {
        let options = FilterSortOptions::default().with_name_query("");
        assert!(options.effective_query().is_none());

        let options = FilterSortOptions::default().with_name_query(" ");
        assert_eq!(options.effective_query(), Some(" "));

        let options = FilterSortOptions::default().with_name_query("롱 ");
        assert_eq!(options.effective_query(), Some("롱 "));
    }
}
