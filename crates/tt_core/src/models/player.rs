use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::error::{DashboardError, Result};

/// 선수 한 명의 커리어 통계 (로드 후 불변)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    /// 선수명 (로스터 내 유일)
    pub name: String,
    /// 로마자 표기 (검색 보조용, 표/집계에는 쓰이지 않음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latin_name: Option<String>,
    /// 국가
    pub country: String,
    /// 나이
    pub age: u32,
    /// 세계랭킹 최고 (1 이상)
    pub best_world_ranking: u32,
    /// 우승 횟수
    pub title_count: u32,
    /// 커리어 경기 수
    pub career_match_count: u32,
    /// 승률(%) 0-100
    pub win_rate_percent: f64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("player name is empty")]
    EmptyName,

    #[error("{name}: country is empty")]
    EmptyCountry { name: String },

    #[error("{name}: age must be positive")]
    ZeroAge { name: String },

    #[error("{name}: best world ranking must be at least 1")]
    ZeroRanking { name: String },

    #[error("{name}: win rate {value} is outside 0-100")]
    WinRateOutOfRange { name: String, value: f64 },
}

impl PlayerRecord {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        age: u32,
        best_world_ranking: u32,
        title_count: u32,
        career_match_count: u32,
        win_rate_percent: f64,
    ) -> Self {
        Self {
            name: name.into(),
            latin_name: None,
            country: country.into(),
            age,
            best_world_ranking,
            title_count,
            career_match_count,
            win_rate_percent,
        }
    }

    pub fn with_latin_name(mut self, latin_name: impl Into<String>) -> Self {
        self.latin_name = Some(latin_name.into());
        self
    }

    /// 필드별 제약 검사
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.country.trim().is_empty() {
            return Err(ValidationError::EmptyCountry {
                name: self.name.clone(),
            });
        }
        if self.age == 0 {
            return Err(ValidationError::ZeroAge {
                name: self.name.clone(),
            });
        }
        if self.best_world_ranking == 0 {
            return Err(ValidationError::ZeroRanking {
                name: self.name.clone(),
            });
        }
        if !self.win_rate_percent.is_finite() || !(0.0..=100.0).contains(&self.win_rate_percent) {
            return Err(ValidationError::WinRateOutOfRange {
                name: self.name.clone(),
                value: self.win_rate_percent,
            });
        }
        Ok(())
    }

    /// 대소문자 무시 부분 문자열 검색 (선수명 또는 로마자 표기)
    ///
    /// `query_lower`는 호출자가 미리 소문자로 바꿔 넘긴다.
    /// 선수명은 공백까지 그대로 비교하고, 로마자 표기는 띄어쓰기가 제각각이라
    /// 양쪽 공백을 지운 뒤 비교한다 (공백만 남는 검색어는 로마자 표기와 맞지 않음).
    pub fn name_contains_lowercase(&self, query_lower: &str) -> bool {
        if self.name.to_lowercase().contains(query_lower) {
            return true;
        }

        let compact_query = strip_whitespace(query_lower);
        if compact_query.is_empty() {
            return false;
        }
        self.latin_name
            .as_deref()
            .is_some_and(|latin| strip_whitespace(&latin.to_lowercase()).contains(compact_query.as_str()))
    }
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// 전체 선수 목록 (순서 유지, 불변)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    records: Vec<PlayerRecord>,
}

impl Roster {
    /// 검증 없이 생성
    pub fn new(records: Vec<PlayerRecord>) -> Self {
        Self { records }
    }

    /// 필드 제약과 이름 중복을 검사한 뒤 생성
    pub fn try_new(records: Vec<PlayerRecord>) -> Result<Self> {
        let roster = Self { records };
        roster.validate()?;
        Ok(roster)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.records.len());
        for record in &self.records {
            record.validate()?;
            if !seen.insert(record.name.as_str()) {
                return Err(DashboardError::DuplicateName(record.name.clone()));
            }
        }
        Ok(())
    }

    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlayerRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 국가 목록 (첫 등장 순서, 중복 제거)
    pub fn countries(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.country.as_str()))
            .map(|r| r.country.clone())
            .collect()
    }

    pub fn find(&self, name: &str) -> Option<&PlayerRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a PlayerRecord;
    type IntoIter = std::slice::Iter<'a, PlayerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
