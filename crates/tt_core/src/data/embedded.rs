//! 임베딩된 선수 데이터
//!
//! `include_str!` 매크로를 사용하여 컴파일 시점에 JSON 데이터를 바이너리에 포함합니다.
//! 런타임에 파일 I/O 없이 즉시 사용 가능합니다.
//!
//! ## 임베딩된 파일
//! - roster.json (6명, ~1.5KB)

use std::sync::OnceLock;

use crate::models::{PlayerRecord, Roster};

// ============================================================================
// 임베딩된 JSON 데이터 (컴파일 시점에 바이너리에 포함)
// ============================================================================

/// 선수 로스터 JSON
pub const ROSTER_JSON: &str = include_str!("../../../../data/roster.json");

// ============================================================================
// 캐싱된 데이터 (한 번만 파싱)
// ============================================================================

static ROSTER: OnceLock<Roster> = OnceLock::new();

// ============================================================================
// 공개 API
// ============================================================================

/// 로스터 반환
///
/// 첫 호출 시 JSON 파싱 및 검증, 이후 캐시된 데이터 반환
pub fn get_roster() -> &'static Roster {
    ROSTER.get_or_init(|| {
        let records: Vec<PlayerRecord> =
            serde_json::from_str(ROSTER_JSON).expect("Embedded roster JSON is corrupted");
        let roster = Roster::try_new(records).expect("Embedded roster failed validation");
        tracing::debug!(players = roster.len(), "embedded roster loaded");
        roster
    })
}

/// 선수명으로 조회
pub fn get_player(name: &str) -> Option<&'static PlayerRecord> {
    get_roster().find(name)
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_loaded() {
        let roster = get_roster();
        assert_eq!(roster.len(), 6);
        assert!(roster.validate().is_ok());

        let names: Vec<&str> = roster.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["판젠동", "마롱", "장본", "이상수", "장우진", "티모 볼"]);
    }

    #[test]
    fn test_roster_countries() {
        assert_eq!(get_roster().countries(), vec!["중국", "한국", "독일"]);
    }

    #[test]
    fn test_get_player() {
        let timo = get_player("티모 볼").expect("Timo Boll should be embedded");
        assert_eq!(timo.country, "독일");
        assert_eq!(timo.age, 43);
        assert_eq!(timo.career_match_count, 900);
        assert_eq!(timo.latin_name.as_deref(), Some("Timo Boll"));

        assert!(get_player("러시아 선수").is_none());
    }

    #[test]
    fn test_same_instance_returned() {
        assert!(std::ptr::eq(get_roster(), get_roster()));
    }
}
