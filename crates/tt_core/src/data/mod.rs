//! 선수 데이터 모듈
//!
//! 바이너리에 임베딩된 기본 로스터를 제공합니다.

pub mod embedded;

pub use embedded::{get_player, get_roster, ROSTER_JSON};
