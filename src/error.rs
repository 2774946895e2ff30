//! 엔진 전체에서 공유하는 오류 타입.

use std::path::PathBuf;

use thiserror::Error;

use crate::property::ThermodynamicProperty;

/// 엔진 연산 결과 타입.
pub type EngineResult<T> = Result<T, EngineError>;

/// 상태 샘플링/곡선 조립 중 발생 가능한 오류.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// 평가기 자원을 주어진 경로로 생성하지 못함. 다른 경로를 고를 때까지 재시도 불가.
    #[error("평가기 초기화 실패 ({}): {reason}", path.display())]
    Initialization { path: PathBuf, reason: String },

    /// 호출 측 로직 결함(배열 길이 불일치, 잘못된 격자 요청 등).
    #[error("입력 검증 실패: {what}")]
    Validation { what: String },

    /// 평가기가 배치 계산 실패를 보고함.
    #[error("{property} 계산 실패: {reason}")]
    Calculation {
        property: ThermodynamicProperty,
        reason: String,
    },

    /// 알 수 없는 단위/열거값 문자열.
    #[error("설정 오류: {what}")]
    Configuration { what: String },

    /// 데이터베이스가 선택되지 않아 계산할 수 없음.
    #[error("평가기가 열려 있지 않습니다. 먼저 데이터베이스를 선택하세요.")]
    EvaluatorUnavailable,
}

impl EngineError {
    pub(crate) fn validation(what: impl Into<String>) -> Self {
        EngineError::Validation { what: what.into() }
    }

    pub(crate) fn configuration(what: impl Into<String>) -> Self {
        EngineError::Configuration { what: what.into() }
    }

    pub(crate) fn calculation(property: ThermodynamicProperty, reason: impl Into<String>) -> Self {
        EngineError::Calculation {
            property,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_property_and_path() {
        let err = EngineError::calculation(ThermodynamicProperty::SpeedOfSound, "code 3");
        let msg = err.to_string();
        assert!(msg.contains("Speed of Sound"));
        assert!(msg.contains("code 3"));

        let err = EngineError::Initialization {
            path: PathBuf::from("missing.toml"),
            reason: "없음".into(),
        };
        assert!(err.to_string().contains("missing.toml"));
    }
}
