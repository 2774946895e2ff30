//! 외부 상태방정식 평가기 경계.
//!
//! 평가기는 배치 단위로만 호출한다: 온도 배열과 압력 배열을 받아 같은 길이,
//! 같은 순서의 물성 배열을 돌려준다. 실패는 배치 전체 단위이며 개별 점의
//! NaN 은 실패가 아니다.

pub mod if97;

use std::fmt;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::property::ThermodynamicProperty;

pub use if97::{DatabaseManifest, If97Backend};

/// 배치 지향 상태방정식 구현이 제공해야 하는 기능.
pub trait EquationOfState {
    /// 플롯 제목에 쓰이는 상태방정식 이름.
    fn name(&self) -> &str;

    /// `temperatures_k[i]`, `pressures_mpa[i]` 쌍마다 물성 하나를 계산한다.
    ///
    /// 호출 전 길이 일치는 [`EvaluatorHandle`] 이 보장한다.
    fn evaluate_batch(
        &self,
        property: ThermodynamicProperty,
        temperatures_k: &[f64],
        pressures_mpa: &[f64],
    ) -> EngineResult<Vec<f64>>;

    /// 백엔드가 소유한 자원을 해제한다. [`EvaluatorHandle`] 이 정확히 한 번 호출한다.
    fn release(&mut self) {}
}

/// 데이터베이스 선택 한 번에 대응하는 평가기 소유 핸들.
///
/// `close` 를 명시적으로 부르는 것이 기본 해제 경로이고 `Drop` 은 안전망이다.
/// 어느 쪽으로든 백엔드의 `release` 는 한 번만 실행된다.
pub struct EvaluatorHandle {
    backend: Option<Box<dyn EquationOfState>>,
}

impl EvaluatorHandle {
    pub fn new(backend: impl EquationOfState + 'static) -> Self {
        Self {
            backend: Some(Box::new(backend)),
        }
    }

    /// 데이터베이스 파일로 IF97 평가기를 연다.
    ///
    /// # Errors
    ///
    /// 파일을 읽지 못하거나 내용이 올바르지 않으면 [`EngineError::Initialization`].
    pub fn open(database_path: impl AsRef<Path>) -> EngineResult<Self> {
        let backend = If97Backend::open(database_path.as_ref())?;
        info!(
            path = %database_path.as_ref().display(),
            name = backend.name(),
            "평가기 열림"
        );
        Ok(Self::new(backend))
    }

    pub fn is_open(&self) -> bool {
        self.backend.is_some()
    }

    /// 열린 평가기의 이름. 닫혔으면 `None`.
    pub fn name(&self) -> Option<&str> {
        self.backend.as_deref().map(|b| b.name())
    }

    /// 배치 하나를 평가한다.
    ///
    /// # Errors
    ///
    /// - 배열 길이가 다르면 평가기를 부르기 전에 [`EngineError::Validation`].
    /// - 핸들이 닫혔으면 [`EngineError::EvaluatorUnavailable`].
    /// - 평가기가 실패하거나 결과 길이가 입력과 다르면 [`EngineError::Calculation`].
    pub fn evaluate(
        &self,
        property: ThermodynamicProperty,
        temperatures_k: &[f64],
        pressures_mpa: &[f64],
    ) -> EngineResult<Vec<f64>> {
        check_batch(temperatures_k, pressures_mpa)?;
        let backend = self
            .backend
            .as_deref()
            .ok_or(EngineError::EvaluatorUnavailable)?;
        let values = backend.evaluate_batch(property, temperatures_k, pressures_mpa)?;
        if values.len() != temperatures_k.len() {
            return Err(EngineError::calculation(
                property,
                format!(
                    "결과 길이 불일치 (입력 {}, 출력 {})",
                    temperatures_k.len(),
                    values.len()
                ),
            ));
        }
        Ok(values)
    }

    /// 평가기를 해제한다. 여러 번 불러도 된다.
    pub fn close(&mut self) {
        if let Some(mut backend) = self.backend.take() {
            debug!(name = backend.name(), "평가기 해제");
            backend.release();
        }
    }
}

impl Drop for EvaluatorHandle {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for EvaluatorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluatorHandle")
            .field("name", &self.name())
            .finish()
    }
}

/// 배치 입력 배열의 길이가 같은지 확인한다.
pub fn check_batch(temperatures_k: &[f64], pressures_mpa: &[f64]) -> EngineResult<()> {
    if temperatures_k.len() != pressures_mpa.len() {
        return Err(EngineError::validation(format!(
            "온도/압력 배열 길이가 다릅니다 ({} vs {})",
            temperatures_k.len(),
            pressures_mpa.len()
        )));
    }
    Ok(())
}
