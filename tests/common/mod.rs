//! 통합 테스트 공용 도우미.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use if97_property_explorer::{EngineError, EngineResult, EquationOfState, ThermodynamicProperty};

pub fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

/// 테스트마다 겹치지 않는 임시 파일 경로에 내용을 쓴다.
pub fn scratch_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("if97_explorer_it_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    let path = dir.join(name);
    fs::write(&path, content).expect("write scratch file");
    path
}

pub fn if97_manifest(name: &str) -> PathBuf {
    scratch_file(
        name,
        "formulation = \"IAPWS-IF97\"\nname = \"IAPWS IF97 Water/Steam\"\n",
    )
}

/// 점마다 `f(T, p)` 를 돌려주는 가짜 평가기. 호출/해제 횟수를 센다.
pub struct FnBackend<F> {
    f: F,
    pub calls: Rc<Cell<usize>>,
    /// 호출마다 받은 배치 길이
    pub batch_lens: Rc<RefCell<Vec<usize>>>,
    pub releases: Rc<Cell<usize>>,
}

impl<F: Fn(f64, f64) -> f64> FnBackend<F> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            calls: Rc::new(Cell::new(0)),
            batch_lens: Rc::new(RefCell::new(Vec::new())),
            releases: Rc::new(Cell::new(0)),
        }
    }
}

impl<F: Fn(f64, f64) -> f64> EquationOfState for FnBackend<F> {
    fn name(&self) -> &str {
        "Mock EOS"
    }

    fn evaluate_batch(
        &self,
        _property: ThermodynamicProperty,
        temperatures_k: &[f64],
        pressures_mpa: &[f64],
    ) -> EngineResult<Vec<f64>> {
        self.calls.set(self.calls.get() + 1);
        self.batch_lens.borrow_mut().push(temperatures_k.len());
        Ok(temperatures_k
            .iter()
            .zip(pressures_mpa)
            .map(|(&t, &p)| (self.f)(t, p))
            .collect())
    }

    fn release(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

/// 지정한 물성만 실패하는 가짜 평가기.
pub struct FailingBackend {
    pub fail_on: ThermodynamicProperty,
    pub fail_pressure_above: f64,
}

impl EquationOfState for FailingBackend {
    fn name(&self) -> &str {
        "Failing EOS"
    }

    fn evaluate_batch(
        &self,
        property: ThermodynamicProperty,
        temperatures_k: &[f64],
        pressures_mpa: &[f64],
    ) -> EngineResult<Vec<f64>> {
        if property == self.fail_on && pressures_mpa.iter().any(|&p| p > self.fail_pressure_above) {
            return Err(EngineError::Calculation {
                property,
                reason: "mock failure".into(),
            });
        }
        Ok(temperatures_k.iter().map(|t| t * 2.0).collect())
    }
}
