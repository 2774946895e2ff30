//! 한 상태점에서 여덟 가지 물성을 모두 계산한다.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::EngineResult;
use crate::evaluator::EvaluatorHandle;
use crate::property::ThermodynamicProperty;

/// 요약 패널에 표시할 상태점 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct StatePoint {
    pub temperature_k: f64,
    pub pressure_mpa: f64,
    values: BTreeMap<ThermodynamicProperty, f64>,
}

impl StatePoint {
    pub fn get(&self, property: ThermodynamicProperty) -> Option<f64> {
        self.values.get(&property).copied()
    }

    /// 물성 표시 순서대로 순회한다.
    pub fn iter(&self) -> impl Iterator<Item = (ThermodynamicProperty, f64)> + '_ {
        self.values.iter().map(|(p, v)| (*p, *v))
    }

    pub fn values(&self) -> &BTreeMap<ThermodynamicProperty, f64> {
        &self.values
    }

    /// `Density: 997.05 kg/m³` 형태의 요약 줄.
    pub fn summary_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(p, v)| format!("{}: {v:.2} {}", p.label(), p.unit()))
            .collect()
    }
}

/// 물성마다 단일 샘플 배치를 한 번씩(총 8회) 호출한다.
///
/// # Errors
///
/// 하나라도 실패하면 부분 결과 없이 그 오류를 돌려준다.
pub fn evaluate_all(
    evaluator: &EvaluatorHandle,
    temperature_k: f64,
    pressure_mpa: f64,
) -> EngineResult<StatePoint> {
    let temperatures = [temperature_k];
    let pressures = [pressure_mpa];
    let values = ThermodynamicProperty::ALL
        .iter()
        .map(|&property| {
            let out = evaluator.evaluate(property, &temperatures, &pressures)?;
            Ok((property, out[0]))
        })
        .collect::<EngineResult<BTreeMap<_, _>>>()?;
    debug!(temperature_k, pressure_mpa, "상태점 계산");
    Ok(StatePoint {
        temperature_k,
        pressure_mpa,
        values,
    })
}
