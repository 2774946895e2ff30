//! IAPWS-IF97 계산을 seuif97 크레이트로 위임한 평가기.
//! 입력: 온도(K), 압력(MPa, 절대)
//! 출력: kg/m³, kJ/kg, kJ/(kg·K), m³/kg, m/s

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use seuif97::{pt, OCP, OCV, OD, OH, OS, OU, OV, OW};
use tracing::trace;

use super::EquationOfState;
use crate::error::{EngineError, EngineResult};
use crate::property::ThermodynamicProperty;
use crate::units::temperature::KELVIN_OFFSET;

const SUPPORTED_FORMULATION: &str = "IAPWS-IF97";
const DEFAULT_NAME: &str = "IAPWS IF97 Water/Steam";

// ---------------- IF97 적용 범위 ----------------
const IF97_MIN_T_K: f64 = 273.15;
const IF97_REGION5_MIN_T_K: f64 = 1073.15;
const IF97_MAX_T_K: f64 = 2273.15;
const IF97_MAX_P_MPA: f64 = 100.0;
const IF97_REGION5_MAX_P_MPA: f64 = 50.0;

/// 사용자가 고르는 "데이터베이스" 파일의 내용.
///
/// ```toml
/// formulation = "IAPWS-IF97"
/// name = "IAPWS IF97 Water/Steam"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseManifest {
    pub formulation: String,
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

impl Default for DatabaseManifest {
    fn default() -> Self {
        Self {
            formulation: SUPPORTED_FORMULATION.to_string(),
            name: default_name(),
        }
    }
}

impl DatabaseManifest {
    /// 표기 차이(`IAPWS IF97`, `iapws-if97`)는 허용한다.
    pub fn is_supported(&self) -> bool {
        normalize(&self.formulation) == normalize(SUPPORTED_FORMULATION)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// seuif97 기반 IF97 평가기.
#[derive(Debug, Clone)]
pub struct If97Backend {
    manifest: DatabaseManifest,
    path: Option<PathBuf>,
}

impl If97Backend {
    /// 매니페스트 파일을 읽어 평가기를 만든다.
    ///
    /// # Errors
    ///
    /// 파일 입출력, TOML 파싱, 지원하지 않는 formulation 은 모두
    /// [`EngineError::Initialization`] 으로 보고한다.
    pub fn open(path: &Path) -> EngineResult<Self> {
        let init_err = |reason: String| EngineError::Initialization {
            path: path.to_path_buf(),
            reason,
        };
        let content = fs::read_to_string(path).map_err(|e| init_err(format!("파일 입출력 오류: {e}")))?;
        let manifest: DatabaseManifest =
            toml::from_str(&content).map_err(|e| init_err(format!("데이터베이스 파싱 오류: {e}")))?;
        if !manifest.is_supported() {
            return Err(init_err(format!(
                "지원하지 않는 상태방정식: {}",
                manifest.formulation
            )));
        }
        Ok(Self {
            manifest,
            path: Some(path.to_path_buf()),
        })
    }

    /// 파일 없이 기본 매니페스트로 만든다.
    pub fn with_defaults() -> Self {
        Self {
            manifest: DatabaseManifest::default(),
            path: None,
        }
    }

    pub fn manifest(&self) -> &DatabaseManifest {
        &self.manifest
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl EquationOfState for If97Backend {
    fn name(&self) -> &str {
        &self.manifest.name
    }

    fn evaluate_batch(
        &self,
        property: ThermodynamicProperty,
        temperatures_k: &[f64],
        pressures_mpa: &[f64],
    ) -> EngineResult<Vec<f64>> {
        if let Some(idx) = temperatures_k
            .iter()
            .zip(pressures_mpa)
            .position(|(t, p)| !t.is_finite() || !p.is_finite())
        {
            return Err(EngineError::calculation(
                property,
                format!("{idx}번째 입력이 유한하지 않습니다"),
            ));
        }
        let values: Vec<f64> = temperatures_k
            .iter()
            .zip(pressures_mpa)
            .map(|(&t_k, &p_mpa)| property_at(property, t_k, p_mpa))
            .collect();
        trace!(
            %property,
            len = values.len(),
            nan = values.iter().filter(|v| v.is_nan()).count(),
            "IF97 배치 평가"
        );
        Ok(values)
    }
}

/// IF97 적용 범위(Region 1~5) 안인지 판정한다.
pub fn in_if97_range(t_k: f64, p_mpa: f64) -> bool {
    if p_mpa <= 0.0 || t_k < IF97_MIN_T_K || t_k > IF97_MAX_T_K {
        return false;
    }
    if t_k <= IF97_REGION5_MIN_T_K {
        p_mpa <= IF97_MAX_P_MPA
    } else {
        p_mpa <= IF97_REGION5_MAX_P_MPA
    }
}

/// 한 점의 물성. 적용 범위 밖이거나 계산이 발산하면 NaN.
fn property_at(property: ThermodynamicProperty, t_k: f64, p_mpa: f64) -> f64 {
    if !in_if97_range(t_k, p_mpa) {
        return f64::NAN;
    }
    let value = pt(p_mpa, t_k - KELVIN_OFFSET, property_id(property));
    if value.is_finite() {
        value
    } else {
        f64::NAN
    }
}

fn property_id(property: ThermodynamicProperty) -> i32 {
    match property {
        ThermodynamicProperty::Density => OD,
        ThermodynamicProperty::SpecificEnthalpy => OH,
        ThermodynamicProperty::SpecificEntropy => OS,
        ThermodynamicProperty::SpecificVolume => OV,
        ThermodynamicProperty::SpecificInternalEnergy => OU,
        ThermodynamicProperty::SpecificIsobaricHeatCapacity => OCP,
        ThermodynamicProperty::SpecificIsochoricHeatCapacity => OCV,
        ThermodynamicProperty::SpeedOfSound => OW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check_follows_region_limits() {
        assert!(in_if97_range(300.0, 3.0));
        assert!(in_if97_range(1073.15, 100.0));
        assert!(!in_if97_range(1500.0, 60.0));
        assert!(in_if97_range(1500.0, 50.0));
        assert!(!in_if97_range(273.0, 1.0));
        assert!(!in_if97_range(300.0, 0.0));
    }

    #[test]
    fn manifest_accepts_spelling_variants() {
        let mut m = DatabaseManifest::default();
        assert!(m.is_supported());
        m.formulation = "iapws if97".into();
        assert!(m.is_supported());
        m.formulation = "IAPWS-95".into();
        assert!(!m.is_supported());
    }

    #[test]
    fn out_of_range_points_are_nan_not_errors() {
        let backend = If97Backend::with_defaults();
        let out = backend
            .evaluate_batch(
                ThermodynamicProperty::Density,
                &[300.0, 1500.0],
                &[3.0, 80.0],
            )
            .unwrap();
        assert!(out[0].is_finite());
        assert!(out[1].is_nan());
    }

    #[test]
    fn non_finite_input_fails_whole_batch() {
        let backend = If97Backend::with_defaults();
        let err = backend
            .evaluate_batch(
                ThermodynamicProperty::Density,
                &[300.0, f64::NAN],
                &[3.0, 3.0],
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::Calculation { .. }));
    }
}
