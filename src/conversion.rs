use crate::error::{EngineError, EngineResult};
use crate::quantity::QuantityKind;
use crate::units::*;

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `MPa`, `kPa`, `Pa`, `K`, `C` 등을 사용할 수 있다.
/// 인식하지 못한 단위는 [`EngineError::Configuration`](crate::error::EngineError) 이다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> EngineResult<f64> {
    match kind {
        QuantityKind::Temperature => {
            let from: TemperatureUnit = from_unit_str.parse()?;
            let to: TemperatureUnit = to_unit_str.parse()?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::Pressure => {
            let from: PressureUnit = from_unit_str.parse()?;
            let to: PressureUnit = to_unit_str.parse()?;
            Ok(convert_pressure(value, from, to))
        }
    }
}

/// 표시 단위 값을 기준 단위(MPa 또는 K)로 환산한다.
///
/// # Errors
///
/// 값이 유한하지 않으면 [`EngineError::Validation`], 단위를 모르면
/// [`EngineError::Configuration`].
pub fn to_canonical(kind: QuantityKind, value: f64, unit_str: &str) -> EngineResult<f64> {
    if !value.is_finite() {
        return Err(EngineError::validation(format!(
            "입력값이 유한하지 않습니다: {value}"
        )));
    }
    convert(kind, value, unit_str, kind.canonical_symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_display_units() {
        let v = convert(QuantityKind::Pressure, 2.5, "MPa", "kPa").unwrap();
        assert!((v - 2500.0).abs() < 1e-9);
        let v = convert(QuantityKind::Temperature, 100.0, "C", "K").unwrap();
        assert!((v - 373.15).abs() < 1e-9);
    }

    #[test]
    fn canonical_from_text() {
        let v = to_canonical(QuantityKind::Pressure, 2000.0, "kPa").unwrap();
        assert!((v - 2.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_input_is_rejected_before_conversion() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = to_canonical(QuantityKind::Pressure, v, "MPa").unwrap_err();
            assert!(matches!(err, EngineError::Validation { .. }));
        }
    }

    #[test]
    fn unknown_unit_fails_loudly() {
        let err = convert(QuantityKind::Temperature, 1.0, "F", "K").unwrap_err();
        assert!(matches!(err, EngineError::Configuration { .. }));
    }
}
