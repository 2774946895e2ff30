//! IAPWS-IF97 유효 범위 규칙.
//!
//! 슬라이더 범위와 스윕 격자의 양 끝점은 모두 이 모듈에서 나온다. 사각형
//! 범위는 실제 IF97 영역 경계보다 넓으므로 범위 안의 격자점이라도 평가
//! 결과가 NaN 일 수 있다(곡선 조립 단계에서 걸러낸다).

use crate::units::{from_kelvin, from_mpa, PressureUnit, TemperatureUnit};

pub const MIN_PRESSURE_MPA: f64 = 0.01;
pub const MAX_PRESSURE_MPA: f64 = 100.0;
/// 이 압력을 넘으면 온도 상한이 1073.15 K 로 좁아진다.
pub const HIGH_PRESSURE_SPLIT_MPA: f64 = 50.0;
pub const MIN_TEMPERATURE_K: f64 = 273.16;
pub const MAX_TEMPERATURE_BELOW_SPLIT_K: f64 = 2273.15;
pub const MAX_TEMPERATURE_ABOVE_SPLIT_K: f64 = 1073.15;

/// 기준 단위로 표현한 닫힌 구간 (min, max).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidityBounds {
    pub min: f64,
    pub max: f64,
}

impl ValidityBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// 구간 안으로 값을 끌어온다. NaN 은 하한으로 보낸다.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

/// 압력(MPa)에 대한 유효 온도 범위(K).
pub fn temperature_bounds_for_pressure(pressure_mpa: f64) -> ValidityBounds {
    if pressure_mpa <= HIGH_PRESSURE_SPLIT_MPA {
        ValidityBounds::new(MIN_TEMPERATURE_K, MAX_TEMPERATURE_BELOW_SPLIT_K)
    } else {
        ValidityBounds::new(MIN_TEMPERATURE_K, MAX_TEMPERATURE_ABOVE_SPLIT_K)
    }
}

/// 온도(K)에 대한 유효 압력 범위(MPa). 고온 가지(Region 5)는 50 MPa 까지만 유효하다.
pub fn pressure_bounds_for_temperature(temperature_k: f64) -> ValidityBounds {
    if temperature_k <= MAX_TEMPERATURE_ABOVE_SPLIT_K {
        ValidityBounds::new(MIN_PRESSURE_MPA, MAX_PRESSURE_MPA)
    } else {
        ValidityBounds::new(MIN_PRESSURE_MPA, HIGH_PRESSURE_SPLIT_MPA)
    }
}

/// 압력 입력 위젯의 전역 범위를 표시 단위로 반환한다.
pub fn pressure_input_bounds(unit: PressureUnit) -> ValidityBounds {
    ValidityBounds::new(
        from_mpa(MIN_PRESSURE_MPA, unit),
        from_mpa(MAX_PRESSURE_MPA, unit),
    )
}

/// 현재 압력(MPa)에서 온도 입력 위젯의 범위를 표시 단위로 반환한다.
pub fn temperature_input_bounds(pressure_mpa: f64, unit: TemperatureUnit) -> ValidityBounds {
    let bounds = temperature_bounds_for_pressure(pressure_mpa);
    ValidityBounds::new(from_kelvin(bounds.min, unit), from_kelvin(bounds.max, unit))
}
