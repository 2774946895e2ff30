//! 압력/온도 입력 쌍(슬라이더) 상태.
//!
//! 값은 기준 단위로 들고 있고 범위·표시값만 선택된 단위로 바꿔 내준다.
//! 압력이나 단위가 바뀔 때마다 온도 범위를 다시 구하고 온도를 그 안으로 당긴다.

use crate::domain::{
    pressure_input_bounds, temperature_bounds_for_pressure, temperature_input_bounds,
    ValidityBounds, MAX_PRESSURE_MPA, MIN_PRESSURE_MPA,
};
use crate::units::{from_kelvin, from_mpa, to_kelvin, to_mpa, PressureUnit, TemperatureUnit};

#[derive(Debug, Clone, PartialEq)]
pub struct StateInput {
    pressure_unit: PressureUnit,
    temperature_unit: TemperatureUnit,
    pressure_mpa: f64,
    temperature_k: f64,
}

impl Default for StateInput {
    fn default() -> Self {
        Self::new(PressureUnit::MegaPascal, TemperatureUnit::Kelvin)
    }
}

impl StateInput {
    /// 최소 압력과 최소 온도에서 시작한다.
    pub fn new(pressure_unit: PressureUnit, temperature_unit: TemperatureUnit) -> Self {
        let mut input = Self {
            pressure_unit,
            temperature_unit,
            pressure_mpa: MIN_PRESSURE_MPA,
            temperature_k: 0.0,
        };
        input.refresh_temperature();
        input
    }

    pub fn pressure_unit(&self) -> PressureUnit {
        self.pressure_unit
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.temperature_unit
    }

    pub fn pressure_mpa(&self) -> f64 {
        self.pressure_mpa
    }

    pub fn temperature_k(&self) -> f64 {
        self.temperature_k
    }

    /// 선택 단위로 본 현재 압력.
    pub fn pressure_display(&self) -> f64 {
        from_mpa(self.pressure_mpa, self.pressure_unit)
    }

    /// 선택 단위로 본 현재 온도.
    pub fn temperature_display(&self) -> f64 {
        from_kelvin(self.temperature_k, self.temperature_unit)
    }

    /// 압력 위젯 범위(선택 단위).
    pub fn pressure_range(&self) -> ValidityBounds {
        pressure_input_bounds(self.pressure_unit)
    }

    /// 현재 압력 기준 온도 위젯 범위(선택 단위).
    pub fn temperature_range(&self) -> ValidityBounds {
        temperature_input_bounds(self.pressure_mpa, self.temperature_unit)
    }

    /// 선택 단위로 입력된 압력을 반영한다. 범위 밖이면 가장자리로 당긴다.
    pub fn set_pressure(&mut self, value: f64) {
        let mpa = to_mpa(value, self.pressure_unit);
        self.pressure_mpa = ValidityBounds::new(MIN_PRESSURE_MPA, MAX_PRESSURE_MPA).clamp(mpa);
        self.refresh_temperature();
    }

    /// 선택 단위로 입력된 온도를 반영한다. 범위 밖이면 가장자리로 당긴다.
    pub fn set_temperature(&mut self, value: f64) {
        self.temperature_k = to_kelvin(value, self.temperature_unit);
        self.refresh_temperature();
    }

    pub fn set_pressure_unit(&mut self, unit: PressureUnit) {
        self.pressure_unit = unit;
        self.refresh_temperature();
    }

    pub fn set_temperature_unit(&mut self, unit: TemperatureUnit) {
        self.temperature_unit = unit;
        self.refresh_temperature();
    }

    fn refresh_temperature(&mut self) {
        self.temperature_k =
            temperature_bounds_for_pressure(self.pressure_mpa).clamp(self.temperature_k);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_lower_corner() {
        let input = StateInput::default();
        assert_eq!(input.pressure_mpa(), 0.01);
        assert_eq!(input.temperature_k(), 273.16);
    }

    #[test]
    fn raising_pressure_narrows_and_clamps_temperature() {
        let mut input = StateInput::default();
        input.set_temperature(2000.0);
        assert_eq!(input.temperature_k(), 2000.0);
        input.set_pressure(80.0);
        assert_eq!(input.temperature_range().max, 1073.15);
        assert_eq!(input.temperature_k(), 1073.15);
    }

    #[test]
    fn split_uses_canonical_pressure_not_display_number() {
        let mut input = StateInput::new(PressureUnit::KiloPascal, TemperatureUnit::Kelvin);
        // 2000 kPa = 2 MPa 는 50 MPa 이하
        input.set_pressure(2000.0);
        assert!((input.pressure_mpa() - 2.0).abs() < 1e-12);
        assert_eq!(input.temperature_range().max, 2273.15);
    }

    #[test]
    fn celsius_range_is_shifted() {
        let mut input = StateInput::default();
        input.set_temperature_unit(TemperatureUnit::Celsius);
        let range = input.temperature_range();
        assert!((range.min - 0.01).abs() < 1e-9);
        assert!((range.max - 2000.0).abs() < 1e-9);
        input.set_temperature(100.0);
        assert!((input.temperature_k() - 373.15).abs() < 1e-9);
    }

    #[test]
    fn pressure_clamped_to_global_range() {
        let mut input = StateInput::new(PressureUnit::Pascal, TemperatureUnit::Kelvin);
        input.set_pressure(1.0);
        assert_eq!(input.pressure_mpa(), 0.01);
        input.set_pressure(2.0e8);
        assert_eq!(input.pressure_mpa(), 100.0);
    }
}
