//! 단위 정의 및 변환 모듈 모음. 기준 단위는 압력 MPa, 온도 K.

pub mod pressure;
pub mod temperature;

pub use pressure::{convert_pressure, from_mpa, to_mpa, PressureUnit};
pub use temperature::{convert_temperature, from_kelvin, to_kelvin, TemperatureUnit};
