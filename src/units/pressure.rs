use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// 압력 표시 단위. 내부 기준은 항상 MPa(절대압)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressureUnit {
    MegaPascal,
    KiloPascal,
    Pascal,
}

const KPA_PER_MPA: f64 = 1_000.0;
const PA_PER_MPA: f64 = 1_000_000.0;

impl PressureUnit {
    pub const ALL: [PressureUnit; 3] = [
        PressureUnit::MegaPascal,
        PressureUnit::KiloPascal,
        PressureUnit::Pascal,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::Pascal => "Pa",
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for PressureUnit {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "MPa" | "mpa" => Ok(PressureUnit::MegaPascal),
            "kPa" | "kpa" | "KPa" => Ok(PressureUnit::KiloPascal),
            "Pa" | "pa" => Ok(PressureUnit::Pascal),
            other => Err(EngineError::configuration(format!(
                "알 수 없는 압력 단위: {other}"
            ))),
        }
    }
}

/// 주어진 압력을 MPa로 변환한다.
pub fn to_mpa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::MegaPascal => value,
        PressureUnit::KiloPascal => value / KPA_PER_MPA,
        PressureUnit::Pascal => value / PA_PER_MPA,
    }
}

/// MPa 값을 원하는 단위로 변환한다.
pub fn from_mpa(value_mpa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::MegaPascal => value_mpa,
        PressureUnit::KiloPascal => value_mpa * KPA_PER_MPA,
        PressureUnit::Pascal => value_mpa * PA_PER_MPA,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_mpa(to_mpa(value, from), to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpa_entry_is_stored_in_mpa() {
        assert_eq!(to_mpa(2000.0, PressureUnit::KiloPascal), 2.0);
        assert_eq!(to_mpa(101_325.0, PressureUnit::Pascal), 0.101325);
    }

    #[test]
    fn symbols_parse_back() {
        for unit in PressureUnit::ALL {
            assert_eq!(unit.symbol().parse::<PressureUnit>(), Ok(unit));
        }
        assert!("bar".parse::<PressureUnit>().is_err());
    }
}
