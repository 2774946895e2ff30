//! 플롯 대상 물성과 플롯 종류, 그리고 고정 표시 라벨 표.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// 평가기가 계산할 수 있는 열역학 물성.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ThermodynamicProperty {
    Density,
    SpecificEnthalpy,
    SpecificEntropy,
    SpecificVolume,
    SpecificInternalEnergy,
    SpecificIsobaricHeatCapacity,
    SpecificIsochoricHeatCapacity,
    SpeedOfSound,
}

/// 물성별 표시 정보.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyInfo {
    /// 콤보박스/요약에 쓰는 이름
    pub label: &'static str,
    /// 물리 단위
    pub unit: &'static str,
    /// 플롯 y축 제목
    pub axis_title: &'static str,
    /// CLI/설정 파일용 키
    pub key: &'static str,
}

static DENSITY: PropertyInfo = PropertyInfo {
    label: "Density",
    unit: "kg/m³",
    axis_title: "Density (kg/m³)",
    key: "density",
};
static SPECIFIC_ENTHALPY: PropertyInfo = PropertyInfo {
    label: "Specific Enthalpy",
    unit: "kJ/kg",
    axis_title: "Specific Enthalpy (kJ/kg)",
    key: "enthalpy",
};
static SPECIFIC_ENTROPY: PropertyInfo = PropertyInfo {
    label: "Specific Entropy",
    unit: "kJ/(kg·K)",
    axis_title: "Specific Entropy (kJ/(kg·K))",
    key: "entropy",
};
static SPECIFIC_VOLUME: PropertyInfo = PropertyInfo {
    label: "Specific Volume",
    unit: "m³/kg",
    axis_title: "Specific Volume (m³/kg)",
    key: "volume",
};
static SPECIFIC_INTERNAL_ENERGY: PropertyInfo = PropertyInfo {
    label: "Specific Internal Energy",
    unit: "kJ/kg",
    axis_title: "Specific Internal Energy (kJ/kg)",
    key: "internal-energy",
};
static SPECIFIC_ISOBARIC_HEAT_CAPACITY: PropertyInfo = PropertyInfo {
    label: "Specific Isobaric Heat Capacity",
    unit: "kJ/(kg·K)",
    axis_title: "Specific Heat Capacity Cp (kJ/(kg·K))",
    key: "cp",
};
static SPECIFIC_ISOCHORIC_HEAT_CAPACITY: PropertyInfo = PropertyInfo {
    label: "Specific Isochoric Heat Capacity",
    unit: "kJ/(kg·K)",
    axis_title: "Specific Heat Capacity Cv (kJ/(kg·K))",
    key: "cv",
};
static SPEED_OF_SOUND: PropertyInfo = PropertyInfo {
    label: "Speed of Sound",
    unit: "m/s",
    axis_title: "Speed of Sound (m/s)",
    key: "speed-of-sound",
};

impl ThermodynamicProperty {
    /// 표시 순서대로 나열한 전체 물성.
    pub const ALL: [ThermodynamicProperty; 8] = [
        ThermodynamicProperty::Density,
        ThermodynamicProperty::SpecificEnthalpy,
        ThermodynamicProperty::SpecificEntropy,
        ThermodynamicProperty::SpecificVolume,
        ThermodynamicProperty::SpecificInternalEnergy,
        ThermodynamicProperty::SpecificIsobaricHeatCapacity,
        ThermodynamicProperty::SpecificIsochoricHeatCapacity,
        ThermodynamicProperty::SpeedOfSound,
    ];

    pub fn info(self) -> &'static PropertyInfo {
        match self {
            ThermodynamicProperty::Density => &DENSITY,
            ThermodynamicProperty::SpecificEnthalpy => &SPECIFIC_ENTHALPY,
            ThermodynamicProperty::SpecificEntropy => &SPECIFIC_ENTROPY,
            ThermodynamicProperty::SpecificVolume => &SPECIFIC_VOLUME,
            ThermodynamicProperty::SpecificInternalEnergy => &SPECIFIC_INTERNAL_ENERGY,
            ThermodynamicProperty::SpecificIsobaricHeatCapacity => {
                &SPECIFIC_ISOBARIC_HEAT_CAPACITY
            }
            ThermodynamicProperty::SpecificIsochoricHeatCapacity => {
                &SPECIFIC_ISOCHORIC_HEAT_CAPACITY
            }
            ThermodynamicProperty::SpeedOfSound => &SPEED_OF_SOUND,
        }
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn unit(self) -> &'static str {
        self.info().unit
    }

    pub fn axis_title(self) -> &'static str {
        self.info().axis_title
    }
}

impl fmt::Display for ThermodynamicProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ThermodynamicProperty {
    type Err = EngineError;

    /// 키(`density`, `cp` 등) 또는 표시 이름을 대소문자 구분 없이 받는다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ThermodynamicProperty::ALL
            .into_iter()
            .find(|p| {
                let info = p.info();
                needle.eq_ignore_ascii_case(info.key) || needle.eq_ignore_ascii_case(info.label)
            })
            .ok_or_else(|| EngineError::configuration(format!("알 수 없는 물성: {needle}")))
    }
}

/// 어떤 축을 스윕하고 어떤 등값 집합을 순회할지 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlotType {
    /// 압력 고정, 온도 스윕
    IsoBar,
    /// 온도 고정, 압력 스윕
    IsoTherm,
}

impl PlotType {
    pub const ALL: [PlotType; 2] = [PlotType::IsoBar, PlotType::IsoTherm];

    pub fn label(self) -> &'static str {
        match self {
            PlotType::IsoBar => "Iso-Bar",
            PlotType::IsoTherm => "Iso-Therm",
        }
    }

    /// 스윕 축(x축) 제목. 곡선의 x는 항상 기준 단위로 그린다.
    pub fn sweep_axis_title(self) -> &'static str {
        match self {
            PlotType::IsoBar => "Temperature (K)",
            PlotType::IsoTherm => "Pressure (MPa)",
        }
    }
}

impl fmt::Display for PlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlotType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso-bar" | "isobar" | "bar" => Ok(PlotType::IsoBar),
            "iso-therm" | "isotherm" | "therm" => Ok(PlotType::IsoTherm),
            other => Err(EngineError::configuration(format!(
                "알 수 없는 플롯 종류: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_property_has_a_distinct_key_and_label() {
        for (i, a) in ThermodynamicProperty::ALL.iter().enumerate() {
            for b in &ThermodynamicProperty::ALL[i + 1..] {
                assert_ne!(a.info().key, b.info().key);
                assert_ne!(a.label(), b.label());
            }
            assert!(a.axis_title().contains(a.unit()));
        }
    }

    #[test]
    fn parse_by_key_or_label() {
        assert_eq!(
            "cp".parse::<ThermodynamicProperty>(),
            Ok(ThermodynamicProperty::SpecificIsobaricHeatCapacity)
        );
        assert_eq!(
            "speed of sound".parse::<ThermodynamicProperty>(),
            Ok(ThermodynamicProperty::SpeedOfSound)
        );
        assert!(matches!(
            "viscosity".parse::<ThermodynamicProperty>(),
            Err(EngineError::Configuration { .. })
        ));
    }

    #[test]
    fn plot_type_parse() {
        assert_eq!("Iso-Bar".parse::<PlotType>(), Ok(PlotType::IsoBar));
        assert_eq!("isotherm".parse::<PlotType>(), Ok(PlotType::IsoTherm));
        assert!("isochore".parse::<PlotType>().is_err());
    }
}
