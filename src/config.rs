use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::property::{PlotType, ThermodynamicProperty};
use crate::units::{PressureUnit, TemperatureUnit};

/// 설정 파일 기본 경로(작업 디렉터리 기준).
pub const CONFIG_FILE: &str = "config.toml";

/// 입력 위젯의 기본 표시 단위.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub pressure: PressureUnit,
    pub temperature: TemperatureUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            pressure: PressureUnit::MegaPascal,
            temperature: TemperatureUnit::Kelvin,
        }
    }
}

/// 애플리케이션 설정을 표현한다. 등값 목록과 곡선은 저장하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub property: ThermodynamicProperty,
    pub plot_type: PlotType,
    /// 마지막으로 연 데이터베이스
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            property: ThermodynamicProperty::Density,
            plot_type: PlotType::IsoBar,
            database_path: None,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_from(Path::new(CONFIG_FILE))
}

/// 지정한 경로에서 설정을 로드하거나 없으면 기본 설정을 써 넣는다.
pub fn load_or_default_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "설정 로드");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!(path = %path.display(), "기본 설정 생성");
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    debug!(path = %path.display(), "설정 저장");
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self, Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("if97-explorer-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn missing_file_writes_defaults() {
        let path = scratch("fresh.toml");
        let _ = fs::remove_file(&path);
        let cfg = load_or_default_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn round_trip_keeps_units_and_database() {
        let path = scratch("roundtrip.toml");
        let cfg = Config {
            default_units: DefaultUnits {
                pressure: PressureUnit::KiloPascal,
                temperature: TemperatureUnit::Celsius,
            },
            property: ThermodynamicProperty::SpeedOfSound,
            plot_type: PlotType::IsoTherm,
            database_path: Some(PathBuf::from("data/if97.toml")),
        };
        cfg.save_to(&path).unwrap();
        assert_eq!(load_or_default_from(&path).unwrap(), cfg);
    }

    #[test]
    fn broken_file_is_a_parse_error() {
        let path = scratch("broken.toml");
        fs::write(&path, "property = [").unwrap();
        assert!(matches!(load_or_default_from(&path), Err(ConfigError::Serde(_))));
    }
}
