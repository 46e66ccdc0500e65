use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::units::*;

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI 기준. 내부 계산 기본값.
    Si,
    /// 영국식/야드파운드법
    Imperial,
}

/// 각 물리량별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub temperature: TemperatureUnit,
    pub temperature_diff: TemperatureDiffUnit,
    pub airflow: AirflowUnit,
    pub power: PowerUnit,
    pub energy: EnergyUnit,
    pub specific_enthalpy: SpecificEnthalpyUnit,
    pub humidity_ratio: HumidityRatioUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            temperature_diff: TemperatureDiffUnit::Kelvin,
            airflow: AirflowUnit::CubicMeterPerHour,
            power: PowerUnit::Kilowatt,
            energy: EnergyUnit::KilowattHour,
            specific_enthalpy: SpecificEnthalpyUnit::KjPerKg,
            humidity_ratio: HumidityRatioUnit::GramPerKg,
        }
    }
}

impl DefaultUnits {
    /// 단위 시스템 프리셋에 맞는 기본 단위 세트를 돌려준다.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Si => Self::default(),
            UnitSystem::Imperial => Self {
                temperature: TemperatureUnit::Fahrenheit,
                temperature_diff: TemperatureDiffUnit::Fahrenheit,
                airflow: AirflowUnit::Cfm,
                power: PowerUnit::BtuPerHour,
                energy: EnergyUnit::KilowattHour,
                specific_enthalpy: SpecificEnthalpyUnit::KcalPerKg,
                humidity_ratio: HumidityRatioUnit::GramPerKg,
            },
        }
    }
}

/// 설비/요금 입력의 기본값. UI 위젯의 초기값으로 쓰인다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantDefaults {
    /// 급기 체적 유량 [m³/h]
    pub airflow_m3_per_h: f64,
    /// 1일 운전 시간 [h]
    pub hours_per_day: f64,
    /// 연간 운전 일수
    pub days_per_year: f64,
    /// 비팬동력 SFP [W/(m³/h)]
    pub specific_fan_power_w_per_m3h: f64,
    /// 전기 단가 [통화/kWh]
    pub electricity_price_per_kwh: f64,
    /// 열 단가 [통화/kWh]
    pub heat_price_per_kwh: f64,
    /// 냉열 단가 [통화/kWh]
    pub cooling_price_per_kwh: f64,
    /// CO₂ 배출계수 [kg/kWh]
    pub co2_factor_kg_per_kwh: f64,
    /// 열회수 효율 기본값 (0~0.95)
    pub heat_recovery_effectiveness: f64,
}

impl Default for PlantDefaults {
    fn default() -> Self {
        Self {
            airflow_m3_per_h: 10_000.0,
            hours_per_day: 12.0,
            days_per_year: 250.0,
            specific_fan_power_w_per_m3h: 2.5,
            electricity_price_per_kwh: 0.25,
            heat_price_per_kwh: 0.08,
            cooling_price_per_kwh: 0.15,
            co2_factor_kg_per_kwh: 0.4,
            heat_recovery_effectiveness: 0.70,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 언어 코드 (auto/ko/ko-kr/en/en-us/de-de)
    pub language: String,
    /// 외부 언어팩 디렉터리. 지정 시 내장 번역보다 우선한다.
    pub language_pack_dir: Option<String>,
    /// GUI 창 투명도 (0.3~1.0)
    pub window_alpha: f32,
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
    pub plant_defaults: PlantDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            window_alpha: 1.0,
            unit_system: UnitSystem::Si,
            default_units: DefaultUnits::default(),
            plant_defaults: PlantDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }

    /// 단위 시스템 프리셋을 적용하고 기본 단위 세트를 갱신한다.
    pub fn apply_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = DefaultUnits::for_system(system);
    }
}
