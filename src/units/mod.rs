//! 단위 정의 및 변환 모듈 모음.

pub mod airflow;
pub mod energy;
pub mod humidity_ratio;
pub mod power;
pub mod specific_enthalpy;
pub mod temperature;

pub use airflow::{convert_airflow, AirflowUnit};
pub use energy::{convert_energy, EnergyUnit};
pub use humidity_ratio::{convert_humidity_ratio, HumidityRatioUnit};
pub use power::{convert_power, PowerUnit};
pub use specific_enthalpy::{convert_specific_enthalpy, SpecificEnthalpyUnit};
pub use temperature::{
    convert_temperature, convert_temperature_diff, TemperatureDiffUnit, TemperatureUnit,
};
