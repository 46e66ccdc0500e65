use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시: `C`, `K`, `m3/h`, `cfm`, `kW`, `kWh`, `kJ/kg`, `g/kg`.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::TemperatureDifference => {
            let from = parse_temperature_diff_unit(from_unit_str)?;
            let to = parse_temperature_diff_unit(to_unit_str)?;
            Ok(convert_temperature_diff(value, from, to))
        }
        QuantityKind::Airflow => {
            let from = parse_airflow_unit(from_unit_str)?;
            let to = parse_airflow_unit(to_unit_str)?;
            Ok(convert_airflow(value, from, to))
        }
        QuantityKind::Power => {
            let from = parse_power_unit(from_unit_str)?;
            let to = parse_power_unit(to_unit_str)?;
            Ok(convert_power(value, from, to))
        }
        QuantityKind::Energy => {
            let from = parse_energy_unit(from_unit_str)?;
            let to = parse_energy_unit(to_unit_str)?;
            Ok(convert_energy(value, from, to))
        }
        QuantityKind::SpecificEnthalpy => {
            let from = parse_specific_enthalpy_unit(from_unit_str)?;
            let to = parse_specific_enthalpy_unit(to_unit_str)?;
            Ok(convert_specific_enthalpy(value, from, to))
        }
        QuantityKind::HumidityRatio => {
            let from = parse_humidity_ratio_unit(from_unit_str)?;
            let to = parse_humidity_ratio_unit(to_unit_str)?;
            Ok(convert_humidity_ratio(value, from, to))
        }
    }
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_temperature_diff_unit(s: &str) -> Result<TemperatureDiffUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureDiffUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureDiffUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureDiffUnit::Fahrenheit),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_airflow_unit(s: &str) -> Result<AirflowUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m3/h" | "m^3/h" | "m3h" => Ok(AirflowUnit::CubicMeterPerHour),
        "m3/s" | "m^3/s" => Ok(AirflowUnit::CubicMeterPerSecond),
        "l/s" | "lps" => Ok(AirflowUnit::LiterPerSecond),
        "cfm" | "ft3/min" => Ok(AirflowUnit::Cfm),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "w" | "watt" => Ok(PowerUnit::Watt),
        "kw" | "kilowatt" => Ok(PowerUnit::Kilowatt),
        "kcal/h" => Ok(PowerUnit::KcalPerHour),
        "btu/h" | "btuh" => Ok(PowerUnit::BtuPerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_energy_unit(s: &str) -> Result<EnergyUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kwh" => Ok(EnergyUnit::KilowattHour),
        "mwh" => Ok(EnergyUnit::MegawattHour),
        "kj" | "kilojoule" => Ok(EnergyUnit::Kilojoule),
        "mj" | "megajoule" => Ok(EnergyUnit::Megajoule),
        "gj" | "gigajoule" => Ok(EnergyUnit::Gigajoule),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_specific_enthalpy_unit(s: &str) -> Result<SpecificEnthalpyUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kj/kg" => Ok(SpecificEnthalpyUnit::KjPerKg),
        "j/kg" => Ok(SpecificEnthalpyUnit::JPerKg),
        "kcal/kg" => Ok(SpecificEnthalpyUnit::KcalPerKg),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_humidity_ratio_unit(s: &str) -> Result<HumidityRatioUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "g/kg" => Ok(HumidityRatioUnit::GramPerKg),
        "kg/kg" => Ok(HumidityRatioUnit::KgPerKg),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
