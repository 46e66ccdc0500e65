use serde::{Deserialize, Serialize};

/// 동력 단위. 내부 기준은 kW이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    KcalPerHour,
    BtuPerHour,
}

fn to_kilowatt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value / 1000.0,
        PowerUnit::Kilowatt => value,
        PowerUnit::KcalPerHour => value * 4184.0 / 3.6e6,
        PowerUnit::BtuPerHour => value * 1055.06 / 3.6e6,
    }
}

fn from_kilowatt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value * 1000.0,
        PowerUnit::Kilowatt => value,
        PowerUnit::KcalPerHour => value * 3.6e6 / 4184.0,
        PowerUnit::BtuPerHour => value * 3.6e6 / 1055.06,
    }
}

/// 동력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let kw = to_kilowatt(value, from);
    from_kilowatt(kw, to)
}
