use serde::{Deserialize, Serialize};

/// 습도비(절대습도) 단위. 내부 기준은 g/kg(건공기)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HumidityRatioUnit {
    GramPerKg,
    KgPerKg,
}

fn to_g_per_kg(value: f64, unit: HumidityRatioUnit) -> f64 {
    match unit {
        HumidityRatioUnit::GramPerKg => value,
        HumidityRatioUnit::KgPerKg => value * 1000.0,
    }
}

fn from_g_per_kg(value: f64, unit: HumidityRatioUnit) -> f64 {
    match unit {
        HumidityRatioUnit::GramPerKg => value,
        HumidityRatioUnit::KgPerKg => value / 1000.0,
    }
}

/// 습도비를 변환한다.
pub fn convert_humidity_ratio(value: f64, from: HumidityRatioUnit, to: HumidityRatioUnit) -> f64 {
    let base = to_g_per_kg(value, from);
    from_g_per_kg(base, to)
}
