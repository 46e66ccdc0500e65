use serde::{Deserialize, Serialize};

/// 체적 유량(풍량) 단위. 내부 기준은 m³/h이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirflowUnit {
    CubicMeterPerHour,
    CubicMeterPerSecond,
    LiterPerSecond,
    Cfm,
}

fn to_m3_per_h(value: f64, unit: AirflowUnit) -> f64 {
    match unit {
        AirflowUnit::CubicMeterPerHour => value,
        AirflowUnit::CubicMeterPerSecond => value * 3600.0,
        AirflowUnit::LiterPerSecond => value * 3.6,
        AirflowUnit::Cfm => value * 1.699_011,
    }
}

fn from_m3_per_h(value: f64, unit: AirflowUnit) -> f64 {
    match unit {
        AirflowUnit::CubicMeterPerHour => value,
        AirflowUnit::CubicMeterPerSecond => value / 3600.0,
        AirflowUnit::LiterPerSecond => value / 3.6,
        AirflowUnit::Cfm => value / 1.699_011,
    }
}

/// 풍량을 변환한다.
pub fn convert_airflow(value: f64, from: AirflowUnit, to: AirflowUnit) -> f64 {
    let base = to_m3_per_h(value, from);
    from_m3_per_h(base, to)
}
