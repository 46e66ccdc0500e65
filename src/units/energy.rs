use serde::{Deserialize, Serialize};

/// 에너지 단위. 연간 전력량 표시에 맞춰 내부 기준은 kWh이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    KilowattHour,
    MegawattHour,
    Kilojoule,
    Megajoule,
    Gigajoule,
}

fn to_kwh(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::KilowattHour => value,
        EnergyUnit::MegawattHour => value * 1000.0,
        EnergyUnit::Kilojoule => value / 3600.0,
        EnergyUnit::Megajoule => value / 3.6,
        EnergyUnit::Gigajoule => value * 1000.0 / 3.6,
    }
}

fn from_kwh(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::KilowattHour => value,
        EnergyUnit::MegawattHour => value / 1000.0,
        EnergyUnit::Kilojoule => value * 3600.0,
        EnergyUnit::Megajoule => value * 3.6,
        EnergyUnit::Gigajoule => value * 3.6 / 1000.0,
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    let kwh = to_kwh(value, from);
    from_kwh(kwh, to)
}
