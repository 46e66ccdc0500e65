use serde::{Deserialize, Serialize};

/// 비엔탈피 단위. 내부 기준은 kJ/kg이다.
///
/// 습공기 코어는 항상 kJ/kg(계수 1.006/2501/1.86)을 쓴다. J/kg 표기는
/// 표시·입력 편의를 위한 변환으로만 존재한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificEnthalpyUnit {
    KjPerKg,
    JPerKg,
    KcalPerKg,
}

fn to_base(value: f64, unit: SpecificEnthalpyUnit) -> f64 {
    match unit {
        SpecificEnthalpyUnit::KjPerKg => value,
        SpecificEnthalpyUnit::JPerKg => value / 1000.0,
        SpecificEnthalpyUnit::KcalPerKg => value * 4.184,
    }
}

fn from_base(value: f64, unit: SpecificEnthalpyUnit) -> f64 {
    match unit {
        SpecificEnthalpyUnit::KjPerKg => value,
        SpecificEnthalpyUnit::JPerKg => value * 1000.0,
        SpecificEnthalpyUnit::KcalPerKg => value / 4.184,
    }
}

/// 비엔탈피를 변환한다.
pub fn convert_specific_enthalpy(
    value: f64,
    from: SpecificEnthalpyUnit,
    to: SpecificEnthalpyUnit,
) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
