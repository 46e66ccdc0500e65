//! 습공기 상태 계산.
//!
//! Magnus 근사식으로 포화수증기압을 추정하고, 해면 기준 고정 전압
//! (101,325 Pa) 습공기 모델로 습도비/엔탈피/노점을 유도한다.
//! 단위 규약: 온도 °C, 습도비 kg/kg(건공기), 엔탈피 kJ/kg(건공기), 압력 Pa.

/// 해면 기준 대기압 [Pa].
pub const ATMOSPHERIC_PRESSURE_PA: f64 = 101_325.0;

/// 수증기분압이 0 이하일 때 반환하는 노점 하한값 [°C].
pub const DEW_POINT_FLOOR_C: f64 = -50.0;

/// 코일 출구 온도 계산 시 노점 아래로 두는 기본 안전 여유 [K].
pub const DEFAULT_DEW_POINT_MARGIN_K: f64 = 1.0;

// 내부 검증용 온도 허용 범위. Magnus 식 분모(T+243.5)를 보호한다.
const TEMP_GUARD_MIN_C: f64 = -100.0;
const TEMP_GUARD_MAX_C: f64 = 100.0;

/// 습공기의 한 상태점. 생성 후 불변으로 취급한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistAirState {
    /// 건구 온도 [°C]
    pub temperature_c: f64,
    /// 상대습도 [%] (0~100으로 클램프됨)
    pub relative_humidity_pct: f64,
    /// 습도비 [kg수증기/kg건공기]
    pub humidity_ratio: f64,
    /// 비엔탈피 [kJ/kg건공기]
    pub enthalpy_kj_per_kg: f64,
    /// 노점 온도 [°C]
    pub dew_point_c: f64,
}

/// 습도 입력 방식. 상대습도(%) 또는 절대습도(g/kg) 중 하나만 독립 입력이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Humidity {
    /// 상대습도 [%]
    RelativePct(f64),
    /// 절대습도 [g수증기/kg건공기]
    AbsoluteGPerKg(f64),
}

/// 습공기 계산의 입력 검증 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum PsychroError {
    /// 상대습도가 0~100% 범위를 벗어남
    RelativeHumidityOutOfRange(f64),
    /// 습도비가 음수
    NegativeHumidityRatio(f64),
    /// 온도가 계산 보호 범위(-100~100°C)를 벗어남
    TemperatureOutOfRange(f64),
}

impl std::fmt::Display for PsychroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PsychroError::RelativeHumidityOutOfRange(v) => {
                write!(f, "상대습도 범위 초과(0~100%): {v}")
            }
            PsychroError::NegativeHumidityRatio(v) => write!(f, "습도비가 음수입니다: {v}"),
            PsychroError::TemperatureOutOfRange(v) => {
                write!(f, "온도 범위 초과(-100~100°C): {v}")
            }
        }
    }
}

impl std::error::Error for PsychroError {}

/// Magnus 식으로 포화수증기압을 계산한다.
///
/// Psat(Pa) = 611.2 · exp(17.67·T / (T+243.5)); HVAC 실용 범위(-20~45°C)에서 유효.
pub fn saturation_vapor_pressure_pa(temp_c: f64) -> f64 {
    611.2 * (17.67 * temp_c / (temp_c + 243.5)).exp()
}

/// 건구온도와 상대습도(%)로 습도비를 계산한다.
///
/// W = 0.622 · Pv / (P − Pv). 수증기분압은 전압 아래로 클램프하여
/// 분모가 0 이하가 되거나 음의 습도비가 나오지 않게 한다.
pub fn humidity_ratio_from_relative_humidity(temp_c: f64, rel_humidity_pct: f64) -> f64 {
    let rh = (rel_humidity_pct / 100.0).clamp(0.0, 1.0);
    let pv = (rh * saturation_vapor_pressure_pa(temp_c)).min(ATMOSPHERIC_PRESSURE_PA - 1.0);
    0.622 * pv / (ATMOSPHERIC_PRESSURE_PA - pv)
}

/// 습도비로부터 상대습도(%)를 역산한다. 과포화 입력은 100%로 보고한다.
pub fn relative_humidity_from_humidity_ratio(temp_c: f64, humidity_ratio: f64) -> f64 {
    let pv = vapor_pressure_from_humidity_ratio(humidity_ratio);
    (pv / saturation_vapor_pressure_pa(temp_c) * 100.0).clamp(0.0, 100.0)
}

/// 습도비에 해당하는 수증기분압 [Pa]을 구한다.
pub fn vapor_pressure_from_humidity_ratio(humidity_ratio: f64) -> f64 {
    let w = humidity_ratio.max(0.0);
    w * ATMOSPHERIC_PRESSURE_PA / (0.622 + w)
}

/// 습공기 비엔탈피 [kJ/kg건공기]를 계산한다.
///
/// h = 1.006·T + W·(2501 + 1.86·T)
pub fn enthalpy_kj_per_kg(temp_c: f64, humidity_ratio: f64) -> f64 {
    1.006 * temp_c + humidity_ratio * (2501.0 + 1.86 * temp_c)
}

/// 수증기분압으로부터 노점 온도를 계산한다 (Magnus 역산).
///
/// Td = 243.5·ln(e/611.2) / (17.67 − ln(e/611.2)).
/// e ≤ 0이면 물리적 의미가 없으므로 [`DEW_POINT_FLOOR_C`](-50°C)를 반환한다.
pub fn dew_point_from_vapor_pressure(vapor_pressure_pa: f64) -> f64 {
    if vapor_pressure_pa <= 0.0 {
        return DEW_POINT_FLOOR_C;
    }
    let ln_ratio = (vapor_pressure_pa / 611.2).ln();
    (243.5 * ln_ratio / (17.67 - ln_ratio)).max(DEW_POINT_FLOOR_C)
}

/// 습도비로부터 노점 온도를 계산한다.
pub fn dew_point_from_humidity_ratio(humidity_ratio: f64) -> f64 {
    dew_point_from_vapor_pressure(vapor_pressure_from_humidity_ratio(humidity_ratio))
}

/// 목표 습도비까지 제습하기 위한 냉각코일 출구 온도 [°C].
///
/// 정확히 노점까지만 냉각하면 응축 구동 온도차가 0이 되어 수치적으로
/// 불안정하므로, 노점에서 `margin_k`만큼 낮춘 온도를 쓴다.
pub fn required_cooling_temperature_c(target_humidity_ratio: f64, margin_k: f64) -> f64 {
    dew_point_from_humidity_ratio(target_humidity_ratio) - margin_k
}

/// 온도와 습도 입력으로 습공기 상태점을 구성한다.
///
/// 상대습도/습도비 중 주어진 쪽이 독립 입력이고 나머지는 항상 유도한다.
pub fn compute_air_state(temp_c: f64, humidity: Humidity) -> Result<MoistAirState, PsychroError> {
    if !(TEMP_GUARD_MIN_C..=TEMP_GUARD_MAX_C).contains(&temp_c) || temp_c.is_nan() {
        return Err(PsychroError::TemperatureOutOfRange(temp_c));
    }
    match humidity {
        Humidity::RelativePct(rh) => {
            if !(0.0..=100.0).contains(&rh) || rh.is_nan() {
                return Err(PsychroError::RelativeHumidityOutOfRange(rh));
            }
            Ok(state_from_relative_humidity(temp_c, rh))
        }
        Humidity::AbsoluteGPerKg(w_g) => {
            if w_g < 0.0 || w_g.is_nan() {
                return Err(PsychroError::NegativeHumidityRatio(w_g / 1000.0));
            }
            Ok(state_from_humidity_ratio(temp_c, w_g / 1000.0))
        }
    }
}

/// 검증이 끝난 온도/상대습도로 상태점을 만든다 (내부용).
pub(crate) fn state_from_relative_humidity(temp_c: f64, rel_humidity_pct: f64) -> MoistAirState {
    let w = humidity_ratio_from_relative_humidity(temp_c, rel_humidity_pct);
    MoistAirState {
        temperature_c: temp_c,
        relative_humidity_pct: rel_humidity_pct.clamp(0.0, 100.0),
        humidity_ratio: w,
        enthalpy_kj_per_kg: enthalpy_kj_per_kg(temp_c, w),
        dew_point_c: dew_point_from_humidity_ratio(w),
    }
}

/// 검증이 끝난 온도/습도비로 상태점을 만든다 (내부용).
pub(crate) fn state_from_humidity_ratio(temp_c: f64, humidity_ratio: f64) -> MoistAirState {
    let w = humidity_ratio.max(0.0);
    MoistAirState {
        temperature_c: temp_c,
        relative_humidity_pct: relative_humidity_from_humidity_ratio(temp_c, w),
        humidity_ratio: w,
        enthalpy_kj_per_kg: enthalpy_kj_per_kg(temp_c, w),
        dew_point_c: dew_point_from_humidity_ratio(w),
    }
}
