//! 외기 → 열회수 → 제습냉각 → 재열/가열 → 급기의 고정 파이프라인을
//! 한 번 실행해 중간 상태점 목록과 단계별 비에너지를 산출한다.
//!
//! 루프/재시도 없는 순수 계산이며, 같은 입력에 대해 항상 같은 결과를 낸다.
//! 캐싱은 호출자(프레젠테이션 계층)의 몫이다.

use crate::psychro::{
    self, required_cooling_temperature_c, state_from_humidity_ratio, state_from_relative_humidity,
    Humidity, MoistAirState, PsychroError, DEFAULT_DEW_POINT_MARGIN_K,
};

/// 운전 모드.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingMode {
    /// 가열 전용 (습도비 유지). 외기가 목표보다 더우면 현열 냉각으로 대칭 동작한다.
    HeatingOnly,
    /// 제습 운전 (냉각 제습 후 필요 시 재열).
    Dehumidify,
}

/// 프로세스 상의 공기 위치를 나타내는 태그. 물리량을 담지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStation {
    /// 외기
    OutdoorAir,
    /// 열회수(WRG) 통과 후
    AfterHeatRecovery,
    /// 냉각코일(제습) 통과 후
    AfterCoolingCoil,
    /// 급기
    SupplyAir,
}

/// 에너지를 주고받는 처리 단계.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStage {
    /// 열회수로 회수한 에너지 (코일이 부담하지 않는 몫)
    HeatRecoveryGain,
    /// 제습을 위한 냉각코일 에너지
    DehumidificationCooling,
    /// 제습 후 재열 에너지
    Reheat,
    /// 직접 가열 에너지
    DirectHeating,
    /// 직접(현열) 냉각 에너지
    DirectCooling,
}

/// 프로세스 한 지점의 상태.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessStep {
    pub station: ProcessStation,
    pub state: MoistAirState,
}

/// 단계별 비에너지 항목. 값은 항상 0 이상이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageEnergy {
    pub stage: ProcessStage,
    /// 비에너지 [kJ/kg건공기]
    pub specific_energy_kj_per_kg: f64,
}

/// 시뮬레이션 입력. 호출마다 값으로 전달되며 내부에서 변경하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessInput {
    /// 외기 온도 [°C]
    pub outdoor_temp_c: f64,
    /// 외기 상대습도 [%]
    pub outdoor_rel_humidity_pct: f64,
    /// 급기 목표 온도 [°C]
    pub supply_temp_c: f64,
    /// 급기 목표 습도 (제습 모드에서 사용)
    pub supply_humidity: Humidity,
    /// 열회수 효율 (0=없음 ~ 1). UI는 0.95까지만 허용한다.
    pub heat_recovery_effectiveness: f64,
    /// 운전 모드
    pub mode: OperatingMode,
    /// 냉각코일 출구를 노점보다 낮출 안전 여유 [K]
    pub dew_point_margin_k: f64,
}

impl ProcessInput {
    /// 기본 안전 여유(1K)를 사용하는 입력을 만든다.
    pub fn new(
        outdoor_temp_c: f64,
        outdoor_rel_humidity_pct: f64,
        supply_temp_c: f64,
        supply_humidity: Humidity,
        heat_recovery_effectiveness: f64,
        mode: OperatingMode,
    ) -> Self {
        Self {
            outdoor_temp_c,
            outdoor_rel_humidity_pct,
            supply_temp_c,
            supply_humidity,
            heat_recovery_effectiveness,
            mode,
            dew_point_margin_k: DEFAULT_DEW_POINT_MARGIN_K,
        }
    }
}

/// 시뮬레이션 결과. 상태점은 공기 흐름 순서대로 쌓이며 이후 불변이다.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessResult {
    /// 외기 → 급기 순서의 상태점 목록
    pub steps: Vec<ProcessStep>,
    /// 실제 적용된 단계의 비에너지 목록 (미적용 단계는 포함하지 않음)
    pub stage_energies: Vec<StageEnergy>,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

impl ProcessResult {
    /// 해당 단계의 비에너지 [kJ/kg]를 돌려준다. 미적용 단계는 0.
    pub fn energy_for(&self, stage: ProcessStage) -> f64 {
        self.stage_energies
            .iter()
            .find(|e| e.stage == stage)
            .map(|e| e.specific_energy_kj_per_kg)
            .unwrap_or(0.0)
    }

    /// 해당 위치의 상태점을 돌려준다.
    pub fn step_at(&self, station: ProcessStation) -> Option<&MoistAirState> {
        self.steps
            .iter()
            .find(|s| s.station == station)
            .map(|s| &s.state)
    }

    fn push_step(&mut self, station: ProcessStation, state: MoistAirState) {
        self.steps.push(ProcessStep { station, state });
    }

    fn push_energy(&mut self, stage: ProcessStage, specific_energy_kj_per_kg: f64) {
        self.stage_energies.push(StageEnergy {
            stage,
            specific_energy_kj_per_kg: specific_energy_kj_per_kg.max(0.0),
        });
    }
}

/// 프로세스 계산의 입력 검증 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessError {
    /// 습공기 물성 입력 오류
    Psychro(PsychroError),
    /// 열회수 효율이 0~1 범위를 벗어남
    InvalidEffectiveness(f64),
}

impl std::fmt::Display for ProcessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessError::Psychro(e) => write!(f, "습공기 물성 오류: {e}"),
            ProcessError::InvalidEffectiveness(v) => {
                write!(f, "열회수 효율 범위 초과(0~1): {v}")
            }
        }
    }
}

impl std::error::Error for ProcessError {}

impl From<PsychroError> for ProcessError {
    fn from(value: PsychroError) -> Self {
        ProcessError::Psychro(value)
    }
}

// 온도 비교 시 부동소수점 잡음을 무시하기 위한 허용오차 [K].
const TEMP_EPS_K: f64 = 1e-9;

/// 외기 상태에서 급기 조건까지의 처리 과정을 시뮬레이션한다.
///
/// 단계 에너지는 모두 0 이상으로 클램프한다. 제습 모드인데 외기 습도비가
/// 이미 목표 이하이면 아무 처리도 하지 않고 경고만 남긴다.
pub fn simulate_process(input: &ProcessInput) -> Result<ProcessResult, ProcessError> {
    let eff = input.heat_recovery_effectiveness;
    if !(0.0..=1.0).contains(&eff) || eff.is_nan() {
        return Err(ProcessError::InvalidEffectiveness(eff));
    }

    let outdoor = psychro::compute_air_state(
        input.outdoor_temp_c,
        Humidity::RelativePct(input.outdoor_rel_humidity_pct),
    )?;
    // 급기 목표 입력도 같은 경로로 검증한다.
    let supply_target = psychro::compute_air_state(input.supply_temp_c, input.supply_humidity)?;

    let mut result = ProcessResult {
        steps: Vec::new(),
        stage_energies: Vec::new(),
        warnings: Vec::new(),
    };
    result.push_step(ProcessStation::OutdoorAir, outdoor);
    let mut current = outdoor;

    // 1) 열회수: 현열 전용 모델. 습도비는 바뀌지 않는다.
    if eff > 0.0 {
        let t_after = current.temperature_c + (input.supply_temp_c - current.temperature_c) * eff;
        let after = state_from_humidity_ratio(t_after, current.humidity_ratio);
        // 냉방기(목표 < 외기)에도 회수량을 양수로 보고하기 위해 크기로 기록한다.
        let recovered = (after.enthalpy_kj_per_kg - current.enthalpy_kj_per_kg).abs();
        result.push_energy(ProcessStage::HeatRecoveryGain, recovered);
        result.push_step(ProcessStation::AfterHeatRecovery, after);
        current = after;
    }

    // 2) 모드별 습도/온도 처리
    match input.mode {
        OperatingMode::Dehumidify => {
            let target_w = supply_target.humidity_ratio;
            if current.humidity_ratio > target_w {
                // 냉각 제습: 목표 습도비의 노점 아래까지 냉각해 응축을 보장한다.
                let coil_t = required_cooling_temperature_c(target_w, input.dew_point_margin_k);
                let coil = state_from_humidity_ratio(coil_t, target_w);
                result.push_energy(
                    ProcessStage::DehumidificationCooling,
                    current.enthalpy_kj_per_kg - coil.enthalpy_kj_per_kg,
                );
                result.push_step(ProcessStation::AfterCoolingCoil, coil);
                current = coil;

                if coil.temperature_c < input.supply_temp_c {
                    let supply = state_from_humidity_ratio(input.supply_temp_c, target_w);
                    result.push_energy(
                        ProcessStage::Reheat,
                        supply.enthalpy_kj_per_kg - coil.enthalpy_kj_per_kg,
                    );
                    result.push_step(ProcessStation::SupplyAir, supply);
                }
            } else {
                result
                    .warnings
                    .push("제습 모드이지만 외기 습도비가 이미 목표 이하라 제습이 불필요합니다.".into());
            }
        }
        OperatingMode::HeatingOnly => {
            if current.temperature_c < input.supply_temp_c - TEMP_EPS_K {
                let supply = state_from_humidity_ratio(input.supply_temp_c, current.humidity_ratio);
                result.push_energy(
                    ProcessStage::DirectHeating,
                    supply.enthalpy_kj_per_kg - current.enthalpy_kj_per_kg,
                );
                result.push_step(ProcessStation::SupplyAir, supply);
            } else if current.temperature_c > input.supply_temp_c + TEMP_EPS_K {
                // 현열 냉각: 습도비 유지. 냉각으로 상대습도가 100%를 넘으면 100%로 보고된다.
                let supply = state_from_humidity_ratio(input.supply_temp_c, current.humidity_ratio);
                result.push_energy(
                    ProcessStage::DirectCooling,
                    current.enthalpy_kj_per_kg - supply.enthalpy_kj_per_kg,
                );
                result.push_step(ProcessStation::SupplyAir, supply);
            }
        }
    }

    Ok(result)
}

/// 주어진 온도에서 상대습도 100%일 때의 습도비. 차트의 포화곡선 표시에 쓴다.
pub fn saturation_humidity_ratio(temp_c: f64) -> f64 {
    state_from_relative_humidity(temp_c, 100.0).humidity_ratio
}
