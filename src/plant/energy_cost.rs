use crate::plant::fan_power::{compute_fan_power, FanPowerInput};
use crate::process::{ProcessResult, ProcessStage};

/// 공기 밀도 가정값 [kg/m³]. 단순 설계점 계산이므로 고정한다.
pub const AIR_DENSITY_KG_PER_M3: f64 = 1.2;

/// 연간 에너지/비용 계산 입력.
#[derive(Debug, Clone)]
pub struct EnergyCostInput {
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
    /// 열(난방) 단가 [통화/kWh]
    pub heat_price_per_kwh: f64,
    /// 냉열(냉방) 단가 [통화/kWh]
    pub cooling_price_per_kwh: f64,
    /// CO₂ 배출계수 [kg/kWh]
    pub co2_factor_kg_per_kwh: f64,
}

/// 연간 에너지/비용 계산 결과.
#[derive(Debug, Clone)]
pub struct EnergyCostResult {
    /// 공기 질량유량 [kg/s]
    pub mass_flow_kg_per_s: f64,
    /// 팬 동력 [kW]
    pub fan_power_kw: f64,
    /// 가열 동력 [kW] (직접가열 + 재열)
    pub heating_power_kw: f64,
    /// 냉각 동력 [kW] (제습냉각 + 현열냉각)
    pub cooling_power_kw: f64,
    /// 열회수로 회수한 동력 [kW] (비용 청구 대상 아님)
    pub recovered_power_kw: f64,
    /// 연간 운전 시간 [h]
    pub annual_hours: f64,
    /// 연간 팬 전력량 [kWh]
    pub annual_fan_kwh: f64,
    /// 연간 가열 열량 [kWh]
    pub annual_heating_kwh: f64,
    /// 연간 냉각 열량 [kWh]
    pub annual_cooling_kwh: f64,
    /// 연간 팬 비용
    pub annual_fan_cost: f64,
    /// 연간 난방 비용
    pub annual_heating_cost: f64,
    /// 연간 냉방 비용
    pub annual_cooling_cost: f64,
    /// 연간 총 비용
    pub annual_total_cost: f64,
    /// 연간 CO₂ 배출량 [kg]
    pub annual_co2_kg: f64,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

/// 프로세스 결과(kJ/kg)를 질량유량과 곱해 동력(kW)으로 바꾸고,
/// 운전 스케줄·단가를 적용해 연간 에너지/비용/CO₂를 집계한다.
pub fn compute_energy_cost(input: EnergyCostInput, process: &ProcessResult) -> EnergyCostResult {
    let mass_flow_kg_per_s = input.airflow_m3_per_h.max(0.0) / 3600.0 * AIR_DENSITY_KG_PER_M3;

    // kJ/kg × kg/s = kW
    let to_kw = |stage: ProcessStage| process.energy_for(stage) * mass_flow_kg_per_s;
    let heating_power_kw = to_kw(ProcessStage::DirectHeating) + to_kw(ProcessStage::Reheat);
    let cooling_power_kw =
        to_kw(ProcessStage::DehumidificationCooling) + to_kw(ProcessStage::DirectCooling);
    let recovered_power_kw = to_kw(ProcessStage::HeatRecoveryGain);

    let fan = compute_fan_power(FanPowerInput {
        airflow_m3_per_h: input.airflow_m3_per_h,
        specific_fan_power_w_per_m3h: input.specific_fan_power_w_per_m3h,
    });

    let annual_hours = input.hours_per_day.clamp(0.0, 24.0) * input.days_per_year.clamp(0.0, 366.0);

    let annual_fan_kwh = fan.power_kw * annual_hours;
    let annual_heating_kwh = heating_power_kw * annual_hours;
    let annual_cooling_kwh = cooling_power_kw * annual_hours;

    let annual_fan_cost = annual_fan_kwh * input.electricity_price_per_kwh.max(0.0);
    let annual_heating_cost = annual_heating_kwh * input.heat_price_per_kwh.max(0.0);
    let annual_cooling_cost = annual_cooling_kwh * input.cooling_price_per_kwh.max(0.0);

    let mut warnings = fan.warnings;
    if annual_hours <= 0.0 {
        warnings.push("연간 운전 시간이 0입니다. 스케줄 입력을 확인하세요.".into());
    }

    EnergyCostResult {
        mass_flow_kg_per_s,
        fan_power_kw: fan.power_kw,
        heating_power_kw,
        cooling_power_kw,
        recovered_power_kw,
        annual_hours,
        annual_fan_kwh,
        annual_heating_kwh,
        annual_cooling_kwh,
        annual_fan_cost,
        annual_heating_cost,
        annual_cooling_cost,
        annual_total_cost: annual_fan_cost + annual_heating_cost + annual_cooling_cost,
        annual_co2_kg: (annual_fan_kwh + annual_heating_kwh + annual_cooling_kwh)
            * input.co2_factor_kg_per_kwh.max(0.0),
        warnings,
    }
}
