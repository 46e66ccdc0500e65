use hvac_energy_toolbox::plant::{
    compute_energy_cost, compute_fan_power, EnergyCostInput, FanPowerInput,
    AIR_DENSITY_KG_PER_M3,
};
use hvac_energy_toolbox::process::{ProcessResult, ProcessStage, StageEnergy};

fn stage(stage: ProcessStage, kj_per_kg: f64) -> StageEnergy {
    StageEnergy {
        stage,
        specific_energy_kj_per_kg: kj_per_kg,
    }
}

fn default_cost_input() -> EnergyCostInput {
    EnergyCostInput {
        airflow_m3_per_h: 10_000.0,
        hours_per_day: 12.0,
        days_per_year: 250.0,
        specific_fan_power_w_per_m3h: 2.5,
        electricity_price_per_kwh: 0.25,
        heat_price_per_kwh: 0.08,
        cooling_price_per_kwh: 0.15,
        co2_factor_kg_per_kwh: 0.4,
    }
}

#[test]
fn fan_power_from_sfp() {
    // 10,000 m³/h × 2.5 W/(m³/h) = 25 kW
    let res = compute_fan_power(FanPowerInput {
        airflow_m3_per_h: 10_000.0,
        specific_fan_power_w_per_m3h: 2.5,
    });
    assert!((res.power_kw - 25.0).abs() < 1e-9);
    assert!(res.warnings.is_empty());
}

#[test]
fn fan_power_warns_on_implausible_sfp() {
    let res = compute_fan_power(FanPowerInput {
        airflow_m3_per_h: 1_000.0,
        specific_fan_power_w_per_m3h: 8.0,
    });
    assert!((res.power_kw - 8.0).abs() < 1e-9);
    assert_eq!(res.warnings.len(), 1);
}

#[test]
fn mass_flow_uses_fixed_air_density() {
    let process = ProcessResult {
        steps: vec![],
        stage_energies: vec![],
        warnings: vec![],
    };
    let res = compute_energy_cost(default_cost_input(), &process);
    // 10,000 m³/h / 3600 × 1.2 kg/m³ = 3.333… kg/s
    let expected = 10_000.0 / 3600.0 * AIR_DENSITY_KG_PER_M3;
    assert!((res.mass_flow_kg_per_s - expected).abs() < 1e-9);
}

#[test]
fn annual_cost_arithmetic() {
    // 가열 12+3 kJ/kg, 냉각 6 kJ/kg, 질량유량 3.333 kg/s.
    let process = ProcessResult {
        steps: vec![],
        stage_energies: vec![
            stage(ProcessStage::DirectHeating, 12.0),
            stage(ProcessStage::Reheat, 3.0),
            stage(ProcessStage::DehumidificationCooling, 6.0),
        ],
        warnings: vec![],
    };
    let res = compute_energy_cost(default_cost_input(), &process);
    let m = 10_000.0 / 3600.0 * AIR_DENSITY_KG_PER_M3;

    assert!((res.heating_power_kw - 15.0 * m).abs() < 1e-9);
    assert!((res.cooling_power_kw - 6.0 * m).abs() < 1e-9);
    assert!((res.annual_hours - 3000.0).abs() < 1e-12);

    assert!((res.annual_fan_kwh - 25.0 * 3000.0).abs() < 1e-6);
    assert!((res.annual_fan_cost - res.annual_fan_kwh * 0.25).abs() < 1e-6);
    assert!((res.annual_heating_cost - res.annual_heating_kwh * 0.08).abs() < 1e-6);
    assert!((res.annual_cooling_cost - res.annual_cooling_kwh * 0.15).abs() < 1e-6);
    assert!(
        (res.annual_total_cost
            - (res.annual_fan_cost + res.annual_heating_cost + res.annual_cooling_cost))
            .abs()
            < 1e-9
    );
    let total_kwh = res.annual_fan_kwh + res.annual_heating_kwh + res.annual_cooling_kwh;
    assert!((res.annual_co2_kg - total_kwh * 0.4).abs() < 1e-6);
}

#[test]
fn recovered_energy_is_not_billed() {
    let process = ProcessResult {
        steps: vec![],
        stage_energies: vec![
            stage(ProcessStage::HeatRecoveryGain, 10.0),
            stage(ProcessStage::DirectHeating, 4.0),
        ],
        warnings: vec![],
    };
    let res = compute_energy_cost(default_cost_input(), &process);
    let m = 10_000.0 / 3600.0 * AIR_DENSITY_KG_PER_M3;
    assert!((res.recovered_power_kw - 10.0 * m).abs() < 1e-9);
    // 회수 에너지는 동력으로만 보고되고 비용에는 들어가지 않는다.
    assert!((res.annual_heating_kwh - 4.0 * m * 3000.0).abs() < 1e-6);
}

#[test]
fn zero_schedule_warns() {
    let process = ProcessResult {
        steps: vec![],
        stage_energies: vec![],
        warnings: vec![],
    };
    let mut input = default_cost_input();
    input.hours_per_day = 0.0;
    let res = compute_energy_cost(input, &process);
    assert_eq!(res.annual_hours, 0.0);
    assert!(!res.warnings.is_empty());
}
