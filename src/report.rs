//! CLI 출력과 GUI 저장에 공용으로 쓰는 텍스트 리포트 생성기.

use crate::i18n::{self, keys, Translator};
use crate::plant::{EnergyCostInput, EnergyCostResult};
use crate::process::{OperatingMode, ProcessInput, ProcessResult};

/// 프로세스/비용 결과를 사람이 읽을 수 있는 리포트 문자열로 만든다.
pub fn build_report(
    tr: &Translator,
    process_input: &ProcessInput,
    process: &ProcessResult,
    cost_input: &EnergyCostInput,
    cost: &EnergyCostResult,
) -> String {
    let mut out = String::new();
    let mut line = |s: String| {
        out.push_str(&s);
        out.push('\n');
    };

    line(format!("=== {} ===", tr.t(keys::REPORT_TITLE)));
    line(String::new());

    line(format!("[{}]", tr.t(keys::REPORT_INPUTS_HEADING)));
    line(format!(
        "{} {:.0} m³/h",
        tr.t(keys::REPORT_AIRFLOW),
        cost_input.airflow_m3_per_h
    ));
    line(format!(
        "{} {:.0} h/d × {:.0} d/a",
        tr.t(keys::REPORT_SCHEDULE),
        cost_input.hours_per_day,
        cost_input.days_per_year
    ));
    let mode_label = match process_input.mode {
        OperatingMode::HeatingOnly => tr.t(keys::REPORT_MODE_HEATING),
        OperatingMode::Dehumidify => tr.t(keys::REPORT_MODE_DEHUMIDIFY),
    };
    line(format!("{} {}", tr.t(keys::REPORT_MODE), mode_label));
    line(format!(
        "{} {:.0} %",
        tr.t(keys::REPORT_HR_EFF),
        process_input.heat_recovery_effectiveness * 100.0
    ));
    line(String::new());

    line(format!("[{}]", tr.t(keys::PROCESS_STEPS_HEADING)));
    for step in &process.steps {
        let s = &step.state;
        line(format!(
            "  {:<22} {:6.2} °C  {:5.1} %  {:6.2} g/kg  {:7.2} kJ/kg",
            tr.t(i18n::station_key(step.station)),
            s.temperature_c,
            s.relative_humidity_pct,
            s.humidity_ratio * 1000.0,
            s.enthalpy_kj_per_kg
        ));
    }
    line(String::new());

    line(format!("[{}]", tr.t(keys::PROCESS_STAGES_HEADING)));
    for entry in &process.stage_energies {
        line(format!(
            "  {:<26} {:7.2} kJ/kg",
            tr.t(i18n::stage_key(entry.stage)),
            entry.specific_energy_kj_per_kg
        ));
    }
    line(String::new());

    line(format!(
        "{} {:.1} kW",
        tr.t(keys::COST_FAN_POWER),
        cost.fan_power_kw
    ));
    line(format!(
        "{} {:.1} kW",
        tr.t(keys::COST_HEATING_POWER),
        cost.heating_power_kw
    ));
    line(format!(
        "{} {:.1} kW",
        tr.t(keys::COST_COOLING_POWER),
        cost.cooling_power_kw
    ));
    line(format!(
        "{} {:.1} kW",
        tr.t(keys::COST_RECOVERED_POWER),
        cost.recovered_power_kw
    ));
    line(format!(
        "{} {:.0} h",
        tr.t(keys::COST_ANNUAL_HOURS),
        cost.annual_hours
    ));
    line(format!(
        "{} {:.0}",
        tr.t(keys::COST_ANNUAL_FAN),
        cost.annual_fan_cost
    ));
    line(format!(
        "{} {:.0}",
        tr.t(keys::COST_ANNUAL_HEATING),
        cost.annual_heating_cost
    ));
    line(format!(
        "{} {:.0}",
        tr.t(keys::COST_ANNUAL_COOLING),
        cost.annual_cooling_cost
    ));
    line(format!(
        "{} {:.0}",
        tr.t(keys::COST_ANNUAL_TOTAL),
        cost.annual_total_cost
    ));
    line(format!(
        "{} {:.0} kg",
        tr.t(keys::COST_ANNUAL_CO2),
        cost.annual_co2_kg
    ));

    let warnings: Vec<&String> = process.warnings.iter().chain(cost.warnings.iter()).collect();
    if !warnings.is_empty() {
        line(String::new());
        line(format!("[{}]", tr.t(keys::PROCESS_WARNINGS_HEADING)));
        for w in warnings {
            line(format!("  - {w}"));
        }
    }

    out
}
