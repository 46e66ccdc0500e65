use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{Config, UnitSystem};
use crate::conversion;
use crate::i18n::{self, keys, Translator};
use crate::plant::{compute_energy_cost, EnergyCostInput};
use crate::process::{simulate_process, OperatingMode, ProcessInput, ProcessResult};
use crate::psychro::{compute_air_state, Humidity, MoistAirState};
use crate::quantity::QuantityKind;
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    AirState,
    ProcessSimulation,
    AnnualCost,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_AIR_STATE));
    println!("{}", tr.t(keys::MAIN_MENU_PROCESS));
    println!("{}", tr.t(keys::MAIN_MENU_ANNUAL_COST));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::AirState),
            "3" => return Ok(MenuChoice::ProcessSimulation),
            "4" => return Ok(MenuChoice::AnnualCost),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::HELP_UNIT_CONVERSION));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Temperature),
        2 => Some(QuantityKind::TemperatureDifference),
        3 => Some(QuantityKind::Airflow),
        4 => Some(QuantityKind::Power),
        5 => Some(QuantityKind::Energy),
        6 => Some(QuantityKind::SpecificEnthalpy),
        7 => Some(QuantityKind::HumidityRatio),
        _ => None,
    }
}

/// 습공기 상태점 메뉴를 처리한다.
pub fn handle_air_state(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::AIR_STATE_HEADING));
    println!("{}", tr.t(keys::HELP_AIR_STATE));
    let temp = read_f64(tr, tr.t(keys::AIR_STATE_PROMPT_TEMP))?;
    let mode = read_line(tr.t(keys::AIR_STATE_PROMPT_HUMIDITY_MODE))?;
    let humidity = if mode.trim() == "2" {
        Humidity::AbsoluteGPerKg(read_f64(tr, tr.t(keys::AIR_STATE_PROMPT_W_ABS))?)
    } else {
        Humidity::RelativePct(read_f64(tr, tr.t(keys::AIR_STATE_PROMPT_RH))?)
    };
    let state = compute_air_state(temp, humidity)?;
    print_state(tr, &state);
    Ok(())
}

/// 프로세스 입력을 프롬프트로 받는다.
fn prompt_process_input(tr: &Translator) -> Result<ProcessInput, AppError> {
    let outdoor_temp = read_f64(tr, tr.t(keys::PROCESS_PROMPT_OUTDOOR_TEMP))?;
    let outdoor_rh = read_f64(tr, tr.t(keys::PROCESS_PROMPT_OUTDOOR_RH))?;
    let supply_temp = read_f64(tr, tr.t(keys::PROCESS_PROMPT_SUPPLY_TEMP))?;
    let mode_sel = read_line(tr.t(keys::PROCESS_PROMPT_MODE))?;
    let (mode, supply_humidity) = if mode_sel.trim() == "2" {
        let rh = read_f64(tr, tr.t(keys::PROCESS_PROMPT_SUPPLY_RH))?;
        (OperatingMode::Dehumidify, Humidity::RelativePct(rh))
    } else {
        // 가열 전용에서는 급기 습도 목표가 쓰이지 않는다.
        (OperatingMode::HeatingOnly, Humidity::RelativePct(50.0))
    };
    let eff_pct = read_f64(tr, tr.t(keys::PROCESS_PROMPT_HR_EFF))?;
    Ok(ProcessInput::new(
        outdoor_temp,
        outdoor_rh,
        supply_temp,
        supply_humidity,
        eff_pct / 100.0,
        mode,
    ))
}

/// 공기처리 프로세스 메뉴를 처리한다.
pub fn handle_process_simulation(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PROCESS_HEADING));
    println!("{}", tr.t(keys::HELP_PROCESS));
    let input = prompt_process_input(tr)?;
    let result = simulate_process(&input)?;
    print_process(tr, &result);
    Ok(())
}

/// 연간 에너지 비용 메뉴를 처리한다. 프로세스 시뮬레이션을 포함한다.
pub fn handle_annual_cost(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COST_HEADING));
    println!("{}", tr.t(keys::HELP_ANNUAL_COST));
    let input = prompt_process_input(tr)?;
    let process = simulate_process(&input)?;

    let d = &cfg.plant_defaults;
    let cost_input = EnergyCostInput {
        airflow_m3_per_h: read_f64_default(tr, tr.t(keys::COST_PROMPT_AIRFLOW), d.airflow_m3_per_h)?,
        hours_per_day: read_f64_default(tr, tr.t(keys::COST_PROMPT_HOURS), d.hours_per_day)?,
        days_per_year: read_f64_default(tr, tr.t(keys::COST_PROMPT_DAYS), d.days_per_year)?,
        specific_fan_power_w_per_m3h: read_f64_default(
            tr,
            tr.t(keys::COST_PROMPT_SFP),
            d.specific_fan_power_w_per_m3h,
        )?,
        electricity_price_per_kwh: read_f64_default(
            tr,
            tr.t(keys::COST_PROMPT_ELEC_PRICE),
            d.electricity_price_per_kwh,
        )?,
        heat_price_per_kwh: read_f64_default(
            tr,
            tr.t(keys::COST_PROMPT_HEAT_PRICE),
            d.heat_price_per_kwh,
        )?,
        cooling_price_per_kwh: read_f64_default(
            tr,
            tr.t(keys::COST_PROMPT_COOL_PRICE),
            d.cooling_price_per_kwh,
        )?,
        co2_factor_kg_per_kwh: read_f64_default(
            tr,
            tr.t(keys::COST_PROMPT_CO2_FACTOR),
            d.co2_factor_kg_per_kwh,
        )?,
    };
    let cost = compute_energy_cost(cost_input.clone(), &process);

    println!();
    print!("{}", report::build_report(tr, &input, &process, &cost_input, &cost));
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::HELP_SETTINGS));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!(
        "{} {:?}",
        tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM),
        cfg.unit_system
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
            let lang = read_line(tr.t(keys::PROMPT_SELECT))?;
            cfg.language = match lang.trim() {
                "1" => "ko-kr".into(),
                "2" => "en-us".into(),
                "3" => "de-de".into(),
                "4" => "auto".into(),
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    cfg.language.clone()
                }
            };
        }
        "2" => {
            println!("{}", tr.t(keys::SETTINGS_UNIT_SYSTEM_OPTIONS));
            let sys = read_line(tr.t(keys::PROMPT_SELECT))?;
            match sys.trim() {
                "1" => cfg.apply_unit_system(UnitSystem::Si),
                "2" => cfg.apply_unit_system(UnitSystem::Imperial),
                _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
            }
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 기본값이 있는 숫자 입력. 빈 입력이면 기본값을 사용한다.
fn read_f64_default(tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{prompt}[{default}] "))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn print_state(tr: &Translator, state: &MoistAirState) {
    println!(
        "{} {:.2} °C",
        tr.t(keys::STATE_TEMPERATURE),
        state.temperature_c
    );
    println!(
        "{} {:.1} %",
        tr.t(keys::STATE_REL_HUMIDITY),
        state.relative_humidity_pct
    );
    println!(
        "{} {:.2} g/kg",
        tr.t(keys::STATE_HUMIDITY_RATIO),
        state.humidity_ratio * 1000.0
    );
    println!(
        "{} {:.2} kJ/kg",
        tr.t(keys::STATE_ENTHALPY),
        state.enthalpy_kj_per_kg
    );
    println!("{} {:.2} °C", tr.t(keys::STATE_DEW_POINT), state.dew_point_c);
}

fn print_process(tr: &Translator, result: &ProcessResult) {
    println!("{}", tr.t(keys::PROCESS_STEPS_HEADING));
    for step in &result.steps {
        let s = &step.state;
        println!(
            "  {:<22} {:6.2} °C  {:5.1} %  {:6.2} g/kg  {:7.2} kJ/kg",
            tr.t(i18n::station_key(step.station)),
            s.temperature_c,
            s.relative_humidity_pct,
            s.humidity_ratio * 1000.0,
            s.enthalpy_kj_per_kg
        );
    }
    println!("{}", tr.t(keys::PROCESS_STAGES_HEADING));
    for entry in &result.stage_energies {
        println!(
            "  {:<26} {:7.2} kJ/kg",
            tr.t(i18n::stage_key(entry.stage)),
            entry.specific_energy_kj_per_kg
        );
    }
    if !result.warnings.is_empty() {
        println!("{}", tr.t(keys::PROCESS_WARNINGS_HEADING));
        for w in &result.warnings {
            println!("  - {w}");
        }
    }
}
