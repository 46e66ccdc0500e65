use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_AIR_STATE: &str = "main_menu.air_state";
    pub const MAIN_MENU_PROCESS: &str = "main_menu.process";
    pub const MAIN_MENU_ANNUAL_COST: &str = "main_menu.annual_cost";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const AIR_STATE_HEADING: &str = "air_state.heading";
    pub const AIR_STATE_PROMPT_TEMP: &str = "air_state.prompt_temp";
    pub const AIR_STATE_PROMPT_HUMIDITY_MODE: &str = "air_state.prompt_humidity_mode";
    pub const AIR_STATE_PROMPT_RH: &str = "air_state.prompt_rh";
    pub const AIR_STATE_PROMPT_W_ABS: &str = "air_state.prompt_w_abs";

    pub const STATE_TEMPERATURE: &str = "state.temperature";
    pub const STATE_REL_HUMIDITY: &str = "state.rel_humidity";
    pub const STATE_HUMIDITY_RATIO: &str = "state.humidity_ratio";
    pub const STATE_ENTHALPY: &str = "state.enthalpy";
    pub const STATE_DEW_POINT: &str = "state.dew_point";

    pub const PROCESS_HEADING: &str = "process.heading";
    pub const PROCESS_PROMPT_OUTDOOR_TEMP: &str = "process.prompt_outdoor_temp";
    pub const PROCESS_PROMPT_OUTDOOR_RH: &str = "process.prompt_outdoor_rh";
    pub const PROCESS_PROMPT_SUPPLY_TEMP: &str = "process.prompt_supply_temp";
    pub const PROCESS_PROMPT_MODE: &str = "process.prompt_mode";
    pub const PROCESS_PROMPT_SUPPLY_RH: &str = "process.prompt_supply_rh";
    pub const PROCESS_PROMPT_HR_EFF: &str = "process.prompt_hr_eff";
    pub const PROCESS_STEPS_HEADING: &str = "process.steps_heading";
    pub const PROCESS_STAGES_HEADING: &str = "process.stages_heading";
    pub const PROCESS_WARNINGS_HEADING: &str = "process.warnings_heading";

    pub const STATION_OUTDOOR: &str = "station.outdoor";
    pub const STATION_AFTER_HEAT_RECOVERY: &str = "station.after_heat_recovery";
    pub const STATION_AFTER_COOLING_COIL: &str = "station.after_cooling_coil";
    pub const STATION_SUPPLY: &str = "station.supply";

    pub const STAGE_HEAT_RECOVERY_GAIN: &str = "stage.heat_recovery_gain";
    pub const STAGE_DEHUM_COOLING: &str = "stage.dehumidification_cooling";
    pub const STAGE_REHEAT: &str = "stage.reheat";
    pub const STAGE_DIRECT_HEATING: &str = "stage.direct_heating";
    pub const STAGE_DIRECT_COOLING: &str = "stage.direct_cooling";

    pub const COST_HEADING: &str = "cost.heading";
    pub const COST_PROMPT_AIRFLOW: &str = "cost.prompt_airflow";
    pub const COST_PROMPT_HOURS: &str = "cost.prompt_hours";
    pub const COST_PROMPT_DAYS: &str = "cost.prompt_days";
    pub const COST_PROMPT_SFP: &str = "cost.prompt_sfp";
    pub const COST_PROMPT_ELEC_PRICE: &str = "cost.prompt_elec_price";
    pub const COST_PROMPT_HEAT_PRICE: &str = "cost.prompt_heat_price";
    pub const COST_PROMPT_COOL_PRICE: &str = "cost.prompt_cool_price";
    pub const COST_PROMPT_CO2_FACTOR: &str = "cost.prompt_co2_factor";
    pub const COST_FAN_POWER: &str = "cost.fan_power";
    pub const COST_HEATING_POWER: &str = "cost.heating_power";
    pub const COST_COOLING_POWER: &str = "cost.cooling_power";
    pub const COST_RECOVERED_POWER: &str = "cost.recovered_power";
    pub const COST_ANNUAL_HOURS: &str = "cost.annual_hours";
    pub const COST_ANNUAL_FAN: &str = "cost.annual_fan";
    pub const COST_ANNUAL_HEATING: &str = "cost.annual_heating";
    pub const COST_ANNUAL_COOLING: &str = "cost.annual_cooling";
    pub const COST_ANNUAL_TOTAL: &str = "cost.annual_total";
    pub const COST_ANNUAL_CO2: &str = "cost.annual_co2";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_UNIT_SYSTEM_OPTIONS: &str = "settings.unit_system_options";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_INPUTS_HEADING: &str = "report.inputs_heading";
    pub const REPORT_AIRFLOW: &str = "report.airflow";
    pub const REPORT_SCHEDULE: &str = "report.schedule";
    pub const REPORT_MODE: &str = "report.mode";
    pub const REPORT_MODE_HEATING: &str = "report.mode_heating";
    pub const REPORT_MODE_DEHUMIDIFY: &str = "report.mode_dehumidify";
    pub const REPORT_HR_EFF: &str = "report.hr_eff";

    pub const HELP_UNIT_CONVERSION: &str = "help.unit_conversion";
    pub const HELP_AIR_STATE: &str = "help.air_state";
    pub const HELP_PROCESS: &str = "help.process";
    pub const HELP_ANNUAL_COST: &str = "help.annual_cost";
    pub const HELP_SETTINGS: &str = "help.settings";
}

use crate::process::{ProcessStage, ProcessStation};

/// 프로세스 위치 enum에 대응하는 번역 키를 돌려준다.
pub fn station_key(station: ProcessStation) -> &'static str {
    match station {
        ProcessStation::OutdoorAir => keys::STATION_OUTDOOR,
        ProcessStation::AfterHeatRecovery => keys::STATION_AFTER_HEAT_RECOVERY,
        ProcessStation::AfterCoolingCoil => keys::STATION_AFTER_COOLING_COIL,
        ProcessStation::SupplyAir => keys::STATION_SUPPLY,
    }
}

/// 처리 단계 enum에 대응하는 번역 키를 돌려준다.
pub fn stage_key(stage: ProcessStage) -> &'static str {
    match stage {
        ProcessStage::HeatRecoveryGain => keys::STAGE_HEAT_RECOVERY_GAIN,
        ProcessStage::DehumidificationCooling => keys::STAGE_DEHUM_COOLING,
        ProcessStage::Reheat => keys::STAGE_REHEAT,
        ProcessStage::DirectHeating => keys::STAGE_DIRECT_HEATING,
        ProcessStage::DirectCooling => keys::STAGE_DIRECT_COOLING,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") || c.starts_with("de") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en/de)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" | "en-uk" => Some("en-us".into()),
        "de" | "de-de" => Some("de-de".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("de") => Some("de-de".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        "de" => Some("de-de".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        "de-de" | "de" => parse_toml_to_map(include_str!("../locales/de-de.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== HVAC Energy Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) 단위 변환기",
        MAIN_MENU_AIR_STATE => "2) 습공기 상태점",
        MAIN_MENU_PROCESS => "3) 공기처리 프로세스",
        MAIN_MENU_ANNUAL_COST => "4) 연간 에너지 비용",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => {
            "1) 온도  2) 온도차  3) 풍량  4) 동력  5) 에너지  6) 비엔탈피  7) 습도비"
        }
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: C, m3/h, kW): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: F, cfm, Btu/h): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        AIR_STATE_HEADING => "\n-- 습공기 상태점 --",
        AIR_STATE_PROMPT_TEMP => "건구 온도 [°C]: ",
        AIR_STATE_PROMPT_HUMIDITY_MODE => "습도 입력 방식 (1=상대습도 %, 2=절대습도 g/kg): ",
        AIR_STATE_PROMPT_RH => "상대습도 [%]: ",
        AIR_STATE_PROMPT_W_ABS => "절대습도 [g/kg]: ",
        STATE_TEMPERATURE => "건구 온도:",
        STATE_REL_HUMIDITY => "상대습도:",
        STATE_HUMIDITY_RATIO => "습도비:",
        STATE_ENTHALPY => "비엔탈피:",
        STATE_DEW_POINT => "노점 온도:",
        PROCESS_HEADING => "\n-- 공기처리 프로세스 --",
        PROCESS_PROMPT_OUTDOOR_TEMP => "외기 온도 [°C]: ",
        PROCESS_PROMPT_OUTDOOR_RH => "외기 상대습도 [%]: ",
        PROCESS_PROMPT_SUPPLY_TEMP => "급기 목표 온도 [°C]: ",
        PROCESS_PROMPT_MODE => "운전 모드 (1=가열 전용, 2=제습): ",
        PROCESS_PROMPT_SUPPLY_RH => "급기 목표 상대습도 [%]: ",
        PROCESS_PROMPT_HR_EFF => "열회수 효율 [%] (없으면 0): ",
        PROCESS_STEPS_HEADING => "프로세스 상태점:",
        PROCESS_STAGES_HEADING => "단계별 비에너지 [kJ/kg]:",
        PROCESS_WARNINGS_HEADING => "경고:",
        STATION_OUTDOOR => "외기",
        STATION_AFTER_HEAT_RECOVERY => "열회수 후",
        STATION_AFTER_COOLING_COIL => "냉각코일 후",
        STATION_SUPPLY => "급기",
        STAGE_HEAT_RECOVERY_GAIN => "열회수 회수량",
        STAGE_DEHUM_COOLING => "제습 냉각",
        STAGE_REHEAT => "재열",
        STAGE_DIRECT_HEATING => "직접 가열",
        STAGE_DIRECT_COOLING => "직접 냉각",
        COST_HEADING => "\n-- 연간 에너지 비용 --",
        COST_PROMPT_AIRFLOW => "급기 풍량 [m³/h]: ",
        COST_PROMPT_HOURS => "1일 운전 시간 [h]: ",
        COST_PROMPT_DAYS => "연간 운전 일수: ",
        COST_PROMPT_SFP => "비팬동력 SFP [W/(m³/h)]: ",
        COST_PROMPT_ELEC_PRICE => "전기 단가 [통화/kWh]: ",
        COST_PROMPT_HEAT_PRICE => "열 단가 [통화/kWh]: ",
        COST_PROMPT_COOL_PRICE => "냉열 단가 [통화/kWh]: ",
        COST_PROMPT_CO2_FACTOR => "CO₂ 배출계수 [kg/kWh]: ",
        COST_FAN_POWER => "팬 동력:",
        COST_HEATING_POWER => "가열 동력:",
        COST_COOLING_POWER => "냉각 동력:",
        COST_RECOVERED_POWER => "열회수 동력:",
        COST_ANNUAL_HOURS => "연간 운전 시간:",
        COST_ANNUAL_FAN => "연간 팬 비용:",
        COST_ANNUAL_HEATING => "연간 난방 비용:",
        COST_ANNUAL_COOLING => "연간 냉방 비용:",
        COST_ANNUAL_TOTAL => "연간 총 비용:",
        COST_ANNUAL_CO2 => "연간 CO₂ 배출량:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_OPTIONS => "1) 언어 변경  2) 단위 시스템 변경",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_LANGUAGE_OPTIONS => "언어: 1=한국어 2=English 3=Deutsch 4=auto",
        SETTINGS_UNIT_SYSTEM_OPTIONS => "단위 시스템: 1=SI  2=Imperial",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        REPORT_TITLE => "RLT/AHU 에너지 비용 분석 리포트",
        REPORT_INPUTS_HEADING => "입력 조건",
        REPORT_AIRFLOW => "급기 풍량:",
        REPORT_SCHEDULE => "운전 스케줄:",
        REPORT_MODE => "운전 모드:",
        REPORT_MODE_HEATING => "가열 전용",
        REPORT_MODE_DEHUMIDIFY => "제습",
        REPORT_HR_EFF => "열회수 효율:",
        HELP_UNIT_CONVERSION => {
            "도움말: 물리량 번호 → 값 → 입력/변환 단위 순으로 입력 (예: C/K/F, m3/h/cfm, kWh/MJ)."
        }
        HELP_AIR_STATE => "도움말: 온도와 상대습도(또는 g/kg)를 입력하면 습도비/엔탈피/노점을 계산합니다.",
        HELP_PROCESS => "도움말: 외기 → 열회수 → 제습냉각 → 재열/가열 → 급기 순서로 상태점과 단계별 에너지를 계산합니다.",
        HELP_ANNUAL_COST => "도움말: 프로세스 결과에 풍량·스케줄·단가를 적용해 연간 비용과 CO₂를 집계합니다.",
        HELP_SETTINGS => "도움말: 언어(ko/en/de)와 단위 시스템 프리셋을 변경합니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== HVAC Energy Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) Unit Converter",
        MAIN_MENU_AIR_STATE => "2) Moist-Air State",
        MAIN_MENU_PROCESS => "3) Air-Treatment Process",
        MAIN_MENU_ANNUAL_COST => "4) Annual Energy Cost",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => {
            "1) Temperature  2) ΔTemperature  3) Airflow  4) Power  5) Energy  6) Specific Enthalpy  7) Humidity Ratio"
        }
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: C, m3/h, kW): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: F, cfm, Btu/h): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        AIR_STATE_HEADING => "\n-- Moist-Air State --",
        AIR_STATE_PROMPT_TEMP => "Dry-bulb temperature [°C]: ",
        AIR_STATE_PROMPT_HUMIDITY_MODE => "Humidity input (1=relative %, 2=absolute g/kg): ",
        AIR_STATE_PROMPT_RH => "Relative humidity [%]: ",
        AIR_STATE_PROMPT_W_ABS => "Absolute humidity [g/kg]: ",
        STATE_TEMPERATURE => "Dry-bulb temperature:",
        STATE_REL_HUMIDITY => "Relative humidity:",
        STATE_HUMIDITY_RATIO => "Humidity ratio:",
        STATE_ENTHALPY => "Specific enthalpy:",
        STATE_DEW_POINT => "Dew point:",
        PROCESS_HEADING => "\n-- Air-Treatment Process --",
        PROCESS_PROMPT_OUTDOOR_TEMP => "Outdoor temperature [°C]: ",
        PROCESS_PROMPT_OUTDOOR_RH => "Outdoor relative humidity [%]: ",
        PROCESS_PROMPT_SUPPLY_TEMP => "Supply target temperature [°C]: ",
        PROCESS_PROMPT_MODE => "Operating mode (1=heating only, 2=dehumidify): ",
        PROCESS_PROMPT_SUPPLY_RH => "Supply target relative humidity [%]: ",
        PROCESS_PROMPT_HR_EFF => "Heat-recovery effectiveness [%] (0 if none): ",
        PROCESS_STEPS_HEADING => "Process states:",
        PROCESS_STAGES_HEADING => "Stage specific energies [kJ/kg]:",
        PROCESS_WARNINGS_HEADING => "Warnings:",
        STATION_OUTDOOR => "outdoor air",
        STATION_AFTER_HEAT_RECOVERY => "after heat recovery",
        STATION_AFTER_COOLING_COIL => "after cooling coil",
        STATION_SUPPLY => "supply air",
        STAGE_HEAT_RECOVERY_GAIN => "heat-recovery gain",
        STAGE_DEHUM_COOLING => "dehumidification cooling",
        STAGE_REHEAT => "reheat",
        STAGE_DIRECT_HEATING => "direct heating",
        STAGE_DIRECT_COOLING => "direct cooling",
        COST_HEADING => "\n-- Annual Energy Cost --",
        COST_PROMPT_AIRFLOW => "Supply airflow [m³/h]: ",
        COST_PROMPT_HOURS => "Operating hours per day [h]: ",
        COST_PROMPT_DAYS => "Operating days per year: ",
        COST_PROMPT_SFP => "Specific fan power SFP [W/(m³/h)]: ",
        COST_PROMPT_ELEC_PRICE => "Electricity price [per kWh]: ",
        COST_PROMPT_HEAT_PRICE => "Heat price [per kWh]: ",
        COST_PROMPT_COOL_PRICE => "Cooling price [per kWh]: ",
        COST_PROMPT_CO2_FACTOR => "CO₂ emission factor [kg/kWh]: ",
        COST_FAN_POWER => "Fan power:",
        COST_HEATING_POWER => "Heating power:",
        COST_COOLING_POWER => "Cooling power:",
        COST_RECOVERED_POWER => "Recovered power:",
        COST_ANNUAL_HOURS => "Annual operating hours:",
        COST_ANNUAL_FAN => "Annual fan cost:",
        COST_ANNUAL_HEATING => "Annual heating cost:",
        COST_ANNUAL_COOLING => "Annual cooling cost:",
        COST_ANNUAL_TOTAL => "Annual total cost:",
        COST_ANNUAL_CO2 => "Annual CO₂ emissions:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) Change language  2) Change unit system",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_LANGUAGE_OPTIONS => "Language: 1=한국어 2=English 3=Deutsch 4=auto",
        SETTINGS_UNIT_SYSTEM_OPTIONS => "Unit system: 1=SI  2=Imperial",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        REPORT_TITLE => "AHU Energy Cost Analysis Report",
        REPORT_INPUTS_HEADING => "Input conditions",
        REPORT_AIRFLOW => "Supply airflow:",
        REPORT_SCHEDULE => "Operating schedule:",
        REPORT_MODE => "Operating mode:",
        REPORT_MODE_HEATING => "heating only",
        REPORT_MODE_DEHUMIDIFY => "dehumidify",
        REPORT_HR_EFF => "Heat-recovery effectiveness:",
        HELP_UNIT_CONVERSION => {
            "Help: choose quantity → enter value → from/to units (C/K/F, m3/h/cfm, kWh/MJ, etc)."
        }
        HELP_AIR_STATE => {
            "Help: enter temperature and relative humidity (or g/kg) to get humidity ratio, enthalpy and dew point."
        }
        HELP_PROCESS => {
            "Help: simulates outdoor → heat recovery → dehumidifying cooling → reheat/heating → supply, with per-stage energies."
        }
        HELP_ANNUAL_COST => {
            "Help: applies airflow, schedule and tariffs to the process result for annual cost and CO₂."
        }
        HELP_SETTINGS => "Help: change language (ko/en/de) and unit-system preset.",
        _ => return None,
    })
}
