#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use hvac_energy_toolbox::{
    config, conversion, i18n,
    plant::{compute_energy_cost, EnergyCostInput, EnergyCostResult},
    process::{
        saturation_humidity_ratio, simulate_process, OperatingMode, ProcessInput, ProcessResult,
    },
    psychro::Humidity,
    quantity::QuantityKind,
    report,
};
use image::GenericImageView;
use rfd::FileDialog;
use std::collections::HashMap;
use std::{env, fs, path::Path};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/de-de)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "HVAC Energy Toolbox",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 기본 폰트를 우선 적용한다.
/// 1) assets/fonts/malgun.ttf
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    // 2) 시스템 폰트 탐색 (Windows 기준)
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

/// 입력 전체를 비트 단위로 싸서 캐시 키로 쓴다. NaN이 아닌 이상
/// 같은 입력은 항상 같은 키가 된다.
#[derive(Clone, PartialEq, Eq, Hash)]
struct SimKey {
    bits: [u64; 13],
    dehumidify: bool,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    window_alpha: f32,
    apply_initial_view_size: bool,
    always_on_top: bool,
    ui_scale: f32,
    show_settings_modal: bool,
    show_help_modal: bool,
    show_formula_modal: bool,
    custom_font_path: String,
    font_load_error: Option<String>,
    // 단위 변환
    conv_value: f64,
    conv_kind: QuantityKind,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
    // 공기처리 입력
    outdoor_temp_c: f64,
    outdoor_rh_pct: f64,
    supply_temp_c: f64,
    supply_rh_pct: f64,
    dehumidify: bool,
    hr_enabled: bool,
    hr_effectiveness_pct: f64,
    // 설비/요금 입력
    airflow_m3_per_h: f64,
    hours_per_day: f64,
    days_per_year: f64,
    sfp_w_per_m3h: f64,
    electricity_price: f64,
    heat_price: f64,
    cooling_price: f64,
    co2_factor: f64,
    // 결과 (마지막 계산 + 입력 캐시)
    sim_cache: HashMap<SimKey, (ProcessResult, EnergyCostResult)>,
    result: Option<(ProcessInput, EnergyCostInput, ProcessResult, EnergyCostResult)>,
    calc_error: Option<String>,
    report_save_status: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Calculation,
    Chart,
    Report,
    UnitConv,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        let pd = config.plant_defaults.clone();
        Self {
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            config,
            tr,
            lang_input,
            lang_save_status: None,
            tab: Tab::Calculation,
            apply_initial_view_size: true,
            always_on_top: false,
            ui_scale: 1.0,
            show_settings_modal: false,
            show_help_modal: false,
            show_formula_modal: false,
            custom_font_path: String::new(),
            font_load_error: None,
            conv_value: 20.0,
            conv_kind: QuantityKind::Temperature,
            conv_from: "C".into(),
            conv_to: "F".into(),
            conv_result: None,
            outdoor_temp_c: 5.0,
            outdoor_rh_pct: 85.0,
            supply_temp_c: 22.0,
            supply_rh_pct: 50.0,
            dehumidify: true,
            hr_enabled: true,
            hr_effectiveness_pct: pd.heat_recovery_effectiveness * 100.0,
            airflow_m3_per_h: pd.airflow_m3_per_h,
            hours_per_day: pd.hours_per_day,
            days_per_year: pd.days_per_year,
            sfp_w_per_m3h: pd.specific_fan_power_w_per_m3h,
            electricity_price: pd.electricity_price_per_kwh,
            heat_price: pd.heat_price_per_kwh,
            cooling_price: pd.cooling_price_per_kwh,
            co2_factor: pd.co2_factor_kg_per_kwh,
            sim_cache: HashMap::new(),
            result: None,
            calc_error: None,
            report_save_status: None,
        }
    }

    fn current_inputs(&self) -> (ProcessInput, EnergyCostInput) {
        let eff = if self.hr_enabled {
            self.hr_effectiveness_pct / 100.0
        } else {
            0.0
        };
        let mode = if self.dehumidify {
            OperatingMode::Dehumidify
        } else {
            OperatingMode::HeatingOnly
        };
        let process_input = ProcessInput::new(
            self.outdoor_temp_c,
            self.outdoor_rh_pct,
            self.supply_temp_c,
            Humidity::RelativePct(self.supply_rh_pct),
            eff,
            mode,
        );
        let cost_input = EnergyCostInput {
            airflow_m3_per_h: self.airflow_m3_per_h,
            hours_per_day: self.hours_per_day,
            days_per_year: self.days_per_year,
            specific_fan_power_w_per_m3h: self.sfp_w_per_m3h,
            electricity_price_per_kwh: self.electricity_price,
            heat_price_per_kwh: self.heat_price,
            cooling_price_per_kwh: self.cooling_price,
            co2_factor_kg_per_kwh: self.co2_factor,
        };
        (process_input, cost_input)
    }

    fn sim_key(&self, p: &ProcessInput, c: &EnergyCostInput) -> SimKey {
        SimKey {
            bits: [
                p.outdoor_temp_c.to_bits(),
                p.outdoor_rel_humidity_pct.to_bits(),
                p.supply_temp_c.to_bits(),
                self.supply_rh_pct.to_bits(),
                p.heat_recovery_effectiveness.to_bits(),
                c.airflow_m3_per_h.to_bits(),
                c.hours_per_day.to_bits(),
                c.days_per_year.to_bits(),
                c.specific_fan_power_w_per_m3h.to_bits(),
                c.electricity_price_per_kwh.to_bits(),
                c.heat_price_per_kwh.to_bits(),
                c.cooling_price_per_kwh.to_bits(),
                c.co2_factor_kg_per_kwh.to_bits(),
            ],
            dehumidify: self.dehumidify,
        }
    }

    /// 현재 입력으로 프로세스와 비용을 (재)계산한다. 같은 입력은 캐시에서 꺼낸다.
    fn recalc(&mut self) {
        let (process_input, cost_input) = self.current_inputs();
        let key = self.sim_key(&process_input, &cost_input);
        if let Some((p, c)) = self.sim_cache.get(&key) {
            self.result = Some((process_input, cost_input, p.clone(), c.clone()));
            self.calc_error = None;
            return;
        }
        match simulate_process(&process_input) {
            Ok(p) => {
                let c = compute_energy_cost(cost_input.clone(), &p);
                self.sim_cache.insert(key, (p.clone(), c.clone()));
                self.result = Some((process_input, cost_input, p, c));
                self.calc_error = None;
            }
            Err(e) => {
                self.calc_error = Some(e.to_string());
                self.result = None;
            }
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Calculation, txt("gui.tab.calculation", "Calculation")),
            (Tab::Chart, txt("gui.tab.chart", "Charts")),
            (Tab::Report, txt("gui.tab.report", "Report")),
            (Tab::UnitConv, txt("gui.tab.unit_conv", "Unit Converter")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch menu"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    /// 입력 패널. 값이 바뀌면 true를 돌려준다.
    fn ui_inputs(&mut self, ui: &mut egui::Ui) -> bool {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let mut changed = false;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong(txt("gui.input.air_heading", "Air conditions"));
            egui::Grid::new("air_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    label_with_tip(
                        ui,
                        &txt("gui.input.outdoor_temp", "Outdoor temperature [°C]"),
                        &txt("gui.input.outdoor_temp_tip", "Dry-bulb temperature of outdoor air"),
                    );
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut self.outdoor_temp_c)
                                .speed(0.5)
                                .clamp_range(-40.0..=50.0),
                        )
                        .changed();
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.input.outdoor_rh", "Outdoor rel. humidity [%]"),
                        &txt("gui.input.outdoor_rh_tip", "0 to 100 %"),
                    );
                    changed |= ui
                        .add(egui::Slider::new(&mut self.outdoor_rh_pct, 0.0..=100.0))
                        .changed();
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.input.supply_temp", "Supply temperature [°C]"),
                        &txt("gui.input.supply_temp_tip", "Target supply-air temperature"),
                    );
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut self.supply_temp_c)
                                .speed(0.5)
                                .clamp_range(10.0..=40.0),
                        )
                        .changed();
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.input.mode", "Operating mode"),
                        &txt(
                            "gui.input.mode_tip",
                            "Dehumidify: cool below dew point, then reheat",
                        ),
                    );
                    changed |= ui
                        .checkbox(&mut self.dehumidify, txt("gui.input.dehumidify", "Dehumidify"))
                        .changed();
                    ui.end_row();

                    if self.dehumidify {
                        label_with_tip(
                            ui,
                            &txt("gui.input.supply_rh", "Supply rel. humidity [%]"),
                            &txt("gui.input.supply_rh_tip", "Target humidity at supply temperature"),
                        );
                        changed |= ui
                            .add(egui::Slider::new(&mut self.supply_rh_pct, 20.0..=80.0))
                            .changed();
                        ui.end_row();
                    }

                    label_with_tip(
                        ui,
                        &txt("gui.input.hr", "Heat recovery"),
                        &txt("gui.input.hr_tip", "Sensible-only heat recovery (WRG)"),
                    );
                    changed |= ui
                        .checkbox(&mut self.hr_enabled, txt("gui.input.hr_enabled", "enabled"))
                        .changed();
                    ui.end_row();

                    if self.hr_enabled {
                        label_with_tip(
                            ui,
                            &txt("gui.input.hr_eff", "Effectiveness [%]"),
                            &txt("gui.input.hr_eff_tip", "Typical plate/rotary: 50 to 85 %"),
                        );
                        changed |= ui
                            .add(egui::Slider::new(&mut self.hr_effectiveness_pct, 0.0..=95.0))
                            .changed();
                        ui.end_row();
                    }
                });
        });

        ui.add_space(6.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong(txt("gui.input.plant_heading", "Plant & tariffs"));
            egui::Grid::new("plant_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.input.airflow", "Airflow [m³/h]"));
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut self.airflow_m3_per_h)
                                .speed(100.0)
                                .clamp_range(0.0..=500_000.0),
                        )
                        .changed();
                    ui.end_row();

                    ui.label(txt("gui.input.hours", "Hours per day"));
                    changed |= ui
                        .add(egui::Slider::new(&mut self.hours_per_day, 0.0..=24.0))
                        .changed();
                    ui.end_row();

                    ui.label(txt("gui.input.days", "Days per year"));
                    changed |= ui
                        .add(egui::Slider::new(&mut self.days_per_year, 0.0..=366.0))
                        .changed();
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.input.sfp", "SFP [W/(m³/h)]"),
                        &txt("gui.input.sfp_tip", "Specific fan power of the air handler"),
                    );
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut self.sfp_w_per_m3h)
                                .speed(0.1)
                                .clamp_range(0.0..=10.0),
                        )
                        .changed();
                    ui.end_row();

                    ui.label(txt("gui.input.elec_price", "Electricity [per kWh]"));
                    changed |= ui
                        .add(egui::DragValue::new(&mut self.electricity_price).speed(0.01))
                        .changed();
                    ui.end_row();

                    ui.label(txt("gui.input.heat_price", "Heat [per kWh]"));
                    changed |= ui
                        .add(egui::DragValue::new(&mut self.heat_price).speed(0.01))
                        .changed();
                    ui.end_row();

                    ui.label(txt("gui.input.cool_price", "Cooling [per kWh]"));
                    changed |= ui
                        .add(egui::DragValue::new(&mut self.cooling_price).speed(0.01))
                        .changed();
                    ui.end_row();

                    ui.label(txt("gui.input.co2", "CO₂ factor [kg/kWh]"));
                    changed |= ui
                        .add(egui::DragValue::new(&mut self.co2_factor).speed(0.01))
                        .changed();
                    ui.end_row();
                });
        });

        changed
    }

    fn ui_calculation(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.calc.heading", "Air-Treatment & Annual Cost"),
            &txt(
                "gui.calc.tip",
                "Outdoor air → heat recovery → dehumidifying cooling → reheat/heating → supply",
            ),
        );
        ui.add_space(8.0);

        let changed = self.ui_inputs(ui);
        if changed || (self.result.is_none() && self.calc_error.is_none()) {
            self.recalc();
        }

        ui.add_space(8.0);

        if let Some(err) = &self.calc_error {
            ui.colored_label(egui::Color32::LIGHT_RED, format!("⚠ {err}"));
            return;
        }

        let Some((_pin, _cin, process, cost)) = self.result.clone() else {
            return;
        };

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong(txt("gui.result.states", "Process states"));
            egui::Grid::new("states_grid")
                .num_columns(5)
                .spacing([16.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("");
                    ui.strong("T [°C]");
                    ui.strong("φ [%]");
                    ui.strong("w [g/kg]");
                    ui.strong("h [kJ/kg]");
                    ui.end_row();
                    for step in &process.steps {
                        ui.label(self.tr.t(i18n::station_key(step.station)));
                        ui.label(format!("{:.2}", step.state.temperature_c));
                        ui.label(format!("{:.1}", step.state.relative_humidity_pct));
                        ui.label(format!("{:.2}", step.state.humidity_ratio * 1000.0));
                        ui.label(format!("{:.2}", step.state.enthalpy_kj_per_kg));
                        ui.end_row();
                    }
                });
        });

        ui.add_space(6.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong(txt("gui.result.energies", "Stage energies & powers"));
            egui::Grid::new("energy_grid")
                .num_columns(3)
                .spacing([16.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("");
                    ui.strong("kJ/kg");
                    ui.strong("kW");
                    ui.end_row();
                    for entry in &process.stage_energies {
                        ui.label(self.tr.t(i18n::stage_key(entry.stage)));
                        ui.label(format!("{:.2}", entry.specific_energy_kj_per_kg));
                        ui.label(format!(
                            "{:.2}",
                            entry.specific_energy_kj_per_kg * cost.mass_flow_kg_per_s
                        ));
                        ui.end_row();
                    }
                    ui.label(txt("gui.result.fan", "Fan"));
                    ui.label("–");
                    ui.label(format!("{:.2}", cost.fan_power_kw));
                    ui.end_row();
                });
        });

        ui.add_space(6.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong(txt("gui.result.annual", "Annual cost & CO₂"));
            egui::Grid::new("cost_grid")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label(txt("gui.result.annual_hours", "Operating hours"));
                    ui.label(format!("{:.0} h/a", cost.annual_hours));
                    ui.end_row();
                    ui.label(txt("gui.result.fan_cost", "Fan (electricity)"));
                    ui.label(format!(
                        "{:.0} kWh → {:.2}",
                        cost.annual_fan_kwh, cost.annual_fan_cost
                    ));
                    ui.end_row();
                    ui.label(txt("gui.result.heating_cost", "Heating"));
                    ui.label(format!(
                        "{:.0} kWh → {:.2}",
                        cost.annual_heating_kwh, cost.annual_heating_cost
                    ));
                    ui.end_row();
                    ui.label(txt("gui.result.cooling_cost", "Cooling"));
                    ui.label(format!(
                        "{:.0} kWh → {:.2}",
                        cost.annual_cooling_kwh, cost.annual_cooling_cost
                    ));
                    ui.end_row();
                    ui.strong(txt("gui.result.total_cost", "Total cost"));
                    ui.strong(format!("{:.2}", cost.annual_total_cost));
                    ui.end_row();
                    ui.label(txt("gui.result.co2", "CO₂ emissions"));
                    ui.label(format!("{:.0} kg/a", cost.annual_co2_kg));
                    ui.end_row();
                    ui.label(txt("gui.result.recovered", "Recovered by WRG"));
                    ui.label(format!("{:.2} kW", cost.recovered_power_kw));
                    ui.end_row();
                });
        });

        let mut warnings: Vec<&str> = Vec::new();
        warnings.extend(process.warnings.iter().map(String::as_str));
        warnings.extend(cost.warnings.iter().map(String::as_str));
        if !warnings.is_empty() {
            ui.add_space(6.0);
            for w in warnings {
                ui.colored_label(egui::Color32::YELLOW, format!("⚠ {w}"));
            }
        }
    }

    fn ui_chart(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.chart.heading", "Charts"),
            &txt("gui.chart.tip", "Annual cost breakdown and process on the w/T plane"),
        );
        if self.result.is_none() {
            self.recalc();
        }
        let Some((_pin, _cin, process, cost)) = self.result.clone() else {
            if let Some(err) = &self.calc_error {
                ui.colored_label(egui::Color32::LIGHT_RED, format!("⚠ {err}"));
            }
            return;
        };

        ui.add_space(8.0);
        ui.strong(txt("gui.chart.cost_title", "Annual cost breakdown"));
        let bars = [
            (
                txt("gui.chart.bar_fan", "Fan"),
                cost.annual_fan_cost,
                egui::Color32::from_rgb(120, 120, 200),
            ),
            (
                txt("gui.chart.bar_heating", "Heating"),
                cost.annual_heating_cost,
                egui::Color32::from_rgb(220, 100, 80),
            ),
            (
                txt("gui.chart.bar_cooling", "Cooling"),
                cost.annual_cooling_cost,
                egui::Color32::from_rgb(80, 140, 220),
            ),
        ];
        let max_cost = bars.iter().map(|(_, v, _)| *v).fold(1.0_f64, f64::max);
        let (resp, painter) = ui.allocate_painter(
            egui::vec2(ui.available_width().min(520.0), 200.0),
            egui::Sense::hover(),
        );
        let rect = resp.rect;
        let base_y = rect.bottom() - 18.0;
        let bar_w = (rect.width() - 40.0) / bars.len() as f32;
        for (i, (label, value, color)) in bars.iter().enumerate() {
            let h = ((value / max_cost) as f32 * (rect.height() - 50.0)).max(1.0);
            let x0 = rect.left() + 20.0 + i as f32 * bar_w + bar_w * 0.15;
            let bar = egui::Rect::from_min_max(
                egui::pos2(x0, base_y - h),
                egui::pos2(x0 + bar_w * 0.7, base_y),
            );
            painter.rect_filled(bar, 2.0, *color);
            painter.text(
                bar.center_top() + egui::vec2(0.0, -4.0),
                egui::Align2::CENTER_BOTTOM,
                format!("{value:.0}"),
                egui::FontId::proportional(12.0),
                ui.visuals().text_color(),
            );
            painter.text(
                egui::pos2(bar.center().x, base_y + 4.0),
                egui::Align2::CENTER_TOP,
                label,
                egui::FontId::proportional(12.0),
                ui.visuals().text_color(),
            );
        }

        ui.add_space(12.0);
        ui.strong(txt("gui.chart.psychro_title", "Process on the w/T plane"));
        ui.small(txt(
            "gui.chart.psychro_hint",
            "Grey curve: saturation (100 % r.h.). Points: process states in flow order.",
        ));
        let (resp, painter) = ui.allocate_painter(
            egui::vec2(ui.available_width().min(520.0), 260.0),
            egui::Sense::hover(),
        );
        let rect = resp.rect.shrink(10.0);
        let (t_min, t_max) = (-15.0_f64, 40.0_f64);
        let w_max_g = saturation_humidity_ratio(t_max) * 1000.0;
        let to_screen = |t: f64, w_g: f64| {
            let x = rect.left() + ((t - t_min) / (t_max - t_min)) as f32 * rect.width();
            let y = rect.bottom() - (w_g / w_max_g) as f32 * rect.height();
            egui::pos2(x, y)
        };

        // 포화곡선
        let mut prev: Option<egui::Pos2> = None;
        let mut t = t_min;
        while t <= t_max {
            let p = to_screen(t, saturation_humidity_ratio(t) * 1000.0);
            if let Some(q) = prev {
                painter.line_segment([q, p], egui::Stroke::new(1.0, egui::Color32::GRAY));
            }
            prev = Some(p);
            t += 1.0;
        }

        // 프로세스 경로
        let pts: Vec<egui::Pos2> = process
            .steps
            .iter()
            .map(|s| to_screen(s.state.temperature_c, s.state.humidity_ratio * 1000.0))
            .collect();
        for pair in pts.windows(2) {
            painter.line_segment(
                [pair[0], pair[1]],
                egui::Stroke::new(2.0, egui::Color32::from_rgb(220, 120, 40)),
            );
        }
        for (p, step) in pts.iter().zip(process.steps.iter()) {
            painter.circle_filled(*p, 4.0, egui::Color32::from_rgb(220, 120, 40));
            painter.text(
                *p + egui::vec2(6.0, -6.0),
                egui::Align2::LEFT_BOTTOM,
                self.tr.t(i18n::station_key(step.station)),
                egui::FontId::proportional(11.0),
                ui.visuals().text_color(),
            );
        }

        // 축 라벨
        painter.text(
            egui::pos2(rect.center().x, rect.bottom() + 2.0),
            egui::Align2::CENTER_TOP,
            "T [°C]",
            egui::FontId::proportional(11.0),
            ui.visuals().weak_text_color(),
        );
        painter.text(
            egui::pos2(rect.left(), rect.top()),
            egui::Align2::LEFT_TOP,
            "w [g/kg]",
            egui::FontId::proportional(11.0),
            ui.visuals().weak_text_color(),
        );
    }

    fn ui_report(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.report.heading", "Report"),
            &txt("gui.report.tip", "Plain-text summary for archiving or hand-over"),
        );
        if self.result.is_none() {
            self.recalc();
        }
        let Some((pin, cin, process, cost)) = self.result.clone() else {
            if let Some(err) = &self.calc_error {
                ui.colored_label(egui::Color32::LIGHT_RED, format!("⚠ {err}"));
            }
            return;
        };

        let text = report::build_report(&self.tr, &pin, &process, &cin, &cost);

        ui.horizontal(|ui| {
            if ui.button(txt("gui.report.save", "Save as…")).clicked() {
                if let Some(path) = FileDialog::new()
                    .add_filter("Text", &["txt"])
                    .set_file_name("ahu_report.txt")
                    .save_file()
                {
                    self.report_save_status = Some(match fs::write(&path, &text) {
                        Ok(()) => format!("{} {}", txt("gui.report.saved", "Saved:"), path.display()),
                        Err(e) => format!("{} {e}", txt("gui.report.save_error", "Save error:")),
                    });
                }
            }
            if ui.button(txt("gui.report.copy", "Copy")).clicked() {
                ui.output_mut(|o| o.copied_text = text.clone());
                self.report_save_status =
                    Some(txt("gui.report.copied", "Copied to clipboard."));
            }
        });
        if let Some(status) = &self.report_save_status {
            ui.small(status);
        }
        ui.add_space(6.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.add(egui::Label::new(egui::RichText::new(text).monospace()).wrap(false));
        });
    }

    fn ui_unit_conv(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.unit.heading", "Unit Converter"),
            &txt("gui.unit.tip", "Convert HVAC quantities between units."),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("conv_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.unit.quantity.label", "Quantity"));
                    let before = self.conv_kind;
                    let q_options = vec![
                        (
                            QuantityKind::Temperature,
                            txt("gui.unit.quantity.temperature", "Temperature"),
                        ),
                        (
                            QuantityKind::TemperatureDifference,
                            txt("gui.unit.quantity.temperature_diff", "ΔTemperature"),
                        ),
                        (QuantityKind::Airflow, txt("gui.unit.quantity.airflow", "Airflow")),
                        (QuantityKind::Power, txt("gui.unit.quantity.power", "Power")),
                        (QuantityKind::Energy, txt("gui.unit.quantity.energy", "Energy")),
                        (
                            QuantityKind::SpecificEnthalpy,
                            txt("gui.unit.quantity.specific_enthalpy", "Specific enthalpy"),
                        ),
                        (
                            QuantityKind::HumidityRatio,
                            txt("gui.unit.quantity.humidity_ratio", "Humidity ratio"),
                        ),
                    ];
                    let selected_label = q_options
                        .iter()
                        .find(|(k, _)| *k == self.conv_kind)
                        .map(|(_, l)| l.clone())
                        .unwrap_or_default();
                    egui::ComboBox::from_id_source("conv_kind")
                        .selected_text(selected_label)
                        .show_ui(ui, |ui| {
                            for (k, label) in &q_options {
                                ui.selectable_value(&mut self.conv_kind, *k, label.clone());
                            }
                        });
                    if before != self.conv_kind {
                        let (f, t) = default_units_for_kind(self.conv_kind);
                        self.conv_from = f.to_string();
                        self.conv_to = t.to_string();
                        self.conv_result = None;
                    }
                    ui.end_row();

                    ui.label(txt("gui.unit.value", "Value"));
                    ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
                    ui.end_row();

                    ui.label(txt("gui.unit.from", "From unit"));
                    egui::ComboBox::from_id_source("conv_from")
                        .selected_text(unit_label(&self.conv_from, self.conv_kind))
                        .show_ui(ui, |ui| {
                            for (label, code) in unit_options(self.conv_kind) {
                                ui.selectable_value(&mut self.conv_from, code.to_string(), *label);
                            }
                        });
                    ui.end_row();

                    ui.label(txt("gui.unit.to", "To unit"));
                    egui::ComboBox::from_id_source("conv_to")
                        .selected_text(unit_label(&self.conv_to, self.conv_kind))
                        .show_ui(ui, |ui| {
                            for (label, code) in unit_options(self.conv_kind) {
                                ui.selectable_value(&mut self.conv_to, code.to_string(), *label);
                            }
                        });
                    ui.end_row();
                });
            ui.add_space(6.0);
            if ui.button(txt("gui.unit.run", "Convert")).clicked() {
                self.conv_result = Some(
                    match conversion::convert(
                        self.conv_kind,
                        self.conv_value,
                        &self.conv_from,
                        &self.conv_to,
                    ) {
                        Ok(v) => format!(
                            "{} {} = {:.6} {}",
                            self.conv_value, self.conv_from, v, self.conv_to
                        ),
                        Err(e) => format!("⚠ {e}"),
                    },
                );
            }
            if let Some(result) = &self.conv_result {
                ui.strong(result);
            }
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 최초 1회 화면 크기 조정
        if self.apply_initial_view_size {
            if let Some(screen) = ctx.input(|i| {
                let r = i.screen_rect();
                if r.is_positive() {
                    Some(r.size())
                } else {
                    None
                }
            }) {
                let target = egui::vec2((screen.x * 0.55).max(960.0), (screen.y * 0.65).max(680.0));
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(target));
                self.apply_initial_view_size = false;
            }
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "HVAC Energy Toolbox"));
                ui.label(" | Desktop GUI");
                ui.separator();
                if ui
                    .button(txt("gui.formula.button", "Formula reference"))
                    .clicked()
                {
                    self.show_formula_modal = true;
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut new_unit_system = self.config.unit_system;
            let mut pick_font = false;
            egui::Window::new(txt("gui.settings.title", "Program Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();
                    ui.label(txt("gui.settings.unit_preset", "Unit system preset"));
                    ui.horizontal(|ui| {
                        for (label, us) in [
                            ("SI", config::UnitSystem::Si),
                            ("Imperial", config::UnitSystem::Imperial),
                        ] {
                            ui.selectable_value(&mut new_unit_system, us, label);
                        }
                    });
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        txt("gui.settings.always_on_top", "Always on top"),
                    );
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));

                    ui.separator();
                    ui.label(txt("gui.settings.font", "Custom font (.ttf/.ttc)"));
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.custom_font_path);
                        if ui.button(txt("gui.settings.font_pick", "Browse…")).clicked() {
                            pick_font = true;
                        }
                    });
                    if let Some(err) = &self.font_load_error {
                        ui.colored_label(egui::Color32::LIGHT_RED, err);
                    }

                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang_auto", "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                            ui.selectable_value(&mut self.lang_input, "de-de".into(), "Deutsch");
                        });
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save() {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status = Some(txt("gui.settings.saved", "Saved."));
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
            if pick_font {
                if let Some(path) = FileDialog::new()
                    .add_filter("Font", &["ttf", "ttc", "otf"])
                    .pick_file()
                {
                    self.custom_font_path = path.display().to_string();
                    self.font_load_error = load_custom_font(ctx, &self.custom_font_path).err();
                }
            }
            if new_unit_system != self.config.unit_system {
                self.config.apply_unit_system(new_unit_system);
            }
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Offline calculator for AHU air treatment and annual energy cost",
                    ));
                    ui.label(txt("gui.about.version", "Version: 1.0"));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.flow",
                        "- Pipeline: outdoor air → heat recovery → dehumidifying cooling → reheat/heating → supply",
                    ));
                    ui.label(txt(
                        "gui.about.basis",
                        "- Basis: 101325 Pa, air density 1.2 kg/m³, sensible-only heat recovery",
                    ));
                    ui.label(txt(
                        "gui.about.hint",
                        "Adjust units/font in settings if you see issues.",
                    ));
                });
        }

        if self.show_formula_modal {
            egui::Window::new(txt("gui.formula.title", "Formula reference"))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.style_mut().wrap = Some(true);
                    ui.heading(txt(
                        "gui.formula.psychro",
                        "Moist air: e_s = 611.2·exp(17.67·T/(T+243.5)); w = 0.622·e/(p−e); h = 1.006·T + w·(2501 + 1.86·T).",
                    ));
                    ui.label(txt(
                        "gui.formula.dew",
                        "Dew point: inverse Magnus on vapor pressure; cooling coil target = dew point(w_target) − margin.",
                    ));
                    ui.separator();
                    ui.heading(txt(
                        "gui.formula.hr",
                        "Heat recovery (sensible): T_after = T_out + η·(T_supply − T_out), humidity ratio unchanged.",
                    ));
                    ui.label(txt(
                        "gui.formula.stages",
                        "Stage energy: Δh per kg dry air, clamped at ≥ 0; power = Δh · mass flow.",
                    ));
                    ui.separator();
                    ui.heading(txt(
                        "gui.formula.fan",
                        "Fan: P[kW] = airflow · SFP / 1000; mass flow = airflow/3600 · 1.2 kg/m³.",
                    ));
                    ui.label(txt(
                        "gui.formula.cost",
                        "Annual: kWh = kW · h/day · days; cost = kWh · tariff; CO₂ = kWh · factor.",
                    ));
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(190.0)
            .max_width(360.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Calculation => self.ui_calculation(ui),
                    Tab::Chart => self.ui_chart(ui),
                    Tab::Report => self.ui_report(ui),
                    Tab::UnitConv => self.ui_unit_conv(ui),
                });
        });
    }
}

fn default_units_for_kind(kind: QuantityKind) -> (&'static str, &'static str) {
    match kind {
        QuantityKind::Temperature => ("C", "F"),
        QuantityKind::TemperatureDifference => ("K", "F"),
        QuantityKind::Airflow => ("m3/h", "cfm"),
        QuantityKind::Power => ("kW", "Btu/h"),
        QuantityKind::Energy => ("kWh", "MJ"),
        QuantityKind::SpecificEnthalpy => ("kJ/kg", "kcal/kg"),
        QuantityKind::HumidityRatio => ("g/kg", "kg/kg"),
    }
}

fn unit_options(kind: QuantityKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        QuantityKind::Temperature => &[
            ("Celsius (°C)", "C"),
            ("Kelvin (K)", "K"),
            ("Fahrenheit (°F)", "F"),
        ],
        QuantityKind::TemperatureDifference => &[("ΔK", "K"), ("Δ°C", "C"), ("Δ°F", "F")],
        QuantityKind::Airflow => &[
            ("m³/h", "m3/h"),
            ("m³/s", "m3/s"),
            ("L/s", "l/s"),
            ("cfm", "cfm"),
        ],
        QuantityKind::Power => &[
            ("W", "W"),
            ("kW", "kW"),
            ("kcal/h", "kcal/h"),
            ("Btu/h", "Btu/h"),
        ],
        QuantityKind::Energy => &[
            ("kWh", "kWh"),
            ("MWh", "MWh"),
            ("kJ", "kJ"),
            ("MJ", "MJ"),
            ("GJ", "GJ"),
        ],
        QuantityKind::SpecificEnthalpy => &[
            ("kJ/kg", "kJ/kg"),
            ("J/kg", "J/kg"),
            ("kcal/kg", "kcal/kg"),
        ],
        QuantityKind::HumidityRatio => &[("g/kg", "g/kg"), ("kg/kg", "kg/kg")],
    }
}

fn unit_label(code: &str, kind: QuantityKind) -> String {
    unit_options(kind)
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(l, _)| l.to_string())
        .unwrap_or_else(|| code.to_string())
}
