use hvac_energy_toolbox::process::{
    simulate_process, OperatingMode, ProcessError, ProcessInput, ProcessStage, ProcessStation,
};
use hvac_energy_toolbox::psychro::{
    dew_point_from_humidity_ratio, humidity_ratio_from_relative_humidity, Humidity, PsychroError,
};

fn winter_input(mode: OperatingMode, eff: f64) -> ProcessInput {
    ProcessInput::new(5.0, 85.0, 22.0, Humidity::RelativePct(50.0), eff, mode)
}

#[test]
fn stage_energies_always_non_negative() {
    let cases = [
        winter_input(OperatingMode::HeatingOnly, 0.75),
        winter_input(OperatingMode::Dehumidify, 0.75),
        ProcessInput::new(30.0, 40.0, 20.0, Humidity::RelativePct(50.0), 0.0, OperatingMode::HeatingOnly),
        ProcessInput::new(28.0, 70.0, 20.0, Humidity::RelativePct(50.0), 0.6, OperatingMode::Dehumidify),
        ProcessInput::new(-15.0, 95.0, 18.0, Humidity::AbsoluteGPerKg(6.0), 0.9, OperatingMode::Dehumidify),
    ];
    for input in cases {
        let result = simulate_process(&input).expect("valid input");
        for entry in &result.stage_energies {
            assert!(
                entry.specific_energy_kj_per_kg >= 0.0,
                "{:?} negative: {}",
                entry.stage,
                entry.specific_energy_kj_per_kg
            );
        }
    }
}

#[test]
fn zero_effectiveness_skips_heat_recovery_step() {
    let result = simulate_process(&winter_input(OperatingMode::HeatingOnly, 0.0)).expect("valid");
    assert!(result.step_at(ProcessStation::AfterHeatRecovery).is_none());
    assert_eq!(result.energy_for(ProcessStage::HeatRecoveryGain), 0.0);
}

#[test]
fn full_effectiveness_reaches_target_exactly() {
    let result = simulate_process(&winter_input(OperatingMode::HeatingOnly, 1.0)).expect("valid");
    let after = result
        .step_at(ProcessStation::AfterHeatRecovery)
        .expect("recovery step present");
    assert_eq!(after.temperature_c, 22.0);
    // 열회수만으로 목표에 도달했으므로 가열 코일은 일하지 않는다.
    assert_eq!(result.energy_for(ProcessStage::DirectHeating), 0.0);
}

#[test]
fn winter_heating_with_recovery() {
    // 외기 5°C/85%, 급기 22°C, 열회수 75%: 열회수 후 17.75°C.
    let result = simulate_process(&winter_input(OperatingMode::HeatingOnly, 0.75)).expect("valid");
    let outdoor = result.step_at(ProcessStation::OutdoorAir).expect("outdoor");
    let after = result
        .step_at(ProcessStation::AfterHeatRecovery)
        .expect("recovery step");
    let supply = result.step_at(ProcessStation::SupplyAir).expect("supply");

    assert!((after.temperature_c - 17.75).abs() < 0.1);
    // 현열 전용 열회수: 습도비 불변.
    assert!((after.humidity_ratio - outdoor.humidity_ratio).abs() < 1e-12);
    assert!((supply.temperature_c - 22.0).abs() < 1e-12);
    assert!((supply.humidity_ratio - outdoor.humidity_ratio).abs() < 1e-12);

    let heating = result.energy_for(ProcessStage::DirectHeating);
    assert!(
        (heating - (supply.enthalpy_kj_per_kg - after.enthalpy_kj_per_kg)).abs() < 1e-9
    );
    assert!((4.0..4.7).contains(&heating), "direct heating={heating}");
    let recovered = result.energy_for(ProcessStage::HeatRecoveryGain);
    assert!((12.0..13.5).contains(&recovered), "recovered={recovered}");
}

#[test]
fn dehumidify_no_op_when_outdoor_already_dry() {
    // 5°C/85%의 습도비(≈4.6 g/kg)는 22°C/50% 목표(≈8.2 g/kg)보다 이미 낮다.
    let result = simulate_process(&winter_input(OperatingMode::Dehumidify, 0.75)).expect("valid");
    assert_eq!(result.energy_for(ProcessStage::DehumidificationCooling), 0.0);
    assert_eq!(result.energy_for(ProcessStage::Reheat), 0.0);
    assert!(result.step_at(ProcessStation::AfterCoolingCoil).is_none());
    assert!(!result.warnings.is_empty(), "no-op must be reported");
}

#[test]
fn dehumidify_cools_to_dew_point_minus_margin_then_reheats() {
    // 습한 여름 외기 28°C/70% → 20°C/50%: 실제 제습이 필요한 경우.
    let input = ProcessInput::new(
        28.0,
        70.0,
        20.0,
        Humidity::RelativePct(50.0),
        0.0,
        OperatingMode::Dehumidify,
    );
    let result = simulate_process(&input).expect("valid");
    let coil = result
        .step_at(ProcessStation::AfterCoolingCoil)
        .expect("cooling coil step");
    let supply = result.step_at(ProcessStation::SupplyAir).expect("supply");

    let target_w = humidity_ratio_from_relative_humidity(20.0, 50.0);
    let dew = dew_point_from_humidity_ratio(target_w);
    assert!((coil.temperature_c - (dew - 1.0)).abs() < 1e-9);
    assert!((coil.humidity_ratio - target_w).abs() < 1e-12);
    assert!((supply.temperature_c - 20.0).abs() < 1e-12);
    assert!((supply.humidity_ratio - target_w).abs() < 1e-12);

    assert!(result.energy_for(ProcessStage::DehumidificationCooling) > 0.0);
    assert!(result.energy_for(ProcessStage::Reheat) > 0.0);
    assert_eq!(result.energy_for(ProcessStage::DirectHeating), 0.0);
}

#[test]
fn summer_sensible_cooling_only() {
    // 외기 30°C/40% → 20°C, 가열 전용 모드: 가열은 0, 대칭 현열 냉각만 발생.
    let input = ProcessInput::new(
        30.0,
        40.0,
        20.0,
        Humidity::RelativePct(50.0),
        0.0,
        OperatingMode::HeatingOnly,
    );
    let result = simulate_process(&input).expect("valid");
    assert_eq!(result.energy_for(ProcessStage::DirectHeating), 0.0);
    let cooling = result.energy_for(ProcessStage::DirectCooling);
    assert!(cooling > 0.0, "direct cooling expected, got {cooling}");

    let outdoor = result.step_at(ProcessStation::OutdoorAir).expect("outdoor");
    let supply = result.step_at(ProcessStation::SupplyAir).expect("supply");
    assert!((supply.humidity_ratio - outdoor.humidity_ratio).abs() < 1e-12);
    assert!(
        (cooling - (outdoor.enthalpy_kj_per_kg - supply.enthalpy_kj_per_kg)).abs() < 1e-9
    );
}

#[test]
fn steps_are_in_flow_order() {
    let result = simulate_process(&ProcessInput::new(
        28.0,
        70.0,
        20.0,
        Humidity::RelativePct(50.0),
        0.5,
        OperatingMode::Dehumidify,
    ))
    .expect("valid");
    let stations: Vec<ProcessStation> = result.steps.iter().map(|s| s.station).collect();
    assert_eq!(
        stations,
        vec![
            ProcessStation::OutdoorAir,
            ProcessStation::AfterHeatRecovery,
            ProcessStation::AfterCoolingCoil,
            ProcessStation::SupplyAir,
        ]
    );
}

#[test]
fn rejects_out_of_range_inputs() {
    let mut input = winter_input(OperatingMode::HeatingOnly, 1.5);
    assert!(matches!(
        simulate_process(&input),
        Err(ProcessError::InvalidEffectiveness(_))
    ));

    input.heat_recovery_effectiveness = -0.1;
    assert!(matches!(
        simulate_process(&input),
        Err(ProcessError::InvalidEffectiveness(_))
    ));

    let bad_rh = ProcessInput::new(
        5.0,
        120.0,
        22.0,
        Humidity::RelativePct(50.0),
        0.5,
        OperatingMode::HeatingOnly,
    );
    assert!(matches!(
        simulate_process(&bad_rh),
        Err(ProcessError::Psychro(
            PsychroError::RelativeHumidityOutOfRange(_)
        ))
    ));
}
