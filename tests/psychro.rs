use hvac_energy_toolbox::psychro::{
    compute_air_state, dew_point_from_humidity_ratio, dew_point_from_vapor_pressure,
    enthalpy_kj_per_kg, humidity_ratio_from_relative_humidity,
    relative_humidity_from_humidity_ratio, required_cooling_temperature_c,
    saturation_vapor_pressure_pa, Humidity, PsychroError, DEW_POINT_FLOOR_C,
};

#[test]
fn saturation_pressure_reference_points() {
    // Magnus 식 기준점: 0°C에서 정확히 611.2 Pa, 20°C에서 약 2337 Pa.
    assert!((saturation_vapor_pressure_pa(0.0) - 611.2).abs() < 1e-9);
    let p20 = saturation_vapor_pressure_pa(20.0);
    assert!((2300.0..2400.0).contains(&p20), "p_sat(20°C)={p20}");
}

#[test]
fn saturation_pressure_strictly_increasing() {
    let mut prev = saturation_vapor_pressure_pa(-20.0);
    let mut t = -19.0;
    while t <= 45.0 {
        let p = saturation_vapor_pressure_pa(t);
        assert!(p > prev, "p_sat not increasing at {t}°C");
        prev = p;
        t += 1.0;
    }
}

#[test]
fn humidity_round_trip_recovers_rh() {
    for &t in &[-20.0, -5.0, 0.0, 10.0, 22.0, 35.0, 45.0] {
        for &rh in &[0.0, 15.0, 50.0, 85.0, 100.0] {
            let w = humidity_ratio_from_relative_humidity(t, rh);
            let back = relative_humidity_from_humidity_ratio(t, w);
            assert!(
                (back - rh).abs() <= 1e-6 * rh.max(1.0),
                "round trip T={t} rh={rh} -> {back}"
            );
        }
    }
}

#[test]
fn humidity_ratio_reference_point() {
    // 20°C/50%: w ≈ 7.26 g/kg.
    let w = humidity_ratio_from_relative_humidity(20.0, 50.0);
    assert!((w - 0.007257).abs() < 1e-4, "w={w}");
}

#[test]
fn enthalpy_formula() {
    // h = 1.006·T + w·(2501 + 1.86·T)
    let h = enthalpy_kj_per_kg(20.0, 0.0072565);
    assert!((h - 38.54).abs() < 0.05, "h={h}");
    // 건조 공기는 현열만 남는다.
    assert!((enthalpy_kj_per_kg(10.0, 0.0) - 10.06).abs() < 1e-9);
}

#[test]
fn dew_point_inverts_saturation_pressure() {
    for &t in &[-10.0, 0.0, 12.5, 30.0] {
        let dew = dew_point_from_vapor_pressure(saturation_vapor_pressure_pa(t));
        assert!((dew - t).abs() < 1e-9, "dew({t})={dew}");
    }
}

#[test]
fn dew_point_floor_for_dry_air() {
    assert_eq!(dew_point_from_vapor_pressure(0.0), DEW_POINT_FLOOR_C);
    assert_eq!(dew_point_from_vapor_pressure(-5.0), DEW_POINT_FLOOR_C);
    assert_eq!(dew_point_from_humidity_ratio(0.0), DEW_POINT_FLOOR_C);
}

#[test]
fn required_cooling_temperature_applies_margin() {
    let w = humidity_ratio_from_relative_humidity(22.0, 50.0);
    let dew = dew_point_from_humidity_ratio(w);
    let coil = required_cooling_temperature_c(w, 1.0);
    assert!((dew - coil - 1.0).abs() < 1e-9);
    // 22°C/50%의 노점은 11°C 부근이다.
    assert!((10.5..11.7).contains(&dew), "dew={dew}");
}

#[test]
fn compute_air_state_derives_all_fields() {
    let state = compute_air_state(20.0, Humidity::RelativePct(50.0)).expect("valid input");
    assert!((state.temperature_c - 20.0).abs() < 1e-12);
    assert!((state.relative_humidity_pct - 50.0).abs() < 1e-9);
    assert!((state.humidity_ratio - 0.007257).abs() < 1e-4);
    assert!(state.dew_point_c < state.temperature_c);

    // 절대습도 입력도 같은 상태점으로 수렴해야 한다.
    let by_w = compute_air_state(20.0, Humidity::AbsoluteGPerKg(state.humidity_ratio * 1000.0))
        .expect("valid input");
    assert!((by_w.relative_humidity_pct - 50.0).abs() < 1e-6);
    assert!((by_w.enthalpy_kj_per_kg - state.enthalpy_kj_per_kg).abs() < 1e-9);
}

#[test]
fn compute_air_state_rejects_bad_inputs() {
    assert!(matches!(
        compute_air_state(20.0, Humidity::RelativePct(120.0)),
        Err(PsychroError::RelativeHumidityOutOfRange(_))
    ));
    assert!(matches!(
        compute_air_state(20.0, Humidity::RelativePct(-1.0)),
        Err(PsychroError::RelativeHumidityOutOfRange(_))
    ));
    assert!(matches!(
        compute_air_state(20.0, Humidity::AbsoluteGPerKg(-0.5)),
        Err(PsychroError::NegativeHumidityRatio(_))
    ));
    assert!(matches!(
        compute_air_state(150.0, Humidity::RelativePct(50.0)),
        Err(PsychroError::TemperatureOutOfRange(_))
    ));
}

#[test]
fn supersaturated_ratio_reports_100_pct() {
    let w_sat = humidity_ratio_from_relative_humidity(10.0, 100.0);
    let rh = relative_humidity_from_humidity_ratio(10.0, w_sat * 2.0);
    assert!((rh - 100.0).abs() < 1e-12);
}
