use hvac_energy_toolbox::conversion::{convert, ConversionError};
use hvac_energy_toolbox::quantity::QuantityKind;

#[test]
fn temperature_conversions() {
    let f = convert(QuantityKind::Temperature, 20.0, "C", "F").expect("convert");
    assert!((f - 68.0).abs() < 1e-9);
    let k = convert(QuantityKind::Temperature, 0.0, "C", "K").expect("convert");
    assert!((k - 273.15).abs() < 1e-9);
    // 단위명은 대소문자를 가리지 않는다.
    let c = convert(QuantityKind::Temperature, 212.0, "f", "c").expect("convert");
    assert!((c - 100.0).abs() < 1e-9);
}

#[test]
fn temperature_difference_has_no_offset() {
    let df = convert(QuantityKind::TemperatureDifference, 10.0, "K", "F").expect("convert");
    assert!((df - 18.0).abs() < 1e-9);
    let dk = convert(QuantityKind::TemperatureDifference, 10.0, "C", "K").expect("convert");
    assert!((dk - 10.0).abs() < 1e-12);
}

#[test]
fn airflow_conversions() {
    let cfm = convert(QuantityKind::Airflow, 1.699_011, "m3/h", "cfm").expect("convert");
    assert!((cfm - 1.0).abs() < 1e-9);
    let lps = convert(QuantityKind::Airflow, 3600.0, "m3/h", "l/s").expect("convert");
    assert!((lps - 1000.0).abs() < 1e-9);
    let m3h = convert(QuantityKind::Airflow, 1.0, "m3/s", "m3/h").expect("convert");
    assert!((m3h - 3600.0).abs() < 1e-9);
}

#[test]
fn power_conversions() {
    let w = convert(QuantityKind::Power, 2.5, "kW", "W").expect("convert");
    assert!((w - 2500.0).abs() < 1e-9);
    let btu = convert(QuantityKind::Power, 1.0, "kW", "Btu/h").expect("convert");
    assert!((btu - 3412.0).abs() < 2.0, "btu/h={btu}");
}

#[test]
fn energy_conversions() {
    let mj = convert(QuantityKind::Energy, 1.0, "kWh", "MJ").expect("convert");
    assert!((mj - 3.6).abs() < 1e-9);
    let kwh = convert(QuantityKind::Energy, 1.0, "GJ", "kWh").expect("convert");
    assert!((kwh - 277.777_78).abs() < 1e-3);
}

#[test]
fn specific_enthalpy_and_humidity_ratio() {
    let jkg = convert(QuantityKind::SpecificEnthalpy, 38.5, "kJ/kg", "J/kg").expect("convert");
    assert!((jkg - 38_500.0).abs() < 1e-6);
    let kgkg = convert(QuantityKind::HumidityRatio, 8.2, "g/kg", "kg/kg").expect("convert");
    assert!((kgkg - 0.0082).abs() < 1e-12);
}

#[test]
fn unknown_unit_is_rejected() {
    assert!(matches!(
        convert(QuantityKind::Temperature, 1.0, "R", "C"),
        Err(ConversionError::UnknownUnit(_))
    ));
    assert!(matches!(
        convert(QuantityKind::Airflow, 1.0, "m3/h", "gpm"),
        Err(ConversionError::UnknownUnit(_))
    ));
}
