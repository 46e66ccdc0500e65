/// 팬 동력 계산 입력.
#[derive(Debug, Clone)]
pub struct FanPowerInput {
    /// 급기 체적 유량 [m³/h]
    pub airflow_m3_per_h: f64,
    /// 비팬동력 SFP [W/(m³/h)]
    pub specific_fan_power_w_per_m3h: f64,
}

/// 팬 동력 계산 결과.
#[derive(Debug, Clone)]
pub struct FanPowerResult {
    /// 팬 전기 동력 [kW]
    pub power_kw: f64,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

/// 체적 유량과 SFP로 팬 동력을 계산한다.
pub fn compute_fan_power(input: FanPowerInput) -> FanPowerResult {
    let power_kw = input.airflow_m3_per_h.max(0.0) * input.specific_fan_power_w_per_m3h.max(0.0)
        / 1000.0;

    let mut warnings = Vec::new();
    if input.specific_fan_power_w_per_m3h > 6.0 {
        warnings.push(format!(
            "SFP {:.1} W/(m³/h)는 통상 범위(0.5~6)를 벗어납니다.",
            input.specific_fan_power_w_per_m3h
        ));
    }

    FanPowerResult { power_kw, warnings }
}
