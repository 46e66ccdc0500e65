//! 팬 동력·연간 에너지·비용·CO₂ 등 프로세스 결과의 후단 집계 모듈 모음.

pub mod energy_cost;
pub mod fan_power;

pub use energy_cost::*;
pub use fan_power::*;
