//! 습공기(psychrometrics) 물성 계산 모듈 모음.

pub mod moist_air;

pub use moist_air::*;
