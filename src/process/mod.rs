//! 공조기(AHU) 공기처리 프로세스 시뮬레이션 모듈 모음.

pub mod air_treatment;

pub use air_treatment::*;
