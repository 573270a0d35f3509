// slipstream_core/src/models/mod.rs

pub mod engine_audio;
pub mod hop;
pub mod lean;
pub mod slide;
pub mod speed;
pub mod steering;
