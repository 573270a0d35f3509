// slipstream_sim/src/lib.rs

// This prelude is for convenience for other files WITHIN the slipstream_sim
// crate and for binaries built on it.
pub mod prelude;

pub mod cli;
pub mod config;
pub mod effects;
pub mod error;
pub mod kart;
pub mod physics;
pub mod runner;
pub mod script;
pub mod track;
