// slipstream_core/src/lib.rs

// This file defines the public modules of your library.
pub mod error;
pub mod intent;
pub mod models;
pub mod prelude;
pub mod timer;
pub mod tuning;
pub mod types;
