// slipstream_sim/src/effects/mod.rs

//! Cosmetic per-frame state machines: turbo exhaust flipbook, wheel sprite
//! blink, and exhaust smoke puffs. These read the kart state and the shared
//! timer abstraction; nothing here feeds back into physics.

pub mod exhaust;
pub mod smoke;
pub mod wheels;
