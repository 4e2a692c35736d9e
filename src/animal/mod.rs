//! Animal-sound scenario.
//!
//! Every [`Animal`](ports::Animal) can stand in for any other: the
//! [`AnimalSound`](services::AnimalSound) player emits exactly one line per
//! call whichever animal it is handed.

pub mod domain;
pub mod ports;
pub mod services;
