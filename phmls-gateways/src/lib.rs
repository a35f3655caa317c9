//! # phmls-gateways
//!
//! Implementations of the gateway traits of `phmls-core` that talk
//! to the outside world.

pub mod notify;
pub mod psgc;
