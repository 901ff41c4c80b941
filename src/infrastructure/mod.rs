//! Infrastructure layer - Port implementations
//!
//! Concrete implementations of the domain ports that do not depend on a
//! particular microcontroller: the lock-free settings store and the byte
//! layout used to persist it.

pub mod repositories;
pub mod services;
