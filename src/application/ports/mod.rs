// src/application/ports/mod.rs
//! Seams the services depend on; implementations live in `infrastructure`.
pub mod security;
pub mod time;
pub mod util;
