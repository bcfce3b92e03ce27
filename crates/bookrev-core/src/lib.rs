//! Core bookrev library (session, backend clients, config, logging).

pub mod api;
pub mod config;
pub mod session;
pub mod telemetry;
