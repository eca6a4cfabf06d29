//! EventEase host - wires the in-memory managers into a running process.
//!
//! The managers in `eventease-services` know nothing about each other or
//! about how they are hosted. This crate supplies the rest:
//!
//! - [`config`]: environment-driven configuration
//! - [`services`]: the [`AppServices`] composition root holding one shared
//!   instance of each manager
//! - [`telemetry`]: tracing subscriber setup
//! - [`walkthrough`]: scripted visitor traffic used by the `eventease` binary

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod services;
pub mod telemetry;
pub mod walkthrough;

pub use config::Config;
pub use error::ConfigError;
pub use services::AppServices;
