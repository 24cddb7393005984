//! Kwan CLI Library
//!
//! Terminal driver for the Kwan Player playback core: a simulated transport,
//! a command parser, and configuration loading.
//!
//! This library exposes the core components for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod transport;

// Re-export commonly used types for convenience
pub use commands::{Command, Session};
pub use config::AppConfig;
pub use error::{CliError, Result};
pub use transport::SimulatedTransport;
