//! Backend worker: owns the tokio runtime and performs API calls off the UI thread.

pub mod commands;
pub mod runtime;
