//! Backend worker: owns the Tokio runtime, the relay transport and the flag store.

pub mod commands;
pub mod runtime;
