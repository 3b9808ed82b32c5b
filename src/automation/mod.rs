//! Channel automation boundary.
//!
//! Everything browser- and UI-specific lives behind the `ChannelAutomation`
//! trait. This crate ships a process-backed adapter that delegates to an
//! external driver command, plus a scripted in-process fake for tests and
//! dry runs.

pub mod client;
pub mod process;
pub mod types;

pub use client::{ChannelAutomation, ScriptedAutomation};
pub use process::{DriverProcess, DriverProcessConfig};
pub use types::{ChannelTarget, CommandScript, Credentials};
