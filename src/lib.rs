//! chorebot - scheduled chat-command runner with durable run tracking
//!
//! Each invocation performs one run: increment a persistent execution
//! counter, deliver a command script through the channel-automation
//! boundary, journal the outcome, and publish the journal and counter
//! artifacts to a git remote every N runs.

pub mod automation;
pub mod counter;
pub mod domain;
pub mod error;
pub mod journal;
pub mod publish;
pub mod runner;
pub mod storage;

pub use error::{ChorebotError, Result};
