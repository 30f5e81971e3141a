//! Environment snapshot and execution mode.
//!
//! This module is the single point where process-wide environment state
//! enters the crate:
//!
//! - [`EnvSnapshot`] - an immutable capture of environment variables
//! - [`dotenv`] - `.env` file loading layered under the process environment
//! - [`ExecutionMode`] - the once-per-process invocation purpose
//!
//! Everything downstream of this module is a pure function of a snapshot.

pub mod dotenv;
pub mod mode;
pub mod snapshot;

pub use dotenv::load_env_file;
pub use mode::{ExecutionMode, CLEAN_FLAG, COMPILE_FLAG, TEST_FLAG};
pub use snapshot::EnvSnapshot;
