//! Configuration types and options for the CLI.
//!
//! This module contains the persistent configuration loaded from the user's
//! config file. These values only steer the CLI consumer; the registry data
//! is fixed at compile time.

pub mod file;

pub use file::{FileConfig, FileFilterConfig, FileOutputConfig};
