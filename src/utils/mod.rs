//! Utils - Config Storage, Formatting and Logging

pub mod config_store;
pub mod format;
pub mod logging;
