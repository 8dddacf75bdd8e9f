//! Process-wide infrastructure shared by every other crate: the startup
//! configuration and the global logger.

pub mod config;
pub mod logging;
