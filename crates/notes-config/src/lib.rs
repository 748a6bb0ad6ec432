//! Configuration for notes-store consumers
//!
//! This crate provides:
//! - Config file discovery (CWD, home directory, user config directory)
//! - Store configuration (StoreConfig) parsed from TOML

pub mod config_file;
pub mod store_config;

pub use config_file::load_config_file;
pub use store_config::StoreConfig;
