pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::console::ConsolePrompter;
pub use config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::{app::AppOptions, handler::AdHandler};
pub use domain::model::Advertisement;
pub use utils::error::{AdError, Result};
