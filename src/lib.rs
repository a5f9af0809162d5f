pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{toml_config::TomlConfig, ServerSettings};
pub use core::{cookbook::Cookbook, registry::Registry};
pub use server::{create_router, serve};
pub use utils::error::{CookbookError, Result};
