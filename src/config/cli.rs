use crate::config::toml_config::TomlConfig;
use crate::config::ServerSettings;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cookbook")]
#[command(about = "In-memory recipe registry served over HTTP")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind (default 127.0.0.1)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (default 8080)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// JSON array of entries to load at start-up
    #[arg(long)]
    pub seed_file: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Reads the config file, if any, then applies command line overrides.
    pub fn resolve(&self) -> Result<ServerSettings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_settings(),
            None => ServerSettings::default(),
        };

        if let Some(host) = &self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(seed_file) = &self.seed_file {
            settings.seed_file = Some(seed_file.clone());
        }
        settings.json_logs |= self.json_logs;

        Ok(settings)
    }
}
