pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "chat-mirror")]
#[command(about = "Mirrors a chat server's message list over its live socket")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:8000")]
    pub api_base_url: String,

    #[arg(long, default_value = "ws://localhost:8000")]
    pub socket_url: String,

    #[arg(long, default_value = "30")]
    pub request_timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU/memory usage during the session")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_base_url", &self.api_base_url)?;
        validation::validate_socket_url("socket_url", &self.socket_url)?;
        // Same bounds as the TOML provider; the timeout rule has one home.
        validation::validate_range("request_timeout_secs", self.request_timeout_secs, 1, 300)?;
        Ok(())
    }
}
