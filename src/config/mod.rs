pub mod toml_config;

use crate::adapters::LogSink;
use crate::domain::model::Operation;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_file_extensions, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

/// Fully resolved settings for one replay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSettings {
    pub log: LogSink,
    pub opening_quantity: i32,
    pub operations: Vec<Operation>,
}

impl From<TomlConfig> for AccountSettings {
    fn from(config: TomlConfig) -> Self {
        Self {
            log: config.account.log.unwrap_or_default(),
            opening_quantity: config.account.opening_quantity.unwrap_or(0),
            operations: config.operations,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "null-account")]
#[command(about = "Replay deposits and withdrawals against an account with a pluggable log")]
pub struct CliConfig {
    /// Operations to apply in order, e.g. deposit:100 withdraw:40
    pub operations: Vec<String>,

    #[arg(long, value_enum, help = "Where account messages go [default: console]")]
    pub log: Option<LogSink>,

    #[arg(long, allow_negative_numbers = true, help = "Balance before any operation [default: 0]")]
    pub opening_quantity: Option<i32>,

    #[arg(long, help = "TOML file with [account] settings and [[operations]]")]
    pub config: Option<String>,

    #[arg(long, help = "Print the final snapshot as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit diagnostics as JSON lines")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the optional config file with the command line.
    ///
    /// Explicit flags win over the file, the file wins over defaults, and
    /// positional operations run after the file's operations.
    pub fn resolve(&self, file: Option<TomlConfig>) -> Result<AccountSettings> {
        let operations = self.parse_operations()?;
        let mut settings = file.map(AccountSettings::from).unwrap_or_default();

        if let Some(log) = self.log {
            settings.log = log;
        }
        if let Some(opening_quantity) = self.opening_quantity {
            settings.opening_quantity = opening_quantity;
        }
        settings.operations.extend(operations);

        Ok(settings)
    }

    pub fn parse_operations(&self) -> Result<Vec<Operation>> {
        self.operations.iter().map(|text| text.parse()).collect()
    }

    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        self.config.as_deref().map(TomlConfig::from_file).transpose()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
            validate_file_extensions("config", std::slice::from_ref(path), &["toml"])?;
        }
        Ok(())
    }
}
