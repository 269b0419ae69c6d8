pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ConsoleLog, LogSink, MemoryLog, NullLog, TracingLog};
pub use config::{toml_config::TomlConfig, AccountSettings};
pub use core::{AccountEngine, BankAccount};
pub use domain::model::{AccountSnapshot, Operation};
pub use domain::ports::Log;
pub use utils::error::{AccountError, Result};
