use crate::adapters::LogSink;
use crate::domain::model::Operation;
use crate::utils::error::{AccountError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub account: AccountConfig,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    pub opening_quantity: Option<i32>,
    pub log: Option<LogSink>,
}

impl TomlConfig {
    /// Loads a config file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AccountError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses config text after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AccountError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${NAME}` with the environment value; unknown names are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AccountError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[account]
opening_quantity = 100
log = "null"

[[operations]]
kind = "deposit"
amount = 25

[[operations]]
kind = "withdraw"
amount = 200
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.account.opening_quantity, Some(100));
        assert_eq!(config.account.log, Some(LogSink::Null));
        assert_eq!(
            config.operations,
            vec![Operation::Deposit(25), Operation::Withdraw(200)]
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.account.opening_quantity, None);
        assert_eq!(config.account.log, None);
        assert!(config.operations.is_empty());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NULL_ACCOUNT_TEST_OPENING", "-40");

        let toml_content = r#"
[account]
opening_quantity = ${NULL_ACCOUNT_TEST_OPENING}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.account.opening_quantity, Some(-40));

        std::env::remove_var("NULL_ACCOUNT_TEST_OPENING");
    }

    #[test]
    fn test_unknown_operation_kind_is_rejected() {
        let toml_content = r#"
[[operations]]
kind = "transfer"
amount = 1
"#;

        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, AccountError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[account]
log = "tracing"

[[operations]]
kind = "deposit"
amount = 3
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.account.log, Some(LogSink::Tracing));
        assert_eq!(config.operations, vec![Operation::Deposit(3)]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, AccountError::IoError(_)));
    }
}
