use crate::utils::error::{AccountError, Result};
use crate::utils::validation::validate_non_empty_string;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single account mutation, as written on the command line or in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "lowercase")]
pub enum Operation {
    Deposit(i32),
    Withdraw(i32),
}

impl Operation {
    pub fn amount(&self) -> i32 {
        match self {
            Operation::Deposit(amount) | Operation::Withdraw(amount) => *amount,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Deposit(amount) => write!(f, "deposit:{}", amount),
            Operation::Withdraw(amount) => write!(f, "withdraw:{}", amount),
        }
    }
}

impl FromStr for Operation {
    type Err = AccountError;

    /// Accepts `deposit:<n>` or `withdraw:<n>` (`=` also works as separator).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| AccountError::InvalidOperation {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (verb, amount) = s
            .split_once([':', '='])
            .ok_or_else(|| invalid("expected <verb>:<amount>"))?;

        validate_non_empty_string("amount", amount).map_err(|_| invalid("missing amount"))?;
        let amount: i32 = amount
            .trim()
            .parse()
            .map_err(|e| invalid(&format!("amount is not a 32-bit integer ({})", e)))?;

        match verb.trim().to_ascii_lowercase().as_str() {
            "deposit" => Ok(Operation::Deposit(amount)),
            "withdraw" => Ok(Operation::Withdraw(amount)),
            other => Err(invalid(&format!("unknown verb '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub quantity: i32,
}

impl AccountSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
