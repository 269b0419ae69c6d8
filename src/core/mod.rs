pub mod account;
pub mod engine;

pub use crate::domain::model::{AccountSnapshot, Operation};
pub use crate::domain::ports::Log;
pub use crate::utils::error::Result;
pub use account::BankAccount;
pub use engine::AccountEngine;
