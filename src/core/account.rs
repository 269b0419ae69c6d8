use crate::adapters::NullLog;
use crate::domain::model::{AccountSnapshot, Operation};
use crate::domain::ports::Log;
use std::io::{self, Write};

/// A single balance with an injected log.
///
/// Nothing is validated: amounts may be negative and the balance may go below
/// zero. Arithmetic wraps on overflow instead of panicking.
#[derive(Debug, Default)]
pub struct BankAccount<L: Log = NullLog> {
    log: L,
    quantity: i32,
}

impl<L: Log> BankAccount<L> {
    pub fn new(log: L) -> Self {
        Self { log, quantity: 0 }
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Overwrites the balance without logging.
    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }

    pub fn deposit(&mut self, amount: i32) {
        self.quantity = self.quantity.wrapping_add(amount);
        self.log.info(&format!(
            "BankAccount: Deposit of {} made. New balance is {}",
            amount, self.quantity
        ));
    }

    pub fn withdraw(&mut self, amount: i32) {
        self.quantity = self.quantity.wrapping_sub(amount);
        self.log.info(&format!("Withdrawn {} from account", amount));
    }

    pub fn apply(&mut self, operation: &Operation) {
        match *operation {
            Operation::Deposit(amount) => self.deposit(amount),
            Operation::Withdraw(amount) => self.withdraw(amount),
        }
    }

    pub fn display(&self) {
        if let Err(e) = self.display_to(&mut io::stdout().lock()) {
            tracing::warn!("Failed to write quantity to stdout: {}", e);
        }
    }

    pub fn display_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Quantity: {}", self.quantity)
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            quantity: self.quantity,
        }
    }

    pub fn log(&self) -> &L {
        &self.log
    }
}
