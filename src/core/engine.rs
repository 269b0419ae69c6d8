use crate::core::BankAccount;
use crate::domain::model::Operation;
use crate::domain::ports::Log;

/// Replays a list of operations against one account.
pub struct AccountEngine<L: Log> {
    account: BankAccount<L>,
}

impl<L: Log> AccountEngine<L> {
    pub fn new(account: BankAccount<L>) -> Self {
        Self { account }
    }

    pub fn run(&mut self, operations: &[Operation]) -> i32 {
        tracing::debug!(
            "Replaying {} operations from quantity {}",
            operations.len(),
            self.account.quantity()
        );

        for (step, operation) in operations.iter().enumerate() {
            let before = self.account.quantity();
            self.account.apply(operation);
            tracing::debug!(
                step = step + 1,
                %operation,
                before,
                after = self.account.quantity(),
                "Applied operation"
            );
        }

        tracing::debug!("Replay finished at quantity {}", self.account.quantity());
        self.account.quantity()
    }

    pub fn account(&self) -> &BankAccount<L> {
        &self.account
    }

    pub fn into_account(self) -> BankAccount<L> {
        self.account
    }
}
