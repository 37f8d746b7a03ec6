//! The in-memory record of transactions that receives submitted forms.

use crate::{
    Error,
    transaction::{CashFlowSummary, CompanyType, NewTransaction, Transaction},
};

/// Holds the transactions recorded since the server started.
///
/// Nothing is persisted, the ledger is empty after a restart.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    last_id: u64,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `new_transaction`, assigning it a unique ID and the spa as its company.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if the amount is NaN or infinite.
    pub fn add(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        if !new_transaction.amount.is_finite() {
            return Err(Error::InvalidAmount);
        }

        self.last_id += 1;

        let transaction = Transaction {
            id: self.last_id.to_string(),
            date: new_transaction.date,
            description: new_transaction.description,
            amount: new_transaction.amount,
            category: new_transaction.category,
            transaction_type: new_transaction.transaction_type,
            company_id: CompanyType::Spa,
            professional: Some(new_transaction.professional),
        };

        self.transactions.push(transaction.clone());

        Ok(transaction)
    }

    /// All recorded transactions, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The cash flow over every recorded transaction.
    pub fn summary(&self) -> CashFlowSummary {
        CashFlowSummary::from_transactions(&self.transactions)
    }
}
