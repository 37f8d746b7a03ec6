//! Totals for income, expenses and the resulting balance.

use serde::{Deserialize, Serialize};

use crate::transaction::core::{Transaction, TransactionType};

/// The cash flow over a set of transactions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSummary {
    /// The sum of all income.
    pub total_income: f64,
    /// The sum of all expenses.
    pub total_expense: f64,
    /// Income minus expenses.
    pub balance: f64,
}

impl CashFlowSummary {
    /// Sum up `transactions` by their type.
    pub fn from_transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let (total_income, total_expense) =
            transactions
                .into_iter()
                .fold((0.0, 0.0), |(income, expense), transaction| {
                    match transaction.transaction_type {
                        TransactionType::Income => (income + transaction.amount, expense),
                        TransactionType::Expense => (income, expense + transaction.amount),
                    }
                });

        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CashFlowSummary;
    use crate::transaction::core::{CompanyType, Transaction, TransactionType};

    fn transaction(amount: f64, transaction_type: TransactionType) -> Transaction {
        Transaction {
            id: "1".to_owned(),
            date: "2024-03-01".to_owned(),
            description: "test".to_owned(),
            amount,
            category: "Outros".to_owned(),
            transaction_type,
            company_id: CompanyType::Spa,
            professional: None,
        }
    }

    #[test]
    fn empty_summary_is_zero() {
        let summary = CashFlowSummary::from_transactions(&[]);

        assert_eq!(summary, CashFlowSummary::default());
    }

    #[test]
    fn sums_income_and_expenses_separately() {
        let transactions = [
            transaction(150.0, TransactionType::Income),
            transaction(50.0, TransactionType::Income),
            transaction(80.0, TransactionType::Expense),
        ];

        let summary = CashFlowSummary::from_transactions(&transactions);

        assert_eq!(
            summary,
            CashFlowSummary {
                total_income: 200.0,
                total_expense: 80.0,
                balance: 120.0,
            }
        );
    }

    #[test]
    fn balance_goes_negative_when_expenses_exceed_income() {
        let transactions = [
            transaction(100.0, TransactionType::Income),
            transaction(800.0, TransactionType::Expense),
        ];

        let summary = CashFlowSummary::from_transactions(&transactions);

        assert_eq!(summary.balance, -700.0);
    }
}
