//! Defines the core data models for transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

// ============================================================================
// VOCABULARY
// ============================================================================

/// Whether money came into or went out of the business.
///
/// Serialized as `"INCOME"` or `"EXPENSE"`, any other string is rejected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Money earned, e.g. a paid treatment.
    #[default]
    Income,
    /// Money spent, e.g. rent or supplies.
    Expense,
}

impl TransactionType {
    /// Both transaction types in the order they are shown in the form.
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    /// The wire value, as sent by the form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }

    /// The label shown to users.
    pub const fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Receita",
            TransactionType::Expense => "Despesa",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A staff member that a transaction is attributed to.
///
/// The set is closed: adding a professional means adding a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Professional {
    /// Erika.
    Erika,
    /// Edilene.
    Edilene,
}

impl Professional {
    /// Every professional, in the order they are offered in the form.
    pub const ALL: [Professional; 2] = [Professional::Erika, Professional::Edilene];

    /// The name of the professional, which doubles as the wire value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Professional::Erika => "Erika",
            Professional::Edilene => "Edilene",
        }
    }
}

impl Display for Professional {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The business that owns a transaction. There is only the one spa.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyType {
    /// The spa.
    #[default]
    #[serde(rename = "SPA")]
    Spa,
}

/// The categories offered when recording a transaction.
pub const CATEGORIES: [&str; 6] = [
    "Vendas",
    "Serviços",
    "Marketing",
    "Pessoal",
    "Produtos",
    "Outros",
];

// ============================================================================
// MODELS
// ============================================================================

/// The unique identifier of a recorded transaction.
pub type TransactionId = String;

/// An expense or income that has been recorded in the ledger.
///
/// Transactions are only created by [crate::Ledger::add], which assigns the
/// ID and company. The form only ever produces a [NewTransaction].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// When the transaction happened, formatted as `YYYY-MM-DD`.
    pub date: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money earned or spent.
    pub amount: f64,
    /// The label used to group the transaction, usually one of [CATEGORIES].
    pub category: String,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The business the transaction belongs to.
    pub company_id: CompanyType,
    /// The staff member responsible for the transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professional: Option<Professional>,
}

/// The payload handed over by the transaction form after a successful
/// submission.
///
/// The receiver is responsible for assigning an ID and company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Text detailing the transaction.
    pub description: String,
    /// The parsed amount. This is NaN if the typed text did not start with
    /// a number.
    pub amount: f64,
    /// The selected category.
    pub category: String,
    /// The date as typed in the form, normally `YYYY-MM-DD`.
    pub date: String,
    /// Income or expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The professional chosen in the form.
    pub professional: Professional,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{CompanyType, NewTransaction, Professional, Transaction, TransactionType};

    #[test]
    fn transaction_type_uses_uppercase_wire_values() {
        assert_eq!(
            serde_json::to_value(TransactionType::Income).unwrap(),
            json!("INCOME")
        );
        assert_eq!(
            serde_json::from_value::<TransactionType>(json!("EXPENSE")).unwrap(),
            TransactionType::Expense
        );
    }

    #[test]
    fn unknown_vocabulary_is_rejected() {
        assert!(serde_json::from_value::<TransactionType>(json!("income")).is_err());
        assert!(serde_json::from_value::<TransactionType>(json!("TRANSFER")).is_err());
        assert!(serde_json::from_value::<Professional>(json!("Maria")).is_err());
        assert!(serde_json::from_value::<CompanyType>(json!("SALON")).is_err());
    }

    #[test]
    fn default_transaction_type_is_income() {
        assert_eq!(TransactionType::default(), TransactionType::Income);
    }

    #[test]
    fn payload_has_exact_field_set() {
        let payload = NewTransaction {
            description: "Limpeza de Pele".to_owned(),
            amount: 150.0,
            category: "Serviços".to_owned(),
            date: "2024-03-01".to_owned(),
            transaction_type: TransactionType::Income,
            professional: Professional::Erika,
        };

        let got = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            got,
            json!({
                "description": "Limpeza de Pele",
                "amount": 150.0,
                "category": "Serviços",
                "date": "2024-03-01",
                "type": "INCOME",
                "professional": "Erika",
            })
        );
    }

    #[test]
    fn transaction_serializes_company_id() {
        let transaction = Transaction {
            id: "1".to_owned(),
            date: "2024-03-01".to_owned(),
            description: "Aluguel".to_owned(),
            amount: 800.0,
            category: "Pessoal".to_owned(),
            transaction_type: TransactionType::Expense,
            company_id: CompanyType::Spa,
            professional: None,
        };

        let got = serde_json::to_value(&transaction).unwrap();

        assert_eq!(got["companyId"], json!("SPA"));
        assert_eq!(got["type"], json!("EXPENSE"));
        assert!(got.get("professional").is_none());
    }
}
