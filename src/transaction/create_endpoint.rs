//! Defines the endpoint for submitting the new transaction form.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    AppState, Error, endpoints,
    ledger::Ledger,
    timezone::local_today,
    transaction::{
        core::{Professional, TransactionType},
        draft::TransactionDraft,
        form::transaction_form_view,
    },
};

/// The state needed to record a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The ledger that receives submitted transactions.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data sent by the new transaction form.
///
/// Text fields are taken as typed, validation happens in [TransactionDraft::submit].
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TransactionFormData {
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// The amount as typed.
    #[serde(default)]
    pub amount: String,
    /// The selected category, empty for the placeholder.
    #[serde(default)]
    pub category: String,
    /// The date of the transaction as typed, normally `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// Income or expense.
    #[serde(rename = "type", default)]
    pub transaction_type: TransactionType,
    /// The selected professional, if any.
    #[serde(default)]
    pub professional: Option<Professional>,
}

impl TransactionFormData {
    /// Replay the submitted fields onto a fresh draft.
    fn into_draft(self, today: Date) -> TransactionDraft {
        let mut draft = TransactionDraft::new(today);

        draft.select_type(self.transaction_type);
        if let Some(professional) = self.professional {
            draft.select_professional(professional);
        }
        draft.set_description(&self.description);
        draft.set_amount(&self.amount);
        draft.set_date(&self.date);
        draft.set_category(&self.category);

        draft
    }
}

/// A route handler for recording a new transaction.
///
/// Redirects to the transactions view on success. If the form is incomplete,
/// the form is sent back with the values filled in and the validation message.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionFormData>,
) -> Response {
    let Some(today) = local_today(&state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return Error::InvalidTimezoneError(state.local_timezone).into_alert_response();
    };

    let mut draft = form.into_draft(today);

    let submission = draft.submit(|new_transaction| {
        let mut ledger = state.ledger.lock().map_err(|error| {
            tracing::error!("could not acquire ledger lock: {error}");
            Error::LedgerLockError
        })?;

        ledger.add(new_transaction)
    });

    match submission {
        Ok(Ok(transaction)) => {
            tracing::info!(
                "Recorded transaction {} ({} {} for {:?})",
                transaction.id,
                transaction.transaction_type,
                transaction.amount,
                transaction.professional
            );

            (
                HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Ok(Err(error)) => {
            tracing::error!("could not record transaction: {error}");

            error.into_alert_response()
        }
        Err(error) => {
            tracing::debug!("rejected transaction form: {error}");

            transaction_form_view(&draft).into_response()
        }
    }
}
