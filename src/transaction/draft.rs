//! The editable state behind the form for recording a transaction, and the
//! rules for turning it into a [NewTransaction].

use time::Date;

use crate::transaction::core::{NewTransaction, Professional, TransactionType};

/// The reasons a submission of the transaction form can be refused.
///
/// The display text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// One of description, amount or category was left empty.
    #[error("Preencha todos os campos obrigatórios.")]
    MissingRequiredField,

    /// No professional was selected.
    #[error("Escolha um profissional.")]
    MissingProfessional,

    /// The draft was already handed over and cannot be submitted again.
    #[error("Este lançamento já foi salvo.")]
    AlreadySubmitted,
}

/// Where a draft is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    /// The user is filling in the form.
    Editing,
    /// The last submission failed validation.
    Invalid(FormError),
    /// The payload was handed to the receiver. No further submissions are
    /// accepted.
    Submitted,
}

/// A transaction under construction in an open form.
///
/// A draft starts out with empty text fields, today's date, the income type
/// and no professional. It lives only as long as the form: closing the form
/// consumes it, see [TransactionDraft::close].
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    description: String,
    amount: String,
    category: String,
    date: String,
    transaction_type: TransactionType,
    professional: Option<Professional>,
    status: FormStatus,
}

impl TransactionDraft {
    /// Create a draft with the default values, dated `today`.
    pub fn new(today: Date) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            category: String::new(),
            date: today.to_string(),
            transaction_type: TransactionType::default(),
            professional: None,
            status: FormStatus::Editing,
        }
    }

    /// The description typed so far.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The amount text typed so far.
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// The selected category, empty if none has been selected.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The date, normally `YYYY-MM-DD`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The active transaction type. Exactly one type is active at any time.
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// The selected professional, if any.
    pub fn professional(&self) -> Option<Professional> {
        self.professional
    }

    /// Where the draft is in its lifecycle.
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// The message from the last failed submission, if it is still showing.
    pub fn error(&self) -> Option<&FormError> {
        match &self.status {
            FormStatus::Invalid(error) => Some(error),
            _ => None,
        }
    }

    /// Whether the draft has been handed over.
    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }

    /// Set the description.
    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_owned();
        self.touch();
    }

    /// Set the amount text. It is only parsed on submission.
    pub fn set_amount(&mut self, amount: &str) {
        self.amount = amount.to_owned();
        self.touch();
    }

    /// Set the category. An empty string means no category is selected.
    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_owned();
        self.touch();
    }

    /// Set the date.
    pub fn set_date(&mut self, date: &str) {
        self.date = date.to_owned();
        self.touch();
    }

    /// Make `transaction_type` the active type, deselecting the other one.
    pub fn select_type(&mut self, transaction_type: TransactionType) {
        self.transaction_type = transaction_type;
        self.touch();
    }

    /// Select `professional`, replacing any earlier selection.
    pub fn select_professional(&mut self, professional: Professional) {
        self.professional = Some(professional);
        self.touch();
    }

    /// Validate the draft and, if it passes, hand the payload to `on_add`.
    ///
    /// Any error from an earlier attempt is cleared first. Validation stops
    /// at the first failure:
    /// 1. description, amount and category must not be empty,
    /// 2. a professional must be selected.
    ///
    /// The amount is parsed from the longest numeric prefix of the typed text.
    /// Text that does not start with a number is passed on as NaN, it is up to
    /// the receiver to reject it.
    ///
    /// `on_add` is called at most once over the lifetime of the draft and its
    /// return value is passed back to the caller.
    ///
    /// # Errors
    /// Returns a [FormError] without calling `on_add` if validation fails or
    /// the draft was already submitted.
    pub fn submit<F, R>(&mut self, on_add: F) -> Result<R, FormError>
    where
        F: FnOnce(NewTransaction) -> R,
    {
        if self.is_submitted() {
            return Err(FormError::AlreadySubmitted);
        }

        self.status = FormStatus::Editing;

        if self.description.is_empty() || self.amount.is_empty() || self.category.is_empty() {
            return Err(self.reject(FormError::MissingRequiredField));
        }

        let Some(professional) = self.professional else {
            return Err(self.reject(FormError::MissingProfessional));
        };

        let payload = NewTransaction {
            description: self.description.clone(),
            amount: parse_leading_float(&self.amount),
            category: self.category.clone(),
            date: self.date.clone(),
            transaction_type: self.transaction_type,
            professional,
        };

        self.status = FormStatus::Submitted;

        Ok(on_add(payload))
    }

    /// Dismiss the form without submitting, discarding the draft.
    pub fn close<F>(self, on_close: F)
    where
        F: FnOnce(),
    {
        on_close();
    }

    fn reject(&mut self, error: FormError) -> FormError {
        self.status = FormStatus::Invalid(error.clone());
        error
    }

    /// Editing an invalid draft puts it back into the editing state.
    fn touch(&mut self) {
        if matches!(self.status, FormStatus::Invalid(_)) {
            self.status = FormStatus::Editing;
        }
    }
}

/// Parse the longest prefix of `text` that forms a decimal number.
///
/// Leading whitespace is skipped, a sign and an exponent are accepted, as is
/// `Infinity`. Returns NaN when no number can be read, e.g. "abc".
pub fn parse_leading_float(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }

        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
