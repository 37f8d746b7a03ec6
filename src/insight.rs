//! The shape of the advice returned by the AI insight service.

use serde::{Deserialize, Serialize};

/// Structured advice about the spa's cash flow.
///
/// The service that produces these lives outside this crate, this type only
/// fixes the shape of its responses.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiInsightResponse {
    /// A short overview of the current situation.
    pub summary: String,
    /// Suggested actions, most important first.
    pub suggestions: Vec<String>,
    /// Things that need attention, most urgent first.
    pub warnings: Vec<String>,
}
