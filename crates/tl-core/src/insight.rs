//! Insight request and result types.
//!
//! An [`InsightRequest`] is built fresh for every call to the requester and is
//! never mutated afterwards. The matching [`InsightResult`] starts out
//! [`InsightResult::Pending`] and settles exactly once.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ChartKind;

/// Everything the requester needs to describe one chart to the remote model.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InsightRequest {
    pub chart_title: String,
    /// Chart rows in display order. Records are opaque to the requester and
    /// only ever serialized into the prompt.
    pub chart_data: Vec<serde_json::Value>,
    pub chart_kind: ChartKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_description: Option<String>,
}

impl InsightRequest {
    #[must_use]
    pub fn new(
        chart_title: impl Into<String>,
        chart_kind: ChartKind,
        chart_data: Vec<serde_json::Value>,
    ) -> Self {
        Self {
            chart_title: chart_title.into(),
            chart_data,
            chart_kind,
            context_description: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, description: impl Into<String>) -> Self {
        self.context_description = Some(description.into());
        self
    }
}

/// State of a single insight request.
///
/// ```text
/// pending → text
///         → failure
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum InsightResult {
    #[default]
    Pending,
    /// Raw model output, not yet rendered.
    Text(String),
    /// User-facing failure message.
    Failure(String),
}

impl InsightResult {
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(raw) => Some(raw),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Text(_) => "text",
            Self::Failure(_) => "failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn with_context_sets_description() {
        let req = InsightRequest::new("Trend", ChartKind::Line, vec![json!({"month": "Jan"})])
            .with_context("12-month view");
        assert_eq!(req.context_description.as_deref(), Some("12-month view"));
        assert_eq!(req.chart_data.len(), 1);
    }

    #[test]
    fn pending_is_not_settled() {
        assert!(!InsightResult::Pending.is_settled());
        assert!(InsightResult::Text("x".into()).is_settled());
        assert!(InsightResult::Failure("x".into()).is_settled());
    }

    #[test]
    fn text_accessor_only_for_text() {
        assert_eq!(InsightResult::Text("raw".into()).text(), Some("raw"));
        assert_eq!(InsightResult::Failure("raw".into()).text(), None);
    }

    #[test]
    fn result_serializes_with_status_tag() {
        let value = serde_json::to_value(InsightResult::Failure("boom".into())).unwrap();
        assert_eq!(value, json!({"status": "failure", "message": "boom"}));
    }
}
