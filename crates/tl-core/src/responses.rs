//! CLI response types returned by `tlx` commands.
//!
//! These structs define the JSON shape of `tlx charts`, `tlx insight`,
//! `tlx render` and `tlx theme`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::charts::ChartSpec;
use crate::enums::{ChartKind, Theme};

/// One row of `tlx charts`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChartSummary {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub rows: usize,
}

impl From<&ChartSpec> for ChartSummary {
    fn from(chart: &ChartSpec) -> Self {
        Self {
            id: chart.id.clone(),
            title: chart.title.clone(),
            kind: chart.kind,
            rows: chart.data.len(),
        }
    }
}

/// Response from `tlx insight`.
///
/// `raw` and `html` are set once the dialog is ready; `error` once it failed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InsightResponse {
    pub chart: String,
    pub title: String,
    pub state: String,
    pub status: String,
    pub raw: Option<String>,
    pub html: Option<String>,
    pub error: Option<String>,
}

/// Response from `tlx render`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RenderResponse {
    pub html: String,
    pub blocks: usize,
}

/// Response from `tlx theme get` and `tlx theme set`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThemeResponse {
    pub theme: Theme,
    pub css_class: String,
    pub dark: bool,
    pub path: String,
}

/// One row of `tlx theme list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThemeEntry {
    pub theme: Theme,
    pub dark: bool,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::find_chart;

    #[test]
    fn summary_counts_rows() {
        let chart = find_chart("top-ports").unwrap();
        let summary = ChartSummary::from(&chart);
        assert_eq!(summary.id, "top-ports");
        assert_eq!(summary.kind, ChartKind::Bar);
        assert_eq!(summary.rows, chart.data.len());
    }

    #[test]
    fn summary_serializes_mixed_kind() {
        let summary = ChartSummary::from(&find_chart("opportunity-matrix").unwrap());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["kind"], "mixed");
        assert_eq!(json["rows"], 7);
    }

    #[test]
    fn insight_response_serializes_nulls() {
        let resp = InsightResponse {
            chart: "trade-value".into(),
            title: "AI Insights: Import vs Export Trend".into(),
            state: "failed".into(),
            status: "failure".into(),
            raw: None,
            html: None,
            error: Some("Failed to generate insights. Please try again.".into()),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json["raw"].is_null());
        assert_eq!(json["state"], "failed");
    }
}
