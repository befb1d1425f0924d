//! Prompt and request-body construction.

use serde_json::{Value, json};
use tl_core::insight::InsightRequest;

use crate::error::InsightError;

/// Section labels the model is asked to produce, in order.
pub const SECTIONS: [&str; 3] = ["Key Trends", "Notable Patterns", "Recommendations"];

/// Build the fixed analysis prompt for one chart.
///
/// # Errors
///
/// Returns [`InsightError::Encode`] if the chart data cannot be serialized.
pub fn build_prompt(request: &InsightRequest) -> Result<String, InsightError> {
    let data = serde_json::to_string_pretty(&request.chart_data)
        .map_err(|e| InsightError::Encode(e.to_string()))?;
    let context = request
        .context_description
        .as_deref()
        .map(|description| format!("Context: {description}\n"))
        .unwrap_or_default();

    Ok(format!(
        "Analyze this trade data. Provide ONLY the analysis sections below with NO \
introductory text, NO titles like \"Analysis:\", NO conclusions. Be direct and concise.

Chart: {title} ({kind} chart)
{context}Data: {data}

Format your response EXACTLY as:

**{trends}**
- [2-3 concise bullet points, max 20 words each]

**{patterns}**
- [1-2 concise observations, max 20 words each]

**{recommendations}**
- [2-3 actionable items, max 20 words each]

Keep all points brief and business-focused. NO extra text.",
        title = request.chart_title,
        kind = request.chart_kind,
        trends = SECTIONS[0],
        patterns = SECTIONS[1],
        recommendations = SECTIONS[2],
    ))
}

/// JSON body for a `generateContent` call.
#[must_use]
pub fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [
            { "parts": [ { "text": prompt } ] }
        ]
    })
}
