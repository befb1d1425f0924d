//! `generateContent` response shape.
//!
//! Every level is optional so that a well-formed reply missing the expected
//! path still parses and falls back to [`NO_INSIGHTS`].

use serde::Deserialize;

/// Text used when a reply carries no candidate text.
pub const NO_INSIGHTS: &str = "No insights generated.";

#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// First candidate's first text part, if present and non-empty.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    /// [`first_text`](Self::first_text) or the placeholder.
    #[must_use]
    pub fn into_text(self) -> String {
        self.first_text().unwrap_or(NO_INSIGHTS).to_string()
    }
}
