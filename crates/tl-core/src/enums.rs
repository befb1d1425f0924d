//! Closed enums shared across Tradelens.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and parse case-insensitively through [`FromStr`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

fn unknown_variant(kind: &'static str, value: &str, all: &[&str]) -> CoreError {
    CoreError::UnknownVariant {
        kind,
        value: value.to_string(),
        expected: all.join(", "),
    }
}

// ---------------------------------------------------------------------------
// ChartKind
// ---------------------------------------------------------------------------

/// Visual form of the chart an insight is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    Mixed,
}

impl ChartKind {
    pub const ALL: [Self; 3] = [Self::Line, Self::Bar, Self::Mixed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                unknown_variant("chart kind", s, &Self::ALL.map(Self::as_str))
            })
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Dashboard color theme. The only UI preference that is persisted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Monokai,
    Cyberpunk,
    Ocean,
}

impl Theme {
    pub const ALL: [Self; 5] = [
        Self::Light,
        Self::Dark,
        Self::Monokai,
        Self::Cyberpunk,
        Self::Ocean,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Monokai => "monokai",
            Self::Cyberpunk => "cyberpunk",
            Self::Ocean => "ocean",
        }
    }

    /// Class applied to the document root while this theme is active.
    #[must_use]
    pub fn css_class(self) -> String {
        format!("{}-theme", self.as_str())
    }

    /// Whether the theme renders light text on a dark background.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        !matches!(self, Self::Light)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| unknown_variant("theme", s, &Self::ALL.map(Self::as_str)))
    }
}
