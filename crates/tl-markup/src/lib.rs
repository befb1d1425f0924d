//! # tl-markup
//!
//! Converts the Markdown subset produced by the insights model into an HTML
//! fragment that can be embedded directly in a page.
//!
//! Supported syntax: `##`/`###` headings, `**strong**`, `*emphasis*`, `-`/`*`
//! bullets, `N.` numbered items, `---` rules, and blank-line separated
//! paragraphs. Anything else is treated as paragraph text.
//!
//! Rendering is a two-step pipeline: [`parser::parse`] builds a [`Block`]
//! tree, then [`render::render_blocks`] writes markup from it. Both steps are
//! pure, so the same input always yields byte-identical output.
//!
//! ```
//! use tl_markup::render_markup;
//!
//! let html = render_markup("**Key Trends**\n- Growth up");
//! assert_eq!(
//!     html.as_str(),
//!     "<p><strong>Key Trends</strong></p>\n<ul>\n<li>Growth up</li>\n</ul>"
//! );
//! ```

pub mod ast;
pub mod inline;
pub mod parser;
pub mod render;

pub use ast::{Block, Inline, ListItem};
pub use render::{RenderOptions, escape_html};

use std::fmt;

use serde::Serialize;

/// Rendered HTML fragment. Always derived from raw text, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MarkupFragment(String);

impl MarkupFragment {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MarkupFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MarkupFragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Render raw model output with default options.
#[must_use]
pub fn render_markup(raw: &str) -> MarkupFragment {
    render_markup_with(raw, RenderOptions::default())
}

/// Render raw model output.
#[must_use]
pub fn render_markup_with(raw: &str, options: RenderOptions) -> MarkupFragment {
    MarkupFragment(render::render_blocks(&parser::parse(raw), options))
}
