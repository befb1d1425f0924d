//! Block and inline tree produced by the parser.

/// Inline content of a heading, list item, or paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Literal text. Not escaped yet.
    Text(String),
    /// `**text**`
    Strong(Vec<Inline>),
    /// `*text*`
    Emphasis(Vec<Inline>),
}

/// One entry of a [`Block::List`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Original numeral of a numbered line (e.g. `"3."`), `None` for bullets.
    pub marker: Option<String>,
    pub inlines: Vec<Inline>,
}

/// Top-level element of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `---` on its own line.
    Rule,
    /// `## text` (level 2) or `### text` (level 3).
    Heading { level: u8, inlines: Vec<Inline> },
    /// A run of contiguous bullet and numbered lines.
    List(Vec<ListItem>),
    /// Consecutive plain-text lines, joined with `\n`.
    Paragraph(Vec<Inline>),
}

/// Concatenated literal text of an inline run, without markup.
#[must_use]
pub fn plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    collect_text(inlines, &mut out);
    out
}

fn collect_text(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push_str(text),
            Inline::Strong(children) | Inline::Emphasis(children) => collect_text(children, out),
        }
    }
}

impl Block {
    /// Whether the block would render without any visible text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Rule => false,
            Self::Heading { inlines, .. } | Self::Paragraph(inlines) => {
                plain_text(inlines).trim().is_empty()
            }
            Self::List(items) => items.is_empty(),
        }
    }
}
