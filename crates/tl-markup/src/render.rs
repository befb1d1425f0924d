//! Block tree to HTML fragment.
//!
//! Every leaf string goes through [`escape_html`] before it is wrapped, so raw
//! `<`, `&` and quotes in model output can never open or break an element.

use std::fmt::Write;

use crate::ast::{Block, Inline, ListItem};

/// Rendering switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit the dashboard's utility-class attributes on every element.
    pub classes: bool,
}

mod class {
    pub const RULE: &str = "my-4 border-t border-border";
    pub const H2: &str = "text-lg font-semibold mt-4 mb-2 text-foreground";
    pub const H3: &str = "text-base font-semibold mt-3 mb-2 text-foreground";
    pub const STRONG: &str = "font-semibold";
    pub const LIST: &str = "list-disc ml-6 mb-4 space-y-1 text-foreground";
    pub const ITEM: &str = "ml-4 mb-1.5";
    pub const NUMBERED_ITEM: &str = "ml-4 mb-1.5 text-foreground";
    pub const MARKER: &str = "text-primary";
    pub const PARAGRAPH: &str = "mb-3 text-foreground";
}

/// Escape the characters that are reserved in HTML text and attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Render blocks to an HTML fragment, one top-level element per line.
#[must_use]
pub fn render_blocks(blocks: &[Block], options: RenderOptions) -> String {
    let renderer = Renderer { options };
    blocks
        .iter()
        .filter(|block| !block.is_blank())
        .map(|block| renderer.block(block))
        .collect::<Vec<_>>()
        .join("\n")
}

struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    fn attr(&self, class: &str) -> String {
        if self.options.classes {
            format!(" class=\"{class}\"")
        } else {
            String::new()
        }
    }

    fn block(&self, block: &Block) -> String {
        match block {
            Block::Rule => format!("<hr{} />", self.attr(class::RULE)),
            Block::Heading { level, inlines } => {
                let class = if *level == 3 { class::H3 } else { class::H2 };
                format!(
                    "<h{level}{}>{}</h{level}>",
                    self.attr(class),
                    self.inlines(inlines)
                )
            }
            Block::List(items) => {
                let mut out = format!("<ul{}>", self.attr(class::LIST));
                for item in items {
                    out.push('\n');
                    out.push_str(&self.item(item));
                }
                out.push_str("\n</ul>");
                out
            }
            Block::Paragraph(inlines) => {
                format!("<p{}>{}</p>", self.attr(class::PARAGRAPH), self.inlines(inlines))
            }
        }
    }

    fn item(&self, item: &ListItem) -> String {
        match &item.marker {
            Some(marker) => format!(
                "<li{}><strong{}>{}</strong> {}</li>",
                self.attr(class::NUMBERED_ITEM),
                self.attr(class::MARKER),
                escape_html(marker),
                self.inlines(&item.inlines)
            ),
            None => format!("<li{}>{}</li>", self.attr(class::ITEM), self.inlines(&item.inlines)),
        }
    }

    fn inlines(&self, inlines: &[Inline]) -> String {
        let mut out = String::new();
        for inline in inlines {
            match inline {
                Inline::Text(text) => out.push_str(&escape_html(text)),
                Inline::Strong(children) => {
                    let _ = write!(
                        out,
                        "<strong{}>{}</strong>",
                        self.attr(class::STRONG),
                        self.inlines(children)
                    );
                }
                Inline::Emphasis(children) => {
                    let _ = write!(out, "<em>{}</em>", self.inlines(children));
                }
            }
        }
        out
    }
}
