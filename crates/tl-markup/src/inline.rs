//! Inline emphasis parsing.
//!
//! Matching is left-to-right and non-overlapping. At every `*`:
//!
//! 1. `**` opens a strong span closed by the nearest following `**`.
//! 2. Otherwise a single `*` opens an emphasis span closed by the nearest
//!    following `*`.
//! 3. A span only forms when its content is non-empty and neither starts nor
//!    ends with whitespace. Failing that, the `*` is kept as literal text and
//!    scanning resumes after it.
//!
//! Strong content is parsed again for emphasis. Emphasis content never
//! contains `*`, so it is always plain text. `***x***` therefore yields a
//! strong span around `*x` followed by a literal `*`.

use crate::ast::Inline;

/// Parse one line (or joined paragraph) of text into inline nodes.
#[must_use]
pub fn parse_inlines(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while let Some(pos) = rest.find('*') {
        literal.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("**")
            && let Some(end) = after.find("**")
            && is_span_content(&after[..end])
        {
            flush(&mut literal, &mut out);
            out.push(Inline::Strong(parse_inlines(&after[..end])));
            rest = &after[end + 2..];
            continue;
        }

        let after = &tail[1..];
        if let Some(end) = after.find('*')
            && is_span_content(&after[..end])
        {
            flush(&mut literal, &mut out);
            out.push(Inline::Emphasis(vec![Inline::Text(after[..end].to_string())]));
            rest = &after[end + 1..];
            continue;
        }

        literal.push('*');
        rest = after;
    }

    literal.push_str(rest);
    flush(&mut literal, &mut out);
    out
}

fn is_span_content(content: &str) -> bool {
    !content.is_empty()
        && !content.starts_with(char::is_whitespace)
        && !content.ends_with(char::is_whitespace)
}

fn flush(literal: &mut String, out: &mut Vec<Inline>) {
    if !literal.is_empty() {
        out.push(Inline::Text(std::mem::take(literal)));
    }
}
