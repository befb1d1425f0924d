//! Line-oriented block parser.
//!
//! Each line is classified on its own, then consecutive lines of the same
//! family are folded into blocks:
//!
//! | Line                          | Block                         |
//! |-------------------------------|-------------------------------|
//! | three or more `-` only        | [`Block::Rule`]               |
//! | `## text` / `### text`        | [`Block::Heading`]            |
//! | `- text` / `* text`           | item of a [`Block::List`]     |
//! | `N. text`                     | numbered item of a list       |
//! | blank                         | ends the current block        |
//! | anything else                 | line of a [`Block::Paragraph`] |
//!
//! Lines are matched after trimming surrounding whitespace, so indented
//! bullets still form list items.

use crate::ast::{Block, ListItem};
use crate::inline::parse_inlines;

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Rule,
    Heading(u8, &'a str),
    Item {
        marker: Option<&'a str>,
        text: &'a str,
    },
    Text(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if line.len() >= 3 && line.bytes().all(|b| b == b'-') {
        return Line::Rule;
    }
    if let Some(heading) = heading(line) {
        return heading;
    }
    if let Some(item) = bullet(line).or_else(|| numbered(line)) {
        return item;
    }
    Line::Text(line)
}

fn heading(line: &str) -> Option<Line<'_>> {
    let (level, rest) = if let Some(rest) = line.strip_prefix("### ") {
        (3, rest)
    } else if let Some(rest) = line.strip_prefix("## ") {
        (2, rest)
    } else {
        return None;
    };
    let text = rest.trim();
    (!text.is_empty()).then_some(Line::Heading(level, text))
}

fn bullet(line: &str) -> Option<Line<'_>> {
    let rest = line.strip_prefix(['-', '*'])?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim_start();
    (!text.is_empty()).then_some(Line::Item { marker: None, text })
}

fn numbered(line: &str) -> Option<Line<'_>> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim_start();
    (!text.is_empty()).then_some(Line::Item {
        marker: Some(&line[..=digits]),
        text,
    })
}

/// Parse raw text into a block tree.
#[must_use]
pub fn parse(raw: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut items: Vec<ListItem> = Vec::new();

    for line in raw.lines() {
        let line = classify(line);

        if !matches!(line, Line::Text(_)) {
            flush_paragraph(&mut paragraph, &mut blocks);
        }
        if !matches!(line, Line::Item { .. }) {
            flush_list(&mut items, &mut blocks);
        }

        match line {
            Line::Blank => {}
            Line::Rule => blocks.push(Block::Rule),
            Line::Heading(level, text) => blocks.push(Block::Heading {
                level,
                inlines: parse_inlines(text),
            }),
            Line::Item { marker, text } => items.push(ListItem {
                marker: marker.map(str::to_string),
                inlines: parse_inlines(text),
            }),
            Line::Text(text) => paragraph.push(text),
        }
    }

    flush_paragraph(&mut paragraph, &mut blocks);
    flush_list(&mut items, &mut blocks);
    blocks
}

fn flush_paragraph(lines: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if lines.is_empty() {
        return;
    }
    let joined = lines.join("\n");
    lines.clear();
    blocks.push(Block::Paragraph(parse_inlines(&joined)));
}

fn flush_list(items: &mut Vec<ListItem>, blocks: &mut Vec<Block>) {
    if !items.is_empty() {
        blocks.push(Block::List(std::mem::take(items)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Inline;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn text(s: &str) -> Vec<Inline> {
        vec![Inline::Text(s.to_string())]
    }

    #[rstest]
    #[case("", Line::Blank)]
    #[case("   \t", Line::Blank)]
    #[case("---", Line::Rule)]
    #[case("-------  ", Line::Rule)]
    #[case("--", Line::Text("--"))]
    #[case("## Key Trends", Line::Heading(2, "Key Trends"))]
    #[case("### Notable Patterns", Line::Heading(3, "Notable Patterns"))]
    #[case("#### Deep", Line::Text("#### Deep"))]
    #[case("##", Line::Text("##"))]
    #[case("- Growth up", Line::Item { marker: None, text: "Growth up" })]
    #[case("*   Spaced", Line::Item { marker: None, text: "Spaced" })]
    #[case("  - indented", Line::Item { marker: None, text: "indented" })]
    #[case("-dash", Line::Text("-dash"))]
    #[case("**bold**", Line::Text("**bold**"))]
    #[case("12. Twelve", Line::Item { marker: Some("12."), text: "Twelve" })]
    #[case("1.5 percent", Line::Text("1.5 percent"))]
    #[case("2025. ", Line::Text("2025."))]
    fn classifies_lines(#[case] input: &str, #[case] expected: Line<'static>) {
        assert_eq!(classify(input), expected);
    }

    #[test]
    fn heading_keeps_its_own_text() {
        assert_eq!(
            parse("### Notable Patterns"),
            vec![Block::Heading {
                level: 3,
                inlines: text("Notable Patterns"),
            }]
        );
    }

    #[test]
    fn consecutive_items_share_one_list() {
        let blocks = parse("- A\n- B\n1. C");
        assert_eq!(
            blocks,
            vec![Block::List(vec![
                ListItem { marker: None, inlines: text("A") },
                ListItem { marker: None, inlines: text("B") },
                ListItem { marker: Some("1.".into()), inlines: text("C") },
            ])]
        );
    }

    #[test]
    fn paragraph_line_splits_lists() {
        let blocks = parse("- A\nbetween\n- B");
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[1], Block::Paragraph(_)));
    }

    #[test]
    fn paragraph_lines_join() {
        assert_eq!(
            parse("first line\nsecond line\n\nnext"),
            vec![
                Block::Paragraph(text("first line\nsecond line")),
                Block::Paragraph(text("next")),
            ]
        );
    }

    #[test]
    fn crlf_input_is_tolerated() {
        assert_eq!(
            parse("## Title\r\n- item\r\n"),
            vec![
                Block::Heading { level: 2, inlines: text("Title") },
                Block::List(vec![ListItem { marker: None, inlines: text("item") }]),
            ]
        );
    }

    #[test]
    fn blank_only_input_has_no_blocks() {
        assert!(parse("\n\n   \n").is_empty());
    }
}
