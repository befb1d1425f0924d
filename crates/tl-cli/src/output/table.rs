#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;

/// Render an aligned plain-text table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_len(cell))
                .max()
                .unwrap_or(0)
                .max(display_len(header))
                .max(MIN_COLUMN)
        })
        .collect();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad_cell(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(display_len(&header_line));

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let text = truncate(value, *width);
                let padded = pad_cell(&text, *width, looks_numeric(&text));
                if options.color {
                    colorize_status(&text, &padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Narrow the widest columns one char at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > display_len(headers[*idx]).max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn display_len(value: &str) -> usize {
    value.chars().count()
}

fn truncate(value: &str, width: usize) -> String {
    if display_len(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn pad_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = " ".repeat(width.saturating_sub(display_len(value)));
    if numeric {
        format!("{pad}{value}")
    } else {
        format!("{value}{pad}")
    }
}

/// Wrap dialog states and result statuses in ANSI colors. `padded` is the
/// already aligned cell so escape codes never affect column widths.
fn colorize_status(text: &str, padded: &str) -> String {
    let code = match text.to_ascii_lowercase().as_str() {
        "ready" | "text" | "true" => "32",
        "opening" | "loading" | "pending" => "33",
        "failed" | "failure" | "false" => "31",
        _ => return padded.to_string(),
    };
    padded.replacen(text, &format!("\u{1b}[{code}m{text}\u{1b}[0m"), 1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn numbers_are_right_aligned() {
        let rows = vec![
            vec!["a".to_string(), "5".to_string()],
            vec!["b".to_string(), "12".to_string()],
        ];
        let table = render_table(&["id", "rows"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], format!("a{}5", " ".repeat(8)));
        assert_eq!(lines[3], format!("b{}12", " ".repeat(7)));
    }

    #[test]
    fn missing_cells_render_dash() {
        let rows = vec![vec!["only".to_string()]];
        let table = render_table(&["id", "title"], &rows, PLAIN);
        assert!(table.lines().nth(2).is_some_and(|line| line.ends_with('-')));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec![
            "trade-value".to_string(),
            "Import vs Export Trend over twelve months".to_string(),
        ]];
        let options = TableOptions {
            max_width: Some(40),
            color: false,
        };
        let table = render_table(&["id", "title"], &rows, options);
        let row = table.lines().nth(2).unwrap();
        assert!(display_len(row) <= 40);
        assert!(row.contains("trade-value"));
        assert!(row.ends_with('…'));
    }

    #[test]
    fn truncate_keeps_short_values() {
        assert_eq!(truncate("ocean", 10), "ocean");
        assert_eq!(truncate("cyberpunk", 5), "cybe…");
        assert_eq!(truncate("dark", 1), "…");
    }

    #[test]
    fn color_wraps_known_statuses_only() {
        assert_eq!(colorize_status("ready", "ready  "), "\u{1b}[32mready\u{1b}[0m  ");
        assert_eq!(colorize_status("failed", "failed"), "\u{1b}[31mfailed\u{1b}[0m");
        assert_eq!(colorize_status("ocean", "ocean "), "ocean ");
    }
}
