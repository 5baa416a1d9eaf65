//! Formatting utilities used for CLI and export outputs.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Truncate `s` to at most `width` terminal columns, ending with `…` when
/// something was cut, then pad with spaces to exactly `width` columns.
pub fn fit_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    if s.width() <= width {
        out.push_str(s);
    } else {
        let mut used = 0;
        for c in s.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width - 1 {
                break;
            }
            out.push(c);
            used += w;
        }
        out.push('…');
    }

    let pad = width.saturating_sub(out.width());
    out.push_str(&" ".repeat(pad));
    out
}

/// `2024-06-01 → 2024-06-03`, or a single date for one-day events.
pub fn describe_span(start: &str, end: &str) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{} → {}", start, end)
    }
}

pub fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, one)
    } else {
        format!("{} {}", n, many)
    }
}
