// Two-column table layout sized to the terminal width.

use serde_json::Value;

use crate::console::format;
use crate::errors::Result;

/// Header of the key column. Also its minimum width.
pub const INDEX_HEADER: &str = "(index)";
/// Header of the value column. Also its minimum width.
pub const VALUE_HEADER: &str = "Value";

/// Border characters: low line on top, overline on the bottom.
const TOP_BORDER: char = '_';
const BOTTOM_BORDER: char = '\u{203E}';

/// Border/separator characters plus interior spaces of the `| K | V |`
/// row template.
const CHROME_WIDTH: usize = 7;

/// Lay `value` out as a key/value table and return the rendered lines, in
/// emission order. Returns `None` when the input is not a collection
/// (null, bool, number, or bare string): the caller emits nothing.
pub fn render(value: &Value, output_width: usize) -> Result<Option<Vec<String>>> {
    let entries = match collect_entries(value)? {
        Some(entries) => entries,
        None => return Ok(None),
    };

    let (key_width, value_width) = fit_widths(&entries, output_width);
    let total_width = key_width + value_width + CHROME_WIDTH;

    let mut lines = Vec::with_capacity(entries.len() + 4);
    lines.push(TOP_BORDER.to_string().repeat(total_width));
    lines.push(row(INDEX_HEADER, VALUE_HEADER, key_width, value_width));
    lines.push(separator(key_width, value_width));
    for (key, cell) in &entries {
        lines.push(row(key, cell, key_width, value_width));
    }
    lines.push(BOTTOM_BORDER.to_string().repeat(total_width));
    Ok(Some(lines))
}

/// Keys paired with the display text of their values. Array indices become
/// decimal strings; object keys keep their enumeration order.
fn collect_entries(value: &Value) -> Result<Option<Vec<(String, String)>>> {
    let entries = match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| Ok((i.to_string(), cell_text(v)?)))
            .collect::<Result<Vec<_>>>()?,
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| Ok((k.clone(), cell_text(v)?)))
            .collect::<Result<Vec<_>>>()?,
        _ => return Ok(None),
    };
    Ok(Some(entries))
}

/// Compact structural encoding with line terminators stripped, so every
/// row stays on a single line.
fn cell_text(value: &Value) -> Result<String> {
    let encoded = format::encode(value)?;
    Ok(encoded.chars().filter(|c| !matches!(c, '\n' | '\r')).collect())
}

/// Natural column widths shrunk to fit `output_width`. The key column
/// measures raw key length while the value column measures the encoded
/// (quoted) length; that asymmetry is deliberate. Each width bottoms out
/// at its header label's length, so columns never go negative even when
/// the target width is unreachable.
fn fit_widths(entries: &[(String, String)], output_width: usize) -> (usize, usize) {
    let mut key_width = entries
        .iter()
        .map(|(k, _)| width_of(k))
        .max()
        .unwrap_or(0)
        .max(INDEX_HEADER.len());
    let mut value_width = entries
        .iter()
        .map(|(_, v)| width_of(v))
        .max()
        .unwrap_or(0)
        .max(VALUE_HEADER.len());

    while key_width + value_width + CHROME_WIDTH > output_width {
        let key_can_shrink = key_width > INDEX_HEADER.len();
        let value_can_shrink = value_width > VALUE_HEADER.len();
        if value_width > key_width && value_can_shrink {
            value_width -= 1;
        } else if key_can_shrink {
            key_width -= 1;
        } else if value_can_shrink {
            value_width -= 1;
        } else {
            break;
        }
    }
    (key_width, value_width)
}

fn width_of(s: &str) -> usize {
    s.chars().count()
}

/// Hard-truncate (no ellipsis) or right-pad `s` to exactly `width` chars.
fn fit_cell(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut taken = 0usize;
    for c in s.chars().take(width) {
        out.push(c);
        taken += 1;
    }
    for _ in taken..width {
        out.push(' ');
    }
    out
}

fn row(key: &str, value: &str, key_width: usize, value_width: usize) -> String {
    format!(
        "| {} | {} |",
        fit_cell(key, key_width),
        fit_cell(value, value_width)
    )
}

fn separator(key_width: usize, value_width: usize) -> String {
    format!(
        "|{}|{}|",
        "-".repeat(key_width + 2),
        "-".repeat(value_width + 2)
    )
}
