//! Fixed-width text table for client summaries.

use crate::models::ClientSummary;

/// Column widths for name, name, age, phone.
pub const COLUMN_WIDTHS: [usize; 4] = [32, 32, 8, 16];

/// Column headers, in table order.
pub const COLUMN_HEADERS: [&str; 4] = ["Jméno", "Příjmení", "Věk", "Telefon"];

/// Render summaries as table lines: border, header, border, one line per
/// row, closing border. An empty row set renders header and borders only.
pub fn render(rows: &[ClientSummary]) -> Vec<String> {
    let separator = separator_line();
    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(separator.clone());
    lines.push(header_line());
    lines.push(separator.clone());
    for row in rows {
        lines.push(row_line(row));
    }
    lines.push(separator);
    lines
}

fn separator_line() -> String {
    let mut line = String::from("+");
    for width in COLUMN_WIDTHS {
        line.push_str(&"-".repeat(width));
        line.push('+');
    }
    line
}

fn header_line() -> String {
    cells_line(COLUMN_HEADERS)
}

fn row_line(row: &ClientSummary) -> String {
    let age = row.age.to_string();
    cells_line([&row.first_name, &row.last_name, &age, &row.phone])
}

fn cells_line<T: AsRef<str>>(cells: [T; 4]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
        line.push_str(&pad(cell.as_ref(), width));
        line.push('|');
    }
    line
}

// Left-justify to the column width, counting characters rather than
// bytes (names carry diacritics). Overlong values are not truncated.
fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        value.to_string()
    } else {
        let mut padded = String::with_capacity(value.len() + width - len);
        padded.push_str(value);
        padded.extend(std::iter::repeat(' ').take(width - len));
        padded
    }
}
