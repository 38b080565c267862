use std::cmp;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Align {
    Left,
    Right
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub align: Align
}

impl Column {
    pub fn left(name: impl Into<String>) -> Self {
        Self { name: name.into(), align: Align::Left }
    }

    pub fn right(name: impl Into<String>) -> Self {
        Self { name: name.into(), align: Align::Right }
    }
}

const INDENT: usize = 2;
const COLUMN_GAP: usize = 2;

/// Aligned text table: header, rule, then one line per row.
pub fn render_table(columns: &[Column], rows: &[Vec<String>]) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }

    let widths = columns.iter()
        .enumerate()
        .map(|(position, column)| {
            rows.iter()
                .filter_map(|row| row.get(position))
                .map(|cell| display_width(cell))
                .fold(display_width(&column.name), cmp::max)
        })
        .collect::<Vec<usize>>();

    let header = columns.iter().map(|column| column.name.clone()).collect::<Vec<_>>();
    let rule = widths.iter().map(|width| "-".repeat(*width)).collect::<Vec<_>>();

    let mut output = Vec::with_capacity(rows.len() + 2);
    output.push(format_row(columns, &header, &widths));
    output.push(format_row(columns, &rule, &widths));

    for row in rows {
        output.push(format_row(columns, row, &widths));
    }

    output
}

/// `label  value` lines with labels padded to a common width.
pub fn key_value_rows(entries: &[(String, String)]) -> Vec<String> {
    let label_width = entries.iter()
        .map(|(label, _)| display_width(label))
        .max()
        .unwrap_or(0);

    entries.iter()
        .map(|(label, value)| {
            let padded = pad(label, label_width, Align::Left);
            format!("{}{padded}  {value}", " ".repeat(INDENT)).trim_end().to_string()
        })
        .collect()
}

fn format_row(columns: &[Column], cells: &[String], widths: &[usize]) -> String {
    let gap = " ".repeat(COLUMN_GAP);
    let line = columns.iter()
        .zip(widths)
        .enumerate()
        .map(|(position, (column, width))| {
            let cell = cells.get(position).map(String::as_str).unwrap_or_default();
            pad(cell, *width, column.align)
        })
        .collect::<Vec<_>>()
        .join(&gap);

    format!("{}{line}", " ".repeat(INDENT)).trim_end().to_string()
}

fn pad(value: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(value)));

    match align {
        Align::Left => format!("{value}{fill}"),
        Align::Right => format!("{fill}{value}")
    }
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}
