//! Plain-text table rendering for innings commentary.
//!
//! Columns carry width bounds and alignment; cells wider than their column
//! wrap onto extra lines within the same row.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnSpec {
    pub header: String,
    pub min_width: usize,
    pub max_width: usize,
    #[serde(default)]
    pub align: Align,
}

impl ColumnSpec {
    pub fn new(header: &str, width: usize, align: Align) -> Self {
        Self { header: header.to_string(), min_width: width, max_width: width, align }
    }
}

/// One row of cell text. `divider` draws a rule beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub divider: bool,
}

pub trait TableRenderer {
    fn render(&self, columns: &[ColumnSpec], rows: &[TableRow]) -> String;
}

/// `+---+` bordered table, header row centred.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiTable;

impl TableRenderer for AsciiTable {
    fn render(&self, columns: &[ColumnSpec], rows: &[TableRow]) -> String {
        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let widest = rows
                    .iter()
                    .filter_map(|row| row.cells.get(i))
                    .map(|cell| text_width(cell))
                    .chain(std::iter::once(text_width(&col.header)))
                    .max()
                    .unwrap_or(0);
                widest.clamp(col.min_width, col.max_width.max(col.min_width))
            })
            .collect();

        let rule = horizontal_rule(&widths);
        let mut out = vec![rule.clone()];

        let header_cells: Vec<&str> = columns.iter().map(|c| c.header.as_str()).collect();
        let header_aligns = vec![Align::Center; columns.len()];
        out.extend(render_row(&header_cells, &widths, &header_aligns));
        out.push(rule.clone());

        let aligns: Vec<Align> = columns.iter().map(|c| c.align).collect();
        let mut closed = true;
        for row in rows {
            let cells: Vec<&str> =
                (0..columns.len()).map(|i| row.cells.get(i).map_or("", String::as_str)).collect();
            out.extend(render_row(&cells, &widths, &aligns));
            closed = row.divider;
            if row.divider {
                out.push(rule.clone());
            }
        }
        if !closed {
            out.push(rule);
        }

        out.join("\n")
    }
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}

fn horizontal_rule(widths: &[usize]) -> String {
    let mut rule = String::from("+");
    for width in widths {
        rule.push_str(&"-".repeat(width + 2));
        rule.push('+');
    }
    rule
}

fn render_row(cells: &[&str], widths: &[usize], aligns: &[Align]) -> Vec<String> {
    let wrapped: Vec<Vec<String>> =
        cells.iter().zip(widths).map(|(cell, &width)| fit_lines(cell, width)).collect();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

    (0..height)
        .map(|line_no| {
            let mut line = String::from("|");
            for ((lines, &width), &align) in wrapped.iter().zip(widths).zip(aligns) {
                let text = lines.get(line_no).map_or("", String::as_str);
                line.push(' ');
                line.push_str(&pad(text, width, align));
                line.push_str(" |");
            }
            line
        })
        .collect()
}

/// Greedy word fill; words longer than `width` are cut into `width`-sized pieces.
fn fit_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    let pieces = text.split_whitespace().flat_map(|word| {
        let chars: Vec<char> = word.chars().collect();
        chars.chunks(width).map(|c| c.iter().collect::<String>()).collect::<Vec<_>>()
    });

    for piece in pieces {
        let piece_len = text_width(&piece);
        if current.is_empty() {
            current = piece;
            current_len = piece_len;
        } else if current_len + 1 + piece_len <= width {
            current.push(' ');
            current.push_str(&piece);
            current_len += 1 + piece_len;
        } else {
            lines.push(std::mem::replace(&mut current, piece));
            current_len = piece_len;
        }
    }
    lines.push(current);
    lines
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(text_width(text));
    let (left, right) = match align {
        Align::Left => (0, gap),
        Align::Right => (gap, 0),
        Align::Center => (gap / 2, gap - gap / 2),
    };
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
