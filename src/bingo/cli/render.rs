//! # Board Preview
//!
//! Draws a [`Grid`] as a boxed text table for the terminal.
//!
//! Layout (cell widths, truncation, padding) is computed in Rust because it
//! needs Unicode-aware widths. The template only arranges the pre-padded
//! cells and picks a style per cell through the `style` filter.

use super::styles::{self, names};
use bingo::grid::{Cell, Grid};
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a preview cell gets before its text is truncated.
pub const MAX_CELL_WIDTH: usize = 16;
const ELLIPSIS: char = '…';

const BOARD_TEMPLATE: &str = "{{ border | style(\"border\") }}\n\
{% for row in rows %}{{ \"|\" | style(\"border\") }}\
{% for cell in row %} {{ cell.text | style(cell.style) }} {{ \"|\" | style(\"border\") }}{% endfor %}\n\
{{ border | style(\"border\") }}\n{% endfor %}";

#[derive(Serialize)]
struct CellData {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct BoardData {
    border: String,
    rows: Vec<Vec<CellData>>,
}

/// Renders a board, with color when stdout supports it.
pub fn render_grid(grid: &Grid, free_label: &str) -> String {
    let use_color = console::Term::stdout().features().colors_supported();
    render_grid_with_color(grid, free_label, use_color)
}

pub fn render_grid_with_color(grid: &Grid, free_label: &str, use_color: bool) -> String {
    let label = |cell: &Cell| -> String {
        match cell {
            Cell::Term(term) => term.clone(),
            Cell::Free => free_label.to_string(),
        }
    };

    let width = grid
        .cells()
        .iter()
        .map(|c| label(c).width())
        .max()
        .unwrap_or(0)
        .clamp(1, MAX_CELL_WIDTH);

    let segment = "-".repeat(width + 2);
    let border = format!(
        "+{}+",
        vec![segment; grid.side_length()].join("+")
    );

    let rows = grid
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| CellData {
                    text: fit(&label(cell), width),
                    style: if cell.is_free() {
                        names::FREE
                    } else {
                        names::TERM
                    },
                })
                .collect()
        })
        .collect();

    let data = BoardData { border, rows };
    render_template(&data, use_color).unwrap_or_else(|_| plain_fallback(&data))
}

fn render_template(data: &BoardData, use_color: bool) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles::apply(&name, &value.to_string(), use_color)
    });
    env.add_template("board.txt", BOARD_TEMPLATE)?;
    env.get_template("board.txt")?.render(data)
}

fn plain_fallback(data: &BoardData) -> String {
    let mut out = format!("{}\n", data.border);
    for row in &data.rows {
        out.push('|');
        for cell in row {
            out.push_str(&format!(" {} |", cell.text));
        }
        out.push_str(&format!("\n{}\n", data.border));
    }
    out
}

/// Pads or truncates `text` to exactly `width` display columns.
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        let pad = width - text.width();
        return format!("{}{}", text, " ".repeat(pad));
    }

    let budget = width.saturating_sub(ELLIPSIS.width().unwrap_or(1));
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    used += ELLIPSIS.width().unwrap_or(1);
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
