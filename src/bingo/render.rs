//! # Template Rendering
//!
//! Turns built grids into the markup tree that serves as the template for a
//! sheet batch. A page holds one or more boards; each board gets its own
//! independently built grid.
//!
//! Every cell is a `<td>` whose first child is a `<span>` content holder.
//! The replicator relies on that shape.

use crate::error::Result;
use crate::grid::{build_grid, Cell, Grid, GridSpec};
use crate::markup::Element;
use crate::model::Layout;
use rand::Rng;

pub const DEFAULT_FREE_MARKER: &str = "<b>FREE!</b>";

pub fn render_grid(grid: &Grid, free_marker: &str) -> Element {
    let mut body = Element::new("tbody");
    for row in grid.rows() {
        let mut tr = Element::new("tr");
        for cell in row {
            let span = match cell {
                Cell::Term(term) => Element::new("span").with_text(term.as_str()),
                Cell::Free => Element::new("span")
                    .with_attr("class", "bingo-free")
                    .with_raw(free_marker),
            };
            tr = tr.with_child(Element::new("td").with_child(span));
        }
        body = body.with_child(tr);
    }
    Element::new("table")
        .with_attr("class", "bingo-grid")
        .with_child(body)
}

fn render_board(grid: &Grid, layout: &Layout, free_marker: &str) -> Element {
    let mut board = Element::new("div").with_attr("class", "bingo-board");
    if !layout.title.is_empty() {
        board = board.with_child(
            Element::new("h1")
                .with_attr("class", "bingo-title")
                .with_text(layout.title.as_str()),
        );
    }
    if !layout.subtitle.is_empty() {
        board = board.with_child(
            Element::new("h2")
                .with_attr("class", "bingo-subtitle")
                .with_text(layout.subtitle.as_str()),
        );
    }
    board.with_child(render_grid(grid, free_marker))
}

/// Builds `layout.boards_per_page` grids and renders them as one page.
pub fn render_template<R: Rng + ?Sized>(
    terms: &[String],
    spec: GridSpec,
    layout: &Layout,
    free_marker: &str,
    rng: &mut R,
) -> Result<Element> {
    let count = layout.boards_per_page.count();
    let mut page = Element::new("div").with_attr("class", format!("bingo-page boards-{}", count));
    for _ in 0..count {
        let grid = build_grid(terms, spec, rng)?;
        page = page.with_child(render_board(&grid, layout, free_marker));
    }
    Ok(page)
}
