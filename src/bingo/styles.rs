//! # Style Context
//!
//! The style rules active while a template is rendered. The document
//! assembler copies these into every exported document so it renders the
//! same way outside the rendering context.

use crate::model::{Layout, Orientation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleBlock {
    pub name: String,
    pub css: String,
}

impl StyleBlock {
    pub fn new(name: impl Into<String>, css: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            css: css.into(),
        }
    }
}

/// Ordered collection of style blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    blocks: Vec<StyleBlock>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in board and page styles for the given layout and grid size.
    pub fn for_layout(layout: &Layout, side_length: usize) -> Self {
        Self::new()
            .with_block(StyleBlock::new("board", board_css(side_length)))
            .with_block(StyleBlock::new("page", page_css(layout)))
    }

    pub fn with_block(mut self, block: StyleBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Appends caller-supplied CSS. `</` is written as `<\/` so the text
    /// cannot close the `<style>` element it is embedded in.
    pub fn with_user_css(self, name: impl Into<String>, css: impl AsRef<str>) -> Self {
        let css = css.as_ref().replace("</", "<\\/");
        self.with_block(StyleBlock::new(name, css))
    }

    pub fn blocks(&self) -> &[StyleBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

fn board_css(side_length: usize) -> String {
    let cell = 100.0 / side_length.max(1) as f64;
    format!(
        r#".bingo-title {{ width: 100%; text-align: center; margin: 10px 0 16px; font-weight: 700; font-size: 32px; }}
.bingo-subtitle {{ width: 100%; text-align: center; margin: 10px 0; padding: 0 80px; box-sizing: border-box; font-weight: 700; font-size: 10px; }}
.bingo-grid {{ table-layout: fixed; border-collapse: collapse; width: 100%; height: 100%; aspect-ratio: 1 / 1; }}
.bingo-grid td {{ position: relative; overflow: hidden; text-align: center; border: 2px solid black; width: {cell:.4}%; height: {cell:.4}%; font-size: inherit; }}
.bingo-grid td > span {{ position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); }}"#
    )
}

fn page_css(layout: &Layout) -> String {
    let (width, height) = layout.page_format.dimensions();
    let (width, height) = match layout.orientation {
        Orientation::Portrait => (width, height),
        Orientation::Landscape => (height, width),
    };
    let (columns, rows) = layout.boards_per_page.grid();
    format!(
        r#"@page {{ size: {width} {height}; margin: 0; }}
.bingo-page {{ display: grid; grid-template-columns: repeat({columns}, 1fr); grid-template-rows: repeat({rows}, 1fr); width: {width}; height: {height}; box-sizing: border-box; background: white; font-family: "Century Gothic", sans-serif; page-break-after: always; break-after: page; }}
.bingo-board {{ margin: {margin}px; }}"#,
        margin = layout.margin_px
    )
}
