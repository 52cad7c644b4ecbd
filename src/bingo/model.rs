use crate::error::BingoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// Printed paper size. Only used to emit the print `@page` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageFormat {
    #[default]
    Letter,
    GovernmentLetter,
    HalfLetter,
    A4,
}

impl PageFormat {
    /// (width, height) in portrait orientation, as CSS lengths.
    pub fn dimensions(&self) -> (&'static str, &'static str) {
        match self {
            PageFormat::Letter => ("8.5in", "11in"),
            PageFormat::GovernmentLetter => ("8in", "10in"),
            PageFormat::HalfLetter => ("5.5in", "8.5in"),
            PageFormat::A4 => ("210mm", "297mm"),
        }
    }
}

impl fmt::Display for PageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageFormat::Letter => "letter",
            PageFormat::GovernmentLetter => "government-letter",
            PageFormat::HalfLetter => "half-letter",
            PageFormat::A4 => "a4",
        };
        f.write_str(name)
    }
}

impl FromStr for PageFormat {
    type Err = BingoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "letter" => Ok(PageFormat::Letter),
            "government-letter" | "gov-letter" => Ok(PageFormat::GovernmentLetter),
            "half-letter" => Ok(PageFormat::HalfLetter),
            "a4" => Ok(PageFormat::A4),
            other => Err(BingoError::Config(format!(
                "Unknown page format '{}' (expected letter, government-letter, half-letter, a4)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => f.write_str("portrait"),
            Orientation::Landscape => f.write_str("landscape"),
        }
    }
}

impl FromStr for Orientation {
    type Err = BingoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            other => Err(BingoError::Config(format!(
                "Unknown orientation '{}' (expected portrait or landscape)",
                other
            ))),
        }
    }
}

/// How many boards share one printed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BoardsPerPage {
    #[default]
    One,
    Two,
    Four,
}

impl BoardsPerPage {
    pub fn count(&self) -> usize {
        match self {
            BoardsPerPage::One => 1,
            BoardsPerPage::Two => 2,
            BoardsPerPage::Four => 4,
        }
    }

    /// (columns, rows) of the page grid.
    pub fn grid(&self) -> (usize, usize) {
        match self {
            BoardsPerPage::One => (1, 1),
            BoardsPerPage::Two => (2, 1),
            BoardsPerPage::Four => (2, 2),
        }
    }
}

impl TryFrom<u8> for BoardsPerPage {
    type Error = BingoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(BoardsPerPage::One),
            2 => Ok(BoardsPerPage::Two),
            4 => Ok(BoardsPerPage::Four),
            other => Err(BingoError::Config(format!(
                "Boards per page must be 1, 2 or 4 (got {})",
                other
            ))),
        }
    }
}

impl From<BoardsPerPage> for u8 {
    fn from(value: BoardsPerPage) -> Self {
        value.count() as u8
    }
}

impl FromStr for BoardsPerPage {
    type Err = BingoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 = s
            .parse()
            .map_err(|_| BingoError::Config(format!("Invalid boards per page: {}", s)))?;
        BoardsPerPage::try_from(n)
    }
}

/// Page-level presentation of a template: headings and how boards are laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub title: String,
    pub subtitle: String,
    pub boards_per_page: BoardsPerPage,
    pub page_format: PageFormat,
    pub orientation: Orientation,
    pub margin_px: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            boards_per_page: BoardsPerPage::One,
            page_format: PageFormat::Letter,
            orientation: Orientation::Portrait,
            margin_px: 16,
        }
    }
}
