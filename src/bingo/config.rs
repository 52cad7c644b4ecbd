use crate::error::{BingoError, Result};
use crate::grid::GridSpec;
use crate::model::{BoardsPerPage, Layout, Orientation, PageFormat};
use crate::render::DEFAULT_FREE_MARKER;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SIDE_LENGTH: usize = 5;
const DEFAULT_SHEET_COUNT: usize = 5;

/// Keys accepted by [`BingoConfig::get`] and [`BingoConfig::set`], in display order.
pub const CONFIG_KEYS: &[&str] = &[
    "side-length",
    "free-cell",
    "sheet-count",
    "boards-per-page",
    "page-format",
    "orientation",
    "margin",
    "title",
    "subtitle",
    "free-marker",
    "stylesheet",
];

/// Configuration for bingo, stored in .bingo/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct BingoConfig {
    /// Cells per side of each board
    #[serde(default = "default_side_length")]
    pub side_length: usize,

    /// Reserve the center cell for the free marker
    #[serde(default = "default_true")]
    pub free_cell: bool,

    /// Sheets produced by `generate` when no count is given
    #[serde(default = "default_sheet_count")]
    pub sheet_count: usize,

    #[serde(default)]
    pub boards_per_page: BoardsPerPage,

    #[serde(default)]
    pub page_format: PageFormat,

    #[serde(default)]
    pub orientation: Orientation,

    /// Board margin in pixels
    #[serde(default = "default_margin")]
    pub margin: u32,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub subtitle: String,

    /// Markup placed in the free cell
    #[serde(default = "default_free_marker")]
    pub free_marker: String,

    /// Extra CSS file appended to the built-in styles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<PathBuf>,
}

fn default_side_length() -> usize {
    DEFAULT_SIDE_LENGTH
}

fn default_sheet_count() -> usize {
    DEFAULT_SHEET_COUNT
}

fn default_true() -> bool {
    true
}

fn default_margin() -> u32 {
    Layout::default().margin_px
}

fn default_free_marker() -> String {
    DEFAULT_FREE_MARKER.to_string()
}

impl Default for BingoConfig {
    fn default() -> Self {
        Self {
            side_length: DEFAULT_SIDE_LENGTH,
            free_cell: true,
            sheet_count: DEFAULT_SHEET_COUNT,
            boards_per_page: BoardsPerPage::default(),
            page_format: PageFormat::default(),
            orientation: Orientation::default(),
            margin: default_margin(),
            title: String::new(),
            subtitle: String::new(),
            free_marker: default_free_marker(),
            stylesheet: None,
        }
    }
}

impl BingoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BingoConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn exists<P: AsRef<Path>>(config_dir: P) -> bool {
        config_dir.as_ref().join(CONFIG_FILENAME).exists()
    }

    pub fn grid_spec(&self) -> GridSpec {
        GridSpec::new(self.side_length, self.free_cell)
    }

    pub fn layout(&self) -> Layout {
        Layout {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            boards_per_page: self.boards_per_page,
            page_format: self.page_format,
            orientation: self.orientation,
            margin_px: self.margin,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "side-length" => self.side_length.to_string(),
            "free-cell" => self.free_cell.to_string(),
            "sheet-count" => self.sheet_count.to_string(),
            "boards-per-page" => self.boards_per_page.count().to_string(),
            "page-format" => self.page_format.to_string(),
            "orientation" => self.orientation.to_string(),
            "margin" => self.margin.to_string(),
            "title" => self.title.clone(),
            "subtitle" => self.subtitle.clone(),
            "free-marker" => self.free_marker.clone(),
            "stylesheet" => self
                .stylesheet
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            _ => return None,
        };
        Some(value)
    }

    /// Sets a key from its string form. An empty `stylesheet` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "side-length" => {
                let n = parse_number::<usize>(key, value)?;
                if n == 0 {
                    return Err(BingoError::Config(
                        "side-length must be at least 1".to_string(),
                    ));
                }
                self.side_length = n;
            }
            "free-cell" => self.free_cell = parse_bool(key, value)?,
            "sheet-count" => self.sheet_count = parse_number(key, value)?,
            "boards-per-page" => self.boards_per_page = value.parse()?,
            "page-format" => self.page_format = value.parse()?,
            "orientation" => self.orientation = value.parse()?,
            "margin" => self.margin = parse_number(key, value)?,
            "title" => self.title = value.to_string(),
            "subtitle" => self.subtitle = value.to_string(),
            "free-marker" => self.free_marker = value.to_string(),
            "stylesheet" => {
                self.stylesheet = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            other => return Err(BingoError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| BingoError::Config(format!("{} expects a number, got '{}'", key, value)))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(BingoError::Config(format!(
            "{} expects true or false, got '{}'",
            key, value
        ))),
    }
}
