use crate::config::BingoConfig;
use crate::document::Document;
use crate::error::{BingoError, Result};
use crate::grid::Grid;
use crate::model::Scope;
use std::path::PathBuf;

pub mod config;
pub mod export;
pub mod generate;
pub mod init;
pub mod preview;

#[derive(Debug, Clone)]
pub struct BingoPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl BingoPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| BingoError::Config("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

/// Per-invocation settings that take precedence over the stored config.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub side_length: Option<usize>,
    pub free_cell: Option<bool>,
    pub sheet_count: Option<usize>,
    pub skip_styles: bool,
}

impl Overrides {
    pub fn apply(&self, mut config: BingoConfig) -> BingoConfig {
        if let Some(side) = self.side_length {
            config.side_length = side;
        }
        if let Some(free) = self.free_cell {
            config.free_cell = free;
        }
        if let Some(count) = self.sheet_count {
            config.sheet_count = count;
        }
        config
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub grid: Option<Grid>,
    pub document: Option<Document>,
    pub sheet_count: usize,
    pub written_to: Option<PathBuf>,
    pub config: Option<BingoConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn with_document(mut self, document: Document, sheet_count: usize) -> Self {
        self.document = Some(document);
        self.sheet_count = sheet_count;
        self
    }

    pub fn with_written_to(mut self, path: PathBuf) -> Self {
        self.written_to = Some(path);
        self
    }

    pub fn with_config(mut self, config: BingoConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Warns when the pool is too small to fill a board without repeats.
pub(crate) fn repeat_warning(terms: usize, cells: usize) -> Option<CmdMessage> {
    (terms > 0 && terms < cells).then(|| {
        CmdMessage::warning(format!(
            "Only {} term(s) for {} cell(s); terms will repeat",
            terms, cells
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_fields() {
        let overrides = Overrides {
            side_length: Some(3),
            ..Overrides::default()
        };
        let config = overrides.apply(BingoConfig::default());
        assert_eq!(config.side_length, 3);
        assert!(config.free_cell);
        assert_eq!(config.sheet_count, 5);
    }

    #[test]
    fn project_scope_requires_project_dir() {
        let paths = BingoPaths {
            project: None,
            global: PathBuf::from("/tmp/bingo-global"),
        };
        assert!(paths.scope_dir(Scope::Project).is_err());
        assert_eq!(
            paths.scope_dir(Scope::Global).unwrap(),
            PathBuf::from("/tmp/bingo-global")
        );
    }

    #[test]
    fn repeat_warning_only_for_short_pools() {
        assert!(repeat_warning(10, 24).is_some());
        assert!(repeat_warning(24, 24).is_none());
        assert!(repeat_warning(0, 24).is_none());
    }
}
