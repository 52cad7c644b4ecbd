//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all bingo operations, whatever UI sits on top.
//!
//! It resolves inputs (stored config + per-call overrides + optional user
//! stylesheet) into the plain values the commands take, then dispatches.
//! It does no printing and no formatting.
//!
//! ## Generic Over the Random Source
//!
//! `BingoApi<R: Rng>` owns its random number generator:
//! - Production: `BingoApi<StdRng>` seeded from entropy (or `--seed`)
//! - Testing: `BingoApi<StdRng>` with a fixed seed, for reproducible boards

use crate::commands::{self, generate::GenerateRequest, BingoPaths, CmdResult, Overrides};
use crate::config::BingoConfig;
use crate::document::Document;
use crate::error::Result;
use crate::model::Scope;
use log::debug;
use rand::Rng;
use std::fs;
use std::path::Path;

pub struct BingoApi<R: Rng> {
    paths: BingoPaths,
    rng: R,
}

impl<R: Rng> BingoApi<R> {
    pub fn new(paths: BingoPaths, rng: R) -> Self {
        Self { paths, rng }
    }

    /// Stored config for the scope with `overrides` applied on top.
    pub fn resolve_config(&self, scope: Scope, overrides: &Overrides) -> Result<BingoConfig> {
        let dir = self.paths.scope_dir(scope)?;
        let config = BingoConfig::load(&dir)?;
        Ok(overrides.apply(config))
    }

    pub fn preview(
        &mut self,
        scope: Scope,
        terms: &[String],
        overrides: &Overrides,
    ) -> Result<CmdResult> {
        let config = self.resolve_config(scope, overrides)?;
        let result = commands::preview::run(terms, config.grid_spec(), &mut self.rng)?;
        Ok(result.with_config(config))
    }

    pub fn generate(
        &mut self,
        scope: Scope,
        terms: Vec<String>,
        overrides: &Overrides,
    ) -> Result<CmdResult> {
        let config = self.resolve_config(scope, overrides)?;
        let mut request = GenerateRequest::from_config(&config, terms);
        request.capture_styles = !overrides.skip_styles;

        if let Some(path) = &config.stylesheet {
            let css = fs::read_to_string(path)?;
            debug!("loaded user stylesheet {}", path.display());
            request.styles = request.styles.with_user_css(stylesheet_name(path), css);
        }

        commands::generate::run(&request, &mut self.rng)
    }

    pub fn export(&self, document: &Document, path: &Path) -> Result<CmdResult> {
        commands::export::run(document, path)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&self, scope: Scope) -> Result<CmdResult> {
        commands::init::run(&self.paths, scope)
    }

    pub fn paths(&self) -> &BingoPaths {
        &self.paths
    }
}

fn stylesheet_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "user".to_string())
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, MessageLevel};
