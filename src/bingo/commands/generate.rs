use crate::commands::{repeat_warning, CmdMessage, CmdResult};
use crate::config::BingoConfig;
use crate::document::assemble;
use crate::error::Result;
use crate::grid::GridSpec;
use crate::model::Layout;
use crate::render::render_template;
use crate::replicate::replicate;
use crate::styles::StyleSheet;
use log::info;
use rand::Rng;

/// Everything the pipeline needs for one batch, resolved from config and flags.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub terms: Vec<String>,
    pub spec: GridSpec,
    pub sheet_count: usize,
    pub layout: Layout,
    pub free_marker: String,
    pub styles: StyleSheet,
    pub capture_styles: bool,
}

impl GenerateRequest {
    pub fn from_config(config: &BingoConfig, terms: Vec<String>) -> Self {
        let layout = config.layout();
        let styles = StyleSheet::for_layout(&layout, config.side_length);
        Self {
            terms,
            spec: config.grid_spec(),
            sheet_count: config.sheet_count,
            layout,
            free_marker: config.free_marker.clone(),
            styles,
            capture_styles: true,
        }
    }
}

pub fn run<R: Rng + ?Sized>(request: &GenerateRequest, rng: &mut R) -> Result<CmdResult> {
    let template = render_template(
        &request.terms,
        request.spec,
        &request.layout,
        &request.free_marker,
        rng,
    )?;

    let sheets = replicate(
        &template,
        request.sheet_count,
        &request.terms,
        request.spec.has_free_cell,
        rng,
    )?;

    let mut result = CmdResult::default();
    // Replication draws one term per table cell, the free cell included.
    if let Some(warning) = repeat_warning(request.terms.len(), request.spec.area()) {
        result.add_message(warning);
    }

    let skipped: usize = sheets.iter().map(|s| s.mismatches.len()).sum();
    if skipped > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} cell(s) had no content holder and kept their template text",
            skipped
        )));
    }

    let document = assemble(&sheets, &request.styles, request.capture_styles);
    info!(
        "assembled {} sheet(s), {} board(s) per sheet",
        sheets.len(),
        request.layout.boards_per_page.count()
    );

    result.add_message(CmdMessage::success(format!(
        "Generated {} sheet(s)",
        sheets.len()
    )));
    Ok(result.with_document(document, sheets.len()))
}
