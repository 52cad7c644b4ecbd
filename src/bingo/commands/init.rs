use crate::commands::{BingoPaths, CmdMessage, CmdResult};
use crate::config::BingoConfig;
use crate::error::Result;
use crate::model::Scope;
use std::fs;

pub fn run(paths: &BingoPaths, scope: Scope) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    fs::create_dir_all(&dir)?;

    let mut result = CmdResult::default();
    if BingoConfig::exists(&dir) {
        result.add_message(CmdMessage::info(format!(
            "Config already present at {}",
            dir.display()
        )));
        return Ok(result);
    }

    BingoConfig::default().save(&dir)?;
    result.add_message(CmdMessage::success(format!(
        "Initialized bingo config at {}",
        dir.display()
    )));
    Ok(result)
}
