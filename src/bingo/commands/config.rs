use crate::commands::{BingoPaths, CmdMessage, CmdResult};
use crate::config::BingoConfig;
use crate::error::{BingoError, Result};
use crate::model::Scope;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or updates the config of one scope.
///
/// Unknown keys and invalid values are errors; a failed `Set` leaves the
/// stored file untouched.
pub fn run(paths: &BingoPaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let mut config = BingoConfig::load(&dir)?;

    let message = match action {
        ConfigAction::ShowAll => return Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => CmdMessage::info(lookup(&config, &key)?),
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&dir)?;
            CmdMessage::success(format!("{} set to {}", key, lookup(&config, &key)?))
        }
    };

    let mut result = CmdResult::default().with_config(config);
    result.add_message(message);
    Ok(result)
}

fn lookup(config: &BingoConfig, key: &str) -> Result<String> {
    config
        .get(key)
        .ok_or_else(|| BingoError::Config(format!("Unknown config key: {}", key)))
}
