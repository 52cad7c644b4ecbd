use bingo::api::{CmdMessage, MessageLevel};
use bingo::config::{BingoConfig, CONFIG_KEYS};
use colored::Colorize;

fn colorize(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", colorize(message));
    }
}

/// Same as [`print_messages`], for when stdout carries the document.
pub fn eprint_messages(messages: &[CmdMessage]) {
    for message in messages {
        eprintln!("{}", colorize(message));
    }
}

pub fn print_config(config: &BingoConfig) {
    let width = CONFIG_KEYS.iter().map(|k| k.len()).max().unwrap_or(0);
    for key in CONFIG_KEYS {
        let value = config.get(key).unwrap_or_default();
        let padded = format!("{:<width$}", key, width = width);
        println!("{}  {}", padded.bold(), value);
    }
}
