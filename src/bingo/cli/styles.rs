use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod names {
    pub const BORDER: &str = "border";
    pub const TERM: &str = "term";
    pub const FREE: &str = "free";
}

pub static BINGO_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        (names::BORDER, Style::new().dim()),
        (names::TERM, Style::new()),
        (names::FREE, Style::new().green().bold()),
    ])
});

/// Applies a named theme style. Unknown names pass the text through.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match BINGO_THEME.get(name) {
        Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
        _ => text.to_string(),
    }
}
