mod print;
mod render;
mod styles;

pub use print::{eprint_messages, print_config, print_messages};
pub use render::render_grid;
