use bingo::api::{BingoApi, ConfigAction};
use bingo::commands::export::{default_filename, write_document};
use bingo::commands::{BingoPaths, Overrides};
use bingo::error::{BingoError, Result};
use bingo::model::Scope;
use bingo::terms::{merge_terms, parse_terms};
use chrono::Utc;
use clap::{CommandFactory, Parser};
use directories::ProjectDirs;
use log::{debug, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

mod args;
mod cli;
use args::{BoardArgs, Cli, Commands};
use cli::{eprint_messages, print_config, print_messages, render_grid};

/// Overrides the global data directory.
const GLOBAL_DATA_ENV: &str = "BINGO_GLOBAL_DATA";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: BingoApi<StdRng>,
    scope: Scope,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Preview { board }) => handle_preview(&mut ctx, board),
        Some(Commands::Generate {
            board,
            count,
            output,
            no_styles,
        }) => handle_generate(&mut ctx, board, count, output, no_styles),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(".bingo");

    let global_dir = match std::env::var_os(GLOBAL_DATA_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "bingo", "bingo")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| BingoError::Config("Could not determine data dir".into()))?,
    };

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    debug!(
        "project dir {}, global dir {}",
        project_dir.display(),
        global_dir.display()
    );
    let paths = BingoPaths {
        project: Some(project_dir),
        global: global_dir,
    };

    Ok(AppContext {
        api: BingoApi::new(paths, rng),
        scope,
    })
}

/// Terms from `--terms` (file or stdin) followed by positional terms.
fn load_terms(board: &BoardArgs) -> Result<Vec<String>> {
    let from_source = match &board.terms_file {
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            parse_terms(&text)
        }
        Some(path) => parse_terms(&fs::read_to_string(path)?),
        None => Vec::new(),
    };
    let terms = merge_terms(from_source, &board.terms);
    debug!("loaded {} term(s)", terms.len());
    Ok(terms)
}

fn board_overrides(board: &BoardArgs) -> Overrides {
    Overrides {
        side_length: board.size.map(usize::from),
        free_cell: board.no_free.then_some(false),
        ..Overrides::default()
    }
}

fn handle_preview(ctx: &mut AppContext, board: BoardArgs) -> Result<()> {
    let terms = load_terms(&board)?;
    let result = ctx.api.preview(ctx.scope, &terms, &board_overrides(&board))?;
    if let (Some(grid), Some(config)) = (&result.grid, &result.config) {
        print!("{}", render_grid(grid, &strip_tags(&config.free_marker)));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_generate(
    ctx: &mut AppContext,
    board: BoardArgs,
    count: Option<usize>,
    output: Option<PathBuf>,
    no_styles: bool,
) -> Result<()> {
    let terms = load_terms(&board)?;
    let overrides = Overrides {
        sheet_count: count,
        skip_styles: no_styles,
        ..board_overrides(&board)
    };

    let result = ctx.api.generate(ctx.scope, terms, &overrides)?;
    let document = result
        .document
        .as_ref()
        .ok_or_else(|| BingoError::Api("No document was generated".into()))?;

    if output.as_deref() == Some(Path::new("-")) {
        eprint_messages(&result.messages);
        write_document(io::stdout().lock(), document)?;
        return Ok(());
    }

    print_messages(&result.messages);
    let path = output.unwrap_or_else(|| default_filename(Utc::now()));
    let written = ctx.api.export(document, &path)?;
    print_messages(&written.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config(ctx.scope, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_messages(&result.messages);
    Ok(())
}

/// Plain-text form of the free marker for the terminal preview.
fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    let text = out.trim();
    if text.is_empty() {
        "FREE".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_tags_keeps_text() {
        assert_eq!(strip_tags("<b>FREE!</b>"), "FREE!");
        assert_eq!(strip_tags("Free <i>space</i>"), "Free space");
        assert_eq!(strip_tags("<img src=\"star.png\">"), "FREE");
    }

    #[test]
    fn board_overrides_map_flags() {
        let board = BoardArgs {
            size: Some(3),
            no_free: true,
            ..BoardArgs::default()
        };
        let overrides = board_overrides(&board);
        assert_eq!(overrides.side_length, Some(3));
        assert_eq!(overrides.free_cell, Some(false));

        let overrides = board_overrides(&BoardArgs::default());
        assert_eq!(overrides.free_cell, None);
    }
}
