use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bingo", bin_name = "bingo", version)]
#[command(about = "Generate printable bingo sheets from a list of terms", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the global config instead of the project's .bingo/
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Seed the random generator for reproducible boards
    #[arg(long, global = true, value_name = "SEED")]
    pub seed: Option<u64>,
}

/// Term and grid options shared by `preview` and `generate`.
#[derive(Args, Debug, Clone, Default)]
pub struct BoardArgs {
    /// Terms to put on the board (added to any read from --terms)
    #[arg(value_name = "TERM")]
    pub terms: Vec<String>,

    /// File with one term per line ("-" reads stdin)
    #[arg(short, long = "terms", value_name = "FILE")]
    pub terms_file: Option<PathBuf>,

    /// Cells per side (overrides config)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub size: Option<u16>,

    /// Fill the center cell with a term instead of the free marker
    #[arg(long)]
    pub no_free: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one randomized board to the terminal
    #[command(alias = "p")]
    Preview {
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Generate a batch of sheets as a standalone HTML document
    #[command(alias = "gen")]
    Generate {
        #[command(flatten)]
        board: BoardArgs,

        /// Number of sheets (overrides config)
        #[arg(short = 'n', long = "count", value_name = "COUNT")]
        count: Option<usize>,

        /// Output file ("-" writes to stdout); defaults to a timestamped name
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Do not embed the board styles in the document
        #[arg(long)]
        no_styles: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., side-length)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the config directory with default settings
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "bingo", "generate", "-t", "terms.txt", "-n", "3", "--size", "3", "--no-free", "-o",
            "out.html", "--seed", "9", "extra",
        ])
        .unwrap();

        assert_eq!(cli.seed, Some(9));
        match cli.command {
            Some(Commands::Generate {
                board,
                count,
                output,
                no_styles,
            }) => {
                assert_eq!(board.terms, vec!["extra"]);
                assert_eq!(board.terms_file, Some(PathBuf::from("terms.txt")));
                assert_eq!(board.size, Some(3));
                assert!(board.no_free);
                assert_eq!(count, Some(3));
                assert_eq!(output, Some(PathBuf::from("out.html")));
                assert!(!no_styles);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_zero_size() {
        assert!(Cli::try_parse_from(["bingo", "preview", "--size", "0", "a"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["bingo", "config", "side-length", "-g"]).unwrap();
        assert!(cli.global);
        assert!(matches!(
            cli.command,
            Some(Commands::Config { key: Some(_), value: None })
        ));
    }
}
