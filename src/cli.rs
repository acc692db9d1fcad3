//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::tokenizer::Encoding;
use crate::count::{self, DEFAULT_THRESHOLD};

/// tokscan - token counts for every text file under a directory tree.
#[derive(Parser, Debug)]
#[command(name = "tokscan")]
#[command(
    author,
    version,
    about,
    long_about = r#"tokscan walks a directory tree, tokenizes each non-image file, and either
reports files exceeding a token threshold or prints the total token count.

Image files (.jpg/.jpeg/.png/.gif/.bmp/.tiff/.webp) are skipped without being
read. Files that cannot be read as UTF-8 produce a diagnostic line and the
walk continues.

Examples:
    tokscan report
    tokscan report --root docs --threshold 4096
    tokscan total --encoding cl100k_base
"#
)]
pub struct Cli {
    /// Root directory to scan.
    #[arg(
        long,
        global = true,
        default_value = "server/data",
        value_name = "ROOT",
        long_help = "Root directory to scan (defaults to server/data, the conventional\n\
data directory this tool was built to audit).\n\n\
A missing root is a fatal error; everything else is reported per file."
    )]
    pub root: PathBuf,

    /// Tokenizer encoding (o200k_base/cl100k_base/heuristic).
    #[arg(
        long,
        global = true,
        default_value = "o200k_base",
        value_name = "ENCODING",
        long_help = "Select the tokenizer encoding.\n\n\
Supported values:\n\
- o200k_base (default, GPT-4o native)\n\
- cl100k_base (GPT-4, GPT-3.5-turbo)\n\
- heuristic (fast bytes-based estimate, no BPE tables)"
    )]
    pub encoding: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report files whose token count exceeds a threshold.
    #[command(
        long_about = "Walk the tree under ROOT and print one line per file whose token count\n\
exceeds the threshold:\n\n\
  <path> has too many tokens: <count> tokens\n\n\
Files at or below the threshold produce no output.\n\n\
Examples:\n\
  tokscan report\n\
  tokscan report --threshold 4096\n"
    )]
    Report {
        /// Token count above which a file is reported.
        #[arg(
            long,
            default_value_t = DEFAULT_THRESHOLD,
            value_name = "N",
            long_help = "Token count above which a file is reported.\n\n\
Files with exactly N tokens are not reported; only counts strictly above N are."
        )]
        threshold: usize,
    },

    /// Sum token counts across every file under the root.
    #[command(
        long_about = "Walk the tree under ROOT, sum the token counts of every readable\n\
non-image file, and print a single final line:\n\n\
  Total tokens: <total>\n\n\
Files that fail to read contribute zero and are reported individually.\n\n\
Example:\n\
  tokscan total\n"
    )]
    Total,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let encoding: Encoding = cli.encoding.parse().map_err(anyhow::Error::msg)?;

    match cli.command {
        Commands::Report { threshold } => count::run_report(&cli.root, encoding, threshold),
        Commands::Total => count::run_total(&cli.root, encoding),
    }
}
