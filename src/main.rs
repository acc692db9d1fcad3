//! tokscan - token counts for every text file under a directory tree
//!
//! tokscan provides:
//! - Reporting files whose token count exceeds a threshold
//! - Summing token counts across a whole tree
//! - Swappable tokenizer encodings (o200k_base by default)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod count;
mod scan;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
