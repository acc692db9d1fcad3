//! Token counting over a directory tree
//!
//! Implements the two scan modes: flagging files over a token threshold and
//! summing token counts across the whole tree. Per-file read failures are
//! reported and never abort the walk.

use anyhow::Result;
use std::path::Path;

use crate::core::reader::read_text;
use crate::core::tokenizer::{count_tokens, Encoding};
use crate::scan::walk_files;

/// Default token threshold above which a file is reported
pub const DEFAULT_THRESHOLD: usize = 8192;

/// Outcome of tokenizing a single file during a walk
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was read and its tokens counted
    Counted { path: String, tokens: usize },
    /// Reading or decoding failed; the walk continued
    Failed { path: String, error: String },
}

impl FileOutcome {
    /// Path of the file this outcome belongs to
    #[allow(dead_code)]
    pub fn path(&self) -> &str {
        match self {
            FileOutcome::Counted { path, .. } => path,
            FileOutcome::Failed { path, .. } => path,
        }
    }
}

/// Tokenize every non-image file under `root`, in traversal order
pub fn scan_tree(root: &Path, encoding: Encoding) -> Result<Vec<FileOutcome>> {
    let mut outcomes = Vec::new();

    for path in walk_files(root)? {
        let display = path.display().to_string();
        match read_text(&path) {
            Ok(content) => outcomes.push(FileOutcome::Counted {
                path: display,
                tokens: count_tokens(&content, encoding),
            }),
            Err(e) => outcomes.push(FileOutcome::Failed {
                path: display,
                error: e.to_string(),
            }),
        }
    }

    Ok(outcomes)
}

/// Sum token counts across outcomes; failed files contribute zero
pub fn total_tokens(outcomes: &[FileOutcome]) -> u64 {
    outcomes
        .iter()
        .map(|outcome| match outcome {
            FileOutcome::Counted { tokens, .. } => *tokens as u64,
            FileOutcome::Failed { .. } => 0,
        })
        .sum()
}

/// Run the report command: one line per over-threshold file
pub fn run_report(root: &Path, encoding: Encoding, threshold: usize) -> Result<()> {
    for outcome in scan_tree(root, encoding)? {
        match outcome {
            FileOutcome::Counted { path, tokens } if tokens > threshold => {
                println!("{} has too many tokens: {} tokens", path, tokens);
            }
            FileOutcome::Counted { .. } => {}
            FileOutcome::Failed { path, error } => {
                println!("Error reading {}: {}", path, error);
            }
        }
    }

    Ok(())
}

/// Run the total command: print the summed token count after the walk
pub fn run_total(root: &Path, encoding: Encoding) -> Result<()> {
    let outcomes = scan_tree(root, encoding)?;

    for outcome in &outcomes {
        if let FileOutcome::Failed { path, error } = outcome {
            println!("Error reading {}: {}", path, error);
        }
    }

    println!("Total tokens: {}", total_tokens(&outcomes));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_scan_tree_counts_each_file() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "Hello world").unwrap();
        fs::write(temp.path().join("b.txt"), "Another file with more words").unwrap();

        let outcomes = scan_tree(temp.path(), Encoding::O200k).unwrap();
        assert_eq!(outcomes.len(), 2);
        for outcome in &outcomes {
            assert!(matches!(outcome, FileOutcome::Counted { tokens, .. } if *tokens > 0));
        }
    }

    #[test]
    fn test_total_equals_sum_of_per_file_counts() {
        let temp = tempdir().unwrap();
        let contents = ["Hello world", "fn main() {}", "a longer piece of text here"];
        for (i, content) in contents.iter().enumerate() {
            fs::write(temp.path().join(format!("f{}.txt", i)), content).unwrap();
        }

        let expected: u64 = contents
            .iter()
            .map(|c| count_tokens(c, Encoding::O200k) as u64)
            .sum();

        let outcomes = scan_tree(temp.path(), Encoding::O200k).unwrap();
        assert_eq!(total_tokens(&outcomes), expected);
    }

    #[test]
    fn test_total_zero_for_image_only_dir() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.jpg"), [0xFFu8, 0xD8]).unwrap();
        fs::write(temp.path().join("b.png"), [0x89u8, 0x50]).unwrap();

        let outcomes = scan_tree(temp.path(), Encoding::O200k).unwrap();
        assert!(outcomes.is_empty());
        assert_eq!(total_tokens(&outcomes), 0);
    }

    #[test]
    fn test_unreadable_file_excluded_from_total() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("good.txt"), "Hello world").unwrap();

        let mut bad = fs::File::create(temp.path().join("bad.txt")).unwrap();
        bad.write_all(&[0xFF, 0xFE, 0x00, 0x48]).unwrap();

        let outcomes = scan_tree(temp.path(), Encoding::O200k).unwrap();
        assert_eq!(outcomes.len(), 2);

        let failed: Vec<_> = outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Failed { .. }))
            .collect();
        assert_eq!(failed.len(), 1);
        assert!(failed[0].path().ends_with("bad.txt"));

        let expected = count_tokens("Hello world", Encoding::O200k) as u64;
        assert_eq!(total_tokens(&outcomes), expected);
    }

    #[test]
    fn test_scan_tree_idempotent() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "stable content").unwrap();
        fs::write(temp.path().join("b.md"), "more stable content").unwrap();

        let first = scan_tree(temp.path(), Encoding::O200k).unwrap();
        let second = scan_tree(temp.path(), Encoding::O200k).unwrap();
        assert_eq!(total_tokens(&first), total_tokens(&second));
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn test_scan_tree_missing_root() {
        let result = scan_tree(Path::new("/nonexistent/root"), Encoding::O200k);
        assert!(result.is_err());
    }

    #[test]
    fn test_total_tokens_empty() {
        assert_eq!(total_tokens(&[]), 0);
    }
}
