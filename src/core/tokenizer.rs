//! Token counting module - BPE-backed token counts for threshold checks
//!
//! Provides accurate token counting using tiktoken (o200k_base by default),
//! with a fast heuristic fallback that needs no BPE tables.
//!
//! Supported encodings:
//! - o200k_base (GPT-4o native, the default)
//! - cl100k_base (GPT-4, GPT-3.5-turbo)
//! - heuristic (bytes-based estimate)

use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;
use tiktoken_rs::{cl100k_base, o200k_base, CoreBPE};

/// Supported tokenizer encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// o200k_base encoding (GPT-4o native)
    #[default]
    O200k,
    /// cl100k_base encoding (GPT-4, GPT-3.5-turbo)
    Cl100k,
    /// Fast byte-length estimate (no BPE encoding)
    Heuristic,
}

impl Encoding {
    /// Get the underlying BPE table for this encoding
    fn bpe(&self) -> Option<&'static CoreBPE> {
        match self {
            Encoding::O200k => O200K_BPE.as_ref().ok(),
            Encoding::Cl100k => CL100K_BPE.as_ref().ok(),
            Encoding::Heuristic => None,
        }
    }

    /// List all available encoding names
    pub fn available() -> &'static [&'static str] {
        &["o200k_base", "cl100k_base", "heuristic"]
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::O200k => "o200k_base",
            Encoding::Cl100k => "cl100k_base",
            Encoding::Heuristic => "heuristic",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "o200k" | "o200k_base" | "default" => Ok(Encoding::O200k),
            "cl100k" | "cl100k_base" => Ok(Encoding::Cl100k),
            "heuristic" | "fast" | "estimate" => Ok(Encoding::Heuristic),
            _ => Err(format!(
                "Unknown encoding: {}. Available: {}",
                s,
                Encoding::available().join(", ")
            )),
        }
    }
}

// Lazy-initialized BPE tables (loaded once on first use)
static O200K_BPE: Lazy<Result<CoreBPE, String>> =
    Lazy::new(|| o200k_base().map_err(|e| format!("Failed to load o200k_base: {}", e)));

static CL100K_BPE: Lazy<Result<CoreBPE, String>> =
    Lazy::new(|| cl100k_base().map_err(|e| format!("Failed to load cl100k_base: {}", e)));

/// Count tokens in text using the specified encoding
///
/// Uses ordinary encoding (no special tokens), so the count matches what the
/// text itself would occupy in a model context. Falls back to the heuristic
/// when the BPE table is unavailable.
pub fn count_tokens(text: &str, encoding: Encoding) -> usize {
    if text.is_empty() {
        return 0;
    }

    match encoding.bpe() {
        Some(bpe) => bpe.encode_ordinary(text).len(),
        None => estimate_tokens(text),
    }
}

/// Estimate tokens without a BPE table
///
/// Mixed prose and code average out to roughly four bytes per token, which is
/// close enough for threshold checks when accuracy is not required.
pub fn estimate_tokens(text: &str) -> usize {
    text.len().div_ceil(4)
}
