//! Core module - Tokenizer backends and file reading
//!
//! This module provides:
//! - Token counting with swappable encodings
//! - Strict UTF-8 file reading with a single per-file error type

pub mod reader;
pub mod tokenizer;
