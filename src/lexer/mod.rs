//! Lexical analysis module.
//!
//! This module contains the tokenizer that converts raw source code into a
//! stream of classified tokens. The pipeline runs in three stages:
//!
//! - Comment stripping with line structure preserved (`comments`)
//! - Per-line candidate extraction with string spans segregated (`lexer`)
//! - First-match classification into token kinds (`classifier`)
//!
//! Lexical anomalies are collected as diagnostics alongside the token
//! stream; the pipeline itself never fails.

pub mod classifier;
pub mod comments;
pub mod lexer;
pub mod tokens;
