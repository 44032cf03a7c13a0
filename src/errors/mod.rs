//! Error types and diagnostics for the tokenizer.
//!
//! This module defines the two error channels of the pipeline:
//!
//! - [`errors::Diagnostic`] / [`errors::Diagnostics`] - non-fatal lexical
//!   anomalies (invalid tokens, unclosed string literals, unterminated
//!   comments) collected as deduplicated data alongside the token stream
//! - [`errors::Error`] - fatal failures of the surrounding tooling
//!   (file I/O, serialization), which never originate inside the tokenizer

pub mod errors;
