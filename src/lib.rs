#![allow(clippy::module_inception)]

use std::{fs, path::Path};

use crate::errors::errors::Error;

pub mod errors;
pub mod lexer;
pub mod output;

extern crate regex;

/// Reads the source file the tokenizer will run over. Failure to obtain the
/// input is the one fatal condition of the tooling and is kept distinct from
/// lexical diagnostics.
pub fn load_source(path: &Path) -> Result<String, Error> {
    Ok(fs::read_to_string(path)?)
}
