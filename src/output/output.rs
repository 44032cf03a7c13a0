use std::{fs, path::Path};

use crate::errors::errors::{Diagnostics, Error};
use crate::lexer::tokens::Token;

/// Serializes the token stream to the canonical JSON form: a list of objects
/// with `type`, `value`, `line` and, where present, `error`, in exactly the
/// order the tokenizer produced them.
pub fn to_json(tokens: &[Token]) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(tokens)?)
}

/// Writes the serialized token stream to `path`, creating parent directories
/// as needed.
pub fn write_tokens(path: &Path, tokens: &[Token]) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, to_json(tokens)?)?;
    Ok(())
}

/// Prints the deduplicated diagnostic list, one message per line.
pub fn report_diagnostics(diagnostics: &Diagnostics) {
    if diagnostics.is_empty() {
        return;
    }

    println!("Errors detected:");
    for message in diagnostics.iter() {
        println!("- {}", message);
    }
}
