use thiserror::Error;

/// A non-fatal lexical anomaly. Diagnostics ride alongside the token stream
/// as data; the tokenizer never aborts on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("Invalid token: \"{token}\"")]
    InvalidToken { token: String },
    #[error("Unclosed string literal")]
    UnclosedStringLiteral,
    #[error("Unterminated block comment")]
    UnterminatedComment,
}

/// Deduplicated, insertion-ordered collection of diagnostic messages.
///
/// Diagnostics are keyed by their rendered text: reporting the same message
/// twice keeps a single entry, matching how the surrounding tooling prints
/// the error list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { messages: vec![] }
    }

    /// Records a diagnostic and returns its rendered message so the caller
    /// can also attach it to the offending token.
    pub fn report(&mut self, diagnostic: Diagnostic) -> String {
        let message = diagnostic.to_string();

        if !self.messages.contains(&message) {
            self.messages.push(message.clone());
        }

        message
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(|message| message.as_str())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Folds another collection into this one, preserving insertion order
    /// and dropping messages already present.
    pub fn merge(&mut self, other: Diagnostics) {
        for message in other.messages {
            if !self.messages.contains(&message) {
                self.messages.push(message);
            }
        }
    }
}

/// Fatal failures of the surrounding tooling. Lexical anomalies never end up
/// here; they are [`Diagnostic`]s attached to the token stream instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read source file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialise tokens: {0}")]
    Json(#[from] serde_json::Error),
}
