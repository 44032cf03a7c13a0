use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::{Diagnostic, Diagnostics};

use super::tokens::{Token, TokenKind, KEYWORDS, OPERATORS, SEPARATORS};

lazy_static! {
    // Scientific notation and numeric-type suffixes are not part of this
    // minimal grammar.
    static ref NUMBER: Regex = Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

/// Resolves a candidate substring to its [`TokenKind`] by the first matching
/// rule, in this fixed priority order: keyword, operator, separator, number,
/// identifier. Anything else is [`TokenKind::Unknown`].
///
/// Pure function of the text, so classifying the same candidate twice always
/// yields the same kind. `class` resolves to `Keyword`, never `Identifier`.
pub fn kind_of(candidate: &str) -> TokenKind {
    if KEYWORDS.contains(candidate) {
        TokenKind::Keyword
    } else if OPERATORS.contains(candidate) {
        TokenKind::Operator
    } else if SEPARATORS.contains(candidate) {
        TokenKind::Separator
    } else if NUMBER.is_match(candidate) {
        TokenKind::Number
    } else if IDENTIFIER.is_match(candidate) {
        TokenKind::Identifier
    } else {
        TokenKind::Unknown
    }
}

/// Classifies one candidate into a [`Token`]. Never fails: an unrecognised
/// candidate becomes an `Unknown` token carrying an `Invalid token`
/// diagnostic, which is also recorded in the global set.
pub fn classify(candidate: &str, line: u32, diagnostics: &mut Diagnostics) -> Token {
    match kind_of(candidate) {
        TokenKind::Unknown => {
            let message = diagnostics.report(Diagnostic::InvalidToken {
                token: candidate.to_string(),
            });

            Token::with_error(TokenKind::Unknown, candidate.to_string(), line, message)
        }
        kind => Token::new(kind, candidate.to_string(), line),
    }
}
