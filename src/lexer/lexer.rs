use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::{Diagnostic, Diagnostics};

use super::classifier::{classify, kind_of};
use super::comments::{strip_comments, CommentPolicy};
use super::tokens::{Token, TokenKind, SYMBOLS};

lazy_static! {
    // The optional closing quote lets an unterminated string (one that runs
    // to end of line) match as a span instead of silently failing.
    static ref STRING_SPAN: Regex = Regex::new("\"[^\"]*\"?").unwrap();
}

/// Ordered sequence of tokens, in source order except for the per-line
/// string-literal ordering described in [`Lexer::tokenize_line`].
pub type TokenStream = Vec<Token>;

#[derive(Debug, Clone, Copy, Default)]
pub struct TokenizerOptions {
    pub comment_policy: CommentPolicy,
}

struct Lexer {
    tokens: TokenStream,
    diagnostics: Diagnostics,
}

impl Lexer {
    fn new() -> Lexer {
        Lexer {
            tokens: vec![],
            diagnostics: Diagnostics::new(),
        }
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Tokenizes one comment-stripped line. `number` is the 1-based line
    /// number in the original source.
    ///
    /// String spans are located first and treated as exclusion intervals so
    /// their contents are never split on whitespace; the characters outside
    /// the intervals form the non-string candidates. Within a line the
    /// non-string tokens are emitted before the line's string literals, even
    /// when a literal appears earlier in the text. Downstream consumers
    /// depend on that ordering, so it is preserved as-is.
    fn tokenize_line(&mut self, line: &str, number: u32) {
        if line.trim().is_empty() {
            return;
        }

        let spans: Vec<regex::Match> = STRING_SPAN.find_iter(line).collect();

        let mut fragments: Vec<String> = vec![];
        let mut current = String::new();

        for (index, ch) in line.char_indices() {
            let excluded = spans.iter().any(|span| span.range().contains(&index));

            if excluded || ch.is_whitespace() {
                if !current.is_empty() {
                    fragments.push(std::mem::take(&mut current));
                }
            } else {
                current.push(ch);
            }
        }

        if !current.is_empty() {
            fragments.push(current);
        }

        for fragment in fragments {
            for candidate in split_candidates(&fragment) {
                let token = classify(&candidate, number, &mut self.diagnostics);
                self.push(token);
            }
        }

        for span in spans {
            let value = span.as_str();
            let closed = value.len() >= 2 && value.ends_with('"');

            if closed {
                self.push(Token::new(TokenKind::StringLiteral, value.to_string(), number));
            } else {
                let message = self.diagnostics.report(Diagnostic::UnclosedStringLiteral);
                self.push(Token::with_error(
                    TokenKind::StringLiteral,
                    value.to_string(),
                    number,
                    message,
                ));
            }
        }
    }
}

/// Resolves a whitespace-delimited fragment into candidate substrings.
///
/// A fragment that already classifies as a whole stays a single candidate,
/// which keeps tokens like `>>>=` and `-3` intact. Otherwise the fragment is
/// decomposed left-to-right by maximal munch: a word run, a number (with a
/// leading minus when a digit follows it), the longest matching operator or
/// separator symbol, or a lone uncategorised character (`3;` yields `3`
/// and `;`).
fn split_candidates(fragment: &str) -> Vec<String> {
    if kind_of(fragment) != TokenKind::Unknown {
        return vec![fragment.to_string()];
    }

    let chars: Vec<char> = fragment.chars().collect();
    let mut candidates = vec![];
    let mut index = 0;

    while index < chars.len() {
        let ch = chars[index];

        if ch.is_ascii_alphabetic() || ch == '_' {
            let start = index;
            while index < chars.len() && (chars[index].is_ascii_alphanumeric() || chars[index] == '_') {
                index += 1;
            }
            candidates.push(chars[start..index].iter().collect());
        } else if ch.is_ascii_digit()
            || (ch == '-' && chars.get(index + 1).map_or(false, |next| next.is_ascii_digit()))
        {
            let start = index;
            if ch == '-' {
                index += 1;
            }
            while index < chars.len() && chars[index].is_ascii_digit() {
                index += 1;
            }
            // Fractional part only when a digit follows the dot, so `3.` stays
            // a number and a separator.
            if index + 1 < chars.len()
                && chars[index] == '.'
                && chars[index + 1].is_ascii_digit()
            {
                index += 1;
                while index < chars.len() && chars[index].is_ascii_digit() {
                    index += 1;
                }
            }
            candidates.push(chars[start..index].iter().collect());
        } else if let Some(symbol) = match_symbol(&chars[index..]) {
            index += symbol.len();
            candidates.push(symbol.to_string());
        } else {
            candidates.push(ch.to_string());
            index += 1;
        }
    }

    candidates
}

/// Longest operator or separator symbol starting at the head of `rest`.
fn match_symbol(rest: &[char]) -> Option<&'static str> {
    SYMBOLS.iter().copied().find(|symbol| {
        symbol.len() <= rest.len()
            && symbol.chars().zip(rest.iter()).all(|(a, b)| a == *b)
    })
}

/// Runs the full pipeline with default options: strip comments, tokenize
/// each line, classify every candidate. Pure function of the input text;
/// lexical anomalies surface in the returned [`Diagnostics`], never as an
/// error return.
pub fn tokenize(source: &str) -> (TokenStream, Diagnostics) {
    tokenize_with(source, TokenizerOptions::default())
}

pub fn tokenize_with(source: &str, options: TokenizerOptions) -> (TokenStream, Diagnostics) {
    let mut lexer = Lexer::new();

    let stripped = strip_comments(source, options.comment_policy, &mut lexer.diagnostics);

    for (index, line) in stripped.lines().enumerate() {
        lexer.tokenize_line(line, index as u32 + 1);
    }

    (lexer.tokens, lexer.diagnostics)
}
