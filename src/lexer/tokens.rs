use lazy_static::lazy_static;
use serde::Serialize;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    /// Reserved words of the target language, frozen at startup.
    pub static ref KEYWORDS: HashSet<&'static str> = HashSet::from([
        "abstract",
        "assert",
        "boolean",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "class",
        "const",
        "continue",
        "default",
        "do",
        "double",
        "else",
        "enum",
        "extends",
        "final",
        "finally",
        "float",
        "for",
        "goto",
        "if",
        "implements",
        "import",
        "instanceof",
        "int",
        "interface",
        "long",
        "native",
        "new",
        "package",
        "private",
        "protected",
        "public",
        "return",
        "short",
        "static",
        "strictfp",
        "super",
        "switch",
        "synchronized",
        "this",
        "throw",
        "throws",
        "transient",
        "try",
        "void",
        "volatile",
        "while",
        "true",
        "false",
        "null",
        "var",
    ]);

    /// Operator symbols, matched as whole tokens only.
    pub static ref OPERATORS: HashSet<&'static str> = HashSet::from([
        "+", "-", "*", "/", "%",
        "=", "+=", "-=", "*=", "/=", "%=",
        "&=", "|=", "^=", "<<=", ">>=", ">>>=",
        "++", "--",
        "==", "!=", ">", "<", ">=", "<=",
        "&&", "||", "!",
        "&", "|", "^", "~", "<<", ">>", ">>>",
        "?", ":", "->", "::",
    ]);

    /// Punctuation symbols. `::` also appears in [`OPERATORS`], which wins
    /// because the classifier checks operators first.
    pub static ref SEPARATORS: HashSet<&'static str> = HashSet::from([
        "(", ")", "{", "}", "[", "]", ";", ",", ".", "@", "...", "::",
    ]);

    /// Every operator and separator symbol, longest first, for maximal-munch
    /// decomposition of fragments that fail whole-token classification.
    pub static ref SYMBOLS: Vec<&'static str> = {
        let mut symbols: Vec<&'static str> = OPERATORS.union(&SEPARATORS).copied().collect();
        symbols.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        symbols
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Operator,
    Separator,
    Number,
    #[serde(rename = "literal")]
    StringLiteral,
    Unknown,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified, positioned unit of lexical text. Immutable once created;
/// `line` is 1-based and refers to the original pre-strip source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind, value: String, line: u32) -> Token {
        Token {
            kind,
            value,
            line,
            error: None,
        }
    }

    pub fn with_error(kind: TokenKind, value: String, line: u32, error: String) -> Token {
        Token {
            kind,
            value,
            line,
            error: Some(error),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?}) @ line {}", self.kind, self.value, self.line)
    }
}
