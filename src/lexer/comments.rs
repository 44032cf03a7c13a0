use crate::errors::errors::{Diagnostic, Diagnostics};

/// What to do when a block comment is still open at end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentPolicy {
    /// Blank the remainder of the file silently (historical behavior).
    #[default]
    Lenient,
    /// Blank the remainder and report an `Unterminated block comment`.
    Strict,
}

/// Removes block and line comments from `source` while preserving its line
/// structure exactly: every line break survives, so stripped output has the
/// same line count as the input and downstream line numbers stay valid.
///
/// Block comments are handled first-class and may span lines; a `/*` closed
/// by `*/` on the same line ends on that line. Line comments run to the end
/// of the physical line. The stripper is not string-aware: a `//` inside a
/// string literal still starts a comment, matching the original tooling.
pub fn strip_comments(source: &str, policy: CommentPolicy, diagnostics: &mut Diagnostics) -> String {
    let mut stripped = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut in_block = false;

    while let Some(ch) = chars.next() {
        if in_block {
            if ch == '\n' {
                stripped.push('\n');
            } else if ch == '*' && chars.peek() == Some(&'/') {
                chars.next();
                in_block = false;
            }
            continue;
        }

        if ch == '/' {
            match chars.peek() {
                Some('*') => {
                    chars.next();
                    in_block = true;
                    continue;
                }
                Some('/') => {
                    // Drop the rest of the physical line, keep its break.
                    for ch in chars.by_ref() {
                        if ch == '\n' {
                            stripped.push('\n');
                            break;
                        }
                    }
                    continue;
                }
                _ => {}
            }
        }

        stripped.push(ch);
    }

    if in_block && policy == CommentPolicy::Strict {
        diagnostics.report(Diagnostic::UnterminatedComment);
    }

    stripped
}
