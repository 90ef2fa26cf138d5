//! Core token types shared by the tokenizer and the editor tooling layers.

use serde::Serialize;
use std::ops::Range;

/// Classification assigned to a matched span of a bookmark line.
///
/// The set is closed: every span of every line maps to exactly one of these
/// kinds, and unclassifiable input degrades to `Whitespace` rather than
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Sigil-prefixed command name, e.g. `;heading`.
    Command,
    /// Run of decimal digits.
    Number,
    /// Double-quoted string literal.
    String,
    /// Single punctuation character from `( ) = , : -`.
    Operator,
    /// A whole bullet line, from its first non-whitespace character onward.
    Bullet,
    /// Whitespace, plus the fallback kind for unmatched characters.
    Whitespace,
}

impl TokenKind {
    /// Check if this kind carries no presentation styling of its own.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Check if this kind is a command token.
    pub fn is_command(self) -> bool {
        matches!(self, TokenKind::Command)
    }

    /// Check if this kind is a literal value (number or string).
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::String)
    }
}

/// One classified span within a single line.
///
/// `text` is always `line[span]`; spans never overlap, and concatenating the
/// texts of a line's tokens in order reconstructs the line exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Range<usize>,
}

/// Convert a token sequence back into source text.
///
/// By the coverage invariant this is an exact reconstruction of the line the
/// tokens came from, which makes it useful for round-trip testing.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.text.as_str()).collect()
}
