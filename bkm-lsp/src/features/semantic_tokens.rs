//! Semantic token classification for bookmark documents.
//!
//!     The tokenizer is line-oriented, so classification is a per-line pass
//!     over the document text. Token kinds map onto standard LSP semantic
//!     token types to stay compatible with existing editor themes; the
//!     bookmark dark palette itself lives in `bkm_parser::theme` for hosts
//!     that render outside the semantic-token path.

use bkm_parser::{tokenize, TokenKind};
use tower_lsp::lsp_types::{SemanticToken, SemanticTokenType, SemanticTokensLegend};

/// Token kinds that produce a semantic token, in legend order.
pub const SEMANTIC_TOKEN_KINDS: &[TokenKind] = &[
    TokenKind::Command,
    TokenKind::Number,
    TokenKind::String,
    TokenKind::Operator,
    TokenKind::Bullet,
];

/// The LSP semantic token type for a kind, or `None` for plain text.
///
/// Mapping rationale:
/// - Command → bold accent in most themes → "keyword"
/// - Number / String / Operator → the standard types of the same name
/// - Bullet → muted gray like the bookmark palette → "comment"
/// - Whitespace (and the unmatched-text fallback) → no token
pub fn as_lsp_type(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Command => Some("keyword"),
        TokenKind::Number => Some("number"),
        TokenKind::String => Some("string"),
        TokenKind::Operator => Some("operator"),
        TokenKind::Bullet => Some("comment"),
        TokenKind::Whitespace => None,
    }
}

/// Legend advertised in the server capabilities.
pub fn legend() -> SemanticTokensLegend {
    SemanticTokensLegend {
        token_types: SEMANTIC_TOKEN_KINDS
            .iter()
            .filter_map(|&kind| as_lsp_type(kind).map(SemanticTokenType::new))
            .collect(),
        token_modifiers: Vec::new(),
    }
}

/// One classified span in absolute line/column coordinates (0-based,
/// columns in characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineToken {
    pub line: u32,
    pub start: u32,
    pub length: u32,
    pub kind: TokenKind,
}

/// Classify every line of `text` into styled spans.
///
/// Tokens are already single-line by construction, so no range splitting is
/// needed before wire encoding. Byte spans are converted to character
/// columns here, once, next to the tokenizer that produced them.
pub fn collect_line_tokens(text: &str) -> Vec<LineToken> {
    let mut tokens = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        for token in tokenize(line) {
            if as_lsp_type(token.kind).is_none() {
                continue;
            }
            tokens.push(LineToken {
                line: line_idx as u32,
                start: line[..token.span.start].chars().count() as u32,
                length: token.text.chars().count() as u32,
                kind: token.kind,
            });
        }
    }
    tokens
}

/// Delta-encode classified spans into the LSP wire format.
pub fn encode_semantic_tokens(tokens: &[LineToken]) -> Vec<SemanticToken> {
    let mut data = Vec::new();
    let mut prev_line = 0u32;
    let mut prev_start = 0u32;

    for token in tokens {
        let token_type = SEMANTIC_TOKEN_KINDS
            .iter()
            .position(|&kind| kind == token.kind)
            .unwrap_or(0) as u32;
        let delta_line = token.line.saturating_sub(prev_line);
        let delta_start = if delta_line == 0 {
            token.start.saturating_sub(prev_start)
        } else {
            token.start
        };
        data.push(SemanticToken {
            delta_line,
            delta_start,
            length: token.length,
            token_type,
            token_modifiers_bitset: 0,
        });
        prev_line = token.line;
        prev_start = token.start;
    }

    data
}
