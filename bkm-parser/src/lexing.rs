//! Tokenizer for bookmark lines
//!
//!     Classification is driven by an ordered table of anchored regex rules,
//!     tried in declaration order at each scan offset; the first rule that
//!     matches wins and consumes its match. Declaration order is the only
//!     ambiguity-resolution mechanism in the grammar, so the table below is
//!     ordering-sensitive: the command rule must come before the operator
//!     rule, or `;heading` would split into an operator-less `;` and text.
//!
//! Bullet Lines
//!
//!     The bullet rule is anchored to the start of the line and terminal: a
//!     line whose first non-whitespace characters are `- ` produces one
//!     Bullet token covering everything from that dash to the end of the
//!     line, with a Whitespace token in front when the line is indented.
//!     A `-` anywhere else in a line is an ordinary Operator token. The
//!     check runs once per line, before the scan loop, so the loop never
//!     re-evaluates rules after a bullet has consumed the line.
//!
//! Totality
//!
//!     Tokenization never fails. Characters matched by no rule (plain words,
//!     for instance) are coalesced into a single Whitespace-kind token, which
//!     keeps the stream covering: concatenating the token texts of any line
//!     reconstructs that line exactly.

use crate::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered rule table: patterns are anchored and tried in declaration order
/// at each scan offset. First match wins.
static RULES: Lazy<Vec<(Regex, TokenKind)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"^;[A-Za-z_]\w*").unwrap(), TokenKind::Command),
        (Regex::new(r"^[0-9]+").unwrap(), TokenKind::Number),
        (Regex::new(r#"^".*?""#).unwrap(), TokenKind::String),
        (Regex::new(r"^[()=,:\-]").unwrap(), TokenKind::Operator),
        (Regex::new(r"^\s+").unwrap(), TokenKind::Whitespace),
    ]
});

/// Line-start bullet marker: optional indentation, a dash, one whitespace.
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*-\s").unwrap());

/// Trailing command prefix: a sigil plus zero or more identifier characters
/// ending exactly at the end of the text.
static COMMAND_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r";[A-Za-z_]*$").unwrap());

/// Tokenize a single line of bookmark source.
///
/// The returned iterator is lazy and side-effect free; tokenizing the same
/// line twice yields identical sequences. An empty line yields nothing.
pub fn tokenize(line: &str) -> Tokens<'_> {
    // Byte offset of the dash when the line is a bullet line. The leading
    // indentation still gets its own Whitespace token so coverage holds.
    let bullet_at = BULLET
        .find(line)
        .map(|_| line.len() - line.trim_start().len());
    Tokens {
        line,
        offset: 0,
        bullet_at,
    }
}

/// Lazy left-to-right token stream over one line.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    line: &'a str,
    offset: usize,
    bullet_at: Option<usize>,
}

impl Tokens<'_> {
    fn emit(&mut self, kind: TokenKind, end: usize) -> Token {
        let span = self.offset..end;
        let token = Token {
            kind,
            text: self.line[span.clone()].to_string(),
            span,
        };
        self.offset = end;
        token
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.offset >= self.line.len() {
            return None;
        }

        // Bullet lines bypass the rule table: indentation first, then one
        // terminal Bullet token to the end of the line.
        if let Some(at) = self.bullet_at {
            if self.offset < at {
                return Some(self.emit(TokenKind::Whitespace, at));
            }
            return Some(self.emit(TokenKind::Bullet, self.line.len()));
        }

        let rest = &self.line[self.offset..];
        for (pattern, kind) in RULES.iter() {
            if let Some(found) = pattern.find(rest) {
                return Some(self.emit(*kind, self.offset + found.end()));
            }
        }

        // No rule matched. Coalesce the unmatched run into one fallback
        // token, ending where the next offset with a rule match begins.
        let mut end = self.line.len();
        for (idx, _) in rest.char_indices().skip(1) {
            if RULES
                .iter()
                .any(|(pattern, _)| pattern.is_match(&rest[idx..]))
            {
                end = self.offset + idx;
                break;
            }
        }
        Some(self.emit(TokenKind::Whitespace, end))
    }
}

/// Length in bytes of a trailing command prefix (`;` plus zero or more
/// identifier characters) at the end of `text`, if one is present.
///
/// This is the grammar knowledge the completion engine shares with the
/// tokenizer: a cursor sits in command context exactly when the text before
/// it ends with such a prefix. The matched region is always ASCII, so the
/// byte length doubles as its width in columns.
pub fn trailing_command_prefix(text: &str) -> Option<usize> {
    COMMAND_PREFIX.find(text).map(|found| found.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::detokenize;
    use proptest::prelude::*;

    fn mk_token(kind: TokenKind, text: &str, start: usize, end: usize) -> Token {
        Token {
            kind,
            text: text.to_string(),
            span: start..end,
        }
    }

    fn all(line: &str) -> Vec<Token> {
        tokenize(line).collect()
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(all(""), Vec::new());
    }

    #[test]
    fn test_command_detection() {
        // Exact token sequence validation
        assert_eq!(
            all(";heading()"),
            vec![
                mk_token(TokenKind::Command, ";heading", 0, 8),
                mk_token(TokenKind::Operator, "(", 8, 9),
                mk_token(TokenKind::Operator, ")", 9, 10),
            ]
        );
    }

    #[test]
    fn test_directive_line_pattern() {
        // Bare words like `name` and `size` match no rule and degrade to the
        // Whitespace fallback kind, exactly like unstyled text in an editor.
        assert_eq!(
            all(r#";setfont(name="CMU", size=14)"#),
            vec![
                mk_token(TokenKind::Command, ";setfont", 0, 8),
                mk_token(TokenKind::Operator, "(", 8, 9),
                mk_token(TokenKind::Whitespace, "name", 9, 13),
                mk_token(TokenKind::Operator, "=", 13, 14),
                mk_token(TokenKind::String, "\"CMU\"", 14, 19),
                mk_token(TokenKind::Operator, ",", 19, 20),
                mk_token(TokenKind::Whitespace, " ", 20, 21),
                mk_token(TokenKind::Whitespace, "size", 21, 25),
                mk_token(TokenKind::Operator, "=", 25, 26),
                mk_token(TokenKind::Number, "14", 26, 28),
                mk_token(TokenKind::Operator, ")", 28, 29),
            ]
        );
    }

    #[test]
    fn test_bullet_consumes_whole_line() {
        let line = "  - Pull-ups            - 4 sets, rest 90s";
        assert_eq!(
            all(line),
            vec![
                mk_token(TokenKind::Whitespace, "  ", 0, 2),
                mk_token(TokenKind::Bullet, &line[2..], 2, line.len()),
            ]
        );
    }

    #[test]
    fn test_bullet_at_column_zero() {
        assert_eq!(all("- item"), vec![mk_token(TokenKind::Bullet, "- item", 0, 6)]);
    }

    #[test]
    fn test_mid_line_dash_is_operator() {
        let tokens = all("x - y");
        assert!(tokens.iter().all(|token| token.kind != TokenKind::Bullet));
        assert_eq!(
            tokens,
            vec![
                mk_token(TokenKind::Whitespace, "x", 0, 1),
                mk_token(TokenKind::Whitespace, " ", 1, 2),
                mk_token(TokenKind::Operator, "-", 2, 3),
                mk_token(TokenKind::Whitespace, " ", 3, 4),
                mk_token(TokenKind::Whitespace, "y", 4, 5),
            ]
        );
    }

    #[test]
    fn test_dash_without_following_space_is_operator() {
        assert_eq!(
            all("-x"),
            vec![
                mk_token(TokenKind::Operator, "-", 0, 1),
                mk_token(TokenKind::Whitespace, "x", 1, 2),
            ]
        );
    }

    #[test]
    fn test_string_is_non_greedy() {
        let tokens = all(r#""a" = "b""#);
        assert_eq!(tokens[0], mk_token(TokenKind::String, "\"a\"", 0, 3));
        assert_eq!(tokens[4], mk_token(TokenKind::String, "\"b\"", 6, 9));
    }

    #[test]
    fn test_unterminated_string_degrades() {
        // No closing quote, so the string rule never fires and the line
        // falls through to the fallback kind.
        assert_eq!(
            all("\"abc"),
            vec![mk_token(TokenKind::Whitespace, "\"abc", 0, 4)]
        );
    }

    #[test]
    fn test_unmatched_run_coalesces() {
        assert_eq!(
            all("hello"),
            vec![mk_token(TokenKind::Whitespace, "hello", 0, 5)]
        );
    }

    #[test]
    fn test_sigil_without_identifier_is_not_a_command() {
        // `;` alone matches no rule; `;9` likewise (identifiers cannot start
        // with a digit), leaving the digit to the number rule.
        assert_eq!(
            all(";9"),
            vec![
                mk_token(TokenKind::Whitespace, ";", 0, 1),
                mk_token(TokenKind::Number, "9", 1, 2),
            ]
        );
    }

    #[test]
    fn test_trailing_command_prefix() {
        assert_eq!(trailing_command_prefix(";set"), Some(4));
        assert_eq!(trailing_command_prefix(";"), Some(1));
        assert_eq!(trailing_command_prefix("x=1 ;he"), Some(3));
        assert_eq!(trailing_command_prefix("hello"), None);
        assert_eq!(trailing_command_prefix(";set "), None);
        assert_eq!(trailing_command_prefix(";set4"), None);
        assert_eq!(trailing_command_prefix(""), None);
    }

    #[test]
    fn test_trailing_command_prefix_takes_last_sigil() {
        assert_eq!(trailing_command_prefix(";doc ;head"), Some(5));
    }

    proptest! {
        #[test]
        fn coverage_reconstructs_line(line in "[^\r\n]{0,80}") {
            let tokens: Vec<Token> = tokenize(&line).collect();
            prop_assert_eq!(detokenize(&tokens), line);
        }

        #[test]
        fn spans_are_contiguous_and_ascending(line in "[^\r\n]{0,80}") {
            let mut cursor = 0;
            for token in tokenize(&line) {
                prop_assert_eq!(token.span.start, cursor);
                prop_assert!(token.span.end > token.span.start);
                prop_assert_eq!(&line[token.span.clone()], token.text.as_str());
                cursor = token.span.end;
            }
            prop_assert_eq!(cursor, line.len());
        }

        #[test]
        fn tokenization_is_idempotent(line in "[^\r\n]{0,80}") {
            let first: Vec<Token> = tokenize(&line).collect();
            let second: Vec<Token> = tokenize(&line).collect();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn at_most_one_bullet_per_line(line in "[^\r\n]{0,80}") {
            let bullets = tokenize(&line)
                .filter(|token| token.kind == TokenKind::Bullet)
                .count();
            prop_assert!(bullets <= 1);
        }
    }
}
