//! Presentation mapping from token kinds to display styles.
//!
//!     This is static configuration data, not logic: a fixed lookup keyed by
//!     the closed token kind set, plus the two base editor colors. Rendering
//!     itself happens in the host surface; this module only tells it what
//!     each kind should look like.

use crate::token::TokenKind;
use serde::Serialize;

/// Editor background color of the bookmark dark theme.
pub const EDITOR_BACKGROUND: &str = "#1e1e1e";

/// Editor cursor color of the bookmark dark theme.
pub const CURSOR_FOREGROUND: &str = "#FFFFFF";

/// Display style for one token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenStyle {
    pub foreground: &'static str,
    pub bold: bool,
}

/// One kind-to-style entry of the theme table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeRule {
    pub kind: TokenKind,
    pub style: TokenStyle,
}

/// The full theme, shaped for export to host surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub background: &'static str,
    pub cursor: &'static str,
    pub rules: Vec<ThemeRule>,
}

/// Style for a token kind, or `None` for kinds rendered as plain text.
pub fn style_for(kind: TokenKind) -> Option<TokenStyle> {
    match kind {
        TokenKind::Command => Some(TokenStyle {
            foreground: "#FF9900",
            bold: true,
        }),
        TokenKind::String => Some(TokenStyle {
            foreground: "#00FF00",
            bold: false,
        }),
        TokenKind::Number => Some(TokenStyle {
            foreground: "#FF00FF",
            bold: false,
        }),
        TokenKind::Operator => Some(TokenStyle {
            foreground: "#00FFFF",
            bold: false,
        }),
        TokenKind::Bullet => Some(TokenStyle {
            foreground: "#AAAAAA",
            bold: false,
        }),
        TokenKind::Whitespace => None,
    }
}

/// Assemble the exportable theme table in kind declaration order.
pub fn theme() -> Theme {
    const KINDS: &[TokenKind] = &[
        TokenKind::Command,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Operator,
        TokenKind::Bullet,
        TokenKind::Whitespace,
    ];
    Theme {
        background: EDITOR_BACKGROUND,
        cursor: CURSOR_FOREGROUND,
        rules: KINDS
            .iter()
            .filter_map(|&kind| style_for(kind).map(|style| ThemeRule { kind, style }))
            .collect(),
    }
}
