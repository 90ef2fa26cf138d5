//! # bkm-parser
//!
//! Lexical support for the bookmark (.bkm) document format.
//!
//! The bookmark format describes formatted documents through command lines
//! (`;document()`, `;heading():`, font and margin directives) and bullet
//! lists. This crate covers the lexical layer only:
//!
//!     token     The closed token kind set and the Token span type.
//!     lexing    The ordered-rule tokenizer and the shared command-prefix
//!               matcher used by completion tooling.
//!     theme     The static kind-to-style presentation table.
//!
//! Tokenization is stateless across lines (the grammar has no multi-line
//! constructs), total over arbitrary input, and restartable: re-tokenizing a
//! line always yields the identical sequence. Structural parsing of documents
//! is out of scope here; editor tooling consumes the token stream directly.

pub mod lexing;
pub mod theme;
pub mod token;

pub use lexing::{tokenize, trailing_command_prefix, Tokens};
pub use token::{detokenize, Token, TokenKind};
