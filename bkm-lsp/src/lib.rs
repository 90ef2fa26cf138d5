//! Language Server Protocol (LSP) implementation for the bookmark format
//!
//!     This crate provides editor support for bookmark (.bkm) documents in any
//!     LSP-compatible editor. The format is line-oriented and purely lexical
//!     at this layer, so the server is thin: it holds the text of open
//!     documents and answers requests by running the bkm-parser tokenizer and
//!     the completion engine over single lines.
//!
//! Feature Set
//!
//!     1. Semantic Tokens (textDocument/semanticTokens/full):
//!         - Per-line classification: commands, numbers, strings, operators,
//!           bullet lines
//!         - Whitespace and unclassified text carry no semantic token and
//!           render as plain text
//!
//!     2. Completion (textDocument/completion, trigger character `;`):
//!         - Detects an unterminated command prefix directly before the
//!           cursor and offers the full command catalog
//!         - Every item carries a text edit over the exact prefix span, so
//!           accepting a candidate neither duplicates the sigil nor leaves
//!           stray characters
//!         - No server-side filtering by typed letters; the editor's own
//!           fuzzy matcher narrows the list
//!
//!     3. Execute Command (workspace/executeCommand):
//!         - `bkm.theme` exports the static kind-to-style table for host
//!           surfaces that render outside the semantic-token path
//!
//! Architecture
//!
//!     Server Layer (server module):
//!         - Implements the LanguageServer trait
//!         - Manages open document text (full sync, last change wins)
//!         - Thin, mostly dispatches into the feature layer
//!
//!     Feature Layer (features module):
//!         - Pure functions of (text, position), no shared mutable state
//!         - All logic and dense unit tests live here
//!
//! Usage
//!
//!     Binary:
//!         $ bkm-lsp
//!         Starts the language server on stdin/stdout for editor integration.

pub mod features;
pub mod server;

pub use server::BkmLanguageServer;
