//! Context-aware command completion
//!
//!     Given the current line and a 1-based cursor column, decide whether the
//!     cursor sits directly after an unterminated command prefix (the `;`
//!     sigil plus zero or more identifier characters) and, if so, offer the
//!     whole command catalog. Each candidate carries the exact span the
//!     accepted insertion text replaces, so the partially typed prefix is
//!     overwritten rather than duplicated.
//!
//!     The catalog is deliberately not narrowed by the letters already typed:
//!     editors apply their own fuzzy matching over the returned set, and a
//!     stable, complete list keeps that interaction predictable.

use bkm_parser::trailing_command_prefix;

/// A static catalog entry: one completable bookmark command.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandSpec {
    pub label: &'static str,
    pub insert_text: &'static str,
    pub detail: &'static str,
}

/// The built-in commands of the bookmark format, in presentation order.
pub const COMMAND_CATALOG: &[CommandSpec] = &[
    CommandSpec {
        label: ";document",
        insert_text: ";document()",
        detail: "Start a new document",
    },
    CommandSpec {
        label: ";setmargin",
        insert_text: ";setmargin(all=0)",
        detail: "Set margins",
    },
    CommandSpec {
        label: ";initfont",
        insert_text: ";initfont(name=\"CMU\", path=\"~/Library/Fonts/cmunrm.ttf\")",
        detail: "Initialize font",
    },
    CommandSpec {
        label: ";setfont",
        insert_text: ";setfont(name=\"CMU\", size=14)",
        detail: "Set font and size",
    },
    CommandSpec {
        label: ";heading",
        insert_text: ";heading(): ",
        detail: "Add a heading",
    },
    CommandSpec {
        label: ";paragraph",
        insert_text: ";paragraph():\n  - ",
        detail: "Start a paragraph with bullets",
    },
];

/// Column range on the current line that an accepted candidate overwrites.
/// Columns are 1-based; the end column is always the cursor column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacementSpan {
    pub start_column: u32,
    pub end_column: u32,
}

/// One completion candidate: a catalog entry plus its replacement span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionCandidate<'a> {
    pub spec: &'a CommandSpec,
    pub span: ReplacementSpan,
}

/// Complete against the static command catalog.
pub fn complete(line: &str, cursor_column: u32) -> Vec<CompletionCandidate<'static>> {
    complete_with_catalog(COMMAND_CATALOG, line, cursor_column)
}

/// Complete against an explicit catalog.
///
/// Pure function of its arguments: returns the empty list when the text
/// before the cursor does not end in a command prefix, and otherwise one
/// candidate per catalog entry, in catalog order, all sharing the same
/// replacement span. Out-of-range cursor columns are clamped to the line.
pub fn complete_with_catalog<'a>(
    catalog: &'a [CommandSpec],
    line: &str,
    cursor_column: u32,
) -> Vec<CompletionCandidate<'a>> {
    let line_columns = line.chars().count() as u32;
    let cursor_column = cursor_column.clamp(1, line_columns + 1);
    let prefix: String = line.chars().take(cursor_column as usize - 1).collect();

    let Some(matched) = trailing_command_prefix(&prefix) else {
        return Vec::new();
    };

    // The matched prefix is ASCII, so its byte length is its column width.
    let span = ReplacementSpan {
        start_column: cursor_column - matched as u32,
        end_column: cursor_column,
    };
    catalog
        .iter()
        .map(|spec| CompletionCandidate { spec, span })
        .collect()
}
