use bkm_parser::theme;
use serde_json::Value;
use tower_lsp::jsonrpc::{Error, Result};

/// Export the static kind-to-style table for host surfaces that render
/// outside the semantic-token path.
pub const COMMAND_THEME: &str = "bkm.theme";

pub fn execute_command(command: &str, _arguments: &[Value]) -> Result<Option<Value>> {
    match command {
        COMMAND_THEME => {
            let value = serde_json::to_value(theme::theme())
                .map_err(|_| Error::internal_error())?;
            Ok(Some(value))
        }
        _ => Err(Error::invalid_request()),
    }
}
