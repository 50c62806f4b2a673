use super::{error::InvokeError, models::ResultItem};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct Response {
    #[serde(default)]
    items: Vec<ResultItem>,
}

/// Decodes the captured stdout of the binary.
///
/// A document without `items` is an empty result, not an error.
pub fn parse_output(stdout: &[u8]) -> Result<Vec<ResultItem>, InvokeError> {
    let text = std::str::from_utf8(stdout)
        .map_err(|e| InvokeError::Parse(format!("output is not UTF-8: {e}")))?;
    let response: Response =
        serde_json::from_str(text).map_err(|e| InvokeError::Parse(e.to_string()))?;
    Ok(response.items)
}
