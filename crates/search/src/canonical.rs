//! Compact external form of rendered search paths.
use crate::error::SearchPathError;
use crate::path::SearchPath;
use mql_bson::{Document, Value};

/// Key of the one-entry wrapper a plain field path renders to. Only this key
/// collapses to a bare string.
pub const SEARCH_PATH_VALUE_KEY: &str = "path";
pub const WILDCARD_KEY: &str = "wildcard";
/// Field key of a multi-analyzer path.
pub const VALUE_KEY: &str = "value";
pub const MULTI_KEY: &str = "multi";

/// Collapses `{ "path": <string> }` to the bare string; every other document,
/// single-entry or not, is returned unchanged.
pub fn to_compact_value(doc: Document) -> Value {
    match doc.into_single_entry() {
        Ok((key, Value::String(path))) if key == SEARCH_PATH_VALUE_KEY => Value::String(path),
        Ok((key, value)) => Value::Document(Document::new().append(key, value)),
        Err(doc) => Value::Document(doc),
    }
}

/// Renders the `path` option of a search operator: a single path as its
/// compact value, several as an array of compact values in order.
///
/// # Errors
///
/// Fails with [`SearchPathError::InvalidArgument`] when `paths` is empty.
pub fn combine<'a>(paths: impl IntoIterator<Item = &'a SearchPath>) -> Result<Value, SearchPathError> {
    let mut values: Vec<Value> = paths.into_iter().map(SearchPath::to_compact_value).collect();
    match values.len() {
        0 => Err(SearchPathError::invalid_argument("paths must not be empty")),
        1 => Ok(values.remove(0)),
        _ => Ok(Value::Array(values)),
    }
}
