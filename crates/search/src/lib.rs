//! Search paths for `$search` operators.
//!
//! A [`SearchPath`] names the fields a search operator runs over: one exact
//! field (optionally with an alternate analyzer) or a wildcard pattern.
//! Paths render to a wrapper [`Document`](mql_bson::Document) and, for the
//! external form, to a compact value where a plain field path becomes a bare
//! string.

pub mod canonical;
pub mod error;
pub mod path;

pub use canonical::{
    MULTI_KEY, SEARCH_PATH_VALUE_KEY, VALUE_KEY, WILDCARD_KEY, combine, to_compact_value,
};
pub use error::SearchPathError;
pub use path::{FieldSearchPath, SearchPath, WildcardSearchPath, field_path, wildcard_path};
