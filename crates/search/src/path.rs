use crate::canonical::{MULTI_KEY, SEARCH_PATH_VALUE_KEY, VALUE_KEY, WILDCARD_KEY, to_compact_value};
use crate::error::SearchPathError;
use mql_bson::{Document, Value};
use std::fmt;

/// The document fields a search operator matches against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchPath {
    Field(FieldSearchPath),
    Wildcard(WildcardSearchPath),
}

/// An exact field, in dot notation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSearchPath {
    path: String,
    multi: Option<String>,
}

/// A field pattern containing `*` wildcards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WildcardSearchPath {
    pattern: String,
}

/// See [`SearchPath::field_path`].
pub fn field_path(path: impl Into<String>) -> Result<FieldSearchPath, SearchPathError> {
    let path = path.into();
    if path.is_empty() {
        return Err(SearchPathError::invalid_argument("path must not be empty"));
    }
    if path.contains('*') {
        return Err(SearchPathError::invalid_argument("path must not contain '*'"));
    }
    Ok(FieldSearchPath { path, multi: None })
}

/// See [`SearchPath::wildcard_path`].
pub fn wildcard_path(pattern: impl Into<String>) -> Result<WildcardSearchPath, SearchPathError> {
    let pattern = pattern.into();
    if pattern.is_empty() {
        return Err(SearchPathError::invalid_argument("wildcardPath must not be empty"));
    }
    if pattern.contains("**") {
        return Err(SearchPathError::invalid_argument("wildcardPath must not contain '**'"));
    }
    if !pattern.contains('*') {
        return Err(SearchPathError::invalid_argument("wildcardPath must contain '*'"));
    }
    Ok(WildcardSearchPath { pattern })
}

impl SearchPath {
    /// Returns a path for a single field. The path must not contain wildcard
    /// characters.
    pub fn field_path(path: impl Into<String>) -> Result<FieldSearchPath, SearchPathError> {
        field_path(path)
    }

    /// Returns a path for every field matching `pattern`, which must contain
    /// `*` and must not contain `**`.
    pub fn wildcard_path(pattern: impl Into<String>) -> Result<WildcardSearchPath, SearchPathError> {
        wildcard_path(pattern)
    }

    /// The string the path was built from.
    pub fn raw(&self) -> &str {
        match self {
            SearchPath::Field(field) => field.path(),
            SearchPath::Wildcard(wildcard) => wildcard.pattern(),
        }
    }

    pub fn render(&self) -> Document {
        match self {
            SearchPath::Field(field) => field.render(),
            SearchPath::Wildcard(wildcard) => wildcard.render(),
        }
    }

    pub fn to_compact_value(&self) -> Value {
        to_compact_value(self.render())
    }
}

impl FieldSearchPath {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn analyzer(&self) -> Option<&str> {
        self.multi.as_deref()
    }

    /// Searches the field with the alternate analyzer `analyzer` instead of
    /// the index default.
    pub fn multi(self, analyzer: impl Into<String>) -> Result<Self, SearchPathError> {
        let analyzer = analyzer.into();
        if analyzer.is_empty() {
            return Err(SearchPathError::invalid_argument("analyzerName must not be empty"));
        }
        Ok(Self {
            path: self.path,
            multi: Some(analyzer),
        })
    }

    pub fn render(&self) -> Document {
        match &self.multi {
            None => Document::new().append(SEARCH_PATH_VALUE_KEY, self.path.as_str()),
            Some(analyzer) => Document::new()
                .append(VALUE_KEY, self.path.as_str())
                .append(MULTI_KEY, analyzer.as_str()),
        }
    }

    pub fn to_compact_value(&self) -> Value {
        to_compact_value(self.render())
    }
}

impl WildcardSearchPath {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn render(&self) -> Document {
        Document::new().append(WILDCARD_KEY, self.pattern.as_str())
    }

    pub fn to_compact_value(&self) -> Value {
        to_compact_value(self.render())
    }
}

impl From<FieldSearchPath> for SearchPath {
    fn from(field: FieldSearchPath) -> Self {
        SearchPath::Field(field)
    }
}

impl From<WildcardSearchPath> for SearchPath {
    fn from(wildcard: WildcardSearchPath) -> Self {
        SearchPath::Wildcard(wildcard)
    }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_compact_value())
    }
}
