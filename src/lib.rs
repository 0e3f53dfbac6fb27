//! Typed builders for MQL expressions and search paths.
//!
//! Expressions and search paths are plain data until rendered. Rendering
//! takes a [`CodecRegistry`] that decides how embedded host objects are
//! encoded, so the same tree can be rendered under different encoding rules.
//!
//! ```ignore
//! use mql::expressions::{EvaluationContext, evaluate, of_array, of_document, of_i32};
//! use mql::codec::{HostDocument, SimpleCodecRegistry};
//! use mql::search::field_path;
//!
//! let registry = SimpleCodecRegistry::new();
//! let expr = of_array([of_i32(1), of_document(HostDocument::new().append("a", true))]);
//! let value = evaluate(&expr, &EvaluationContext::new(&registry))?;
//!
//! assert_eq!(field_path("a.b")?.to_compact_value().as_str(), Some("a.b"));
//! ```

pub mod error;

// --- Re-exported crates ---
pub use mql_bson as bson;
pub use mql_codec as codec;
pub use mql_expressions as expressions;
pub use mql_search as search;

// --- Public API ---
pub use error::MqlError;
pub use mql_bson::{Document, JsonMode, Value};
pub use mql_codec::{CodecRegistry, EncodingError, SimpleCodecRegistry, ToDocument};
pub use mql_expressions::{EvaluationContext, Expression, ExpressionError, evaluate};
pub use mql_search::{SearchPath, SearchPathError};
