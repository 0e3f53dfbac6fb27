//! Typed document model for rendered MQL expressions.
//!
//! Everything an expression or a search path renders to is a [`Value`]:
//! typed scalars, arrays and insertion-ordered [`Document`]s. Values print as
//! MongoDB extended JSON (see [`JsonMode`]).
//!
//! # Key Types
//!
//! - [`Value`]: a single serialized value
//! - [`Document`]: an ordered `String -> Value` map
//! - [`DateTime`]: milliseconds since the Unix epoch

mod datetime;
mod document;
mod json;
mod value;

pub use datetime::DateTime;
pub use document::Document;
pub use json::JsonMode;
pub use rust_decimal::Decimal;
pub use value::{ElementType, Value};
