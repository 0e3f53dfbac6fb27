//! Defines the expression tree built by the literal constructors.
use mql_bson::{DateTime, Decimal, Value};
use mql_codec::ToDocument;
use std::fmt;
use std::sync::Arc;

/// An expression awaiting a codec registry.
///
/// Nodes hold no reference to any registry, so one tree can be rendered
/// against several registries.
#[derive(Debug, Clone)]
pub enum Expression {
    /// A single typed scalar.
    Literal(ScalarValue),
    /// An ordered array of child expressions.
    Array(Vec<Expression>),
    /// An opaque document, encoded at render time and wrapped in `$literal`.
    Document(DocumentLiteral),
    /// The null value.
    Null,
}

/// The scalar kinds a literal can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Double(f64),
    Decimal(Decimal),
    DateTime(DateTime),
    String(String),
}

/// The static type fixed by the constructor that built an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionType {
    Boolean,
    Integer,
    Number,
    Date,
    String,
    Array,
    Document,
    /// Null is a member of every expression type.
    Any,
}

/// Shared handle to a document source.
#[derive(Clone)]
pub struct DocumentLiteral(Arc<dyn ToDocument>);

impl DocumentLiteral {
    pub fn new(source: impl ToDocument + 'static) -> Self {
        Self(Arc::new(source))
    }

    pub fn source(&self) -> &dyn ToDocument {
        self.0.as_ref()
    }
}

impl fmt::Debug for DocumentLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DocumentLiteral").field(&self.0).finish()
    }
}

impl Expression {
    pub fn expression_type(&self) -> ExpressionType {
        match self {
            Expression::Literal(scalar) => scalar.expression_type(),
            Expression::Array(_) => ExpressionType::Array,
            Expression::Document(_) => ExpressionType::Document,
            Expression::Null => ExpressionType::Any,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Expression::Null)
    }
}

impl ScalarValue {
    pub fn expression_type(&self) -> ExpressionType {
        match self {
            ScalarValue::Boolean(_) => ExpressionType::Boolean,
            ScalarValue::Int32(_) | ScalarValue::Int64(_) => ExpressionType::Integer,
            ScalarValue::Double(_) | ScalarValue::Decimal(_) => ExpressionType::Number,
            ScalarValue::DateTime(_) => ExpressionType::Date,
            ScalarValue::String(_) => ExpressionType::String,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            ScalarValue::Boolean(b) => Value::Boolean(*b),
            ScalarValue::Int32(i) => Value::Int32(*i),
            ScalarValue::Int64(i) => Value::Int64(*i),
            ScalarValue::Double(d) => Value::Double(*d),
            ScalarValue::Decimal(d) => Value::Decimal(*d),
            ScalarValue::DateTime(dt) => Value::DateTime(*dt),
            ScalarValue::String(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for ExpressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpressionType::Boolean => "boolean",
            ExpressionType::Integer => "integer",
            ExpressionType::Number => "number",
            ExpressionType::Date => "date",
            ExpressionType::String => "string",
            ExpressionType::Array => "array",
            ExpressionType::Document => "document",
            ExpressionType::Any => "any",
        };
        f.write_str(name)
    }
}

impl From<ScalarValue> for Value {
    fn from(scalar: ScalarValue) -> Self {
        scalar.to_value()
    }
}

impl From<ScalarValue> for Expression {
    fn from(scalar: ScalarValue) -> Self {
        Expression::Literal(scalar)
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        ScalarValue::Boolean(b)
    }
}

impl From<i32> for ScalarValue {
    fn from(i: i32) -> Self {
        ScalarValue::Int32(i)
    }
}

impl From<i64> for ScalarValue {
    fn from(i: i64) -> Self {
        ScalarValue::Int64(i)
    }
}

impl From<f64> for ScalarValue {
    fn from(d: f64) -> Self {
        ScalarValue::Double(d)
    }
}

impl From<Decimal> for ScalarValue {
    fn from(d: Decimal) -> Self {
        ScalarValue::Decimal(d)
    }
}

impl From<DateTime> for ScalarValue {
    fn from(dt: DateTime) -> Self {
        ScalarValue::DateTime(dt)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for ScalarValue {
    fn from(dt: chrono::DateTime<chrono::Utc>) -> Self {
        ScalarValue::DateTime(dt.into())
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        ScalarValue::String(s)
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::String(s.to_string())
    }
}
