//! Constructors lifting host values into expressions.
//!
//! Each constructor fixes the [`ExpressionType`](crate::ExpressionType) of the
//! node it returns. Nothing is encoded here; see [`evaluate`](crate::evaluate).
use crate::ast::{DocumentLiteral, Expression, ScalarValue};
use crate::error::ExpressionError;
use chrono::Utc;
use mql_bson::Decimal;
use mql_codec::ToDocument;

/// Returns a literal expression for any scalar.
pub fn of(value: impl Into<ScalarValue>) -> Expression {
    Expression::Literal(value.into())
}

pub fn of_bool(value: bool) -> Expression {
    of(value)
}

pub fn of_i32(value: i32) -> Expression {
    of(value)
}

pub fn of_i64(value: i64) -> Expression {
    of(value)
}

pub fn of_f64(value: f64) -> Expression {
    of(value)
}

pub fn of_decimal(value: Decimal) -> Expression {
    of(value)
}

/// Date literal with millisecond precision; sub-millisecond parts are dropped.
pub fn of_date(value: chrono::DateTime<Utc>) -> Expression {
    of(value)
}

pub fn of_string(value: impl Into<String>) -> Expression {
    of(ScalarValue::String(value.into()))
}

fn lift<T: Into<ScalarValue>>(items: impl IntoIterator<Item = T>) -> Expression {
    Expression::Array(items.into_iter().map(of).collect())
}

pub fn of_boolean_array(items: impl IntoIterator<Item = bool>) -> Expression {
    lift(items)
}

pub fn of_integer_array(items: impl IntoIterator<Item = i32>) -> Expression {
    lift(items)
}

pub fn of_long_array(items: impl IntoIterator<Item = i64>) -> Expression {
    lift(items)
}

pub fn of_number_array(items: impl IntoIterator<Item = f64>) -> Expression {
    lift(items)
}

pub fn of_decimal_array(items: impl IntoIterator<Item = Decimal>) -> Expression {
    lift(items)
}

pub fn of_date_array(items: impl IntoIterator<Item = chrono::DateTime<Utc>>) -> Expression {
    lift(items)
}

pub fn of_string_array<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Expression {
    lift(items.into_iter().map(|s| ScalarValue::String(s.into())))
}

/// Array of nullable host values.
///
/// # Errors
///
/// Fails with [`ExpressionError::InvalidArgument`] if any element is `None`.
pub fn try_of_array<T, I>(items: I) -> Result<Expression, ExpressionError>
where
    T: Into<ScalarValue>,
    I: IntoIterator<Item = Option<T>>,
{
    items
        .into_iter()
        .map(|item| {
            item.map(of).ok_or_else(|| {
                ExpressionError::invalid_argument("elements of array must not be null")
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Expression::Array)
}

/// Array of existing expressions, kept as they are.
pub fn of_array(items: impl IntoIterator<Item = Expression>) -> Expression {
    Expression::Array(items.into_iter().collect())
}

/// Document literal. Always rendered under `$literal`, so an empty document
/// or one shaped like an operator is still read as data.
pub fn of_document(document: impl ToDocument + 'static) -> Expression {
    Expression::Document(DocumentLiteral::new(document))
}

pub fn of_null() -> Expression {
    Expression::Null
}
