//! Renders expression trees into values.
use crate::ast::Expression;
use crate::error::ExpressionError;
use mql_bson::{Document, Value};
use mql_codec::CodecRegistry;

/// Key wrapping every rendered document literal.
pub const LITERAL_KEY: &str = "$literal";

/// The state supplied when an expression is rendered.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
    registry: &'a dyn CodecRegistry,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(registry: &'a dyn CodecRegistry) -> Self {
        Self { registry }
    }

    /// The registry document literals are encoded against.
    pub fn registry(&self) -> &'a dyn CodecRegistry {
        self.registry
    }
}

/// Renders `expr` in a single pass.
///
/// Only document literals consult the registry; an encoder failure there is
/// returned unchanged as [`ExpressionError::Encoding`].
pub fn evaluate(expr: &Expression, e_ctx: &EvaluationContext) -> Result<Value, ExpressionError> {
    log::trace!("Evaluating {} expression", expr.expression_type());
    match expr {
        Expression::Literal(scalar) => Ok(scalar.to_value()),
        Expression::Array(items) => items
            .iter()
            .map(|item| evaluate(item, e_ctx))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Expression::Document(literal) => {
            let doc = literal.source().to_document(e_ctx.registry())?;
            Ok(Value::Document(Document::new().append(LITERAL_KEY, doc)))
        }
        Expression::Null => Ok(Value::Null),
    }
}

impl Expression {
    pub fn to_value(&self, e_ctx: &EvaluationContext) -> Result<Value, ExpressionError> {
        evaluate(self, e_ctx)
    }

    /// Renders `{ name: <this expression> }`, the shape embedded in pipeline
    /// stages such as `$project` or `$addFields`.
    pub fn to_document_field(
        &self,
        name: impl Into<String>,
        e_ctx: &EvaluationContext,
    ) -> Result<Document, ExpressionError> {
        Ok(Document::new().append(name, evaluate(self, e_ctx)?))
    }
}
