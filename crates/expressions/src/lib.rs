//! Typed, deferred expression literals.
//!
//! Expressions are built from host values without touching any codec
//! registry. Rendering happens later, once, through [`evaluate`] and an
//! [`EvaluationContext`] that carries the registry.
//!
//! # Key Types
//!
//! - [`Expression`]: the expression tree
//! - [`ScalarValue`]: the scalar kinds a literal can hold
//! - [`EvaluationContext`]: the registry an expression is rendered against
//!
//! # Example
//!
//! ```ignore
//! use mql_expressions::{EvaluationContext, evaluate, of_array, of_i32, of_string};
//!
//! let expr = of_array([of_i32(1), of_string("two")]);
//! let e_ctx = EvaluationContext::new(&registry);
//! let value = evaluate(&expr, &e_ctx)?;
//! ```

pub mod ast;
pub mod engine;
pub mod error;
pub mod literals;

// --- Public API ---
pub use ast::{DocumentLiteral, Expression, ExpressionType, ScalarValue};
pub use engine::{EvaluationContext, LITERAL_KEY, evaluate};
pub use error::ExpressionError;
pub use literals::*;

#[cfg(test)]
mod tests {
    use super::*;
    use mql_bson::{Decimal, Document, Value};
    use mql_codec::{CodecRegistry, HostDocument, SimpleCodecRegistry};
    use serde_json::json;

    #[derive(Debug)]
    struct Celsius(f64);

    fn to_json(value: &Value) -> serde_json::Value {
        value.to_extended_json(mql_bson::JsonMode::Relaxed)
    }

    #[test]
    fn test_nested_arrays_preserve_order() {
        let registry = SimpleCodecRegistry::new();
        let e_ctx = EvaluationContext::new(&registry);
        let expr = of_array([
            of_string("a"),
            of_integer_array([1, 2]),
            of_array([of_null(), of_bool(false)]),
        ]);
        let value = evaluate(&expr, &e_ctx).unwrap();
        assert_eq!(to_json(&value), json!(["a", [1, 2], [null, false]]));
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let registry = SimpleCodecRegistry::new();
        let e_ctx = EvaluationContext::new(&registry);
        let expr = of_array([of_decimal(Decimal::new(250, 2)), of_document(Document::new().append("k", 1))]);
        let first = evaluate(&expr, &e_ctx).unwrap();
        let second = evaluate(&expr, &e_ctx).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_same_expression_under_different_registries() {
        let as_number = SimpleCodecRegistry::new()
            .register(|c: &Celsius, _: &dyn CodecRegistry| Ok(Value::Double(c.0)));
        let as_text = SimpleCodecRegistry::new()
            .register(|c: &Celsius, _: &dyn CodecRegistry| Ok(Value::String(format!("{}°C", c.0))));

        let expr = of_document(HostDocument::new().append_object("temp", Celsius(20.5)));

        let numeric = evaluate(&expr, &EvaluationContext::new(&as_number)).unwrap();
        let textual = evaluate(&expr, &EvaluationContext::new(&as_text)).unwrap();

        assert_eq!(to_json(&numeric), json!({ "$literal": { "temp": 20.5 } }));
        assert_eq!(to_json(&textual), json!({ "$literal": { "temp": "20.5°C" } }));
    }

    #[test]
    fn test_operator_shaped_document_stays_data() {
        let registry = SimpleCodecRegistry::new();
        let e_ctx = EvaluationContext::new(&registry);
        let doc = Document::new().append("$add", vec![Value::Int32(1), Value::Int32(2)]);
        let value = evaluate(&of_document(doc), &e_ctx).unwrap();
        assert_eq!(to_json(&value), json!({ "$literal": { "$add": [1, 2] } }));
    }
}
