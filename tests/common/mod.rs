#![allow(dead_code)]

pub mod fixtures;

use mql::{CodecRegistry, EvaluationContext, Expression, JsonMode, MqlError, Value};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Render an expression and return it as relaxed extended JSON.
pub fn render_json(expr: &Expression, registry: &dyn CodecRegistry) -> Result<serde_json::Value, MqlError> {
    let value = mql::evaluate(expr, &EvaluationContext::new(registry))?;
    Ok(value.to_extended_json(JsonMode::Relaxed))
}

/// Render an expression to a value.
pub fn render(expr: &Expression, registry: &dyn CodecRegistry) -> Result<Value, MqlError> {
    Ok(mql::evaluate(expr, &EvaluationContext::new(registry))?)
}
