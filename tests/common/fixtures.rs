use mql::codec::{CodecRegistry, EncodingError, SimpleCodecRegistry};
use mql::{Document, Value};

/// A host type with no built-in document form.
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    pub cents: i64,
    pub currency: &'static str,
}

/// A host type whose encoder delegates to the registry for a nested value.
#[derive(Debug, Clone)]
pub struct LineItem {
    pub sku: &'static str,
    pub price: Money,
}

/// Encodes `Money` as `{ amount: <long>, currency: <string> }`.
pub fn structured_registry() -> SimpleCodecRegistry {
    SimpleCodecRegistry::new()
        .register(|m: &Money, _: &dyn CodecRegistry| {
            Ok(Value::Document(
                Document::new()
                    .append("amount", m.cents)
                    .append("currency", m.currency),
            ))
        })
        .register(|item: &LineItem, registry: &dyn CodecRegistry| {
            Ok(Value::Document(
                Document::new()
                    .append("sku", item.sku)
                    .append("price", registry.encode(&item.price)?),
            ))
        })
}

/// Encodes `Money` as a display string such as `"12.50 EUR"`.
pub fn display_registry() -> SimpleCodecRegistry {
    SimpleCodecRegistry::new().register(|m: &Money, _: &dyn CodecRegistry| {
        if m.cents < 0 {
            return Err(EncodingError::encoder("Money", "negative amounts have no display form"));
        }
        Ok(Value::String(format!(
            "{}.{:02} {}",
            m.cents / 100,
            m.cents % 100,
            m.currency
        )))
    })
}

pub fn sample_field_paths() -> Vec<&'static str> {
    vec!["a", "a.b", "title", "plot.fullplot", "x y", "$weird", "ünïcödé.path", "a..b"]
}

pub fn sample_wildcard_paths() -> Vec<&'static str> {
    vec!["*", "a.*", "a.*.c", "*.title", "tags.*.name", "a*b"]
}
