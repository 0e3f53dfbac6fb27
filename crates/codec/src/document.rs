//! Document sources that are encoded against a registry on demand.
use crate::error::EncodingError;
use crate::registry::CodecRegistry;
use mql_bson::{Document, Value};
use std::any::{Any, TypeId, type_name};
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Anything that can produce a [`Document`] once a registry is available.
pub trait ToDocument: Send + Sync + Debug {
    fn to_document(&self, registry: &dyn CodecRegistry) -> Result<Document, EncodingError>;
}

/// Already-encoded documents need no lookups.
impl ToDocument for Document {
    fn to_document(&self, _registry: &dyn CodecRegistry) -> Result<Document, EncodingError> {
        Ok(self.clone())
    }
}

/// A host object whose encoding is left to the registry.
#[derive(Clone)]
pub struct HostObject {
    value: Arc<dyn Any + Send + Sync>,
    type_id: TypeId,
    type_name: &'static str,
}

impl HostObject {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn encode(&self, registry: &dyn CodecRegistry) -> Result<Value, EncodingError> {
        let encoder = registry.lookup(self.type_id, self.type_name)?;
        encoder.encode(&*self.value, registry)
    }
}

impl Debug for HostObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostObject<{}>", self.type_name)
    }
}

/// A value inside a [`HostDocument`].
#[derive(Debug, Clone)]
pub enum HostValue {
    /// Already in document-model form.
    Value(Value),
    /// Needs an encoder from the registry.
    Object(HostObject),
    Document(HostDocument),
    Array(Vec<HostValue>),
}

impl HostValue {
    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        HostValue::Object(HostObject::new(value))
    }

    pub fn encode(&self, registry: &dyn CodecRegistry) -> Result<Value, EncodingError> {
        match self {
            HostValue::Value(v) => Ok(v.clone()),
            HostValue::Object(obj) => obj.encode(registry),
            HostValue::Document(doc) => doc.to_document(registry).map(Value::Document),
            HostValue::Array(items) => items
                .iter()
                .map(|item| item.encode(registry))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
        }
    }
}

impl From<Value> for HostValue {
    fn from(v: Value) -> Self {
        HostValue::Value(v)
    }
}

impl From<HostDocument> for HostValue {
    fn from(doc: HostDocument) -> Self {
        HostValue::Document(doc)
    }
}

/// An ordered document mixing plain values and host objects.
#[derive(Debug, Clone, Default)]
pub struct HostDocument {
    entries: Vec<(String, HostValue)>,
}

impl HostDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.append_host(key, HostValue::Value(value.into()))
    }

    pub fn append_object<T: Any + Send + Sync>(self, key: impl Into<String>, value: T) -> Self {
        self.append_host(key, HostValue::object(value))
    }

    pub fn append_host(mut self, key: impl Into<String>, value: impl Into<HostValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ToDocument for HostDocument {
    /// Encodes entries in order. A repeated key keeps its first position and
    /// takes the last value.
    fn to_document(&self, registry: &dyn CodecRegistry) -> Result<Document, EncodingError> {
        log::trace!(
            "Encoding host document with {} entries via {}",
            self.entries.len(),
            registry.name()
        );
        let mut doc = Document::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            doc.insert(key.as_str(), value.encode(registry)?);
        }
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SimpleCodecRegistry;

    #[derive(Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    fn point_registry() -> SimpleCodecRegistry {
        SimpleCodecRegistry::new().register(|p: &Point, _: &dyn CodecRegistry| {
            Ok(Value::Document(Document::new().append("x", p.x).append("y", p.y)))
        })
    }

    #[test]
    fn test_plain_document_needs_no_encoders() {
        let doc = Document::new().append("a", 1);
        let registry = SimpleCodecRegistry::new();
        assert_eq!(doc.to_document(&registry).unwrap(), doc);
    }

    #[test]
    fn test_host_document_encodes_in_order() {
        let host = HostDocument::new()
            .append("name", "origin")
            .append_object("at", Point { x: 0, y: 1 })
            .append_host(
                "history",
                HostValue::Array(vec![
                    HostValue::object(Point { x: 2, y: 3 }),
                    HostValue::Value(Value::Null),
                ]),
            )
            .append_host("meta", HostDocument::new().append("v", 2_i64));

        let doc = host.to_document(&point_registry()).unwrap();
        let expected = Document::new()
            .append("name", "origin")
            .append("at", Document::new().append("x", 0).append("y", 1))
            .append(
                "history",
                vec![
                    Value::Document(Document::new().append("x", 2).append("y", 3)),
                    Value::Null,
                ],
            )
            .append("meta", Document::new().append("v", 2_i64));
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_host_document_missing_encoder() {
        let host = HostDocument::new()
            .append("ok", true)
            .append_object("p", Point { x: 1, y: 1 });
        let err = host.to_document(&SimpleCodecRegistry::new()).unwrap_err();
        assert!(matches!(err, EncodingError::NoEncoderFound { ref type_name } if type_name.ends_with("Point")));
    }

    #[test]
    fn test_nested_missing_encoder_surfaces() {
        let host = HostDocument::new().append_host(
            "inner",
            HostDocument::new().append_object("p", Point { x: 1, y: 1 }),
        );
        assert!(host.to_document(&SimpleCodecRegistry::new()).is_err());
        assert_eq!(host.len(), 1);
    }
}
