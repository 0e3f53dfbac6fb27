//! Codec registries: lookup from host type to [`Encoder`].
use crate::encoder::{Encoder, FnEncoder};
use crate::error::EncodingError;
use mql_bson::Value;
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// A read-only lookup service from host type to encoder.
///
/// Registries are shared across threads while expressions render, so
/// implementations must not mutate during a lookup.
///
/// # Implementations
///
/// - [`SimpleCodecRegistry`]: a fixed map built up front
/// - [`ChainedCodecRegistry`]: consults several registries in order
pub trait CodecRegistry: Send + Sync + Debug {
    /// Finds the encoder for the type identified by `type_id`.
    ///
    /// `type_name` is only used for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::NoEncoderFound`] when no encoder is registered.
    fn lookup(
        &self,
        type_id: TypeId,
        type_name: &'static str,
    ) -> Result<Arc<dyn Encoder>, EncodingError>;

    /// Returns a human-readable name for this registry (for logging/debugging).
    fn name(&self) -> &'static str;
}

impl dyn CodecRegistry + '_ {
    pub fn encoder_for<T: Any>(&self) -> Result<Arc<dyn Encoder>, EncodingError> {
        self.lookup(TypeId::of::<T>(), type_name::<T>())
    }

    /// Looks up the encoder for `T` and encodes `value` with it.
    pub fn encode<T: Any>(&self, value: &T) -> Result<Value, EncodingError> {
        self.encoder_for::<T>()?.encode(value, self)
    }
}

/// A registry holding a fixed set of encoders keyed by type.
#[derive(Default, Clone)]
pub struct SimpleCodecRegistry {
    encoders: HashMap<TypeId, Arc<dyn Encoder>>,
}

impl SimpleCodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a closure as the encoder for `T`, replacing any previous one.
    pub fn register<T, F>(mut self, encode: F) -> Self
    where
        T: Any,
        F: Fn(&T, &dyn CodecRegistry) -> Result<Value, EncodingError> + Send + Sync + 'static,
    {
        self.encoders
            .insert(TypeId::of::<T>(), Arc::new(FnEncoder::<T, F>::new(encode)));
        self
    }

    /// Registers a prebuilt encoder for `T`.
    pub fn insert<T: Any>(&mut self, encoder: Arc<dyn Encoder>) {
        self.encoders.insert(TypeId::of::<T>(), encoder);
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.encoders.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.encoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoders.is_empty()
    }
}

impl Debug for SimpleCodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleCodecRegistry")
            .field(
                "encoders",
                &self.encoders.values().map(|e| e.type_name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl CodecRegistry for SimpleCodecRegistry {
    fn lookup(
        &self,
        type_id: TypeId,
        type_name: &'static str,
    ) -> Result<Arc<dyn Encoder>, EncodingError> {
        match self.encoders.get(&type_id) {
            Some(encoder) => Ok(Arc::clone(encoder)),
            None => {
                log::debug!("No encoder registered for '{}'", type_name);
                Err(EncodingError::no_encoder(type_name))
            }
        }
    }

    fn name(&self) -> &'static str {
        "SimpleCodecRegistry"
    }
}

/// Consults each registry in turn; the first one with an encoder wins.
#[derive(Debug, Default, Clone)]
pub struct ChainedCodecRegistry {
    registries: Vec<Arc<dyn CodecRegistry>>,
}

impl ChainedCodecRegistry {
    pub fn new(registries: Vec<Arc<dyn CodecRegistry>>) -> Self {
        Self { registries }
    }

    pub fn push(mut self, registry: Arc<dyn CodecRegistry>) -> Self {
        self.registries.push(registry);
        self
    }
}

impl CodecRegistry for ChainedCodecRegistry {
    fn lookup(
        &self,
        type_id: TypeId,
        type_name: &'static str,
    ) -> Result<Arc<dyn Encoder>, EncodingError> {
        for registry in &self.registries {
            match registry.lookup(type_id, type_name) {
                Ok(encoder) => return Ok(encoder),
                Err(EncodingError::NoEncoderFound { .. }) => {
                    log::debug!("  → '{}' not in {}, trying next", type_name, registry.name());
                }
                Err(e) => return Err(e),
            }
        }
        Err(EncodingError::no_encoder(type_name))
    }

    fn name(&self) -> &'static str {
        "ChainedCodecRegistry"
    }
}
