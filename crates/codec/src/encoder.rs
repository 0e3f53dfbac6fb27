//! Encoders turn one host type into a [`Value`].
use crate::error::EncodingError;
use crate::registry::CodecRegistry;
use mql_bson::Value;
use std::any::{Any, type_name};
use std::fmt::{self, Debug};
use std::marker::PhantomData;

/// Encodes values of a single host type.
///
/// The registry is passed back in so composite encoders can look up encoders
/// for the types they contain.
pub trait Encoder: Send + Sync + Debug {
    /// The host type this encoder accepts, for diagnostics.
    fn type_name(&self) -> &'static str;

    fn encode(&self, value: &dyn Any, registry: &dyn CodecRegistry)
    -> Result<Value, EncodingError>;
}

/// An [`Encoder`] backed by a closure over `&T`.
pub struct FnEncoder<T, F> {
    encode: F,
    _marker: PhantomData<fn(&T)>,
}

impl<T, F> FnEncoder<T, F>
where
    T: Any,
    F: Fn(&T, &dyn CodecRegistry) -> Result<Value, EncodingError> + Send + Sync,
{
    pub fn new(encode: F) -> Self {
        Self {
            encode,
            _marker: PhantomData,
        }
    }
}

impl<T, F> Debug for FnEncoder<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnEncoder<{}>", type_name::<T>())
    }
}

impl<T, F> Encoder for FnEncoder<T, F>
where
    T: Any,
    F: Fn(&T, &dyn CodecRegistry) -> Result<Value, EncodingError> + Send + Sync,
{
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn encode(
        &self,
        value: &dyn Any,
        registry: &dyn CodecRegistry,
    ) -> Result<Value, EncodingError> {
        let typed = value
            .downcast_ref::<T>()
            .ok_or_else(|| {
                EncodingError::type_mismatch(type_name::<T>(), format!("{:?}", Any::type_id(value)))
            })?;
        (self.encode)(typed, registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SimpleCodecRegistry;
    use std::any::TypeId;

    #[test]
    fn test_fn_encoder_encodes_matching_type() {
        let encoder = FnEncoder::new(|v: &u8, _: &dyn CodecRegistry| Ok(Value::Int32(i32::from(*v))));
        let registry = SimpleCodecRegistry::new();
        assert_eq!(encoder.encode(&7_u8, &registry).unwrap(), Value::Int32(7));
        assert_eq!(encoder.type_name(), "u8");
    }

    #[test]
    fn test_fn_encoder_rejects_other_types() {
        let encoder = FnEncoder::new(|v: &u8, _: &dyn CodecRegistry| Ok(Value::Int32(i32::from(*v))));
        let registry = SimpleCodecRegistry::new();
        let err = encoder.encode(&"not a byte", &registry).unwrap_err();
        assert_eq!(
            err,
            EncodingError::TypeMismatch {
                expected: "u8".to_string(),
                actual: format!("{:?}", TypeId::of::<&str>()),
            }
        );
        assert_eq!(format!("{:?}", encoder), "FnEncoder<u8>");
    }
}
