//! Serialization context for rendering expressions.
//!
//! A [`CodecRegistry`] maps host types to [`Encoder`]s. Expressions never hold
//! a registry; one is supplied only when they are rendered, so the same
//! expression can be rendered against registries with different encoding
//! rules.

pub mod document;
pub mod encoder;
pub mod error;
pub mod registry;

pub use document::{HostDocument, HostObject, HostValue, ToDocument};
pub use encoder::{Encoder, FnEncoder};
pub use error::EncodingError;
pub use registry::{ChainedCodecRegistry, CodecRegistry, SimpleCodecRegistry};
