//! Pluggable serializer capability.
//!
//! A [`Serializer`] knows how to convert values of a family of types to and
//! from a specific binary encoding. It is injected into a
//! [`SerializerMarshaller`](crate::SerializerMarshaller) at construction and
//! shared by reference across any number of adapter instances.
//!
//! Two implementations ship with the crate:
//!
//! - [`Json`] - human-readable JSON via `serde_json`
//! - [`Postcard`] - compact binary via `postcard`
//!
//! Both serve every `serde`-compatible type. Custom encodings are a matter of
//! implementing [`Serializer`] for the types they support.

pub mod json;
pub mod postcard;

pub use self::json::Json;
pub use self::postcard::Postcard;

use std::io::{Read, Write};

use crate::error::BoxError;

/// Strategy for converting values of type `T` to and from bytes.
///
/// A single serializer value typically implements `Serializer<T>` for many
/// `T` (see [`Json`]), so one instance serves a whole family of types. The
/// `Send + Sync` bounds make the concurrent-use requirement part of the
/// contract: an adapter is only as thread-safe as its serializer, so the
/// trait demands it up front.
///
/// # Errors
///
/// Implementations report failures as [`BoxError`] so the marshalling layer
/// can attach the original error as a cause without translation. Return the
/// real failure; do not wrap it in a generic replacement.
pub trait Serializer<T>: Send + Sync {
    /// Writes the serialized representation of `value` into `sink`.
    ///
    /// The sink is an in-memory buffer supplied by the caller; implementations
    /// must write the complete representation in this single call.
    fn serialize(&self, sink: &mut dyn Write, value: &T) -> std::result::Result<(), BoxError>;

    /// Reconstructs a value of type `T` from `source`.
    ///
    /// The source is positioned at the start of exactly one previously
    /// serialized value. The consumption state of the source after a failure
    /// is unspecified.
    fn deserialize(&self, source: &mut dyn Read) -> std::result::Result<T, BoxError>;
}
