//! Typed value <-> byte stream marshalling.
//!
//! [`SerializerMarshaller`] is the adapter an RPC method-descriptor registry
//! instantiates once per message type. It owns no call-to-call state: every
//! encode allocates a fresh buffer, every decode adapts the inbound bytes to
//! the serializer's reader abstraction, and all conversion rules live in the
//! injected [`Serializer`].

use std::marker::PhantomData;
use std::sync::Arc;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{MarshalError, Result};
use crate::serializer::Serializer;

/// Initial capacity of the outbound encode buffer.
///
/// Sized so typical small messages serialize without reallocation; the buffer
/// grows as needed, so this is a tuning hint, not a limit.
const INITIAL_CAPACITY: usize = 512;

/// Bidirectional conversion between a typed value and a byte stream.
///
/// This is the two-method contract the RPC dispatch layer consumes when
/// registering method descriptors. The trait is object-safe, so registries
/// can hold `Box<dyn Marshaller<T>>` without knowing the serializer behind
/// it.
///
/// # Contract
///
/// For any value `v` the serializer can encode, `decode(encode(v)?)?` yields
/// a value equal-in-contract to `v` on any equivalently configured
/// marshaller using the same serializer implementation.
pub trait Marshaller<T>: Send + Sync {
    /// Encodes `value` into a read-only byte stream.
    ///
    /// The returned [`Bytes`] contains exactly the bytes the serializer
    /// wrote, never the buffer's allocated capacity, and can be handed to
    /// the transport without copying.
    ///
    /// # Errors
    ///
    /// Any serializer failure is surfaced as [`MarshalError`] with the
    /// original failure attached as the cause. No partial stream is returned.
    fn encode(&self, value: &T) -> Result<Bytes>;

    /// Decodes one previously encoded value from `stream`.
    ///
    /// The stream must be positioned at the start of exactly one encoded
    /// value of the bound type. Whether the bytes actually encode that type
    /// is the serializer's concern; the marshaller does not second-guess it.
    ///
    /// # Errors
    ///
    /// Any serializer failure (malformed bytes, type mismatch, truncation)
    /// is surfaced as [`MarshalError`] with the original failure attached as
    /// the cause.
    fn decode(&self, stream: Bytes) -> Result<T>;
}

/// [`Marshaller`] implementation that delegates to an injected
/// [`Serializer`].
///
/// One instance is bound to exactly one logical type `T` for its entire
/// lifetime; the type parameter is the type descriptor, pinned at
/// construction. The serializer is held behind an [`Arc`] so a single
/// serializer instance can back marshallers for many message types.
///
/// The adapter is stateless beyond its two fields and performs no mutation
/// of shared state, so it is safe to reuse across concurrent calls; the
/// `Send + Sync` bound on [`Serializer`] carries the thread-safety
/// requirement for the injected strategy.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use wiremarshal::{Marshaller, SerializerMarshaller};
/// use wiremarshal::serializer::Postcard;
///
/// let marshaller = SerializerMarshaller::<u64, _>::new(Arc::new(Postcard));
///
/// let bytes = marshaller.encode(&17u64).unwrap();
/// assert_eq!(marshaller.decode(bytes).unwrap(), 17);
/// ```
pub struct SerializerMarshaller<T, S> {
    /// The injected serialization strategy
    serializer: Arc<S>,
    /// Binds the adapter to its one logical type without affecting
    /// auto-traits or variance
    _bound: PhantomData<fn(T) -> T>,
}

impl<T, S> SerializerMarshaller<T, S> {
    /// Creates a marshaller for type `T` backed by `serializer`.
    ///
    /// No validation happens here; an incompatible serializer surfaces
    /// errors lazily, on first use.
    pub fn new(serializer: Arc<S>) -> Self {
        SerializerMarshaller {
            serializer,
            _bound: PhantomData,
        }
    }
}

impl<T, S> Clone for SerializerMarshaller<T, S> {
    fn clone(&self) -> Self {
        SerializerMarshaller {
            serializer: Arc::clone(&self.serializer),
            _bound: PhantomData,
        }
    }
}

impl<T, S> Marshaller<T> for SerializerMarshaller<T, S>
where
    S: Serializer<T>,
{
    fn encode(&self, value: &T) -> Result<Bytes> {
        // Fresh buffer per call; dropped on the error path, frozen to the
        // exact written length on success.
        let mut writer = BytesMut::with_capacity(INITIAL_CAPACITY).writer();

        match self.serializer.serialize(&mut writer, value) {
            Ok(()) => Ok(writer.into_inner().freeze()),
            Err(cause) => {
                tracing::error!("Unexpected error during serialization: {}", cause);
                Err(MarshalError::internal(cause))
            }
        }
    }

    fn decode(&self, stream: Bytes) -> Result<T> {
        let mut reader = stream.reader();

        match self.serializer.deserialize(&mut reader) {
            Ok(value) => Ok(value),
            Err(cause) => {
                tracing::error!("Unexpected error during deserialization: {}", cause);
                Err(MarshalError::internal(cause))
            }
        }
    }
}
