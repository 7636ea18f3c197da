//! Pluggable Serializer Marshalling
//!
//! This crate sits at the boundary between an RPC framework's method dispatch
//! layer (which only understands byte streams) and application code (which
//! only understands typed values). It converts a typed value into an outbound
//! byte stream on send, and reconstructs a typed value from an inbound byte
//! stream on receive, delegating the actual encoding rules to an injected
//! serialization strategy.
//!
//! # Overview
//!
//! The crate provides three pieces:
//!
//! - [`Marshaller`] - the two-method contract (`encode`/`decode`) that RPC
//!   method-descriptor registries consume
//! - [`SerializerMarshaller`] - the adapter implementing that contract on top
//!   of any [`Serializer`]
//! - [`serializer`] - the pluggable serializer capability trait plus built-in
//!   JSON and postcard implementations
//!
//! Each adapter instance is bound to exactly one logical type for its entire
//! lifetime. The serializer is shared by reference (`Arc`) across as many
//! adapters as needed, since a single serializer serves a whole family of
//! types.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use wiremarshal::{Marshaller, SerializerMarshaller};
//! use wiremarshal::serializer::Json;
//!
//! let marshaller = SerializerMarshaller::<String, _>::new(Arc::new(Json));
//!
//! let bytes = marshaller.encode(&"hello".to_string()).unwrap();
//! let back: String = marshaller.decode(bytes).unwrap();
//! assert_eq!(back, "hello");
//! ```
//!
//! # Error Handling
//!
//! Exactly one externally visible failure kind exists: [`MarshalError`], the
//! internal-error classification surfaced when the serializer fails during
//! encode or decode. The original serializer failure is always attached as
//! the error's source and logged server-side before being surfaced; nothing
//! is retried or swallowed.

pub mod error;
pub mod marshaller;
pub mod serializer;

pub use error::{BoxError, MarshalError, Result};
pub use marshaller::{Marshaller, SerializerMarshaller};
pub use serializer::Serializer;
