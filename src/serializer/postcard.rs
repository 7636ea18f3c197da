//! Compact binary serializer backed by `postcard`.

use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::BoxError;
use crate::serializer::Serializer;

/// Postcard serializer.
///
/// Produces a compact, non-self-describing binary encoding. Like
/// [`Json`](crate::serializer::Json) it implements [`Serializer`] for every
/// `serde`-compatible type and can be shared across marshallers.
///
/// Decoding buffers the complete inbound stream before parsing; every
/// conversion is a single complete value, so this is contract-equivalent to
/// streaming and keeps the implementation simple.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postcard;

impl<T> Serializer<T> for Postcard
where
    T: Serialize + DeserializeOwned,
{
    fn serialize(&self, sink: &mut dyn Write, value: &T) -> Result<(), BoxError> {
        postcard::to_io(value, sink)?;
        Ok(())
    }

    fn deserialize(&self, source: &mut dyn Read) -> Result<T, BoxError> {
        let mut buf = Vec::new();
        source.read_to_end(&mut buf)?;
        postcard::from_bytes(&buf).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        id: u64,
        payload: Vec<u8>,
    }

    #[test]
    fn test_struct_roundtrip() {
        let sample = Sample {
            id: 900,
            payload: vec![0xde, 0xad, 0xbe, 0xef],
        };

        let mut buf = Vec::new();
        Serializer::serialize(&Postcard, &mut buf, &sample).unwrap();
        let back: Sample = Serializer::deserialize(&Postcard, &mut buf.as_slice()).unwrap();

        assert_eq!(back, sample);
    }

    #[test]
    fn test_encoding_is_compact() {
        // A small varint-encoded integer takes a single byte.
        let mut buf = Vec::new();
        Serializer::serialize(&Postcard, &mut buf, &5u32).unwrap();
        assert_eq!(buf, vec![5]);
    }

    #[test]
    fn test_truncated_input_reports_original_error() {
        let sample = Sample {
            id: 1,
            payload: vec![1, 2, 3],
        };
        let mut buf = Vec::new();
        Serializer::serialize(&Postcard, &mut buf, &sample).unwrap();
        buf.truncate(buf.len() - 2);

        let result: Result<Sample, _> =
            Serializer::deserialize(&Postcard, &mut buf.as_slice());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<postcard::Error>().is_some());
    }
}
