//! JSON serializer backed by `serde_json`.

use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::BoxError;
use crate::serializer::Serializer;

/// JSON serializer.
///
/// Implements [`Serializer`] for every type that is `serde`-serializable, so
/// a single shared instance can back marshallers for any number of message
/// types.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use wiremarshal::{Marshaller, SerializerMarshaller};
/// use wiremarshal::serializer::Json;
///
/// let json = Arc::new(Json);
/// let numbers = SerializerMarshaller::<Vec<u32>, _>::new(Arc::clone(&json));
/// let text = SerializerMarshaller::<String, _>::new(json);
///
/// let bytes = numbers.encode(&vec![1, 2, 3]).unwrap();
/// assert_eq!(&bytes[..], &b"[1,2,3]"[..]);
/// # let _ = text;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl<T> Serializer<T> for Json
where
    T: Serialize + DeserializeOwned,
{
    fn serialize(&self, sink: &mut dyn Write, value: &T) -> Result<(), BoxError> {
        serde_json::to_writer(sink, value).map_err(Into::into)
    }

    fn deserialize(&self, source: &mut dyn Read) -> Result<T, BoxError> {
        serde_json::from_reader(source).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Job {
        method: String,
        attempts: u32,
    }

    fn roundtrip<T: Serialize + DeserializeOwned>(value: &T) -> T {
        let mut buf = Vec::new();
        Serializer::serialize(&Json, &mut buf, value).unwrap();
        Serializer::deserialize(&Json, &mut buf.as_slice()).unwrap()
    }

    #[test]
    fn test_struct_roundtrip() {
        let job = Job {
            method: "compute".to_string(),
            attempts: 3,
        };
        assert_eq!(roundtrip(&job), job);
    }

    #[test]
    fn test_output_is_plain_json() {
        let mut buf = Vec::new();
        Serializer::serialize(&Json, &mut buf, &42u32).unwrap();
        assert_eq!(buf, b"42");
    }

    #[test]
    fn test_malformed_input_reports_original_error() {
        let result: Result<Job, _> =
            Serializer::deserialize(&Json, &mut &b"{not json"[..]);
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<serde_json::Error>().is_some());
    }
}
