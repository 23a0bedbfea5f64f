//! Typed document wrapper for values held in the transactional store.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// A schemaless document as stored by a [`TransactionalStore`].
///
/// Documents are JSON values; entities are encoded and decoded through
/// serde so the store itself stays ignorant of domain types.
///
/// [`TransactionalStore`]: crate::traits::store::TransactionalStore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(pub serde_json::Value);

impl Document {
    /// Encode a serializable entity into a document.
    pub fn encode<T: Serialize>(value: &T) -> AppResult<Self> {
        Ok(Self(serde_json::to_value(value)?))
    }

    /// Decode the document into a concrete entity type.
    pub fn decode<T: DeserializeOwned>(&self) -> AppResult<T> {
        Ok(serde_json::from_value(self.0.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_encode_decode() {
        let sample = Sample {
            name: "north".to_string(),
            count: 3,
        };
        let doc = Document::encode(&sample).expect("encode");
        let back: Sample = doc.decode().expect("decode");
        assert_eq!(back, sample);
    }

    #[test]
    fn test_decode_wrong_shape_fails() {
        let doc = Document(serde_json::json!({ "name": "north" }));
        assert!(doc.decode::<Sample>().is_err());
    }
}
