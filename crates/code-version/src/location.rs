use crate::error::{CodeVersionError, Result};
use serde::{Deserialize, Serialize};

/// Ordered path telling where a blob is attached within a run's logical
/// file tree.
///
/// The mapping index stores locations as a JSON document of the form
/// `{"location": ["seg1", "seg2"]}`; a missing `location` field reads as
/// an empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "location", default)]
    pub segments: Vec<String>,
}

impl Location {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Parse the serialized location document.
    pub fn decode(serialized: &str) -> Result<Self> {
        serde_json::from_str(serialized)
            .map_err(|err| CodeVersionError::MalformedLocation(err.to_string()))
    }

    /// Canonical slash-joined map key.
    ///
    /// One-way: segments containing `/` are not escaped, so the key is
    /// not decodable back into segments. Decoding only ever applies to
    /// the serialized document, never to this key.
    pub fn to_key(&self) -> String {
        self.segments.join("/")
    }
}
