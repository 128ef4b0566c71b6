//! Input forms accepted by the location parser.

use serde::{Deserialize, Serialize};

/// A structured bucket/key pair addressing a single object.
///
/// The alternative to passing the location as one composite string. Carries
/// no validation of its own; it is validated when handed to
/// [`ObjectLocation::parse`](crate::ObjectLocation::parse) or
/// [`ObjectLocation::try_parse`](crate::ObjectLocation::try_parse).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BucketAndKey {
    /// Bucket holding the object.
    pub bucket: String,

    /// Full object key within the bucket (prefix + filename).
    pub key: String,
}

impl BucketAndKey {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

/// Either input form the parser accepts.
///
/// Both variants are canonicalized to one composite string before matching,
/// so a pair and its string rendering always validate identically.
#[derive(Clone, Debug)]
pub enum LocationSource {
    /// A composite `bucket/key` string.
    Text(String),
    /// A structured bucket/key pair.
    Parts(BucketAndKey),
}

impl LocationSource {
    /// Canonical composite form: pass-through for text, `{bucket}/{key}`
    /// for a pair.
    pub(crate) fn canonicalize(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Parts(parts) => format!("{}/{}", parts.bucket, parts.key),
        }
    }
}

impl From<&str> for LocationSource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for LocationSource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<BucketAndKey> for LocationSource {
    fn from(parts: BucketAndKey) -> Self {
        Self::Parts(parts)
    }
}

impl From<(&str, &str)> for LocationSource {
    fn from((bucket, key): (&str, &str)) -> Self {
        Self::Parts(BucketAndKey::new(bucket, key))
    }
}
