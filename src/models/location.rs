//! Represents the parsed location of an object stored under a bucket/key
//! scheme.

use crate::errors::InvalidLocation;
use crate::models::source::{BucketAndKey, LocationSource};
use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::trace;

/// Anchored grammar for a composite location string: a bucket segment, zero
/// or more folder segments, then a filename whose optional extension must be
/// non-empty and alphanumeric.
static LOCATION_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^/]+?)((?:/[^/]+)*)(/[^/.]+(\.[A-Za-z0-9]+)?)$")
        .expect("location grammar compiles")
});

/// The location of an object, split into its bucket and key components.
///
/// Built only through [`ObjectLocation::parse`] or
/// [`ObjectLocation::try_parse`]; once built, its fields never change. The
/// canonical string rendering is `{bucket}/{key}`, and any successfully
/// parsed location round-trips through that rendering.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectLocation {
    bucket: String,
    prefix: Option<String>,
    key: String,
    filename: String,
}

impl ObjectLocation {
    /// Parse a location, failing with [`InvalidLocation`] when the input does
    /// not match the `bucket/key` grammar.
    ///
    /// Accepts a composite string, a [`BucketAndKey`] pair, or a
    /// `(bucket, key)` tuple; a pair is canonicalized to `{bucket}/{key}`
    /// before matching.
    pub fn parse(source: impl Into<LocationSource>) -> Result<Self, InvalidLocation> {
        let composite = source.into().canonicalize();
        Self::from_composite(&composite).ok_or_else(|| InvalidLocation::new(composite))
    }

    /// Attempt to parse a location. Never fails: any grammar mismatch yields
    /// `None`, with no further detail on the reason.
    pub fn try_parse(source: impl Into<LocationSource>) -> Option<Self> {
        let composite = source.into().canonicalize();
        Self::from_composite(&composite)
    }

    fn from_composite(composite: &str) -> Option<Self> {
        let Some(captures) = LOCATION_GRAMMAR.captures(composite) else {
            trace!("rejected object location `{}`", composite);
            return None;
        };

        let bucket = captures[1].to_string();
        // Folder segments arrive with a leading slash; strip it.
        let folders = &captures[2];
        let prefix = (!folders.is_empty()).then(|| folders[1..].to_string());
        let filename = captures[3][1..].to_string();
        let key = match &prefix {
            Some(prefix) => format!("{}/{}", prefix, filename),
            None => filename.clone(),
        };

        Some(Self {
            bucket,
            prefix,
            key,
            filename,
        })
    }

    /// The portion of the location representing the bucket.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The folder-like portion of the key. `None` when the location consists
    /// of only a bucket name and a filename (e.g. `bucket/file.pdf`).
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The full object key within the bucket.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The name of the object, extension included. Equivalent to the key
    /// with the prefix removed.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The file extension of the object, if it has one. Includes the dot.
    pub fn extension(&self) -> Option<&str> {
        let dot = self.filename.rfind('.')?;
        Some(&self.filename[dot..])
    }

    /// Recover the structured pair form of this location.
    pub fn into_bucket_and_key(self) -> BucketAndKey {
        BucketAndKey {
            bucket: self.bucket,
            key: self.key,
        }
    }
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}

impl FromStr for ObjectLocation {
    type Err = InvalidLocation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ObjectLocation> for String {
    fn from(location: ObjectLocation) -> Self {
        location.to_string()
    }
}

impl From<ObjectLocation> for BucketAndKey {
    fn from(location: ObjectLocation) -> Self {
        location.into_bucket_and_key()
    }
}

impl Serialize for ObjectLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObjectLocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let composite = String::deserialize(deserializer)?;
        Self::parse(composite.as_str()).map_err(D::Error::custom)
    }
}
