//! Parsing and representation of object locations in a bucket/key store.
//!
//! A location is either a composite string (`bucket/prefix/.../name.ext`) or
//! a structured [`BucketAndKey`] pair. Both forms are funneled through one
//! grammar, so they can never diverge in validation behavior. The resulting
//! [`ObjectLocation`] is an immutable value with read-only accessors for the
//! bucket, prefix, key, filename, and derived extension.
//!
//! This crate performs no I/O and talks to no storage backend; it is a pure
//! string-to-structure (and structure-to-string) mapping utility.

pub mod errors;
pub mod models;

pub use errors::InvalidLocation;
pub use models::location::ObjectLocation;
pub use models::source::{BucketAndKey, LocationSource};
