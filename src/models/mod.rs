//! Core data models for object locations.
//!
//! [`location::ObjectLocation`] is the parsed, immutable value;
//! [`source::LocationSource`] and [`source::BucketAndKey`] are the input
//! forms accepted by the parser.

pub mod location;
pub mod source;
