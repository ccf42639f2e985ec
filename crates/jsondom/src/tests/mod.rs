//! Crate-level test suite.
//!
//! Unit tests for individual stores live next to their modules; this tree
//! covers the parser surface, the structural operations, and the round-trip
//! properties.

mod dom;
mod property_roundtrip;
