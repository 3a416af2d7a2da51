//! Common utilities for the tagtree converter.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - deduplicated, colored diagnostics on stderr

pub mod warning;
