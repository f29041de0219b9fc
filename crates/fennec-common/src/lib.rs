//! Common utilities for the Fennec crates.
//!
//! This crate provides shared infrastructure used by every Fennec component:
//! - **Warning System** - colored, deduplicated terminal output for inputs
//!   that are accepted but probably not what the caller meant

pub mod warning;
