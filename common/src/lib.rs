//! Common building blocks for the sift crates.
//!
//! This crate holds the error taxonomy and logging setup shared by
//! `sift-core`.

pub mod error;
pub mod logging;

pub use error::{Diagnose, ErrorCategory, ErrorSeverity, Result, SiftError};
pub use logging::{init_test_tracing, parse_level, try_init_tracing};
