// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the xduce iteration protocol
//!
//! Failures raised by user functions or by sources are never wrapped by the
//! combinators: they reach the caller exactly as they were produced. [`XduceError`]
//! covers the conditions the library reports on its own.
//!
//! # Examples
//!
//! ```
//! use xduce_core::{Result, XduceError};
//!
//! fn take_source() -> Result<()> {
//!     Err(XduceError::source_consumed("Seq::once"))
//! }
//!
//! assert!(take_source().is_err());
//! ```

/// Root error type for xduce operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum XduceError {
    /// A single-use source was asked for a second iteration process
    ///
    /// Sequences built with `Seq::once` / `AsyncSeq::once` hand out their
    /// underlying iterator exactly once.
    #[error("Source already consumed: {origin}")]
    SourceConsumed {
        /// Constructor of the single-use sequence
        origin: &'static str,
    },
}

impl XduceError {
    /// Create a source-consumed error for the named constructor
    pub const fn source_consumed(origin: &'static str) -> Self {
        Self::SourceConsumed { origin }
    }
}

/// Specialized Result type for xduce operations
pub type Result<T> = std::result::Result<T, XduceError>;
