// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Terminal drivers for xduce pipelines.
//!
//! [`iter`] holds the synchronous drivers and [`stream`] their asynchronous
//! counterparts. Both expose the same four operations:
//!
//! - `reduce`: a plain fold
//! - `try_reduce`: a fold over fallible items with a fallible reducer
//! - `transduce`: a pipeline applied to a terminal reducer, fused into one pass
//! - `try_transduce`: `transduce` over fallible items
//!
//! The `try_*` forms stop at the first failure and return it exactly as produced.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;

pub mod iter;
pub mod stream;

// Re-export commonly used types
pub use iter::SeqExt;
pub use stream::AsyncSeqExt;
