// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Re-iterable lazy sequences for the xduce combinators.
//!
//! [`Seq`] and [`AsyncSeq`] are the sequence branch of `map`, `filter` and `chain`:
//! applying a combinator to one returns a new sequence and leaves the original intact.
//! Both hold a factory rather than an iterator, so every walk is a fresh iteration
//! process and derived sequences can be walked as often as their source.
//!
//! ```rust
//! use xduce_core::map;
//! use xduce_seq::Seq;
//!
//! let seq = map(|x: i32| x + 1, Seq::of(vec![1, 2, 3]));
//! assert_eq!(seq.collect_vec(), vec![2, 3, 4]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;

pub mod async_seq;
pub mod seq;

pub use self::async_seq::AsyncSeq;
pub use self::seq::{Seq, SeqIter};
