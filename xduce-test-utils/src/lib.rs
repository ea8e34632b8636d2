// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the xduce workspace.
//!
//! This crate is for development and testing only.
//!
//! - [`fixtures`]: the sample data and element functions shared by the scenario tests
//! - [`CallCounter`]: wraps a function and counts its invocations, to check laziness
//! - [`ErrorInjectingStream`] and [`failing_items`]: sources that fail at a given position
//! - [`TestChannel`]: a tokio channel whose receiving end is a single-use [`AsyncSeq`]
//! - [`delayed`]: asynchronous sequences that really suspend between elements
//!
//! # Examples
//!
//! ```rust
//! use xduce_test_utils::fixtures::{numbers, repeat};
//! use xduce_seq::Seq;
//!
//! let seq = Seq::of(numbers()).chain(repeat);
//! assert_eq!(seq.collect_vec(), vec![1, 2, 2, 3, 3, 3, 4, 4, 4, 4]);
//! ```
//!
//! [`AsyncSeq`]: xduce_seq::AsyncSeq

pub mod counting;
pub mod delayed;
pub mod error_injection;
pub mod fixtures;
pub mod test_channel;

pub use self::counting::CallCounter;
pub use self::delayed::{delayed, delayed_stream};
pub use self::error_injection::{failing_items, ErrorInjectingStream, TestError};
pub use self::test_channel::TestChannel;
