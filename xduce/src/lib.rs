// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # xduce
//!
//! One set of combinators, `map`, `filter`, `chain` and `reduce`, for three kinds of
//! target: synchronous lazy sequences, asynchronous lazy sequences and transformers.
//!
//! ## Overview
//!
//! Every combinator dispatches on what it is given:
//!
//! - a **sequence** ([`Seq`], [`AsyncSeq`]) yields a new lazy sequence that pulls from
//!   the original on demand;
//! - a **transformer** (anything exposing `init`/`step`/`result`, such as [`Reducer`])
//!   yields a new transformer layer with a rewritten `step`.
//!
//! The second form is what makes [`transduce`](iter::transduce) work: a pipeline of
//! layers is applied to a terminal reducer once, and the source is folded through it in
//! a single pass with no intermediate collections.
//!
//! ## Quick Start
//!
//! ```rust
//! use xduce::prelude::*;
//!
//! // Lazy sequences
//! let seq = Seq::of(vec![1, 2, 3]);
//! assert_eq!(seq.map(|x| x + 1).collect_vec(), vec![2, 3, 4]);
//! assert_eq!(seq.filter(|x| x % 2 == 1).collect_vec(), vec![1, 3]);
//! assert_eq!(seq.chain(|x| vec![x; x as usize]).collect_vec(), vec![1, 2, 2, 3, 3, 3]);
//!
//! // Fused pipelines
//! let pipeline = compose!(
//!     mapping(|x: i32| x * 3),
//!     filtering(|x: &i32| x % 2 == 1),
//!     mapping(|x: i32| x - 1),
//!     chaining(|x: i32| vec![x; x as usize]),
//! );
//! let result = Seq::of(vec![1, 2, 3, 4]).transduce(pipeline, flip(append), Vec::new());
//! assert_eq!(result, vec![2, 2, 8, 8, 8, 8, 8, 8, 8, 8]);
//! ```
//!
//! The asynchronous flavour is the same with `.await`:
//!
//! ```rust
//! use xduce::prelude::*;
//!
//! # async fn example() {
//! let numbers = AsyncSeq::of(vec![1, 2, 3]);
//! let total = numbers.transduce(mapping(|x: i32| x * 2), |acc, x: i32| acc + x, 0).await;
//! assert_eq!(total, 12);
//! # }
//! ```

pub use xduce_core::{
    chain, chaining, compose, filter, filtering, func, is_transformer, make_async_step,
    make_step, map, mapping, AsyncFnStep, AsyncSource, AsyncStep, AsyncStepFn, ChainStep,
    ChainTarget, Chaining, Composed, Dispatch, FilterStep, FilterTarget, Filtering, FnStep,
    Identity, MapStep, MapTarget, Mapping, Reducer, Result, Stage, Step, StepFn, Stepped,
    Target, TargetKind, Transformer, XduceError,
};
pub use xduce_exec::{iter, stream, AsyncSeqExt, SeqExt};
pub use xduce_seq::{AsyncSeq, Seq, SeqIter};

/// Prelude module for convenient imports
///
/// The step traits are left out: `Step` and `AsyncStep` share a method name, so
/// import the one you drive with explicitly.
pub mod prelude {
    pub use xduce_core::func::{append, flip, identity};
    pub use xduce_core::{
        chain, chaining, compose, filter, filtering, is_transformer, map, mapping, Reducer,
        Stage, Target, Transformer, XduceError,
    };
    pub use xduce_exec::{AsyncSeqExt, SeqExt};
    pub use xduce_seq::{AsyncSeq, Seq};
}
