// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core protocol of xduce.
//!
//! - [`Transformer`], [`Step`], [`AsyncStep`]: the `init`/`step`/`result` protocol
//! - [`Reducer`]: the terminal transformer built from a reducing function
//! - [`Stepped`]: a pipeline layer rewriting the step of the transformer it wraps
//! - [`map`], [`filter`], [`chain`]: combinators dispatching on their target
//! - [`Stage`], [`compose`]: partially applied combinators for reusable pipelines

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod async_source;
pub mod error;
pub mod func;
pub mod reducer;
pub mod stage;
pub mod stepped;
pub mod target;
pub mod transformer;

pub use self::async_source::AsyncSource;
pub use self::error::{Result, XduceError};
pub use self::reducer::Reducer;
pub use self::stage::{
    chaining, compose, filtering, mapping, Chaining, Composed, Filtering, Identity, Mapping,
    Stage,
};
pub use self::stepped::{
    make_async_step, make_step, AsyncFnStep, AsyncStepFn, ChainStep, FilterStep, FnStep,
    MapStep, StepFn, Stepped,
};
pub use self::target::{
    chain, filter, is_transformer, map, ChainTarget, Dispatch, FilterTarget, MapTarget, Target,
    TargetKind,
};
pub use self::transformer::{AsyncStep, Step, Transformer};
