// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reusable pipeline stages.
//!
//! A stage is a combinator with every argument but the target already supplied.
//! Stages compose right-to-left, like function composition: `compose(a, b)` applied to
//! `x` is `a(b(x))`. Applied to a transformer, that makes `a` the outermost layer, so
//! it is the first to see each element. Applied to a sequence, `b` wraps the source
//! first, so elements flow through `b` before `a`.
//!
//! Any `FnOnce(T) -> U` closure is a stage as well, which keeps ad-hoc pipelines such
//! as `|xf| map(f, filter(p, xf))` interchangeable with composed ones.
//!
//! # Examples
//!
//! ```rust
//! use xduce_core::{compose, filtering, mapping, Reducer, Stage, Step, Transformer};
//!
//! let pipeline = compose!(mapping(|x: i32| x + 1), filtering(|x: &i32| x % 2 == 0));
//! let mut xf = pipeline.apply(Reducer::new(0, |acc: i32, x: i32| acc + x));
//!
//! let acc = xf.init();
//! let acc = xf.step(acc, 1); // 2 passes the filter
//! let acc = xf.step(acc, 2); // 3 does not
//! assert_eq!(xf.result(acc), 2);
//! ```

use crate::target::{ChainTarget, FilterTarget, MapTarget};

/// A pipeline stage applicable to targets of type `T`.
pub trait Stage<T> {
    /// The target produced by this stage.
    type Output;

    /// Applies the stage to `target`.
    fn apply(self, target: T) -> Self::Output;
}

impl<T, O, C> Stage<T> for C
where
    C: FnOnce(T) -> O,
{
    type Output = O;

    fn apply(self, target: T) -> O {
        self(target)
    }
}

/// `map` with its function supplied, see [`mapping`].
#[derive(Debug, Clone)]
pub struct Mapping<F>(F);

/// `filter` with its predicate supplied, see [`filtering`].
#[derive(Debug, Clone)]
pub struct Filtering<P>(P);

/// `chain` with its function supplied, see [`chaining`].
#[derive(Debug, Clone)]
pub struct Chaining<F>(F);

/// Two stages applied right-to-left, see [`compose`].
#[derive(Debug, Clone)]
pub struct Composed<A, B> {
    outer: A,
    inner: B,
}

/// The empty pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

/// Partially applies [`map`](crate::map).
pub const fn mapping<F>(f: F) -> Mapping<F> {
    Mapping(f)
}

/// Partially applies [`filter`](crate::filter).
pub const fn filtering<P>(pred: P) -> Filtering<P> {
    Filtering(pred)
}

/// Partially applies [`chain`](crate::chain).
pub const fn chaining<F>(f: F) -> Chaining<F> {
    Chaining(f)
}

/// Composes two stages: `inner` is applied first, then `outer`.
pub const fn compose<A, B>(outer: A, inner: B) -> Composed<A, B> {
    Composed { outer, inner }
}

impl<T, F> Stage<T> for Mapping<F>
where
    T: MapTarget<F>,
{
    type Output = T::Output;

    fn apply(self, target: T) -> T::Output {
        target.map_target(self.0)
    }
}

impl<T, P> Stage<T> for Filtering<P>
where
    T: FilterTarget<P>,
{
    type Output = T::Output;

    fn apply(self, target: T) -> T::Output {
        target.filter_target(self.0)
    }
}

impl<T, F> Stage<T> for Chaining<F>
where
    T: ChainTarget<F>,
{
    type Output = T::Output;

    fn apply(self, target: T) -> T::Output {
        target.chain_target(self.0)
    }
}

impl<T, A, B> Stage<T> for Composed<A, B>
where
    B: Stage<T>,
    A: Stage<B::Output>,
{
    type Output = A::Output;

    fn apply(self, target: T) -> A::Output {
        self.outer.apply(self.inner.apply(target))
    }
}

impl<T> Stage<T> for Identity {
    type Output = T;

    fn apply(self, target: T) -> T {
        target
    }
}

/// Composes any number of stages right-to-left.
///
/// `compose!(a, b, c)` is `compose(a, compose(b, c))`.
#[macro_export]
macro_rules! compose {
    ($stage:expr $(,)?) => {
        $stage
    };
    ($outer:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose($outer, $crate::compose!($($rest),+))
    };
}
