// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synchronous drivers.
//!
//! Nothing here suspends: every function walks its source to exhaustion on the calling
//! thread and returns the final value.

use xduce_core::{Reducer, Stage, Step, Transformer};
use xduce_seq::Seq;

/// Folds `source` into `init` with `f`.
///
/// ```rust
/// use xduce_exec::iter::reduce;
///
/// assert_eq!(reduce(|acc, x| acc + x, 0, vec![1, 2, 3]), 6);
/// ```
pub fn reduce<T, A, F, I>(f: F, init: A, source: I) -> A
where
    I: IntoIterator<Item = T>,
    F: FnMut(A, T) -> A,
{
    source.into_iter().fold(init, f)
}

/// Folds a fallible source with a fallible reducer.
///
/// # Errors
///
/// Returns the first `Err` produced by `source` or by `f`, unchanged. The partial
/// accumulator is dropped and the rest of the source is never pulled.
pub fn try_reduce<T, A, E, F, I>(mut f: F, init: A, source: I) -> Result<A, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    F: FnMut(A, T) -> Result<A, E>,
{
    let mut acc = init;
    for item in source {
        acc = f(acc, item?)?;
    }
    Ok(acc)
}

/// Runs `source` through `pipeline` into `reducer`, fused into a single pass.
///
/// The pipeline is applied to a fresh [`Reducer`] seeded with `init`; every element of
/// `source` goes through the composed step, and the composed `result` finalises the
/// accumulator. No intermediate collection is built.
///
/// # Examples
///
/// ```rust
/// use xduce_core::{compose, filtering, mapping};
/// use xduce_exec::iter::transduce;
///
/// let pipeline = compose!(mapping(|x: i32| x * 3), filtering(|x: &i32| x % 2 == 1));
/// let total = transduce(pipeline, |acc: i32, x: i32| acc + x, 0, vec![1, 2, 3, 4]);
///
/// assert_eq!(total, 12);
/// ```
pub fn transduce<P, A, R, T, I>(
    pipeline: P,
    reducer: R,
    init: A,
    source: I,
) -> <P::Output as Transformer>::Output
where
    I: IntoIterator,
    A: Clone,
    R: FnMut(A, T) -> A,
    P: Stage<Reducer<A, R>>,
    P::Output: Step<I::Item>,
{
    let mut xf = pipeline.apply(Reducer::new(init, reducer));
    let seed = xf.init();

    let mut steps = 0usize;
    let acc = source.into_iter().fold(seed, |acc, x| {
        steps += 1;
        xf.step(acc, x)
    });

    debug!("transduce: folded {} elements", steps);
    xf.result(acc)
}

/// [`transduce`] over a fallible source.
///
/// # Errors
///
/// Returns the first `Err` item of `source` unchanged. The pipeline never sees it, and
/// nothing after it is pulled.
pub fn try_transduce<P, A, R, T, U, E, I>(
    pipeline: P,
    reducer: R,
    init: A,
    source: I,
) -> Result<<P::Output as Transformer>::Output, E>
where
    I: IntoIterator<Item = Result<U, E>>,
    A: Clone,
    R: FnMut(A, T) -> A,
    P: Stage<Reducer<A, R>>,
    P::Output: Step<U>,
{
    let mut xf = pipeline.apply(Reducer::new(init, reducer));
    let mut acc = xf.init();

    for item in source {
        acc = xf.step(acc, item?);
    }
    Ok(xf.result(acc))
}

/// Method-style drivers for [`Seq`].
///
/// Each call runs one fresh iteration process of the sequence.
pub trait SeqExt<T> {
    /// See [`reduce`].
    fn reduce<A, F>(&self, f: F, init: A) -> A
    where
        F: FnMut(A, T) -> A;

    /// See [`transduce`].
    fn transduce<P, A, R, U>(
        &self,
        pipeline: P,
        reducer: R,
        init: A,
    ) -> <P::Output as Transformer>::Output
    where
        A: Clone,
        R: FnMut(A, U) -> A,
        P: Stage<Reducer<A, R>>,
        P::Output: Step<T>;
}

impl<T: 'static> SeqExt<T> for Seq<T> {
    fn reduce<A, F>(&self, f: F, init: A) -> A
    where
        F: FnMut(A, T) -> A,
    {
        reduce(f, init, self)
    }

    fn transduce<P, A, R, U>(
        &self,
        pipeline: P,
        reducer: R,
        init: A,
    ) -> <P::Output as Transformer>::Output
    where
        A: Clone,
        R: FnMut(A, U) -> A,
        P: Stage<Reducer<A, R>>,
        P::Output: Step<T>,
    {
        transduce(pipeline, reducer, init, self)
    }
}
