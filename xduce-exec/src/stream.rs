// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Asynchronous drivers.
//!
//! The drivers suspend before every pull from the source and before continuing past
//! every asynchronous step, and nowhere else. Elements are handled strictly one at a
//! time, in source order.

use core::future::Future;

use futures::{pin_mut, StreamExt};
use xduce_core::{AsyncSource, AsyncStep, Reducer, Stage, Transformer};
use xduce_seq::AsyncSeq;

/// Folds an asynchronous `source` into `init` with the synchronous reducer `f`.
///
/// ```rust
/// use xduce_exec::stream::reduce;
/// use xduce_seq::AsyncSeq;
///
/// # async fn example() {
/// let total = reduce(|acc, x| acc + x, 0, AsyncSeq::of(vec![1, 2, 3])).await;
/// assert_eq!(total, 6);
/// # }
/// ```
pub async fn reduce<A, F, S>(mut f: F, init: A, source: S) -> A
where
    S: AsyncSource,
    F: FnMut(A, S::Item) -> A,
{
    let items = source.into_stream();
    pin_mut!(items);

    let mut acc = init;
    while let Some(item) = items.next().await {
        acc = f(acc, item);
    }
    acc
}

/// Folds a fallible asynchronous source with a fallible reducer.
///
/// # Errors
///
/// Returns the first `Err` produced by `source` or by `f`, unchanged. The partial
/// accumulator is dropped and the source is not pulled again.
pub async fn try_reduce<T, A, E, F, S>(mut f: F, init: A, source: S) -> Result<A, E>
where
    S: AsyncSource<Item = Result<T, E>>,
    F: FnMut(A, T) -> Result<A, E>,
{
    let items = source.into_stream();
    pin_mut!(items);

    let mut acc = init;
    while let Some(item) = items.next().await {
        acc = f(acc, item?)?;
    }
    Ok(acc)
}

/// Runs an asynchronous `source` through `pipeline` into `reducer`.
///
/// Every step of the composed transformer is awaited before the next element is
/// pulled, so a `chain` layer folds its whole inner source before the outer source
/// moves on.
///
/// # Examples
///
/// ```rust
/// use xduce_core::{chaining, compose, mapping};
/// use xduce_exec::stream::transduce;
/// use xduce_seq::AsyncSeq;
///
/// # async fn example() {
/// let pipeline = compose!(mapping(|x: i32| x + 1), chaining(|x: i32| vec![x; 2]));
/// let push = |mut acc: Vec<i32>, x: i32| {
///     acc.push(x);
///     acc
/// };
///
/// let result = transduce(pipeline, push, Vec::new(), AsyncSeq::of(vec![1, 2])).await;
/// assert_eq!(result, vec![2, 2, 3, 3]);
/// # }
/// ```
pub async fn transduce<P, A, R, T, S>(
    pipeline: P,
    reducer: R,
    init: A,
    source: S,
) -> <P::Output as Transformer>::Output
where
    S: AsyncSource,
    A: Clone,
    R: FnMut(A, T) -> A,
    P: Stage<Reducer<A, R>>,
    P::Output: AsyncStep<S::Item>,
{
    let mut xf = pipeline.apply(Reducer::new(init, reducer));
    let items = source.into_stream();
    pin_mut!(items);

    let mut steps = 0usize;
    let mut acc = xf.init();
    while let Some(item) = items.next().await {
        acc = xf.step(acc, item).await;
        steps += 1;
    }

    debug!("transduce: folded {} elements", steps);
    xf.result(acc)
}

/// [`transduce`] over a fallible asynchronous source.
///
/// # Errors
///
/// Returns the first `Err` item of `source` unchanged. The pipeline never sees it, and
/// the source is not pulled again.
pub async fn try_transduce<P, A, R, T, U, E, S>(
    pipeline: P,
    reducer: R,
    init: A,
    source: S,
) -> Result<<P::Output as Transformer>::Output, E>
where
    S: AsyncSource<Item = Result<U, E>>,
    A: Clone,
    R: FnMut(A, T) -> A,
    P: Stage<Reducer<A, R>>,
    P::Output: AsyncStep<U>,
{
    let mut xf = pipeline.apply(Reducer::new(init, reducer));
    let items = source.into_stream();
    pin_mut!(items);

    let mut acc = xf.init();
    while let Some(item) = items.next().await {
        acc = xf.step(acc, item?).await;
    }
    Ok(xf.result(acc))
}

/// Method-style drivers for [`AsyncSeq`].
pub trait AsyncSeqExt<T> {
    /// See [`reduce`].
    fn reduce<A, F>(&self, f: F, init: A) -> impl Future<Output = A>
    where
        F: FnMut(A, T) -> A;

    /// See [`transduce`].
    fn transduce<P, A, R, U>(
        &self,
        pipeline: P,
        reducer: R,
        init: A,
    ) -> impl Future<Output = <P::Output as Transformer>::Output>
    where
        A: Clone,
        R: FnMut(A, U) -> A,
        P: Stage<Reducer<A, R>>,
        P::Output: AsyncStep<T>;
}

impl<T: Send + 'static> AsyncSeqExt<T> for AsyncSeq<T> {
    async fn reduce<A, F>(&self, f: F, init: A) -> A
    where
        F: FnMut(A, T) -> A,
    {
        reduce(f, init, self).await
    }

    async fn transduce<P, A, R, U>(
        &self,
        pipeline: P,
        reducer: R,
        init: A,
    ) -> <P::Output as Transformer>::Output
    where
        A: Clone,
        R: FnMut(A, U) -> A,
        P: Stage<Reducer<A, R>>,
        P::Output: AsyncStep<T>,
    {
        transduce(pipeline, reducer, init, self).await
    }
}
