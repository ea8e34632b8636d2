// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use core::future::Future;
use std::sync::Arc;

use futures::future::ready;
use futures::stream::{self, BoxStream};
use futures::{Stream, StreamExt};
use parking_lot::Mutex;
use xduce_core::{
    AsyncSource, ChainTarget, Dispatch, FilterTarget, MapTarget, Result, TargetKind, XduceError,
};

use crate::seq::{Seq, SeqIter};

type Factory<T> = dyn Fn() -> Result<BoxStream<'static, T>> + Send + Sync;

/// A re-iterable asynchronous lazy sequence.
///
/// The asynchronous counterpart of [`Seq`]: a factory of fresh streams. Each pull from
/// a stream may suspend; nothing else does.
///
/// # Examples
///
/// ```rust
/// use xduce_seq::AsyncSeq;
///
/// # async fn example() {
/// let numbers = AsyncSeq::of(vec![1, 2, 3]);
/// let odd = numbers.filter(|x| x % 2 == 1);
///
/// assert_eq!(odd.collect_vec().await, vec![1, 3]);
/// assert_eq!(odd.collect_vec().await, vec![1, 3]);
/// # }
/// ```
pub struct AsyncSeq<T> {
    factory: Arc<Factory<T>>,
}

impl<T> Clone for AsyncSeq<T> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<T> fmt::Debug for AsyncSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncSeq").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> AsyncSeq<T> {
    /// Builds a sequence from a factory of streams.
    ///
    /// `factory` is invoked once per iteration process.
    pub fn new<F, S>(factory: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
        S: Stream<Item = T> + Send + 'static,
    {
        Self::from_try_factory(move || Ok(factory().boxed()))
    }

    fn from_try_factory<F>(factory: F) -> Self
    where
        F: Fn() -> Result<BoxStream<'static, T>> + Send + Sync + 'static,
    {
        Self {
            factory: Arc::new(factory),
        }
    }

    /// Builds a re-iterable sequence over a clonable collection.
    pub fn of<C>(items: C) -> Self
    where
        C: IntoIterator<Item = T> + Clone + Send + Sync + 'static,
        C::IntoIter: Send + 'static,
    {
        Self::new(move || stream::iter(items.clone()))
    }

    /// Lifts a synchronous sequence; every element is ready on the first poll.
    ///
    /// Single-use exhaustion of `seq` carries over.
    pub fn from_seq(seq: Seq<T>) -> Self {
        Self::from_try_factory(move || {
            let items: SeqIter<T> = seq.try_iter()?;
            Ok(stream::iter(items).boxed())
        })
    }

    /// Builds a sequence whose elements are pending computations.
    ///
    /// Each future is awaited, in order, when its element is pulled.
    pub fn from_futures<C, Fut>(items: C) -> Self
    where
        C: IntoIterator<Item = Fut> + Clone + Send + Sync + 'static,
        C::IntoIter: Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::new(move || stream::iter(items.clone()).then(|pending| pending))
    }

    /// A sequence with no elements.
    pub fn empty() -> Self {
        Self::new(stream::empty)
    }

    /// A sequence yielding `value` exactly `count` times.
    pub fn repeat(value: T, count: usize) -> Self
    where
        T: Clone + Sync,
    {
        Self::new(move || stream::repeat(value.clone()).take(count))
    }

    /// Wraps a single-use stream, such as a channel receiver.
    ///
    /// The first iteration process takes the stream. Later ones fail with
    /// [`XduceError::SourceConsumed`] from [`try_stream`](AsyncSeq::try_stream) and are
    /// empty from [`stream`](AsyncSeq::stream).
    pub fn once<S>(source: S) -> Self
    where
        S: Stream<Item = T> + Send + 'static,
    {
        let slot = Mutex::new(Some(source.boxed()));
        Self::from_try_factory(move || {
            slot.lock()
                .take()
                .ok_or_else(|| XduceError::source_consumed("AsyncSeq::once"))
        })
    }

    /// Starts a fresh iteration process.
    ///
    /// # Errors
    ///
    /// Returns [`XduceError::SourceConsumed`] when the sequence (or the sequence it was
    /// derived from) wraps a single-use source that has already been iterated.
    pub fn try_stream(&self) -> Result<BoxStream<'static, T>> {
        (self.factory)()
    }

    /// Starts a fresh iteration process, empty if a single-use source is exhausted.
    pub fn stream(&self) -> BoxStream<'static, T> {
        self.try_stream().unwrap_or_else(|e| {
            warn!("{e}; iterating as empty");
            stream::empty().boxed()
        })
    }

    /// Runs one iteration process to completion.
    pub async fn collect_vec(&self) -> Vec<T> {
        self.stream().collect().await
    }

    /// See [`map`](xduce_core::map).
    pub fn map<U, F>(&self, f: F) -> AsyncSeq<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: Send + 'static,
    {
        self.clone().map_target(f)
    }

    /// See [`filter`](xduce_core::filter).
    pub fn filter<P>(&self, pred: P) -> AsyncSeq<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.clone().filter_target(pred)
    }

    /// See [`chain`](xduce_core::chain).
    pub fn chain<I, F>(&self, f: F) -> AsyncSeq<I::Item>
    where
        F: Fn(T) -> I + Send + Sync + 'static,
        I: AsyncSource,
        I::Stream: Send + 'static,
        I::Item: Send + 'static,
    {
        self.clone().chain_target(f)
    }
}

impl<T> Dispatch for AsyncSeq<T> {
    fn kind(&self) -> TargetKind {
        TargetKind::Sequence
    }
}

impl<T, U, F> MapTarget<F> for AsyncSeq<T>
where
    T: Send + 'static,
    U: Send + 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    type Output = AsyncSeq<U>;

    fn map_target(self, f: F) -> AsyncSeq<U> {
        let f = Arc::new(f);
        AsyncSeq::from_try_factory(move || {
            let f = Arc::clone(&f);
            let source = self.try_stream()?;
            Ok(source.map(move |x| f(x)).boxed())
        })
    }
}

impl<T, P> FilterTarget<P> for AsyncSeq<T>
where
    T: Send + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    type Output = Self;

    fn filter_target(self, pred: P) -> Self {
        let pred = Arc::new(pred);
        AsyncSeq::from_try_factory(move || {
            let pred = Arc::clone(&pred);
            let source = self.try_stream()?;
            Ok(source.filter(move |x| ready(pred(x))).boxed())
        })
    }
}

impl<T, I, F> ChainTarget<F> for AsyncSeq<T>
where
    T: Send + 'static,
    F: Fn(T) -> I + Send + Sync + 'static,
    I: AsyncSource,
    I::Stream: Send + 'static,
    I::Item: Send + 'static,
{
    type Output = AsyncSeq<I::Item>;

    fn chain_target(self, f: F) -> AsyncSeq<I::Item> {
        let f = Arc::new(f);
        AsyncSeq::from_try_factory(move || {
            let f = Arc::clone(&f);
            let source = self.try_stream()?;
            Ok(source.flat_map(move |x| f(x).into_stream()).boxed())
        })
    }
}

impl<T: Send + 'static> AsyncSource for AsyncSeq<T> {
    type Item = T;
    type Stream = BoxStream<'static, T>;

    fn into_stream(self) -> Self::Stream {
        self.stream()
    }
}

impl<T: Send + 'static> AsyncSource for &AsyncSeq<T> {
    type Item = T;
    type Stream = BoxStream<'static, T>;

    fn into_stream(self) -> Self::Stream {
        self.stream()
    }
}

impl<T: 'static> AsyncSource for Seq<T> {
    type Item = T;
    type Stream = stream::Iter<SeqIter<T>>;

    fn into_stream(self) -> Self::Stream {
        stream::iter(self.iter())
    }
}

impl<T: 'static> AsyncSource for &Seq<T> {
    type Item = T;
    type Stream = stream::Iter<SeqIter<T>>;

    fn into_stream(self) -> Self::Stream {
        stream::iter(self.iter())
    }
}
