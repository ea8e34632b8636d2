// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use xduce_core::{ChainTarget, Dispatch, FilterTarget, MapTarget, Result, TargetKind, XduceError};

type BoxIter<T> = Box<dyn Iterator<Item = T> + Send>;
type Factory<T> = dyn Fn() -> Result<BoxIter<T>> + Send + Sync;

/// A re-iterable synchronous lazy sequence.
///
/// A `Seq` holds a factory, not an iterator: every call to [`iter`](Seq::iter) starts a
/// fresh iteration process, so the same sequence can be walked any number of times.
/// Cloning is cheap and shares the factory.
///
/// The combinators never touch the sequence they are given; `map`, `filter` and `chain`
/// return new sequences that pull from it lazily.
///
/// # Examples
///
/// ```rust
/// use xduce_seq::Seq;
///
/// let numbers = Seq::of(vec![1, 2, 3]);
/// let incremented = numbers.map(|x| x + 1);
///
/// assert_eq!(incremented.collect_vec(), vec![2, 3, 4]);
/// assert_eq!(incremented.collect_vec(), vec![2, 3, 4]);
/// assert_eq!(numbers.collect_vec(), vec![1, 2, 3]);
/// ```
pub struct Seq<T> {
    factory: Arc<Factory<T>>,
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<T> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq").finish_non_exhaustive()
    }
}

impl<T: 'static> Seq<T> {
    /// Builds a sequence from a factory of iterables.
    ///
    /// `factory` is invoked once per iteration process.
    pub fn new<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + Send + Sync + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        Self::from_try_factory(move || Ok(Box::new(factory().into_iter()) as BoxIter<T>))
    }

    fn from_try_factory<F>(factory: F) -> Self
    where
        F: Fn() -> Result<BoxIter<T>> + Send + Sync + 'static,
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
        Self::new(move || items.clone())
    }

    /// A sequence with no elements.
    pub fn empty() -> Self {
        Self::new(std::iter::empty)
    }

    /// A sequence yielding `value` exactly `count` times.
    pub fn repeat(value: T, count: usize) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::new(move || std::iter::repeat(value.clone()).take(count))
    }

    /// Wraps a single-use iterator.
    ///
    /// The first iteration process takes the iterator. Later ones fail with
    /// [`XduceError::SourceConsumed`] from [`try_iter`](Seq::try_iter) and are empty
    /// from [`iter`](Seq::iter).
    pub fn once<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        let slot = Mutex::new(Some(items.into_iter()));
        Self::from_try_factory(move || {
            slot.lock()
                .take()
                .map(|it| Box::new(it) as BoxIter<T>)
                .ok_or_else(|| XduceError::source_consumed("Seq::once"))
        })
    }

    /// Starts a fresh iteration process.
    ///
    /// # Errors
    ///
    /// Returns [`XduceError::SourceConsumed`] when the sequence (or the sequence it was
    /// derived from) wraps a single-use source that has already been iterated.
    pub fn try_iter(&self) -> Result<SeqIter<T>> {
        (self.factory)().map(|inner| SeqIter { inner })
    }

    /// Starts a fresh iteration process, empty if a single-use source is exhausted.
    pub fn iter(&self) -> SeqIter<T> {
        self.try_iter().unwrap_or_else(|e| {
            warn!("{e}; iterating as empty");
            SeqIter::empty()
        })
    }

    /// Runs one iteration process to completion.
    pub fn collect_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// See [`map`](xduce_core::map).
    pub fn map<U, F>(&self, f: F) -> Seq<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: 'static,
    {
        self.clone().map_target(f)
    }

    /// See [`filter`](xduce_core::filter).
    pub fn filter<P>(&self, pred: P) -> Seq<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.clone().filter_target(pred)
    }

    /// See [`chain`](xduce_core::chain).
    pub fn chain<I, F>(&self, f: F) -> Seq<I::Item>
    where
        F: Fn(T) -> I + Send + Sync + 'static,
        I: IntoIterator + 'static,
        I::IntoIter: Send + 'static,
        I::Item: 'static,
    {
        self.clone().chain_target(f)
    }
}

/// One iteration process of a [`Seq`].
pub struct SeqIter<T> {
    inner: BoxIter<T>,
}

impl<T: 'static> SeqIter<T> {
    fn empty() -> Self {
        Self {
            inner: Box::new(std::iter::empty()),
        }
    }
}

impl<T> Iterator for SeqIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> fmt::Debug for SeqIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqIter").finish_non_exhaustive()
    }
}

impl<T: 'static> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = SeqIter<T>;

    fn into_iter(self) -> SeqIter<T> {
        self.iter()
    }
}

impl<T: 'static> IntoIterator for &Seq<T> {
    type Item = T;
    type IntoIter = SeqIter<T>;

    fn into_iter(self) -> SeqIter<T> {
        self.iter()
    }
}

impl<T> Dispatch for Seq<T> {
    fn kind(&self) -> TargetKind {
        TargetKind::Sequence
    }
}

impl<T, U, F> MapTarget<F> for Seq<T>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    type Output = Seq<U>;

    fn map_target(self, f: F) -> Seq<U> {
        let f = Arc::new(f);
        Seq::from_try_factory(move || {
            let f = Arc::clone(&f);
            let source = self.try_iter()?;
            Ok(Box::new(source.map(move |x| f(x))) as BoxIter<U>)
        })
    }
}

impl<T, P> FilterTarget<P> for Seq<T>
where
    T: 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    type Output = Self;

    fn filter_target(self, pred: P) -> Self {
        let pred = Arc::new(pred);
        Seq::from_try_factory(move || {
            let pred = Arc::clone(&pred);
            let source = self.try_iter()?;
            Ok(Box::new(source.filter(move |x| pred(x))) as BoxIter<T>)
        })
    }
}

impl<T, I, F> ChainTarget<F> for Seq<T>
where
    T: 'static,
    F: Fn(T) -> I + Send + Sync + 'static,
    I: IntoIterator + 'static,
    I::IntoIter: Send + 'static,
    I::Item: 'static,
{
    type Output = Seq<I::Item>;

    fn chain_target(self, f: F) -> Seq<I::Item> {
        let f = Arc::new(f);
        Seq::from_try_factory(move || {
            let f = Arc::clone(&f);
            let source = self.try_iter()?;
            Ok(Box::new(source.flat_map(move |x| f(x))) as BoxIter<I::Item>)
        })
    }
}
