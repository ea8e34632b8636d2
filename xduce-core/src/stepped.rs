// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Step layering.
//!
//! A pipeline stage is a [`Stepped`] value: the transformer it wraps plus a rewrite of
//! the step function. `init` and `result` are forwarded to the wrapped transformer, so
//! however many layers a pipeline has, they always come from the terminal reducer.
//!
//! The rewrite is any [`StepFn`] (synchronous drivers) or [`AsyncStepFn`] (asynchronous
//! drivers). Closures can stand in for either through [`make_step`] and
//! [`make_async_step`]. The built-in rewrites [`MapStep`], [`FilterStep`] and [`ChainStep`]
//! implement both, which is what lets one pipeline be driven by either flavour.

use core::future::Future;

use futures::future::LocalBoxFuture;
use futures::{pin_mut, StreamExt};

use crate::async_source::AsyncSource;
use crate::transformer::{AsyncStep, Step, Transformer};

/// Rewrites a step for synchronous drivers.
///
/// `inner` is the wrapped transformer; implementations decide whether and how to
/// forward to `inner.step`.
pub trait StepFn<X: Transformer, In> {
    /// Folds `input` into `acc` by way of `inner`.
    fn call(&mut self, inner: &mut X, acc: X::Acc, input: In) -> X::Acc;
}

/// Rewrites a step for asynchronous drivers.
pub trait AsyncStepFn<X: Transformer, In> {
    /// Folds `input` into `acc` by way of `inner`, awaiting every downstream step.
    fn call(&mut self, inner: &mut X, acc: X::Acc, input: In) -> impl Future<Output = X::Acc>;
}

/// A transformer layer: `inner`'s `init`/`result`, with a rewritten `step`.
#[derive(Debug, Clone)]
pub struct Stepped<X, S> {
    inner: X,
    step_fn: S,
}

impl<X, S> Stepped<X, S> {
    /// Wraps `inner`, replacing its step with `step_fn`.
    pub const fn new(inner: X, step_fn: S) -> Self {
        Self { inner, step_fn }
    }

    /// The wrapped transformer.
    pub const fn inner(&self) -> &X {
        &self.inner
    }

    /// Unwraps the layer, discarding the step rewrite.
    pub fn into_inner(self) -> X {
        self.inner
    }
}

impl<X: Transformer, S> Transformer for Stepped<X, S> {
    type Acc = X::Acc;
    type Output = X::Output;

    fn init(&mut self) -> X::Acc {
        self.inner.init()
    }

    fn result(&mut self, acc: X::Acc) -> X::Output {
        self.inner.result(acc)
    }
}

impl<In, X, S> Step<In> for Stepped<X, S>
where
    X: Transformer,
    S: StepFn<X, In>,
{
    fn step(&mut self, acc: X::Acc, input: In) -> X::Acc {
        self.step_fn.call(&mut self.inner, acc, input)
    }
}

impl<In, X, S> AsyncStep<In> for Stepped<X, S>
where
    X: Transformer,
    S: AsyncStepFn<X, In>,
{
    async fn step(&mut self, acc: X::Acc, input: In) -> X::Acc {
        self.step_fn.call(&mut self.inner, acc, input).await
    }
}

/// Step rewrite backed by a closure, see [`make_step`].
#[derive(Debug, Clone)]
pub struct FnStep<C>(C);

impl<X, In, C> StepFn<X, In> for FnStep<C>
where
    X: Transformer,
    C: FnMut(&mut X, X::Acc, In) -> X::Acc,
{
    fn call(&mut self, inner: &mut X, acc: X::Acc, input: In) -> X::Acc {
        (self.0)(inner, acc, input)
    }
}

/// Builds a new transformer sharing `xf`'s `init` and `result`, with `step` replaced.
///
/// The closure receives the wrapped transformer, so it can forward to its step (or not).
///
/// # Examples
///
/// ```rust
/// use xduce_core::{make_step, Reducer, Step, Transformer};
///
/// let sum = Reducer::new(100, |acc: i32, x: i32| acc + x);
/// let mut doubled = make_step(sum, |inner: &mut Reducer<i32, _>, acc: i32, x: i32| {
///     inner.step(acc, x * 2)
/// });
///
/// let seed = doubled.init();
/// assert_eq!(seed, 100);
/// let acc = doubled.step(seed, 4);
/// assert_eq!(doubled.result(acc), 108);
/// ```
pub fn make_step<X, In, C>(xf: X, step: C) -> Stepped<X, FnStep<C>>
where
    X: Transformer,
    C: FnMut(&mut X, X::Acc, In) -> X::Acc,
{
    Stepped::new(xf, FnStep(step))
}

/// Asynchronous step rewrite backed by a closure, see [`make_async_step`].
#[derive(Debug, Clone)]
pub struct AsyncFnStep<C>(C);

impl<X, In, C> AsyncStepFn<X, In> for AsyncFnStep<C>
where
    X: Transformer,
    C: for<'a> FnMut(&'a mut X, X::Acc, In) -> LocalBoxFuture<'a, X::Acc>,
{
    async fn call(&mut self, inner: &mut X, acc: X::Acc, input: In) -> X::Acc {
        (self.0)(inner, acc, input).await
    }
}

/// The asynchronous counterpart of [`make_step`].
///
/// The closure returns the pending step, borrowing the wrapped transformer for as long
/// as it runs. The result is driven by the asynchronous drivers; every returned future
/// is awaited before the next element is pulled.
///
/// # Examples
///
/// ```rust
/// use futures::FutureExt;
/// use xduce_core::{make_async_step, AsyncStep, Reducer, Transformer};
///
/// # async fn example() {
/// let sum = Reducer::new(0, |acc: i32, x: i32| acc + x);
/// let mut doubled = make_async_step(sum, |inner: &mut Reducer<i32, _>, acc: i32, x: i32| {
///     async move { inner.step(acc, x * 2).await }.boxed_local()
/// });
///
/// let seed = doubled.init();
/// let acc = doubled.step(seed, 4).await;
/// assert_eq!(doubled.result(acc), 8);
/// # }
/// ```
pub fn make_async_step<X, In, C>(xf: X, step: C) -> Stepped<X, AsyncFnStep<C>>
where
    X: Transformer,
    C: for<'a> FnMut(&'a mut X, X::Acc, In) -> LocalBoxFuture<'a, X::Acc>,
{
    Stepped::new(xf, AsyncFnStep(step))
}

/// Step rewrite applying `f` to each element before the downstream step.
#[derive(Debug, Clone)]
pub struct MapStep<F> {
    f: F,
}

impl<F> MapStep<F> {
    /// Wraps the element function `f`.
    pub const fn new(f: F) -> Self {
        Self { f }
    }
}

impl<X, In, F, Mid> StepFn<X, In> for MapStep<F>
where
    X: Step<Mid>,
    F: FnMut(In) -> Mid,
{
    fn call(&mut self, inner: &mut X, acc: X::Acc, input: In) -> X::Acc {
        inner.step(acc, (self.f)(input))
    }
}

impl<X, In, F, Mid> AsyncStepFn<X, In> for MapStep<F>
where
    X: AsyncStep<Mid>,
    F: FnMut(In) -> Mid,
{
    async fn call(&mut self, inner: &mut X, acc: X::Acc, input: In) -> X::Acc {
        let mapped = (self.f)(input);
        inner.step(acc, mapped).await
    }
}

/// Step rewrite forwarding only elements accepted by a predicate.
///
/// A rejected element returns the accumulator as received.
#[derive(Debug, Clone)]
pub struct FilterStep<P> {
    pred: P,
}

impl<P> FilterStep<P> {
    /// Wraps the predicate `pred`.
    pub const fn new(pred: P) -> Self {
        Self { pred }
    }
}

impl<X, In, P> StepFn<X, In> for FilterStep<P>
where
    X: Step<In>,
    P: FnMut(&In) -> bool,
{
    fn call(&mut self, inner: &mut X, acc: X::Acc, input: In) -> X::Acc {
        if (self.pred)(&input) {
            inner.step(acc, input)
        } else {
            acc
        }
    }
}

impl<X, In, P> AsyncStepFn<X, In> for FilterStep<P>
where
    X: AsyncStep<In>,
    P: FnMut(&In) -> bool,
{
    async fn call(&mut self, inner: &mut X, acc: X::Acc, input: In) -> X::Acc {
        if (self.pred)(&input) {
            inner.step(acc, input).await
        } else {
            acc
        }
    }
}

/// Step rewrite folding a whole inner source into the accumulator per element.
///
/// Every inner element goes through the downstream step, in order, before the
/// outer step returns.
#[derive(Debug, Clone)]
pub struct ChainStep<F> {
    f: F,
}

impl<F> ChainStep<F> {
    /// Wraps `f`, which maps each element to its inner source.
    pub const fn new(f: F) -> Self {
        Self { f }
    }
}

impl<X, In, F, I> StepFn<X, In> for ChainStep<F>
where
    X: Step<I::Item>,
    F: FnMut(In) -> I,
    I: IntoIterator,
{
    fn call(&mut self, inner: &mut X, acc: X::Acc, input: In) -> X::Acc {
        (self.f)(input)
            .into_iter()
            .fold(acc, |acc, item| inner.step(acc, item))
    }
}

impl<X, In, F, I> AsyncStepFn<X, In> for ChainStep<F>
where
    X: AsyncStep<I::Item>,
    F: FnMut(In) -> I,
    I: AsyncSource,
{
    async fn call(&mut self, inner: &mut X, acc: X::Acc, input: In) -> X::Acc {
        let items = (self.f)(input).into_stream();
        pin_mut!(items);

        let mut acc = acc;
        while let Some(item) = items.next().await {
            acc = inner.step(acc, item).await;
        }
        acc
    }
}
