// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Dual dispatch of the combinators.
//!
//! [`map`], [`filter`] and [`chain`] accept either a transformer or a lazy sequence.
//! Each target type says which one it is through [`Dispatch`] and builds its own
//! branch through [`MapTarget`], [`FilterTarget`] and [`ChainTarget`]:
//!
//! - transformers ([`Reducer`], [`Stepped`]) return a new [`Stepped`] layer;
//! - sequences (`Seq`, `AsyncSeq` in `xduce-seq`) return a new sequence.
//!
//! [`Target`] is the explicit sum of both, for code that only learns at runtime which
//! branch it holds. Values that are neither do not implement the traits and are
//! rejected by the compiler.

use crate::reducer::Reducer;
use crate::stepped::{ChainStep, FilterStep, MapStep, Stepped};

/// Which branch a combinator target takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Exposes the `init`/`step`/`result` protocol.
    Transformer,
    /// A lazy sequence producing fresh iteration processes.
    Sequence,
}

/// Capability probe for combinator targets.
pub trait Dispatch {
    /// The branch this value takes.
    fn kind(&self) -> TargetKind;
}

/// Returns `true` iff `target` exposes the transformer step protocol.
///
/// ```rust
/// use xduce_core::{is_transformer, Reducer};
///
/// let terminal = Reducer::new(Vec::<i32>::new(), |mut acc: Vec<i32>, x: i32| {
///     acc.push(x);
///     acc
/// });
/// assert!(is_transformer(&terminal));
/// ```
pub fn is_transformer<T: Dispatch + ?Sized>(target: &T) -> bool {
    target.kind() == TargetKind::Transformer
}

/// Targets of [`map`].
pub trait MapTarget<F>: Dispatch {
    /// A new transformer layer or a new sequence.
    type Output;

    /// Builds the mapped target.
    fn map_target(self, f: F) -> Self::Output;
}

/// Targets of [`filter`].
pub trait FilterTarget<P>: Dispatch {
    /// A new transformer layer or a new sequence.
    type Output;

    /// Builds the filtered target.
    fn filter_target(self, pred: P) -> Self::Output;
}

/// Targets of [`chain`].
pub trait ChainTarget<F>: Dispatch {
    /// A new transformer layer or a new sequence.
    type Output;

    /// Builds the flattened target.
    fn chain_target(self, f: F) -> Self::Output;
}

/// Applies `f` to every element of `target`.
///
/// Given a transformer, the returned layer steps with `f(x)`. Given a sequence, the
/// returned sequence yields `f(x)` for every element pulled from `target`.
pub fn map<T, F>(f: F, target: T) -> T::Output
where
    T: MapTarget<F>,
{
    target.map_target(f)
}

/// Keeps the elements of `target` accepted by `pred`.
///
/// Given a transformer, rejected elements leave the accumulator untouched. Given a
/// sequence, the passing elements are yielded in source order.
pub fn filter<T, P>(pred: P, target: T) -> T::Output
where
    T: FilterTarget<P>,
{
    target.filter_target(pred)
}

/// Maps every element of `target` to an inner source and flattens the result.
///
/// Flattening is depth-first: every element of `f(x)` is handled before the next
/// outer element.
pub fn chain<T, F>(f: F, target: T) -> T::Output
where
    T: ChainTarget<F>,
{
    target.chain_target(f)
}

macro_rules! impl_transformer_target {
    ([$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*> Dispatch for $ty {
            fn kind(&self) -> TargetKind {
                TargetKind::Transformer
            }
        }

        impl<$($generics)*, F> MapTarget<F> for $ty {
            type Output = Stepped<Self, MapStep<F>>;

            fn map_target(self, f: F) -> Self::Output {
                Stepped::new(self, MapStep::new(f))
            }
        }

        impl<$($generics)*, P> FilterTarget<P> for $ty {
            type Output = Stepped<Self, FilterStep<P>>;

            fn filter_target(self, pred: P) -> Self::Output {
                Stepped::new(self, FilterStep::new(pred))
            }
        }

        impl<$($generics)*, F> ChainTarget<F> for $ty {
            type Output = Stepped<Self, ChainStep<F>>;

            fn chain_target(self, f: F) -> Self::Output {
                Stepped::new(self, ChainStep::new(f))
            }
        }
    };
}

impl_transformer_target!([A, R] Reducer<A, R>);
impl_transformer_target!([X, S] Stepped<X, S>);

/// A combinator target whose branch is chosen at runtime.
///
/// Combinators applied to a `Target` build the branch matching the variant and wrap it
/// back into a `Target`.
///
/// # Examples
///
/// ```rust
/// use xduce_core::{is_transformer, Reducer, Target};
///
/// let terminal = Reducer::new(0, |acc: i32, x: i32| acc + x);
/// let target: Target<_, ()> = Target::Transformer(terminal);
///
/// assert!(is_transformer(&target));
/// assert!(target.into_transformer().is_some());
/// ```
#[derive(Debug, Clone)]
pub enum Target<X, S> {
    /// A transformer branch.
    Transformer(X),
    /// A sequence branch.
    Sequence(S),
}

impl<X, S> Target<X, S> {
    /// Returns the transformer, if this is one.
    pub fn into_transformer(self) -> Option<X> {
        match self {
            Target::Transformer(xf) => Some(xf),
            Target::Sequence(_) => None,
        }
    }

    /// Returns the sequence, if this is one.
    pub fn into_sequence(self) -> Option<S> {
        match self {
            Target::Transformer(_) => None,
            Target::Sequence(seq) => Some(seq),
        }
    }
}

impl<X, S> Dispatch for Target<X, S> {
    fn kind(&self) -> TargetKind {
        match self {
            Target::Transformer(_) => TargetKind::Transformer,
            Target::Sequence(_) => TargetKind::Sequence,
        }
    }
}

impl<X, S, F> MapTarget<F> for Target<X, S>
where
    X: MapTarget<F>,
    S: MapTarget<F>,
{
    type Output = Target<X::Output, S::Output>;

    fn map_target(self, f: F) -> Self::Output {
        match self {
            Target::Transformer(xf) => Target::Transformer(xf.map_target(f)),
            Target::Sequence(seq) => Target::Sequence(seq.map_target(f)),
        }
    }
}

impl<X, S, P> FilterTarget<P> for Target<X, S>
where
    X: FilterTarget<P>,
    S: FilterTarget<P>,
{
    type Output = Target<X::Output, S::Output>;

    fn filter_target(self, pred: P) -> Self::Output {
        match self {
            Target::Transformer(xf) => Target::Transformer(xf.filter_target(pred)),
            Target::Sequence(seq) => Target::Sequence(seq.filter_target(pred)),
        }
    }
}

impl<X, S, F> ChainTarget<F> for Target<X, S>
where
    X: ChainTarget<F>,
    S: ChainTarget<F>,
{
    type Output = Target<X::Output, S::Output>;

    fn chain_target(self, f: F) -> Self::Output {
        match self {
            Target::Transformer(xf) => Target::Transformer(xf.chain_target(f)),
            Target::Sequence(seq) => Target::Sequence(seq.chain_target(f)),
        }
    }
}
