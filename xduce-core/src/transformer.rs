// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;

/// One stage of a fold pipeline.
///
/// A transformer owns the seed and the finaliser of a fold. The per-element step lives
/// in [`Step`] (synchronous drivers) and [`AsyncStep`] (asynchronous drivers), so the
/// same layer can be driven either way.
///
/// Pipeline stages forward `init` and `result` untouched to the transformer they wrap;
/// only the terminal [`Reducer`](crate::Reducer) decides what they do.
pub trait Transformer {
    /// Accumulator threaded through every step.
    type Acc;
    /// Externally visible result of the fold.
    type Output;

    /// Produces the seed accumulator.
    fn init(&mut self) -> Self::Acc;

    /// Finalizes an accumulator into the public result.
    fn result(&mut self, acc: Self::Acc) -> Self::Output;
}

/// Synchronous step: folds one element into the accumulator.
pub trait Step<In>: Transformer {
    /// Folds `input` into `acc`.
    fn step(&mut self, acc: Self::Acc, input: In) -> Self::Acc;
}

/// Asynchronous step: folds one element into the accumulator, possibly suspending.
///
/// The returned future borrows the transformer; drivers await it before pulling the
/// next element, which is the only suspension point a step introduces.
pub trait AsyncStep<In>: Transformer {
    /// Folds `input` into `acc`.
    fn step(&mut self, acc: Self::Acc, input: In) -> impl Future<Output = Self::Acc>;
}
