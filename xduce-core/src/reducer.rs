// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::transformer::{AsyncStep, Step, Transformer};

/// Terminal transformer built from a reducing function.
///
/// `init` returns a clone of the seed, `step` is the reducer itself and `result` is the
/// identity. Every pipeline bottoms out in one of these.
///
/// # Examples
///
/// ```rust
/// use xduce_core::{Reducer, Step, Transformer};
///
/// let mut sum = Reducer::new(0, |acc: i32, x: i32| acc + x);
/// let seed = sum.init();
/// let acc = sum.step(seed, 5);
/// assert_eq!(sum.result(acc), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Reducer<A, R> {
    seed: A,
    reducer: R,
}

impl<A, R> Reducer<A, R> {
    /// Creates a terminal transformer seeded with `seed`.
    pub const fn new(seed: A, reducer: R) -> Self {
        Self { seed, reducer }
    }

    /// Returns the seed this reducer starts from.
    pub const fn seed(&self) -> &A {
        &self.seed
    }
}

impl<A: Clone, R> Transformer for Reducer<A, R> {
    type Acc = A;
    type Output = A;

    fn init(&mut self) -> A {
        self.seed.clone()
    }

    fn result(&mut self, acc: A) -> A {
        acc
    }
}

impl<A, R, T> Step<T> for Reducer<A, R>
where
    A: Clone,
    R: FnMut(A, T) -> A,
{
    fn step(&mut self, acc: A, input: T) -> A {
        (self.reducer)(acc, input)
    }
}

impl<A, R, T> AsyncStep<T> for Reducer<A, R>
where
    A: Clone,
    R: FnMut(A, T) -> A,
{
    async fn step(&mut self, acc: A, input: T) -> A {
        (self.reducer)(acc, input)
    }
}
