// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Small functional helpers used to build reducers.

/// Returns its argument unchanged.
pub fn identity<T>(value: T) -> T {
    value
}

/// Swaps the two arguments of `f`.
///
/// Adapts an "insert element into collection" function into the `(acc, element)`
/// reducer shape.
///
/// ```rust
/// use xduce_core::func::{append, flip};
///
/// let push = flip(append::<i32>);
/// assert_eq!(push(vec![1], 2), vec![1, 2]);
/// ```
pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |b, a| f(a, b)
}

/// Returns `collection` with `element` added at the end.
pub fn append<T>(element: T, mut collection: Vec<T>) -> Vec<T> {
    collection.push(element);
    collection
}
