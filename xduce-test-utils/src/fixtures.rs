// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared sample data and element functions.

/// The source used by the end-to-end pipeline scenario.
pub fn numbers() -> Vec<i32> {
    vec![1, 2, 3, 4]
}

/// What the scenario pipeline produces from [`numbers`]:
/// `map(x * 3)`, then `filter(odd)`, then `map(x - 1)`, then `chain(repeat)`.
pub fn scenario_expected() -> Vec<i32> {
    vec![2, 2, 8, 8, 8, 8, 8, 8, 8, 8]
}

/// `n` copies of `n`; empty for zero and negative values.
pub fn repeat(n: i32) -> Vec<i32> {
    let count = usize::try_from(n).unwrap_or(0);
    vec![n; count]
}

pub fn is_odd(x: &i32) -> bool {
    x % 2 != 0
}

pub fn is_even(x: &i32) -> bool {
    x % 2 == 0
}

pub fn inc(x: i32) -> i32 {
    x + 1
}

pub fn dec(x: i32) -> i32 {
    x - 1
}

pub fn triple(x: i32) -> i32 {
    x * 3
}

pub fn add(acc: i32, x: i32) -> i32 {
    acc + x
}

/// Reducer collecting elements in arrival order.
pub fn push(mut acc: Vec<i32>, x: i32) -> Vec<i32> {
    acc.push(x);
    acc
}
