// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cell::Cell;
use std::rc::Rc;

use futures::FutureExt;
use xduce_core::func::{append, flip};
use xduce_core::{
    chaining, compose, filtering, make_async_step, map, mapping, AsyncStep, Identity, Reducer,
};
use xduce_exec::stream::{reduce, transduce};
use xduce_exec::AsyncSeqExt;
use xduce_seq::{AsyncSeq, Seq};
use xduce_test_utils::fixtures::{
    add, dec, inc, is_odd, numbers, push, repeat, scenario_expected, triple,
};
use xduce_test_utils::{delayed, CallCounter};

#[tokio::test]
async fn test_reduce_sums() {
    assert_eq!(reduce(add, 0, AsyncSeq::of(vec![1, 2, 3])).await, 6);
    assert_eq!(reduce(add, 0, vec![1, 2, 3]).await, 6);
}

#[tokio::test]
async fn test_reduce_empty_source_returns_init() {
    assert_eq!(reduce(add, 7, AsyncSeq::empty()).await, 7);
}

#[tokio::test]
async fn test_reduce_walks_sequence() {
    let seq = AsyncSeq::of(vec![1, 2, 3]);

    assert_eq!(seq.reduce(add, 0).await, 6);
    assert_eq!(seq.reduce(add, 0).await, 6);
}

#[tokio::test]
async fn test_transduce_scenario() {
    // Arrange
    let pipeline = compose!(
        mapping(triple),
        filtering(is_odd),
        mapping(dec),
        chaining(repeat)
    );

    // Act
    let result = transduce(pipeline, flip(append), Vec::new(), AsyncSeq::of(numbers())).await;

    // Assert
    assert_eq!(result, scenario_expected());
}

#[tokio::test]
async fn test_transduce_scenario_with_suspending_sources() {
    // Arrange
    let source = delayed(numbers(), 2);
    let pipeline = compose!(
        mapping(triple),
        filtering(is_odd),
        mapping(dec),
        chaining(|x: i32| delayed(repeat(x), 1))
    );

    // Act
    let result = transduce(pipeline, push, Vec::new(), source).await;

    // Assert
    assert_eq!(result, scenario_expected());
}

#[tokio::test]
async fn test_sync_sources_drive_asynchronously() {
    let pipeline = || compose!(mapping(inc), chaining(|x: i32| Seq::repeat(x, 2)));

    let from_vec = transduce(pipeline(), push, Vec::new(), vec![1, 2]).await;
    let from_seq = transduce(pipeline(), push, Vec::new(), Seq::of(vec![1, 2])).await;

    assert_eq!(from_vec, vec![2, 2, 3, 3]);
    assert_eq!(from_vec, from_seq);
}

#[tokio::test]
async fn test_transduce_matches_async_sequence_combinators() {
    // Arrange
    let source = AsyncSeq::of(vec![4, 1, 0, 7, 2]);
    let lazily = source
        .map(triple)
        .filter(is_odd)
        .map(dec)
        .chain(repeat)
        .collect_vec()
        .await;

    // Act
    let fused = source
        .transduce(
            compose!(
                mapping(triple),
                filtering(is_odd),
                mapping(dec),
                chaining(repeat)
            ),
            push,
            Vec::new(),
        )
        .await;

    // Assert
    assert_eq!(fused, lazily);
}

#[tokio::test]
async fn test_transduce_with_closure_pipeline() {
    let pipeline = |xf| map(inc, xf);

    let result = transduce(pipeline, push, Vec::new(), AsyncSeq::of(vec![1, 2])).await;

    assert_eq!(result, vec![2, 3]);
}

#[tokio::test]
async fn test_identity_pipeline_is_reduce() {
    let seq = AsyncSeq::of(numbers());

    assert_eq!(
        transduce(Identity, add, 0, &seq).await,
        reduce(add, 0, &seq).await
    );
}

#[tokio::test]
async fn test_transduce_is_one_pass() {
    // Arrange
    let mapper = CallCounter::new();
    let pipeline = compose!(mapping(mapper.wrap(triple)), filtering(is_odd));

    // Act
    let total = transduce(pipeline, add, 0, AsyncSeq::of(numbers())).await;

    // Assert
    assert_eq!(total, 12);
    assert_eq!(mapper.count(), 4);
}

#[tokio::test]
async fn test_step_state_need_not_be_send() {
    // Arrange
    let seen = Rc::new(Cell::new(0));
    let tracker = Rc::clone(&seen);
    let pipeline = mapping(move |x: i32| {
        tracker.set(tracker.get() + 1);
        x
    });

    // Act
    let total = transduce(pipeline, add, 0, AsyncSeq::of(numbers())).await;

    // Assert
    assert_eq!(total, 10);
    assert_eq!(seen.get(), 4);
}

#[tokio::test]
async fn test_transduce_with_async_closure_step() {
    // Arrange
    type Sum = Reducer<i32, fn(i32, i32) -> i32>;
    let pipeline = |xf: Sum| {
        make_async_step(xf, |inner: &mut Sum, acc: i32, x: i32| {
            async move {
                tokio::task::yield_now().await;
                inner.step(acc, x * 2).await
            }
            .boxed_local()
        })
    };

    // Act
    let reducer: fn(i32, i32) -> i32 = add;
    let total = transduce(pipeline, reducer, 0, AsyncSeq::of(vec![1, 2, 3])).await;

    // Assert
    assert_eq!(total, 12);
}
