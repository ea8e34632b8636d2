// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use xduce_core::func::{append, flip};
use xduce_core::{chaining, compose, filter, filtering, map, mapping, Identity};
use xduce_exec::iter::{reduce, transduce};
use xduce_exec::SeqExt;
use xduce_seq::Seq;
use xduce_test_utils::fixtures::{
    add, dec, inc, is_odd, numbers, push, repeat, scenario_expected, triple,
};
use xduce_test_utils::CallCounter;

#[test]
fn test_reduce_sums() {
    assert_eq!(reduce(add, 0, vec![1, 2, 3]), 6);
}

#[test]
fn test_reduce_empty_source_returns_init() {
    assert_eq!(reduce(add, 42, Vec::new()), 42);
}

#[test]
fn test_reduce_walks_sequence() {
    let seq = Seq::of(vec![1, 2, 3]);

    assert_eq!(seq.reduce(add, 0), 6);
    assert_eq!(seq.reduce(add, 10), 16);
}

#[test]
fn test_transduce_scenario() {
    // Arrange
    let pipeline = compose!(
        mapping(triple),
        filtering(is_odd),
        mapping(dec),
        chaining(repeat)
    );

    // Act
    let result = transduce(pipeline, flip(append), Vec::new(), numbers());

    // Assert
    assert_eq!(result, scenario_expected());
}

#[test]
fn test_transduce_matches_eager_evaluation() {
    // Arrange
    let source = vec![5, 0, 3, 8, 1, 2];
    let eager: Vec<i32> = source
        .iter()
        .map(|x| triple(*x))
        .filter(is_odd)
        .map(dec)
        .flat_map(repeat)
        .collect();

    // Act
    let fused = transduce(
        compose!(
            mapping(triple),
            filtering(is_odd),
            mapping(dec),
            chaining(repeat)
        ),
        push,
        Vec::new(),
        source,
    );

    // Assert
    assert_eq!(fused, eager);
}

#[test]
fn test_transduce_with_closure_pipeline() {
    let pipeline = |xf| map(inc, filter(is_odd, xf));

    let result = transduce(pipeline, push, Vec::new(), vec![1, 2, 3]);

    assert_eq!(result, vec![3]);
}

#[test]
fn test_closure_pipeline_outer_layer_sees_elements_first() {
    // Arrange
    let filter_then_map = |xf| filter(is_odd, map(inc, xf));

    // Act
    let result = transduce(filter_then_map, push, Vec::new(), vec![1, 2, 3]);

    // Assert
    assert_eq!(result, vec![2, 4]);
}

#[test]
fn test_identity_pipeline_is_reduce() {
    let source = numbers();

    let transduced = transduce(Identity, add, 0, source.clone());

    assert_eq!(transduced, reduce(add, 0, source));
}

#[test]
fn test_filter_rejection_keeps_accumulator() {
    let result = transduce(filtering(|_: &i32| false), push, vec![9], numbers());

    assert_eq!(result, vec![9]);
}

#[test]
fn test_transduce_is_one_pass() {
    // Arrange
    let mapper = CallCounter::new();
    let checker = CallCounter::new();
    let pipeline = compose!(
        mapping(mapper.wrap(triple)),
        filtering(checker.wrap_pred(is_odd))
    );

    // Act
    let total = transduce(pipeline, add, 0, numbers());

    // Assert
    assert_eq!(total, 12);
    assert_eq!(mapper.count(), 4);
    assert_eq!(checker.count(), 4);
}

#[test]
fn test_sequence_transduce_is_repeatable() {
    // Arrange
    let seq = Seq::of(numbers());
    let pipeline = || compose!(mapping(triple), filtering(is_odd));

    // Act
    let first = seq.transduce(pipeline(), push, Vec::new());
    let second = seq.transduce(pipeline(), push, Vec::new());

    // Assert
    assert_eq!(first, vec![3, 9]);
    assert_eq!(first, second);
}

#[test]
fn test_transduce_over_derived_sequence() {
    let seq = Seq::of(numbers()).chain(repeat);

    let result = seq.transduce(mapping(inc), push, Vec::new());

    assert_eq!(result, vec![2, 3, 3, 4, 4, 4, 5, 5, 5, 5]);
}
