// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use xduce_core::{
    chaining, compose, filtering, is_transformer, map, mapping, Dispatch, Reducer, Stage, Step,
    Target, TargetKind, Transformer,
};
use xduce_seq::{AsyncSeq, Seq};
use xduce_test_utils::fixtures::{dec, is_odd, numbers, push, repeat, scenario_expected, triple};

type Terminal = Reducer<Vec<i32>, fn(Vec<i32>, i32) -> Vec<i32>>;

fn terminal() -> Terminal {
    Reducer::new(Vec::new(), push as fn(Vec<i32>, i32) -> Vec<i32>)
}

#[test]
fn test_same_stage_builds_both_branches() {
    // Arrange
    let pipeline = || {
        compose!(
            mapping(triple),
            filtering(is_odd),
            mapping(dec),
            chaining(repeat)
        )
    };

    // Act
    let seq = pipeline().apply(Seq::of(numbers()));
    let mut xf = pipeline().apply(terminal());

    // Assert
    assert!(!is_transformer(&seq));
    assert!(is_transformer(&xf));

    // Sequence stages run right-to-left, transformer layers left-to-right.
    assert_eq!(seq.collect_vec(), vec![3, 3, 9, 9, 9, 9]);

    let seed = xf.init();
    let acc = numbers().into_iter().fold(seed, |acc, x| xf.step(acc, x));
    assert_eq!(xf.result(acc), scenario_expected());
}

#[test]
fn test_runtime_tagged_target_takes_sequence_branch() {
    // Arrange
    let target: Target<Terminal, Seq<i32>> = Target::Sequence(Seq::of(vec![1, 2, 3]));

    // Act
    let mapped = map(|x: i32| x + 1, target);

    // Assert
    assert_eq!(mapped.kind(), TargetKind::Sequence);
    let seq = mapped.into_sequence().expect("sequence branch");
    assert_eq!(seq.collect_vec(), vec![2, 3, 4]);
}

#[test]
fn test_runtime_tagged_target_takes_transformer_branch() {
    // Arrange
    let target: Target<Terminal, Seq<i32>> = Target::Transformer(terminal());

    // Act
    let mapped = map(|x: i32| x + 1, target);

    // Assert
    assert!(is_transformer(&mapped));
    let mut xf = mapped.into_transformer().expect("transformer branch");
    let seed = xf.init();
    let acc = xf.step(seed, 1);
    assert_eq!(xf.result(acc), vec![2]);
}

#[tokio::test]
async fn test_stage_order_on_async_sequence() {
    let pipeline = compose!(
        chaining(repeat),
        mapping(dec),
        filtering(is_odd),
        mapping(triple)
    );

    let seq = pipeline.apply(AsyncSeq::of(numbers()));

    assert_eq!(seq.collect_vec().await, scenario_expected());
}
