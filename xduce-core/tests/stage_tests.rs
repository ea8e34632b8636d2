// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use xduce_core::{
    chaining, compose, filtering, map, mapping, Dispatch, Identity, Reducer, Stage, Step, Target,
    TargetKind,
};

fn push(mut acc: Vec<i32>, x: i32) -> Vec<i32> {
    acc.push(x);
    acc
}

fn run<X: Step<i32>>(mut xf: X, items: &[i32]) -> X::Output {
    let seed = xf.init();
    let acc = items.iter().fold(seed, |acc, &x| xf.step(acc, x));
    xf.result(acc)
}

#[test]
fn test_compose_applies_right_to_left() {
    // Arrange
    let pipeline = compose!(
        mapping(|x: i32| x * 3),
        filtering(|x: &i32| x % 2 == 1),
        mapping(|x: i32| x - 1),
        chaining(|x: i32| vec![x; x as usize]),
    );

    // Act
    let xf = pipeline.apply(Reducer::new(Vec::new(), push));

    // Assert
    assert_eq!(run(xf, &[1, 2, 3, 4]), vec![2, 2, 8, 8, 8, 8, 8, 8, 8, 8]);
}

#[test]
fn test_closure_is_a_stage() {
    let pipeline = |xf| map(|x: i32| x + 100, xf);

    let xf = pipeline.apply(Reducer::new(Vec::new(), push));

    assert_eq!(run(xf, &[1, 2]), vec![101, 102]);
}

#[test]
fn test_closures_and_stages_compose() {
    let pipeline = compose(|xf| map(|x: i32| x * 2, xf), filtering(|x: &i32| *x != 2));

    let xf = pipeline.apply(Reducer::new(Vec::new(), push));

    assert_eq!(run(xf, &[1, 2, 3]), vec![4, 6]);
}

#[test]
fn test_identity_stage_returns_terminal() {
    let xf = Identity.apply(Reducer::new(vec![1], push));

    assert_eq!(run(xf, &[2, 3]), vec![1, 2, 3]);
}

#[test]
fn test_single_stage_compose_macro() {
    let pipeline = compose!(mapping(|x: i32| -x));

    let xf = pipeline.apply(Reducer::new(Vec::new(), push));

    assert_eq!(run(xf, &[1]), vec![-1]);
}

#[test]
fn test_stage_on_runtime_tagged_target() {
    // Arrange
    type Terminal = Reducer<Vec<i32>, fn(Vec<i32>, i32) -> Vec<i32>>;
    let terminal: Terminal = Reducer::new(Vec::new(), push as fn(Vec<i32>, i32) -> Vec<i32>);
    let target: Target<Terminal, Terminal> = Target::Transformer(terminal);

    // Act
    let mapped = mapping(|x: i32| x + 1).apply(target);

    // Assert
    assert_eq!(mapped.kind(), TargetKind::Transformer);
    let xf = mapped.into_transformer().expect("transformer branch");
    assert_eq!(run(xf, &[1, 2]), vec![2, 3]);
}
