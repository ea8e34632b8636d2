// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{self, StreamExt};
use futures::FutureExt;
use xduce_core::{chain, filter, make_async_step, map, AsyncStep, Reducer, Transformer};

fn push(mut acc: Vec<i32>, x: i32) -> Vec<i32> {
    acc.push(x);
    acc
}

async fn drive<X>(xf: &mut X, items: Vec<i32>) -> X::Output
where
    X: AsyncStep<i32>,
{
    let mut acc = xf.init();
    for x in items {
        acc = xf.step(acc, x).await;
    }
    xf.result(acc)
}

#[tokio::test]
async fn test_async_reducer_step() {
    let mut reducer = Reducer::new(Vec::new(), push);

    let seed = reducer.init();
    let acc = reducer.step(seed, 4).await;

    assert_eq!(reducer.result(acc), vec![4]);
}

#[tokio::test]
async fn test_async_map_and_filter_layers() {
    let mut xf = map(
        |x: i32| x * 10,
        filter(|x: &i32| *x > 10, Reducer::new(Vec::new(), push)),
    );

    assert_eq!(drive(&mut xf, vec![1, 2, 3]).await, vec![20, 30]);
}

#[tokio::test]
async fn test_async_chain_layer_accepts_streams() {
    // Arrange
    let mut xf = chain(
        |x: i32| stream::iter(vec![x; x as usize]).boxed(),
        Reducer::new(Vec::new(), push),
    );

    // Act
    let result = drive(&mut xf, vec![2, 0, 1]).await;

    // Assert
    assert_eq!(result, vec![2, 2, 1]);
}

#[tokio::test]
async fn test_async_chain_layer_accepts_vectors() {
    let mut xf = chain(|x: i32| vec![x, -x], Reducer::new(Vec::new(), push));

    assert_eq!(drive(&mut xf, vec![1, 2]).await, vec![1, -1, 2, -2]);
}

#[tokio::test]
async fn test_async_composed_layers_match_scenario() {
    let mut xf = map(
        |x: i32| x * 3,
        filter(
            |x: &i32| x % 2 == 1,
            map(
                |x: i32| x - 1,
                chain(|x: i32| vec![x; x as usize], Reducer::new(Vec::new(), push)),
            ),
        ),
    );

    let result = drive(&mut xf, vec![1, 2, 3, 4]).await;

    assert_eq!(result, vec![2, 2, 8, 8, 8, 8, 8, 8, 8, 8]);
}

#[tokio::test]
async fn test_make_async_step_awaits_closure_step() {
    // Arrange
    let terminal = Reducer::new(Vec::new(), push);
    let mut xf = make_async_step(
        terminal,
        |inner: &mut Reducer<Vec<i32>, _>, acc: Vec<i32>, x: i32| {
            async move {
                tokio::task::yield_now().await;
                if x < 0 {
                    acc
                } else {
                    inner.step(acc, x * 2).await
                }
            }
            .boxed_local()
        },
    );

    // Act
    let result = drive(&mut xf, vec![1, -2, 3]).await;

    // Assert
    assert_eq!(result, vec![2, 6]);
}

#[tokio::test]
async fn test_make_async_step_keeps_init_and_result() {
    // Arrange
    let terminal = Reducer::new(vec![0], push);
    let mut xf = make_async_step(
        terminal,
        |_: &mut Reducer<Vec<i32>, _>, acc: Vec<i32>, _: i32| async move { acc }.boxed_local(),
    );

    // Act
    let seed = xf.init();
    let acc = xf.step(seed, 5).await;

    // Assert
    assert_eq!(xf.result(acc), vec![0]);
}
