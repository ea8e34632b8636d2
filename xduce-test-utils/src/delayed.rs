// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Asynchronous sources that suspend on a tokio timer before every element.

use std::time::Duration;

use futures::{stream, Stream, StreamExt};
use tokio::time::sleep;
use xduce_seq::AsyncSeq;

/// Yields `items` in order, sleeping `delay_ms` before each one.
pub fn delayed_stream<T>(items: Vec<T>, delay_ms: u64) -> impl Stream<Item = T> + Send
where
    T: Send + 'static,
{
    stream::iter(items).then(move |item| async move {
        sleep(Duration::from_millis(delay_ms)).await;
        item
    })
}

/// A re-iterable sequence over `items` whose every pull suspends for `delay_ms`.
pub fn delayed<T>(items: Vec<T>, delay_ms: u64) -> AsyncSeq<T>
where
    T: Clone + Send + Sync + 'static,
{
    AsyncSeq::new(move || delayed_stream(items.clone(), delay_ms))
}
