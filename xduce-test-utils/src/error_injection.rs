// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sources that fail part-way through.
//!
//! Failures are modelled as `Err` items, the way fallible sources surface them to the
//! `try_*` drivers in `xduce-exec`.

use core::pin::Pin;
use core::task::{Context, Poll};

use futures::Stream;
use pin_project::pin_project;

/// The failure injected by this module's sources.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("injected failure at position {position}")]
pub struct TestError {
    /// Zero-based position of the failing item.
    pub position: usize,
}

/// Wraps `items` as `Ok` values, replacing the item at `fail_at` with a [`TestError`].
///
/// ```rust
/// use xduce_test_utils::{failing_items, TestError};
///
/// let items = failing_items(vec![1, 2, 3], 1);
/// assert_eq!(items, vec![Ok(1), Err(TestError { position: 1 }), Ok(3)]);
/// ```
pub fn failing_items<T>(items: Vec<T>, fail_at: usize) -> Vec<Result<T, TestError>> {
    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| {
            if position == fail_at {
                Err(TestError { position })
            } else {
                Ok(item)
            }
        })
        .collect()
}

/// A stream wrapper that injects a [`TestError`] once, at a given position.
///
/// Every item of the inner stream is passed through as `Ok`; the injected error is an
/// extra item, so no inner item is lost.
///
/// # Examples
///
/// ```rust
/// use futures::{stream, StreamExt};
/// use xduce_test_utils::{ErrorInjectingStream, TestError};
///
/// # async fn example() {
/// let items: Vec<_> = ErrorInjectingStream::new(stream::iter(vec![1, 2]), 1)
///     .collect()
///     .await;
///
/// assert_eq!(items, vec![Ok(1), Err(TestError { position: 1 }), Ok(2)]);
/// # }
/// ```
#[pin_project]
#[derive(Debug)]
pub struct ErrorInjectingStream<S> {
    #[pin]
    inner: S,
    inject_error_at: Option<usize>,
    count: usize,
}

impl<S> ErrorInjectingStream<S> {
    /// Wraps `inner`, injecting the error as the item at `inject_error_at` (0-indexed).
    pub fn new(inner: S, inject_error_at: usize) -> Self {
        Self {
            inner,
            inject_error_at: Some(inject_error_at),
            count: 0,
        }
    }
}

impl<S: Stream> Stream for ErrorInjectingStream<S> {
    type Item = Result<S::Item, TestError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if *this.inject_error_at == Some(*this.count) {
            *this.inject_error_at = None;
            let position = *this.count;
            *this.count += 1;
            return Poll::Ready(Some(Err(TestError { position })));
        }

        match this.inner.poll_next(cx) {
            Poll::Ready(Some(item)) => {
                *this.count += 1;
                Poll::Ready(Some(Ok(item)))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{stream, StreamExt};

    #[tokio::test]
    async fn test_error_injection_at_start() {
        let mut items = ErrorInjectingStream::new(stream::iter(vec![7]), 0);

        // Position 0: injected error
        assert_eq!(items.next().await, Some(Err(TestError { position: 0 })));

        // Position 1: the inner value
        assert_eq!(items.next().await, Some(Ok(7)));
        assert_eq!(items.next().await, None);
    }

    #[tokio::test]
    async fn test_error_injection_past_end_never_fires() {
        let items: Vec<_> = ErrorInjectingStream::new(stream::iter(vec![1, 2]), 5)
            .collect()
            .await;

        assert_eq!(items, vec![Ok(1), Ok(2)]);
    }
}
