// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts how many times the functions it wraps are invoked.
///
/// Clones share the same count, so a counter can be moved into a pipeline while the
/// test keeps a handle to inspect it.
///
/// ```rust
/// use xduce_test_utils::CallCounter;
///
/// let counter = CallCounter::new();
/// let double = counter.wrap(|x: i32| x * 2);
///
/// assert_eq!(counter.count(), 0);
/// assert_eq!(double(4), 8);
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invocations so far, across every wrapped function.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Wraps a unary function.
    pub fn wrap<T, U, F>(&self, f: F) -> impl Fn(T) -> U + Clone + Send + Sync + 'static
    where
        F: Fn(T) -> U + Clone + Send + Sync + 'static,
    {
        let calls = Arc::clone(&self.calls);
        move |x| {
            calls.fetch_add(1, Ordering::SeqCst);
            f(x)
        }
    }

    /// Wraps a predicate.
    pub fn wrap_pred<T, P>(&self, pred: P) -> impl Fn(&T) -> bool + Clone + Send + Sync + 'static
    where
        P: Fn(&T) -> bool + Clone + Send + Sync + 'static,
    {
        let calls = Arc::clone(&self.calls);
        move |x| {
            calls.fetch_add(1, Ordering::SeqCst);
            pred(x)
        }
    }
}
