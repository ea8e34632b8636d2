// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{self, BoxStream, LocalBoxStream};
use futures::Stream;

/// A value that can be walked as an asynchronous source.
///
/// Asynchronous drivers and the asynchronous `chain` step accept anything implementing
/// this trait: lazy async sequences, synchronous sequences (each element is ready
/// immediately), plain vectors and boxed streams.
pub trait AsyncSource {
    /// The type of items produced.
    type Item;
    /// The stream type this source turns into.
    type Stream: Stream<Item = Self::Item>;

    /// Starts one iteration process over the source.
    fn into_stream(self) -> Self::Stream;
}

impl<T> AsyncSource for Vec<T> {
    type Item = T;
    type Stream = stream::Iter<std::vec::IntoIter<T>>;

    fn into_stream(self) -> Self::Stream {
        stream::iter(self)
    }
}

impl<I: Iterator> AsyncSource for stream::Iter<I> {
    type Item = I::Item;
    type Stream = Self;

    fn into_stream(self) -> Self::Stream {
        self
    }
}

impl<'a, T> AsyncSource for BoxStream<'a, T> {
    type Item = T;
    type Stream = Self;

    fn into_stream(self) -> Self::Stream {
        self
    }
}

impl<'a, T> AsyncSource for LocalBoxStream<'a, T> {
    type Item = T;
    type Stream = Self;

    fn into_stream(self) -> Self::Stream {
        self
    }
}
