// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use xduce_seq::AsyncSeq;

/// A test channel that combines the sender and the receiving stream into one struct.
pub struct TestChannel<T> {
    pub sender: mpsc::UnboundedSender<T>,
    pub stream: UnboundedReceiverStream<T>,
}

impl<T> TestChannel<T> {
    /// Creates a new test channel with unbounded capacity.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let stream = UnboundedReceiverStream::new(receiver);
        Self { sender, stream }
    }

    /// Send a value through the channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the receiver has been dropped.
    pub fn send(&self, value: T) -> Result<(), mpsc::error::SendError<T>> {
        self.sender.send(value)
    }

    /// Splits the channel into its sender and a single-use sequence over the receiver.
    pub fn into_seq(self) -> (mpsc::UnboundedSender<T>, AsyncSeq<T>)
    where
        T: Send + 'static,
    {
        (self.sender, AsyncSeq::once(self.stream))
    }
}

impl<T> Default for TestChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}
