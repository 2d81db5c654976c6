//! Single-shot delivery of a spawned request.
//!
//! A [`Reply`] runs a request on the tokio runtime and delivers exactly one
//! terminal item: the decoded value or the error. After that the reply is
//! complete.
//!
//! # Examples
//!
//! ```ignore
//! use taxii2_client::client::Reply;
//!
//! let server = conn.server();
//! let reply = Reply::spawn(async move { server.discovery().await });
//!
//! // Await it as a future...
//! let discovery = reply.await?;
//! ```
//!
//! ```ignore
//! use futures::StreamExt;
//!
//! // ...or poll it as a stream of one item.
//! let mut reply = Reply::spawn(async move { server.discovery().await });
//! while let Some(result) = reply.next().await {
//!     println!("{:?}", result);
//! }
//! ```

use crate::error::{Result, TaxiiError};
use futures::Stream;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Handle to the single result of a spawned request.
///
/// Usable as a `Future` resolving to `Result<T>` or as a `Stream` yielding one
/// item then ending. If the task is lost before answering, the reply
/// resolves to [`TaxiiError::Unknown`].
#[derive(Debug)]
pub struct Reply<T> {
    receiver: oneshot::Receiver<Result<T>>,
    done: bool,
}

impl<T: Send + 'static> Reply<T> {
    /// Spawn `request` on the current tokio runtime.
    pub fn spawn<F>(request: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            // Receiver dropped means nobody wants the answer.
            let _ = tx.send(request.await);
        });
        Reply::new(rx)
    }
}

impl<T> Reply<T> {
    /// Reply fed by an existing channel.
    pub fn new(receiver: oneshot::Receiver<Result<T>>) -> Self {
        Reply {
            receiver,
            done: false,
        }
    }

    /// True once the terminal item has been delivered through the stream.
    pub fn is_terminated(&self) -> bool {
        self.done
    }
}

impl<T> Future for Reply<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(result) => {
                self.done = true;
                Poll::Ready(result.unwrap_or(Err(TaxiiError::Unknown)))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T> Stream for Reply<T> {
    type Item = Result<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.done {
            return Poll::Ready(None);
        }
        Future::poll(self, cx).map(Some)
    }
}
