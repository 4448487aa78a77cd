//! Per-request cancellation and deadlines.
//!
//! Every operation takes a [`RequestContext`]. The context is checked before
//! any I/O starts and is raced against the network exchange, so a cancelled
//! or expired request returns [`TransportError::Cancelled`] or
//! [`TransportError::DeadlineExceeded`] instead of waiting on the server.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use gocd::RequestContext;
//!
//! let (ctx, cancel) = RequestContext::background()
//!     .with_timeout(Duration::from_secs(10))
//!     .with_cancel();
//!
//! // Elsewhere: cancel.cancel();
//! let groups = client.pipeline_groups().list(&ctx, "").await?;
//! ```

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use crate::clients::TransportError;

/// Cancellation signal and optional deadline for one logical operation.
///
/// Cloning a context shares its cancellation signal.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

/// Handle that cancels every [`RequestContext`] derived from it.
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    /// Signals cancellation. Calling this more than once has no further effect.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }
}

impl RequestContext {
    /// A context that is never cancelled and has no deadline.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Returns a copy of this context whose deadline is at most `timeout` from now.
    ///
    /// An earlier existing deadline is kept.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Returns a copy of this context with the given deadline.
    ///
    /// An earlier existing deadline is kept.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(self.deadline.map_or(deadline, |current| current.min(deadline)));
        self
    }

    /// Returns a cancellable copy of this context and the handle that cancels it.
    ///
    /// The new handle replaces any cancellation signal the context already carried.
    #[must_use]
    pub fn with_cancel(mut self) -> (Self, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        self.cancel = Some(receiver);
        (self, CancelHandle { sender })
    }

    /// Returns the deadline, if one is set.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` if the context has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|receiver| *receiver.borrow())
    }

    /// Fails if the context is already cancelled or past its deadline.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Cancelled`] or [`TransportError::DeadlineExceeded`].
    pub fn check(&self) -> Result<(), TransportError> {
        if self.is_cancelled() {
            return Err(TransportError::Cancelled);
        }
        if self.deadline.is_some_and(|deadline| deadline <= Instant::now()) {
            return Err(TransportError::DeadlineExceeded);
        }
        Ok(())
    }

    /// Runs `future` until it completes, the context is cancelled, or the
    /// deadline passes, whichever happens first.
    ///
    /// `future` is not polled at all if the context is already done.
    ///
    /// # Errors
    ///
    /// Returns the future's own error, or [`TransportError::Cancelled`] /
    /// [`TransportError::DeadlineExceeded`] if it was interrupted.
    pub async fn run<F, T>(&self, future: F) -> Result<T, TransportError>
    where
        F: Future<Output = Result<T, TransportError>>,
    {
        self.check()?;

        let cancelled = Self::cancelled(self.cancel.clone());
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = cancelled => Err(TransportError::Cancelled),
            () = expired => Err(TransportError::DeadlineExceeded),
            result = future => result,
        }
    }

    /// Resolves once the signal flips to `true`; never resolves without one.
    async fn cancelled(receiver: Option<watch::Receiver<bool>>) {
        let Some(mut receiver) = receiver else {
            return std::future::pending().await;
        };

        loop {
            let is_cancelled = *receiver.borrow_and_update();
            if is_cancelled {
                return;
            }
            if receiver.changed().await.is_err() {
                // Handle dropped without cancelling.
                return std::future::pending().await;
            }
        }
    }
}
