//! Per-call cancellation and deadlines
//!
//! Every client call takes a [`Context`]. A context fires when its deadline
//! passes or when any [`CancelHandle`] attached to it (or to a parent it was
//! derived from) is triggered. Waiting for a rate-limit permit and the HTTP
//! exchange itself both race against the context.

use crate::error::{Cancelled, Error};
use futures::future::{select_all, FutureExt};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Cancellation scope for a single call (or a group of calls)
#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    signals: Vec<watch::Receiver<bool>>,
}

/// Fires the context it was created with
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Cancel the associated context. Calling this more than once is a no-op.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl Context {
    /// A context that never fires
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a context that also fires after `timeout`
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derive a context that also fires at `deadline`; the earliest deadline wins
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    /// Derive a cancellable context
    #[must_use]
    pub fn with_cancel(mut self) -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        self.signals.push(rx);
        (self, CancelHandle { tx })
    }

    /// The deadline, if one is set
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    fn cancelled_now(&self) -> bool {
        self.signals.iter().any(|rx| *rx.borrow())
    }

    /// Check whether the context has already fired
    pub fn is_done(&self) -> bool {
        self.cancelled_now() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// The error a call should report once this context has fired
    pub fn err(&self) -> Error {
        if self.cancelled_now() {
            Error::Cancelled(Cancelled::Cancelled)
        } else {
            Error::Cancelled(Cancelled::DeadlineExceeded)
        }
    }

    /// Resolve once the context fires. Never resolves for a background context.
    pub async fn done(&self) {
        let deadline = async {
            match self.deadline {
                Some(d) => tokio::time::sleep_until(d).await,
                None => std::future::pending::<()>().await,
            }
        };

        let signalled = async {
            if self.signals.is_empty() {
                return std::future::pending::<()>().await;
            }
            let waiters = self
                .signals
                .iter()
                .cloned()
                .map(|rx| wait_for_cancel(rx).boxed());
            select_all(waiters).await;
        };

        tokio::select! {
            () = deadline => {}
            () = signalled => {}
        }
    }
}

async fn wait_for_cancel(mut rx: watch::Receiver<bool>) {
    // A dropped handle can never cancel.
    let fired = rx.wait_for(|cancelled| *cancelled).await.map(|_| ());
    if fired.is_err() {
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_never_done() {
        let ctx = Context::background();
        assert!(!ctx.is_done());
        assert!(ctx.deadline().is_none());
    }

    #[tokio::test]
    async fn test_cancel_fires() {
        let (ctx, handle) = Context::background().with_cancel();
        assert!(!ctx.is_done());

        handle.cancel();
        handle.cancel();
        assert!(ctx.is_done());
        ctx.done().await;
        assert!(matches!(ctx.err(), Error::Cancelled(Cancelled::Cancelled)));
    }

    #[tokio::test]
    async fn test_child_inherits_parent_cancel() {
        let (parent, handle) = Context::background().with_cancel();
        let (child, _child_handle) = parent.clone().with_cancel();

        handle.cancel();
        assert!(child.is_done());
        child.done().await;
    }

    #[tokio::test]
    async fn test_child_cancel_does_not_fire_parent() {
        let (parent, _handle) = Context::background().with_cancel();
        let (child, child_handle) = parent.clone().with_cancel();

        child_handle.cancel();
        assert!(child.is_done());
        assert!(!parent.is_done());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_fires() {
        let ctx = Context::background().with_timeout(Duration::from_millis(50));
        assert!(!ctx.is_done());

        ctx.done().await;
        assert!(ctx.is_done());
        assert!(matches!(ctx.err(), Error::Cancelled(Cancelled::DeadlineExceeded)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_earliest_deadline_wins() {
        let ctx = Context::background()
            .with_timeout(Duration::from_secs(10))
            .with_timeout(Duration::from_millis(10));
        let deadline = ctx.deadline().unwrap();
        assert!(deadline <= Instant::now() + Duration::from_millis(10));
    }

    #[tokio::test]
    async fn test_dropped_handle_never_fires() {
        let (ctx, handle) = Context::background().with_cancel();
        drop(handle);

        let fired = tokio::time::timeout(Duration::from_millis(20), ctx.done()).await;
        assert!(fired.is_err());
        assert!(!ctx.is_done());
    }
}
