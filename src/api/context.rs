//
//  atlassian-client
//  api/context.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Per-call cancellation and deadline scope.
//!
//! Every request is bound to a [`RequestContext`]. Cancelling the context,
//! or letting its deadline pass, aborts the in-flight transport call and the
//! body read. Contexts are cheap to clone; clones share the same token.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::api::transport::TransportError;

/// Cancellation token plus optional deadline for one or more calls.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use atlassian_client::api::RequestContext;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let ctx = RequestContext::background().with_timeout(Duration::from_secs(10));
/// assert!(!ctx.is_cancelled());
///
/// ctx.cancel();
/// assert!(ctx.is_cancelled());
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Wraps an existing cancellation token.
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Returns a copy whose deadline is `timeout` from now.
    ///
    /// An earlier deadline that is already set is kept.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Returns a copy with the given deadline, keeping an earlier one.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        });
        self
    }

    /// A child context: cancelled with its parent, cancellable on its own.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Cancels this context and every child.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether this context has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// The deadline, if one was set.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drives `fut` until it completes, the context is cancelled or the
    /// deadline passes, whichever happens first.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, TransportError>
    where
        F: Future<Output = Result<T, TransportError>>,
    {
        let guarded = async {
            tokio::select! {
                biased;
                _ = self.token.cancelled() => Err(TransportError::Cancelled),
                out = fut => out,
            }
        };

        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, guarded)
                .await
                .unwrap_or(Err(TransportError::DeadlineExceeded)),
            None => guarded.await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_completes() {
        let ctx = RequestContext::background();
        let out = ctx.run(async { Ok::<_, TransportError>(7) }).await.unwrap();
        assert_eq!(out, 7);
    }

    #[tokio::test]
    async fn test_run_cancelled() {
        let ctx = RequestContext::background();
        ctx.cancel();

        let result = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok::<_, TransportError>(())
            })
            .await;

        assert!(matches!(result, Err(TransportError::Cancelled)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_deadline() {
        let ctx = RequestContext::background().with_timeout(Duration::from_millis(50));

        let result = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok::<_, TransportError>(())
            })
            .await;

        assert!(matches!(result, Err(TransportError::DeadlineExceeded)));
    }

    #[test]
    fn test_cancel_wakes_pending_call() {
        let ctx = RequestContext::background();
        let handle = ctx.clone();

        let mut call = tokio_test::task::spawn(ctx.run(std::future::pending::<Result<(), TransportError>>()));
        tokio_test::assert_pending!(call.poll());

        handle.cancel();
        assert!(call.is_woken());
        let result = tokio_test::assert_ready!(call.poll());
        assert!(matches!(result, Err(TransportError::Cancelled)));
    }

    #[test]
    fn test_child_follows_parent() {
        let parent = RequestContext::background();
        let child = parent.child();

        child.cancel();
        assert!(!parent.is_cancelled());

        let other = parent.child();
        parent.cancel();
        assert!(other.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_earlier_deadline_wins() {
        let ctx = RequestContext::background()
            .with_timeout(Duration::from_secs(1))
            .with_timeout(Duration::from_secs(60));

        let remaining = ctx.deadline().unwrap() - Instant::now();
        assert!(remaining <= Duration::from_secs(1));
    }
}
