//! Cancellation signal for running `pdfimages`.
//!
//! A [`CancelToken`] is cheap to clone; all clones share the same flag, so one thread can
//! cancel a run that another thread is blocked in. A token may also carry a deadline, after
//! which it counts as expired without anyone calling [`CancelToken::cancel`].
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::Error;

#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    deadline: Option<(Instant, Duration)>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token that expires `timeout` from now. A timeout too large to represent as an
    /// `Instant` never expires.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Instant::now()
                .checked_add(timeout)
                .map(|at| (at, timeout)),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn is_expired(&self) -> bool {
        self.deadline
            .map(|(at, _)| Instant::now() >= at)
            .unwrap_or(false)
    }

    /// Time left before the deadline, if there is one.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|(at, _)| at.saturating_duration_since(Instant::now()))
    }

    /// The error a run should return right now, or `None` to keep waiting.
    /// Explicit cancellation wins over an expired deadline.
    pub(crate) fn interruption(&self) -> Option<Error> {
        if self.is_cancelled() {
            return Some(Error::Cancelled);
        }
        match self.deadline {
            Some((at, timeout)) if Instant::now() >= at => Some(Error::TimedOut { timeout }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_not_interrupted() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        assert!(!token.is_expired());
        assert!(token.remaining().is_none());
        assert!(token.interruption().is_none());
    }

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let other = token.clone();
        other.cancel();
        assert!(token.is_cancelled());
        assert!(matches!(token.interruption(), Some(Error::Cancelled)));
    }

    #[test]
    fn zero_timeout_is_expired_immediately() {
        let token = CancelToken::with_timeout(Duration::ZERO);
        assert!(token.is_expired());
        assert!(matches!(
            token.interruption(),
            Some(Error::TimedOut { timeout }) if timeout == Duration::ZERO
        ));
    }

    #[test]
    fn cancel_wins_over_deadline() {
        let token = CancelToken::with_timeout(Duration::ZERO);
        token.cancel();
        assert!(matches!(token.interruption(), Some(Error::Cancelled)));
    }

    #[test]
    fn unrepresentable_timeout_never_expires() {
        let token = CancelToken::with_timeout(Duration::MAX);
        assert!(!token.is_expired());
        assert!(token.interruption().is_none());

        let token = CancelToken::with_timeout(Duration::from_secs(u64::MAX));
        assert!(token.interruption().is_none());
        token.cancel();
        assert!(matches!(token.interruption(), Some(Error::Cancelled)));
    }

    #[test]
    fn long_timeout_has_time_left() {
        let token = CancelToken::with_timeout(Duration::from_secs(3600));
        assert!(!token.is_expired());
        assert!(token.remaining().unwrap() > Duration::from_secs(3500));
    }
}
