//! Timer driven slider advance.
//!
//! The task only holds the shared cursor, never the application state, so
//! dropping the [`AutoplayHandle`] together with the state stops it.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use dara_holiday_catalog::CarouselCursor;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Cursor shared between the autoplay task and request handlers.
#[derive(Clone, Debug)]
pub struct SharedCursor(Arc<Mutex<CarouselCursor>>);

impl SharedCursor {
    #[must_use]
    pub fn new(cursor: CarouselCursor) -> Self {
        Self(Arc::new(Mutex::new(cursor)))
    }

    #[must_use]
    pub fn get(&self) -> CarouselCursor {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn advance(&self) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).next();
    }
}

pub struct AutoplayHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl AutoplayHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for AutoplayHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

pub struct Autoplay;

impl Autoplay {
    /// Advances `cursor` every `interval`, starting one interval from now.
    /// Must be called inside a tokio runtime.
    #[must_use]
    pub fn spawn(cursor: SharedCursor, interval: Duration) -> AutoplayHandle {
        let token = CancellationToken::new();

        let task = tokio::spawn({
            let token = token.clone();
            async move {
                let mut ticker = interval_at(Instant::now() + interval, interval);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    tokio::select! {
                        () = token.cancelled() => break,
                        _ = ticker.tick() => cursor.advance(),
                    }
                }
                trace!("autoplay stopped");
            }
        });

        AutoplayHandle { token, task }
    }
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroUsize;

    use super::*;

    const INTERVAL: Duration = Duration::from_millis(3000);

    fn cursor(len: usize) -> SharedCursor {
        SharedCursor::new(CarouselCursor::new(NonZeroUsize::new(len).unwrap()))
    }

    async fn advance_by(duration: Duration) {
        tokio::time::advance(duration).await;
        // let the ticker task observe the new time
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn advances_and_wraps() {
        let cursor = cursor(3);
        let _handle = Autoplay::spawn(cursor.clone(), INTERVAL);
        tokio::task::yield_now().await;
        assert_eq!(cursor.get().index(), 0);

        for expected in [1, 2, 0, 1] {
            advance_by(INTERVAL).await;
            assert_eq!(cursor.get().index(), expected);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels() {
        let cursor = cursor(4);
        let handle = Autoplay::spawn(cursor.clone(), INTERVAL);
        let token = handle.token.clone();
        drop(handle);
        assert!(token.is_cancelled());

        advance_by(INTERVAL * 2).await;
        assert_eq!(cursor.get().index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_finishes_task() {
        let cursor = cursor(2);
        let handle = Autoplay::spawn(cursor, INTERVAL);
        handle.cancel();
        assert!(handle.is_cancelled());
        for _ in 0..10 {
            if handle.is_finished() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(handle.is_finished());
    }
}
