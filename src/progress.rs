//! Decorative progress shown while a turn is in flight.
//!
//! The value is not tied to real work: it creeps forward on a timer and
//! stops at [`PROGRESS_CAP`] until the turn completes.

use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

pub const PROGRESS_CAP: f32 = 90.0;
pub const PROGRESS_DONE: f32 = 100.0;
const TICK: Duration = Duration::from_millis(300);
const MAX_STEP: f32 = 15.0;

/// Shared progress value observed by the view
#[derive(Clone)]
pub struct Progress {
    tx: Arc<watch::Sender<f32>>,
}

impl Progress {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0.0);
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<f32> {
        self.tx.subscribe()
    }

    pub fn value(&self) -> f32 {
        *self.tx.borrow()
    }

    /// Clear a finished value once the view has shown it
    pub fn reset(&self) {
        self.tx.send_replace(0.0);
    }

    /// Reset to zero and start advancing on the timer
    pub fn start(&self) -> ProgressTicker {
        self.tx.send_replace(0.0);

        let tx = Arc::clone(&self.tx);
        let handle = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + TICK, TICK);
            loop {
                ticks.tick().await;
                let step = rand::rng().random_range(0.0..MAX_STEP);
                tx.send_modify(|value| {
                    if *value < PROGRESS_CAP {
                        *value = (*value + step).min(PROGRESS_CAP);
                    }
                });
            }
        });

        ProgressTicker {
            tx: Arc::clone(&self.tx),
            handle,
            finished: false,
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

/// Running timer; stops when dropped and resets the value unless finished
pub struct ProgressTicker {
    tx: Arc<watch::Sender<f32>>,
    handle: JoinHandle<()>,
    finished: bool,
}

impl ProgressTicker {
    /// Mark the turn as complete; the value stays at 100 until [`Progress::reset`]
    pub fn finish(mut self) {
        self.handle.abort();
        self.finished = true;
        self.tx.send_replace(PROGRESS_DONE);
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.handle.abort();
        if !self.finished {
            self.tx.send_replace(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn value_stops_at_cap() {
        let progress = Progress::new();
        let _ticker = progress.start();

        tokio::time::sleep(Duration::from_secs(60)).await;
        tokio::task::yield_now().await;

        assert_eq!(progress.value(), PROGRESS_CAP);
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_moves_before_first_tick() {
        let progress = Progress::new();
        let _ticker = progress.start();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(progress.value(), 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn finishing_holds_done_until_reset() {
        let progress = Progress::new();
        let mut rx = progress.subscribe();
        let ticker = progress.start();

        tokio::time::sleep(Duration::from_secs(1)).await;
        ticker.finish();

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), PROGRESS_DONE);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(!rx.has_changed().unwrap());
        assert_eq!(progress.value(), PROGRESS_DONE);

        progress.reset();
        assert_eq!(*rx.borrow_and_update(), 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_unfinished_ticker_resets() {
        let progress = Progress::new();
        let ticker = progress.start();

        tokio::time::sleep(Duration::from_secs(2)).await;
        drop(ticker);

        assert_eq!(progress.value(), 0.0);
    }
}
