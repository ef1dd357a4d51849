//! Timed automatic stepping.
//!
//! The scheduler does not sleep or spawn anything. The event loop asks it for
//! [`PlaybackScheduler::next_deadline`], waits until then, and calls
//! [`PlaybackScheduler::poll`] to learn how many steps are due. Each tick is
//! scheduled one interval after the previous deadline, not after the poll,
//! so late wake-ups do not push later ticks back. A wake-up that finds more
//! than [`MAX_CATCH_UP_STEPS`] ticks overdue (the machine slept, say) runs
//! only that many and restarts the interval from the poll.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

pub const MIN_SPEED_MS: u64 = 500;
pub const MAX_SPEED_MS: u64 = 1000;
pub const DEFAULT_SPEED_MS: u64 = 500;
/// Most steps a single poll will report.
pub const MAX_CATCH_UP_STEPS: u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Ticker {
    interval: Duration,
    next_at: Instant,
}

impl Ticker {
    fn start(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_at: now + interval,
        }
    }
}

/// Paused until told otherwise. While playing there is exactly one ticker;
/// pausing or changing speed drops it before anything new is armed.
#[derive(Debug)]
pub struct PlaybackScheduler {
    speed_ms: u64,
    ticker: Option<Ticker>,
}

impl Default for PlaybackScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED_MS)
    }
}

impl PlaybackScheduler {
    pub fn new(speed_ms: u64) -> Self {
        Self {
            speed_ms,
            ticker: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    /// When the next step is due, if playing.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticker.map(|t| t.next_at)
    }

    /// Flips between playing and paused and returns the new state.
    /// `on_play` runs before the first tick is armed.
    pub fn toggle_play_pause(&mut self, now: Instant, on_play: impl FnOnce()) -> bool {
        if self.is_playing() {
            self.cancel();
            info!("paused");
        } else {
            on_play();
            self.schedule(now);
            info!("playing every {} ms", self.speed_ms);
        }
        self.is_playing()
    }

    pub fn handle_speed_change(&mut self, speed_ms: u64, now: Instant) {
        if speed_ms == self.speed_ms {
            return;
        }
        self.speed_ms = speed_ms;
        if self.is_playing() {
            self.cancel();
            self.schedule(now);
        }
    }

    /// Counts the ticks that have come due by `now` and advances past them,
    /// reporting at most [`MAX_CATCH_UP_STEPS`].
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(ticker) = self.ticker.as_mut() else {
            return 0;
        };
        let mut due = 0;
        while ticker.next_at <= now {
            if due == MAX_CATCH_UP_STEPS {
                warn!("playback fell behind, skipping overdue steps");
                ticker.next_at = now + ticker.interval;
                break;
            }
            ticker.next_at += ticker.interval;
            due += 1;
        }
        due
    }

    fn schedule(&mut self, now: Instant) {
        debug_assert!(self.ticker.is_none());
        let interval = Duration::from_millis(self.speed_ms.max(1));
        debug!("ticker armed at {:?}", interval);
        self.ticker = Some(Ticker::start(interval, now));
    }

    fn cancel(&mut self) {
        if self.ticker.take().is_some() {
            debug!("ticker cancelled");
        }
    }
}
