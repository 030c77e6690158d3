//! Periodic status refresh.
//!
//! The board does not run its own thread. A [`StatusTicker`] owns a tokio
//! interval and drives [`ScheduleBoard::refresh_status`] from the caller's
//! task until a shutdown future resolves or the callback breaks. Dropping
//! the ticker drops the interval, so no refresh can fire after teardown.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::debug;

use crate::board::ScheduleBoard;
use crate::clock::TimeOfDay;
use crate::events::Event;

/// Default refresh period.
pub const DEFAULT_REFRESH: Duration = Duration::from_secs(60);

pub struct StatusTicker {
    interval: Interval,
    clock: fn() -> TimeOfDay,
}

impl StatusTicker {
    /// Ticker firing every `period`, starting one period from now.
    /// A zero period is treated as one second.
    pub fn new(period: Duration) -> Self {
        let period = if period.is_zero() {
            Duration::from_secs(1)
        } else {
            period
        };
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            interval,
            clock: TimeOfDay::now_local,
        }
    }

    /// Replace the wall-clock source used for each tick.
    pub fn with_clock(mut self, clock: fn() -> TimeOfDay) -> Self {
        self.clock = clock;
        self
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    /// Wait for the next tick and re-stamp the board.
    pub async fn tick(&mut self, board: &mut ScheduleBoard) -> Event {
        self.interval.tick().await;
        board.refresh_status((self.clock)())
    }

    /// Refresh `board` on every tick until `shutdown` resolves or
    /// `on_refresh` returns `Break`. Returns the number of ticks handled.
    pub async fn run<S, F>(
        &mut self,
        board: &mut ScheduleBoard,
        shutdown: S,
        mut on_refresh: F,
    ) -> usize
    where
        S: Future<Output = ()>,
        F: FnMut(&ScheduleBoard, &Event) -> ControlFlow<()>,
    {
        tokio::pin!(shutdown);
        let mut ticks = 0;
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    debug!(ticks, "status ticker shut down");
                    break;
                }
                event = self.tick(board) => {
                    ticks += 1;
                    if on_refresh(board, &event).is_break() {
                        debug!(ticks, "status ticker stopped by caller");
                        break;
                    }
                }
            }
        }
        ticks
    }
}
