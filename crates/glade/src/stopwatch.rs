//! Start/pause/reset stopwatch counting whole seconds.

use std::time::{Duration, Instant};

use glade_fonts::format_elapsed;

use crate::scheduler::{Scheduler, TaskHandle};

/// Work the event loop runs on a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Add one second to the stopwatch.
    Tick,
    /// Show the next quote.
    RotateQuote,
}

/// Elapsed-time counter with its scheduled tasks.
#[derive(Debug)]
pub struct Stopwatch {
    seconds: u64,
    tick_period: Duration,
    quote_period: Duration,
    tick: Option<TaskHandle>,
    rotation: Option<TaskHandle>,
}

impl Stopwatch {
    pub fn new(tick_period: Duration, quote_period: Duration) -> Self {
        Self {
            seconds: 0,
            tick_period,
            quote_period,
            tick: None,
            rotation: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.tick.is_some()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.seconds
    }

    /// `MM:SS` readout.
    pub fn display(&self) -> String {
        format_elapsed(self.seconds)
    }

    /// Schedule ticks and quote rotation.
    ///
    /// Returns `false` without scheduling anything if already running.
    pub fn start(&mut self, scheduler: &mut Scheduler<Task>, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        self.tick = Some(scheduler.every(self.tick_period, Task::Tick, now));
        self.rotation = Some(scheduler.every(self.quote_period, Task::RotateQuote, now));
        log::debug!("stopwatch started at {}", self.display());
        true
    }

    /// Cancel ticks and quote rotation, keeping the count.
    pub fn pause(&mut self, scheduler: &mut Scheduler<Task>) {
        if !self.is_running() {
            return;
        }
        for handle in [self.tick.take(), self.rotation.take()].into_iter().flatten() {
            scheduler.cancel(handle);
        }
        log::debug!("stopwatch paused at {}", self.display());
    }

    /// Pause and return to zero.
    pub fn reset(&mut self, scheduler: &mut Scheduler<Task>) {
        self.pause(scheduler);
        self.seconds = 0;
        log::debug!("stopwatch reset");
    }

    /// Count one elapsed second.
    pub fn tick(&mut self) {
        self.seconds += 1;
    }
}
