//! Cancellable periodic tasks driven by the event loop.

use std::time::{Duration, Instant};

/// Identifies a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Periodic<T> {
    handle: TaskHandle,
    period: Duration,
    next_due: Instant,
    task: T,
}

/// Owns periodic tasks and reports which ones are due.
///
/// Time is passed in by the caller, so nothing fires on its own.
#[derive(Debug)]
pub struct Scheduler<T> {
    tasks: Vec<Periodic<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `task` every `period`, first at `now + period`.
    pub fn every(&mut self, period: Duration, task: T, now: Instant) -> TaskHandle {
        let period = period.max(Duration::from_millis(1));
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.push(Periodic {
            handle,
            period,
            next_due: now + period,
            task,
        });
        handle
    }

    /// Stop a task. Returns `false` if it was not active.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|periodic| periodic.handle != handle);
        self.tasks.len() != before
    }

    #[cfg(test)]
    pub fn is_active(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|periodic| periodic.handle == handle)
    }

    /// Earliest pending deadline, if any task is active.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.iter().map(|periodic| periodic.next_due).min()
    }

    /// Collect every firing due by `now`, in deadline order.
    ///
    /// A task that is several periods late fires once per missed period.
    pub fn due(&mut self, now: Instant) -> Vec<T> {
        let mut fired = Vec::new();
        for periodic in &mut self.tasks {
            while periodic.next_due <= now {
                fired.push((periodic.next_due, periodic.task.clone()));
                periodic.next_due += periodic.period;
            }
        }
        fired.sort_by_key(|(deadline, _)| *deadline);
        fired.into_iter().map(|(_, task)| task).collect()
    }
}
