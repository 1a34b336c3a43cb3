//! Cooperative Step Loop
//!
//! A single-threaded task queue for spreading long-running enumerations
//! across many discrete turns instead of one continuous synchronous
//! pass. Each spawned [`Stepper`] performs one bounded unit of work per
//! turn and fully unwinds before the next turn runs, so work spawned on
//! the same loop interleaves at turn boundaries.
//!
//! This is a different mechanism from the trampoline driver in
//! [`crate::trampoline`]: the loop does not unwrap return values, it
//! round-robins its queue. Both bound stack depth; only this one yields
//! control between units of work.
//!
//! There is no cancellation: a spawned stepper runs every turn to
//! completion. Yield points are explicit in the [`Turn`] protocol, so
//! ordering across turns is deterministic and testable without timing
//! assertions.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::trace;

// ---------------------------------------------------------------------------
// Stepper
// ---------------------------------------------------------------------------

/// Outcome of running one unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// More work remains; requeue the stepper for another turn.
    Yield,
    /// The stepper has finished; retire it.
    Done,
}

/// A unit of deferred, resumable work.
///
/// Each call to `step` must complete one bounded unit of work and
/// return. State lives in the stepper itself, not on the call stack.
pub trait Stepper {
    /// Perform one unit of work.
    fn step(&mut self) -> Turn;
}

/// A stepper queued on the loop, with its task id.
struct QueuedStepper {
    id: u64,
    stepper: Box<dyn Stepper>,
}

// ---------------------------------------------------------------------------
// StepLoop
// ---------------------------------------------------------------------------

/// Runtime statistics for the step loop.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepLoopStats {
    /// Total turns executed across all steppers
    pub total_turns: u64,
    /// Total steppers ever spawned
    pub total_spawned: u64,
    /// Total steppers retired after returning [`Turn::Done`]
    pub total_retired: u64,
    /// Largest queue length observed
    pub max_queue_depth: usize,
}

/// Result of driving the loop to completion via [`StepLoop::run_to_completion`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Turns executed during this run
    pub turns: u64,
    /// Steppers retired during this run
    pub retired: u64,
}

/// The cooperative task queue: FIFO of spawned steppers, round-robin
/// interleaving, one logical thread of control.
pub struct StepLoop {
    /// Ready queue, in turn order
    queue: VecDeque<QueuedStepper>,
    /// Next task id
    next_id: u64,
    /// Runtime statistics
    stats: StepLoopStats,
}

impl Default for StepLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl StepLoop {
    /// Create an empty step loop.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            next_id: 1,
            stats: StepLoopStats::default(),
        }
    }

    /// Enqueue a stepper, returning its task id.
    pub fn spawn(&mut self, stepper: impl Stepper + 'static) -> u64 {
        self.spawn_boxed(Box::new(stepper))
    }

    /// Enqueue an already-boxed stepper, returning its task id.
    pub fn spawn_boxed(&mut self, stepper: Box<dyn Stepper>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.queue.push_back(QueuedStepper { id, stepper });
        self.stats.total_spawned += 1;
        if self.queue.len() > self.stats.max_queue_depth {
            self.stats.max_queue_depth = self.queue.len();
        }
        id
    }

    /// Check if any steppers are queued.
    pub fn has_pending_work(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Number of queued steppers.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Run exactly one turn: pop the front stepper, step it once, and
    /// either requeue or retire it. Returns `false` if the queue was
    /// empty and nothing ran.
    pub fn tick(&mut self) -> bool {
        let Some(mut task) = self.queue.pop_front() else {
            return false;
        };

        self.stats.total_turns += 1;
        match task.stepper.step() {
            Turn::Yield => {
                trace!(task = task.id, "turn yielded");
                self.queue.push_back(task);
            }
            Turn::Done => {
                trace!(task = task.id, "stepper retired");
                self.stats.total_retired += 1;
            }
        }
        true
    }

    /// Drive turns until the queue is empty.
    pub fn run_to_completion(&mut self) -> RunReport {
        let mut report = RunReport::default();
        let retired_before = self.stats.total_retired;

        while self.tick() {
            report.turns += 1;
        }

        report.retired = self.stats.total_retired - retired_before;
        report
    }

    /// Get a snapshot of the loop statistics.
    pub fn stats(&self) -> StepLoopStats {
        self.stats.clone()
    }

    /// Reset all loop statistics to zero.
    pub fn reset_stats(&mut self) {
        self.stats = StepLoopStats::default();
    }
}
