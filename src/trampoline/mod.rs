//! Trampoline Evaluation
//!
//! Converts unbounded recursion depth into O(1) call-stack usage. A
//! recursive step function never calls itself directly; it returns a
//! [`Step`] that is either `Done(value)` or `More(thunk)`, and the
//! driving loop ([`run`]) unwraps thunks until the computation lands.
//!
//! The `Done`/`More` tagging is deliberate: dispatch does not depend on
//! the shape of the result, so a computation whose terminal value is
//! itself a closure cannot be mistaken for a pending step.
//!
//! # Example
//!
//! ```
//! use springboard::trampoline::{run_with, Step};
//!
//! fn sum_to(n: u64, acc: u64) -> Step<u64> {
//!     if n == 0 {
//!         Step::Done(acc)
//!     } else {
//!         Step::more(move || sum_to(n - 1, acc + n))
//!     }
//! }
//!
//! assert_eq!(run_with(|(n, acc)| sum_to(n, acc), (100_000, 0)), 5_000_050_000);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Thunk
// ---------------------------------------------------------------------------

/// A zero-argument deferred computation: one pending step of an iterative
/// reformulation of a recursive algorithm.
///
/// A thunk carries no state beyond the closure-captured arguments of the
/// next step. It is owned transiently by the driver and consumed exactly
/// once. Invoking it yields either another pending step or a terminal
/// value, never control transfer into a deeper call stack.
pub struct Thunk<T>(Box<dyn FnOnce() -> Step<T>>);

impl<T> Thunk<T> {
    /// Wrap a closure as a deferred step.
    pub fn new(f: impl FnOnce() -> Step<T> + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Consume the thunk, performing one step of work.
    pub fn call(self) -> Step<T> {
        (self.0)()
    }
}

impl<T> fmt::Debug for Thunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk(..)")
    }
}

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// Outcome of one step of a trampolined computation.
#[derive(Debug)]
pub enum Step<T> {
    /// The computation has landed on its final value.
    Done(T),
    /// More work remains; the thunk performs the next step when invoked.
    More(Thunk<T>),
}

impl<T> Step<T> {
    /// Shorthand for `Step::More(Thunk::new(f))`.
    pub fn more(f: impl FnOnce() -> Step<T> + 'static) -> Self {
        Step::More(Thunk::new(f))
    }

    /// Returns `true` if this step is a terminal value.
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }
}

/// A step whose terminal value is a `Result`. Errors raised inside a
/// step travel to the driver's caller as ordinary values; the driver
/// performs no retry and no recovery.
pub type FallibleStep<T, E> = Step<std::result::Result<T, E>>;

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Statistics from a counted drive ([`run_with_stats`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveStats {
    /// Number of thunks the driver unwrapped before landing
    pub bounces: u64,
}

/// Drive a stepped computation to its terminal value.
///
/// While the current step is [`Step::More`], invoke the thunk; return
/// the payload of the first [`Step::Done`]. The loop enforces no maximum
/// iteration count; an always-`More` computation loops forever.
pub fn run<T>(mut step: Step<T>) -> T {
    loop {
        match step {
            Step::Done(value) => return value,
            Step::More(thunk) => step = thunk.call(),
        }
    }
}

/// Invoke a step function once with its initial arguments, then drive
/// the result to a terminal value.
pub fn run_with<A, T>(f: impl FnOnce(A) -> Step<T>, args: A) -> T {
    run(f(args))
}

/// Drive a stepped computation, also reporting how many thunks were
/// unwrapped along the way.
pub fn run_with_stats<T>(mut step: Step<T>) -> (T, DriveStats) {
    let mut stats = DriveStats::default();
    loop {
        match step {
            Step::Done(value) => return (value, stats),
            Step::More(thunk) => {
                stats.bounces += 1;
                step = thunk.call();
            }
        }
    }
}

/// Drive a fallible stepped computation. The first terminal value, a
/// `Result` produced by the step function, is handed back unchanged.
pub fn try_run<T, E>(step: FallibleStep<T, E>) -> std::result::Result<T, E> {
    run(step)
}
