//! Deferred prime enumeration over the step loop
//!
//! [`PrimeScan`] spreads a prime enumeration across turns of a
//! [`StepLoop`](crate::scheduler::StepLoop): one candidate tested per
//! turn, the call stack fully unwound between turns. Rendering is
//! decoupled from computation: the scan emits [`ScanEvent`]s to a
//! [`RenderSink`], and the completion event fires exactly once, strictly
//! after the last prime was appended.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::primes::is_prime;
use crate::scheduler::{StepLoop, Stepper, Turn};

// ---------------------------------------------------------------------------
// Rendering protocol
// ---------------------------------------------------------------------------

/// A notification emitted by the scan, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanEvent {
    /// A prime was discovered and appended to the result collection.
    Prime(u64),
    /// The scan processed every candidate; fired exactly once.
    Complete {
        /// Number of primes found
        count: usize,
    },
}

/// Receives scan notifications as they happen.
pub trait RenderSink {
    /// A prime was appended to the result collection.
    fn prime_found(&mut self, prime: u64);

    /// The scan finished; fired exactly once, after the last prime.
    fn scan_complete(&mut self, count: usize);
}

/// Renders scan events to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl RenderSink for LogSink {
    fn prime_found(&mut self, prime: u64) {
        info!(prime, "prime found");
    }

    fn scan_complete(&mut self, count: usize) {
        info!(count, "prime scan complete");
    }
}

/// Records every event in order; the in-memory stand-in for a real
/// rendering surface. Clones share the same event log.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Rc<RefCell<Vec<ScanEvent>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events rendered so far.
    pub fn events(&self) -> Vec<ScanEvent> {
        self.events.borrow().clone()
    }
}

impl RenderSink for MemorySink {
    fn prime_found(&mut self, prime: u64) {
        self.events.borrow_mut().push(ScanEvent::Prime(prime));
    }

    fn scan_complete(&mut self, count: usize) {
        self.events.borrow_mut().push(ScanEvent::Complete { count });
    }
}

// ---------------------------------------------------------------------------
// PrimeScan
// ---------------------------------------------------------------------------

/// A stepper that enumerates primes in `1..=bound`, one candidate per
/// turn.
pub struct PrimeScan<S: RenderSink> {
    /// Next candidate to test
    next: u64,
    /// Inclusive upper bound
    bound: u64,
    /// Primes found so far, shared with callers via [`PrimeScan::results`]
    found: Rc<RefCell<Vec<u64>>>,
    /// Where notifications go
    sink: S,
    /// Set once the completion event has fired
    completed: bool,
}

impl<S: RenderSink> PrimeScan<S> {
    /// Create a scan of `1..=bound` rendering into `sink`.
    pub fn new(bound: u64, sink: S) -> Self {
        Self {
            next: 1,
            bound,
            found: Rc::new(RefCell::new(Vec::new())),
            sink,
            completed: false,
        }
    }

    /// A handle on the result collection. The scan appends to it as
    /// turns run; the handle stays valid after the scan is retired.
    pub fn results(&self) -> Rc<RefCell<Vec<u64>>> {
        Rc::clone(&self.found)
    }

    /// Consume the scan and surrender the primes collected so far.
    pub fn into_primes(self) -> Vec<u64> {
        let found = self.found;
        Rc::try_unwrap(found)
            .map(RefCell::into_inner)
            .unwrap_or_else(|shared| shared.borrow().clone())
    }
}

impl<S: RenderSink> Stepper for PrimeScan<S> {
    fn step(&mut self) -> Turn {
        if self.next > self.bound {
            if !self.completed {
                self.completed = true;
                self.sink.scan_complete(self.found.borrow().len());
            }
            return Turn::Done;
        }

        let candidate = self.next;
        self.next += 1;
        if is_prime(candidate) {
            self.found.borrow_mut().push(candidate);
            self.sink.prime_found(candidate);
        }
        Turn::Yield
    }
}

/// Run a full scan of `1..=bound` on a fresh [`StepLoop`] and return
/// the primes in discovery order.
pub fn scan_primes<S: RenderSink + 'static>(bound: u64, sink: S) -> Vec<u64> {
    let scan = PrimeScan::new(bound, sink);
    let results = scan.results();

    let mut steploop = StepLoop::new();
    steploop.spawn(scan);
    steploop.run_to_completion();

    Rc::try_unwrap(results)
        .map(RefCell::into_inner)
        .unwrap_or_else(|shared| shared.borrow().clone())
}
