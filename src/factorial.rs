//! Trampolined factorial
//!
//! The canonical thunk-producing step function: a multiplicative
//! accumulator (identity 1) threaded through the steps, one
//! multiplication per bounce. The accumulator is a [`BigUint`], so deep
//! inputs produce exact values instead of losing integer precision.

use num_bigint::BigUint;
use num_traits::One;

use crate::error::{Error, Result};
use crate::trampoline::{run, Step};

/// Compute `n!` with the trampoline driver.
///
/// Call-stack usage is constant in `n`; `factorial(10_000)` and beyond
/// return exact values.
pub fn factorial(n: u64) -> BigUint {
    run(product_step(n, BigUint::one()))
}

/// One step of the factorial: base case returns the accumulator as a
/// terminal value, recursive case defers exactly one multiplication.
fn product_step(n: u64, acc: BigUint) -> Step<BigUint> {
    if n == 0 {
        Step::Done(acc)
    } else {
        Step::more(move || product_step(n - 1, acc * n))
    }
}

/// Compute `n!` by direct self-recursion under an explicit depth budget.
///
/// The depth counter is threaded through each call as a parameter and
/// increments by exactly one per recursive call. When the budget is
/// exhausted the descent stops with [`Error::StackOverflow`] carrying
/// the depth reached, before the host stack itself is at risk.
///
/// This is the bounded rendition of the approach the trampoline exists
/// to replace; [`factorial`] handles the same inputs without a budget.
pub fn factorial_bounded(n: u64, budget: usize) -> Result<BigUint> {
    fn descend(n: u64, depth: usize, budget: usize) -> Result<BigUint> {
        if depth >= budget {
            return Err(Error::stack_overflow(depth, budget));
        }
        if n == 0 {
            return Ok(BigUint::one());
        }
        Ok(descend(n - 1, depth + 1, budget)? * n)
    }
    descend(n, 0, budget)
}
