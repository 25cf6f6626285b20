//! Recording failures as tracing events.
//!
//! Without a subscriber installed the events are discarded; plug in any
//! `tracing` subscriber to see them.

use easy_result::{Error, Result};
use tracing::info_span;

fn charge(amount_cents: u64) -> Result<u64> {
    Result::success(amount_cents)
        .ensure(|a| *a <= 50_000, Error::new("Payment.LimitExceeded", "Amount exceeds the limit."))
        .trace_failure()
}

fn main() {
    let span = info_span!("checkout", order_id = 1001);

    let outcome = charge(75_000).trace_failure_in(&span);
    println!("{:?}", outcome);
    // Output: Failure(Error { code: "Payment.LimitExceeded", message: "Amount exceeds the limit." })
}
