//! Timed suspension helper.

use std::time::Duration;
use tokio::time::Sleep;

/// Returns a future that completes once at least `duration_ms` milliseconds have elapsed.
///
/// There is no cancellation handle; drop the future to abandon it.
pub fn delay(duration_ms: u64) -> Sleep {
    tokio::time::sleep(Duration::from_millis(duration_ms))
}
