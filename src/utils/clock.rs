//! Wall-clock timestamps

use std::time::{SystemTime, UNIX_EPOCH};

/// Whole seconds elapsed since 1970-01-01T00:00:00Z.
///
/// Fractional seconds are truncated toward zero. A clock set before the
/// epoch yields a negative count instead of failing.
pub fn now_epoch_seconds() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as i64,
        Err(err) => -(err.duration().as_secs() as i64),
    }
}
