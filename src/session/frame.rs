//! Frame pacing shared by the title, match and pause loops

use std::time::{Duration, Instant};

/// Apply frame rate limiting to maintain consistent game speed.
///
/// Called at the end of each loop iteration. Sleeps for whatever is left
/// of `period` since `frame_start`; a slow frame simply sleeps less.
///
/// # Example
/// ```rust,no_run
/// use std::time::{Duration, Instant};
/// # use termpong::session::limit_frame_rate;
/// let frame_start = Instant::now();
/// // ... game loop logic ...
/// limit_frame_rate(frame_start, Duration::from_millis(30));
/// ```
pub fn limit_frame_rate(frame_start: Instant, period: Duration) {
    if let Some(remaining) = remaining(frame_start.elapsed(), period) {
        std::thread::sleep(remaining);
    }
}

/// Time left in the frame, if any
fn remaining(elapsed: Duration, period: Duration) -> Option<Duration> {
    period.checked_sub(elapsed).filter(|left| !left.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_frame_sleeps_the_rest() {
        assert_eq!(
            remaining(Duration::from_millis(12), Duration::from_millis(30)),
            Some(Duration::from_millis(18))
        );
    }

    #[test]
    fn test_slow_frame_does_not_sleep() {
        assert_eq!(
            remaining(Duration::from_millis(45), Duration::from_millis(30)),
            None
        );
        assert_eq!(
            remaining(Duration::from_millis(30), Duration::from_millis(30)),
            None
        );
    }

    #[test]
    fn test_limit_waits_at_least_the_period() {
        let start = Instant::now();
        limit_frame_rate(start, Duration::from_millis(5));
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
