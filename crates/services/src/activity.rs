use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Process-wide counter of in-flight network requests.
///
/// `busy` stays true while any request is outstanding; overlapping
/// requests stack. Releases are clamped at zero, so an unmatched release
/// can never drive the count negative.
#[derive(Debug, Default)]
pub struct ActivityTracker {
    in_flight: AtomicUsize,
}

impl ActivityTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the start of a request. The returned guard releases on drop,
    /// so the matching decrement fires whether the request resolves,
    /// fails, or the future is dropped mid-flight.
    #[must_use]
    pub fn begin(self: &Arc<Self>) -> ActivityGuard {
        self.in_flight.fetch_add(1, Ordering::AcqRel);
        ActivityGuard {
            tracker: Arc::clone(self),
        }
    }

    /// Mark the end of a request, clamped at zero.
    pub fn release(&self) {
        let _ = self
            .in_flight
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                count.checked_sub(1)
            });
    }

    /// Number of requests currently outstanding.
    #[must_use]
    pub fn count(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }

    /// True while at least one request is outstanding.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.count() > 0
    }
}

/// Scoped hold on the activity counter; see [`ActivityTracker::begin`].
#[derive(Debug)]
pub struct ActivityGuard {
    tracker: Arc<ActivityTracker>,
}

impl Drop for ActivityGuard {
    fn drop(&mut self) {
        self.tracker.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_sets_busy_and_release_clears_it() {
        let tracker = Arc::new(ActivityTracker::new());
        assert!(!tracker.is_busy());

        let guard = tracker.begin();
        assert!(tracker.is_busy());
        assert_eq!(tracker.count(), 1);

        drop(guard);
        assert!(!tracker.is_busy());
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn overlapping_requests_keep_busy_until_last_release() {
        let tracker = Arc::new(ActivityTracker::new());

        let first = tracker.begin();
        let second = tracker.begin();
        assert_eq!(tracker.count(), 2);

        drop(first);
        assert!(tracker.is_busy());

        drop(second);
        assert!(!tracker.is_busy());
    }

    #[test]
    fn spurious_release_clamps_at_zero() {
        let tracker = Arc::new(ActivityTracker::new());

        let first = tracker.begin();
        let second = tracker.begin();
        drop(first);
        drop(second);
        // One more release than begins: count must stay at zero.
        tracker.release();

        assert_eq!(tracker.count(), 0);
        assert!(!tracker.is_busy());

        // The tracker still works after the spurious release.
        let guard = tracker.begin();
        assert_eq!(tracker.count(), 1);
        drop(guard);
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn busy_tracks_outstanding_begins_minus_ends() {
        let tracker = Arc::new(ActivityTracker::new());
        let mut guards = Vec::new();

        for expected in 1..=5_usize {
            guards.push(tracker.begin());
            assert_eq!(tracker.count(), expected);
            assert!(tracker.is_busy());
        }
        while let Some(guard) = guards.pop() {
            drop(guard);
            assert_eq!(tracker.is_busy(), tracker.count() > 0);
        }
        assert!(!tracker.is_busy());
    }
}
