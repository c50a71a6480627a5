//! # Snapshot Window
//!
//! Maps host timestamps onto discrete snapshot ids.

use serde::{Deserialize, Serialize};
use shared_types::{SnapshotId, Timestamp};

/// Fixed window configuration, set once at initialization.
///
/// `snapshot_id_at(t)` is 0 for timestamps before `base_timestamp`, otherwise
/// `(t - base_timestamp) / window_length + 1`. Ids are monotonically
/// non-decreasing with time and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotWindow {
    /// Timestamp the first window starts at.
    pub base_timestamp: Timestamp,
    /// Window length in time units. Always nonzero.
    pub window_length: u64,
}

impl SnapshotWindow {
    /// Creates a window configuration. Callers validate `window_length` first;
    /// a zero length would make the id formula divide by zero.
    #[must_use]
    pub const fn new(base_timestamp: Timestamp, window_length: u64) -> Self {
        Self {
            base_timestamp,
            window_length,
        }
    }

    /// Snapshot id current at `timestamp`.
    #[must_use]
    pub fn snapshot_id_at(&self, timestamp: Timestamp) -> SnapshotId {
        if timestamp < self.base_timestamp {
            0
        } else {
            (timestamp - self.base_timestamp) / self.window_length + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_before_base_timestamp() {
        let window = SnapshotWindow::new(100, 20);
        assert_eq!(window.snapshot_id_at(99), 0);
        assert_eq!(window.snapshot_id_at(0), 0);
    }

    #[test]
    fn test_first_window_is_id_one() {
        let window = SnapshotWindow::new(100, 20);
        assert_eq!(window.snapshot_id_at(100), 1);
        assert_eq!(window.snapshot_id_at(119), 1);
    }

    #[test]
    fn test_window_boundaries() {
        let window = SnapshotWindow::new(100, 20);
        assert_eq!(window.snapshot_id_at(120), 2);
        assert_eq!(window.snapshot_id_at(139), 2);
        assert_eq!(window.snapshot_id_at(140), 3);
    }

    #[test]
    fn test_ids_monotonic_in_time() {
        let window = SnapshotWindow::new(50, 7);
        let mut last = 0;
        for t in 0..200 {
            let id = window.snapshot_id_at(t);
            assert!(id >= last);
            last = id;
        }
    }
}
