//! How long each target has been continuously in sight.

use pt_behavior::Target;
use pt_core::TargetId;

#[cfg(feature = "fx-hash")]
type Map<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
type Map<K, V> = std::collections::HashMap<K, V>;

/// Per-target streak of consecutive ticks seen by at least one agent.
///
/// A target is *spotted* on the first tick its streak exceeds
/// `threshold_ticks`; the streak then restarts from zero, so a target that
/// stays in view is reported again after another full threshold.  A tick
/// out of sight resets the streak.
#[derive(Debug, Clone)]
pub struct ExposureTracker {
    threshold_ticks: u32,
    streaks:         Map<TargetId, u32>,
}

impl ExposureTracker {
    pub fn new(threshold_ticks: u32) -> Self {
        Self { threshold_ticks, streaks: Map::default() }
    }

    #[inline]
    pub fn threshold_ticks(&self) -> u32 {
        self.threshold_ticks
    }

    /// Current streak for `target` (0 if unseen or unknown).
    #[inline]
    pub fn streak(&self, target: TargetId) -> u32 {
        self.streaks.get(&target).copied().unwrap_or(0)
    }

    /// Record one tick.  `seen` lists the ids visible to any agent this tick
    /// (duplicates are fine).  Returns the newly spotted targets in `targets`
    /// order.
    pub fn record(&mut self, targets: &[Target], seen: &[TargetId]) -> Vec<TargetId> {
        let mut spotted = Vec::new();
        for target in targets {
            if !seen.contains(&target.id) {
                self.streaks.remove(&target.id);
                continue;
            }
            let streak = self.streaks.entry(target.id).or_insert(0);
            *streak += 1;
            if *streak > self.threshold_ticks {
                spotted.push(target.id);
                *streak = 0;
            }
        }
        // Targets that left the world take their streak with them.
        self.streaks.retain(|id, _| targets.iter().any(|t| t.id == *id));
        spotted
    }
}
