use lanista_core::{SplitsTracker, WaveTracker};
use lanista_types::TrackerSettings;

use crate::replay::ReplayView;

/// Session state for the interactive cli: one tracker, one splits
/// accumulator, and the scripted host view replay events run against.
pub struct CliContext {
    pub settings: TrackerSettings,
    pub tracker: WaveTracker,
    pub splits: SplitsTracker,
    pub view: ReplayView,
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CliContext {
    pub fn new() -> Self {
        let settings = TrackerSettings::default();
        Self {
            tracker: WaveTracker::new(settings.clone()),
            splits: SplitsTracker::new(),
            view: ReplayView::new(),
            settings,
        }
    }

    /// Drop all session state and start over.
    pub fn reset(&mut self) {
        self.tracker = WaveTracker::new(self.settings.clone());
        self.splits = SplitsTracker::new();
        self.view = ReplayView::new();
    }
}
