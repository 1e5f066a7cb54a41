//! Per-wave tick splits.
//!
//! Derived purely from tracker signals. File and timer-server sinks live
//! outside the core; this only accumulates the numbers they would consume.

use serde::Serialize;

use crate::signal_processor::{ColosseumSignal, SignalHandler};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WaveSplit {
    pub wave: u8,
    pub start_tick: i32,
    /// Ticks the wave took; `None` while the wave is still running.
    pub duration_ticks: Option<i32>,
}

/// Accumulates wave timing over a run.
#[derive(Debug, Default)]
pub struct SplitsTracker {
    splits: Vec<WaveSplit>,
}

impl SplitsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn splits(&self) -> &[WaveSplit] {
        &self.splits
    }

    /// Total ticks across completed waves.
    pub fn total_ticks(&self) -> i32 {
        self.splits.iter().filter_map(|s| s.duration_ticks).sum()
    }

    fn open_split(&mut self, wave: u8, tick: i32) {
        self.close_split(tick);
        self.splits.push(WaveSplit {
            wave,
            start_tick: tick,
            duration_ticks: None,
        });
    }

    fn close_split(&mut self, tick: i32) {
        if let Some(split) = self.splits.last_mut()
            && split.duration_ticks.is_none()
        {
            split.duration_ticks = Some(tick - split.start_tick);
        }
    }

    fn reset(&mut self) {
        self.splits.clear();
    }
}

impl SignalHandler for SplitsTracker {
    fn handle_signal(&mut self, signal: &ColosseumSignal) {
        match *signal {
            ColosseumSignal::DisplayReset => self.reset(),
            ColosseumSignal::WaveStarted { wave, tick } => self.open_split(wave, tick),
            ColosseumSignal::WaveCompleted { tick, .. } => self.close_split(tick),
            _ => {}
        }
    }
}
