//! Per-instance manticore pattern tracking.
//!
//! A manticore telegraphs its attack-orb cycle shortly after appearing, and
//! the layout tool encodes a manticore differently depending on whether that
//! telegraph has finished and which phase the instance arrived in. The
//! telegraph graphic is polled every tick in addition to the spawn-event
//! path: graphic-change events are dropped by the host while an NPC is
//! occluded behind a pillar, but the poll sees the current graphic
//! regardless. Both paths stay in place; they cover different host delivery
//! failures.

use hashbrown::HashMap;

use crate::client::GameView;
use crate::game_data::graphics;

// link-token suffixes, keyed by (telegraph complete, reinforcement phase)
const SUFFIX_SPAWN_COMPLETE: &str = "";
const SUFFIX_SPAWN_PENDING: &str = "w";
const SUFFIX_REINFORCEMENT_COMPLETE: &str = "r";
const SUFFIX_REINFORCEMENT_PENDING: &str = "rw";

#[derive(Debug, Clone, Copy, Default)]
struct ManticoreState {
    pattern_complete: bool,
    /// Phase the instance was captured in; the first capture wins, so a
    /// spawn-phase manticore keeps its attribution when it reappears in the
    /// reinforcement snapshot.
    captured_reinforcement: Option<bool>,
}

/// Tracks live manticore instances for the current wave.
#[derive(Debug, Default)]
pub struct ManticoreTracker {
    tracked: HashMap<i64, ManticoreState>,
}

impl ManticoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin tracking an instance. Idempotent for already-tracked instances.
    pub fn track(&mut self, instance_id: i64) {
        self.tracked.entry(instance_id).or_default();
    }

    /// Stop tracking a despawned instance.
    pub fn untrack(&mut self, instance_id: i64) {
        self.tracked.remove(&instance_id);
    }

    pub fn is_tracked(&self, instance_id: i64) -> bool {
        self.tracked.contains_key(&instance_id)
    }

    pub fn tracked_count(&self) -> usize {
        self.tracked.len()
    }

    /// Poll every tracked instance's graphic and return the instances whose
    /// telegraph completed this tick. The flip is one-way per instance.
    pub fn poll(&mut self, view: &impl GameView) -> Vec<i64> {
        let mut completed = Vec::new();

        for (&instance_id, state) in self.tracked.iter_mut() {
            if state.pattern_complete {
                continue;
            }
            if view.npc_graphic(instance_id) == Some(graphics::MANTICORE_ORB_CYCLE_DONE) {
                state.pattern_complete = true;
                completed.push(instance_id);
            }
        }

        completed
    }

    /// Record, for every tracked instance without a phase attribution yet,
    /// which phase snapshot it belongs to.
    pub fn capture_spawn_states(&mut self, reinforcement: bool) {
        for state in self.tracked.values_mut() {
            if state.captured_reinforcement.is_none() {
                state.captured_reinforcement = Some(reinforcement);
            }
        }
    }

    /// Suffix for a phase-snapshot link token. Reflects the instance's
    /// current telegraph state (links are refreshed when it flips) and its
    /// captured phase, falling back to the link's own phase for instances
    /// never captured.
    pub fn spawn_suffix(&self, instance_id: i64, link_reinforcement: bool) -> &'static str {
        let state = self.tracked.get(&instance_id);
        let complete = state.is_some_and(|s| s.pattern_complete);
        let reinforcement = state
            .and_then(|s| s.captured_reinforcement)
            .unwrap_or(link_reinforcement);

        match (complete, reinforcement) {
            (true, false) => SUFFIX_SPAWN_COMPLETE,
            (false, false) => SUFFIX_SPAWN_PENDING,
            (true, true) => SUFFIX_REINFORCEMENT_COMPLETE,
            (false, true) => SUFFIX_REINFORCEMENT_PENDING,
        }
    }

    /// Suffix for a live (current-layout) link token.
    pub fn live_suffix(&self, instance_id: i64) -> &'static str {
        let complete = self
            .tracked
            .get(&instance_id)
            .is_some_and(|s| s.pattern_complete);

        if complete {
            SUFFIX_SPAWN_COMPLETE
        } else {
            SUFFIX_SPAWN_PENDING
        }
    }

    /// Exactly three manticores tracked at once, the triple variant the
    /// layout tool renders differently.
    pub fn triple_active(&self) -> bool {
        self.tracked.len() == 3
    }

    /// Drop all instance state (encounter reset).
    pub fn clear(&mut self) {
        self.tracked.clear();
    }
}
