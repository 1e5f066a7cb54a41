//! Run state snapshot and active-modifier resolution.

use serde::Serialize;

use crate::client::GameView;
use crate::game_data::{MODIFIER_BITMASK_VARBIT, Modifier};
use crate::spawns::WaveSpawns;

/// A modifier active for the current run, with its resolved level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveModifier {
    pub modifier: Modifier,
    pub level: u8,
}

/// The set of modifiers active for the current run.
///
/// Built fresh per query from the host bitmask; not persisted across waves.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActiveModifierSet {
    entries: Vec<ActiveModifier>,
}

impl ActiveModifierSet {
    /// Resolve the active set from the host. A failed bitmask read degrades
    /// to the empty set, and each level read falls back to 1 on its own.
    pub fn from_view(view: &impl GameView) -> Self {
        let bits = view.varbit(MODIFIER_BITMASK_VARBIT).unwrap_or(0);
        let entries = Modifier::for_bitmask(bits)
            .into_iter()
            .map(|modifier| ActiveModifier {
                modifier,
                level: modifier.resolve_level(view),
            })
            .collect();

        Self { entries }
    }

    pub fn from_modifiers(modifiers: impl IntoIterator<Item = (Modifier, u8)>) -> Self {
        Self {
            entries: modifiers
                .into_iter()
                .map(|(modifier, level)| ActiveModifier { modifier, level })
                .collect(),
        }
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.entries.iter().any(|e| e.modifier == modifier)
    }

    /// Resolved level of a modifier; 1 when absent or unleveled.
    pub fn level(&self, modifier: Modifier) -> u8 {
        self.entries
            .iter()
            .find(|e| e.modifier == modifier)
            .map(|e| e.level)
            .unwrap_or(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveModifier> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Point-in-time snapshot of where the run is, for display consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColosseumState {
    pub in_colosseum: bool,
    /// Current wave number, 0 when no wave is active.
    pub wave_number: u8,
    pub wave_started: bool,
}

impl ColosseumState {
    pub fn wave_spawns(&self, modifiers: &ActiveModifierSet) -> WaveSpawns {
        WaveSpawns::for_wave(self.wave_number, modifiers)
    }

    /// Prediction for the upcoming wave.
    pub fn next_wave_spawns(&self, modifiers: &ActiveModifierSet) -> WaveSpawns {
        WaveSpawns::for_wave(self.wave_number.saturating_add(1), modifiers)
    }
}
