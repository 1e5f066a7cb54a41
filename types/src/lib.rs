//! Shared configuration types for lanista
//!
//! Serializable settings shared between the tracker core and any front-end
//! (overlay panel, cli). Kept free of game logic so both sides can depend on
//! it cheaply.

use serde::{Deserialize, Serialize};

/// Which wave blocks the waves panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WaveDisplayMode {
    Off,
    Current,
    Next,
    #[default]
    Both,
}

impl WaveDisplayMode {
    pub fn show_current(&self) -> bool {
        matches!(self, WaveDisplayMode::Current | WaveDisplayMode::Both)
    }

    pub fn show_next(&self) -> bool {
        matches!(self, WaveDisplayMode::Next | WaveDisplayMode::Both)
    }
}

/// Whether to show official NPC names (e.g. "Serpent shaman") or the
/// colloquial ones players actually use (e.g. "Mage").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyNameMode {
    Official,
    #[default]
    Colloquial,
}

/// Tracker feature settings, passed explicitly into the core rather than
/// read from ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerSettings {
    /// Master switch for wave capture and LoS link generation.
    pub los_links_enabled: bool,
    pub waves_display_mode: WaveDisplayMode,
    pub enemy_name_mode: EnemyNameMode,
    /// Show modifier-only spawns (e.g. Angry bees) in the waves panel.
    pub show_modifier_spawns: bool,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            los_links_enabled: true,
            waves_display_mode: WaveDisplayMode::default(),
            enemy_name_mode: EnemyNameMode::default(),
            show_modifier_spawns: true,
        }
    }
}
