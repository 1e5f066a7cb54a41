//! Deterministic per-wave spawn prediction.
//!
//! The colosseum's twelve waves follow a fixed spawn table, adjusted by the
//! run's active modifiers. The table is a closed contract with the live
//! encounter; every count here is exact.

use serde::Serialize;

use crate::game_data::{Enemy, Modifier};
use crate::state::ActiveModifierSet;

/// Number of waves in a full run. Wave 12 is the boss wave.
pub const BOSS_WAVE: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WaveSpawn {
    pub count: u8,
    pub enemy: Enemy,
}

impl WaveSpawn {
    const fn new(count: u8, enemy: Enemy) -> Self {
        Self { count, enemy }
    }
}

/// Predicted spawns for one wave, split by spawn category. Order within each
/// list is display order only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WaveSpawns {
    pub spawns: Vec<WaveSpawn>,
    pub reinforcements: Vec<WaveSpawn>,
    pub modifier_spawns: Vec<WaveSpawn>,
}

impl WaveSpawns {
    /// Predict the spawn layout for a wave given the active modifiers.
    ///
    /// Waves outside 1..=12 yield an empty prediction.
    pub fn for_wave(wave: u8, modifiers: &ActiveModifierSet) -> WaveSpawns {
        let mut out = WaveSpawns::default();

        if !(1..=BOSS_WAVE).contains(&wave) {
            return out;
        }

        // bees come on top of the regular table, scaling with the level
        if modifiers.contains(Modifier::Bees) {
            out.modifier_spawns
                .push(WaveSpawn::new(modifiers.level(Modifier::Bees), Enemy::AngryBees));
        }

        // the boss wave skips the normal table entirely
        if wave == BOSS_WAVE {
            if modifiers.contains(Modifier::Quartet) {
                out.spawns.push(WaveSpawn::new(1, Enemy::Fremennik));
            }
            out.spawns.push(WaveSpawn::new(1, Enemy::SolHeredit));
            return out;
        }

        // fremenniks every wave, 3 baseline or 4 with quartet
        let frems = if modifiers.contains(Modifier::Quartet) { 4 } else { 3 };
        out.spawns.push(WaveSpawn::new(frems, Enemy::Fremennik));

        // shaman spawns up front through wave 6
        if wave <= 6 {
            out.spawns.push(WaveSpawn::new(1, Enemy::SerpentShaman));
        }
        // and arrives with reinforcements on 4-6 and 10-11
        if (4..=6).contains(&wave) || wave >= 10 {
            out.reinforcements.push(WaveSpawn::new(1, Enemy::SerpentShaman));
        }

        // jaguar warrior is reinforcement-only, through wave 6
        if wave <= 6 {
            out.reinforcements.push(WaveSpawn::new(1, Enemy::JaguarWarrior));
        }

        // javelins alternate between 1 and 2, skipping waves 1 and 4
        if wave == 2 || wave == 3 {
            out.spawns.push(WaveSpawn::new(wave - 1, Enemy::JavelinColossus));
        }
        if wave >= 5 {
            out.spawns
                .push(WaveSpawn::new(2 - (wave % 2), Enemy::JavelinColossus));
        }

        // manticores from wave 4: single through 8, pairs after
        if wave >= 4 {
            let count = if wave <= 8 { 1 } else { 2 };
            out.spawns.push(WaveSpawn::new(count, Enemy::Manticore));
        }

        // shockwave on 7, 8 and 11, doubled by dynamic duo
        if wave == 7 || wave == 8 || wave == 11 {
            let count = if modifiers.contains(Modifier::DynamicDuo) { 2 } else { 1 };
            out.spawns.push(WaveSpawn::new(count, Enemy::ShockwaveColossus));
        }

        // minotaur takes over the jaguar's reinforcement slot from wave 7
        if wave >= 7 {
            out.reinforcements.push(WaveSpawn::new(1, Enemy::Minotaur));
        }

        out
    }

    /// Total count for an enemy across the primary spawn list.
    pub fn spawn_count(&self, enemy: Enemy) -> u8 {
        self.spawns
            .iter()
            .filter(|s| s.enemy == enemy)
            .map(|s| s.count)
            .sum()
    }

    /// Total count for an enemy across the reinforcement list.
    pub fn reinforcement_count(&self, enemy: Enemy) -> u8 {
        self.reinforcements
            .iter()
            .filter(|s| s.enemy == enemy)
            .map(|s| s.count)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.spawns.is_empty() && self.reinforcements.is_empty() && self.modifier_spawns.is_empty()
    }
}
