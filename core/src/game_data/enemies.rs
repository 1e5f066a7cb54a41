//! Colosseum enemy registry and NPC id tables.
//!
//! NPC ids, graphic ids, and the LoS tool codes are external contracts with
//! the host client and los.colosim.com respectively.

use lanista_types::EnemyNameMode;
use phf::phf_map;
use serde::Serialize;

/// Host NPC ids for colosseum wave enemies.
pub mod npc_ids {
    pub const FREMENNIK: i32 = 12808;
    pub const JAVELIN_COLOSSUS: i32 = 12809;
    pub const JAGUAR_WARRIOR: i32 = 12810;
    pub const SERPENT_SHAMAN: i32 = 12811;
    pub const MANTICORE: i32 = 12812;
    pub const MINOTAUR: i32 = 12813;
    /// Minotaur variant with rerouted pathing, used under Red Flag.
    pub const MINOTAUR_ROUTEFIND: i32 = 12814;
    pub const SHOCKWAVE_COLOSSUS: i32 = 12815;
    pub const ANGRY_BEES: i32 = 12817;
    pub const SOL_HEREDIT: i32 = 12821;
}

/// Graphic ids queried during the per-tick manticore poll.
pub mod graphics {
    /// Plays once a manticore's orb-cycle telegraph has finished.
    pub const MANTICORE_ORB_CYCLE_DONE: i32 = 2281;
}

/// NPC id -> los.colosim.com enemy code, for the capture path. Keyed by the
/// raw host id so the routefind minotaur variant resolves without an Enemy
/// round-trip. NPCs outside this table never appear in a link.
static WAVE_NPC_LOS_CODES: phf::Map<i32, u8> = phf_map! {
    12811i32 => 1u8, // Serpent shaman
    12809i32 => 2u8, // Javelin Colossus
    12810i32 => 3u8, // Jaguar warrior
    12812i32 => 4u8, // Manticore
    12813i32 => 5u8, // Minotaur
    12814i32 => 5u8, // Minotaur (Red Flag)
    12815i32 => 6u8, // Shockwave Colossus
};

/// LoS tool code for an NPC id, if it has one.
pub fn los_code_for_npc(npc_id: i32) -> Option<u8> {
    WAVE_NPC_LOS_CODES.get(&npc_id).copied()
}

/// Whether an NPC id counts as a tracked wave enemy for capture purposes.
pub fn is_wave_npc(npc_id: i32) -> bool {
    WAVE_NPC_LOS_CODES.contains_key(&npc_id)
}

/// A colosseum encounter enemy type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Enemy {
    Fremennik,
    SerpentShaman,
    JavelinColossus,
    JaguarWarrior,
    Manticore,
    ShockwaveColossus,
    Minotaur,
    SolHeredit,
    AngryBees,
}

impl Enemy {
    pub const fn official_name(&self) -> &'static str {
        match self {
            Enemy::Fremennik => "Fremennik",
            Enemy::SerpentShaman => "Serpent shaman",
            Enemy::JavelinColossus => "Javelin Colossus",
            Enemy::JaguarWarrior => "Jaguar warrior",
            Enemy::Manticore => "Manticore",
            Enemy::ShockwaveColossus => "Shockwave Colossus",
            Enemy::Minotaur => "Minotaur",
            Enemy::SolHeredit => "Sol Heredit",
            Enemy::AngryBees => "Angry bees",
        }
    }

    /// The short names players actually call these.
    pub const fn colloquial_name(&self) -> &'static str {
        match self {
            Enemy::Fremennik => "Frem",
            Enemy::SerpentShaman => "Mage",
            Enemy::JavelinColossus => "Javelin",
            Enemy::JaguarWarrior => "Jaguar",
            Enemy::Manticore => "Manticore",
            Enemy::ShockwaveColossus => "Shockwave",
            Enemy::Minotaur => "Minotaur",
            Enemy::SolHeredit => "Sol",
            Enemy::AngryBees => "Bees",
        }
    }

    pub const fn name(&self, mode: EnemyNameMode) -> &'static str {
        match mode {
            EnemyNameMode::Official => self.official_name(),
            EnemyNameMode::Colloquial => self.colloquial_name(),
        }
    }

    /// Host NPC ids this enemy can appear as.
    pub const fn npc_ids(&self) -> &'static [i32] {
        match self {
            Enemy::Fremennik => &[npc_ids::FREMENNIK],
            Enemy::SerpentShaman => &[npc_ids::SERPENT_SHAMAN],
            Enemy::JavelinColossus => &[npc_ids::JAVELIN_COLOSSUS],
            Enemy::JaguarWarrior => &[npc_ids::JAGUAR_WARRIOR],
            Enemy::Manticore => &[npc_ids::MANTICORE],
            Enemy::ShockwaveColossus => &[npc_ids::SHOCKWAVE_COLOSSUS],
            Enemy::Minotaur => &[npc_ids::MINOTAUR, npc_ids::MINOTAUR_ROUTEFIND],
            Enemy::SolHeredit => &[npc_ids::SOL_HEREDIT],
            Enemy::AngryBees => &[npc_ids::ANGRY_BEES],
        }
    }

    /// Code used by the los.colosim.com layout tool. Enemies without a code
    /// are never emitted in a link.
    pub const fn los_code(&self) -> Option<u8> {
        match self {
            Enemy::SerpentShaman => Some(1),
            Enemy::JavelinColossus => Some(2),
            Enemy::JaguarWarrior => Some(3),
            Enemy::Manticore => Some(4),
            Enemy::Minotaur => Some(5),
            Enemy::ShockwaveColossus => Some(6),
            Enemy::Fremennik | Enemy::SolHeredit | Enemy::AngryBees => None,
        }
    }

    pub fn for_npc_id(npc_id: i32) -> Option<Enemy> {
        const ALL: [Enemy; 9] = [
            Enemy::Fremennik,
            Enemy::SerpentShaman,
            Enemy::JavelinColossus,
            Enemy::JaguarWarrior,
            Enemy::Manticore,
            Enemy::ShockwaveColossus,
            Enemy::Minotaur,
            Enemy::SolHeredit,
            Enemy::AngryBees,
        ];

        ALL.iter()
            .copied()
            .find(|e| e.npc_ids().contains(&npc_id))
    }
}
