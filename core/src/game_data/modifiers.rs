//! Colosseum run modifier registry.
//!
//! Modifier ids are bit positions in the host's active-modifier bitmask and
//! must stay stable: the bitmask layout, the level varbits, and the sprite
//! ids are external contracts with the host client.

use serde::Serialize;

use crate::client::GameView;

/// Varbit holding the active-modifier bitmask for the current run.
pub const MODIFIER_BITMASK_VARBIT: i32 = 9789;

/// A run modifier. Leveled modifiers scale 1-3; the rest are on/off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Modifier {
    Mantimayhem,
    Reentry,
    Bees,
    Volatility,
    Blasphemy,
    Relentless,
    Quartet,
    Totemic,
    Doom,
    DynamicDuo,
    Solarflare,
    Myopia,
    Frailty,
    RedFlag,
}

impl Modifier {
    pub const ALL: [Modifier; 14] = [
        Modifier::Mantimayhem,
        Modifier::Reentry,
        Modifier::Bees,
        Modifier::Volatility,
        Modifier::Blasphemy,
        Modifier::Relentless,
        Modifier::Quartet,
        Modifier::Totemic,
        Modifier::Doom,
        Modifier::DynamicDuo,
        Modifier::Solarflare,
        Modifier::Myopia,
        Modifier::Frailty,
        Modifier::RedFlag,
    ];

    /// Bit position in the host's modifier bitmask.
    pub const fn id(&self) -> u8 {
        match self {
            Modifier::Mantimayhem => 0,
            Modifier::Reentry => 1,
            Modifier::Bees => 2,
            Modifier::Volatility => 3,
            Modifier::Blasphemy => 4,
            Modifier::Relentless => 5,
            Modifier::Quartet => 6,
            Modifier::Totemic => 7,
            Modifier::Doom => 8,
            Modifier::DynamicDuo => 9,
            Modifier::Solarflare => 10,
            Modifier::Myopia => 11,
            Modifier::Frailty => 12,
            Modifier::RedFlag => 13,
        }
    }

    const fn base_name(&self) -> &'static str {
        match self {
            Modifier::Mantimayhem => "Mantimayhem",
            Modifier::Reentry => "Reentry",
            Modifier::Bees => "Bees!",
            Modifier::Volatility => "Volatility",
            Modifier::Blasphemy => "Blasphemy",
            Modifier::Relentless => "Relentless",
            Modifier::Quartet => "Quartet",
            Modifier::Totemic => "Totemic",
            Modifier::Doom => "Doom",
            Modifier::DynamicDuo => "Dynamic Duo",
            Modifier::Solarflare => "Solarflare",
            Modifier::Myopia => "Myopia",
            Modifier::Frailty => "Frailty",
            Modifier::RedFlag => "Red Flag",
        }
    }

    /// Varbit holding this modifier's level, for modifiers with leveled
    /// variants.
    pub const fn level_varbit(&self) -> Option<i32> {
        match self {
            Modifier::Mantimayhem => Some(4588),
            Modifier::Reentry => Some(9792),
            Modifier::Bees => Some(9791),
            Modifier::Volatility => Some(9799),
            Modifier::Blasphemy => Some(9790),
            Modifier::Relentless => Some(9798),
            Modifier::Doom => Some(10681),
            Modifier::Solarflare => Some(9797),
            Modifier::Myopia => Some(9795),
            Modifier::Frailty => Some(9796),
            Modifier::Quartet
            | Modifier::Totemic
            | Modifier::DynamicDuo
            | Modifier::RedFlag => None,
        }
    }

    /// Sprite ids for levels 1-3 (single entry for unleveled modifiers).
    const fn sprite_ids(&self) -> &'static [i32] {
        match self {
            Modifier::Mantimayhem => &[5539, 5554, 5569],
            Modifier::Reentry => &[5536, 5551, 5566],
            Modifier::Bees => &[5544, 5559, 5574],
            Modifier::Volatility => &[5534, 5549, 5564],
            Modifier::Blasphemy => &[5538, 5553, 5568],
            Modifier::Relentless => &[5535, 5550, 5565],
            Modifier::Quartet => &[5546],
            Modifier::Totemic => &[5542],
            Modifier::Doom => &[5543, 5558, 5573],
            Modifier::DynamicDuo => &[5545],
            Modifier::Solarflare => &[5537, 5552, 5567],
            Modifier::Myopia => &[5547, 5562, 5577],
            Modifier::Frailty => &[5541, 5556, 5571],
            Modifier::RedFlag => &[5540],
        }
    }

    /// Resolve the modifier's level from the host. Falls back to 1 on a
    /// failed or out-of-range read; the level varbit layout has shifted
    /// under a fixed lookup key before.
    pub fn resolve_level(&self, view: &impl GameView) -> u8 {
        let Some(varbit) = self.level_varbit() else {
            return 1;
        };

        match view.varbit(varbit) {
            Ok(level @ 1..=3) => level as u8,
            _ => 1,
        }
    }

    /// Display name at a given level: "Doom (II)", "Doom (III)", bare name
    /// otherwise. Unleveled modifiers always use the bare name.
    pub fn name(&self, level: u8) -> String {
        if self.level_varbit().is_none() {
            return self.base_name().to_string();
        }

        match level {
            3 => format!("{} (III)", self.base_name()),
            2 => format!("{} (II)", self.base_name()),
            _ => self.base_name().to_string(),
        }
    }

    /// Sprite for the given level, clamped to the known variants.
    pub fn sprite_id(&self, level: u8) -> i32 {
        let sprites = self.sprite_ids();
        let idx = (level.max(1) as usize - 1).min(sprites.len() - 1);
        sprites[idx]
    }

    pub fn for_id(id: u8) -> Option<Modifier> {
        Modifier::ALL.iter().copied().find(|m| m.id() == id)
    }

    /// Decode the active-modifier bitmask. Unknown bits are ignored.
    pub fn for_bitmask(bits: i32) -> Vec<Modifier> {
        Modifier::ALL
            .iter()
            .copied()
            .filter(|m| bits & (1 << m.id()) != 0)
            .collect()
    }
}
