mod enemies;
mod modifiers;

pub use enemies::{Enemy, graphics, is_wave_npc, los_code_for_npc, npc_ids};
pub use modifiers::{MODIFIER_BITMASK_VARBIT, Modifier};
