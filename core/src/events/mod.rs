//! Input events delivered to the tracker by the host adapter.

mod chat;

pub use chat::{WaveMessage, parse_wave_message};

/// A host event. Events are processed strictly in delivery order; the
/// tracker's transitions are deterministic for a fixed event sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum ColosseumEvent {
    /// Game tick advanced.
    Tick,
    /// A game message line.
    Chat(String),
    NpcSpawned { npc_id: i32, instance_id: i64 },
    NpcDespawned { npc_id: i32, instance_id: i64 },
    /// Colosseum region membership changed.
    RegionChanged { in_colosseum: bool },
}
