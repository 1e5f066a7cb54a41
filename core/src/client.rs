//! Read-only view of the host game client.
//!
//! The core never owns or mutates host state. Everything it needs (the tick
//! counter, numeric game variables, the live NPC list, the local player
//! position) is pulled through this narrow query surface, which keeps the
//! tracker free of any lifetime coupling to the host's object graph and
//! independently testable against a scripted view.

use serde::Serialize;
use thiserror::Error;

/// Scene-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A live NPC observed in the host world view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NpcSpawn {
    /// NPC class/template id.
    pub npc_id: i32,
    /// Opaque per-instance identifier, stable for the instance's lifetime.
    pub instance_id: i64,
    pub scene_position: Point,
}

/// Errors surfaced by host reads. Always recovered locally; never propagated
/// out of the core.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("varbit {0} could not be read")]
    VarbitUnavailable(i32),

    #[error("no world view available")]
    NoWorldView,
}

/// Query surface over the host game state.
pub trait GameView {
    /// Monotonic game tick counter.
    fn tick_count(&self) -> i32;

    /// Read a numeric game variable by its varbit id.
    fn varbit(&self, varbit_id: i32) -> Result<i32, HostError>;

    /// All live NPCs in the current world view.
    fn active_npcs(&self) -> Vec<NpcSpawn>;

    /// Graphic id currently playing on an NPC instance, if any.
    fn npc_graphic(&self, instance_id: i64) -> Option<i32>;

    /// Local player scene position, if a player and world view exist.
    fn player_scene_position(&self) -> Option<Point>;
}
