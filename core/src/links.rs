//! LoS link encoding for the external layout tool.
//!
//! los.colosim.com accepts a compact token string: one 5-character token per
//! enemy (`XXYYC`, zero-padded transformed coordinates plus the tool's
//! enemy code), each terminated with `.`, an optional `#`-prefixed player
//! position, and trailing flags for spawn snapshots (`_ws`) and the
//! triple-manticore variant (`_mm3`). The string is handed to the consumer
//! byte-exact; nothing downstream re-encodes it.

use crate::client::{NpcSpawn, Point};
use crate::game_data::{los_code_for_npc, npc_ids};
use crate::signal_processor::ManticoreTracker;

pub const LOS_BASE_URL: &str = "https://los.colosim.com/?";

// scene coords -> tool coords: fixed origin shift plus a y-axis flip
const LOS_COORD_OFFSET_X: i32 = 32;
const LOS_COORD_OFFSET_Y: i32 = 83;

/// Transform a scene position into the tool's coordinate space. Exact; the
/// tool's origin and y direction differ from the scene grid.
pub const fn to_los_coords(scene: Point) -> Point {
    Point {
        x: scene.x - LOS_COORD_OFFSET_X,
        y: LOS_COORD_OFFSET_Y - scene.y,
    }
}

/// Encode a captured layout as a shareable URL.
///
/// Enemies without a tool code are silently omitted; a malformed token is
/// never emitted.
pub fn build_los_url(
    spawns: &[NpcSpawn],
    player_scene: Option<Point>,
    is_spawn_snapshot: bool,
    is_reinforcement: bool,
    manticores: &ManticoreTracker,
) -> String {
    let mut url = String::from(LOS_BASE_URL);

    for spawn in spawns {
        let Some(code) = los_code_for_npc(spawn.npc_id) else {
            continue;
        };

        let pos = to_los_coords(spawn.scene_position);
        url.push_str(&format!("{:02}{:02}{}", pos.x, pos.y, code));

        if spawn.npc_id == npc_ids::MANTICORE {
            let suffix = if is_spawn_snapshot {
                manticores.spawn_suffix(spawn.instance_id, is_reinforcement)
            } else {
                manticores.live_suffix(spawn.instance_id)
            };
            url.push_str(suffix);
        }

        url.push('.');
    }

    if let Some(player) = player_scene {
        let pos = to_los_coords(player);
        url.push_str(&format!("#{}", pos.x + 256 * pos.y));
    }

    if is_spawn_snapshot && !is_reinforcement {
        url.push_str("_ws");
    }
    if manticores.triple_active() {
        url.push_str("_mm3");
    }

    url
}
