pub mod client;
pub mod display;
pub mod events;
pub mod game_data;
pub mod links;
pub mod signal_processor;
pub mod spawns;
pub mod splits;
pub mod state;

// Re-exports for convenience
pub use client::{GameView, HostError, NpcSpawn, Point};
pub use display::{PanelLine, PanelLineKind, wave_panel_lines};
pub use events::{ColosseumEvent, WaveMessage, parse_wave_message};
pub use game_data::{Enemy, Modifier};
pub use links::{LOS_BASE_URL, build_los_url, to_los_coords};
pub use signal_processor::{
    ColosseumSignal, ManticoreTracker, REINFORCEMENT_DELAY_TICKS, SignalHandler, WavePhase,
    WaveTracker,
};
pub use spawns::{BOSS_WAVE, WaveSpawn, WaveSpawns};
pub use splits::{SplitsTracker, WaveSplit};
pub use state::{ActiveModifier, ActiveModifierSet, ColosseumState};
