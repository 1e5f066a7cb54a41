//! Wave lifecycle state machine and capture latch.
//!
//! The tracker consumes host events in delivery order and runs the wave
//! phase machine: Idle until a "Wave: N" message, a spawn phase for the
//! first ticks of the wave, then an irreversible flip to the reinforcement
//! phase. Each phase takes at most one snapshot of the live enemy layout
//! (the first qualifying NPC spawn latches it), and snapshots are published
//! as LoS links on the following tick, when the player position is read.

use lanista_types::TrackerSettings;
use tracing::debug;

use crate::client::{GameView, NpcSpawn, Point};
use crate::events::{ColosseumEvent, WaveMessage, parse_wave_message};
use crate::game_data::{is_wave_npc, npc_ids};
use crate::links;
use crate::state::ColosseumState;

use super::manticore::ManticoreTracker;
use super::signal::ColosseumSignal;

/// Ticks past wave start before the reinforcement phase begins. Matches the
/// live encounter's server-side timing; do not tune.
pub const REINFORCEMENT_DELAY_TICKS: i32 = 10;

/// Phase of the current wave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WavePhase {
    #[default]
    Idle,
    Spawn { wave: u8, start_tick: i32 },
    Reinforcement { wave: u8 },
}

impl WavePhase {
    /// Active wave and whether reinforcements have begun, if a wave is live.
    pub fn active(&self) -> Option<(u8, bool)> {
        match *self {
            WavePhase::Idle => None,
            WavePhase::Spawn { wave, .. } => Some((wave, false)),
            WavePhase::Reinforcement { wave } => Some((wave, true)),
        }
    }

    pub fn wave(&self) -> u8 {
        self.active().map(|(wave, _)| wave).unwrap_or(0)
    }
}

/// Processes host events, tracks the wave phase machine, and emits signals.
pub struct WaveTracker {
    settings: TrackerSettings,
    in_colosseum: bool,
    phase: WavePhase,
    /// One-shot snapshot latch for the current phase.
    captured: bool,
    /// A snapshot is waiting to be published on the next tick.
    pending_publish: bool,
    wave_spawns: Vec<NpcSpawn>,
    reinforcement_spawns: Vec<NpcSpawn>,
    player_at_wave_spawn: Option<Point>,
    player_at_reinforcements: Option<Point>,
    manticores: ManticoreTracker,
}

impl Default for WaveTracker {
    fn default() -> Self {
        Self::new(TrackerSettings::default())
    }
}

impl WaveTracker {
    pub fn new(settings: TrackerSettings) -> Self {
        Self {
            settings,
            in_colosseum: false,
            phase: WavePhase::Idle,
            captured: false,
            pending_publish: false,
            wave_spawns: Vec::new(),
            reinforcement_spawns: Vec::new(),
            player_at_wave_spawn: None,
            player_at_reinforcements: None,
            manticores: ManticoreTracker::new(),
        }
    }

    pub fn settings(&self) -> &TrackerSettings {
        &self.settings
    }

    /// Replace the settings. Disabling link tracking drops all wave state.
    pub fn set_settings(&mut self, settings: TrackerSettings) {
        if self.settings.los_links_enabled && !settings.los_links_enabled {
            self.reset_wave_state();
        }
        self.settings = settings;
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    pub fn in_colosseum(&self) -> bool {
        self.in_colosseum
    }

    pub fn manticores(&self) -> &ManticoreTracker {
        &self.manticores
    }

    /// Snapshot taken in the spawn phase of the current wave, if any.
    pub fn wave_spawns(&self) -> &[NpcSpawn] {
        &self.wave_spawns
    }

    /// Snapshot taken in the reinforcement phase of the current wave, if any.
    pub fn reinforcement_spawns(&self) -> &[NpcSpawn] {
        &self.reinforcement_spawns
    }

    /// Current run snapshot for display consumers.
    pub fn state(&self) -> ColosseumState {
        ColosseumState {
            in_colosseum: self.in_colosseum,
            wave_number: self.phase.wave(),
            wave_started: self.phase != WavePhase::Idle,
        }
    }

    /// Process one host event. Returns the signals it produced, in order.
    pub fn process_event(
        &mut self,
        event: &ColosseumEvent,
        view: &impl GameView,
    ) -> Vec<ColosseumSignal> {
        if !self.settings.los_links_enabled {
            // membership is still tracked so re-enabling starts from reality
            if let ColosseumEvent::RegionChanged { in_colosseum } = *event {
                self.in_colosseum = in_colosseum;
            }
            return Vec::new();
        }

        match event {
            ColosseumEvent::Chat(message) => self.handle_chat(message, view),
            ColosseumEvent::Tick => self.handle_tick(view),
            ColosseumEvent::NpcSpawned { npc_id, instance_id } => {
                self.handle_npc_spawned(*npc_id, *instance_id, view)
            }
            ColosseumEvent::NpcDespawned { npc_id, instance_id } => {
                self.handle_npc_despawned(*npc_id, *instance_id)
            }
            ColosseumEvent::RegionChanged { in_colosseum } => {
                self.handle_region_changed(*in_colosseum)
            }
        }
    }

    /// Build a link for the live layout right now, independent of captures.
    pub fn current_link(&mut self, view: &impl GameView) -> Option<String> {
        if !self.in_colosseum {
            return None;
        }

        let spawns = self.collect_active_npcs(view);
        if spawns.is_empty() {
            return None;
        }

        let player = view.player_scene_position();
        Some(links::build_los_url(&spawns, player, false, false, &self.manticores))
    }

    // ─── Event handlers ─────────────────────────────────────────────────────

    fn handle_chat(&mut self, message: &str, view: &impl GameView) -> Vec<ColosseumSignal> {
        let mut signals = Vec::new();

        match parse_wave_message(message) {
            Some(WaveMessage::Started(wave)) => {
                if wave == 1 {
                    signals.push(ColosseumSignal::DisplayReset);
                }

                let tick = view.tick_count();
                debug!(wave, tick, "wave started");
                self.phase = WavePhase::Spawn { wave, start_tick: tick };
                self.clear_captures();
                signals.push(ColosseumSignal::WaveStarted { wave, tick });
            }
            Some(WaveMessage::Completed(wave)) => {
                debug!(wave, "wave completed");
                self.reset_wave_state();
                signals.push(ColosseumSignal::WaveCompleted {
                    wave,
                    tick: view.tick_count(),
                });
            }
            None => {}
        }

        signals
    }

    fn handle_tick(&mut self, view: &impl GameView) -> Vec<ColosseumSignal> {
        let mut signals = Vec::new();

        if let WavePhase::Spawn { wave, start_tick } = self.phase
            && view.tick_count() - start_tick > REINFORCEMENT_DELAY_TICKS
        {
            debug!(wave, "reinforcement phase");
            self.phase = WavePhase::Reinforcement { wave };
            self.captured = false;
            signals.push(ColosseumSignal::ReinforcementsStarted {
                wave,
                tick: view.tick_count(),
            });
        }

        if self.in_colosseum && self.pending_publish {
            self.pending_publish = false;
            signals.extend(self.publish_links(view));
        }

        // per-tick telegraph poll; graphic events alone miss occluded npcs
        if self.in_colosseum && self.phase != WavePhase::Idle {
            let completed = self.manticores.poll(view);
            if !completed.is_empty() {
                for instance_id in completed {
                    signals.push(ColosseumSignal::PatternComplete { instance_id });
                }
                signals.extend(self.refresh_manticore_links());
            }
        }

        signals
    }

    fn handle_npc_spawned(
        &mut self,
        npc_id: i32,
        instance_id: i64,
        view: &impl GameView,
    ) -> Vec<ColosseumSignal> {
        if !self.in_colosseum {
            return Vec::new();
        }

        // fresh manticores are only adopted during the initial spawn burst
        if npc_id == npc_ids::MANTICORE && matches!(self.phase, WavePhase::Spawn { .. }) {
            self.manticores.track(instance_id);
        }

        if !is_wave_npc(npc_id) {
            return Vec::new();
        }
        let Some((wave, reinforcement)) = self.phase.active() else {
            return Vec::new();
        };
        if self.captured {
            return Vec::new();
        }

        let spawns = self.collect_active_npcs(view);
        self.manticores.capture_spawn_states(reinforcement);

        let npc_count = spawns.len();
        if reinforcement {
            self.reinforcement_spawns = spawns;
        } else {
            self.wave_spawns = spawns;
        }
        self.captured = true;
        self.pending_publish = true;
        debug!(wave, reinforcement, npc_count, "spawn snapshot captured");

        vec![ColosseumSignal::SpawnsCaptured {
            wave,
            reinforcement,
            npc_count,
        }]
    }

    fn handle_npc_despawned(&mut self, npc_id: i32, instance_id: i64) -> Vec<ColosseumSignal> {
        if npc_id == npc_ids::MANTICORE {
            self.manticores.untrack(instance_id);
        }
        Vec::new()
    }

    fn handle_region_changed(&mut self, in_colosseum: bool) -> Vec<ColosseumSignal> {
        if in_colosseum == self.in_colosseum {
            return Vec::new();
        }

        self.in_colosseum = in_colosseum;
        // membership resets everything independent of chat text, which can
        // be missed entirely on a disconnect
        self.reset_wave_state();
        vec![ColosseumSignal::EncounterReset]
    }

    // ─── Capture and publishing ─────────────────────────────────────────────

    /// Live tracked NPCs with positions, adopting any manticores seen.
    fn collect_active_npcs(&mut self, view: &impl GameView) -> Vec<NpcSpawn> {
        let mut active = Vec::new();

        for npc in view.active_npcs() {
            if !is_wave_npc(npc.npc_id) {
                continue;
            }
            if npc.npc_id == npc_ids::MANTICORE {
                self.manticores.track(npc.instance_id);
            }
            active.push(npc);
        }

        active
    }

    fn publish_links(&mut self, view: &impl GameView) -> Vec<ColosseumSignal> {
        let wave = self.phase.wave();
        let mut signals = Vec::new();

        match self.phase {
            WavePhase::Spawn { .. } if !self.wave_spawns.is_empty() => {
                self.player_at_wave_spawn = view.player_scene_position();
                let url = links::build_los_url(
                    &self.wave_spawns,
                    self.player_at_wave_spawn,
                    true,
                    false,
                    &self.manticores,
                );
                signals.push(ColosseumSignal::LinkReady {
                    wave,
                    reinforcement: false,
                    url,
                });
            }
            WavePhase::Reinforcement { .. } if !self.reinforcement_spawns.is_empty() => {
                self.player_at_reinforcements = view.player_scene_position();
                let url = links::build_los_url(
                    &self.reinforcement_spawns,
                    self.player_at_reinforcements,
                    true,
                    true,
                    &self.manticores,
                );
                signals.push(ColosseumSignal::LinkReady {
                    wave,
                    reinforcement: true,
                    url,
                });
            }
            _ => {}
        }

        signals
    }

    /// Rebuild links containing manticores after a telegraph completes.
    fn refresh_manticore_links(&self) -> Vec<ColosseumSignal> {
        let wave = self.phase.wave();
        if wave == 0 {
            return Vec::new();
        }

        let mut signals = Vec::new();
        let has_manticore = |spawns: &[NpcSpawn]| {
            spawns.iter().any(|s| s.npc_id == npc_ids::MANTICORE)
        };

        if has_manticore(&self.wave_spawns) {
            let url = links::build_los_url(
                &self.wave_spawns,
                self.player_at_wave_spawn,
                true,
                false,
                &self.manticores,
            );
            signals.push(ColosseumSignal::LinkReady {
                wave,
                reinforcement: false,
                url,
            });
        }
        if has_manticore(&self.reinforcement_spawns) {
            let url = links::build_los_url(
                &self.reinforcement_spawns,
                self.player_at_reinforcements,
                true,
                true,
                &self.manticores,
            );
            signals.push(ColosseumSignal::LinkReady {
                wave,
                reinforcement: true,
                url,
            });
        }

        signals
    }

    /// Clear the latch and both phase snapshots; manticore tracking is kept.
    fn clear_captures(&mut self) {
        self.captured = false;
        self.pending_publish = false;
        self.wave_spawns.clear();
        self.reinforcement_spawns.clear();
        self.player_at_wave_spawn = None;
        self.player_at_reinforcements = None;
    }

    /// Full wave-state reset. Safe to apply repeatedly.
    fn reset_wave_state(&mut self) {
        self.phase = WavePhase::Idle;
        self.clear_captures();
        self.manticores.clear();
    }
}
