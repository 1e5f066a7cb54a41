//! Scripted-sequence tests for the wave tracker.
//!
//! Each test drives the tracker with an ordered event sequence against a
//! scripted host view and asserts on the emitted signals.

use hashbrown::HashMap;
use lanista_types::TrackerSettings;

use crate::client::{GameView, HostError, NpcSpawn, Point};
use crate::events::ColosseumEvent;
use crate::game_data::{graphics, npc_ids};

use super::{ColosseumSignal, WavePhase, WaveTracker};

#[derive(Default)]
struct ScriptedView {
    tick: i32,
    npcs: Vec<NpcSpawn>,
    npc_graphics: HashMap<i64, i32>,
    varbits: HashMap<i32, i32>,
    player: Option<Point>,
}

impl GameView for ScriptedView {
    fn tick_count(&self) -> i32 {
        self.tick
    }

    fn varbit(&self, varbit_id: i32) -> Result<i32, HostError> {
        self.varbits
            .get(&varbit_id)
            .copied()
            .ok_or(HostError::VarbitUnavailable(varbit_id))
    }

    fn active_npcs(&self) -> Vec<NpcSpawn> {
        self.npcs.clone()
    }

    fn npc_graphic(&self, instance_id: i64) -> Option<i32> {
        self.npc_graphics.get(&instance_id).copied()
    }

    fn player_scene_position(&self) -> Option<Point> {
        self.player
    }
}

fn npc(npc_id: i32, instance_id: i64, x: i32, y: i32) -> NpcSpawn {
    NpcSpawn {
        npc_id,
        instance_id,
        scene_position: Point::new(x, y),
    }
}

/// Advance one tick and process the tick event.
fn tick(tracker: &mut WaveTracker, view: &mut ScriptedView) -> Vec<ColosseumSignal> {
    view.tick += 1;
    tracker.process_event(&ColosseumEvent::Tick, view)
}

fn enter_colosseum(tracker: &mut WaveTracker, view: &ScriptedView) {
    tracker.process_event(&ColosseumEvent::RegionChanged { in_colosseum: true }, view);
}

fn start_wave(tracker: &mut WaveTracker, view: &ScriptedView, wave: u8) -> Vec<ColosseumSignal> {
    tracker.process_event(&ColosseumEvent::Chat(format!("Wave: {wave}")), view)
}

fn spawn(
    tracker: &mut WaveTracker,
    view: &ScriptedView,
    npc_id: i32,
    instance_id: i64,
) -> Vec<ColosseumSignal> {
    tracker.process_event(&ColosseumEvent::NpcSpawned { npc_id, instance_id }, view)
}

fn captures(signals: &[ColosseumSignal]) -> Vec<(u8, bool)> {
    signals
        .iter()
        .filter_map(|s| match s {
            ColosseumSignal::SpawnsCaptured { wave, reinforcement, .. } => {
                Some((*wave, *reinforcement))
            }
            _ => None,
        })
        .collect()
}

fn links(signals: &[ColosseumSignal]) -> Vec<(bool, String)> {
    signals
        .iter()
        .filter_map(|s| match s {
            ColosseumSignal::LinkReady { reinforcement, url, .. } => {
                Some((*reinforcement, url.clone()))
            }
            _ => None,
        })
        .collect()
}

#[test]
fn late_spawn_is_captured_in_reinforcement_phase() {
    let mut view = ScriptedView::default();
    let mut tracker = WaveTracker::default();
    enter_colosseum(&mut tracker, &view);

    start_wave(&mut tracker, &view, 1);

    let mut all = Vec::new();
    for _ in 0..11 {
        all.extend(tick(&mut tracker, &mut view));
    }
    // tick delta 11 > 10 flipped the phase before the spawn arrives
    assert!(matches!(tracker.phase(), WavePhase::Reinforcement { wave: 1 }));
    assert!(all
        .iter()
        .any(|s| matches!(s, ColosseumSignal::ReinforcementsStarted { wave: 1, .. })));

    view.npcs = vec![npc(npc_ids::SERPENT_SHAMAN, 10, 42, 63)];
    let first = spawn(&mut tracker, &view, npc_ids::SERPENT_SHAMAN, 10);
    assert_eq!(captures(&first), vec![(1, true)]);

    // the latch holds for the rest of the phase
    let second = spawn(&mut tracker, &view, npc_ids::SERPENT_SHAMAN, 11);
    assert!(captures(&second).is_empty());
}

#[test]
fn spawn_phase_capture_publishes_ws_link_next_tick() {
    let mut view = ScriptedView::default();
    let mut tracker = WaveTracker::default();
    enter_colosseum(&mut tracker, &view);

    start_wave(&mut tracker, &view, 3);
    view.npcs = vec![npc(npc_ids::SERPENT_SHAMAN, 10, 42, 63)];
    view.player = Some(Point::new(40, 60));

    let spawned = spawn(&mut tracker, &view, npc_ids::SERPENT_SHAMAN, 10);
    assert_eq!(captures(&spawned), vec![(3, false)]);
    assert!(links(&spawned).is_empty());

    let published = tick(&mut tracker, &mut view);
    assert_eq!(
        links(&published),
        vec![(false, "https://los.colosim.com/?102001.#5896_ws".to_string())]
    );
}

#[test]
fn both_phases_capture_once_each() {
    let mut view = ScriptedView::default();
    let mut tracker = WaveTracker::default();
    enter_colosseum(&mut tracker, &view);

    start_wave(&mut tracker, &view, 4);
    view.npcs = vec![npc(npc_ids::SERPENT_SHAMAN, 10, 42, 63)];
    let first = spawn(&mut tracker, &view, npc_ids::SERPENT_SHAMAN, 10);
    assert_eq!(captures(&first), vec![(4, false)]);

    for _ in 0..11 {
        tick(&mut tracker, &mut view);
    }

    view.npcs.push(npc(npc_ids::JAGUAR_WARRIOR, 11, 50, 55));
    let reinf = spawn(&mut tracker, &view, npc_ids::JAGUAR_WARRIOR, 11);
    assert_eq!(captures(&reinf), vec![(4, true)]);

    assert_eq!(tracker.wave_spawns().len(), 1);
    assert_eq!(tracker.reinforcement_spawns().len(), 2);
}

#[test]
fn wave_one_resets_display() {
    let view = ScriptedView::default();
    let mut tracker = WaveTracker::default();
    enter_colosseum(&mut tracker, &view);

    let signals = start_wave(&mut tracker, &view, 1);
    assert_eq!(signals[0], ColosseumSignal::DisplayReset);
    assert!(matches!(signals[1], ColosseumSignal::WaveStarted { wave: 1, .. }));

    let later = start_wave(&mut tracker, &view, 2);
    assert!(!later.contains(&ColosseumSignal::DisplayReset));
}

#[test]
fn wave_complete_resets_state() {
    let mut view = ScriptedView::default();
    let mut tracker = WaveTracker::default();
    enter_colosseum(&mut tracker, &view);

    start_wave(&mut tracker, &view, 2);
    view.npcs = vec![npc(npc_ids::SERPENT_SHAMAN, 10, 42, 63)];
    spawn(&mut tracker, &view, npc_ids::SERPENT_SHAMAN, 10);
    assert_eq!(tracker.wave_spawns().len(), 1);

    let signals =
        tracker.process_event(&ColosseumEvent::Chat("Wave 2 completed!".to_string()), &view);
    assert!(signals
        .iter()
        .any(|s| matches!(s, ColosseumSignal::WaveCompleted { wave: 2, .. })));

    assert_eq!(tracker.phase(), WavePhase::Idle);
    assert!(tracker.wave_spawns().is_empty());
    assert!(tracker.reinforcement_spawns().is_empty());

    // spawns while idle are not captured
    let idle_spawn = spawn(&mut tracker, &view, npc_ids::SERPENT_SHAMAN, 12);
    assert!(captures(&idle_spawn).is_empty());
}

#[test]
fn region_exit_resets_and_is_idempotent() {
    let mut view = ScriptedView::default();
    let mut tracker = WaveTracker::default();
    enter_colosseum(&mut tracker, &view);

    start_wave(&mut tracker, &view, 5);
    view.npcs = vec![npc(npc_ids::MANTICORE, 20, 44, 60)];
    spawn(&mut tracker, &view, npc_ids::MANTICORE, 20);
    assert!(tracker.manticores().is_tracked(20));

    let exit =
        tracker.process_event(&ColosseumEvent::RegionChanged { in_colosseum: false }, &view);
    assert_eq!(exit, vec![ColosseumSignal::EncounterReset]);
    assert_eq!(tracker.phase(), WavePhase::Idle);
    assert!(!tracker.manticores().is_tracked(20));

    // no membership change, no signal
    let again =
        tracker.process_event(&ColosseumEvent::RegionChanged { in_colosseum: false }, &view);
    assert!(again.is_empty());
}

#[test]
fn wave_start_clears_previous_captures() {
    let mut view = ScriptedView::default();
    let mut tracker = WaveTracker::default();
    enter_colosseum(&mut tracker, &view);

    start_wave(&mut tracker, &view, 2);
    view.npcs = vec![npc(npc_ids::SERPENT_SHAMAN, 10, 42, 63)];
    spawn(&mut tracker, &view, npc_ids::SERPENT_SHAMAN, 10);
    assert_eq!(tracker.wave_spawns().len(), 1);

    start_wave(&mut tracker, &view, 3);
    assert!(tracker.wave_spawns().is_empty());

    // the latch re-armed: the new wave captures again
    let signals = spawn(&mut tracker, &view, npc_ids::SERPENT_SHAMAN, 10);
    assert_eq!(captures(&signals), vec![(3, false)]);
}

#[test]
fn manticore_telegraph_completion_refreshes_link() {
    let mut view = ScriptedView::default();
    let mut tracker = WaveTracker::default();
    enter_colosseum(&mut tracker, &view);

    start_wave(&mut tracker, &view, 4);
    view.npcs = vec![npc(npc_ids::MANTICORE, 20, 44, 60)];
    spawn(&mut tracker, &view, npc_ids::MANTICORE, 20);

    let published = tick(&mut tracker, &mut view);
    let initial = links(&published);
    assert_eq!(initial.len(), 1);
    assert!(initial[0].1.contains("4w."), "telegraph pending: {}", initial[0].1);

    // telegraph finishes while the manticore is occluded; the poll catches it
    view.npc_graphics.insert(20, graphics::MANTICORE_ORB_CYCLE_DONE);
    let refreshed = tick(&mut tracker, &mut view);
    assert!(refreshed
        .iter()
        .any(|s| matches!(s, ColosseumSignal::PatternComplete { instance_id: 20 })));

    let updated = links(&refreshed);
    assert_eq!(updated.len(), 1);
    assert!(updated[0].1.contains("4."), "telegraph complete: {}", updated[0].1);
    assert!(!updated[0].1.contains("4w."));
}

#[test]
fn manticores_spawning_late_are_not_adopted() {
    let mut view = ScriptedView::default();
    let mut tracker = WaveTracker::default();
    enter_colosseum(&mut tracker, &view);

    start_wave(&mut tracker, &view, 9);
    for _ in 0..11 {
        tick(&mut tracker, &mut view);
    }
    assert!(matches!(tracker.phase(), WavePhase::Reinforcement { .. }));

    // a manticore spawn event in the reinforcement phase does not register
    // a new instance (it is only picked up if it appears in a snapshot)
    view.npcs = vec![];
    spawn(&mut tracker, &view, npc_ids::MANTICORE, 30);
    assert!(!tracker.manticores().is_tracked(30));
}

#[test]
fn despawn_drops_manticore_state() {
    let mut view = ScriptedView::default();
    let mut tracker = WaveTracker::default();
    enter_colosseum(&mut tracker, &view);

    start_wave(&mut tracker, &view, 4);
    view.npcs = vec![npc(npc_ids::MANTICORE, 20, 44, 60)];
    spawn(&mut tracker, &view, npc_ids::MANTICORE, 20);
    assert!(tracker.manticores().is_tracked(20));

    tracker.process_event(
        &ColosseumEvent::NpcDespawned { npc_id: npc_ids::MANTICORE, instance_id: 20 },
        &view,
    );
    assert!(!tracker.manticores().is_tracked(20));
}

#[test]
fn untracked_npcs_do_not_trigger_capture() {
    let mut view = ScriptedView::default();
    let mut tracker = WaveTracker::default();
    enter_colosseum(&mut tracker, &view);

    start_wave(&mut tracker, &view, 1);
    view.npcs = vec![npc(npc_ids::FREMENNIK, 40, 41, 62)];

    // fremenniks are not in the LoS table and never latch a capture
    let signals = spawn(&mut tracker, &view, npc_ids::FREMENNIK, 40);
    assert!(captures(&signals).is_empty());
}

#[test]
fn disabled_settings_suppress_everything() {
    let mut view = ScriptedView::default();
    let settings = TrackerSettings {
        los_links_enabled: false,
        ..TrackerSettings::default()
    };
    let mut tracker = WaveTracker::new(settings);

    enter_colosseum(&mut tracker, &view);
    assert!(start_wave(&mut tracker, &view, 1).is_empty());
    view.npcs = vec![npc(npc_ids::SERPENT_SHAMAN, 10, 42, 63)];
    assert!(spawn(&mut tracker, &view, npc_ids::SERPENT_SHAMAN, 10).is_empty());
    assert!(tick(&mut tracker, &mut view).is_empty());

    // membership was still tracked while disabled
    assert!(tracker.in_colosseum());
}

#[test]
fn disabling_links_drops_wave_state() {
    let view = ScriptedView::default();
    let mut tracker = WaveTracker::default();
    enter_colosseum(&mut tracker, &view);
    start_wave(&mut tracker, &view, 6);
    assert_ne!(tracker.phase(), WavePhase::Idle);

    tracker.set_settings(TrackerSettings {
        los_links_enabled: false,
        ..TrackerSettings::default()
    });
    assert_eq!(tracker.phase(), WavePhase::Idle);
}

#[test]
fn current_link_requires_colosseum_and_npcs() {
    let mut view = ScriptedView::default();
    let mut tracker = WaveTracker::default();

    assert_eq!(tracker.current_link(&view), None);

    enter_colosseum(&mut tracker, &view);
    assert_eq!(tracker.current_link(&view), None);

    view.npcs = vec![npc(npc_ids::SERPENT_SHAMAN, 10, 42, 63)];
    assert_eq!(
        tracker.current_link(&view),
        Some("https://los.colosim.com/?102001.".to_string())
    );
}

#[test]
fn state_snapshot_follows_phase() {
    let mut view = ScriptedView::default();
    let mut tracker = WaveTracker::default();
    enter_colosseum(&mut tracker, &view);

    assert_eq!(tracker.state().wave_number, 0);
    assert!(!tracker.state().wave_started);

    start_wave(&mut tracker, &view, 7);
    let state = tracker.state();
    assert!(state.in_colosseum);
    assert_eq!(state.wave_number, 7);
    assert!(state.wave_started);

    for _ in 0..11 {
        tick(&mut tracker, &mut view);
    }
    assert_eq!(tracker.state().wave_number, 7);
}
