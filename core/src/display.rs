//! Waves panel content.
//!
//! Builds the line list a front-end renders for the current and next wave.
//! Pure data: colors, fonts and layout belong to the renderer.

use lanista_types::{TrackerSettings, WaveDisplayMode};
use serde::Serialize;

use crate::spawns::{BOSS_WAVE, WaveSpawn, WaveSpawns};
use crate::state::{ActiveModifierSet, ColosseumState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PanelLineKind {
    Title,
    Spawn,
    Reinforcement,
    ModifierSpawn,
    Spacer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelLine {
    pub kind: PanelLineKind,
    pub text: String,
}

/// Panel lines for the waves display. Empty once the run is past wave 12 or
/// the display is off.
pub fn wave_panel_lines(
    state: &ColosseumState,
    modifiers: &ActiveModifierSet,
    settings: &TrackerSettings,
) -> Vec<PanelLine> {
    let mode = settings.waves_display_mode;
    let mut lines = Vec::new();

    if mode == WaveDisplayMode::Off || state.wave_number > BOSS_WAVE {
        return lines;
    }

    if mode.show_current() {
        push_wave_block(&mut lines, state.wave_number, &state.wave_spawns(modifiers), settings);
    }

    if mode == WaveDisplayMode::Both && state.wave_number != BOSS_WAVE {
        lines.push(PanelLine {
            kind: PanelLineKind::Spacer,
            text: String::new(),
        });
    }

    if mode.show_next() && state.wave_number != BOSS_WAVE {
        push_wave_block(
            &mut lines,
            state.wave_number.saturating_add(1),
            &state.next_wave_spawns(modifiers),
            settings,
        );
    }

    lines
}

fn push_wave_block(
    lines: &mut Vec<PanelLine>,
    wave: u8,
    spawns: &WaveSpawns,
    settings: &TrackerSettings,
) {
    lines.push(PanelLine {
        kind: PanelLineKind::Title,
        text: format!("Wave {wave}"),
    });

    for spawn in &spawns.spawns {
        lines.push(spawn_line(PanelLineKind::Spawn, spawn, settings));
    }
    for spawn in &spawns.reinforcements {
        lines.push(spawn_line(PanelLineKind::Reinforcement, spawn, settings));
    }
    if settings.show_modifier_spawns {
        for spawn in &spawns.modifier_spawns {
            lines.push(spawn_line(PanelLineKind::ModifierSpawn, spawn, settings));
        }
    }
}

fn spawn_line(kind: PanelLineKind, spawn: &WaveSpawn, settings: &TrackerSettings) -> PanelLine {
    PanelLine {
        kind,
        text: format!("{}x {}", spawn.count, spawn.enemy.name(settings.enemy_name_mode)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lanista_types::EnemyNameMode;

    fn state(wave: u8) -> ColosseumState {
        ColosseumState {
            in_colosseum: true,
            wave_number: wave,
            wave_started: true,
        }
    }

    #[test]
    fn both_mode_shows_current_and_next() {
        let settings = TrackerSettings::default();
        let lines = wave_panel_lines(&state(1), &ActiveModifierSet::default(), &settings);

        let titles: Vec<&str> = lines
            .iter()
            .filter(|l| l.kind == PanelLineKind::Title)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(titles, vec!["Wave 1", "Wave 2"]);
        assert!(lines.iter().any(|l| l.kind == PanelLineKind::Spacer));
    }

    #[test]
    fn colloquial_names_by_default() {
        let settings = TrackerSettings::default();
        let lines = wave_panel_lines(&state(1), &ActiveModifierSet::default(), &settings);
        assert!(lines.iter().any(|l| l.text == "3x Frem"));
        assert!(lines.iter().any(|l| l.text == "1x Mage"));
    }

    #[test]
    fn official_names_when_configured() {
        let settings = TrackerSettings {
            enemy_name_mode: EnemyNameMode::Official,
            ..TrackerSettings::default()
        };
        let lines = wave_panel_lines(&state(1), &ActiveModifierSet::default(), &settings);
        assert!(lines.iter().any(|l| l.text == "1x Serpent shaman"));
    }

    #[test]
    fn boss_wave_has_no_next_block() {
        let settings = TrackerSettings::default();
        let lines = wave_panel_lines(&state(BOSS_WAVE), &ActiveModifierSet::default(), &settings);

        let titles: Vec<&str> = lines
            .iter()
            .filter(|l| l.kind == PanelLineKind::Title)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(titles, vec!["Wave 12"]);
        assert!(!lines.iter().any(|l| l.kind == PanelLineKind::Spacer));
    }

    #[test]
    fn past_the_boss_wave_shows_nothing() {
        let settings = TrackerSettings::default();
        assert!(wave_panel_lines(&state(13), &ActiveModifierSet::default(), &settings).is_empty());
    }

    #[test]
    fn off_mode_shows_nothing() {
        let settings = TrackerSettings {
            waves_display_mode: WaveDisplayMode::Off,
            ..TrackerSettings::default()
        };
        assert!(wave_panel_lines(&state(1), &ActiveModifierSet::default(), &settings).is_empty());
    }

    #[test]
    fn modifier_spawns_can_be_hidden() {
        use crate::game_data::Modifier;

        let modifiers = ActiveModifierSet::from_modifiers([(Modifier::Bees, 1)]);

        let shown = wave_panel_lines(&state(1), &modifiers, &TrackerSettings::default());
        assert!(shown.iter().any(|l| l.kind == PanelLineKind::ModifierSpawn));

        let settings = TrackerSettings {
            show_modifier_spawns: false,
            ..TrackerSettings::default()
        };
        let hidden = wave_panel_lines(&state(1), &modifiers, &settings);
        assert!(!hidden.iter().any(|l| l.kind == PanelLineKind::ModifierSpawn));
    }
}
