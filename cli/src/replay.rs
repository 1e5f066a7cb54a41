//! Event-script replay.
//!
//! Drives the tracker from a plain-text script, one directive per line, so a
//! recorded encounter can be replayed without the host client:
//!
//! ```text
//! # wave 4 pull
//! region in
//! varbit 9789 68
//! msg Wave: 4
//! npc 12812 20 44 60
//! player 40 60
//! tick 3
//! graphic 20 2281
//! tick 12
//! msg Wave 4 completed!
//! ```
//!
//! `npc`/`despawn` update the scripted world view and deliver the matching
//! spawn events; `tick N` advances the tick counter one event at a time.

use std::collections::HashMap;

use lanista_core::{ColosseumEvent, GameView, HostError, NpcSpawn, Point};
use thiserror::Error;

/// Errors while parsing a replay script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("unknown directive at line {line_number}: {directive}")]
    UnknownDirective { line_number: usize, directive: String },

    #[error("malformed arguments at line {line_number}: expected {expected}")]
    MalformedArguments {
        line_number: usize,
        expected: &'static str,
    },
}

/// One parsed script directive.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    Ticks(u32),
    Message(String),
    Region { in_colosseum: bool },
    NpcSpawn { npc_id: i32, instance_id: i64, x: i32, y: i32 },
    NpcDespawn { npc_id: i32, instance_id: i64 },
    Graphic { instance_id: i64, graphic_id: i32 },
    Player { x: i32, y: i32 },
    Varbit { varbit_id: i32, value: i32 },
}

/// Mutable scripted implementation of the host view.
#[derive(Debug, Default)]
pub struct ReplayView {
    tick: i32,
    npcs: Vec<NpcSpawn>,
    npc_graphics: HashMap<i64, i32>,
    varbits: HashMap<i32, i32>,
    player: Option<Point>,
}

impl ReplayView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a step's world-state changes and return the events to deliver.
    pub fn apply(&mut self, step: &ScriptStep) -> Vec<ColosseumEvent> {
        match *step {
            ScriptStep::Ticks(count) => {
                // one event per tick so the phase machine sees every advance
                (0..count).map(|_| ColosseumEvent::Tick).collect()
            }
            ScriptStep::Message(ref text) => vec![ColosseumEvent::Chat(text.clone())],
            ScriptStep::Region { in_colosseum } => {
                vec![ColosseumEvent::RegionChanged { in_colosseum }]
            }
            ScriptStep::NpcSpawn { npc_id, instance_id, x, y } => {
                self.npcs.retain(|n| n.instance_id != instance_id);
                self.npcs.push(NpcSpawn {
                    npc_id,
                    instance_id,
                    scene_position: Point::new(x, y),
                });
                vec![ColosseumEvent::NpcSpawned { npc_id, instance_id }]
            }
            ScriptStep::NpcDespawn { npc_id, instance_id } => {
                self.npcs.retain(|n| n.instance_id != instance_id);
                self.npc_graphics.remove(&instance_id);
                vec![ColosseumEvent::NpcDespawned { npc_id, instance_id }]
            }
            ScriptStep::Graphic { instance_id, graphic_id } => {
                self.npc_graphics.insert(instance_id, graphic_id);
                Vec::new()
            }
            ScriptStep::Player { x, y } => {
                self.player = Some(Point::new(x, y));
                Vec::new()
            }
            ScriptStep::Varbit { varbit_id, value } => {
                self.varbits.insert(varbit_id, value);
                Vec::new()
            }
        }
    }

    /// Advance the tick counter. Called once per delivered tick event.
    pub fn advance_tick(&mut self) {
        self.tick += 1;
    }
}

impl GameView for ReplayView {
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

/// Parse a whole script. Blank lines and `#` comments are skipped.
pub fn parse_script(content: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_number = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        steps.push(parse_line(line_number, line)?);
    }

    Ok(steps)
}

fn parse_line(line_number: usize, line: &str) -> Result<ScriptStep, ScriptError> {
    let (directive, rest) = line.split_once(' ').unwrap_or((line, ""));
    let args: Vec<&str> = rest.split_whitespace().collect();

    match directive {
        "tick" => {
            let count = match args.as_slice() {
                [] => 1,
                [n] => n.parse().map_err(|_| ScriptError::MalformedArguments {
                    line_number,
                    expected: "tick [count]",
                })?,
                _ => {
                    return Err(ScriptError::MalformedArguments {
                        line_number,
                        expected: "tick [count]",
                    });
                }
            };
            Ok(ScriptStep::Ticks(count))
        }
        "msg" => Ok(ScriptStep::Message(rest.trim().to_string())),
        "region" => match args.as_slice() {
            ["in"] => Ok(ScriptStep::Region { in_colosseum: true }),
            ["out"] => Ok(ScriptStep::Region { in_colosseum: false }),
            _ => Err(ScriptError::MalformedArguments {
                line_number,
                expected: "region in|out",
            }),
        },
        "npc" => parse_ints::<4>(&args)
            .map(|[npc_id, instance_id, x, y]| ScriptStep::NpcSpawn {
                npc_id: npc_id as i32,
                instance_id,
                x: x as i32,
                y: y as i32,
            })
            .ok_or(ScriptError::MalformedArguments {
                line_number,
                expected: "npc <npc_id> <instance_id> <x> <y>",
            }),
        "despawn" => parse_ints::<2>(&args)
            .map(|[npc_id, instance_id]| ScriptStep::NpcDespawn {
                npc_id: npc_id as i32,
                instance_id,
            })
            .ok_or(ScriptError::MalformedArguments {
                line_number,
                expected: "despawn <npc_id> <instance_id>",
            }),
        "graphic" => parse_ints::<2>(&args)
            .map(|[instance_id, graphic_id]| ScriptStep::Graphic {
                instance_id,
                graphic_id: graphic_id as i32,
            })
            .ok_or(ScriptError::MalformedArguments {
                line_number,
                expected: "graphic <instance_id> <graphic_id>",
            }),
        "player" => parse_ints::<2>(&args)
            .map(|[x, y]| ScriptStep::Player {
                x: x as i32,
                y: y as i32,
            })
            .ok_or(ScriptError::MalformedArguments {
                line_number,
                expected: "player <x> <y>",
            }),
        "varbit" => parse_ints::<2>(&args)
            .map(|[varbit_id, value]| ScriptStep::Varbit {
                varbit_id: varbit_id as i32,
                value: value as i32,
            })
            .ok_or(ScriptError::MalformedArguments {
                line_number,
                expected: "varbit <id> <value>",
            }),
        other => Err(ScriptError::UnknownDirective {
            line_number,
            directive: other.to_string(),
        }),
    }
}

fn parse_ints<const N: usize>(args: &[&str]) -> Option<[i64; N]> {
    if args.len() != N {
        return None;
    }

    let mut out = [0i64; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.parse().ok()?;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directives() {
        let script = "\
# comment
region in
msg Wave: 4
npc 12812 20 44 60
tick 3
graphic 20 2281
player 40 60
despawn 12812 20
region out
";
        let steps = parse_script(script).unwrap();
        assert_eq!(steps.len(), 8);
        assert_eq!(steps[0], ScriptStep::Region { in_colosseum: true });
        assert_eq!(steps[1], ScriptStep::Message("Wave: 4".to_string()));
        assert_eq!(
            steps[2],
            ScriptStep::NpcSpawn { npc_id: 12812, instance_id: 20, x: 44, y: 60 }
        );
        assert_eq!(steps[3], ScriptStep::Ticks(3));
    }

    #[test]
    fn bare_tick_is_one() {
        assert_eq!(parse_script("tick").unwrap(), vec![ScriptStep::Ticks(1)]);
    }

    #[test]
    fn rejects_unknown_directives() {
        let err = parse_script("warp 1 2").unwrap_err();
        assert!(matches!(err, ScriptError::UnknownDirective { line_number: 1, .. }));
    }

    #[test]
    fn rejects_malformed_arguments() {
        let err = parse_script("npc 12812 20").unwrap_err();
        assert!(matches!(err, ScriptError::MalformedArguments { line_number: 1, .. }));
    }

    #[test]
    fn apply_updates_world_state() {
        let mut view = ReplayView::new();

        let events = view.apply(&ScriptStep::NpcSpawn {
            npc_id: 12812,
            instance_id: 20,
            x: 44,
            y: 60,
        });
        assert_eq!(events.len(), 1);
        assert_eq!(view.active_npcs().len(), 1);

        view.apply(&ScriptStep::Graphic { instance_id: 20, graphic_id: 2281 });
        assert_eq!(view.npc_graphic(20), Some(2281));

        view.apply(&ScriptStep::NpcDespawn { npc_id: 12812, instance_id: 20 });
        assert!(view.active_npcs().is_empty());
        assert_eq!(view.npc_graphic(20), None);
    }
}
