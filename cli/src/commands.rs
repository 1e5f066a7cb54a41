use std::io::Write;

use lanista_core::{
    ActiveModifierSet, ColosseumSignal, Modifier, SignalHandler, WaveSpawn, WaveSpawns,
    wave_panel_lines,
};

use crate::context::CliContext;
use crate::replay;

/// Predict and print the spawn table for a wave.
///
/// Modifiers are given as a comma-separated list, optionally with a level:
/// `quartet,bees:2,dynamicduo`.
pub fn predict(wave: u8, modifiers_arg: Option<&str>, ctx: &CliContext) -> Result<(), String> {
    let modifiers = parse_modifier_list(modifiers_arg.unwrap_or(""))?;
    let spawns = WaveSpawns::for_wave(wave, &modifiers);

    if spawns.is_empty() {
        println!("wave {wave}: nothing to predict");
        return Ok(());
    }

    println!("Wave {wave}");
    print_spawn_list("spawns", &spawns.spawns, ctx);
    print_spawn_list("reinforcements", &spawns.reinforcements, ctx);
    print_spawn_list("modifier spawns", &spawns.modifier_spawns, ctx);
    Ok(())
}

/// Replay an event script through the tracker, printing emitted signals.
pub fn replay_file(path: &str, ctx: &mut CliContext) -> Result<(), String> {
    let content = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}\n"))?;
    let steps = replay::parse_script(&content).map_err(|e| format!("{e}\n"))?;

    let mut total_signals = 0usize;
    for step in &steps {
        let events = ctx.view.apply(step);
        for event in events {
            if matches!(event, lanista_core::ColosseumEvent::Tick) {
                ctx.view.advance_tick();
            }
            let signals = ctx.tracker.process_event(&event, &ctx.view);
            ctx.splits.handle_signals(&signals);
            for signal in &signals {
                println!("{}", describe_signal(signal));
            }
            total_signals += signals.len();
        }
    }

    println!("replayed {} steps, {} signals", steps.len(), total_signals);
    Ok(())
}

/// Print the current run snapshot and waves panel.
pub fn show_state(ctx: &CliContext) {
    let state = ctx.tracker.state();
    println!(
        "in colosseum: {}, wave: {}, phase: {:?}",
        state.in_colosseum,
        state.wave_number,
        ctx.tracker.phase()
    );

    let modifiers = ActiveModifierSet::from_view(&ctx.view);
    for line in wave_panel_lines(&state, &modifiers, &ctx.settings) {
        println!("  {}", line.text);
    }
}

/// Print the active modifiers resolved from the scripted view.
pub fn show_modifiers(ctx: &CliContext) {
    let modifiers = ActiveModifierSet::from_view(&ctx.view);
    if modifiers.is_empty() {
        println!("no active modifiers");
        return;
    }

    for active in modifiers.iter() {
        println!("{}", active.modifier.name(active.level));
    }
}

/// Print a link for the live layout, if one is available.
pub fn show_link(ctx: &mut CliContext) {
    // split borrow: the tracker needs the view while collecting
    let CliContext { tracker, view, .. } = ctx;
    match tracker.current_link(view) {
        Some(url) => println!("{url}"),
        None => println!("no link available"),
    }
}

/// Print per-wave splits for the replayed run.
pub fn show_splits(ctx: &CliContext) {
    let splits = ctx.splits.splits();
    if splits.is_empty() {
        println!("no splits recorded");
        return;
    }

    for split in splits {
        match split.duration_ticks {
            Some(ticks) => println!("wave {:>2}: {} ticks", split.wave, ticks),
            None => println!("wave {:>2}: in progress", split.wave),
        }
    }
    println!("total: {} ticks", ctx.splits.total_ticks());
}

pub fn reset(ctx: &mut CliContext) {
    ctx.reset();
    println!("session reset");
}

pub fn exit() {
    write!(std::io::stdout(), "quitting...").expect("error exiting");
    std::io::stdout().flush().expect("error flushing stdout");
}

fn print_spawn_list(label: &str, spawns: &[WaveSpawn], ctx: &CliContext) {
    if spawns.is_empty() {
        return;
    }

    println!("  {label}:");
    for spawn in spawns {
        println!(
            "    {}x {}",
            spawn.count,
            spawn.enemy.name(ctx.settings.enemy_name_mode)
        );
    }
}

fn parse_modifier_list(arg: &str) -> Result<ActiveModifierSet, String> {
    let mut modifiers = Vec::new();

    for token in arg.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let (name, level) = match token.split_once(':') {
            Some((name, level)) => {
                let level: u8 = level
                    .parse()
                    .map_err(|_| format!("bad level in modifier '{token}'\n"))?;
                (name, level)
            }
            None => (token, 1),
        };

        let modifier =
            parse_modifier(name).ok_or_else(|| format!("unknown modifier '{name}'\n"))?;
        modifiers.push((modifier, level));
    }

    Ok(ActiveModifierSet::from_modifiers(modifiers))
}

fn parse_modifier(name: &str) -> Option<Modifier> {
    let wanted = normalize(name);
    Modifier::ALL
        .iter()
        .copied()
        .find(|m| normalize(&m.name(1)) == wanted)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase()
}

fn describe_signal(signal: &ColosseumSignal) -> String {
    match signal {
        ColosseumSignal::WaveStarted { wave, tick } => {
            format!("wave {wave} started (tick {tick})")
        }
        ColosseumSignal::WaveCompleted { wave, tick } => {
            format!("wave {wave} completed (tick {tick})")
        }
        ColosseumSignal::DisplayReset => "new run, display reset".to_string(),
        ColosseumSignal::ReinforcementsStarted { wave, tick } => {
            format!("wave {wave} reinforcements (tick {tick})")
        }
        ColosseumSignal::SpawnsCaptured { wave, reinforcement, npc_count } => {
            let phase = if *reinforcement { "reinforcement" } else { "spawn" };
            format!("wave {wave} {phase} snapshot: {npc_count} npcs")
        }
        ColosseumSignal::LinkReady { wave, reinforcement, url } => {
            let phase = if *reinforcement { "reinforcements" } else { "spawns" };
            format!("wave {wave} {phase}: {url}")
        }
        ColosseumSignal::PatternComplete { instance_id } => {
            format!("manticore {instance_id} pattern complete")
        }
        ColosseumSignal::EncounterReset => "left the colosseum, state reset".to_string(),
    }
}
