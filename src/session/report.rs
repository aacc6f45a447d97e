//! Plain-text views of a session for terminal hosts

use std::fmt::Write;

use crate::board::HexCoord;
use crate::core::types::PlayerSide;
use crate::game::{GameEvent, GameState};
use crate::rules::{actions_remaining, controlled_cells, controlled_hex_counts, enemies_in_domain};
use crate::session::interaction::InteractionState;

/// Turn header, mana, hands and creature roster
pub fn state_summary(state: &GameState) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Turn {} | Player {} | Phase {}",
        state.turn, state.current_player, state.phase
    );
    for side in PlayerSide::all() {
        let player = state.player(side);
        let hand: Vec<String> = player.hand.iter().map(|k| k.to_string()).collect();
        let remaining = actions_remaining(state, side);
        let _ = writeln!(
            out,
            "  {}: mana {:>2} | hand [{}] | can move {} / attack {}",
            side,
            player.mana,
            hand.join(", "),
            remaining.can_move,
            remaining.can_attack
        );
    }
    let _ = writeln!(out, "Creatures:");
    for creature in state.creatures.values() {
        let mut flags = Vec::new();
        if creature.has_moved {
            flags.push("moved".to_string());
        }
        if creature.has_attacked {
            flags.push("attacked".to_string());
        }
        flags.extend(creature.status_effects.iter().map(|e| e.to_string()));
        let _ = writeln!(
            out,
            "  {} {} ({}) at {} hp {}/{} atk {} spd {} {}",
            creature.id,
            creature.kind,
            creature.owner,
            creature.position,
            creature.health,
            creature.max_health,
            creature.attack,
            creature.speed,
            if flags.is_empty() { String::new() } else { format!("[{}]", flags.join(", ")) }
        );
    }
    out.trim_end().to_string()
}

pub fn territory(state: &GameState) -> String {
    let counts = controlled_hex_counts(state);
    let mut out = format!(
        "Territory: A {} | B {} | neutral {}",
        counts.a, counts.b, counts.neutral
    );
    for side in PlayerSide::all() {
        let cells: Vec<String> = controlled_cells(state, side).iter().map(|c| c.to_string()).collect();
        let _ = write!(out, "\n  {} ({}): {}", side, counts.get(side), cells.join(" "));
    }
    out
}

/// Tower health, domain occupants and the last upkeep report
pub fn towers(state: &GameState) -> String {
    let mut out = String::new();
    for tower in &state.towers {
        let template = tower.kind.template();
        let enemies = enemies_in_domain(state, tower.position);
        let _ = writeln!(
            out,
            "{} ({}) at {} hp {}/{}{} | {} dmg, {} in range {} | {} enemies in domain",
            template.name,
            tower.owner,
            tower.position,
            tower.health,
            tower.max_health,
            if tower.is_fallen() { " FALLEN" } else { "" },
            tower.damage,
            tower.domain_effect,
            tower.domain_range,
            enemies.len()
        );
    }
    if state.last_tower_report.is_empty() {
        let _ = write!(out, "Last upkeep: no tower activity");
    } else {
        let _ = write!(out, "Last upkeep:");
        for line in &state.last_tower_report {
            let _ = write!(out, "\n  {}", line);
        }
    }
    out
}

pub fn target_list(cells: &[HexCoord]) -> String {
    if cells.is_empty() {
        return "No valid targets".to_string();
    }
    let list: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
    format!("Targets: {}", list.join(" "))
}

pub fn selection(state: &GameState, interaction: &InteractionState) -> String {
    let Some(cell) = interaction.selected_cell else {
        return "Nothing selected".to_string();
    };
    let owner = state
        .board
        .owner(cell)
        .map_or_else(|| "neutral".to_string(), |p| format!("player {}", p));
    match interaction.selected_creature.and_then(|id| state.creature(id)) {
        Some(creature) => format!(
            "{} ({}) holding {} {} hp {}/{}",
            cell, owner, creature.kind, creature.id, creature.health, creature.max_health
        ),
        None => format!("{} ({}) empty", cell, owner),
    }
}

pub fn event_log(events: &[GameEvent]) -> String {
    if events.is_empty() {
        return "No events yet".to_string();
    }
    events
        .iter()
        .map(|e| format!("[turn {}] {}", e.turn, e.description))
        .collect::<Vec<_>>()
        .join("\n")
}
