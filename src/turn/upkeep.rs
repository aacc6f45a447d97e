//! Upkeep pipeline steps run by `end_turn`

use std::collections::BTreeSet;

use crate::board::HexCoord;
use crate::core::types::{CreatureId, PlayerSide};
use crate::game::{apply_domain_effect, GameEventLog, GameEventType, GameState};

/// Clear action flags and transient effects on every creature
pub fn refresh_creatures(state: &mut GameState) {
    for creature in state.creatures.values_mut() {
        creature.refresh();
    }
}

/// Standing towers of the current player strike enemies in their domain
///
/// Returns one message per affected creature, in tower order.
pub fn resolve_towers(state: &mut GameState, log: &mut GameEventLog) -> Vec<String> {
    let mut report = Vec::new();
    let turn = state.turn;
    let active: Vec<_> = state
        .towers
        .iter()
        .filter(|tower| tower.owner == state.current_player && !tower.is_fallen())
        .cloned()
        .collect();

    for tower in active {
        let name = tower.kind.template().name;
        let targets: Vec<CreatureId> = state
            .creatures
            .values()
            .filter(|c| c.owner != tower.owner && tower.in_domain(c.position))
            .map(|c| c.id)
            .collect();

        let mut survivors = Vec::with_capacity(targets.len());
        for id in targets {
            let Some(creature) = state.creature_mut(id) else {
                continue;
            };
            creature.health -= tower.damage;
            let kind = creature.kind;
            let health = creature.health;
            tracing::debug!("{} strikes {} {} for {}", name, kind, id, tower.damage);

            log.push(
                turn,
                GameEventType::TowerStruck {
                    tower: tower.kind,
                    creature: id,
                    damage: tower.damage,
                },
                format!("{} hits {} {} for {}", name, kind, id, tower.damage),
            );

            if health <= 0 {
                state.remove_creature(id);
                let message = format!("{} {} destroyed by {}", kind, id, name);
                log.push(turn, GameEventType::CreatureSlain { creature: id, kind }, message.clone());
                report.push(message);
            } else {
                report.push(format!(
                    "{} {} takes {} damage from {} ({} hp left)",
                    kind, id, tower.damage, name, health
                ));
                survivors.push(id);
            }
        }

        for id in survivors {
            let Some(creature) = state.creatures.get(&id) else {
                continue;
            };
            if !tower.in_domain(creature.position) {
                continue;
            }
            let kind = creature.kind;
            let affected = apply_domain_effect(creature, tower.domain_effect);
            state.creatures.insert(id, affected);
            log.push(
                turn,
                GameEventType::StatusApplied {
                    creature: id,
                    effect: tower.domain_effect,
                },
                format!("{} {} is afflicted with {}", kind, id, tower.domain_effect),
            );
        }
    }

    report
}

/// Cells the finished player's marked creatures will take
///
/// A creature's own cell counts unless it is a tower cell or already held.
/// Neighbors count unless they are tower cells or inside any tower domain.
/// Reads the board as it stands before any capture is applied.
pub fn queue_captures(state: &mut GameState, finished: PlayerSide) -> BTreeSet<HexCoord> {
    let mut queued = BTreeSet::new();
    let capturers: Vec<(CreatureId, HexCoord)> = state
        .creatures_of(finished)
        .filter(|c| c.can_capture && c.marked_for_capture)
        .map(|c| (c.id, c.position))
        .collect();

    for (id, position) in capturers {
        if !state.board.is_tower(position) && state.board.owner(position) != Some(finished) {
            queued.insert(position);
        }
        for neighbor in state.board.neighbors(position) {
            if !state.board.is_tower(neighbor) && !state.in_any_domain(neighbor) {
                queued.insert(neighbor);
            }
        }
        if let Some(creature) = state.creature_mut(id) {
            creature.marked_for_capture = false;
        }
    }

    queued
}

/// Apply the queued captures as one batch
pub fn apply_captures(
    state: &mut GameState,
    player: PlayerSide,
    queued: &BTreeSet<HexCoord>,
    log: &mut GameEventLog,
) {
    let changed: Vec<HexCoord> = queued
        .iter()
        .copied()
        .filter(|&cell| state.board.owner(cell) != Some(player))
        .collect();
    for &cell in &changed {
        state.board.claim(cell, player);
    }

    if !changed.is_empty() {
        tracing::debug!("Player {} captures {} cells", player, changed.len());
        log.push(
            state.turn,
            GameEventType::HexesCaptured {
                player,
                cells: changed.clone(),
            },
            format!("Player {} captures {} cells", player, changed.len()),
        );
    }
}

/// Clear occupants that point at creatures no longer alive
pub fn sweep_board(state: &mut GameState) {
    let creatures = &state.creatures;
    for cell in state.board.cells_mut() {
        if let Some(id) = cell.occupant {
            if !creatures.contains_key(&id) {
                tracing::warn!("Clearing dangling occupant {} at {}", id, cell.coord);
                cell.occupant = None;
            }
        }
    }
}

/// Upkeep mana for the incoming player
pub fn grant_mana(state: &mut GameState, log: &mut GameEventLog) {
    let player = state.current_player;
    let amount = state.config().mana_per_upkeep;
    let cap = state.config().mana_cap;
    let pool = state.player_mut(player);
    let granted = pool.gain_mana(amount, cap);
    let total = pool.mana;

    log.push(
        state.turn,
        GameEventType::ManaGranted {
            player,
            amount: granted,
            total,
        },
        format!("Player {} gains {} mana ({} total)", player, granted, total),
    );
}
