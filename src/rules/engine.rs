//! Action handlers
//!
//! `apply_action` clones the incoming state, runs one handler against the
//! clone, and hands back either the updated clone or the untouched input.
//! Handlers check every precondition before writing anything.

use crate::board::HexCoord;
use crate::catalog::CreatureKind;
use crate::core::types::{CreatureId, PlayerSide};
use crate::game::{GameEvent, GameEventLog, GameEventType, GameState, TurnPhase};
use crate::rules::action::{Action, Resolution};
use crate::rules::error::RuleError;
use crate::turn;

type Handled = Result<Vec<GameEvent>, RuleError>;

/// Resolve one action against `state`
pub fn apply_action(state: &GameState, action: &Action) -> Resolution {
    let mut next = state.clone();
    match resolve(&mut next, action) {
        Ok(events) => {
            tracing::debug!("Accepted {} ({} events)", action.name(), events.len());
            Resolution::accepted(next, events)
        }
        Err(error) => {
            tracing::debug!("Rejected {}: {}", action.name(), error);
            Resolution::rejected(state.clone(), error)
        }
    }
}

fn resolve(state: &mut GameState, action: &Action) -> Handled {
    match *action {
        Action::Summon { cell, kind, player } => summon(state, cell, kind, player),
        Action::Move { creature, from, to } => move_creature(state, creature, from, to),
        Action::Attack { attacker, target } => attack(state, attacker, target),
        Action::SetTurnPhase { phase } => turn::set_phase(state, phase),
        Action::AdvancePhase => Ok(turn::advance_phase(state)),
        Action::EndTurn => Ok(turn::end_turn(state)),
        Action::AddCreature { kind, owner, cell } => add_creature(state, kind, owner, cell),
        Action::RemoveCreature { creature } => remove_creature(state, creature),
        Action::DamageTower { cell, amount } => damage_tower(state, cell, amount),
        Action::CaptureHex { cell, player } => capture_hex(state, cell, player),
        Action::SpendMana { player, amount } => Ok(spend_mana(state, player, amount)),
        Action::ResetGame => Ok(reset_game(state)),
    }
}

fn require_main_phase(state: &GameState) -> Result<(), RuleError> {
    if state.phase == TurnPhase::Main {
        Ok(())
    } else {
        Err(RuleError::WrongPhase)
    }
}

fn summon(state: &mut GameState, cell: HexCoord, kind: CreatureKind, player: PlayerSide) -> Handled {
    require_main_phase(state)?;
    if player != state.current_player {
        return Err(RuleError::NotYourTurn);
    }

    let template = kind.template();
    let target = state.board.get(cell).ok_or(RuleError::OffBoard)?;
    if state.player(player).mana < template.mana_cost {
        return Err(RuleError::InsufficientMana);
    }
    if target.owner != Some(player) {
        return Err(RuleError::CellNotOwned);
    }
    if target.is_occupied() {
        return Err(RuleError::CellOccupied);
    }
    if !state.player(player).has_card(kind) {
        return Err(RuleError::NotInHand);
    }

    let id = state.place_creature(kind, player, cell);
    let hand = state.player_mut(player);
    hand.spend_mana(template.mana_cost);
    hand.remove_card(kind);

    let mut log = GameEventLog::new();
    log.push(
        state.turn,
        GameEventType::CreatureSummoned { creature: id, kind, cell },
        format!("Player {} summons {} {} at {}", player, kind, id, cell),
    );
    Ok(log.into_events())
}

fn move_creature(state: &mut GameState, id: CreatureId, from: HexCoord, to: HexCoord) -> Handled {
    require_main_phase(state)?;
    let creature = state.creature(id).ok_or(RuleError::UnknownCreature)?;
    if creature.owner != state.current_player {
        return Err(RuleError::NotYourTurn);
    }
    if creature.has_moved {
        return Err(RuleError::AlreadyMoved);
    }
    let destination = state.board.get(to).ok_or(RuleError::OffBoard)?;
    if creature.position != from || from.distance(&to) > creature.speed {
        return Err(RuleError::OutOfRange);
    }
    if destination.is_occupied() {
        return Err(RuleError::CellOccupied);
    }

    let owner = creature.owner;
    let kind = creature.kind;
    let can_capture = creature.can_capture;

    if let Some(cell) = state.board.get_mut(from) {
        cell.occupant = None;
    }
    if let Some(cell) = state.board.get_mut(to) {
        cell.occupant = Some(id);
    }
    // Tower cells keep their owner
    state.board.claim(to, owner);

    if let Some(creature) = state.creature_mut(id) {
        creature.position = to;
        creature.has_moved = true;
        if can_capture {
            creature.marked_for_capture = true;
        }
    }

    let mut log = GameEventLog::new();
    log.push(
        state.turn,
        GameEventType::CreatureMoved { creature: id, from, to },
        format!("{} {} moves {} -> {}", kind, id, from, to),
    );
    Ok(log.into_events())
}

/// Is `target` shielded from melee by an adjacent allied tank?
pub fn is_guarded(state: &GameState, target: CreatureId) -> bool {
    let Some(defender) = state.creature(target) else {
        return false;
    };
    state
        .board
        .neighbors(defender.position)
        .into_iter()
        .filter_map(|cell| state.creature_at(cell))
        .any(|ally| ally.id != defender.id && ally.is_tank() && ally.owner == defender.owner)
}

fn attack(state: &mut GameState, attacker_id: CreatureId, target_id: CreatureId) -> Handled {
    require_main_phase(state)?;
    let attacker = state.creature(attacker_id).ok_or(RuleError::UnknownCreature)?;
    if attacker.owner != state.current_player {
        return Err(RuleError::NotYourTurn);
    }
    if attacker.has_attacked {
        return Err(RuleError::AlreadyActed);
    }
    let target = state.creature(target_id).ok_or(RuleError::UnknownCreature)?;
    if target.owner == attacker.owner {
        return Err(RuleError::InvalidTarget);
    }
    if attacker.position.distance(&target.position) > attacker.range {
        return Err(RuleError::OutOfRange);
    }
    if attacker.is_melee() && is_guarded(state, target_id) {
        return Err(RuleError::BlockedByGuard);
    }

    let damage = attacker.attack;
    let attacker_kind = attacker.kind;
    let target_kind = target.kind;
    let remaining = target.health - damage;

    let mut log = GameEventLog::new();
    log.push(
        state.turn,
        GameEventType::CreatureAttacked {
            attacker: attacker_id,
            target: target_id,
            damage,
        },
        format!(
            "{} {} hits {} {} for {}",
            attacker_kind, attacker_id, target_kind, target_id, damage
        ),
    );

    if remaining <= 0 {
        state.remove_creature(target_id);
        log.push(
            state.turn,
            GameEventType::CreatureSlain {
                creature: target_id,
                kind: target_kind,
            },
            format!("{} {} is slain", target_kind, target_id),
        );
    } else if let Some(target) = state.creature_mut(target_id) {
        target.health = remaining;
    }

    if let Some(attacker) = state.creature_mut(attacker_id) {
        attacker.has_attacked = true;
    }

    Ok(log.into_events())
}

fn add_creature(state: &mut GameState, kind: CreatureKind, owner: PlayerSide, cell: HexCoord) -> Handled {
    let target = state.board.get(cell).ok_or(RuleError::OffBoard)?;
    if target.is_occupied() {
        return Err(RuleError::CellOccupied);
    }

    let id = state.place_creature(kind, owner, cell);
    let mut log = GameEventLog::new();
    log.push(
        state.turn,
        GameEventType::CreatureAdded { creature: id, kind, cell },
        format!("{} {} placed at {} for player {}", kind, id, cell, owner),
    );
    Ok(log.into_events())
}

fn remove_creature(state: &mut GameState, id: CreatureId) -> Handled {
    let creature = state.remove_creature(id).ok_or(RuleError::UnknownCreature)?;
    let mut log = GameEventLog::new();
    log.push(
        state.turn,
        GameEventType::CreatureRemoved { creature: id },
        format!("{} {} removed from {}", creature.kind, id, creature.position),
    );
    Ok(log.into_events())
}

fn damage_tower(state: &mut GameState, cell: HexCoord, amount: i32) -> Handled {
    if !state.board.in_bounds(cell) {
        return Err(RuleError::OffBoard);
    }
    let turn = state.turn;
    let tower = state.tower_at_mut(cell).ok_or(RuleError::InvalidTarget)?;
    let was_standing = !tower.is_fallen();
    tower.take_damage(amount);

    let mut log = GameEventLog::new();
    log.push(
        turn,
        GameEventType::TowerDamaged {
            tower: tower.kind,
            health: tower.health,
        },
        format!(
            "{} tower takes {} damage ({}/{})",
            tower.kind,
            amount.max(0),
            tower.health,
            tower.max_health
        ),
    );
    if was_standing && tower.is_fallen() {
        tracing::info!("{} tower at {} has fallen", tower.kind, cell);
        log.push(
            turn,
            GameEventType::TowerFallen { tower: tower.kind },
            format!("{} tower has fallen", tower.kind),
        );
    }
    Ok(log.into_events())
}

fn capture_hex(state: &mut GameState, cell: HexCoord, player: PlayerSide) -> Handled {
    if !state.board.in_bounds(cell) {
        return Err(RuleError::OffBoard);
    }
    if !state.board.claim(cell, player) {
        return Err(RuleError::ProtectedCell);
    }

    let mut log = GameEventLog::new();
    log.push(
        state.turn,
        GameEventType::HexesCaptured {
            player,
            cells: vec![cell],
        },
        format!("Player {} takes {}", player, cell),
    );
    Ok(log.into_events())
}

fn spend_mana(state: &mut GameState, player: PlayerSide, amount: u32) -> Vec<GameEvent> {
    let pool = state.player_mut(player);
    let spent = amount.min(pool.mana);
    pool.spend_mana(amount);

    let mut log = GameEventLog::new();
    log.push(
        state.turn,
        GameEventType::ManaSpent { player, amount: spent },
        format!("Player {} spends {} mana", player, spent),
    );
    log.into_events()
}

fn reset_game(state: &mut GameState) -> Vec<GameEvent> {
    *state = state.reset();
    tracing::info!("Game reset");

    let mut log = GameEventLog::new();
    log.push(state.turn, GameEventType::GameReset, "Game reset".into());
    log.into_events()
}
