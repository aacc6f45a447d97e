//! Turn phase machine
//!
//! Upkeep -> Main -> End are plain field updates. End -> Upkeep is
//! `end_turn`, which runs the upkeep pipeline for the incoming player.

pub mod upkeep;

use crate::game::{GameEvent, GameEventLog, GameEventType, GameState, TurnPhase};
use crate::rules::RuleError;

/// Move to the successor phase within the current turn
///
/// Only Upkeep -> Main and Main -> End are accepted. Reaching Upkeep always
/// goes through `end_turn`.
pub fn set_phase(state: &mut GameState, phase: TurnPhase) -> Result<Vec<GameEvent>, RuleError> {
    if phase == TurnPhase::Upkeep || state.phase.next() != Some(phase) {
        return Err(RuleError::WrongPhase);
    }
    state.phase = phase;

    let mut log = GameEventLog::new();
    log.push(
        state.turn,
        GameEventType::PhaseChanged { phase },
        format!("Player {} enters the {} phase", state.current_player, phase),
    );
    Ok(log.into_events())
}

/// Step forward one phase, ending the turn from End
pub fn advance_phase(state: &mut GameState) -> Vec<GameEvent> {
    match state.phase.next() {
        Some(phase) => {
            state.phase = phase;
            let mut log = GameEventLog::new();
            log.push(
                state.turn,
                GameEventType::PhaseChanged { phase },
                format!("Player {} enters the {} phase", state.current_player, phase),
            );
            log.into_events()
        }
        None => end_turn(state),
    }
}

/// Hand the turn to the other player and resolve their upkeep
///
/// Steps run in a fixed order: tower strikes see refreshed stats and happen
/// before capture, so a creature slain by a tower never captures.
pub fn end_turn(state: &mut GameState) -> Vec<GameEvent> {
    let mut log = GameEventLog::new();
    let finished = state.current_player;

    state.current_player = finished.opponent();
    state.turn += 1;
    tracing::info!("Turn {} begins for player {}", state.turn, state.current_player);
    log.push(
        state.turn,
        GameEventType::TurnEnded {
            next_player: state.current_player,
            turn: state.turn,
        },
        format!("Player {} ends their turn", finished),
    );

    upkeep::refresh_creatures(state);

    let report = upkeep::resolve_towers(state, &mut log);
    state.last_tower_report = report;

    let queued = upkeep::queue_captures(state, finished);
    upkeep::apply_captures(state, finished, &queued, &mut log);

    let counts = state.controlled_hexes();
    log.push(
        state.turn,
        GameEventType::TerritoryTallied { a: counts.a, b: counts.b },
        format!("Territory: A holds {}, B holds {}", counts.a, counts.b),
    );

    upkeep::sweep_board(state);
    upkeep::grant_mana(state, &mut log);

    state.phase = TurnPhase::Upkeep;
    log.push(
        state.turn,
        GameEventType::PhaseChanged { phase: TurnPhase::Upkeep },
        format!("Player {} enters the upkeep phase", state.current_player),
    );

    log.into_events()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PlayerSide;

    #[test]
    fn test_set_phase_successors_only() {
        let mut state = GameState::initial();
        assert_eq!(set_phase(&mut state, TurnPhase::Main), Err(RuleError::WrongPhase));
        assert_eq!(set_phase(&mut state, TurnPhase::Upkeep), Err(RuleError::WrongPhase));
        assert!(set_phase(&mut state, TurnPhase::End).is_ok());
        assert_eq!(state.phase, TurnPhase::End);
        assert_eq!(set_phase(&mut state, TurnPhase::Main), Err(RuleError::WrongPhase));
    }

    #[test]
    fn test_set_phase_from_upkeep() {
        let mut state = GameState::initial();
        state.phase = TurnPhase::Upkeep;
        let events = set_phase(&mut state, TurnPhase::Main).unwrap();
        assert_eq!(state.phase, TurnPhase::Main);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_advance_phase_wraps_through_end_turn() {
        let mut state = GameState::initial();
        advance_phase(&mut state);
        assert_eq!(state.phase, TurnPhase::End);
        advance_phase(&mut state);
        assert_eq!(state.phase, TurnPhase::Upkeep);
        assert_eq!(state.current_player, PlayerSide::B);
        assert_eq!(state.turn, 2);
        advance_phase(&mut state);
        assert_eq!(state.phase, TurnPhase::Main);
    }

    #[test]
    fn test_end_turn_swaps_and_grants_mana() {
        let mut state = GameState::initial();
        let events = end_turn(&mut state);
        assert_eq!(state.current_player, PlayerSide::B);
        assert_eq!(state.turn, 2);
        assert_eq!(state.phase, TurnPhase::Upkeep);
        assert_eq!(state.player(PlayerSide::B).mana, 12);
        assert_eq!(state.player(PlayerSide::A).mana, 10);
        assert!(matches!(
            events.first().map(|e| &e.event_type),
            Some(GameEventType::TurnEnded { next_player: PlayerSide::B, turn: 2 })
        ));
        assert!(matches!(
            events.last().map(|e| &e.event_type),
            Some(GameEventType::PhaseChanged { phase: TurnPhase::Upkeep })
        ));
    }

    #[test]
    fn test_end_turn_replaces_tower_report() {
        let mut state = GameState::initial();
        state.last_tower_report = vec!["stale".to_string()];
        end_turn(&mut state);
        assert!(state.last_tower_report.is_empty());
    }
}
