//! Action rules integration tests

use hexfront::board::HexCoord;
use hexfront::catalog::CreatureKind;
use hexfront::core::types::{CreatureId, PlayerSide};
use hexfront::game::{GameEventType, GameState, TurnPhase};
use hexfront::rules::*;

#[test]
fn test_rejected_actions_return_input_state() {
    let state = GameState::initial();
    let actions = [
        Action::Summon {
            cell: HexCoord::new(14, 3),
            kind: CreatureKind::Scout,
            player: PlayerSide::A,
        },
        Action::Move {
            creature: CreatureId(2),
            from: HexCoord::new(13, 4),
            to: HexCoord::new(12, 4),
        },
        Action::Attack {
            attacker: CreatureId(1),
            target: CreatureId(2),
        },
        Action::SetTurnPhase { phase: TurnPhase::Main },
        Action::CaptureHex {
            cell: HexCoord::new(15, 0),
            player: PlayerSide::A,
        },
        Action::RemoveCreature { creature: CreatureId(9) },
    ];
    for action in &actions {
        let resolution = apply_action(&state, action);
        assert!(!resolution.is_accepted(), "{:?}", action);
        assert_eq!(resolution.state, state);
        assert!(resolution.events().is_empty());
    }
}

#[test]
fn test_tank_guard_scenario() {
    let mut state = GameState::initial();
    // A warrior at (5,3) attacks a B scout at (6,3) guarded by a B warrior at (7,3)
    let attacker = state.place_creature(CreatureKind::Warrior, PlayerSide::A, HexCoord::new(5, 3));
    let target = state.place_creature(CreatureKind::Scout, PlayerSide::B, HexCoord::new(6, 3));
    let guard = state.place_creature(CreatureKind::Warrior, PlayerSide::B, HexCoord::new(7, 3));
    assert!(HexCoord::new(6, 3).is_adjacent(&HexCoord::new(7, 3)));
    assert!(is_guarded(&state, target));

    let blocked = apply_action(&state, &Action::Attack { attacker, target });
    assert_eq!(blocked.error(), Some(RuleError::BlockedByGuard));

    // The guard itself can be attacked once it is out of the way
    let state = apply_action(&state, &Action::RemoveCreature { creature: guard }).state;
    let hit = apply_action(&state, &Action::Attack { attacker, target });
    assert!(hit.is_accepted());
    assert!(hit.state.creature(target).is_none());
}

#[test]
fn test_guard_needs_same_owner() {
    let mut state = GameState::initial();
    let attacker = state.place_creature(CreatureKind::Scout, PlayerSide::A, HexCoord::new(5, 3));
    let target = state.place_creature(CreatureKind::Archer, PlayerSide::B, HexCoord::new(6, 3));
    // A's own tank next to the target does not protect it
    state.place_creature(CreatureKind::Warrior, PlayerSide::A, HexCoord::new(7, 3));
    let resolution = apply_action(&state, &Action::Attack { attacker, target });
    assert!(resolution.is_accepted());
    assert_eq!(resolution.state.creature(target).unwrap().health, 1);
}

#[test]
fn test_second_actions_rejected() {
    let mut state = GameState::initial();
    let target = state.place_creature(CreatureKind::Warrior, PlayerSide::B, HexCoord::new(3, 3));
    let state = apply_action(
        &state,
        &Action::Attack {
            attacker: CreatureId(1),
            target,
        },
    )
    .state;
    let again = apply_action(
        &state,
        &Action::Attack {
            attacker: CreatureId(1),
            target,
        },
    );
    assert_eq!(again.error(), Some(RuleError::AlreadyActed));

    // Attacking does not use up the move
    let moved = apply_action(
        &state,
        &Action::Move {
            creature: CreatureId(1),
            from: HexCoord::new(2, 3),
            to: HexCoord::new(2, 4),
        },
    );
    assert!(moved.is_accepted());
    let twice = apply_action(
        &moved.state,
        &Action::Move {
            creature: CreatureId(1),
            from: HexCoord::new(2, 4),
            to: HexCoord::new(2, 5),
        },
    );
    assert_eq!(twice.error(), Some(RuleError::AlreadyMoved));
}

#[test]
fn test_queries_agree_with_rules() {
    let mut state = GameState::initial();
    let scout = state.place_creature(CreatureKind::Scout, PlayerSide::A, HexCoord::new(5, 4));
    for cell in valid_move_targets(&state, scout) {
        let resolution = apply_action(
            &state,
            &Action::Move {
                creature: scout,
                from: HexCoord::new(5, 4),
                to: cell,
            },
        );
        assert!(resolution.is_accepted(), "move to {} rejected", cell);
    }

    state.place_creature(CreatureKind::Mage, PlayerSide::B, HexCoord::new(6, 4));
    let targets = valid_attack_targets(&state, scout);
    assert_eq!(targets, vec![HexCoord::new(6, 4)]);
}

#[test]
fn test_summon_warrior_from_opening() {
    let state = GameState::initial();
    let hand_before = state.player(PlayerSide::A).hand.len();
    let cell = HexCoord::new(1, 3);
    let resolution = apply_action(
        &state,
        &Action::Summon {
            cell,
            kind: CreatureKind::Warrior,
            player: PlayerSide::A,
        },
    );
    assert!(resolution.is_accepted());

    let next = resolution.state;
    assert_eq!(next.player(PlayerSide::A).mana, 7);
    assert_eq!(next.player(PlayerSide::A).hand.len(), hand_before - 1);
    let id = next.board.occupant(cell).unwrap();
    let warrior = next.creature(id).unwrap();
    assert_eq!(warrior.kind, CreatureKind::Warrior);
    assert_eq!(warrior.owner, PlayerSide::A);
    assert_eq!(warrior.position, cell);
    assert_eq!(warrior.health, 4);
    assert_eq!(warrior.max_health, 4);
    assert!(!warrior.has_moved);
    assert!(!warrior.has_attacked);
    assert!(next.integrity_check().is_ok());
}

#[test]
fn test_summon_every_catalog_creature() {
    let mut state = GameState::initial();
    state.player_mut(PlayerSide::A).mana = 20;
    let cells = [
        HexCoord::new(0, 2),
        HexCoord::new(1, 2),
        HexCoord::new(3, 5),
        HexCoord::new(4, 6),
    ];
    for (kind, cell) in CreatureKind::all().into_iter().zip(cells) {
        let resolution = apply_action(&state, &Action::Summon { cell, kind, player: PlayerSide::A });
        assert!(resolution.is_accepted(), "{} at {}", kind, cell);
        assert!(matches!(
            resolution.events()[0].event_type,
            GameEventType::CreatureSummoned { .. }
        ));
        state = resolution.state;
    }
    // 20 - (3 + 2 + 4 + 1)
    assert_eq!(state.player(PlayerSide::A).mana, 10);
    assert_eq!(state.player(PlayerSide::A).hand, vec![CreatureKind::Warrior]);
    assert!(can_perform_actions(&state));
    assert_eq!(actions_remaining(&state, PlayerSide::A).can_move, 5);
}

#[test]
fn test_damage_tower_keeps_domain() {
    let state = GameState::initial();
    let fallen = apply_action(
        &state,
        &Action::DamageTower {
            cell: HexCoord::new(15, 0),
            amount: 30,
        },
    )
    .state;
    let tower = fallen.tower_at(HexCoord::new(15, 0)).unwrap();
    assert!(tower.is_fallen());
    assert_eq!(fallen.board.owner(HexCoord::new(15, 0)), Some(PlayerSide::B));
    assert!(fallen.in_any_domain(HexCoord::new(14, 1)));
    assert!(fallen.integrity_check().is_ok());
}

#[test]
fn test_action_json_shape() {
    let action = Action::Summon {
        cell: HexCoord::new(2, 2),
        kind: CreatureKind::Scout,
        player: PlayerSide::A,
    };
    let json = serde_json::to_string(&action).unwrap();
    assert!(json.contains("\"type\":\"Summon\""));
    let back: Action = serde_json::from_str(&json).unwrap();
    assert_eq!(back, action);
}
