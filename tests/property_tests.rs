//! Property-based tests for geometry and turn invariants

use proptest::prelude::*;

use hexfront::board::HexCoord;
use hexfront::catalog::CreatureKind;
use hexfront::core::types::PlayerSide;
use hexfront::game::GameState;
use hexfront::rules::{apply_action, valid_attack_targets, Action};

fn coord() -> impl Strategy<Value = HexCoord> {
    (-20i32..40, -20i32..40).prop_map(|(x, y)| HexCoord::new(x, y))
}

fn board_coord() -> impl Strategy<Value = HexCoord> {
    (0i32..16, 0i32..8).prop_map(|(x, y)| HexCoord::new(x, y))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_distance_identity(a in coord()) {
        prop_assert_eq!(a.distance(&a), 0);
    }

    #[test]
    fn prop_distance_symmetric(a in coord(), b in coord()) {
        prop_assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn prop_triangle_inequality(a in coord(), b in coord(), c in coord()) {
        prop_assert!(a.distance(&c) <= a.distance(&b) + b.distance(&c));
    }

    /// Neighbors are exactly the cells at distance one
    #[test]
    fn prop_neighbors_at_distance_one(a in coord()) {
        let neighbors = a.all_neighbors();
        for n in neighbors {
            prop_assert_eq!(a.distance(&n), 1);
            prop_assert!(n.all_neighbors().contains(&a));
        }
        let mut unique = neighbors.to_vec();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), 6);
    }

    /// Mana stays within [0, cap] and the integrity check holds across turns
    #[test]
    fn prop_turn_sequence_keeps_invariants(
        steps in prop::collection::vec((0u8..4, board_coord(), 0usize..4), 1..40)
    ) {
        let mut state = GameState::initial();
        for (kind_of_step, cell, pick) in steps {
            let player = state.current_player;
            let action = match kind_of_step {
                0 => Action::EndTurn,
                1 => Action::AddCreature {
                    kind: CreatureKind::all()[pick],
                    owner: if pick % 2 == 0 { player } else { player.opponent() },
                    cell,
                },
                2 => Action::Summon { cell, kind: CreatureKind::all()[pick], player },
                _ => {
                    // Attack with any creature of the acting player that has a target
                    let attacker = state
                        .creatures_of(player)
                        .find(|c| !valid_attack_targets(&state, c.id).is_empty())
                        .map(|c| c.id);
                    match attacker {
                        Some(id) => {
                            let target_cell = valid_attack_targets(&state, id)[0];
                            let target = state.board.occupant(target_cell).unwrap();
                            Action::Attack { attacker: id, target }
                        }
                        None => Action::AdvancePhase,
                    }
                }
            };
            state = apply_action(&state, &action).state;

            for side in PlayerSide::all() {
                prop_assert!(state.player(side).mana <= 20);
            }
            for creature in state.creatures.values() {
                prop_assert!(creature.health > 0 && creature.health <= creature.max_health);
            }
            prop_assert!(state.integrity_check().is_ok(), "{:?}", state.integrity_check());
        }
    }
}
