//! Text command parsing for the interactive host
//!
//! One line is one command. Coordinates are written `x,y` and creatures are
//! referred to by their numeric id.

use crate::board::HexCoord;
use crate::catalog::CreatureKind;
use crate::core::error::{HexfrontError, Result};
use crate::core::types::{CreatureId, PlayerSide};
use crate::game::TurnPhase;
use crate::rules::{Action, RuleError};
use crate::session::interaction::ActionMode;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Summon for `player`, or for the player to act when omitted
    Summon {
        kind: CreatureKind,
        cell: HexCoord,
        player: Option<PlayerSide>,
    },
    /// Any other action that maps straight onto the rules API
    Act(Action),
    /// Highlight move or attack targets for a creature
    Targets { mode: ActionMode, creature: CreatureId },
    Select(HexCoord),
    Clear,
    State,
    Hexes,
    Towers,
    Log,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  summon <kind> <x,y> [a|b]     - Summon a creature from hand
  move <id> <x,y> <x,y>         - Move a creature from one cell to another
  attack <id> <id>              - Attack with the first creature
  phase <upkeep|main|end>       - Request a phase change
  advance                       - Step to the next phase
  end                           - End the turn
  targets <move|attack> <id>    - Highlight legal targets
  select <x,y>                  - Select a cell
  clear                         - Clear the selection
  add <kind> <a|b> <x,y>        - Place a creature (setup)
  remove <id>                   - Remove a creature (setup)
  damage <x,y> <amount>         - Damage a tower (setup)
  capture <x,y> <a|b>           - Give a cell to a player (setup)
  spend <a|b> <amount>          - Take mana from a player (setup)
  state / hexes / towers / log  - Show game information
  reset                         - Restart from the opening position
  help                          - Show this list
  quit                          - Exit";

/// Parse one input line
///
/// Unknown verbs are rejected as `UnrecognizedAction` and unknown creature
/// names as `UnknownCreatureType`. Other malformed input is an
/// `InvalidCommand`.
pub fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(HexfrontError::InvalidCommand("empty command".into()));
    };
    let args: Vec<&str> = words.collect();

    let command = match verb.to_ascii_lowercase().as_str() {
        "summon" => {
            expect_args(verb, &args, 2, 3)?;
            Command::Summon {
                kind: creature_kind(args[0])?,
                cell: coord(args[1])?,
                player: args.get(2).copied().map(player).transpose()?,
            }
        }
        "move" => {
            expect_args(verb, &args, 3, 3)?;
            Command::Act(Action::Move {
                creature: creature_id(args[0])?,
                from: coord(args[1])?,
                to: coord(args[2])?,
            })
        }
        "attack" => {
            expect_args(verb, &args, 2, 2)?;
            Command::Act(Action::Attack {
                attacker: creature_id(args[0])?,
                target: creature_id(args[1])?,
            })
        }
        "phase" => {
            expect_args(verb, &args, 1, 1)?;
            let phase = args[0]
                .parse::<TurnPhase>()
                .map_err(HexfrontError::InvalidCommand)?;
            Command::Act(Action::SetTurnPhase { phase })
        }
        "advance" => Command::Act(Action::AdvancePhase),
        "end" => Command::Act(Action::EndTurn),
        "reset" => Command::Act(Action::ResetGame),
        "targets" => {
            expect_args(verb, &args, 2, 2)?;
            let mode = match args[0].to_ascii_lowercase().as_str() {
                "move" => ActionMode::Move,
                "attack" => ActionMode::Attack,
                other => {
                    return Err(HexfrontError::InvalidCommand(format!(
                        "targets takes 'move' or 'attack', not '{}'",
                        other
                    )))
                }
            };
            Command::Targets {
                mode,
                creature: creature_id(args[1])?,
            }
        }
        "select" => {
            expect_args(verb, &args, 1, 1)?;
            Command::Select(coord(args[0])?)
        }
        "clear" => Command::Clear,
        "add" => {
            expect_args(verb, &args, 3, 3)?;
            Command::Act(Action::AddCreature {
                kind: creature_kind(args[0])?,
                owner: player(args[1])?,
                cell: coord(args[2])?,
            })
        }
        "remove" => {
            expect_args(verb, &args, 1, 1)?;
            Command::Act(Action::RemoveCreature {
                creature: creature_id(args[0])?,
            })
        }
        "damage" => {
            expect_args(verb, &args, 2, 2)?;
            Command::Act(Action::DamageTower {
                cell: coord(args[0])?,
                amount: number(args[1])?,
            })
        }
        "capture" => {
            expect_args(verb, &args, 2, 2)?;
            Command::Act(Action::CaptureHex {
                cell: coord(args[0])?,
                player: player(args[1])?,
            })
        }
        "spend" => {
            expect_args(verb, &args, 2, 2)?;
            Command::Act(Action::SpendMana {
                player: player(args[0])?,
                amount: number(args[1])?,
            })
        }
        "state" | "s" => Command::State,
        "hexes" => Command::Hexes,
        "towers" => Command::Towers,
        "log" => Command::Log,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return Err(RuleError::UnrecognizedAction.into()),
    };
    Ok(command)
}

fn expect_args(verb: &str, args: &[&str], min: usize, max: usize) -> Result<()> {
    if args.len() < min || args.len() > max {
        return Err(HexfrontError::InvalidCommand(format!(
            "'{}' takes {} argument(s), got {}",
            verb,
            if min == max { min.to_string() } else { format!("{}-{}", min, max) },
            args.len()
        )));
    }
    Ok(())
}

fn creature_kind(token: &str) -> Result<CreatureKind> {
    token
        .parse()
        .map_err(|_| HexfrontError::Rule(RuleError::UnknownCreatureType))
}

fn coord(token: &str) -> Result<HexCoord> {
    token.parse().map_err(HexfrontError::InvalidCommand)
}

fn player(token: &str) -> Result<PlayerSide> {
    token.parse().map_err(HexfrontError::InvalidCommand)
}

fn creature_id(token: &str) -> Result<CreatureId> {
    let raw = token.trim_start_matches('#');
    raw.parse::<u32>()
        .map(CreatureId)
        .map_err(|_| HexfrontError::InvalidCommand(format!("'{}' is not a creature id", token)))
}

fn number<T: std::str::FromStr>(token: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| HexfrontError::InvalidCommand(format!("'{}' is not a number", token)))
}
