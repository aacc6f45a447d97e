//! Action validation and resolution

pub mod action;
pub mod engine;
pub mod error;
pub mod queries;

pub use action::{Action, Resolution};
pub use engine::{apply_action, is_guarded};
pub use error::RuleError;
pub use queries::{
    actions_remaining, can_perform_actions, controlled_cells, controlled_hex_counts,
    creatures_in_domain, enemies_in_domain, is_valid_summon_target, valid_attack_targets,
    valid_move_targets, ActionsRemaining,
};
