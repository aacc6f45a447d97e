//! Per-player resources: mana and hand

use serde::{Deserialize, Serialize};

use crate::catalog::CreatureKind;
use crate::core::types::PlayerSide;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub mana: u32,
    /// Ordered multiset of creature tokens
    pub hand: Vec<CreatureKind>,
}

impl PlayerState {
    pub fn new(mana: u32, hand: Vec<CreatureKind>) -> Self {
        Self { mana, hand }
    }

    pub fn has_card(&self, kind: CreatureKind) -> bool {
        self.hand.contains(&kind)
    }

    /// Remove the first matching token; false if none held
    pub fn remove_card(&mut self, kind: CreatureKind) -> bool {
        match self.hand.iter().position(|card| *card == kind) {
            Some(idx) => {
                self.hand.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Add mana up to `cap`, returning the amount actually granted
    pub fn gain_mana(&mut self, amount: u32, cap: u32) -> u32 {
        let target = self.mana.saturating_add(amount).min(cap);
        if target <= self.mana {
            return 0;
        }
        let granted = target - self.mana;
        self.mana = target;
        granted
    }

    /// Spend mana, clamped at 0
    pub fn spend_mana(&mut self, amount: u32) {
        self.mana = self.mana.saturating_sub(amount);
    }
}

/// Both players' state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    pub a: PlayerState,
    pub b: PlayerState,
}

impl Players {
    pub fn get(&self, side: PlayerSide) -> &PlayerState {
        match side {
            PlayerSide::A => &self.a,
            PlayerSide::B => &self.b,
        }
    }

    pub fn get_mut(&mut self, side: PlayerSide) -> &mut PlayerState {
        match side {
            PlayerSide::A => &mut self.a,
            PlayerSide::B => &mut self.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_card_once() {
        let mut p = PlayerState::new(10, vec![CreatureKind::Warrior, CreatureKind::Scout, CreatureKind::Warrior]);
        assert!(p.remove_card(CreatureKind::Warrior));
        assert_eq!(p.hand, vec![CreatureKind::Scout, CreatureKind::Warrior]);
        assert!(!p.remove_card(CreatureKind::Mage));
        assert_eq!(p.hand.len(), 2);
    }

    #[test]
    fn test_gain_mana_caps() {
        let mut p = PlayerState::new(19, vec![]);
        assert_eq!(p.gain_mana(2, 20), 1);
        assert_eq!(p.mana, 20);
        assert_eq!(p.gain_mana(2, 20), 0);
        assert_eq!(p.mana, 20);
    }

    #[test]
    fn test_spend_mana_clamps() {
        let mut p = PlayerState::new(3, vec![]);
        p.spend_mana(5);
        assert_eq!(p.mana, 0);
    }
}
