use crate::{score_row, Card, GameConfig, ModifierKind, RoundScore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RoundStatus {
    #[default]
    Active,
    Stayed,
    Busted,
    Frozen,
}

/// One seat. Only `name` and `total_score` survive between rounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub total_score: i64,
    pub status: RoundStatus,
    pub extra_life: bool,
    /// Distinct numbers in draw order.
    pub numbers: Vec<u8>,
    pub modifiers: Vec<ModifierKind>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_score: 0,
            status: RoundStatus::Active,
            extra_life: false,
            numbers: Vec::new(),
            modifiers: Vec::new(),
        }
    }

    /// Clears the row and flags, handing back the cards that were in the row.
    pub fn reset_for_round(&mut self) -> Vec<Card> {
        let cards = self.held_cards();
        self.status = RoundStatus::Active;
        self.extra_life = false;
        self.numbers.clear();
        self.modifiers.clear();
        cards
    }

    pub fn is_active(&self) -> bool {
        self.status == RoundStatus::Active
    }

    /// Frozen and busted players score nothing for the round.
    pub fn is_eliminated(&self) -> bool {
        matches!(self.status, RoundStatus::Busted | RoundStatus::Frozen)
    }

    pub fn has_number(&self, value: u8) -> bool {
        self.numbers.contains(&value)
    }

    pub fn add_number(&mut self, value: u8) {
        debug_assert!(!self.has_number(value), "duplicate {value} reached the row");
        self.numbers.push(value);
    }

    pub fn add_modifier(&mut self, modifier: ModifierKind) {
        self.modifiers.push(modifier);
    }

    pub fn stay(&mut self) {
        self.status = RoundStatus::Stayed;
    }

    pub fn bust(&mut self) {
        self.status = RoundStatus::Busted;
    }

    pub fn freeze(&mut self) {
        self.status = RoundStatus::Frozen;
    }

    pub fn grant_extra_life(&mut self) {
        self.extra_life = true;
    }

    /// Returns true if a token was there to spend.
    pub fn consume_extra_life(&mut self) -> bool {
        std::mem::replace(&mut self.extra_life, false)
    }

    pub fn held_cards(&self) -> Vec<Card> {
        self.numbers
            .iter()
            .map(|value| Card::Number(*value))
            .chain(self.modifiers.iter().map(|modifier| Card::Modifier(*modifier)))
            .collect()
    }

    pub fn held_count(&self) -> usize {
        self.numbers.len() + self.modifiers.len()
    }

    pub fn row_score(&self, config: &GameConfig) -> RoundScore {
        score_row(&self.numbers, &self.modifiers, config)
    }

    /// What staying right now would earn.
    pub fn potential_score(&self, config: &GameConfig) -> i64 {
        if self.is_eliminated() {
            0
        } else {
            self.row_score(config).total
        }
    }
}
