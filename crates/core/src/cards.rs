use crate::ParseCardError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const MAX_NUMBER: u8 = 12;
pub const ADD_BONUSES: [u8; 5] = [2, 4, 6, 8, 10];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    Double,
    Add(u8),
}

impl ModifierKind {
    pub fn add(bonus: u8) -> Option<Self> {
        ADD_BONUSES.contains(&bonus).then_some(Self::Add(bonus))
    }

    pub fn is_double(self) -> bool {
        matches!(self, Self::Double)
    }

    pub fn bonus(self) -> i64 {
        match self {
            Self::Double => 0,
            Self::Add(bonus) => i64::from(bonus),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Freeze,
    FlipThree,
    SecondChance,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [Self::Freeze, Self::FlipThree, Self::SecondChance];

    pub fn id(self) -> &'static str {
        match self {
            Self::Freeze => "FREEZE",
            Self::FlipThree => "FLIP_THREE",
            Self::SecondChance => "SECOND_CHANCE",
        }
    }
}

/// Serialized as its display token (`#7`, `x2`, `+4`, `FREEZE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    Number(u8),
    Modifier(ModifierKind),
    Action(ActionKind),
}

impl Card {
    pub fn number(value: u8) -> Option<Self> {
        (value <= MAX_NUMBER).then_some(Self::Number(value))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "#{value}"),
            Self::Modifier(modifier) => write!(f, "{modifier}"),
            Self::Action(action) => f.write_str(action.id()),
        }
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Double => f.write_str("x2"),
            Self::Add(bonus) => write!(f, "+{bonus}"),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseCardError(s.to_string());
        if let Some(value) = s.strip_prefix('#') {
            let value = value.parse().map_err(|_| invalid())?;
            return Self::number(value).ok_or_else(invalid);
        }
        if s == "x2" {
            return Ok(Self::Modifier(ModifierKind::Double));
        }
        if let Some(bonus) = s.strip_prefix('+') {
            let bonus = bonus.parse().map_err(|_| invalid())?;
            return ModifierKind::add(bonus)
                .map(Self::Modifier)
                .ok_or_else(invalid);
        }
        ActionKind::ALL
            .into_iter()
            .find(|action| action.id() == s)
            .map(Self::Action)
            .ok_or_else(invalid)
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_log_tokens() {
        assert_eq!(Card::Number(0).to_string(), "#0");
        assert_eq!(Card::Number(12).to_string(), "#12");
        assert_eq!(Card::Modifier(ModifierKind::Double).to_string(), "x2");
        assert_eq!(Card::Modifier(ModifierKind::Add(8)).to_string(), "+8");
        assert_eq!(Card::Action(ActionKind::FlipThree).to_string(), "FLIP_THREE");
        assert_eq!(
            Card::Action(ActionKind::SecondChance).to_string(),
            "SECOND_CHANCE"
        );
    }

    #[test]
    fn constructors_reject_out_of_range_values() {
        assert_eq!(Card::number(12), Some(Card::Number(12)));
        assert_eq!(Card::number(13), None);
        assert_eq!(ModifierKind::add(6), Some(ModifierKind::Add(6)));
        assert_eq!(ModifierKind::add(3), None);
        assert_eq!(ModifierKind::add(12), None);
    }

    #[test]
    fn tokens_parse_back_to_cards() {
        assert_eq!("#0".parse::<Card>().unwrap(), Card::Number(0));
        assert_eq!(
            "+10".parse::<Card>().unwrap(),
            Card::Modifier(ModifierKind::Add(10))
        );
        assert_eq!(
            "FLIP_THREE".parse::<Card>().unwrap(),
            Card::Action(ActionKind::FlipThree)
        );
        for bad in ["#13", "+3", "x3", "FROZEN", ""] {
            assert!(bad.parse::<Card>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn serializes_as_display_token() {
        let card = Card::Modifier(ModifierKind::Add(4));
        assert_eq!(serde_json::to_value(card).unwrap(), "+4");
        let back: Card = serde_json::from_str("\"SECOND_CHANCE\"").unwrap();
        assert_eq!(back, Card::Action(ActionKind::SecondChance));
    }
}
