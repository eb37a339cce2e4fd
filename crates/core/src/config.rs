use crate::{GameError, MAX_NUMBER};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// A game ends after the round in which any total reaches this.
    pub target_score: i64,
    /// Distinct numbers that end the round ("flip seven").
    pub flip_seven_count: usize,
    pub flip_seven_bonus: i64,
    pub flip_three_draws: u8,
    pub min_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: 200,
            flip_seven_count: 7,
            flip_seven_bonus: 15,
            flip_three_draws: 3,
            min_players: 2,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.target_score <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "target_score must be positive, got {}",
                self.target_score
            )));
        }
        let distinct_numbers = usize::from(MAX_NUMBER) + 1;
        if self.flip_seven_count == 0 || self.flip_seven_count > distinct_numbers {
            return Err(GameError::InvalidConfig(format!(
                "flip_seven_count must be within 1..={distinct_numbers}, got {}",
                self.flip_seven_count
            )));
        }
        if self.min_players < 2 {
            return Err(GameError::InvalidConfig(format!(
                "min_players must be at least 2, got {}",
                self.min_players
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_unreachable_flip_seven() {
        let config = GameConfig {
            flip_seven_count: 14,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_single_player_games() {
        let config = GameConfig {
            min_players: 1,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
