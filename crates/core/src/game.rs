use crate::{
    Deck, Event, EventSink, FinalScore, GameConfig, GameError, Player, PlayerInput, RngState,
};
use serde::{Deserialize, Serialize};

mod actions;
mod draw;
mod round;

/// What a single draw resolution tells the enclosing loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    Continue,
    RoundEnded,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerRoundResult {
    pub name: String,
    pub gained: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub dealer: String,
    pub ended_by_flip7: bool,
    pub results: Vec<PlayerRoundResult>,
    /// Set on the last round of the game.
    pub winners: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSummary {
    pub rounds: u32,
    pub winners: Vec<String>,
    pub final_scores: Vec<FinalScore>,
}

/// Owns the deck and every player row for the lifetime of a game.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    rng: RngState,
    deck: Deck,
    players: Vec<Player>,
    dealer_index: usize,
    round_number: u32,
    card_total: usize,
}

impl Game {
    pub fn new(
        names: Vec<String>,
        config: GameConfig,
        mut rng: RngState,
    ) -> Result<Self, GameError> {
        let deck = Deck::shuffled(&mut rng);
        Self::with_deck(names, config, rng, deck)
    }

    /// Uses `deck` as dealt, without shuffling. The last card of `deck.draw` comes first.
    pub fn with_deck(
        names: Vec<String>,
        config: GameConfig,
        rng: RngState,
        deck: Deck,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if names.len() < config.min_players {
            return Err(GameError::NotEnoughPlayers {
                found: names.len(),
                min: config.min_players,
            });
        }
        let card_total = deck.len();
        Ok(Self {
            config,
            rng,
            deck,
            players: names.into_iter().map(Player::new).collect(),
            dealer_index: 0,
            round_number: 0,
            card_total,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn dealer_index(&self) -> usize {
        self.dealer_index
    }

    pub fn dealer(&self) -> &Player {
        &self.players[self.dealer_index]
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Cards in both piles plus every card sitting in a player's row.
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.players.iter().map(Player::held_count).sum::<usize>()
    }

    pub fn is_game_over(&self) -> bool {
        self.players
            .iter()
            .any(|player| player.total_score >= self.config.target_score)
    }

    /// Everyone tied at the highest total.
    pub fn winners(&self) -> Vec<String> {
        let Some(best) = self.players.iter().map(|player| player.total_score).max() else {
            return Vec::new();
        };
        self.players
            .iter()
            .filter(|player| player.total_score == best)
            .map(|player| player.name.clone())
            .collect()
    }

    pub fn final_scores(&self) -> Vec<FinalScore> {
        self.players
            .iter()
            .map(|player| FinalScore {
                name: player.name.clone(),
                score: player.total_score,
            })
            .collect()
    }

    pub fn start(&self, sink: &mut dyn EventSink) -> Result<(), GameError> {
        sink.emit(&Event::GameStart {
            players: self.players.iter().map(|player| player.name.clone()).collect(),
            seed: self.rng.seed(),
        })?;
        Ok(())
    }

    /// Plays rounds until someone reaches the target score.
    pub fn run(
        &mut self,
        input: &mut dyn PlayerInput,
        sink: &mut dyn EventSink,
    ) -> Result<GameSummary, GameError> {
        self.start(sink)?;
        loop {
            let report = self.play_round(input, sink)?;
            if let Some(winners) = report.winners {
                return Ok(GameSummary {
                    rounds: report.round,
                    winners,
                    final_scores: self.final_scores(),
                });
            }
        }
    }

    fn check_card_count(&self) -> Result<(), GameError> {
        let found = self.card_count();
        if found != self.card_total {
            return Err(GameError::CardCountMismatch {
                expected: self.card_total,
                found,
            });
        }
        Ok(())
    }

    fn active_count(&self) -> usize {
        self.players.iter().filter(|player| player.is_active()).count()
    }
}
