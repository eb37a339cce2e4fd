use super::*;
use crate::{Choice, DrawPhase};

impl Game {
    /// Deal, turns, scoring, then the game-over check. The dealer seat moves on after
    /// every round, the last one included.
    pub fn play_round(
        &mut self,
        input: &mut dyn PlayerInput,
        sink: &mut dyn EventSink,
    ) -> Result<RoundReport, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        self.round_number += 1;
        let round = self.round_number;
        let dealer = self.dealer().name.clone();
        tracing::debug!(round, dealer = %dealer, "round start");
        sink.emit(&Event::RoundStart {
            round,
            dealer: dealer.clone(),
        })?;

        self.reset_round();
        let mut ended_by_flip7 = self.initial_deal(input, sink)?;
        if !ended_by_flip7 {
            ended_by_flip7 = self.turn_phase(input, sink)?;
        }

        sink.emit(&Event::RoundEnd {
            round,
            dealer: dealer.clone(),
            ended_by_flip7,
        })?;
        let results = self.score_round(sink)?;
        self.check_card_count()?;
        tracing::debug!(round, ended_by_flip7, "round end");

        let winners = if self.is_game_over() {
            let winners = self.winners();
            tracing::info!(round, winners = ?winners, "game over");
            sink.emit(&Event::GameEnd {
                winners: winners.clone(),
                final_scores: self.final_scores(),
            })?;
            Some(winners)
        } else {
            None
        };

        self.dealer_index = (self.dealer_index + 1) % self.players.len();
        Ok(RoundReport {
            round,
            dealer,
            ended_by_flip7,
            results,
            winners,
        })
    }

    /// Returns last round's rows to the discard pile and clears every player's round state.
    fn reset_round(&mut self) {
        for player in &mut self.players {
            let cards = player.reset_for_round();
            self.deck.discard_all(cards);
        }
    }

    /// Seat order starting from the dealer.
    fn seat_order(&self) -> impl Iterator<Item = usize> {
        let count = self.players.len();
        let dealer = self.dealer_index;
        (0..count).map(move |offset| (dealer + offset) % count)
    }

    /// One forced draw per player. Returns true if a flip seven ended the round.
    fn initial_deal(
        &mut self,
        input: &mut dyn PlayerInput,
        sink: &mut dyn EventSink,
    ) -> Result<bool, GameError> {
        let order: Vec<usize> = self.seat_order().collect();
        for index in order {
            let outcome = self.resolve_draw(index, DrawPhase::InitialDeal, None, input, sink)?;
            self.check_card_count()?;
            if outcome == DrawOutcome::RoundEnded {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Sweeps the table until nobody is active or a flip seven ends the round.
    fn turn_phase(
        &mut self,
        input: &mut dyn PlayerInput,
        sink: &mut dyn EventSink,
    ) -> Result<bool, GameError> {
        let order: Vec<usize> = self.seat_order().collect();
        while self.active_count() > 0 {
            for &index in &order {
                if !self.players[index].is_active() {
                    continue;
                }
                let potential = self.players[index].potential_score(&self.config);
                let choice = input.hit_or_stay(&self.players[index], potential)?;
                sink.emit(&Event::Choice {
                    player: self.players[index].name.clone(),
                    choice,
                })?;
                match choice {
                    Choice::Stay => {
                        self.players[index].stay();
                    }
                    Choice::Hit => {
                        let outcome =
                            self.resolve_draw(index, DrawPhase::Hit, None, input, sink)?;
                        self.check_card_count()?;
                        if outcome == DrawOutcome::RoundEnded {
                            return Ok(true);
                        }
                    }
                }
            }
        }
        Ok(false)
    }

    fn score_round(
        &mut self,
        sink: &mut dyn EventSink,
    ) -> Result<Vec<PlayerRoundResult>, GameError> {
        let mut results = Vec::with_capacity(self.players.len());
        for player in &mut self.players {
            let gained = player.potential_score(&self.config);
            player.total_score = player.total_score.saturating_add(gained);
            player.extra_life = false;
            sink.emit(&Event::RoundScore {
                player: player.name.clone(),
                gained,
                total: player.total_score,
            })?;
            results.push(PlayerRoundResult {
                name: player.name.clone(),
                gained,
                total: player.total_score,
            });
        }
        Ok(results)
    }
}
