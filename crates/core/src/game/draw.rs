use super::*;
use crate::{Card, DrawPhase, ForcedBy};

impl Game {
    /// Draws one card for `index` and applies it. A second chance that asks for a
    /// follow-up draw loops here instead of recursing.
    pub(super) fn resolve_draw(
        &mut self,
        index: usize,
        phase: DrawPhase,
        forced_by: Option<ForcedBy>,
        input: &mut dyn PlayerInput,
        sink: &mut dyn EventSink,
    ) -> Result<DrawOutcome, GameError> {
        let (mut phase, mut forced_by) = (phase, forced_by);
        loop {
            let card = self.deck.draw(&mut self.rng)?;
            sink.emit(&Event::Draw {
                player: self.players[index].name.clone(),
                card,
                phase,
                forced_by,
            })?;
            tracing::debug!(player = %self.players[index].name, %card, "draw");

            match card {
                Card::Number(value) => return self.resolve_number(index, card, value, sink),
                Card::Modifier(modifier) => {
                    self.players[index].add_modifier(modifier);
                    return Ok(DrawOutcome::Continue);
                }
                Card::Action(action) => {
                    self.deck.discard(card);
                    let effect = self.resolve_action(action, index, input, sink)?;
                    if effect.round_ended {
                        return Ok(DrawOutcome::RoundEnded);
                    }
                    if effect.force_draw && self.players[index].is_active() {
                        phase = DrawPhase::Forced;
                        forced_by = Some(ForcedBy::SecondChance);
                        continue;
                    }
                    return Ok(DrawOutcome::Continue);
                }
            }
        }
    }

    fn resolve_number(
        &mut self,
        index: usize,
        card: Card,
        value: u8,
        sink: &mut dyn EventSink,
    ) -> Result<DrawOutcome, GameError> {
        let player = &mut self.players[index];
        if player.has_number(value) {
            self.deck.discard(card);
            if player.consume_extra_life() {
                sink.emit(&Event::SecondChanceUsed {
                    player: player.name.clone(),
                    duplicate: value,
                })?;
            } else {
                player.bust();
                tracing::debug!(player = %player.name, duplicate = value, "bust");
                sink.emit(&Event::BustDuplicate {
                    player: player.name.clone(),
                    duplicate: value,
                })?;
            }
            return Ok(DrawOutcome::Continue);
        }

        player.add_number(value);
        if player.numbers.len() >= self.config.flip_seven_count {
            tracing::debug!(player = %player.name, "flip seven");
            sink.emit(&Event::Flip7 {
                player: player.name.clone(),
            })?;
            return Ok(DrawOutcome::RoundEnded);
        }
        Ok(DrawOutcome::Continue)
    }
}
