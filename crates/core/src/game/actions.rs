use super::*;
use crate::{ActionKind, DrawPhase, ForcedBy};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct ActionEffect {
    pub round_ended: bool,
    /// The receiver draws again right away.
    pub force_draw: bool,
}

impl Game {
    /// The action card itself is already on the discard pile when this runs.
    pub(super) fn resolve_action(
        &mut self,
        action: ActionKind,
        receiver: usize,
        input: &mut dyn PlayerInput,
        sink: &mut dyn EventSink,
    ) -> Result<ActionEffect, GameError> {
        match action {
            ActionKind::Freeze => {
                let player = &mut self.players[receiver];
                player.freeze();
                sink.emit(&Event::ActionFreeze {
                    receiver: player.name.clone(),
                })?;
                Ok(ActionEffect::default())
            }
            ActionKind::SecondChance => {
                if self.players[receiver].extra_life {
                    self.pass_second_chance(receiver, input, sink)?;
                } else {
                    let player = &mut self.players[receiver];
                    player.grant_extra_life();
                    sink.emit(&Event::ActionSecondChanceTaken {
                        player: player.name.clone(),
                    })?;
                }
                Ok(ActionEffect {
                    round_ended: false,
                    force_draw: true,
                })
            }
            ActionKind::FlipThree => {
                sink.emit(&Event::ActionFlipThree {
                    receiver: self.players[receiver].name.clone(),
                })?;
                for _ in 0..self.config.flip_three_draws {
                    let outcome = self.resolve_draw(
                        receiver,
                        DrawPhase::Forced,
                        Some(ForcedBy::FlipThree),
                        input,
                        sink,
                    )?;
                    if outcome == DrawOutcome::RoundEnded {
                        return Ok(ActionEffect {
                            round_ended: true,
                            force_draw: false,
                        });
                    }
                    if !self.players[receiver].is_active() {
                        break;
                    }
                }
                Ok(ActionEffect::default())
            }
        }
    }

    /// A player never holds two extra lives: the surplus goes to another active player
    /// or is lost.
    fn pass_second_chance(
        &mut self,
        giver: usize,
        input: &mut dyn PlayerInput,
        sink: &mut dyn EventSink,
    ) -> Result<(), GameError> {
        let candidates: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(index, player)| *index != giver && player.is_active())
            .map(|(index, _)| index)
            .collect();

        let chosen = match candidates.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => {
                let refs: Vec<&Player> = candidates
                    .iter()
                    .map(|index| &self.players[*index])
                    .collect();
                input
                    .choose_player(&self.players[giver], &refs)?
                    .and_then(|pick| candidates.get(pick).copied())
            }
        };

        let from = self.players[giver].name.clone();
        match chosen {
            Some(target) => {
                self.players[target].grant_extra_life();
                sink.emit(&Event::ActionSecondChanceGiven {
                    from,
                    to: self.players[target].name.clone(),
                })?;
            }
            None => {
                sink.emit(&Event::ActionSecondChanceDiscarded { by: from })?;
            }
        }
        Ok(())
    }
}
