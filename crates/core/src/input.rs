use crate::{InputError, Player};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Choice {
    #[serde(rename = "h")]
    Hit,
    #[serde(rename = "s")]
    Stay,
}

/// Human decisions the round controller blocks on.
pub trait PlayerInput {
    /// `potential` is what the player would bank by staying now.
    fn hit_or_stay(&mut self, player: &Player, potential: i64) -> Result<Choice, InputError>;

    /// Picks who receives a surplus second chance from `giver`. Only called with two or
    /// more candidates; returns an index into `candidates`, or `None` to discard the token.
    fn choose_player(
        &mut self,
        giver: &Player,
        candidates: &[&Player],
    ) -> Result<Option<usize>, InputError>;
}
