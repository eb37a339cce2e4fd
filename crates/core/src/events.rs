use crate::{Card, Choice, SinkError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DrawPhase {
    InitialDeal,
    Hit,
    Forced,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ForcedBy {
    FlipThree,
    SecondChance,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalScore {
    pub name: String,
    pub score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    GameStart {
        players: Vec<String>,
        seed: u64,
    },
    RoundStart {
        round: u32,
        dealer: String,
    },
    Draw {
        player: String,
        card: Card,
        phase: DrawPhase,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        forced_by: Option<ForcedBy>,
    },
    ActionFreeze {
        receiver: String,
    },
    ActionSecondChanceTaken {
        player: String,
    },
    ActionSecondChanceGiven {
        from: String,
        to: String,
    },
    ActionSecondChanceDiscarded {
        by: String,
    },
    ActionFlipThree {
        receiver: String,
    },
    BustDuplicate {
        player: String,
        duplicate: u8,
    },
    SecondChanceUsed {
        player: String,
        duplicate: u8,
    },
    #[serde(rename = "FLIP7")]
    Flip7 {
        player: String,
    },
    Choice {
        player: String,
        choice: Choice,
    },
    RoundEnd {
        round: u32,
        dealer: String,
        ended_by_flip7: bool,
    },
    RoundScore {
        player: String,
        gained: i64,
        total: i64,
    },
    GameEnd {
        winners: Vec<String>,
        final_scores: Vec<FinalScore>,
    },
}

impl Event {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::GameStart { .. } => "GAME_START",
            Self::RoundStart { .. } => "ROUND_START",
            Self::Draw { .. } => "DRAW",
            Self::ActionFreeze { .. } => "ACTION_FREEZE",
            Self::ActionSecondChanceTaken { .. } => "ACTION_SECOND_CHANCE_TAKEN",
            Self::ActionSecondChanceGiven { .. } => "ACTION_SECOND_CHANCE_GIVEN",
            Self::ActionSecondChanceDiscarded { .. } => "ACTION_SECOND_CHANCE_DISCARDED",
            Self::ActionFlipThree { .. } => "ACTION_FLIP_THREE",
            Self::BustDuplicate { .. } => "BUST_DUPLICATE",
            Self::SecondChanceUsed { .. } => "SECOND_CHANCE_USED",
            Self::Flip7 { .. } => "FLIP7",
            Self::Choice { .. } => "CHOICE",
            Self::RoundEnd { .. } => "ROUND_END",
            Self::RoundScore { .. } => "ROUND_SCORE",
            Self::GameEnd { .. } => "GAME_END",
        }
    }
}

/// Receives one record per notable event, in order. Timestamps and storage are up to the sink.
pub trait EventSink {
    fn emit(&mut self, event: &Event) -> Result<(), SinkError>;
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.queue
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}

impl EventSink for EventBus {
    fn emit(&mut self, event: &Event) -> Result<(), SinkError> {
        self.push(event.clone());
        Ok(())
    }
}
