use crate::{ActionKind, Card, GameError, ModifierKind, RngState, ADD_BONUSES, MAX_NUMBER};

pub const DECK_SIZE: usize = 94;

#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
}

impl Deck {
    /// The full 94-card deck in construction order, unshuffled. The last card is drawn first.
    pub fn flip7() -> Self {
        let mut draw = Vec::with_capacity(DECK_SIZE);
        for value in 1..=MAX_NUMBER {
            for _ in 0..value {
                draw.push(Card::Number(value));
            }
        }
        draw.push(Card::Number(0));
        draw.push(Card::Modifier(ModifierKind::Double));
        for bonus in ADD_BONUSES {
            draw.push(Card::Modifier(ModifierKind::Add(bonus)));
        }
        for action in ActionKind::ALL {
            for _ in 0..3 {
                draw.push(Card::Action(action));
            }
        }
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    pub fn shuffled(rng: &mut RngState) -> Self {
        let mut deck = Self::flip7();
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    pub fn len(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty() && self.discard.is_empty()
    }

    pub fn draw(&mut self, rng: &mut RngState) -> Result<Card, GameError> {
        if self.draw.is_empty() {
            self.reshuffle_discard(rng);
        }
        self.draw.pop().ok_or(GameError::DeckExhausted)
    }

    pub fn discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    pub fn discard_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard.extend(cards);
    }

    /// Moves the discard pile under the draw pile and shuffles. Only called on an empty draw pile.
    pub fn reshuffle_discard(&mut self, rng: &mut RngState) {
        if self.discard.is_empty() {
            return;
        }
        tracing::debug!(cards = self.discard.len(), "reshuffling discard pile");
        self.draw.append(&mut self.discard);
        rng.shuffle(&mut self.draw);
    }

    pub fn count_of(&self, card: Card) -> usize {
        self.draw
            .iter()
            .chain(self.discard.iter())
            .filter(|held| **held == card)
            .count()
    }
}
