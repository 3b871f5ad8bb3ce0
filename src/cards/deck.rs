//! The shuffled tempo deck.
//!
//! Cards are drawn from the top (end of the vec). The deck only ever
//! shrinks: there is no way to put a card back.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::rng::GameRng;

/// Remaining tempo cards, top = end of vec.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A deck in the given order (last card is drawn first).
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Copy `catalog` and shuffle it once.
    #[must_use]
    pub fn shuffled(catalog: &[Card], rng: &mut GameRng) -> Self {
        let mut cards = catalog.to_vec();
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Take the top card, or `None` if the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
