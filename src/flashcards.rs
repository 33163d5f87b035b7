//! Flashcard session: one deck per vocabulary category, a front/back flip
//! state, linear advance with wrap-around, and a random jump.

use rand::Rng;

use crate::data::{VocabCategory, VocabPair, VOCABULARY};

#[derive(Clone, Debug, PartialEq)]
pub struct FlashcardSession {
    deck: &'static VocabCategory,
    index: usize,
    flipped: bool,
}

impl Default for FlashcardSession {
    fn default() -> Self {
        Self::new(&VOCABULARY[0])
    }
}

impl FlashcardSession {
    pub fn new(deck: &'static VocabCategory) -> Self {
        Self {
            deck,
            index: 0,
            flipped: false,
        }
    }

    pub fn deck(&self) -> &'static VocabCategory {
        self.deck
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn current_card(&self) -> &VocabPair {
        &self.deck.pairs[self.index]
    }

    pub fn toggle(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Next card in deck order, wrapping at the end, face up again.
    pub fn advance(&mut self) {
        self.flipped = false;
        self.index = (self.index + 1) % self.deck.pairs.len();
    }

    /// Jumps to a uniformly random card (which may be the current one).
    /// Keeps the flip state, matching the random button in the original UI.
    pub fn jump_random(&mut self, rng: &mut impl Rng) {
        self.index = rng.gen_range(0..self.deck.pairs.len());
    }

    /// Switching deck always lands on the first card, face up. Unknown ids
    /// keep the current deck.
    pub fn select_deck(&mut self, id: &str) {
        if self.deck.id == id {
            return;
        }
        if let Some(deck) = VOCABULARY.iter().find(|deck| deck.id == id) {
            *self = Self::new(deck);
        }
    }
}
