use super::card::Card;
use super::hole::Hole;
use rand::Rng;

/// An ordered deck dealing from the top of the stack.
///
/// Freshly built decks hold all 52 cards in sorted order; shuffle before
/// dealing. Dealing removes from the back, so the deck only ever shrinks
/// over the life of a hand.
#[derive(Debug, Clone)]
pub struct Deck(Vec<Card>);

impl Deck {
    pub fn new() -> Self {
        Self((0..52u8).map(Card::from).collect())
    }

    /// Fisher-Yates over an injected rng so deals are reproducible by seed.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        for i in (1..self.0.len()).rev() {
            let j = rng.random_range(0..=i);
            self.0.swap(i, j);
        }
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Card {
        self.0.pop().expect("overdrawn deck")
    }

    /// Remove and return the top n cards in dealt order.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        assert!(n <= self.0.len());
        (0..n).map(|_| self.draw()).collect()
    }

    /// Remove two cards from the deck to deal as a Hole.
    pub fn hole(&mut self) -> Hole {
        let a = self.draw();
        let b = self.draw();
        Hole::from((a, b))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
