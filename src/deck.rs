use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

use crate::card::{full_deck, Card};

pub const DECK_SIZE: usize = 52;

/// A single 52-card deck that reshuffles itself when it runs dry.
pub struct Deck<R = SmallRng> {
    cards: Vec<Card>,
    rng: R,
}

impl Deck<SmallRng> {
    pub fn new() -> Self {
        Deck::with_rng(SmallRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Deck::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Deck<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Deck<R> {
    pub fn with_rng(rng: R) -> Self {
        let mut deck = Deck {
            cards: Vec::with_capacity(DECK_SIZE),
            rng,
        };
        deck.shuffle();
        deck
    }

    /// Deals `cards` first, in the order given, then falls back to
    /// freshly shuffled full decks.
    pub fn stacked(mut cards: Vec<Card>, rng: R) -> Self {
        cards.truncate(DECK_SIZE);
        cards.reverse();
        Deck { cards, rng }
    }

    /// Rebuilds the full 52 cards and shuffles them.
    pub fn shuffle(&mut self) {
        self.cards.clear();
        self.cards.extend(full_deck());
        self.cards.shuffle(&mut self.rng);
    }

    pub fn deal(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            log::info!("deck exhausted, reshuffling");
            self.shuffle();
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use std::collections::HashSet;

    #[test]
    fn test_new_deck_is_full() {
        let deck = Deck::seeded(7);
        assert_eq!(deck.remaining(), DECK_SIZE);
    }

    #[test]
    fn test_first_52_deals_cover_the_deck() {
        let mut deck = Deck::seeded(42);
        let dealt: HashSet<Card> = (0..DECK_SIZE).map(|_| deck.deal()).collect();
        assert_eq!(dealt.len(), DECK_SIZE);
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn test_53rd_deal_reshuffles() {
        let mut deck = Deck::seeded(3);
        for _ in 0..DECK_SIZE {
            deck.deal();
        }
        let card = deck.deal();
        assert!(full_deck().contains(&card));
        assert_eq!(deck.remaining(), DECK_SIZE - 1);
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut a = Deck::seeded(99);
        let mut b = Deck::seeded(99);
        for _ in 0..DECK_SIZE {
            assert_eq!(a.deal(), b.deal());
        }
    }

    #[test]
    fn test_stacked_deals_in_order() {
        let first = Card::new(Rank::Ace, Suit::Spades);
        let second = Card::new(Rank::King, Suit::Hearts);
        let mut deck = Deck::stacked(vec![first, second], SmallRng::seed_from_u64(1));
        assert_eq!(deck.deal(), first);
        assert_eq!(deck.deal(), second);
        assert_eq!(deck.remaining(), 0);
        deck.deal();
        assert_eq!(deck.remaining(), DECK_SIZE - 1);
    }
}
