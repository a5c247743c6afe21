use std::fmt;

use crate::card::Card;

pub const BLACKJACK: u16 = 21;

/// One participant's cards for a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    owner: String,
    cards: Vec<Card>,
    value: u16,
    soft_aces: u8,
}

impl Hand {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            cards: Vec::new(),
            value: 0,
            soft_aces: 0,
        }
    }

    pub fn from_cards(owner: impl Into<String>, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut hand = Hand::new(owner);
        for card in cards {
            hand.add_card(card);
        }
        hand
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.value = self.value.saturating_add(u16::from(card.value()));
        if card.is_ace() {
            self.soft_aces = self.soft_aces.saturating_add(1);
        }
        // Demote one ace at a time; four aces may need three passes.
        while self.value > BLACKJACK && self.soft_aces > 0 {
            self.value -= 10;
            self.soft_aces -= 1;
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    /// Aces still counted as 11.
    pub fn soft_aces(&self) -> u8 {
        self.soft_aces
    }

    pub fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }

    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value == BLACKJACK
    }

    pub fn is_bust(&self) -> bool {
        self.value > BLACKJACK
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): ", self.owner, self.value)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
