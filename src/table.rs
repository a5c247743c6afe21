use std::fmt;

use rand::{rngs::SmallRng, Rng};
use serde::Serialize;

use crate::{
    card::Card,
    chips::Chips,
    config::{TableConfig, TableRules},
    deck::Deck,
    error::TableError,
    hand::Hand,
    settlement::{settle, Outcome},
};

pub const DEALER: &str = "Dealer";
pub const DEALER_STANDS_ON: u16 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundPhase {
    AwaitingBet,
    PlayerTurn,
    Finished,
}

/// One player against the dealer: the deck, the ledger and the round in play.
pub struct Table<R = SmallRng> {
    deck: Deck<R>,
    chips: Chips,
    rules: TableRules,
    player_name: String,
    player: Hand,
    dealer: Hand,
    phase: RoundPhase,
    outcome: Option<Outcome>,
}

impl Table<SmallRng> {
    pub fn from_config(config: &TableConfig) -> Self {
        let deck = match config.seed {
            Some(seed) => Deck::seeded(seed),
            None => Deck::new(),
        };
        Table::new(deck, config.rules(), config.display_name())
    }
}

impl<R: Rng> Table<R> {
    pub fn new(deck: Deck<R>, rules: TableRules, player_name: impl Into<String>) -> Self {
        let player_name = player_name.into();
        Table {
            deck,
            chips: Chips::new(rules.starting_bankroll),
            rules,
            player: Hand::new(player_name.clone()),
            dealer: Hand::new(DEALER),
            player_name,
            phase: RoundPhase::AwaitingBet,
            outcome: None,
        }
    }

    pub fn chips(&self) -> &Chips {
        &self.chips
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Outcome of the last finished round.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_broke(&self) -> bool {
        self.chips.total == 0 && self.chips.bet == 0
    }

    /// Reserves the bet and deals the opening hands. A natural on either
    /// side settles the round on the spot.
    pub fn place_bet(&mut self, amount: u64) -> Result<Option<Outcome>, TableError> {
        if self.phase == RoundPhase::PlayerTurn {
            return Err(TableError::RoundInProgress);
        }
        if let Err(err) = self.chips.place_bet(amount) {
            log::warn!("rejected bet of {amount}: {err}");
            return Err(err.into());
        }
        log::debug!("bet {amount} placed, bankroll now {}", self.chips.total);

        self.player = Hand::new(self.player_name.clone());
        self.dealer = Hand::new(DEALER);
        self.outcome = None;
        for _ in 0..2 {
            deal_to(&mut self.deck, &mut self.player);
            deal_to(&mut self.deck, &mut self.dealer);
        }
        self.phase = RoundPhase::PlayerTurn;

        if self.player.is_blackjack() || self.dealer.is_blackjack() {
            return Ok(Some(self.finish()));
        }
        Ok(None)
    }

    /// Deals the player one card. Busting ends the round without the
    /// dealer drawing.
    pub fn hit(&mut self) -> Result<Option<Outcome>, TableError> {
        self.ensure_player_turn()?;
        deal_to(&mut self.deck, &mut self.player);
        if self.player.is_bust() {
            return Ok(Some(self.finish()));
        }
        Ok(None)
    }

    pub fn stand(&mut self) -> Result<Outcome, TableError> {
        self.ensure_player_turn()?;
        play_dealer(&mut self.deck, &mut self.dealer, &self.rules);
        Ok(self.finish())
    }

    pub fn view(&self) -> TableView {
        let hide_hole_card = self.phase == RoundPhase::PlayerTurn;
        TableView {
            phase: self.phase,
            bankroll: self.chips.total,
            bet: self.chips.bet,
            player: HandView::open(&self.player),
            dealer: if hide_hole_card {
                HandView::hole_card_hidden(&self.dealer)
            } else {
                HandView::open(&self.dealer)
            },
            outcome: self.outcome,
        }
    }

    fn ensure_player_turn(&self) -> Result<(), TableError> {
        if self.phase != RoundPhase::PlayerTurn {
            return Err(TableError::NoRoundInProgress);
        }
        Ok(())
    }

    fn finish(&mut self) -> Outcome {
        let outcome = settle(&self.player, &self.dealer, &mut self.chips);
        log::info!(
            "round settled: {outcome} (player {}, dealer {}), bankroll {}",
            self.player.value(),
            self.dealer.value(),
            self.chips.total
        );
        self.phase = RoundPhase::Finished;
        self.outcome = Some(outcome);
        outcome
    }
}

fn deal_to<R: Rng>(deck: &mut Deck<R>, hand: &mut Hand) {
    let card = deck.deal();
    log::debug!("{} draws {card}", hand.owner());
    hand.add_card(card);
}

/// Draws for the dealer until the hand stands: 17 or more, or a hard 17 or
/// more when the table hits soft 17.
pub fn play_dealer<R: Rng>(deck: &mut Deck<R>, hand: &mut Hand, rules: &TableRules) {
    while dealer_should_draw(hand, rules) {
        deal_to(deck, hand);
    }
}

fn dealer_should_draw(hand: &Hand, rules: &TableRules) -> bool {
    let value = hand.value();
    value < DEALER_STANDS_ON
        || (rules.dealer_hits_soft_17 && value == DEALER_STANDS_ON && hand.is_soft())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandView {
    pub owner: String,
    pub cards: Vec<Card>,
    /// `None` while a card is face down.
    pub value: Option<u16>,
    pub hidden_cards: usize,
}

impl HandView {
    pub(crate) fn open(hand: &Hand) -> Self {
        HandView {
            owner: hand.owner().to_string(),
            cards: hand.cards().to_vec(),
            value: Some(hand.value()),
            hidden_cards: 0,
        }
    }

    pub(crate) fn hole_card_hidden(hand: &Hand) -> Self {
        let cards = hand.cards();
        HandView {
            owner: hand.owner().to_string(),
            cards: cards.iter().skip(1).copied().collect(),
            value: None,
            hidden_cards: cards.len().min(1),
        }
    }
}

impl fmt::Display for HandView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hidden_cards == 0 && self.cards.is_empty() {
            return write!(f, "{}: (no cards)", self.owner);
        }
        match self.value {
            Some(value) => write!(f, "{} ({value}): ", self.owner)?,
            None => write!(f, "{} (??): ", self.owner)?,
        }
        let hidden = std::iter::repeat("[Hidden]".to_string()).take(self.hidden_cards);
        let shown = self.cards.iter().map(Card::to_string);
        let labels: Vec<String> = hidden.chain(shown).collect();
        f.write_str(&labels.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub phase: RoundPhase,
    pub bankroll: u64,
    pub bet: u64,
    pub player: HandView,
    pub dealer: HandView,
    pub outcome: Option<Outcome>,
}
