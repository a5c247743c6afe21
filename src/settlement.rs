use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{chips::Chips, hand::Hand};

/// How a finished round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    PushBothBlackjack,
    PlayerBlackjack,
    DealerBlackjack,
    PlayerBust,
    DealerBust,
    PlayerHigher,
    DealerHigher,
    Tie,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::PushBothBlackjack => "push-both-blackjack",
            Outcome::PlayerBlackjack => "player-blackjack",
            Outcome::DealerBlackjack => "dealer-blackjack",
            Outcome::PlayerBust => "player-bust",
            Outcome::DealerBust => "dealer-bust",
            Outcome::PlayerHigher => "player-higher",
            Outcome::DealerHigher => "dealer-higher",
            Outcome::Tie => "tie",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PushBothBlackjack => "Push. Both have Blackjack.",
            Outcome::PlayerBlackjack => "Blackjack! You win (3:2).",
            Outcome::DealerBlackjack => "Dealer has Blackjack. You lose.",
            Outcome::PlayerBust => "You busted. Dealer wins.",
            Outcome::DealerBust => "Dealer busted. You win!",
            Outcome::PlayerHigher => "You win!",
            Outcome::DealerHigher => "Dealer wins.",
            Outcome::Tie => "Push. It's a tie.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides a finished round and releases the bet accordingly.
///
/// Naturals are checked first, then a player bust (which loses even if the
/// dealer would also be over 21), then a dealer bust, then the totals.
pub fn settle(player: &Hand, dealer: &Hand, chips: &mut Chips) -> Outcome {
    let outcome = decide(player, dealer);
    match outcome {
        Outcome::PushBothBlackjack | Outcome::Tie => chips.push(),
        Outcome::PlayerBlackjack => chips.win_blackjack(),
        Outcome::DealerBust | Outcome::PlayerHigher => chips.win_regular(),
        Outcome::DealerBlackjack | Outcome::PlayerBust | Outcome::DealerHigher => chips.lose(),
    }
    outcome
}

fn decide(player: &Hand, dealer: &Hand) -> Outcome {
    match (player.is_blackjack(), dealer.is_blackjack()) {
        (true, true) => return Outcome::PushBothBlackjack,
        (true, false) => return Outcome::PlayerBlackjack,
        (false, true) => return Outcome::DealerBlackjack,
        (false, false) => {}
    }
    if player.is_bust() {
        return Outcome::PlayerBust;
    }
    if dealer.is_bust() {
        return Outcome::DealerBust;
    }
    match player.value().cmp(&dealer.value()) {
        std::cmp::Ordering::Greater => Outcome::PlayerHigher,
        std::cmp::Ordering::Less => Outcome::DealerHigher,
        std::cmp::Ordering::Equal => Outcome::Tie,
    }
}
