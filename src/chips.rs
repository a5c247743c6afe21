use serde::{Deserialize, Serialize};

use crate::error::BetError;

/// Largest bankroll whose blackjack payout still fits in a `u64`.
pub const MAX_BANKROLL: u64 = u64::MAX / 5;

/// Bankroll plus the stake reserved for the round in progress.
///
/// A bet is taken out of `total` as soon as it is placed; exactly one of
/// [`Chips::win_regular`], [`Chips::win_blackjack`], [`Chips::push`] or
/// [`Chips::lose`] releases it at the end of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chips {
    pub total: u64,
    pub bet: u64,
}

impl Chips {
    pub fn new(total: u64) -> Self {
        Chips { total, bet: 0 }
    }

    pub fn place_bet(&mut self, amount: u64) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::NotPositive);
        }
        if amount > self.total {
            return Err(BetError::ExceedsBankroll {
                amount,
                total: self.total,
            });
        }
        self.bet = amount;
        self.total -= amount;
        Ok(())
    }

    /// Stake back plus even money.
    pub fn win_regular(&mut self) {
        self.credit(self.bet.saturating_mul(2));
    }

    /// Stake back plus 3:2, rounded down: `2 * bet + bet / 2`.
    pub fn win_blackjack(&mut self) {
        self.credit(self.bet.saturating_mul(2).saturating_add(self.bet / 2));
    }

    pub fn push(&mut self) {
        self.credit(self.bet);
    }

    // Saturates at u64::MAX; bankrolls within MAX_BANKROLL never get there.
    fn credit(&mut self, amount: u64) {
        self.total = self.total.saturating_add(amount);
        self.bet = 0;
    }

    pub fn lose(&mut self) {
        self.bet = 0;
    }
}

impl Default for Chips {
    fn default() -> Self {
        Chips::new(100)
    }
}
