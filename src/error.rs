use std::io;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetError {
    #[error("Bet must be positive.")]
    NotPositive,
    #[error("Bet cannot exceed your bankroll ({total}).")]
    ExceedsBankroll { amount: u64, total: u64 },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("Invalid bet: {0}")]
    Bet(#[from] BetError),
    #[error("A round is already in progress")]
    RoundInProgress,
    #[error("No round in progress")]
    NoRoundInProgress,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Starting bankroll must be positive")]
    EmptyBankroll,
    #[error("Starting bankroll {bankroll} exceeds the table limit of {max}")]
    BankrollTooLarge { bankroll: u64, max: u64 },
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Console error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Table(#[from] TableError),
}
