//! Single-deck Blackjack: hand valuation, a reserve-on-bet chip ledger and
//! round settlement, with a table that drives one player against the dealer.

pub mod card;
pub mod chips;
pub mod config;
pub mod deck;
pub mod error;
pub mod hand;
pub mod session;
pub mod settlement;
pub mod table;
#[cfg(feature = "wasm")]
mod wasm;

pub use card::{Card, Rank, Suit};
pub use chips::Chips;
pub use config::{TableConfig, TableRules};
pub use deck::Deck;
pub use error::{BetError, ConfigError, SessionError, TableError};
pub use hand::Hand;
pub use session::{Console, Move, Session};
pub use settlement::{settle, Outcome};
pub use table::{play_dealer, HandView, RoundPhase, Table, TableView};
#[cfg(feature = "wasm")]
pub use wasm::WasmTable;
