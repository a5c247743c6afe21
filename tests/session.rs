use std::io::Cursor;

use blackjack_table::{Card, Console, Deck, Rank, Session, Suit, Table, TableRules};
use rand::{rngs::SmallRng, SeedableRng};

type ScriptedSession = Session<SmallRng, Cursor<Vec<u8>>, Vec<u8>>;

fn session(bankroll: u64, deal: &[Rank], script: &str) -> ScriptedSession {
    let cards = deal.iter().map(|&r| Card::new(r, Suit::Clubs)).collect();
    let deck = Deck::stacked(cards, SmallRng::seed_from_u64(11));
    let rules = TableRules {
        starting_bankroll: bankroll,
        ..TableRules::default()
    };
    let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    Session::new(Table::new(deck, rules, "Player"), console)
}

fn output(session: ScriptedSession) -> String {
    let (_, console) = session.into_parts();
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn test_invalid_bets_reprompt_then_win() {
    let mut s = session(
        100,
        &[Rank::Ten, Rank::Ten, Rank::Nine, Rank::Eight],
        "abc\n0\n-5\n500\n10\ns\nn\n",
    );
    assert_eq!(s.run().unwrap(), 110);
    let out = output(s);
    assert!(out.contains("Please enter a valid integer."));
    assert_eq!(out.matches("Invalid bet: Bet must be positive.").count(), 2);
    assert!(out.contains("Invalid bet: Bet cannot exceed your bankroll (100)."));
    assert!(out.contains("Dealer (??): [Hidden], Eight of Clubs"));
    assert!(out.contains("Dealer (18): Ten of Clubs, Eight of Clubs"));
    assert!(out.contains("You win!"));
    assert!(out.contains("Bankroll now: 110"));
    assert!(out.contains("Thanks for playing, Player. You leave with 110 chips."));
}

#[test]
fn test_going_broke_ends_the_game() {
    let mut s = session(
        10,
        &[Rank::Ten, Rank::Ten, Rank::Six, Rank::Seven, Rank::King],
        "10\nh\n",
    );
    assert_eq!(s.run().unwrap(), 0);
    let out = output(s);
    assert!(out.contains("You busted. Dealer wins."));
    assert!(out.contains("You're out of chips. Game over."));
    assert!(!out.contains("Play another round?"));
}

#[test]
fn test_natural_skips_player_turn() {
    let mut s = session(
        100,
        &[
            Rank::Ten, Rank::Ten, Rank::Nine, Rank::Eight,
            Rank::Ace, Rank::Nine, Rank::King, Rank::Seven,
        ],
        "10\ns\ny\n10\nn\n",
    );
    assert_eq!(s.run().unwrap(), 125);
    let out = output(s);
    assert!(out.contains("Blackjack! You win (3:2)."));
    assert!(out.contains("Dealer (??): [Hidden], Seven of Clubs"));
    assert_eq!(out.matches("Dealer (16): Nine of Clubs, Seven of Clubs").count(), 1);
    assert_eq!(out.matches("Hit or Stand?").count(), 1);
    assert_eq!(out.matches("--- New Round ---").count(), 2);
}

#[test]
fn test_closed_input_is_an_error() {
    let mut s = session(100, &[], "");
    assert!(s.run().is_err());
}
