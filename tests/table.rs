use blackjack_table::{
    BetError, Card, Deck, Outcome, Rank, RoundPhase, Suit, Table, TableError, TableRules,
};
use rand::{rngs::SmallRng, SeedableRng};

fn stacked_table(deal: &[(Rank, Suit)]) -> Table {
    let cards = deal.iter().map(|&(r, s)| Card::new(r, s)).collect();
    Table::new(Deck::stacked(cards, SmallRng::seed_from_u64(5)), TableRules::default(), "Ada")
}

#[test]
fn test_round_trip_through_every_phase() {
    let mut table = stacked_table(&[
        (Rank::Five, Suit::Hearts),
        (Rank::Ten, Suit::Spades),
        (Rank::Six, Suit::Hearts),
        (Rank::Seven, Suit::Spades),
        (Rank::Nine, Suit::Diamonds),
    ]);
    assert_eq!(table.phase(), RoundPhase::AwaitingBet);
    assert_eq!(table.place_bet(40), Ok(None));
    assert_eq!(table.chips().bet, 40);
    assert_eq!(table.hit(), Ok(None));
    assert_eq!(table.player().value(), 20);
    assert_eq!(table.stand(), Ok(Outcome::PlayerHigher));
    assert_eq!(table.dealer().value(), 17);
    assert_eq!(table.chips().total, 140);
    assert_eq!(table.chips().bet, 0);
    assert_eq!(table.phase(), RoundPhase::Finished);
    assert_eq!(table.outcome(), Some(Outcome::PlayerHigher));
}

#[test]
fn test_both_naturals_push() {
    let mut table = stacked_table(&[
        (Rank::Ace, Suit::Hearts),
        (Rank::Ace, Suit::Spades),
        (Rank::Queen, Suit::Hearts),
        (Rank::Jack, Suit::Spades),
    ]);
    assert_eq!(table.place_bet(30), Ok(Some(Outcome::PushBothBlackjack)));
    assert_eq!(table.chips().total, 100);
}

#[test]
fn test_failed_bet_then_retry() {
    let mut table = stacked_table(&[]);
    assert_eq!(table.place_bet(0), Err(TableError::Bet(BetError::NotPositive)));
    assert_eq!(table.chips().total, 100);
    assert!(table.place_bet(100).is_ok());
    assert_eq!(table.chips().total, 0);
}

#[test]
fn test_many_rounds_keep_the_ledger_consistent() {
    let mut table = Table::new(Deck::seeded(2024), TableRules::default(), "Ada");
    let mut rounds = 0;
    while rounds < 200 && !table.is_broke() {
        let bet = table.chips().total.min(5);
        let before = table.chips().total;
        let outcome = match table.place_bet(bet).unwrap() {
            Some(outcome) => outcome,
            None => {
                let mut settled = None;
                while table.player().value() < 15 && settled.is_none() {
                    settled = table.hit().unwrap();
                }
                match settled {
                    Some(outcome) => outcome,
                    None => table.stand().unwrap(),
                }
            }
        };
        let after = table.chips().total;
        let expected = match outcome {
            Outcome::PlayerBlackjack => before + bet * 3 / 2,
            Outcome::DealerBust | Outcome::PlayerHigher => before + bet,
            Outcome::PushBothBlackjack | Outcome::Tie => before,
            Outcome::DealerBlackjack | Outcome::PlayerBust | Outcome::DealerHigher => before - bet,
        };
        assert_eq!(after, expected, "outcome {outcome}");
        assert_eq!(table.chips().bet, 0);
        rounds += 1;
    }
    assert!(rounds > 0);
}

#[test]
fn test_view_serializes_descriptor() {
    let mut table = stacked_table(&[
        (Rank::Ace, Suit::Hearts),
        (Rank::Two, Suit::Spades),
        (Rank::King, Suit::Hearts),
        (Rank::Three, Suit::Spades),
    ]);
    table.place_bet(10).unwrap();
    let json = serde_json::to_value(table.view()).unwrap();
    assert_eq!(json["outcome"], "player-blackjack");
    assert_eq!(json["phase"], "finished");
    assert_eq!(json["bankroll"], 115);
    assert_eq!(json["dealer"]["hiddenCards"], 0);
}
