//! Test-only round state builders for domain unit tests.

use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::contract::Contract;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{Phase, RoundState, Seat};
use crate::domain::{Card, Rank, Suit};

/// Parse four hands of card names.
pub fn hands_from(names: [&[&str]; PLAYERS]) -> [Vec<Card>; PLAYERS] {
    names.map(|h| {
        let mut hand = try_parse_cards(h.iter()).expect("valid card names");
        hand.sort();
        hand
    })
}

/// A round in Bidding with the given hands; trump revealed by `trump_card`.
pub fn bidding_round(dealer: Seat, hands: [Vec<Card>; PLAYERS], trump_card: Card) -> RoundState {
    let mut state = RoundState::new(1, dealer, hands, trump_card);
    state.phase = Phase::Bidding;
    state
}

/// A round already playing `contract`, first trick led by `leader`.
pub fn playing_round(
    contract: Contract,
    leader: Seat,
    hands: [Vec<Card>; PLAYERS],
    trump: Suit,
) -> RoundState {
    let mut state = RoundState::new(1, 0, hands, Card::new(trump, Rank::Two));
    state.contract = Some(contract);
    state.phase = Phase::Playing;
    state.open_trick(leader);
    state
}

/// Four 13-card hands with no Troel: each seat holds exactly one Ace.
/// Card (suit index `s`, rank index `r`) goes to seat `(s + r) % 4`.
pub fn no_troel_deal() -> [Vec<Card>; PLAYERS] {
    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (s, suit) in Suit::ALL.into_iter().enumerate() {
        for (r, rank) in Rank::ALL.into_iter().enumerate() {
            hands[(s + r) % PLAYERS].push(Card::new(suit, rank));
        }
    }
    for hand in hands.iter_mut() {
        hand.sort();
    }
    hands
}
