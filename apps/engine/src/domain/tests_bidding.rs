use crate::domain::bidding::{legal_bids, place_bid, sanitize_bid, set_trump, Bid, BidOutcome};
use crate::domain::contract::{Contract, ContractKind};
use crate::domain::state::{Phase, RoundOutcome, RoundState};
use crate::domain::test_state_helpers::{bidding_round, hands_from, no_troel_deal};
use crate::domain::tricks::play_card;
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::ValidationKind;

fn fresh(dealer: u8) -> RoundState {
    bidding_round(dealer, no_troel_deal(), Card::new(Suit::Hearts, Rank::Two))
}

#[test]
fn bidding_starts_left_of_dealer() {
    let mut state = fresh(2);
    assert_eq!(state.expected_bidder(), Some(3));
    let err = place_bid(&mut state, 0, Bid::Pass).unwrap_err();
    assert!(err.is_kind(ValidationKind::OutOfTurn));
    assert_eq!(
        place_bid(&mut state, 3, Bid::Pass).unwrap(),
        BidOutcome::Recorded { next_bidder: 0 }
    );
}

#[test]
fn ask_and_join_make_a_partnership() {
    let mut state = fresh(0);
    place_bid(&mut state, 1, Bid::Pass).unwrap();
    place_bid(&mut state, 2, Bid::Ask).unwrap();
    place_bid(&mut state, 3, Bid::Join).unwrap();
    let outcome = place_bid(&mut state, 0, Bid::Pass).unwrap();

    let expected = Contract::partnered(ContractKind::AskJoin, 2, 3);
    assert_eq!(outcome, BidOutcome::ContractWon(expected));
    assert_eq!(state.contract, Some(expected));
    assert_eq!(state.phase, Phase::Playing);
    // First trick is led by the seat after the dealer.
    assert_eq!(state.expected_player(), Some(1));
}

#[test]
fn join_requires_an_open_ask() {
    let mut state = fresh(0);
    let err = place_bid(&mut state, 1, Bid::Join).unwrap_err();
    assert!(err.is_kind(ValidationKind::IllegalBid));

    place_bid(&mut state, 1, Bid::Ask).unwrap();
    place_bid(&mut state, 2, Bid::Join).unwrap();
    let err = place_bid(&mut state, 3, Bid::Join).unwrap_err();
    assert!(err.is_kind(ValidationKind::IllegalBid));
}

#[test]
fn second_ask_is_illegal() {
    let mut state = fresh(0);
    place_bid(&mut state, 1, Bid::Ask).unwrap();
    let err = place_bid(&mut state, 2, Bid::Ask).unwrap_err();
    assert!(err.is_kind(ValidationKind::IllegalBid));
    // Rejected bids leave the auction untouched.
    assert_eq!(state.bids.len(), 1);
    assert_eq!(state.expected_bidder(), Some(2));
}

#[test]
fn alone_is_not_an_opening_bid() {
    let mut state = fresh(0);
    let err = place_bid(&mut state, 1, Bid::Alone).unwrap_err();
    assert!(err.is_kind(ValidationKind::IllegalBid));
}

#[test]
fn unanswered_ask_goes_to_choosing_alone() {
    let mut state = fresh(3);
    place_bid(&mut state, 0, Bid::Pass).unwrap();
    place_bid(&mut state, 1, Bid::Ask).unwrap();
    place_bid(&mut state, 2, Bid::Pass).unwrap();
    let outcome = place_bid(&mut state, 3, Bid::Pass).unwrap();
    assert_eq!(outcome, BidOutcome::AwaitingAlone { asker: 1 });
    assert_eq!(state.phase, Phase::ChoosingAlone);
    assert_eq!(state.expected_bidder(), Some(1));
    assert_eq!(legal_bids(&state, 1), vec![Bid::Pass, Bid::Alone]);

    let err = place_bid(&mut state, 1, Bid::Join).unwrap_err();
    assert!(err.is_kind(ValidationKind::IllegalBid));
    let err = place_bid(&mut state, 2, Bid::Alone).unwrap_err();
    assert!(err.is_kind(ValidationKind::OutOfTurn));

    let outcome = place_bid(&mut state, 1, Bid::Alone).unwrap();
    assert_eq!(
        outcome,
        BidOutcome::ContractWon(Contract::solo(ContractKind::Alone, 1))
    );
    assert_eq!(state.expected_player(), Some(0));
}

#[test]
fn asker_passing_ends_the_round() {
    let mut state = fresh(0);
    place_bid(&mut state, 1, Bid::Ask).unwrap();
    for seat in [2, 3, 0] {
        place_bid(&mut state, seat, Bid::Pass).unwrap();
    }
    assert_eq!(place_bid(&mut state, 1, Bid::Pass).unwrap(), BidOutcome::AllPassed);
    assert_eq!(state.phase, Phase::Completed);
    assert_eq!(state.outcome, Some(RoundOutcome::AllPassed));
    assert!(state.contract.is_none());
}

#[test]
fn misery_wins_instantly() {
    let mut state = fresh(0);
    place_bid(&mut state, 1, Bid::Ask).unwrap();
    let outcome = place_bid(&mut state, 2, Bid::Misery).unwrap();
    assert_eq!(
        outcome,
        BidOutcome::ContractWon(Contract::solo(ContractKind::Misery, 2))
    );
    assert_eq!(state.bids.len(), 2);
    let err = place_bid(&mut state, 3, Bid::Pass).unwrap_err();
    assert!(err.is_kind(ValidationKind::PhaseMismatch));
}

#[test]
fn legal_bids_only_for_expected_seat() {
    let state = fresh(0);
    assert!(legal_bids(&state, 2).is_empty());
    assert_eq!(
        legal_bids(&state, 1),
        vec![
            Bid::Pass,
            Bid::Ask,
            Bid::Abundance,
            Bid::Misery,
            Bid::OpenMisery,
            Bid::GrandSlam
        ]
    );
}

#[test]
fn sanitize_downgrades_illegal_suggestions() {
    let mut state = fresh(0);
    assert_eq!(sanitize_bid(&state, 1, Bid::Join), Bid::Pass);
    assert_eq!(sanitize_bid(&state, 1, Bid::Ask), Bid::Ask);
    assert_eq!(sanitize_bid(&state, 3, Bid::Ask), Bid::Pass);
    place_bid(&mut state, 1, Bid::Ask).unwrap();
    assert_eq!(sanitize_bid(&state, 2, Bid::Ask), Bid::Pass);
    assert_eq!(sanitize_bid(&state, 2, Bid::Join), Bid::Join);
}

#[test]
fn abundance_declarer_may_choose_trump_before_first_card() {
    let mut state = fresh(0);
    place_bid(&mut state, 1, Bid::Abundance).unwrap();

    let err = set_trump(&mut state, 2, Suit::Clubs).unwrap_err();
    assert!(err.is_kind(ValidationKind::InvalidTrumpOverride));

    set_trump(&mut state, 1, Suit::Clubs).unwrap();
    assert_eq!(state.trump, Suit::Clubs);

    let lead = state.hands[1][0];
    play_card(&mut state, 1, lead).unwrap();
    let err = set_trump(&mut state, 1, Suit::Spades).unwrap_err();
    assert!(err.is_kind(ValidationKind::InvalidTrumpOverride));
}

#[test]
fn partnered_contract_cannot_choose_trump() {
    let mut state = fresh(0);
    place_bid(&mut state, 1, Bid::Ask).unwrap();
    place_bid(&mut state, 2, Bid::Join).unwrap();
    place_bid(&mut state, 3, Bid::Pass).unwrap();
    place_bid(&mut state, 0, Bid::Pass).unwrap();
    let err = set_trump(&mut state, 1, Suit::Clubs).unwrap_err();
    assert!(err.is_kind(ValidationKind::InvalidTrumpOverride));
}

#[test]
fn troel_skips_the_auction() {
    let hands = hands_from([
        &[
            "Heart-Ace", "Spade-Ace", "Club-Ace", "Heart-Two", "Heart-Three", "Heart-Four",
            "Heart-Five", "Heart-Six", "Heart-Seven", "Heart-Eight", "Heart-Nine", "Heart-Ten",
            "Heart-Jack",
        ],
        &[
            "Diamond-Ace", "Diamond-Two", "Diamond-Three", "Diamond-Four", "Diamond-Five",
            "Diamond-Six", "Diamond-Seven", "Diamond-Eight", "Diamond-Nine", "Diamond-Ten",
            "Diamond-Jack", "Diamond-Queen", "Diamond-King",
        ],
        &[
            "Club-Two", "Club-Three", "Club-Four", "Club-Five", "Club-Six", "Club-Seven",
            "Club-Eight", "Club-Nine", "Club-Ten", "Club-Jack", "Club-Queen", "Club-King",
            "Heart-Queen",
        ],
        &[
            "Spade-Two", "Spade-Three", "Spade-Four", "Spade-Five", "Spade-Six", "Spade-Seven",
            "Spade-Eight", "Spade-Nine", "Spade-Ten", "Spade-Jack", "Spade-Queen", "Spade-King",
            "Heart-King",
        ],
    ]);
    let mut state = RoundState::new(1, 3, hands, Card::new(Suit::Clubs, Rank::Two));
    let found = state.begin().unwrap().expect("troel");
    assert_eq!(found.caller, 0);
    assert_eq!(found.partner, 1);
    assert_eq!(state.trump, Suit::Diamonds);
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(
        state.contract,
        Some(Contract::partnered(ContractKind::Troel, 0, 1))
    );
    // Partner leads, not the seat after the dealer.
    assert_eq!(state.expected_player(), Some(1));
    let err = place_bid(&mut state, 0, Bid::Pass).unwrap_err();
    assert!(err.is_kind(ValidationKind::PhaseMismatch));
}

#[test]
fn begin_without_troel_opens_bidding() {
    let mut state = RoundState::new(1, 0, no_troel_deal(), Card::new(Suit::Spades, Rank::Four));
    assert!(state.begin().unwrap().is_none());
    assert_eq!(state.phase, Phase::Bidding);
    let err = state.begin().unwrap_err();
    assert!(err.is_kind(ValidationKind::PhaseMismatch));
}
