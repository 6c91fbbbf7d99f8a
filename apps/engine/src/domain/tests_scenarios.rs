//! Whole-round scenarios exercising bidding, play and scoring together.

use crate::domain::bidding::{place_bid, Bid};
use crate::domain::contract::{Contract, ContractKind};
use crate::domain::scoring::score_round;
use crate::domain::state::{Phase, RoundOutcome, RoundState, Trick};
use crate::domain::test_state_helpers::{bidding_round, hands_from, no_troel_deal};
use crate::domain::tricks::play_card;
use crate::domain::{Card, Rank, Suit};

fn play(state: &mut RoundState, seat: u8, name: &str) {
    let card: Card = name.parse().unwrap();
    play_card(state, seat, card).unwrap_or_else(|e| panic!("seat {seat} {name}: {e}"));
}

#[test]
fn ask_join_nine_tricks_pays_three_each() {
    let mut state = bidding_round(0, no_troel_deal(), Card::new(Suit::Hearts, Rank::Two));
    place_bid(&mut state, 1, Bid::Ask).unwrap();
    place_bid(&mut state, 2, Bid::Pass).unwrap();
    place_bid(&mut state, 3, Bid::Join).unwrap();
    place_bid(&mut state, 0, Bid::Pass).unwrap();

    // Attackers (1 and 3) take nine tricks, defenders four.
    let winners = [1, 3, 1, 3, 1, 3, 1, 3, 1, 0, 2, 0, 2];
    state.tricks = winners
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let mut t = Trick::new(i as u8, 1);
            t.winner = Some(*w);
            t
        })
        .collect();
    state.complete(RoundOutcome::Played);

    let scores = score_round(&state).unwrap();
    assert_eq!(scores.declarer_tricks, 9);
    assert!(scores.made);
    assert_eq!(scores.deltas, [-3, 3, -3, 3]);
    assert_eq!(scores.deltas.iter().sum::<i32>(), 0);
}

#[test]
fn misery_broken_on_trick_six_stops_the_round() {
    let hands = hands_from([
        &[
            "Diamond-Two", "Diamond-Three", "Diamond-Four", "Diamond-Five", "Diamond-Six",
            "Diamond-Seven", "Heart-Six", "Heart-Eight", "Heart-Nine", "Heart-Ten", "Heart-Jack",
            "Heart-Queen", "Heart-King",
        ],
        &[
            "Club-Two", "Club-Three", "Club-Four", "Club-Five", "Club-Six", "Heart-Ace",
            "Diamond-Ace", "Diamond-King", "Diamond-Queen", "Diamond-Jack", "Diamond-Ten",
            "Diamond-Nine", "Diamond-Eight",
        ],
        &[
            "Club-Ace", "Club-King", "Club-Queen", "Club-Jack", "Club-Ten", "Heart-Four",
            "Spade-Two", "Spade-Three", "Spade-Four", "Spade-Five", "Spade-Six", "Spade-Seven",
            "Spade-Eight",
        ],
        &[
            "Club-Seven", "Club-Eight", "Club-Nine", "Heart-Two", "Heart-Three", "Heart-Five",
            "Heart-Seven", "Spade-Nine", "Spade-Ten", "Spade-Jack", "Spade-Queen", "Spade-King",
            "Spade-Ace",
        ],
    ]);
    let mut state = bidding_round(0, hands, Card::new(Suit::Spades, Rank::Two));
    place_bid(&mut state, 1, Bid::Misery).unwrap();
    assert_eq!(state.contract, Some(Contract::solo(ContractKind::Misery, 1)));

    play(&mut state, 1, "Club-Two");
    play(&mut state, 2, "Club-Ace");
    play(&mut state, 3, "Club-Seven");
    play(&mut state, 0, "Diamond-Two");

    for (high, third, discard, low) in [
        ("Club-King", "Club-Eight", "Diamond-Three", "Club-Three"),
        ("Club-Queen", "Club-Nine", "Diamond-Four", "Club-Four"),
        ("Club-Jack", "Heart-Two", "Diamond-Five", "Club-Five"),
        ("Club-Ten", "Heart-Three", "Diamond-Six", "Club-Six"),
    ] {
        play(&mut state, 2, high);
        play(&mut state, 3, third);
        play(&mut state, 0, discard);
        play(&mut state, 1, low);
    }
    assert_eq!(state.tricks_won(1), 0);
    assert_eq!(state.phase, Phase::Playing);

    play(&mut state, 2, "Heart-Four");
    play(&mut state, 3, "Heart-Five");
    play(&mut state, 0, "Heart-Six");
    let card: Card = "Heart-Ace".parse().unwrap();
    let res = play_card(&mut state, 1, card).unwrap();

    assert_eq!(res.round_outcome, Some(RoundOutcome::MiseryBroken));
    assert_eq!(state.phase, Phase::Completed);
    assert_eq!(state.tricks.len(), 6);
    assert_eq!(state.hands[1].len(), 7);

    let scores = score_round(&state).unwrap();
    assert_eq!(scores.deltas, [12, -36, 12, 12]);
    assert!(!scores.made);

    // Carried deck keeps all 52 cards: played order first, then held cards.
    let carried = state.carried_order();
    assert_eq!(carried.len(), 52);
    assert_eq!(carried[0], "Club-Two".parse::<Card>().unwrap());
}

#[test]
fn all_pass_scores_nothing() {
    let mut state = bidding_round(1, no_troel_deal(), Card::new(Suit::Clubs, Rank::Nine));
    for seat in [2, 3, 0, 1] {
        place_bid(&mut state, seat, Bid::Pass).unwrap();
    }
    assert_eq!(state.outcome, Some(RoundOutcome::AllPassed));
    let scores = score_round(&state).unwrap();
    assert_eq!(scores.deltas, [0; 4]);
    assert!(scores.contract.is_none());
}

#[test]
fn scoring_requires_a_completed_round() {
    let state = bidding_round(1, no_troel_deal(), Card::new(Suit::Clubs, Rank::Nine));
    assert!(score_round(&state).is_err());
}
