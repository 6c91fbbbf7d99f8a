/// Property-based tests for follow-suit legality and full-round play
use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::cards_logic::count_suit;
use crate::domain::contract::{Contract, ContractKind};
use crate::domain::rules::TRICKS_PER_ROUND;
use crate::domain::state::{Phase, RoundOutcome};
use crate::domain::test_state_helpers::playing_round;
use crate::domain::tricks::{legal_moves, play_card};
use crate::domain::{hand_has_suit, test_gens, test_prelude, Card, Rank, Suit};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Playing a full round with arbitrary legal choices: every play follows
    /// suit when it can, hands shrink by one card per play, and the round
    /// ends after thirteen tricks.
    #[test]
    fn prop_random_legal_playout(
        hands in test_gens::full_deal(),
        trump in test_gens::suit(),
        leader in test_gens::seat(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 52),
    ) {
        let contract = Contract::partnered(ContractKind::AskJoin, 0, 2);
        let mut state = playing_round(contract, leader, hands, trump);
        let mut seen: HashSet<Card> = HashSet::new();

        for pick in picks {
            let Some(seat) = state.expected_player() else { break };
            let legal = legal_moves(&state, seat);
            prop_assert!(!legal.is_empty());
            let card = legal[pick.index(legal.len())];

            let hand_before = state.hands[seat as usize].clone();
            if let Some(lead) = state.current_trick().and_then(|t| t.led_suit()) {
                if hand_has_suit(&hand_before, lead) {
                    prop_assert_eq!(card.suit, lead);
                }
            }
            play_card(&mut state, seat, card).unwrap();
            prop_assert_eq!(state.hands[seat as usize].len(), hand_before.len() - 1);
            prop_assert!(seen.insert(card), "{} played twice", card);
        }

        prop_assert_eq!(state.phase, Phase::Completed);
        prop_assert_eq!(state.outcome, Some(RoundOutcome::Played));
        prop_assert_eq!(state.tricks.len(), TRICKS_PER_ROUND);
        let total: u8 = (0..4).map(|s| state.tricks_won(s)).sum();
        prop_assert_eq!(total as usize, TRICKS_PER_ROUND);
    }

    /// Only the expected seat ever has legal moves.
    #[test]
    fn prop_only_expected_seat_may_play(
        hands in test_gens::full_deal(),
        leader in test_gens::seat(),
    ) {
        let contract = Contract::solo(ContractKind::Abundance, leader);
        let state = playing_round(contract, leader, hands, Suit::Hearts);
        for seat in 0..4u8 {
            let legal = legal_moves(&state, seat);
            prop_assert_eq!(legal.is_empty(), seat != leader);
        }
    }

    /// Legal plays are a duplicate-free subset of the hand.
    #[test]
    fn prop_legal_plays_subset(
        hands in test_gens::full_deal(),
        leader in test_gens::seat(),
        trump in test_gens::suit(),
    ) {
        let contract = Contract::solo(ContractKind::Misery, leader);
        let mut state = playing_round(contract, leader, hands, trump);
        let lead = state.hands[leader as usize][0];
        play_card(&mut state, leader, lead).unwrap();

        let next = state.expected_player().unwrap();
        let legal = legal_moves(&state, next);
        let set: HashSet<Card> = legal.iter().copied().collect();
        prop_assert_eq!(set.len(), legal.len());
        for card in &legal {
            prop_assert!(state.hands[next as usize].contains(card));
        }
    }

    /// A seat out of the led suit may play anything it holds.
    #[test]
    fn prop_void_seat_may_play_whole_hand(
        (led, void_hand) in test_gens::suit()
            .prop_flat_map(|s| (Just(s), test_gens::hand_without_suit(s))),
        trump in test_gens::suit(),
    ) {
        let lead = Card::new(led, Rank::Ace);
        let hands = [vec![lead], void_hand.clone(), Vec::new(), Vec::new()];
        let contract = Contract::partnered(ContractKind::AskJoin, 0, 2);
        let mut state = playing_round(contract, 0, hands, trump);
        play_card(&mut state, 0, lead).unwrap();

        let mut expected = void_hand;
        expected.sort();
        prop_assert_eq!(legal_moves(&state, 1), expected);
    }

    /// Per-suit counts partition a hand, and agree with `hand_has_suit`.
    #[test]
    fn prop_suit_counts_partition_hand(hand in test_gens::hand()) {
        let total: usize = Suit::ALL.iter().map(|&s| count_suit(&hand, s)).sum();
        prop_assert_eq!(total, hand.len());
        for suit in Suit::ALL {
            prop_assert_eq!(hand_has_suit(&hand, suit), count_suit(&hand, suit) > 0);
        }
    }
}
