/// Property-based tests for the auction
use proptest::prelude::*;

use crate::domain::bidding::{max_level, place_bid, sanitize_bid, Bid};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{bidding_round, no_troel_deal};
use crate::domain::{test_gens, test_prelude, Card, Rank, Suit};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// No accepted bid sits below the running maximum of earlier bids,
    /// except Join answering an Ask (and the asker's own Alone/Pass choice).
    #[test]
    fn prop_accepted_bids_respect_hierarchy(
        dealer in test_gens::seat(),
        attempts in prop::collection::vec(test_gens::bid(), 1..20),
    ) {
        let mut state = bidding_round(dealer, no_troel_deal(), Card::new(Suit::Hearts, Rank::Two));

        for bid in attempts {
            let Some(seat) = state.expected_bidder() else { break };
            let before = state.bids.clone();
            let phase_before = state.phase;
            match place_bid(&mut state, seat, bid) {
                Ok(_) => {
                    if phase_before == Phase::Bidding && bid != Bid::Pass && bid != Bid::Join {
                        prop_assert!(bid.level() >= max_level(&before),
                            "{} accepted after {:?}", bid, before);
                    }
                    if bid == Bid::Join {
                        prop_assert!(before.iter().any(|b| b.bid == Bid::Ask));
                    }
                }
                Err(_) => {
                    prop_assert_eq!(&state.bids, &before);
                    prop_assert_eq!(state.phase, phase_before);
                }
            }
        }
        prop_assert!(state.bids.len() <= 5);
    }

    /// A sanitised suggestion is always accepted.
    #[test]
    fn prop_sanitized_bids_are_accepted(
        dealer in test_gens::seat(),
        suggestions in prop::collection::vec(test_gens::bid(), 5),
    ) {
        let mut state = bidding_round(dealer, no_troel_deal(), Card::new(Suit::Clubs, Rank::Ten));
        for suggestion in suggestions {
            let Some(seat) = state.expected_bidder() else { break };
            let bid = sanitize_bid(&state, seat, suggestion);
            prop_assert!(place_bid(&mut state, seat, bid).is_ok());
        }
        // Five sanitised bids always close the auction.
        prop_assert!(matches!(state.phase, Phase::Playing | Phase::Completed));
    }
}
