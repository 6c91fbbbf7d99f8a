/// Property-based tests for zero-sum scoring
use proptest::prelude::*;

use crate::domain::contract::{Contract, ContractKind};
use crate::domain::scoring::{score_round, settle, split_transfer};
use crate::domain::state::RoundOutcome;
use crate::domain::test_state_helpers::playing_round;
use crate::domain::tricks::{legal_moves, play_card};
use crate::domain::{test_gens, test_prelude};

fn contract_kind() -> impl Strategy<Value = ContractKind> {
    prop::sample::select(vec![
        ContractKind::AskJoin,
        ContractKind::Alone,
        ContractKind::Troel,
        ContractKind::Abundance,
        ContractKind::Misery,
        ContractKind::OpenMisery,
        ContractKind::GrandSlam,
    ])
}

fn contract() -> impl Strategy<Value = Contract> {
    (contract_kind(), test_gens::seat(), 1u8..=3).prop_map(|(kind, declarer, offset)| {
        if kind.is_partnered() {
            Contract::partnered(kind, declarer, (declarer + offset) % 4)
        } else {
            Contract::solo(kind, declarer)
        }
    })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_settle_is_zero_sum(contract in contract(), tricks in 0u8..=13) {
        let deltas = settle(&contract, tricks);
        prop_assert_eq!(deltas.iter().sum::<i32>(), 0);
        for d in contract.defenders() {
            prop_assert_eq!(deltas[d as usize], deltas[contract.defenders()[0] as usize]);
        }
    }

    #[test]
    fn prop_split_preserves_total(total in -200i32..200, parts in 1usize..=3) {
        let shares = split_transfer(total, parts);
        prop_assert_eq!(shares.len(), parts);
        prop_assert_eq!(shares.iter().sum::<i32>(), total);
        // Shares differ by at most the remainder.
        let spread = shares.iter().max().unwrap() - shares.iter().min().unwrap();
        prop_assert!(spread.abs() < parts as i32);
    }

    /// Any fully played round scores to zero.
    #[test]
    fn prop_played_round_scores_zero_sum(
        contract in contract(),
        hands in test_gens::full_deal(),
        trump in test_gens::suit(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 52),
    ) {
        let mut state = playing_round(contract, contract.declarer, hands, trump);
        for pick in picks {
            let Some(seat) = state.expected_player() else { break };
            let legal = legal_moves(&state, seat);
            play_card(&mut state, seat, legal[pick.index(legal.len())]).unwrap();
        }
        prop_assert!(state.is_completed());
        if state.outcome == Some(RoundOutcome::MiseryBroken) {
            prop_assert!(contract.kind.is_misery());
        }
        let scores = score_round(&state).unwrap();
        prop_assert_eq!(scores.deltas.iter().sum::<i32>(), 0);
    }
}
