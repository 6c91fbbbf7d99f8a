use proptest::prelude::*;

use crate::domain::{test_gens, test_prelude, Card, Rank, Suit};

#[test]
fn every_card_name_round_trips() {
    let mut names = std::collections::HashSet::new();
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let card = Card::new(suit, rank);
            let name = card.to_string();
            assert_eq!(name.parse::<Card>().unwrap(), card, "{name}");
            assert!(names.insert(name));
        }
    }
    assert_eq!(names.len(), 52);
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Parsing ignores case.
    #[test]
    fn prop_parse_is_case_insensitive(card in test_gens::card(), upper in any::<bool>()) {
        let name = card.to_string();
        let shouted = if upper { name.to_uppercase() } else { name.to_lowercase() };
        prop_assert_eq!(shouted.parse::<Card>().unwrap(), card);
    }

    /// serde form is the display name.
    #[test]
    fn prop_serde_uses_display_name(card in test_gens::card()) {
        let json = serde_json::to_string(&card).unwrap();
        prop_assert_eq!(json, format!("\"{card}\""));
    }
}
