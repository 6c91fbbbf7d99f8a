//! Card names in the `"{Suit}-{Rank}"` form (e.g. `"Heart-Ace"`).
//!
//! One table per type lists every accepted spelling, in `ALL` order. Parsing
//! looks spellings up case-insensitively; `name()` reads the first spelling
//! of a value's row, which is its canonical form.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

// Rows are indexed by `Suit::index`.
const SUIT_SPELLINGS: [(Suit, &[&str]); 4] = [
    (Suit::Clubs, &["Club", "Clubs", "Klaveren"]),
    (Suit::Diamonds, &["Diamond", "Diamonds", "Ruiten"]),
    (Suit::Hearts, &["Heart", "Hearts", "Harten"]),
    (Suit::Spades, &["Spade", "Spades", "Schuppen", "Schoppen"]),
];

// Rows are indexed by `Rank::value() - 2`.
const RANK_SPELLINGS: [(Rank, &[&str]); 13] = [
    (Rank::Two, &["Two", "2"]),
    (Rank::Three, &["Three", "3"]),
    (Rank::Four, &["Four", "4"]),
    (Rank::Five, &["Five", "5"]),
    (Rank::Six, &["Six", "6"]),
    (Rank::Seven, &["Seven", "7"]),
    (Rank::Eight, &["Eight", "8"]),
    (Rank::Nine, &["Nine", "9"]),
    (Rank::Ten, &["Ten", "10"]),
    (Rank::Jack, &["Jack", "Boer"]),
    (Rank::Queen, &["Queen", "Dame"]),
    (Rank::King, &["King", "Heer"]),
    (Rank::Ace, &["Ace", "Aas"]),
];

struct NameTable {
    suits: HashMap<String, Suit>,
    ranks: HashMap<String, Rank>,
}

static NAMES: Lazy<NameTable> = Lazy::new(|| {
    let mut suits = HashMap::new();
    for (suit, spellings) in SUIT_SPELLINGS {
        for s in spellings {
            suits.insert(s.to_ascii_lowercase(), suit);
        }
    }
    let mut ranks = HashMap::new();
    for (rank, spellings) in RANK_SPELLINGS {
        for s in spellings {
            ranks.insert(s.to_ascii_lowercase(), rank);
        }
    }
    NameTable { suits, ranks }
});

impl Suit {
    /// Canonical English name, as persisted.
    pub fn name(self) -> &'static str {
        SUIT_SPELLINGS[self.index()].1[0]
    }
}

impl Rank {
    pub fn name(self) -> &'static str {
        RANK_SPELLINGS[usize::from(self.value() - 2)].1[0]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.suit.name(), self.rank.name())
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES
            .suits
            .get(&s.trim().to_ascii_lowercase())
            .copied()
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::ParseCard, format!("Unknown suit: {s}"))
            })
    }
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES
            .ranks
            .get(&s.trim().to_ascii_lowercase())
            .copied()
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::ParseCard, format!("Unknown rank: {s}"))
            })
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (suit, rank) = s.split_once('-').ok_or_else(|| {
            DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
        })?;
        Ok(Card {
            suit: suit.parse()?,
            rank: rank.parse()?,
        })
    }
}

/// Non-panicking helper to parse card names into Card instances.
/// Fails on the first invalid token.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
