//! Card play under a Misery contract, shared by every tier.
//!
//! The declarer sheds high cards whenever it can do so below the current
//! winner. Defenders keep the trick low while the declarer may still be
//! forced to take it, and dump their highest card once the declarer has gone
//! under.

use crate::domain::cards_logic::{highest, lowest};
use crate::domain::{Card, PlayContext};

pub fn select_card(ctx: &PlayContext) -> Option<Card> {
    if ctx.is_declaring() {
        declarer_card(ctx)
    } else {
        defender_card(ctx)
    }
}

fn declarer_card(ctx: &PlayContext) -> Option<Card> {
    if ctx.is_leading() {
        return lowest_of_longest_suit(&ctx.legal);
    }
    let safe: Vec<Card> = ctx
        .legal
        .iter()
        .copied()
        .filter(|c| !ctx.beats_current(*c))
        .collect();
    if safe.is_empty() {
        lowest(&ctx.legal)
    } else {
        highest(&safe)
    }
}

fn defender_card(ctx: &PlayContext) -> Option<Card> {
    if ctx.is_leading() {
        return lowest(&ctx.legal);
    }
    let declarer = ctx.declarer();
    let declarer_played = ctx.current_trick.iter().any(|p| p.seat == declarer);
    let declarer_winning = ctx.winning_play().is_some_and(|p| p.seat == declarer);
    if declarer_played && !declarer_winning {
        highest(&ctx.legal)
    } else {
        // Declarer still to play, or already holding the trick: stay under.
        let under: Vec<Card> = ctx
            .legal
            .iter()
            .copied()
            .filter(|c| !ctx.beats_current(*c))
            .collect();
        if declarer_winning && !under.is_empty() {
            highest(&under)
        } else {
            lowest(&ctx.legal)
        }
    }
}

fn lowest_of_longest_suit(cards: &[Card]) -> Option<Card> {
    let suit = super::features::longest_suit(cards);
    let in_suit: Vec<Card> = cards.iter().copied().filter(|c| c.suit == suit).collect();
    lowest(&in_suit).or_else(|| lowest(cards))
}
