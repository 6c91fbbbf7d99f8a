//! RNG seed derivation for reproducible games.
//!
//! One game seed fans out into a dealing seed per round and a decision seed
//! per (round, seat), so replaying a game with the same seed reproduces every
//! shuffle, cut and AI choice.

/// Seed for shuffling and cutting the deck in a round.
pub fn derive_dealing_seed(game_seed: u64, round_no: u32) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Seed for one automated seat's decisions in a round.
pub fn derive_seat_seed(game_seed: u64, round_no: u32, seat: u8) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(10_000))
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}
