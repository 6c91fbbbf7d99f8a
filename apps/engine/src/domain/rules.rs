pub const PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 52;
pub const TRICKS_PER_ROUND: usize = 13;

/// Cards handed to each seat per dealing pass.
pub const DEAL_BATCHES: [usize; 3] = [4, 4, 5];

/// Tricks the declaring side must take for the partnered contracts
/// (Ask/Join and Troel).
pub const PARTNERED_TARGET: u8 = 8;
pub const ALONE_TARGET: u8 = 5;
pub const ABUNDANCE_TARGET: u8 = 9;
pub const GRAND_SLAM_TARGET: u8 = 13;
