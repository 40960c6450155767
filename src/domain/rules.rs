//! Fixed rule constants for two-player Chahar Barg.

pub const PLAYERS: usize = 2;
pub const DECK_SIZE: usize = 52;

/// Cards dealt to each hand per dealing round.
pub const HAND_SIZE: usize = 4;
/// Cards on the floor at match start.
pub const OPENING_FLOOR_SIZE: usize = 4;

/// A numeric play captures a subset summing to `CAPTURE_TARGET - value`.
pub const CAPTURE_TARGET: u8 = 11;

pub const TEN_DIAMONDS_POINTS: u16 = 3;
pub const TWO_CLUBS_POINTS: u16 = 2;
pub const SUR_POINTS: u16 = 5;
pub const CLUBS_MAJORITY_BONUS: u16 = 7;
