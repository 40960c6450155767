//! Domain layer: pure game logic, no transport or registry concerns.

pub mod capture;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod deck;
pub mod player_view;
pub mod room;
pub mod rules;
pub mod scoring;

#[cfg(test)]
mod tests_props_conservation;
#[cfg(test)]
mod tests_room;

// Re-exports for ergonomics
pub use capture::resolve_capture;
pub use cards_types::{Card, Rank, Suit};
pub use deck::Deck;
pub use player_view::StateView;
pub use room::{PlayOutcome, PlayerSeat, Room, Slot};
pub use scoring::{score_pile, FinalResult, MatchWinner, ScoreBreakdown};
