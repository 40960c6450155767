//! Domain-level error type for rule violations.
//!
//! Every variant is recoverable: it is reported to the offending participant
//! and leaves room state unchanged. The transport maps these to `errorMsg`
//! payloads via [`DomainError::user_message`].

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    RoomFull,
    NotYourTurn,
    CardNotInHand,
    MatchNotStarted,
    MatchOver,
    RoomNotFound,
    ParseCard(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::RoomFull => write!(f, "room is full"),
            DomainError::NotYourTurn => write!(f, "out of turn"),
            DomainError::CardNotInHand => write!(f, "card not in hand"),
            DomainError::MatchNotStarted => write!(f, "match not started"),
            DomainError::MatchOver => write!(f, "match is over"),
            DomainError::RoomNotFound => write!(f, "room not found"),
            DomainError::ParseCard(s) => write!(f, "parse card: {s}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    /// Text delivered to the offending player.
    pub fn user_message(&self) -> String {
        match self {
            DomainError::RoomFull => "Room is full.".to_string(),
            DomainError::NotYourTurn => "Not your turn.".to_string(),
            DomainError::CardNotInHand => "That card is not in your hand.".to_string(),
            DomainError::MatchNotStarted => "Waiting for second player…".to_string(),
            DomainError::MatchOver => "The match is already over.".to_string(),
            DomainError::RoomNotFound => "Room not found.".to_string(),
            DomainError::ParseCard(s) => format!("Unrecognized card: {s}"),
        }
    }
}
