//! Card id parsing and formatting (e.g. "A♠", "10♦").

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", self.rank.token(), self.suit.glyph())
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit_ch = chars
            .next_back()
            .ok_or_else(|| DomainError::ParseCard(s.to_string()))?;
        let rank_tok = chars.as_str();

        let suit = match suit_ch {
            '♠' => Suit::Spades,
            '♥' => Suit::Hearts,
            '♣' => Suit::Clubs,
            '♦' => Suit::Diamonds,
            _ => return Err(DomainError::ParseCard(s.to_string())),
        };
        let rank = match rank_tok {
            "A" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(DomainError::ParseCard(s.to_string())),
        };
        Ok(Card { rank, suit })
    }
}
