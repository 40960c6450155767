//! Point tallies for captured piles and match finalization.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Rank, Suit};
use super::rules::{CLUBS_MAJORITY_BONUS, SUR_POINTS, TEN_DIAMONDS_POINTS, TWO_CLUBS_POINTS};

/// Per-player point breakdown, before the clubs-majority bonus (which depends
/// on both piles and is applied at finalization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub ten_diamonds: u16,
    pub two_clubs: u16,
    pub aces: u16,
    pub jacks: u16,
    pub sur_points: u16,
    pub total: u16,
}

pub fn score_pile(pile: &[Card], surs: u8) -> ScoreBreakdown {
    let ten_diamonds = if pile
        .iter()
        .any(|c| c.rank == Rank::Ten && c.suit == Suit::Diamonds)
    {
        TEN_DIAMONDS_POINTS
    } else {
        0
    };
    let two_clubs = if pile
        .iter()
        .any(|c| c.rank == Rank::Two && c.suit == Suit::Clubs)
    {
        TWO_CLUBS_POINTS
    } else {
        0
    };
    let aces = pile.iter().filter(|c| c.rank == Rank::Ace).count() as u16;
    let jacks = pile.iter().filter(|c| c.rank == Rank::Jack).count() as u16;
    let sur_points = surs as u16 * SUR_POINTS;
    let total = ten_diamonds + two_clubs + aces + jacks + sur_points;
    ScoreBreakdown {
        ten_diamonds,
        two_clubs,
        aces,
        jacks,
        sur_points,
        total,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchWinner {
    P1,
    P2,
    Draw,
}

/// Final per-player line in the match result: the breakdown plus the captured
/// clubs count and the total with the clubs bonus folded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalScore {
    pub ten_diamonds: u16,
    pub two_clubs: u16,
    pub aces: u16,
    pub jacks: u16,
    pub sur_points: u16,
    pub clubs: u16,
    pub total: u16,
}

impl FinalScore {
    fn from_breakdown(b: ScoreBreakdown, clubs: u16, clubs_bonus: u16) -> Self {
        Self {
            ten_diamonds: b.ten_diamonds,
            two_clubs: b.two_clubs,
            aces: b.aces,
            jacks: b.jacks,
            sur_points: b.sur_points,
            clubs,
            total: b.total + clubs_bonus,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalResult {
    pub winner: MatchWinner,
    pub p1: FinalScore,
    pub p2: FinalScore,
}

/// Score both piles, award the clubs-majority bonus (+7 to a strict majority,
/// nothing on a tie), and pick the winner by strict total comparison.
pub fn finalize_match(
    p1_pile: &[Card],
    p1_surs: u8,
    p2_pile: &[Card],
    p2_surs: u8,
) -> FinalResult {
    let p1_breakdown = score_pile(p1_pile, p1_surs);
    let p2_breakdown = score_pile(p2_pile, p2_surs);

    let p1_clubs = p1_pile.iter().filter(|c| c.suit == Suit::Clubs).count() as u16;
    let p2_clubs = p2_pile.iter().filter(|c| c.suit == Suit::Clubs).count() as u16;

    let (p1_bonus, p2_bonus) = if p1_clubs > p2_clubs {
        (CLUBS_MAJORITY_BONUS, 0)
    } else if p2_clubs > p1_clubs {
        (0, CLUBS_MAJORITY_BONUS)
    } else {
        (0, 0)
    };

    let p1 = FinalScore::from_breakdown(p1_breakdown, p1_clubs, p1_bonus);
    let p2 = FinalScore::from_breakdown(p2_breakdown, p2_clubs, p2_bonus);

    let winner = if p1.total > p2.total {
        MatchWinner::P1
    } else if p2.total > p1.total {
        MatchWinner::P2
    } else {
        MatchWinner::Draw
    };

    FinalResult { winner, p1, p2 }
}
