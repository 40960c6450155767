//! Capture resolution: which floor cards a played card removes.

use super::cards_types::{Card, Rank};
use super::rules::CAPTURE_TARGET;

/// Decide what `played` captures from `floor`. `None` means no capture and the
/// played card lands on the floor instead.
///
/// Priority by played rank:
/// - Jack takes every floor card that is neither Queen nor King.
/// - King takes every King; Queen takes every Queen.
/// - A numeric card (A,2-10) takes the first subset of numeric floor cards
///   summing to `11 - value`, in the fixed search order of
///   [`first_subset_with_sum`].
pub fn resolve_capture(played: Card, floor: &[Card]) -> Option<Vec<Card>> {
    let captures = match played.rank {
        Rank::Jack => floor
            .iter()
            .copied()
            .filter(|c| c.rank != Rank::King && c.rank != Rank::Queen)
            .collect(),
        Rank::King => floor
            .iter()
            .copied()
            .filter(|c| c.rank == Rank::King)
            .collect(),
        Rank::Queen => floor
            .iter()
            .copied()
            .filter(|c| c.rank == Rank::Queen)
            .collect(),
        _ => {
            let target = CAPTURE_TARGET - played.rank.numeric_value();
            first_subset_with_sum(floor, target)?
        }
    };
    if captures.is_empty() {
        None
    } else {
        Some(captures)
    }
}

/// First subset of the numeric floor cards (value <= 10, face cards excluded)
/// summing exactly to `target`.
///
/// The search is depth-first over the floor in its current order, trying
/// inclusion of each card before exclusion, and stops at the first exact sum.
/// Which of several valid subsets wins is therefore fixed by this order, not
/// by any minimality or canonicality rule; clients depend on that behavior.
fn first_subset_with_sum(floor: &[Card], target: u8) -> Option<Vec<Card>> {
    let numeric: Vec<Card> = floor
        .iter()
        .copied()
        .filter(|c| !c.rank.is_face())
        .collect();
    let mut picked = Vec::new();
    if search(&numeric, 0, 0, target, &mut picked) {
        Some(picked)
    } else {
        None
    }
}

fn search(cards: &[Card], index: usize, sum: u8, target: u8, picked: &mut Vec<Card>) -> bool {
    if sum == target {
        return true;
    }
    if sum > target || index == cards.len() {
        return false;
    }

    picked.push(cards[index]);
    if search(
        cards,
        index + 1,
        sum + cards[index].rank.numeric_value(),
        target,
        picked,
    ) {
        return true;
    }
    picked.pop();
    search(cards, index + 1, sum, target, picked)
}
