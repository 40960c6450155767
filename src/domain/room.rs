//! The room aggregate: one match's full mutable state and its transitions.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::capture::resolve_capture;
use super::cards_types::{Card, Rank};
use super::dealing::{deal_floor, deal_hands};
use super::deck::Deck;
use super::scoring::{finalize_match, FinalResult};
use crate::errors::domain::DomainError;

/// One of the two fixed player positions. Serialized as "p1"/"p2" on the wire.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    P1,
    P2,
}

impl Slot {
    pub const BOTH: [Slot; 2] = [Slot::P1, Slot::P2];

    pub fn opponent(self) -> Slot {
        match self {
            Slot::P1 => Slot::P2,
            Slot::P2 => Slot::P1,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Identity bound to a slot for the duration of the occupant's connection.
/// There is deliberately no rejoin token: a freed slot is claimable by any
/// subsequent joiner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerSeat {
    pub display_name: Option<String>,
    pub external_id: Option<String>,
}

/// What an accepted play did to the room, for callers that react to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Floor cards removed by this play (empty when the card fell to the floor).
    pub captured: Vec<Card>,
    /// Whether the play cleared the floor and earned a sur.
    pub sur: bool,
    /// Whether this play ended the match.
    pub game_over: bool,
}

/// Aggregate root for one match. All mutation goes through the methods below;
/// callers serialize access per room (the registry wraps each room in a mutex).
///
/// Invariant after construction: deck + floor + both hands + both piles always
/// hold the 52 distinct cards, each in exactly one place.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: String,
    pub seats: [Option<PlayerSeat>; 2],
    pub deck: Deck,
    pub floor: Vec<Card>,
    pub hands: [Vec<Card>; 2],
    pub captured: [Vec<Card>; 2],
    pub surs: [u8; 2],
    /// Who made the most recent capture; leftover floor cards go to them at
    /// match end. Never reset between dealing rounds.
    pub last_captured_by: Option<Slot>,
    pub turn: Slot,
    pub started: bool,
    pub game_over: bool,
    pub final_result: Option<FinalResult>,
    result_notified: bool,
}

impl Room {
    /// Shuffle a fresh deck, deal the opening floor (Jack-free) and both
    /// four-card hands. Both seats start empty; the registry binds occupants.
    pub fn new<R: Rng>(id: impl Into<String>, rng: &mut R) -> Self {
        let mut deck = Deck::shuffled(rng);
        let mut floor = Vec::new();
        deal_floor(rng, &mut deck, &mut floor);

        let mut hands = [Vec::new(), Vec::new()];
        let [first, second] = &mut hands;
        deal_hands(&mut deck, first, second);

        Self {
            id: id.into(),
            seats: [None, None],
            deck,
            floor,
            hands,
            captured: [Vec::new(), Vec::new()],
            surs: [0, 0],
            last_captured_by: None,
            turn: Slot::P1,
            started: false,
            game_over: false,
            final_result: None,
            result_notified: false,
        }
    }

    /// Bind an identity to the first empty slot. The room goes ACTIVE once
    /// both slots are filled.
    pub fn occupy(&mut self, seat: PlayerSeat) -> Result<Slot, DomainError> {
        let slot = Slot::BOTH
            .into_iter()
            .find(|s| self.seats[s.index()].is_none())
            .ok_or(DomainError::RoomFull)?;
        self.seats[slot.index()] = Some(seat);
        self.started = self.seats.iter().all(Option::is_some);
        Ok(slot)
    }

    /// Free a slot. The match state stays intact so a new joiner can take
    /// over; the registry destroys the room once both slots are empty.
    pub fn vacate(&mut self, slot: Slot) {
        self.seats[slot.index()] = None;
        self.started = self.seats.iter().all(Option::is_some);
    }

    pub fn is_unoccupied(&self) -> bool {
        self.seats.iter().all(Option::is_none)
    }

    /// Apply one play for `slot`. Rejections are recoverable and leave the
    /// room untouched; on success the turn flips unconditionally and a deal
    /// or the match end may follow.
    pub fn play_card(&mut self, slot: Slot, card: Card) -> Result<PlayOutcome, DomainError> {
        if self.game_over {
            return Err(DomainError::MatchOver);
        }
        if !self.started {
            return Err(DomainError::MatchNotStarted);
        }
        if self.turn != slot {
            return Err(DomainError::NotYourTurn);
        }

        let hand = &mut self.hands[slot.index()];
        let pos = hand
            .iter()
            .position(|c| *c == card)
            .ok_or(DomainError::CardNotInHand)?;
        let played = hand.remove(pos);

        let mut sur = false;
        let captured = match resolve_capture(played, &self.floor) {
            Some(captures) => {
                self.last_captured_by = Some(slot);
                for cap in &captures {
                    if let Some(idx) = self.floor.iter().position(|c| c == cap) {
                        self.floor.remove(idx);
                    }
                }
                let pile = &mut self.captured[slot.index()];
                pile.push(played);
                pile.extend(captures.iter().copied());

                // Clean sweep: clearing the floor earns a sur, except for
                // Jack plays.
                if self.floor.is_empty() && played.rank != Rank::Jack {
                    self.surs[slot.index()] += 1;
                    sur = true;
                }
                captures
            }
            None => {
                self.floor.push(played);
                Vec::new()
            }
        };

        self.turn = slot.opponent();
        self.check_and_deal_next();

        Ok(PlayOutcome {
            captured,
            sur,
            game_over: self.game_over,
        })
    }

    /// After every play: when both hands are empty the dealing round is over.
    /// An exhausted deck ends the match; otherwise both hands are refilled and
    /// the turn indicator is left as-is.
    fn check_and_deal_next(&mut self) {
        let hands_empty = self.hands.iter().all(Vec::is_empty);
        if !hands_empty {
            return;
        }
        if self.deck.is_empty() {
            self.finish();
            return;
        }
        let [first, second] = &mut self.hands;
        deal_hands(&mut self.deck, first, second);
    }

    /// Terminal transition, taken at most once. Leftover floor cards go to the
    /// most recent capturer (they stay on the floor if nobody ever captured),
    /// then both piles are scored and the result frozen.
    fn finish(&mut self) {
        if self.game_over {
            return;
        }
        self.game_over = true;

        if !self.floor.is_empty() {
            if let Some(slot) = self.last_captured_by {
                self.captured[slot.index()].append(&mut self.floor);
            }
        }

        self.final_result = Some(finalize_match(
            &self.captured[Slot::P1.index()],
            self.surs[Slot::P1.index()],
            &self.captured[Slot::P2.index()],
            self.surs[Slot::P2.index()],
        ));
    }

    /// One-shot claim on the finished-match notification. Returns true for
    /// exactly one caller per room, no matter how often the end-of-game path
    /// is reached.
    pub fn claim_result_notification(&mut self) -> bool {
        if self.game_over && !self.result_notified {
            self.result_notified = true;
            true
        } else {
            false
        }
    }
}
