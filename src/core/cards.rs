use crate::domain::model::Card;
use crate::utils::error::{AssistError, Result};
use std::collections::HashSet;

/// Which of the two fixed card collections a slot belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Zone {
    Hand,
    Board,
}

/// Owns the player's pocket slots and the community board slots and enforces
/// the single invariant that matters here: a physical card can only sit in
/// one slot at a time, across both zones.
///
/// A conflicting write evicts the previous holder instead of failing: when
/// the user picks a card that is already placed somewhere, they mean to move
/// it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardRegistry {
    hand: [Option<Card>; Self::HAND_SLOTS],
    board: [Option<Card>; Self::BOARD_SLOTS],
}

impl CardRegistry {
    pub const HAND_SLOTS: usize = 2;
    pub const BOARD_SLOTS: usize = 5;

    pub fn new() -> CardRegistry {
        CardRegistry::default()
    }

    /// Writes a slot. An out-of-range index is a caller bug and panics.
    /// Placing a card clears any other slot (in either zone) that currently
    /// holds the same card.
    pub fn set_card(&mut self, zone: Zone, index: usize, slot: Option<Card>) {
        if let Some(card) = slot {
            self.evict(card, zone, index);
        }
        match zone {
            Zone::Hand => self.hand[index] = slot,
            Zone::Board => self.board[index] = slot,
        }
    }

    fn evict(&mut self, card: Card, target_zone: Zone, target_index: usize) {
        for (i, held) in self.hand.iter_mut().enumerate() {
            if *held == Some(card) && (target_zone != Zone::Hand || i != target_index) {
                tracing::debug!("card {} evicted from hand slot {}", card, i);
                *held = None;
            }
        }
        for (i, held) in self.board.iter_mut().enumerate() {
            if *held == Some(card) && (target_zone != Zone::Board || i != target_index) {
                tracing::debug!("card {} evicted from board slot {}", card, i);
                *held = None;
            }
        }
    }

    /// Bulk replace, used by external import paths (e.g. a card recognizer).
    /// Malformed input leaves the previous state untouched: slices must have
    /// exactly 2 and 5 entries and the occupied slots must not repeat a card.
    pub fn import(&mut self, hand: &[Option<Card>], board: &[Option<Card>]) -> Result<()> {
        if hand.len() != Self::HAND_SLOTS || board.len() != Self::BOARD_SLOTS {
            let reason = format!(
                "expected {} hand and {} board slots, got {} and {}",
                Self::HAND_SLOTS,
                Self::BOARD_SLOTS,
                hand.len(),
                board.len()
            );
            tracing::warn!("card import rejected: {}", reason);
            return Err(AssistError::InvalidImport { reason });
        }

        let mut seen = HashSet::new();
        for card in hand.iter().chain(board.iter()).flatten() {
            if !seen.insert(*card) {
                let reason = format!("duplicate card {}", card);
                tracing::warn!("card import rejected: {}", reason);
                return Err(AssistError::InvalidImport { reason });
            }
        }

        self.hand.copy_from_slice(hand);
        self.board.copy_from_slice(board);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.hand = [None; Self::HAND_SLOTS];
        self.board = [None; Self::BOARD_SLOTS];
    }

    /// Occupied hand slots in slot order.
    pub fn valid_hand(&self) -> Vec<Card> {
        self.hand.iter().flatten().copied().collect()
    }

    /// Occupied board slots in slot order.
    pub fn valid_board(&self) -> Vec<Card> {
        self.board.iter().flatten().copied().collect()
    }

    pub fn hand(&self) -> &[Option<Card>] {
        &self.hand
    }

    pub fn board(&self) -> &[Option<Card>] {
        &self.board
    }
}
