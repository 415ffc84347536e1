//! Validation of human-declared groups.

use alloc::vec::Vec;

use tracing::{Span, debug, info};

use crate::card::{Card, Wildcard, sort_by_rank};
use crate::error::SelectionError;
use crate::hand::{LifeFlags, PlayerHand};
use crate::result::{GroupCheck, GroupVerdict};

/// Fewest non-wild cards a declared group may contain.
pub const MIN_GROUP_CARDS: usize = 3;

/// Checks candidate groups against the run and set rules.
#[derive(Debug, Clone)]
pub struct Validator {
    wildcard: Wildcard,
    strict_suit_runs: bool,
    span: Span,
}

impl Validator {
    /// Creates a suit-blind validator for the round's wildcard, logging under `span`.
    #[must_use]
    pub fn new(wildcard: Wildcard, span: Span) -> Self {
        Self {
            wildcard,
            strict_suit_runs: false,
            span,
        }
    }

    /// Sets whether runs must share a single suit.
    #[must_use]
    pub fn with_strict_suit_runs(mut self, strict: bool) -> Self {
        self.strict_suit_runs = strict;
        self
    }

    /// Splits cards into non-wild cards and wildcards, keeping order.
    #[must_use]
    pub fn split_wild(&self, cards: &[Card]) -> (Vec<Card>, Vec<Card>) {
        cards
            .iter()
            .partition(|card| !self.wildcard.is_wild(card))
    }

    /// Returns whether `selected` plus `jokers` form a legal group for `mode`.
    ///
    /// `selected` must hold the non-wild cards; they are checked in rank order.
    #[must_use]
    pub fn validate(&self, selected: &[Card], jokers: &[Card], mode: GroupCheck) -> bool {
        let mut sorted = selected.to_vec();
        sort_by_rank(&mut sorted);

        let valid = match mode {
            GroupCheck::PureLife => jokers.is_empty() && self.run_is_valid(&sorted, jokers, mode),
            GroupCheck::SecondLife | GroupCheck::PlainLife => {
                self.run_is_valid(&sorted, jokers, mode)
            }
            GroupCheck::Set => set_is_valid(&sorted, jokers),
        };

        debug!(
            parent: &self.span,
            ?mode,
            selected = sorted.len(),
            jokers = jokers.len(),
            valid,
            "group validated"
        );
        valid
    }

    /// Validates a declared group and records any life it forms.
    ///
    /// Checks run in order: pure life (only while none is formed and no
    /// wildcard is used), second life (only while none is formed), plain life,
    /// then set. The first check that passes decides the verdict, and a
    /// passing pure or second life check sets the matching flag.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::TooFewCards`] when fewer than
    /// [`MIN_GROUP_CARDS`] non-wild cards are declared.
    pub fn validate_group(
        &self,
        cards: &[Card],
        flags: &mut LifeFlags,
    ) -> Result<GroupVerdict, SelectionError> {
        let (selected, jokers) = self.split_wild(cards);
        if selected.len() < MIN_GROUP_CARDS {
            return Err(SelectionError::TooFewCards {
                selected: selected.len(),
            });
        }

        let verdict = if !flags.pure_life() && self.validate(&selected, &jokers, GroupCheck::PureLife)
        {
            flags.set_pure_life();
            GroupVerdict::Accepted(GroupCheck::PureLife)
        } else if !flags.second_life()
            && self.validate(&selected, &jokers, GroupCheck::SecondLife)
        {
            flags.set_second_life();
            GroupVerdict::Accepted(GroupCheck::SecondLife)
        } else if self.validate(&selected, &jokers, GroupCheck::PlainLife) {
            GroupVerdict::Accepted(GroupCheck::PlainLife)
        } else if self.validate(&selected, &jokers, GroupCheck::Set) {
            GroupVerdict::Accepted(GroupCheck::Set)
        } else {
            GroupVerdict::Rejected
        };

        info!(parent: &self.span, ?verdict, ?flags, "group declared");
        Ok(verdict)
    }

    /// Validates the selected cards of `hand` and, when accepted, moves them
    /// (wildcards included) out of the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection is out of range, repeats a position,
    /// or holds too few non-wild cards.
    pub fn check_group(
        &self,
        hand: &mut PlayerHand,
        selection: &[usize],
    ) -> Result<GroupVerdict, SelectionError> {
        let cards = hand.selected(selection)?;
        let verdict = self.validate_group(&cards, hand.flags_mut())?;
        if verdict.is_accepted() {
            hand.declare(selection);
        }
        Ok(verdict)
    }

    fn run_is_valid(&self, sorted: &[Card], jokers: &[Card], mode: GroupCheck) -> bool {
        if sorted.len() + jokers.len() < mode.min_len() {
            return false;
        }
        if self.strict_suit_runs
            && sorted
                .first()
                .is_some_and(|first| sorted.iter().any(|card| card.suit != first.suit))
        {
            return false;
        }

        let designated = self.wildcard.rank();
        let mut pool = jokers.len();
        let mut gaps = 0;

        for pair in sorted.windows(2) {
            let next_rank = pair[0].rank.checked_add(1);
            // A designated-rank card on top of the pool covers the slot right
            // above the current card before any gap is counted.
            if pool > 0 && jokers[pool - 1].rank == designated && next_rank == Some(designated) {
                pool -= 1;
            } else if next_rank != Some(pair[1].rank) {
                gaps += 1;
            }
        }

        gaps <= pool
    }
}

fn set_is_valid(sorted: &[Card], jokers: &[Card]) -> bool {
    // Small groups are left to the caller's minimum-size check.
    if sorted.len() + jokers.len() < 3 {
        return true;
    }
    if sorted.is_empty() {
        return true;
    }
    if jokers.len() > 1 {
        return false;
    }
    sorted.iter().all(|card| card.rank == sorted[0].rank)
}
