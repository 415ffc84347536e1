//! Melds: ordered groups of cards classified as sets or runs.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Most members a set can hold (one per suit).
pub const MAX_SET_SIZE: usize = 4;

/// How a meld reads at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeldKind {
    /// Two or more cards sharing one rank.
    Set,
    /// Two or more cards with strictly consecutive ranks.
    Run,
    /// A singleton, or a group that is neither a set nor a run.
    Unclassified,
}

/// An ordered, non-empty group of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meld {
    cards: Vec<Card>,
}

impl Meld {
    /// Starts a meld with a single card.
    #[must_use]
    pub fn new(card: Card) -> Self {
        Self {
            cards: alloc::vec![card],
        }
    }

    /// Builds a meld from cards in the given order.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Option<Self> {
        if cards.is_empty() {
            None
        } else {
            Some(Self {
                cards: cards.to_vec(),
            })
        }
    }

    /// Returns the cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always `false`; empty melds are pruned as soon as they appear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the first card.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the last card.
    #[must_use]
    pub fn last(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns whether every member shares the first member's rank.
    /// A singleton is uniform.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.cards
            .first()
            .is_some_and(|first| self.cards.iter().all(|card| card.rank == first.rank))
    }

    /// Returns whether each member is exactly one rank above the previous one.
    #[must_use]
    pub fn is_consecutive(&self) -> bool {
        self.cards
            .windows(2)
            .all(|pair| pair[0].rank.checked_add(1) == Some(pair[1].rank))
    }

    /// Classifies the meld.
    #[must_use]
    pub fn kind(&self) -> MeldKind {
        if self.cards.len() < 2 {
            MeldKind::Unclassified
        } else if self.is_uniform() {
            MeldKind::Set
        } else if self.is_consecutive() {
            MeldKind::Run
        } else {
            MeldKind::Unclassified
        }
    }

    /// Returns whether the meld reads as a set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.kind() == MeldKind::Set
    }

    /// Returns the rank that would most directly extend this meld: the shared
    /// rank of a uniform meld, otherwise one above the last card.
    #[must_use]
    pub fn needed_rank(&self) -> Option<u8> {
        let last = self.cards.last()?;
        if self.is_uniform() {
            Some(last.rank)
        } else {
            Some(last.rank.saturating_add(1))
        }
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
