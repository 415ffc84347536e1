//! Result types handed back to the presentation layer.

use core::time::Duration;

use crate::card::Card;
use crate::policy::DrawSource;

/// The kind of group a declaration was checked as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupCheck {
    /// A run of at least three cards with no wildcard.
    PureLife,
    /// A run of at least four cards, wildcards filling gaps.
    SecondLife,
    /// Any other run of at least three cards, wildcards filling gaps.
    PlainLife,
    /// Cards sharing one rank.
    Set,
}

impl GroupCheck {
    /// Fewest cards (wildcards included) the group needs.
    #[must_use]
    pub const fn min_len(self) -> usize {
        match self {
            Self::SecondLife => 4,
            Self::PureLife | Self::PlainLife | Self::Set => 3,
        }
    }
}

/// Outcome of declaring a group of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupVerdict {
    /// The group is legal; the check it passed is attached.
    Accepted(GroupCheck),
    /// The group is not a legal run or set.
    Rejected,
}

impl GroupVerdict {
    /// Returns whether the group was accepted.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// What the automated opponent did on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentTurn {
    /// Where the opponent drew from.
    pub source: DrawSource,
    /// The card drawn.
    pub drawn: Card,
    /// The card placed on the discard pile, if the hand had one to give.
    pub discarded: Option<Card>,
    /// Whether the opponent's hand now wins the round.
    pub won: bool,
    /// How long the presentation layer should pause before revealing the move.
    pub think_time: Duration,
}
