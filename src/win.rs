//! Win detection.

use thiserror::Error;
use tracing::{Span, debug, info};

use crate::hand::{OpponentHand, PlayerHand};
use crate::meld::Meld;

/// Why an opponent hand is not yet a winning hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Shortfall {
    /// Fewer than two melds.
    #[error("fewer than two melds")]
    TooFewMelds,
    /// No meld qualifies as a pure run.
    #[error("no pure run")]
    NoPureRun,
    /// No meld can be stretched to a second life.
    #[error("no second life")]
    NoSecondLife,
    /// Not enough wildcards to complete the remaining melds.
    #[error("{missing} wildcard(s) short of completing the hand")]
    NotEnoughJokers {
        /// How many more wildcards the hand would need.
        missing: usize,
    },
}

/// Decides whether a hand wins the round.
#[derive(Debug, Clone)]
pub struct WinEvaluator {
    span: Span,
}

impl WinEvaluator {
    /// Creates an evaluator logging under `span`.
    #[must_use]
    pub const fn new(span: Span) -> Self {
        Self { span }
    }

    /// Returns whether the opponent's hand wins.
    ///
    /// The hand is evaluated from scratch every time.
    #[must_use]
    pub fn evaluate(&self, hand: &OpponentHand) -> bool {
        match self.explain(hand) {
            Ok(()) => {
                info!(parent: &self.span, %hand, "winning hand");
                true
            }
            Err(shortfall) => {
                debug!(parent: &self.span, %hand, %shortfall, "not a winning hand");
                false
            }
        }
    }

    /// Evaluates the opponent's hand and reports the first missing requirement.
    ///
    /// 1. At least two melds.
    /// 2. A pure run: the first meld after index 0 that is not uniform and
    ///    has more than two cards, or else meld 0 if it has more than two
    ///    cards and opens with two consecutive ranks.
    /// 3. A second life: the first other meld that is not a set and reaches
    ///    four cards with the wildcards available; any wildcards it needs
    ///    are spent.
    /// 4. Every remaining meld under three cards is topped up with wildcards.
    ///
    /// # Errors
    ///
    /// Returns the [`Shortfall`] that stopped the hand from winning.
    pub fn explain(&self, hand: &OpponentHand) -> Result<(), Shortfall> {
        let melds = hand.melds();
        if melds.len() < 2 {
            return Err(Shortfall::TooFewMelds);
        }

        let pure = find_pure_run(melds).ok_or(Shortfall::NoPureRun)?;

        let mut jokers = hand.jokers().len();
        let second = melds
            .iter()
            .enumerate()
            .position(|(index, meld)| {
                index != pure && !meld.is_set() && meld.len() + jokers >= 4
            })
            .ok_or(Shortfall::NoSecondLife)?;
        jokers -= 4_usize.saturating_sub(melds[second].len());

        let needed: usize = melds
            .iter()
            .enumerate()
            .filter(|&(index, meld)| index != pure && index != second && meld.len() < 3)
            .map(|(_, meld)| 3 - meld.len())
            .sum();

        if needed > jokers {
            return Err(Shortfall::NotEnoughJokers {
                missing: needed - jokers,
            });
        }
        Ok(())
    }

    /// Returns whether the human hand wins: pure life, second life, and an
    /// empty hand.
    #[must_use]
    pub fn player_has_won(&self, hand: &PlayerHand) -> bool {
        let won = hand.has_won();
        debug!(parent: &self.span, won, flags = ?hand.flags(), held = hand.len(), "player hand evaluated");
        won
    }
}

fn find_pure_run(melds: &[Meld]) -> Option<usize> {
    let later = melds
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, meld)| !meld.is_uniform() && meld.len() > 2)
        .map(|(index, _)| index);
    if later.is_some() {
        return later;
    }

    let first = melds.first()?;
    let opens_with_run = matches!(
        first.cards(),
        [a, b, ..] if a.rank.checked_add(1) == Some(b.rank)
    );
    (first.len() > 2 && opens_with_run).then_some(0)
}
