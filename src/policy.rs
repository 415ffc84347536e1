//! The automated opponent's draw decision.

use alloc::vec::Vec;

use tracing::{Span, debug, info};

use crate::card::Card;
use crate::error::SelectionError;
use crate::hand::OpponentHand;

/// Copies of each rank in the deck.
const COPIES_PER_RANK: u8 = 4;

/// Where a card is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawSource {
    /// The face-down stock.
    Stock,
    /// The top of the face-up discard pile.
    Discard,
}

impl DrawSource {
    /// Resolves the presentation layer's pile selection.
    ///
    /// # Errors
    ///
    /// Returns an error when neither or both piles are selected.
    pub const fn from_selection(
        stock_selected: bool,
        discard_selected: bool,
    ) -> Result<Self, SelectionError> {
        match (stock_selected, discard_selected) {
            (true, false) => Ok(Self::Stock),
            (false, true) => Ok(Self::Discard),
            (false, false) => Err(SelectionError::NoSourceSelected),
            (true, true) => Err(SelectionError::BothSourcesSelected),
        }
    }
}

/// Cards the opponent has seen the human take from the discard pile and not
/// yet seen come back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownCards {
    cards: Vec<Card>,
}

impl KnownCards {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Notes a card the human took from the discard pile.
    pub fn record(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Forgets one copy of a card the human discarded. Unknown cards are ignored.
    pub fn forget(&mut self, card: &Card) {
        if let Some(index) = self.cards.iter().position(|known| known == card) {
            self.cards.remove(index);
        }
    }

    /// Returns the cards currently known to be in the human hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// A rank that would complete one of the opponent's short melds, with an
/// estimate of how many copies are still out there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeededRank {
    /// The rank wanted.
    pub rank: u8,
    /// Copies not accounted for by the opponent's melds or the human's known cards.
    pub available: u8,
}

/// Chooses between the stock and the discard pile for the opponent.
#[derive(Debug, Clone)]
pub struct DrawPolicy {
    span: Span,
}

impl DrawPolicy {
    /// Creates a policy logging under `span`.
    #[must_use]
    pub const fn new(span: Span) -> Self {
        Self { span }
    }

    /// Lists the ranks that would complete each meld of fewer than three
    /// cards, in meld order, with their remaining availability.
    ///
    /// Each visible card of a listed rank (in the opponent's melds, then in
    /// `known`) uses up one copy of the first entry for that rank.
    #[must_use]
    pub fn needed_ranks(&self, hand: &OpponentHand, known: &[Card]) -> Vec<NeededRank> {
        let mut needed: Vec<NeededRank> = hand
            .melds()
            .iter()
            .filter(|meld| meld.len() < 3)
            .filter_map(|meld| meld.needed_rank())
            .map(|rank| NeededRank {
                rank,
                available: COPIES_PER_RANK,
            })
            .collect();

        let seen = hand
            .melds()
            .iter()
            .flat_map(|meld| meld.cards())
            .chain(known);
        for card in seen {
            if let Some(entry) = needed.iter_mut().find(|entry| entry.rank == card.rank) {
                entry.available = entry.available.saturating_sub(1);
            }
        }
        needed
    }

    /// Decides where the opponent draws from.
    ///
    /// The discard card is taken only when its rank is needed and copies of
    /// that rank are still believed to be available.
    #[must_use]
    pub fn decide(&self, hand: &OpponentHand, top: Option<&Card>, known: &[Card]) -> DrawSource {
        let Some(top) = top else {
            info!(parent: &self.span, "discard pile empty, drawing from stock");
            return DrawSource::Stock;
        };

        let needed = self.needed_ranks(hand, known);
        debug!(parent: &self.span, %top, ?needed, "ranks needed");

        let source = if needed
            .iter()
            .any(|entry| entry.available > 0 && entry.rank == top.rank)
        {
            DrawSource::Discard
        } else {
            DrawSource::Stock
        };

        info!(parent: &self.span, %top, ?source, "draw source chosen");
        source
    }
}
