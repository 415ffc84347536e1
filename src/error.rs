//! Error types for engine operations.

use thiserror::Error;

/// Errors raised by the deck and the stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw, and nothing to reshuffle.
    #[error("the deck is empty")]
    Empty,
    /// A reshuffle was requested while the stock still holds cards.
    #[error("the stock still holds cards")]
    StockNotEmpty,
}

/// Errors raised when the player's card or pile selection does not fit the
/// requested action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Fewer than three non-wild cards were declared as a group.
    #[error("too few cards selected: {selected}")]
    TooFewCards {
        /// Number of non-wild cards selected.
        selected: usize,
    },
    /// No card was selected to discard.
    #[error("select a card to remove")]
    NoCardSelected,
    /// More than one card was selected to discard.
    #[error("select only 1 card to remove, got {selected}")]
    MultipleCardsSelected {
        /// Number of cards selected.
        selected: usize,
    },
    /// A swap needs exactly two cards.
    #[error("select exactly 2 cards to swap, got {selected}")]
    SwapNeedsTwo {
        /// Number of cards selected.
        selected: usize,
    },
    /// Neither the stock nor the discard pile was selected.
    #[error("select some place to add card from")]
    NoSourceSelected,
    /// Both the stock and the discard pile were selected.
    #[error("select one place to add card from")]
    BothSourcesSelected,
    /// A selected position is outside the hand.
    #[error("no card at position {index}")]
    IndexOutOfRange {
        /// The offending position.
        index: usize,
    },
    /// The same position was selected twice.
    #[error("position {index} selected twice")]
    DuplicateIndex {
        /// The repeated position.
        index: usize,
    },
}

/// Errors raised when an action is not allowed at this point of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is the other side's turn.
    #[error("not your turn")]
    NotYourTurn,
    /// The player already drew a card this turn.
    #[error("already drew a card this turn")]
    AlreadyDrawn,
    /// The player must draw before discarding.
    #[error("draw a card before discarding")]
    MustDrawFirst,
    /// The discard pile has no card to take.
    #[error("the discard pile is empty")]
    DiscardPileEmpty,
    /// The stock is exhausted and must be reshuffled first.
    #[error("stock exhausted, reshuffle the discard pile")]
    StockExhausted,
    /// The round has already been decided.
    #[error("the round is over")]
    RoundOver,
    /// The card or pile selection was invalid.
    #[error(transparent)]
    Selection(#[from] SelectionError),
}
