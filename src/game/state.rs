//! Round state types.

/// One side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human player.
    Player,
    /// The automated opponent.
    Opponent,
}

/// Whose move it is and what they may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The player must draw from the stock or the discard pile.
    PlayerDraw,
    /// The player has drawn and must discard one card.
    PlayerDiscard,
    /// The opponent moves next.
    OpponentTurn,
    /// The round has been decided.
    Over(Side),
    /// The stock ran out with nothing left to reshuffle; nobody wins.
    Exhausted,
}

/// Status surfaced to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    /// Waiting for the player to pick a pile.
    AwaitingPlayerDraw,
    /// Waiting for the player to discard.
    AwaitingPlayerDiscard,
    /// Waiting for the presentation layer to run the opponent's turn.
    AwaitingOpponent,
    /// The stock is empty and the discard pile must be reshuffled.
    StockExhausted,
    /// The round was won.
    Won(Side),
    /// The round ended without a winner because no cards were left to draw.
    Exhausted,
}
