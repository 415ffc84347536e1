//! A rummy rule engine with optional `no_std` support.
//!
//! The crate deals a round with a wildcard rank, organizes the automated
//! opponent's cards into melds as they arrive, decides where the opponent
//! draws from, validates the human player's declared groups, and detects a
//! winning hand for either side. Rendering, input, and timing belong to the
//! caller, which drives a [`Round`] with plain data.
//!
//! Every component logs through a [`tracing::Span`] handed to it at
//! construction; the crate never installs a subscriber.
//!
//! # Example
//!
//! ```no_run
//! use rummyrs::{DrawSource, GameOptions, Round};
//!
//! let mut round = Round::new(GameOptions::default(), 42).unwrap();
//! round.draw(DrawSource::Stock).unwrap();
//! round.discard(&[0]).unwrap();
//! let turn = round.opponent_turn().unwrap();
//! println!("opponent discarded {:?}", turn.discarded);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod classify;
pub mod error;
pub mod game;
pub mod hand;
pub mod meld;
pub mod options;
pub mod policy;
pub mod result;
pub mod validate;
pub mod win;

// Re-export main types
pub use card::{Card, DECK_SIZE, Deal, Deck, Suit, Wildcard, deal, deal_with};
pub use classify::Classifier;
pub use error::{ActionError, DeckError, SelectionError};
pub use game::{Phase, Round, RoundStatus, Side};
pub use hand::{LifeFlags, OpponentHand, PlayerHand};
pub use meld::{Meld, MeldKind};
pub use options::GameOptions;
pub use policy::{DrawPolicy, DrawSource, KnownCards, NeededRank};
pub use result::{GroupCheck, GroupVerdict, OpponentTurn};
pub use validate::Validator;
pub use win::{Shortfall, WinEvaluator};
