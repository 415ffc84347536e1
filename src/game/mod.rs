//! Round engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{Span, info, info_span, warn};

use crate::card::{Card, Deck, Wildcard, deal_with};
use crate::classify::Classifier;
use crate::error::DeckError;
use crate::hand::{OpponentHand, PlayerHand};
use crate::options::GameOptions;
use crate::policy::{DrawPolicy, KnownCards};
use crate::validate::Validator;
use crate::win::WinEvaluator;

mod actions;
mod dealer;
pub mod state;

pub use state::{Phase, RoundStatus, Side};

/// A single rummy round between the human player and the automated opponent.
///
/// The round owns the stock, the discard pile, and both hands, so every card
/// is in exactly one place at a time. It plays the dealer: it hands out cards,
/// runs the opponent's turn, and reshuffles the discard pile when the stock
/// runs out. Rendering, input, and timing stay with the caller.
pub struct Round {
    /// Round options.
    options: GameOptions,
    /// Face-down stock; the top is the last card.
    stock: Deck,
    /// Face-up discard pile; the top is the last card.
    discard: Vec<Card>,
    /// The card that set the wildcard designation.
    wildcard_card: Card,
    /// The human player's hand.
    player: PlayerHand,
    /// The opponent's hand.
    opponent: OpponentHand,
    /// Cards the opponent knows the player holds.
    known: KnownCards,
    /// Current phase.
    phase: Phase,
    classifier: Classifier,
    validator: Validator,
    evaluator: WinEvaluator,
    policy: DrawPolicy,
    /// Random number generator, kept for reshuffles.
    rng: ChaCha8Rng,
    span: Span,
}

impl Round {
    /// Deals a new round from `seed`, logging under a fresh `round` span.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck cannot cover both hands.
    ///
    /// # Example
    ///
    /// ```
    /// use rummyrs::{GameOptions, Round};
    ///
    /// let round = Round::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(round.player_hand().len(), 13);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, DeckError> {
        let span = info_span!("round", seed);
        Self::with_span(options, seed, span)
    }

    /// Deals a new round from `seed`, logging under the caller's `span`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck cannot cover both hands.
    pub fn with_span(options: GameOptions, seed: u64, span: Span) -> Result<Self, DeckError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deal = deal_with(&options, &mut rng)?;
        let wildcard = deal.wildcard();

        let classifier = Classifier::new(wildcard, span.clone());
        let validator = Validator::new(wildcard, span.clone())
            .with_strict_suit_runs(options.strict_suit_runs);
        let evaluator = WinEvaluator::new(span.clone());
        let policy = DrawPolicy::new(span.clone());

        let opponent = classifier.build(&deal.opponent);

        info!(
            parent: &span,
            wildcard = %deal.wildcard_card,
            stock = deal.stock.len(),
            opponent = %opponent,
            "round dealt"
        );

        Ok(Self {
            options,
            stock: deal.stock,
            discard: deal.discard,
            wildcard_card: deal.wildcard_card,
            player: PlayerHand::new(deal.player),
            opponent,
            known: KnownCards::new(),
            phase: Phase::PlayerDraw,
            classifier,
            validator,
            evaluator,
            policy,
            rng,
            span,
        })
    }

    /// Returns the round options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the wildcard designation.
    pub const fn wildcard(&self) -> Wildcard {
        Wildcard::from_card(self.wildcard_card)
    }

    /// Returns the card that set the wildcard designation.
    pub const fn wildcard_card(&self) -> Card {
        self.wildcard_card
    }

    /// Returns the number of cards left in the stock.
    pub fn cards_remaining(&self) -> usize {
        self.stock.len()
    }

    /// Returns the visible top of the discard pile.
    pub fn top_of_discard(&self) -> Option<&Card> {
        self.discard.last()
    }

    /// Returns the discard pile, bottom first.
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// Returns the human player's hand.
    pub const fn player_hand(&self) -> &PlayerHand {
        &self.player
    }

    /// Returns the opponent's hand.
    pub const fn opponent_hand(&self) -> &OpponentHand {
        &self.opponent
    }

    /// Returns the cards the opponent knows the player holds.
    pub fn known_cards(&self) -> &[Card] {
        self.known.cards()
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the winner, once the round is decided.
    pub const fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Over(side) => Some(side),
            _ => None,
        }
    }

    /// Returns whether the round has ended, with or without a winner.
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_) | Phase::Exhausted)
    }

    /// Returns the status the presentation layer should show.
    ///
    /// An empty stock only blocks a side that still has to draw.
    pub fn status(&self) -> RoundStatus {
        match self.phase {
            Phase::Over(side) => RoundStatus::Won(side),
            Phase::Exhausted => RoundStatus::Exhausted,
            Phase::PlayerDraw | Phase::OpponentTurn if self.stock.is_empty() => {
                RoundStatus::StockExhausted
            }
            Phase::PlayerDraw => RoundStatus::AwaitingPlayerDraw,
            Phase::PlayerDiscard => RoundStatus::AwaitingPlayerDiscard,
            Phase::OpponentTurn => RoundStatus::AwaitingOpponent,
        }
    }

    /// Returns every card of the round: the player's held and declared cards,
    /// the opponent's cards, the stock, the discard pile, and the wildcard card.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = Vec::new();
        cards.extend_from_slice(self.player.cards());
        for group in self.player.declared() {
            cards.extend_from_slice(group);
        }
        cards.extend(self.opponent.cards().copied());
        cards.extend_from_slice(self.stock.cards());
        cards.extend_from_slice(&self.discard);
        cards.push(self.wildcard_card);
        cards
    }

    /// Turns the discard pile into a fresh stock and flips its top card back
    /// onto the discard pile.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::StockNotEmpty`] if the stock still holds cards, or
    /// [`DeckError::Empty`] if the discard pile cannot refill it. When that
    /// happens while a side still has to draw, the round ends as
    /// [`Phase::Exhausted`].
    pub fn reshuffle(&mut self) -> Result<(), DeckError> {
        if !self.stock.is_empty() {
            return Err(DeckError::StockNotEmpty);
        }
        if self.discard.len() < 2 {
            if matches!(self.phase, Phase::PlayerDraw | Phase::OpponentTurn) {
                self.phase = Phase::Exhausted;
                warn!(
                    parent: &self.span,
                    discard = self.discard.len(),
                    "no cards left to draw, round abandoned"
                );
            } else {
                warn!(parent: &self.span, discard = self.discard.len(), "nothing to reshuffle");
            }
            return Err(DeckError::Empty);
        }

        let mut stock = Deck::from_cards(core::mem::take(&mut self.discard));
        stock.shuffle(&mut self.rng);
        self.discard.push(stock.draw()?);
        self.stock = stock;

        info!(parent: &self.span, stock = self.stock.len(), "discard pile reshuffled into stock");
        Ok(())
    }

    /// Returns whether the stock is empty and needs a reshuffle.
    pub fn needs_reshuffle(&self) -> bool {
        self.stock.is_empty()
    }

    /// Reshuffles if the stock is empty.
    ///
    /// Returns `true` if a reshuffle was performed.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the stock is empty and the discard pile
    /// cannot refill it; see [`Round::reshuffle`].
    pub fn check_and_reshuffle(&mut self) -> Result<bool, DeckError> {
        if self.needs_reshuffle() {
            self.reshuffle()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
