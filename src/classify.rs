//! Incremental meld classification for the automated opponent.
//!
//! The classifier is a greedy heuristic: each arriving card extends the most
//! recently added meld that will take it, otherwise it starts a new one. It
//! never repartitions the hand, and the win evaluator and draw policy both
//! read the structure it leaves behind.

use alloc::vec::Vec;
use core::cmp::Reverse;

use tracing::{Span, debug};

use crate::card::{Card, Wildcard, sort_by_rank};
use crate::hand::OpponentHand;
use crate::meld::{MAX_SET_SIZE, Meld};

/// More than this many cards sitting in sets makes the opponent break a set
/// up when giving a card back.
pub const MAX_SET_CARDS: usize = 5;

/// Assigns cards to melds and picks the card to give back.
#[derive(Debug, Clone)]
pub struct Classifier {
    wildcard: Wildcard,
    span: Span,
}

impl Classifier {
    /// Creates a classifier for the round's wildcard, logging under `span`.
    #[must_use]
    pub fn new(wildcard: Wildcard, span: Span) -> Self {
        Self { wildcard, span }
    }

    /// Returns the wildcard designation this classifier treats as wild.
    #[must_use]
    pub const fn wildcard(&self) -> Wildcard {
        self.wildcard
    }

    /// Organizes a freshly dealt hand: cards are sorted by rank, then
    /// classified one at a time.
    #[must_use]
    pub fn build(&self, cards: &[Card]) -> OpponentHand {
        let mut sorted: Vec<Card> = cards.to_vec();
        sort_by_rank(&mut sorted);
        sorted
            .into_iter()
            .fold(OpponentHand::new(), |hand, card| self.classify(card, hand))
    }

    /// Places `card` into the hand and returns the updated hand.
    ///
    /// Wildcards go to the joker bag. Any other card joins the most recently
    /// added meld with fewer than four members that either is uniform in the
    /// card's rank, or (when it is not a multi-card set) ends one rank below
    /// it. Failing that, the card starts a new meld. Melds are then stably
    /// re-sorted by descending size.
    #[must_use]
    pub fn classify(&self, card: Card, mut hand: OpponentHand) -> OpponentHand {
        if self.wildcard.is_wild(&card) {
            hand.jokers.push(card);
            debug!(parent: &self.span, %card, "wildcard added to joker bag");
            return hand;
        }

        match hand.melds.iter().rposition(|meld| accepts(meld, card)) {
            Some(index) => hand.melds[index].push(card),
            None => hand.melds.push(Meld::new(card)),
        }
        sort_melds(&mut hand.melds);

        debug!(parent: &self.span, %card, hand = %hand, "card classified");
        hand
    }

    /// Takes the least valuable card out of the hand.
    ///
    /// With more than [`MAX_SET_CARDS`] cards sitting in sets, the last card of
    /// the first set is returned, leaving room for runs. Otherwise the last
    /// card of the last (smallest) meld is returned and the meld dropped if it
    /// empties. Wildcards are only returned once no melds remain.
    #[must_use]
    pub fn give_back(&self, mut hand: OpponentHand) -> (Option<Card>, OpponentHand) {
        if hand.melds.is_empty() {
            let card = hand.jokers.pop();
            debug!(parent: &self.span, card = ?card, "no melds left, giving back a wildcard");
            return (card, hand);
        }

        let set_cards: usize = hand
            .melds
            .iter()
            .filter(|meld| meld.is_set())
            .map(Meld::len)
            .sum();

        let index = if set_cards > MAX_SET_CARDS {
            hand.melds
                .iter()
                .position(Meld::is_set)
                .unwrap_or(hand.melds.len() - 1)
        } else {
            hand.melds.len() - 1
        };

        let card = hand.melds[index].pop();
        if hand.melds[index].is_empty() {
            hand.melds.remove(index);
        }
        sort_melds(&mut hand.melds);

        debug!(
            parent: &self.span,
            card = ?card,
            set_cards,
            hand = %hand,
            "card given back"
        );
        (card, hand)
    }
}

fn accepts(meld: &Meld, card: Card) -> bool {
    if meld.len() >= MAX_SET_SIZE {
        return false;
    }
    let (Some(first), Some(last)) = (meld.first(), meld.last()) else {
        return false;
    };

    let uniform = meld.is_uniform();
    if uniform && card.rank == first.rank {
        return true;
    }
    (!uniform || meld.len() == 1) && last.rank.checked_add(1) == Some(card.rank)
}

fn sort_melds(melds: &mut [Meld]) {
    melds.sort_by_key(|meld| Reverse(meld.len()));
}
