//! Card types, the round's wildcard designation, and deck utilities.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::error::DeckError;
use crate::options::GameOptions;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// The suit of a physical joker card.
    Joker,
}

impl Suit {
    /// The four ordinary suits, in deck-building order.
    pub const ORDINARY: [Self; 4] = [Self::Diamonds, Self::Hearts, Self::Spades, Self::Clubs];

    const fn symbol(self) -> &'static str {
        match self {
            Self::Diamonds => "♦",
            Self::Hearts => "♥",
            Self::Spades => "♠",
            Self::Clubs => "♣",
            Self::Joker => "🃏",
        }
    }
}

/// A playing card.
///
/// Cards carry no ordering of their own. Wherever the engine orders cards it
/// does so by `rank` alone with a stable sort, so two cards of equal rank keep
/// their relative order and suit never breaks a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King, 0 = physical joker).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 0..=13
    /// are accepted but will never take part in a run or set with real cards.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Creates a physical joker card.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            suit: Suit::Joker,
            rank: 0,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            0 => f.write_str("JK"),
            1 => write!(f, "A{}", self.suit.symbol()),
            11 => write!(f, "J{}", self.suit.symbol()),
            12 => write!(f, "Q{}", self.suit.symbol()),
            13 => write!(f, "K{}", self.suit.symbol()),
            rank => write!(f, "{rank}{}", self.suit.symbol()),
        }
    }
}

/// Sorts cards by rank ascending, keeping equal ranks in their current order.
pub fn sort_by_rank(cards: &mut [Card]) {
    cards.sort_by_key(|card| card.rank);
}

/// The rank chosen once per round to act as a wildcard.
///
/// Any card of this rank, and any physical joker (rank 0), substitutes for
/// any rank in a meld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wildcard {
    rank: u8,
}

impl Wildcard {
    /// Designates `rank` as the round's wildcard rank.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self { rank }
    }

    /// Designates the rank of the drawn `card`.
    #[must_use]
    pub const fn from_card(card: Card) -> Self {
        Self::new(card.rank)
    }

    /// Returns the designated rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Returns whether `card` acts as a wildcard this round.
    #[must_use]
    pub const fn is_wild(self, card: &Card) -> bool {
        card.rank == self.rank || card.rank == 0
    }
}

/// Number of ordinary cards per deck.
pub const DECK_SIZE: usize = 52;

/// An ordered pile of cards; the top of the deck is the end of the vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the 52 ordinary cards, unshuffled.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ORDINARY {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Wraps an existing pile; the last card is the top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds `count` physical jokers to the top of the deck.
    pub fn add_jokers(&mut self, count: u8) {
        self.cards
            .extend(core::iter::repeat_n(Card::joker(), usize::from(count)));
    }

    /// Shuffles the deck with a caller-supplied random source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards left.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Draws `count` cards from the top.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if fewer than `count` cards remain; the
    /// deck is left untouched in that case.
    pub fn draw_many(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::Empty);
        }
        let split = self.cards.len() - count;
        let mut drawn = self.cards.split_off(split);
        drawn.reverse();
        Ok(drawn)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consumes the deck and returns its cards, bottom first.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

/// The starting layout of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// Cards dealt to the human player.
    pub player: Vec<Card>,
    /// Cards dealt to the automated opponent.
    pub opponent: Vec<Card>,
    /// The face-down stock.
    pub stock: Deck,
    /// The face-up discard pile (one card after the deal).
    pub discard: Vec<Card>,
    /// The card drawn to set the wildcard designation. It is not in play.
    pub wildcard_card: Card,
}

impl Deal {
    /// Returns the round's wildcard designation.
    #[must_use]
    pub const fn wildcard(&self) -> Wildcard {
        Wildcard::from_card(self.wildcard_card)
    }
}

/// Deals a round deterministically from `seed`.
///
/// # Errors
///
/// Returns [`DeckError::Empty`] if the deck cannot supply both hands and the
/// first discard.
pub fn deal(options: &GameOptions, seed: u64) -> Result<Deal, DeckError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deal_with(options, &mut rng)
}

/// Deals a round from a caller-supplied random source.
///
/// # Errors
///
/// Returns [`DeckError::Empty`] if the deck cannot supply both hands and the
/// first discard.
pub fn deal_with<R: Rng + ?Sized>(options: &GameOptions, rng: &mut R) -> Result<Deal, DeckError> {
    let mut deck = Deck::standard();
    deck.shuffle(rng);

    // The designation is drawn before the jokers go in, so it is always an ordinary rank.
    let wildcard_card = deck.draw()?;

    deck.add_jokers(options.jokers);
    deck.shuffle(rng);

    let player = deck.draw_many(options.hand_size)?;
    let opponent = deck.draw_many(options.hand_size)?;
    let discard = alloc::vec![deck.draw()?];

    Ok(Deal {
        player,
        opponent,
        stock: deck,
        discard,
        wildcard_card,
    })
}
