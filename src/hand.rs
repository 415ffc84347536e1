//! Player and opponent hand representations.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::SelectionError;
use crate::meld::Meld;

/// Life achievements of the human hand.
///
/// Flags only ever go from `false` to `true` within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LifeFlags {
    pure_life: bool,
    second_life: bool,
}

impl LifeFlags {
    /// Returns whether a pure life has been declared.
    #[must_use]
    pub const fn pure_life(self) -> bool {
        self.pure_life
    }

    /// Returns whether a second life has been declared.
    #[must_use]
    pub const fn second_life(self) -> bool {
        self.second_life
    }

    pub(crate) const fn set_pure_life(&mut self) {
        self.pure_life = true;
    }

    pub(crate) const fn set_second_life(&mut self) {
        self.second_life = true;
    }
}

/// The human player's hand.
///
/// Card order is whatever the player arranged; the engine only reorders on
/// [`PlayerHand::swap`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerHand {
    /// Cards still held.
    cards: Vec<Card>,
    /// Groups accepted by the validator, in declaration order.
    declared: Vec<Vec<Card>>,
    /// Pure and second life achievements.
    flags: LifeFlags,
}

impl PlayerHand {
    /// Creates a hand holding the dealt cards.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            declared: Vec::new(),
            flags: LifeFlags {
                pure_life: false,
                second_life: false,
            },
        }
    }

    /// Returns the cards still held.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the groups declared so far.
    #[must_use]
    pub fn declared(&self) -> &[Vec<Card>] {
        &self.declared
    }

    /// Returns the life flags.
    #[must_use]
    pub const fn flags(&self) -> LifeFlags {
        self.flags
    }

    pub(crate) const fn flags_mut(&mut self) -> &mut LifeFlags {
        &mut self.flags
    }

    /// Returns the number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand satisfies the human win condition:
    /// pure life, second life, and nothing left in hand.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.flags.pure_life && self.flags.second_life && self.cards.is_empty()
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Resolves a selection to cards, in the order given.
    ///
    /// # Errors
    ///
    /// Returns an error if a position is out of range or repeated.
    pub fn selected(&self, selection: &[usize]) -> Result<Vec<Card>, SelectionError> {
        let mut cards = Vec::with_capacity(selection.len());
        for (seen, &index) in selection.iter().enumerate() {
            if selection[..seen].contains(&index) {
                return Err(SelectionError::DuplicateIndex { index });
            }
            let card = self
                .cards
                .get(index)
                .copied()
                .ok_or(SelectionError::IndexOutOfRange { index })?;
            cards.push(card);
        }
        Ok(cards)
    }

    /// Swaps the two selected cards.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly two distinct, in-range positions are selected.
    pub fn swap(&mut self, selection: &[usize]) -> Result<(), SelectionError> {
        let &[a, b] = selection else {
            return Err(SelectionError::SwapNeedsTwo {
                selected: selection.len(),
            });
        };
        self.selected(selection)?;
        self.cards.swap(a, b);
        Ok(())
    }

    /// Removes the single selected card.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly one in-range position is selected.
    pub fn remove_selected(&mut self, selection: &[usize]) -> Result<Card, SelectionError> {
        match selection {
            [] => Err(SelectionError::NoCardSelected),
            &[index] => {
                if index < self.cards.len() {
                    Ok(self.cards.remove(index))
                } else {
                    Err(SelectionError::IndexOutOfRange { index })
                }
            }
            _ => Err(SelectionError::MultipleCardsSelected {
                selected: selection.len(),
            }),
        }
    }

    /// Moves the selected cards out of the hand into a declared group.
    pub(crate) fn declare(&mut self, selection: &[usize]) {
        let mut positions = selection.to_vec();
        positions.sort_unstable_by(|a, b| b.cmp(a));
        positions.dedup();

        let held = self.cards.len();
        let mut group: Vec<Card> = positions
            .into_iter()
            .filter(|&index| index < held)
            .map(|index| self.cards.remove(index))
            .collect();
        group.reverse();
        self.declared.push(group);
    }
}

/// The automated opponent's hand, organized into melds plus a bag of wildcards.
///
/// Melds are kept sorted by descending size; wildcards never join a meld.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpponentHand {
    pub(crate) melds: Vec<Meld>,
    pub(crate) jokers: Vec<Card>,
}

impl OpponentHand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            melds: Vec::new(),
            jokers: Vec::new(),
        }
    }

    /// Returns the melds, largest first.
    #[must_use]
    pub fn melds(&self) -> &[Meld] {
        &self.melds
    }

    /// Returns the held wildcards.
    #[must_use]
    pub fn jokers(&self) -> &[Card] {
        &self.jokers
    }

    /// Returns the number of cards held, wildcards included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.jokers.len() + self.melds.iter().map(Meld::len).sum::<usize>()
    }

    /// Returns whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jokers.is_empty() && self.melds.is_empty()
    }

    /// Iterates over every card held: wildcards first, then melds in order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.jokers
            .iter()
            .chain(self.melds.iter().flat_map(Meld::cards))
    }
}

impl fmt::Display for OpponentHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{jokers:")?;
        for card in &self.jokers {
            write!(f, " {card}")?;
        }
        f.write_str("}")?;
        for meld in &self.melds {
            write!(f, " {meld}")?;
        }
        Ok(())
    }
}
