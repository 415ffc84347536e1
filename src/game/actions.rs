use tracing::info;

use crate::card::Card;
use crate::error::ActionError;
use crate::policy::DrawSource;
use crate::result::GroupVerdict;

use super::{Phase, Round, Side};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        match self.phase {
            Phase::PlayerDraw | Phase::PlayerDiscard => Ok(()),
            Phase::OpponentTurn => Err(ActionError::NotYourTurn),
            Phase::Over(_) | Phase::Exhausted => Err(ActionError::RoundOver),
        }
    }

    /// Player action: draw a card from the chosen pile.
    ///
    /// A card taken from the discard pile becomes known to the opponent.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the player already
    /// drew, the chosen pile is empty, or the round is over.
    pub fn draw(&mut self, source: DrawSource) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;
        if self.phase == Phase::PlayerDiscard {
            return Err(ActionError::AlreadyDrawn);
        }

        let card = match source {
            DrawSource::Stock => self
                .stock
                .draw()
                .map_err(|_| ActionError::StockExhausted)?,
            DrawSource::Discard => {
                let card = self.discard.pop().ok_or(ActionError::DiscardPileEmpty)?;
                self.known.record(card);
                card
            }
        };

        self.player.add_card(card);
        self.phase = Phase::PlayerDiscard;

        info!(parent: &self.span, %card, ?source, "player drew");
        Ok(card)
    }

    /// Player action: draw from whichever pile the player selected.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Selection`] when neither or both piles are
    /// selected, otherwise the same errors as [`Round::draw`].
    pub fn draw_selected(
        &mut self,
        stock_selected: bool,
        discard_selected: bool,
    ) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;
        let source = DrawSource::from_selection(stock_selected, discard_selected)?;
        self.draw(source)
    }

    /// Player action: discard the single selected card, ending the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the player has not
    /// drawn yet, or the selection is not exactly one card.
    pub fn discard(&mut self, selection: &[usize]) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;
        if self.phase == Phase::PlayerDraw {
            return Err(ActionError::MustDrawFirst);
        }

        let card = self.player.remove_selected(selection)?;
        self.known.forget(&card);
        self.discard.push(card);
        self.phase = Phase::OpponentTurn;

        info!(parent: &self.span, %card, "player discarded");
        Ok(card)
    }

    /// Player action: swap the two selected cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is over or the selection is not two
    /// distinct cards.
    pub fn swap(&mut self, selection: &[usize]) -> Result<(), ActionError> {
        if self.is_over() {
            return Err(ActionError::RoundOver);
        }
        self.player.swap(selection)?;
        Ok(())
    }

    /// Player action: declare the selected cards as a group.
    ///
    /// Accepted cards leave the hand, and the first accepted pure or second
    /// life is recorded on the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the selection is
    /// invalid or holds fewer than three non-wild cards.
    pub fn check_group(&mut self, selection: &[usize]) -> Result<GroupVerdict, ActionError> {
        self.ensure_player_turn()?;
        let verdict = self.validator.check_group(&mut self.player, selection)?;
        Ok(verdict)
    }

    /// Player action: show the hand and end the round.
    ///
    /// The player wins with a pure life, a second life, and an empty hand;
    /// otherwise the opponent wins.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn show(&mut self) -> Result<Side, ActionError> {
        self.ensure_player_turn()?;

        let winner = if self.evaluator.player_has_won(&self.player) {
            Side::Player
        } else {
            Side::Opponent
        };
        self.phase = Phase::Over(winner);

        info!(parent: &self.span, ?winner, "player showed");
        Ok(winner)
    }
}
