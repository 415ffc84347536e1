use crate::error::ActionError;
use crate::policy::DrawSource;
use crate::result::OpponentTurn;

use tracing::info;

use super::{Phase, Round, Side};

impl Round {
    /// Plays the opponent's turn.
    ///
    /// The draw policy picks a pile, the drawn card is classified into the
    /// opponent's melds, the least valuable card goes onto the discard pile,
    /// and the hand is checked for a win. The returned record carries the
    /// configured think time; waiting is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the opponent's turn, the round is over,
    /// or the opponent wants the stock while it is exhausted and must be
    /// reshuffled first. The discard card can still be taken from an empty
    /// stock.
    pub fn opponent_turn(&mut self) -> Result<OpponentTurn, ActionError> {
        match self.phase {
            Phase::OpponentTurn => {}
            Phase::Over(_) | Phase::Exhausted => return Err(ActionError::RoundOver),
            Phase::PlayerDraw | Phase::PlayerDiscard => return Err(ActionError::NotYourTurn),
        }

        let source = self
            .policy
            .decide(&self.opponent, self.discard.last(), self.known.cards());
        if source == DrawSource::Stock && self.stock.is_empty() {
            return Err(ActionError::StockExhausted);
        }
        let drawn = match source {
            DrawSource::Discard => self.discard.pop().ok_or(ActionError::DiscardPileEmpty)?,
            DrawSource::Stock => self
                .stock
                .draw()
                .map_err(|_| ActionError::StockExhausted)?,
        };

        let hand = core::mem::take(&mut self.opponent);
        let hand = self.classifier.classify(drawn, hand);
        let (discarded, hand) = self.classifier.give_back(hand);
        self.opponent = hand;

        if let Some(card) = discarded {
            self.discard.push(card);
        }

        let won = self.evaluator.evaluate(&self.opponent);
        self.phase = if won {
            Phase::Over(Side::Opponent)
        } else {
            Phase::PlayerDraw
        };

        info!(
            parent: &self.span,
            ?source,
            %drawn,
            discarded = ?discarded,
            won,
            "opponent moved"
        );

        Ok(OpponentTurn {
            source,
            drawn,
            discarded,
            won,
            think_time: self.options.think_time,
        })
    }
}
