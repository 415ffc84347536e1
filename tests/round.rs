//! Round flow integration tests.

use core::time::Duration;

use rummyrs::{
    ActionError, Card, DECK_SIZE, DeckError, DrawSource, GameOptions, Phase, Round, RoundStatus,
    SelectionError, Side, Suit, deal,
};

fn quick_options() -> GameOptions {
    GameOptions::default().with_think_time(Duration::ZERO)
}

fn count(cards: &[Card], card: Card) -> usize {
    cards.iter().filter(|&&other| other == card).count()
}

fn full_deck(jokers: u8) -> Vec<Card> {
    let mut cards = rummyrs::Deck::standard().into_cards();
    cards.extend(core::iter::repeat_n(Card::joker(), usize::from(jokers)));
    cards
}

fn assert_conserved(cards: &[Card], jokers: u8) {
    let expected = full_deck(jokers);
    assert_eq!(cards.len(), expected.len());
    for card in &expected {
        assert_eq!(count(cards, *card), count(&expected, *card), "{card}");
    }
}

#[test]
fn deal_accounts_for_every_card() {
    for seed in 0..20 {
        let options = GameOptions::default().with_jokers(2);
        let dealt = deal(&options, seed).unwrap();

        assert_eq!(dealt.player.len(), 13);
        assert_eq!(dealt.opponent.len(), 13);
        assert_eq!(dealt.discard.len(), 1);
        assert_ne!(dealt.wildcard_card.suit, Suit::Joker);

        let mut cards = Vec::new();
        cards.extend_from_slice(&dealt.player);
        cards.extend_from_slice(&dealt.opponent);
        cards.extend_from_slice(dealt.stock.cards());
        cards.extend_from_slice(&dealt.discard);
        cards.push(dealt.wildcard_card);
        assert_conserved(&cards, 2);
        assert_eq!(cards.len(), DECK_SIZE + 2);
    }
}

#[test]
fn deal_is_deterministic() {
    let options = GameOptions::default();
    assert_eq!(deal(&options, 7).unwrap(), deal(&options, 7).unwrap());
    assert_ne!(deal(&options, 7).unwrap(), deal(&options, 8).unwrap());
}

#[test]
fn deal_fails_when_deck_is_too_small() {
    let options = GameOptions::default().with_hand_size(30);
    assert_eq!(deal(&options, 1).unwrap_err(), DeckError::Empty);
    assert!(matches!(Round::new(options, 1), Err(DeckError::Empty)));
}

#[test]
fn new_round_layout() {
    let round = Round::new(quick_options(), 42).unwrap();

    assert_eq!(round.player_hand().len(), 13);
    assert_eq!(round.opponent_hand().len(), 13);
    assert_eq!(round.discard_pile().len(), 1);
    assert_eq!(round.cards_remaining(), DECK_SIZE + 1 - 1 - 13 - 13 - 1);
    assert_eq!(round.phase(), Phase::PlayerDraw);
    assert_eq!(round.status(), RoundStatus::AwaitingPlayerDraw);
    assert_eq!(round.wildcard().rank(), round.wildcard_card().rank);
    assert!(round.winner().is_none());
    assert_conserved(&round.all_cards(), 1);
}

#[test]
fn player_turn_order_errors() {
    let mut round = Round::new(quick_options(), 3).unwrap();

    assert_eq!(round.discard(&[0]).unwrap_err(), ActionError::MustDrawFirst);
    assert_eq!(round.opponent_turn().unwrap_err(), ActionError::NotYourTurn);

    round.draw(DrawSource::Stock).unwrap();
    assert_eq!(round.player_hand().len(), 14);
    assert_eq!(round.status(), RoundStatus::AwaitingPlayerDiscard);
    assert_eq!(
        round.draw(DrawSource::Stock).unwrap_err(),
        ActionError::AlreadyDrawn
    );

    assert_eq!(
        round.discard(&[]).unwrap_err(),
        ActionError::Selection(SelectionError::NoCardSelected)
    );
    assert_eq!(
        round.discard(&[0, 1]).unwrap_err(),
        ActionError::Selection(SelectionError::MultipleCardsSelected { selected: 2 })
    );

    let first = round.player_hand().cards()[0];
    assert_eq!(round.discard(&[0]).unwrap(), first);
    assert_eq!(round.top_of_discard(), Some(&first));
    assert_eq!(round.phase(), Phase::OpponentTurn);

    assert_eq!(
        round.draw(DrawSource::Stock).unwrap_err(),
        ActionError::NotYourTurn
    );
    assert_eq!(
        round.check_group(&[0, 1, 2]).unwrap_err(),
        ActionError::NotYourTurn
    );
    assert_conserved(&round.all_cards(), 1);
}

#[test]
fn pile_selection_errors() {
    let mut round = Round::new(quick_options(), 5).unwrap();

    assert_eq!(
        round.draw_selected(false, false).unwrap_err(),
        ActionError::Selection(SelectionError::NoSourceSelected)
    );
    assert_eq!(
        round.draw_selected(true, true).unwrap_err(),
        ActionError::Selection(SelectionError::BothSourcesSelected)
    );
    assert_eq!(round.phase(), Phase::PlayerDraw);

    let top = *round.top_of_discard().unwrap();
    assert_eq!(round.draw_selected(false, true).unwrap(), top);
    assert!(round.discard_pile().is_empty());
}

#[test]
fn discard_draws_are_known_to_opponent() {
    let mut round = Round::new(quick_options(), 11).unwrap();

    let taken = round.draw(DrawSource::Discard).unwrap();
    assert_eq!(round.known_cards(), &[taken]);

    let position = round.player_hand().len() - 1;
    assert_eq!(round.discard(&[position]).unwrap(), taken);
    assert!(round.known_cards().is_empty());
}

#[test]
fn opponent_turn_discards_one_card() {
    let options = quick_options().with_think_time(Duration::from_millis(250));
    let mut round = Round::new(options, 9).unwrap();

    round.draw(DrawSource::Stock).unwrap();
    round.discard(&[0]).unwrap();

    let turn = round.opponent_turn().unwrap();
    assert_eq!(turn.think_time, Duration::from_millis(250));
    assert_eq!(round.opponent_hand().len(), 13);
    assert_eq!(round.top_of_discard().copied(), turn.discarded);
    if turn.won {
        assert_eq!(round.phase(), Phase::Over(Side::Opponent));
    } else {
        assert_eq!(round.phase(), Phase::PlayerDraw);
    }
    assert_conserved(&round.all_cards(), 1);
}

#[test]
fn opponent_draw_source_shows_on_discard_pile() {
    let mut round = Round::new(quick_options(), 21).unwrap();

    round.draw(DrawSource::Discard).unwrap();
    assert!(round.discard_pile().is_empty());
    round.discard(&[0]).unwrap();
    let stock_before = round.cards_remaining();

    let turn = round.opponent_turn().unwrap();
    match turn.source {
        DrawSource::Stock => {
            assert_eq!(round.cards_remaining(), stock_before - 1);
            assert_eq!(round.discard_pile().len(), 2);
        }
        DrawSource::Discard => {
            assert_eq!(round.cards_remaining(), stock_before);
            assert_eq!(round.discard_pile().len(), 1);
        }
    }
}

#[test]
fn reshuffle_refills_exhausted_stock() {
    let options = quick_options().with_hand_size(25);
    let mut round = Round::new(options, 4).unwrap();
    assert_eq!(round.cards_remaining(), 1);
    assert_eq!(round.reshuffle().unwrap_err(), DeckError::StockNotEmpty);
    assert!(!round.check_and_reshuffle().unwrap());

    round.draw(DrawSource::Stock).unwrap();
    assert!(round.needs_reshuffle());
    assert_eq!(round.status(), RoundStatus::AwaitingPlayerDiscard);
    assert_eq!(round.reshuffle().unwrap_err(), DeckError::Empty);

    round.discard(&[0]).unwrap();
    assert_eq!(round.status(), RoundStatus::StockExhausted);

    assert!(round.check_and_reshuffle().unwrap());
    assert_eq!(round.cards_remaining(), 1);
    assert_eq!(round.discard_pile().len(), 1);
    assert_eq!(round.status(), RoundStatus::AwaitingOpponent);
    assert_conserved(&round.all_cards(), 1);

    round.opponent_turn().unwrap();
    assert_conserved(&round.all_cards(), 1);
}

fn dry_options() -> GameOptions {
    // 52 - 1 designation - 2 * 25 dealt - 1 discard leaves an empty stock.
    quick_options().with_jokers(0).with_hand_size(25)
}

#[test]
fn empty_stock_with_nothing_to_reshuffle_ends_round() {
    let mut round = Round::new(dry_options(), 3).unwrap();
    assert_eq!(round.cards_remaining(), 0);
    assert_eq!(round.discard_pile().len(), 1);
    assert_eq!(round.status(), RoundStatus::StockExhausted);
    assert_eq!(
        round.draw(DrawSource::Stock).unwrap_err(),
        ActionError::StockExhausted
    );

    assert_eq!(round.check_and_reshuffle(), Err(DeckError::Empty));
    assert_eq!(round.phase(), Phase::Exhausted);
    assert_eq!(round.status(), RoundStatus::Exhausted);
    assert!(round.is_over());
    assert!(round.winner().is_none());

    assert_eq!(
        round.draw(DrawSource::Discard).unwrap_err(),
        ActionError::RoundOver
    );
    assert_eq!(round.opponent_turn().unwrap_err(), ActionError::RoundOver);
    assert_eq!(round.swap(&[0, 1]).unwrap_err(), ActionError::RoundOver);
    assert_eq!(round.show().unwrap_err(), ActionError::RoundOver);
    assert_conserved(&round.all_cards(), 0);
}

#[test]
fn dry_round_always_terminates() {
    for seed in 0..20 {
        let mut round = Round::new(dry_options(), seed).unwrap();

        round.draw(DrawSource::Discard).unwrap();
        round.discard(&[0]).unwrap();
        assert_eq!(round.status(), RoundStatus::StockExhausted);

        match round.opponent_turn() {
            Ok(turn) => {
                assert_eq!(turn.source, DrawSource::Discard);
                assert_eq!(round.cards_remaining(), 0);
                assert_eq!(round.discard_pile().len(), 1);
            }
            Err(err) => {
                assert_eq!(err, ActionError::StockExhausted);
                assert_eq!(round.phase(), Phase::OpponentTurn);
            }
        }

        if round.winner().is_none() {
            assert_eq!(round.check_and_reshuffle(), Err(DeckError::Empty));
            assert_eq!(round.status(), RoundStatus::Exhausted);
        }
        assert!(round.is_over());
        assert_conserved(&round.all_cards(), 0);
    }
}

#[test]
fn show_ends_the_round() {
    let mut round = Round::new(quick_options(), 2).unwrap();
    round.draw(DrawSource::Stock).unwrap();

    assert_eq!(round.show().unwrap(), Side::Opponent);
    assert_eq!(round.winner(), Some(Side::Opponent));
    assert_eq!(round.status(), RoundStatus::Won(Side::Opponent));

    assert_eq!(round.discard(&[0]).unwrap_err(), ActionError::RoundOver);
    assert_eq!(round.opponent_turn().unwrap_err(), ActionError::RoundOver);
    assert_eq!(round.swap(&[0, 1]).unwrap_err(), ActionError::RoundOver);
    assert_eq!(round.show().unwrap_err(), ActionError::RoundOver);
}

#[test]
fn swap_and_short_group_on_round() {
    let mut round = Round::new(quick_options(), 6).unwrap();

    let before = round.player_hand().cards().to_vec();
    round.swap(&[0, 1]).unwrap();
    assert_eq!(round.player_hand().cards()[0], before[1]);
    assert_eq!(round.player_hand().cards()[1], before[0]);

    assert_eq!(
        round.swap(&[0]).unwrap_err(),
        ActionError::Selection(SelectionError::SwapNeedsTwo { selected: 1 })
    );
    assert!(matches!(
        round.check_group(&[0, 1]),
        Err(ActionError::Selection(SelectionError::TooFewCards { .. }))
    ));
    assert_eq!(round.player_hand().len(), 13);
}

#[test]
fn simulated_rounds_keep_every_card() {
    for seed in 0..10 {
        let mut round = Round::new(quick_options(), seed).unwrap();

        for _ in 0..200 {
            if round.check_and_reshuffle().is_err() {
                break;
            }
            round.draw(DrawSource::Stock).unwrap();
            round.discard(&[0]).unwrap();
            assert_conserved(&round.all_cards(), 1);

            if round.check_and_reshuffle().is_err() {
                break;
            }
            let turn = round.opponent_turn().unwrap();
            assert_eq!(round.opponent_hand().len(), 13);
            assert_eq!(round.player_hand().len(), 13);
            assert_conserved(&round.all_cards(), 1);

            if turn.won {
                assert_eq!(round.status(), RoundStatus::Won(Side::Opponent));
                break;
            }
        }
    }
}
