//! Participant turn rules: flag, play cap, rejections and turn-end events.

use duel_ccg::cards::CardPool;
use duel_ccg::core::{GameRng, InstanceAllocator, MatchConfig, PlayRejection, Seat};
use duel_ccg::events::{EventKind, GameEvent, TurnEndReason};
use duel_ccg::participant::{Participant, TurnPhase};
use duel_ccg::zones::DrawOutcome;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn human(config: &MatchConfig) -> Participant {
    let mut ids = InstanceAllocator::new();
    Participant::new(Seat::Human, &CardPool::starter(), config, &GameRng::new(42), &mut ids).unwrap()
}

/// Human seat holding the turn with `hand` cards dealt.
fn human_on_turn(hand: usize) -> Participant {
    let mut p = human(&MatchConfig::default().with_opening_hand(0));
    p.deal(hand);
    p.begin_first_turn(1);
    p
}

#[test]
fn test_two_plays_from_seven_card_hand() {
    init_logging();
    let mut p = human_on_turn(7);
    assert_eq!(p.hand().len(), 7);
    assert_eq!(p.zones().deck_size(), 53);

    let first = p.hand()[0].id;
    let second = p.hand()[4].id;
    p.play_card(first).unwrap();
    p.play_card(second).unwrap();

    assert_eq!(p.hand().len(), 5);
    assert_eq!(p.zones().play_area_size(), 2);
    assert_eq!(p.cards_played_this_turn(), 2);
    assert!(!p.is_my_turn());

    let played: Vec<_> = p.zones().play_area().iter().map(|c| c.id).collect();
    assert_eq!(played, vec![first, second]);

    let events = p.take_events();
    let ended: Vec<_> = events.iter().filter(|e| e.kind() == EventKind::TurnEnded).collect();
    assert_eq!(ended.len(), 1);
    assert!(matches!(
        ended[0],
        GameEvent::TurnEnded { seat: Seat::Human, cards_played: 2, reason: TurnEndReason::CapReached, .. }
    ));
}

#[test]
fn test_third_play_rejected() {
    let mut p = human_on_turn(7);
    let ids: Vec<_> = p.hand().iter().take(3).map(|c| c.id).collect();
    p.play_card(ids[0]).unwrap();
    p.play_card(ids[1]).unwrap();
    p.take_events();
    let before = p.clone();

    assert!(p.play_card(ids[2]).is_err());
    assert_eq!(p, before);
    assert!(p.take_events().is_empty());
}

#[test]
fn test_play_while_waiting_rejected() {
    let mut p = human(&MatchConfig::default());
    p.deal(3);
    p.take_events();
    let card = p.hand()[0].id;
    let before = p.clone();

    assert_eq!(p.play_card(card), Err(PlayRejection::NotYourTurn { seat: Seat::Human }));
    assert_eq!(p, before);
}

#[test]
fn test_play_card_not_in_hand_rejected() {
    let mut p = human_on_turn(3);
    let deck_card = p.zones().deck()[0].id;
    p.take_events();
    let before = p.clone();

    assert_eq!(
        p.play_card(deck_card),
        Err(PlayRejection::CardNotInHand { card: deck_card })
    );
    assert_eq!(p, before);
}

#[test]
fn test_rejection_messages() {
    let mut p = human_on_turn(1);
    let missing = p.zones().deck()[0].id;
    let err = p.play_card(missing).unwrap_err();
    assert_eq!(err.to_string(), format!("{} is not in hand", missing));

    p.pass().unwrap();
    let err = p.pass().unwrap_err();
    assert_eq!(err.to_string(), "Human tried to act outside its turn");
}

#[test]
fn test_start_turn_sequence() {
    let mut p = human(&MatchConfig::default());
    let top = p.zones().top_card().map(|c| c.id).unwrap();

    let outcome = p.start_turn(3);

    assert_eq!(outcome, DrawOutcome::Drew(top));
    assert_eq!(p.phase(), TurnPhase::ActivePlaying);
    assert_eq!(p.turn_state().turn, 3);
    assert_eq!(p.cards_played_this_turn(), 0);

    let events = p.take_events();
    assert!(matches!(events[0], GameEvent::TurnStarted { seat: Seat::Human, turn: 3 }));
    assert!(matches!(events[1], GameEvent::Drew { hand_size: 1, deck_size: 59, .. }));
}

#[test]
fn test_start_turn_on_empty_deck_still_activates() {
    let config = MatchConfig::default().with_deck_size(1).with_opening_hand(1);
    let mut p = human(&config);
    p.deal(1);

    assert_eq!(p.start_turn(2), DrawOutcome::DeckEmpty);
    assert!(p.is_my_turn());
    assert_eq!(p.hand().len(), 1);
}

#[test]
fn test_requested_draw_has_no_per_turn_limit() {
    let mut p = human_on_turn(0);
    for _ in 0..5 {
        assert!(matches!(p.draw(), Ok(DrawOutcome::Drew(_))));
    }
    assert_eq!(p.hand().len(), 5);
    assert!(p.is_my_turn());
}

#[test]
fn test_custom_play_cap() {
    let mut p = human(&MatchConfig::default().with_play_cap(3));
    p.deal(5);
    p.begin_first_turn(1);
    let ids: Vec<_> = p.hand().iter().take(3).map(|c| c.id).collect();

    p.play_card(ids[0]).unwrap();
    p.play_card(ids[1]).unwrap();
    assert!(p.is_my_turn());
    let outcome = p.play_card(ids[2]).unwrap();
    assert!(outcome.turn_ended);
    assert_eq!(p.cards_played_this_turn(), 3);
}

#[test]
fn test_pass_before_cap() {
    let mut p = human_on_turn(4);
    let card = p.hand()[0].id;
    p.play_card(card).unwrap();
    p.pass().unwrap();

    assert!(!p.is_my_turn());
    assert_eq!(p.cards_played_this_turn(), 1);
    assert!(matches!(
        p.take_events().last(),
        Some(GameEvent::TurnEnded { cards_played: 1, reason: TurnEndReason::Passed, .. })
    ));
}
