//! End-to-end round scenarios driven through the public API.

use flip7::{
    Card, Choice, Deck, GameEvent, GameSetup, MemorySink, NullSink, Player,
    RoundController, ScriptedDecisions, TurnOutcome, DECK_SIZE,
};

fn controller(deck: Deck, names: &[&str]) -> RoundController {
    RoundController::new(deck, names.iter().map(|&name| Player::new(name)).collect())
}

/// Deck forced to yield [3, 5, 3]: Alice busts on the second 3.
#[test]
fn test_alice_busts_on_forced_duplicate() {
    let mut ctrl = controller(Deck::from_draw_order(&[3, 5, 3]), &["Alice"]);
    let mut decisions = ScriptedDecisions::always_draw(10);
    let mut sink = MemorySink::new();

    let report = ctrl.play(&mut decisions, &mut sink);

    let alice = &ctrl.players()[0];
    assert!(alice.is_busted());
    assert_eq!(alice.hand(), &[Card::new(3), Card::new(5)]);
    assert_eq!(report, vec![flip7::ScoreEntry { name: "Alice".to_string(), score: 0 }]);

    // The bust is visible in the event stream, tied to the duplicate card.
    assert!(sink.events().iter().any(|e| matches!(
        e,
        GameEvent::PlayerBusted { player, card } if player == "Alice" && *card == Card::new(3)
    )));
}

/// Stopping on the first prompt leaves an empty hand and zero points.
#[test]
fn test_immediate_stop() {
    let mut ctrl = controller(Deck::new(), &["Alice"]);
    let mut decisions = ScriptedDecisions::new([Choice::Stop]);

    let outcome = ctrl.play_turn(0, &mut decisions, &mut NullSink);

    assert_eq!(outcome, TurnOutcome::Stopped);
    assert!(ctrl.players()[0].hand().is_empty());
    assert_eq!(ctrl.players()[0].score(), 0);
    assert_eq!(ctrl.deck().len(), DECK_SIZE);
}

/// The final report follows registration order, never score order.
#[test]
fn test_report_order_is_registration_order() {
    // Alice stops at once (0 points); Bob banks 12+11 = 23.
    let mut ctrl = controller(Deck::from_draw_order(&[12, 11]), &["Alice", "Bob"]);
    let mut decisions = ScriptedDecisions::new([
        Choice::Stop,
        Choice::Draw,
        Choice::Draw,
        Choice::Stop,
    ]);

    let report = ctrl.play(&mut decisions, &mut NullSink);

    assert_eq!(report[0].name, "Alice");
    assert_eq!(report[0].score, 0);
    assert_eq!(report[1].name, "Bob");
    assert_eq!(report[1].score, 23);
}

/// Seven distinct draws end the turn as a win without another prompt.
#[test]
fn test_flip_seven_wins() {
    let mut ctrl = controller(
        Deck::from_draw_order(&[6, 1, 4, 2, 7, 3, 5]),
        &["Alice"],
    );
    let mut decisions = ScriptedDecisions::always_draw(20);
    let mut sink = MemorySink::new();

    let report = ctrl.play(&mut decisions, &mut sink);

    assert_eq!(report[0].score, 28);
    assert_eq!(decisions.remaining(), 13);
    assert!(sink
        .events()
        .iter()
        .any(|e| matches!(e, GameEvent::PlayerWon { player } if player == "Alice")));
}

/// An exhausted deck ends the turn quietly; nobody busts over it.
#[test]
fn test_deck_exhaustion_mid_round() {
    let mut ctrl = controller(Deck::from_draw_order(&[9, 4]), &["Alice", "Bob"]);
    let mut decisions = ScriptedDecisions::always_draw(10);
    let mut sink = MemorySink::new();

    let report = ctrl.play(&mut decisions, &mut sink);

    // Alice drains the deck into her hand; Bob's first draw finds nothing.
    assert_eq!(report[0].score, 13);
    assert_eq!(report[1].score, 0);
    assert!(!ctrl.players()[1].is_busted());
    assert!(sink
        .events()
        .iter()
        .any(|e| matches!(e, GameEvent::DeckExhausted { player } if player == "Bob")));
}

/// A decision source that closes mid-round stops the remaining players.
#[test]
fn test_closed_source_never_hangs() {
    let mut ctrl = controller(Deck::from_draw_order(&[8]), &["Alice", "Bob"]);
    // One answer for Alice, then nothing for anyone.
    let mut decisions = ScriptedDecisions::new([Choice::Draw]);

    let report = ctrl.play(&mut decisions, &mut NullSink);

    // Alice keeps her single draw; Bob is treated as stopping.
    assert_eq!(report[0].score, 8);
    assert_eq!(report[1].score, 0);
    assert!(!ctrl.players()[1].is_busted());
}

/// The event stream opens with RoundStarted and closes with FinalScores.
#[test]
fn test_event_stream_shape() {
    let mut ctrl = controller(Deck::new(), &["Alice", "Bob"]);
    let mut decisions = ScriptedDecisions::new([Choice::Stop, Choice::Stop]);
    let mut sink = MemorySink::new();

    ctrl.play(&mut decisions, &mut sink);

    let events = sink.events();
    assert!(matches!(
        events.first().unwrap(),
        GameEvent::RoundStarted { players } if players == &["Alice", "Bob"]
    ));
    assert!(matches!(events.last().unwrap(), GameEvent::FinalScores { .. }));

    // Exactly one TurnStarted per player, in order.
    let turns: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::TurnStarted { player } => Some(player.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(turns, vec!["Alice", "Bob"]);
}

/// A whole seeded game from setup to report, scripted end to end.
#[test]
fn test_seeded_game_runs_to_completion() {
    let setup = GameSetup::new(vec!["Alice".to_string(), "Bob".to_string(), "Carol".to_string()])
        .unwrap()
        .with_seed(42);
    let mut ctrl = setup.into_controller();

    // Everyone draws until their turn resolves on its own; 78 cards is
    // more than enough for three turns to terminate by bust or win.
    let mut decisions = ScriptedDecisions::always_draw(DECK_SIZE);
    let report = ctrl.play(&mut decisions, &mut NullSink);

    assert_eq!(report.len(), 3);
    for (entry, player) in report.iter().zip(ctrl.players()) {
        assert_eq!(entry.name, player.name());
        assert_eq!(entry.score, player.score());
        // Every turn reached a terminal state.
        assert!(
            player.is_busted()
                || player.has_winning_hand()
                || ctrl.deck().is_empty()
        );
    }
}
