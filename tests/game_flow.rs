use draw_poker::agents::{BetDecision, QueuedInput};
use draw_poker::config::GameConfig;
use draw_poker::game::{Game, GameError, SeatSpec};
use draw_poker::phase::Phase;

fn total_chips(game: &Game) -> u64 {
    game.players().iter().map(|p| p.chips()).sum::<u64>() + game.pot()
}

#[test]
fn three_equal_bets_fill_the_pot() {
    let mut game = Game::with_seed(GameConfig::default(), 11);
    game.initialize_game(&["Alice", "Bob", "Carol"]).unwrap();
    game.start_new_round().unwrap();
    for seat in 0..3 {
        assert_eq!(game.place_bet(seat, 50).unwrap(), 50);
    }
    assert_eq!(game.pot(), 150);
    assert!(game.is_round_complete());
    assert!(game.players().iter().all(|p| p.chips() == 950));
    assert_eq!(total_chips(&game), 3000);
}

#[test]
fn unmatched_bet_leaves_round_open() {
    let mut game = Game::with_seed(GameConfig::default(), 11);
    game.initialize_game(&["Alice", "Bob"]).unwrap();
    game.place_bet(0, 50).unwrap();
    game.place_bet(1, 20).unwrap();
    assert!(!game.is_round_complete());
    assert_eq!(game.current_high_bet(), 50);
    game.fold(1).unwrap();
    assert!(game.is_round_complete());
}

#[test]
fn bad_seat_indices_are_errors() {
    let mut game = Game::new(GameConfig::default());
    game.initialize_game(&["Alice", "Bob"]).unwrap();
    assert_eq!(game.place_bet(2, 10), Err(GameError::PlayerIndex(2)));
    assert_eq!(game.fold(9), Err(GameError::PlayerIndex(9)));
}

#[test]
fn full_round_conserves_chips() {
    let mut game = Game::with_seed(GameConfig::default(), 2024);
    game.initialize_game_with(&[
        SeatSpec::human("You"),
        SeatSpec::bot("Bot 1"),
        SeatSpec::bot("Bot 2"),
        SeatSpec::bot("Bot 3"),
    ])
    .unwrap();
    let mut input = QueuedInput::new();
    input.push_bet(0, BetDecision::Raise(40)).push_discards(0, vec![0, 1, 2]);
    let outcome = game.play_round(&mut input).unwrap();
    assert_eq!(game.phase(), Phase::RoundEnd);
    assert_eq!(game.pot(), 0);
    assert_eq!(total_chips(&game), 4000);
    assert!(outcome.pot >= 40);
    assert!(!outcome.winners.is_empty());
    assert!(game.players().iter().all(|p| p.current_bet() == 0));
    assert!(game.players()[0].last_bet() <= 1000);
}

#[test]
fn human_fold_ends_heads_up_round_early() {
    let mut game = Game::with_seed(GameConfig::heads_up(), 5);
    game.initialize_game_with(&[SeatSpec::human("You"), SeatSpec::bot("Bot")]).unwrap();
    let mut input = QueuedInput::new();
    input.push_bet(0, BetDecision::Fold);
    let outcome = game.play_round(&mut input).unwrap();
    assert_eq!(outcome.winners, vec![1]);
    assert!(game.players()[0].is_folded());
    assert_eq!(total_chips(&game), 2000);
}

#[test]
fn many_rounds_with_varied_sizes() {
    for (cfg, seats) in [
        (GameConfig::three_card(), 4),
        (GameConfig::seven_card(), 3),
        (GameConfig::new(10, 4, 300, 1).unwrap(), 4),
        (GameConfig::new(1, 2, 100, 2).unwrap(), 2),
    ] {
        let names: Vec<String> = (0..seats).map(|i| format!("P{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut game = Game::with_seed(cfg, 77);
        game.initialize_game(&refs).unwrap();
        let start = total_chips(&game);
        for _ in 0..10 {
            if game.players_with_chips() < 2 {
                break;
            }
            game.play_round(&mut QueuedInput::new()).unwrap();
            assert_eq!(total_chips(&game), start);
            for p in game.players() {
                assert_eq!(p.hand().len(), cfg.hand_size());
                assert!(p.hand().is_complete());
            }
        }
    }
}

#[test]
fn summary_and_snapshot_describe_the_table() {
    let mut game = Game::with_seed(GameConfig::default(), 4);
    game.initialize_game(&["Alice", "Bob"]).unwrap();
    game.place_bet(0, 100).unwrap();
    let summary = game.summary();
    assert_eq!(summary.pot, 100);
    assert_eq!(summary.players[0].chips, 900);
    assert_eq!(summary.phase, Phase::RoundStart);
    assert!(summary.to_string().contains("Alice: 900 chips, bet 100"));

    let snaps = game.snapshot();
    let mut other = Game::new(GameConfig::default());
    other.restore(&snaps).unwrap();
    assert!(other.is_active());
    assert_eq!(other.snapshot(), snaps);
}

#[test]
fn initialize_failure_leaves_engine_untouched() {
    let mut game = Game::new(GameConfig::heads_up());
    let err = game.initialize_game(&["a", "b", "c"]).unwrap_err();
    assert!(matches!(err, GameError::TooManyPlayers { count: 3, max: 2 }));
    assert!(!game.is_active());
    assert!(game.players().is_empty());
    assert_eq!(game.start_new_round(), Err(GameError::NotActive));
}
