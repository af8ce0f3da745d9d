use draw_poker::agents::QueuedInput;
use draw_poker::config::GameConfig;
use draw_poker::engine::{step, GameEngine};
use draw_poker::game::{Game, GameError};
use draw_poker::phase::Phase;

fn seated() -> Game {
    let mut game = Game::with_seed(GameConfig::default(), 9);
    game.initialize_game(&["A", "B", "C"]).unwrap();
    game
}

#[test]
fn setup_ends_at_round_start() {
    let game = seated();
    assert_eq!(game.phase(), Phase::RoundStart);
    assert_eq!(game.current_round(), 0);
    assert!(game.is_active());
}

#[test]
fn advance_follows_the_default_order() {
    let mut game = seated();
    let mut seen = vec![game.phase()];
    for _ in 0..8 {
        assert!(game.advance_phase());
        seen.push(game.phase());
    }
    assert_eq!(
        seen,
        vec![
            Phase::RoundStart,
            Phase::HandDealing,
            Phase::BettingRound,
            Phase::CardExchange,
            Phase::FinalBetting,
            Phase::WinnerDetermination,
            Phase::PotManagement,
            Phase::RoundEnd,
            Phase::RoundStart,
        ]
    );
}

#[test]
fn game_end_is_terminal() {
    let mut game = seated();
    game.end_game();
    assert_eq!(game.phase(), Phase::GameEnd);
    assert!(!game.advance_phase());
    assert!(!game.can_continue());
    assert_eq!(game.phase(), Phase::GameEnd);
}

#[test]
fn operations_check_their_phase() {
    let mut game = seated();
    let mut input = QueuedInput::new();
    assert_eq!(game.conduct_betting_round(&mut input), Err(GameError::WrongPhase(Phase::RoundStart)));
    assert_eq!(game.exchange_cards(0, &[0]), Err(GameError::WrongPhase(Phase::RoundStart)));
    assert_eq!(game.complete_card_exchange(), Err(GameError::WrongPhase(Phase::RoundStart)));

    game.start_new_round().unwrap();
    assert_eq!(game.phase(), Phase::BettingRound);
    game.conduct_betting_round(&mut input).unwrap();
    game.begin_card_exchange().unwrap();
    game.begin_card_exchange().unwrap();
    assert_eq!(game.phase(), Phase::CardExchange);
    assert!(game.players().iter().all(|p| p.current_bet() == 0));
    game.complete_card_exchange().unwrap();
    assert_eq!(game.phase(), Phase::FinalBetting);
    assert_eq!(game.begin_card_exchange(), Err(GameError::WrongPhase(Phase::FinalBetting)));
}

#[test]
fn engine_trait_drives_a_round() {
    let mut game = seated();
    let mut input = QueuedInput::new();
    let engine: &mut dyn GameEngine = &mut game;
    let mut phases = Vec::new();
    loop {
        let phase = step(engine, &mut input).unwrap();
        phases.push(phase);
        if phase == Phase::RoundEnd {
            break;
        }
    }
    assert_eq!(phases.first(), Some(&Phase::BettingRound));
    assert_eq!(engine.pot(), 0);
    assert_eq!(engine.num_players(), 3);
    assert!(engine.can_continue());
    engine.end_game();
    assert_eq!(step(engine, &mut input), Err(GameError::WrongPhase(Phase::GameEnd)));
}
