// Game engine API boundary. Front ends (TUI, scripts, tests) drive a round
// through these phase drivers and queries without reaching into `Game`.

use crate::agents::InputSource;
use crate::game::{Game, GameError, GameSummary};
use crate::phase::Phase;
use crate::player::Player;

pub trait GameEngine {
    // Round lifecycle
    fn start_new_round(&mut self) -> Result<(), GameError>;
    fn betting_phase(&mut self, input: &mut dyn InputSource) -> Result<u64, GameError>;
    fn begin_card_exchange(&mut self) -> Result<(), GameError>;
    fn card_exchange_phase(&mut self, input: &mut dyn InputSource) -> Result<(), GameError>;
    fn showdown(&mut self) -> Result<Vec<usize>, GameError>;
    fn end_game(&mut self);

    // Queries
    fn phase(&self) -> Phase;
    fn pot(&self) -> u64;
    fn current_round(&self) -> u32;
    fn num_players(&self) -> usize;
    fn player(&self, seat: usize) -> Option<&Player>;
    fn current_high_bet(&self) -> u64;
    fn active_player_count(&self) -> usize;
    fn players_with_chips(&self) -> usize;
    fn can_continue(&self) -> bool;
    fn awaiting_input(&self) -> Option<usize>;
    fn summary(&self) -> GameSummary;
}

impl GameEngine for Game {
    fn start_new_round(&mut self) -> Result<(), GameError> {
        self.start_new_round()
    }
    fn betting_phase(&mut self, input: &mut dyn InputSource) -> Result<u64, GameError> {
        self.betting_phase(input)
    }
    fn begin_card_exchange(&mut self) -> Result<(), GameError> {
        self.begin_card_exchange()
    }
    fn card_exchange_phase(&mut self, input: &mut dyn InputSource) -> Result<(), GameError> {
        self.card_exchange_phase(input)
    }
    fn showdown(&mut self) -> Result<Vec<usize>, GameError> {
        self.showdown()
    }
    fn end_game(&mut self) {
        self.end_game()
    }

    fn phase(&self) -> Phase {
        self.phase()
    }
    fn pot(&self) -> u64 {
        self.pot()
    }
    fn current_round(&self) -> u32 {
        self.current_round()
    }
    fn num_players(&self) -> usize {
        self.players().len()
    }
    fn player(&self, seat: usize) -> Option<&Player> {
        self.player(seat)
    }
    fn current_high_bet(&self) -> u64 {
        self.current_high_bet()
    }
    fn active_player_count(&self) -> usize {
        self.active_player_count()
    }
    fn players_with_chips(&self) -> usize {
        self.players_with_chips()
    }
    fn can_continue(&self) -> bool {
        self.can_continue()
    }
    fn awaiting_input(&self) -> Option<usize> {
        self.awaiting_input()
    }
    fn summary(&self) -> GameSummary {
        self.summary()
    }
}

/// Run the stage that belongs to the current phase and return the phase the
/// engine ends up in.
///
/// | from                        | does                                   |
/// |-----------------------------|----------------------------------------|
/// | `RoundStart`, `RoundEnd`    | deal a new round                       |
/// | `BettingRound`              | betting, then exchange or showdown     |
/// | `CardExchange`              | every seat discards and draws          |
/// | `FinalBetting`              | betting, then showdown                 |
///
/// Showdown is reached early once only one player is left in the round.
/// Betting that stops for a missing human decision stays in its phase;
/// step again once `input` can answer.
pub fn step(engine: &mut dyn GameEngine, input: &mut dyn InputSource) -> Result<Phase, GameError> {
    match engine.phase() {
        Phase::RoundStart | Phase::RoundEnd => engine.start_new_round()?,
        Phase::BettingRound => {
            engine.betting_phase(input)?;
            if engine.awaiting_input().is_some() {
                return Ok(engine.phase());
            }
            if engine.active_player_count() > 1 {
                engine.begin_card_exchange()?;
            } else {
                engine.showdown()?;
            }
        }
        Phase::CardExchange => engine.card_exchange_phase(input)?,
        Phase::FinalBetting => {
            engine.betting_phase(input)?;
            if engine.awaiting_input().is_some() {
                return Ok(engine.phase());
            }
            engine.showdown()?;
        }
        other => return Err(GameError::WrongPhase(other)),
    }
    Ok(engine.phase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{BetDecision, QueuedInput};
    use crate::config::GameConfig;
    use crate::game::SeatSpec;

    fn engine() -> Game {
        let mut g = Game::with_seed(GameConfig::default(), 3);
        g.initialize_game_with(&[SeatSpec::human("You"), SeatSpec::bot("Bot 1")]).unwrap();
        g
    }

    #[test]
    fn steps_through_a_full_round() {
        let mut g = engine();
        let mut input = QueuedInput::new();
        let e: &mut dyn GameEngine = &mut g;
        assert_eq!(step(e, &mut input).unwrap(), Phase::BettingRound);
        assert_eq!(step(e, &mut input).unwrap(), Phase::CardExchange);
        assert_eq!(step(e, &mut input).unwrap(), Phase::FinalBetting);
        assert_eq!(step(e, &mut input).unwrap(), Phase::RoundEnd);
        assert_eq!(e.pot(), 0);
        assert_eq!(e.current_round(), 1);
        assert_eq!(step(e, &mut input).unwrap(), Phase::BettingRound);
        assert_eq!(e.current_round(), 2);
    }

    #[test]
    fn folding_skips_to_showdown() {
        let mut g = engine();
        let mut input = QueuedInput::new();
        input.push_bet(0, BetDecision::Fold);
        step(&mut g, &mut input).unwrap();
        assert_eq!(step(&mut g, &mut input).unwrap(), Phase::RoundEnd);
        assert_eq!(g.current_round(), 1);
        assert_eq!(g.last_outcome().map(|o| o.winners.clone()), Some(vec![1]));
        let total: u64 = g.players().iter().map(Player::chips).sum();
        assert_eq!(total, 2000);
    }

    #[test]
    fn step_waits_for_missing_human_bet() {
        let mut g = engine();
        let mut input = QueuedInput::waiting();
        step(&mut g, &mut input).unwrap();
        assert_eq!(step(&mut g, &mut input).unwrap(), Phase::BettingRound);
        assert_eq!(g.awaiting_input(), Some(0));
        // A second call covers a bot raise on the first pass.
        input.push_bet(0, BetDecision::Call).push_bet(0, BetDecision::Call);
        let next = step(&mut g, &mut input).unwrap();
        assert_ne!(next, Phase::BettingRound);
        assert_eq!(g.awaiting_input(), None);
    }

    #[test]
    fn step_refuses_setup_phases() {
        let mut g = Game::new(GameConfig::default());
        let err = step(&mut g, &mut QueuedInput::new()).unwrap_err();
        assert_eq!(err, GameError::WrongPhase(Phase::Initialization));
    }
}
