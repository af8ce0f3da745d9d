use crate::agents::{BetDecision, QueuedInput};
use crate::config::GameConfig;
use crate::engine::{self, GameEngine};
use crate::game::{Game, GameError, SeatSpec};
use crate::phase::Phase;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    NextRound,
    Fold,
    Call,
    AmountOpen,
    AmountDigit(u8),
    AmountBackspace,
    AmountIncStep,
    AmountDecStep,
    AmountSubmit,
    AmountCancel,
    ToggleDiscard(usize),
    ConfirmExchange,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub game: Game,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_hand_size: usize,
    pub cfg_num_players: usize,
    pub cfg_starting_chips: u64,
    pub cfg_betting_rounds: u32,
    menu_error: Option<String>,
    input: QueuedInput,
    discard_marks: Vec<bool>,
    help_open: bool,
    amount_entry: Option<String>,
    amount_entry_error: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
    status: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

impl AppState {
    /// Seat the terminal user is playing.
    pub const HUMAN_SEAT: usize = 0;
    pub const RAISE_STEP: u64 = 25;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    /// App whose menu starts from `config`, seating `max_players` players.
    pub fn with_config(config: GameConfig) -> Self {
        let players = config.max_players();
        let game = Self::seat_table(config, players).unwrap_or_else(|_| Game::new(config));
        Self {
            scene: Scene::Menu,
            game,
            menu_index: 0,
            cfg_hand_size: config.hand_size(),
            cfg_num_players: players,
            cfg_starting_chips: config.starting_chips(),
            cfg_betting_rounds: config.betting_rounds(),
            menu_error: None,
            input: QueuedInput::waiting(),
            discard_marks: Vec::new(),
            help_open: false,
            amount_entry: None,
            amount_entry_error: None,
            action_error: None,
            action_error_at: None,
            status: None,
        }
    }

    /// New engine with the user in seat 0 and computer players elsewhere.
    pub(crate) fn seat_table(config: GameConfig, players: usize) -> Result<Game, GameError> {
        let seats: Vec<SeatSpec> = (0..players)
            .map(|i| {
                if i == Self::HUMAN_SEAT {
                    SeatSpec::human("You")
                } else {
                    SeatSpec::bot(format!("Bot {i}"))
                }
            })
            .collect();
        let mut game = Game::new(config);
        game.initialize_game_with(&seats)?;
        Ok(game)
    }

    /// True while the engine is waiting on the user's decision.
    pub fn awaiting_human(&self) -> bool {
        if self.scene != Scene::Table || !self.game.can_continue() {
            return false;
        }
        let Some(p) = self.game.player(Self::HUMAN_SEAT) else {
            return false;
        };
        if p.is_folded() {
            return false;
        }
        match self.game.phase() {
            Phase::BettingRound | Phase::FinalBetting => p.chips() > 0,
            Phase::CardExchange => true,
            _ => false,
        }
    }

    pub fn can_bet(&self) -> bool {
        self.awaiting_human() && self.game.phase().allows_betting()
    }

    pub fn can_exchange(&self) -> bool {
        self.awaiting_human() && self.game.phase().allows_card_exchange()
    }

    /// Between rounds, ready to deal.
    pub fn can_deal(&self) -> bool {
        self.game.can_continue() && matches!(self.game.phase(), Phase::RoundStart | Phase::RoundEnd)
    }

    pub fn to_call(&self) -> u64 {
        self.game
            .player(Self::HUMAN_SEAT)
            .map_or(0, |p| self.game.current_high_bet().saturating_sub(p.current_bet()))
    }

    pub fn discard_marks(&self) -> &[bool] {
        &self.discard_marks
    }

    pub fn menu_error(&self) -> Option<&str> {
        self.menu_error.as_deref()
    }

    pub(crate) fn set_menu_error(&mut self, err: Option<String>) {
        self.menu_error = err;
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn amount_entry_active(&self) -> bool {
        self.amount_entry.is_some()
    }

    pub fn amount_entry_text(&self) -> Option<&str> {
        self.amount_entry.as_deref()
    }

    pub fn amount_entry_error(&self) -> Option<&str> {
        self.amount_entry_error.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn set_action_error(&mut self, err: impl ToString) {
        self.action_error = Some(err.to_string());
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn reset_table_state(&mut self) {
        self.input.clear();
        self.discard_marks.clear();
        self.amount_entry = None;
        self.amount_entry_error = None;
        self.clear_action_error();
        self.status = Some("Press Space to deal.".to_string());
    }

    /// Run one engine stage with whatever the user has queued.
    fn advance(&mut self) {
        let result = engine::step(&mut self.game, &mut self.input);
        self.input.clear();
        match result {
            Ok(Phase::CardExchange) => {
                self.clear_action_error();
                let len = self.game.config().hand_size();
                self.discard_marks = vec![false; len];
                self.status = None;
            }
            Ok(Phase::RoundEnd) => {
                self.clear_action_error();
                self.discard_marks.clear();
                self.status = Some(self.round_result());
            }
            Ok(_) => {
                self.clear_action_error();
                self.status = (self.game.awaiting_input() == Some(Self::HUMAN_SEAT))
                    .then(|| format!("Raised. {} to call: C call, R raise, F fold.", self.to_call()));
            }
            Err(err) => {
                tracing::warn!(%err, "engine step failed");
                self.set_action_error(err);
            }
        }
    }

    fn round_result(&self) -> String {
        let Some(outcome) = self.game.last_outcome() else {
            return "Round over, nobody left to pay.".to_string();
        };
        let names: Vec<&str> = outcome
            .winners
            .iter()
            .filter_map(|&w| self.game.player(w).map(|p| p.name()))
            .collect();
        let category = outcome.category.map(|c| format!(" with {c}")).unwrap_or_default();
        format!("{} won {}{category}. Space for next round.", names.join(" & "), outcome.pot)
    }

    fn queue_bet(&mut self, decision: BetDecision) -> bool {
        if !self.can_bet() {
            return false;
        }
        self.input.push_bet(Self::HUMAN_SEAT, decision);
        self.advance();
        true
    }

    fn toggle_discard(&mut self, index: usize) -> bool {
        if !self.can_exchange() {
            return false;
        }
        match self.discard_marks.get_mut(index) {
            Some(mark) => {
                *mark = !*mark;
                true
            }
            None => false,
        }
    }

    fn confirm_exchange(&mut self) -> bool {
        if !self.can_exchange() {
            return false;
        }
        let picks: Vec<usize> =
            self.discard_marks.iter().enumerate().filter(|(_, m)| **m).map(|(i, _)| i).collect();
        if picks.len() > self.game.cards_remaining() {
            self.set_action_error(format!("Only {} cards left", self.game.cards_remaining()));
            return false;
        }
        self.input.push_discards(Self::HUMAN_SEAT, picks);
        self.advance();
        true
    }

    /// Deal the next round, or end the game once the user or the table is
    /// out of chips.
    pub fn next_round(&mut self) {
        if !self.can_deal() {
            return;
        }
        let user_broke = self.game.player(Self::HUMAN_SEAT).is_some_and(|p| p.chips() == 0);
        if user_broke || self.game.players_with_chips() < 2 {
            let engine: &mut dyn GameEngine = &mut self.game;
            engine.end_game();
            self.status = Some(if user_broke {
                "You are out of chips. Game over, M for a new table.".to_string()
            } else {
                "You took every chip. Game over, M for a new table.".to_string()
            });
            return;
        }
        self.advance();
    }

    fn open_amount_entry(&mut self) -> bool {
        if !self.can_bet() {
            return false;
        }
        self.amount_entry = Some(Self::RAISE_STEP.to_string());
        self.amount_entry_error = None;
        true
    }

    fn amount_entry_backspace(&mut self) {
        if let Some(buf) = self.amount_entry.as_mut() {
            buf.pop();
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_push_digit(&mut self, digit: u8) {
        if let Some(buf) = self.amount_entry.as_mut() {
            if buf.len() >= 12 {
                return;
            }
            buf.push(char::from(b'0' + digit));
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_adjust(&mut self, delta: i64) {
        if let Some(buf) = self.amount_entry.as_mut() {
            let cur = buf.parse::<i64>().unwrap_or(0);
            let next = (cur + delta * Self::RAISE_STEP as i64).max(0);
            *buf = next.to_string();
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_submit(&mut self) -> bool {
        let Some(buf) = self.amount_entry.as_ref() else {
            return false;
        };
        let amount = match buf.parse::<u64>() {
            Ok(v) => v,
            Err(_) => {
                self.amount_entry_error = Some("Invalid amount".to_string());
                return false;
            }
        };
        if amount == 0 {
            self.amount_entry_error = Some("Raise must be above zero".to_string());
            return false;
        }
        let chips = self.game.player(Self::HUMAN_SEAT).map_or(0, |p| p.chips());
        if self.to_call() >= chips {
            self.amount_entry_error = Some("Not enough chips to raise".to_string());
            return false;
        }
        self.amount_entry = None;
        self.amount_entry_error = None;
        if self.queue_bet(BetDecision::Raise(amount)) {
            return true;
        }
        self.set_action_error("Action not allowed");
        false
    }

    fn amount_entry_cancel(&mut self) {
        self.amount_entry = None;
        self.amount_entry_error = None;
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::NextRound => {
                if self.scene == Scene::Table {
                    self.next_round();
                }
                false
            }
            InputAction::Fold => self.queue_bet(BetDecision::Fold),
            InputAction::Call => self.queue_bet(BetDecision::Call),
            InputAction::AmountOpen => self.open_amount_entry(),
            InputAction::AmountDigit(d) => {
                self.amount_entry_push_digit(d);
                false
            }
            InputAction::AmountBackspace => {
                self.amount_entry_backspace();
                false
            }
            InputAction::AmountIncStep => {
                self.amount_entry_adjust(1);
                false
            }
            InputAction::AmountDecStep => {
                self.amount_entry_adjust(-1);
                false
            }
            InputAction::AmountSubmit => self.amount_entry_submit(),
            InputAction::AmountCancel => {
                self.amount_entry_cancel();
                false
            }
            InputAction::ToggleDiscard(i) => self.toggle_discard(i),
            InputAction::ConfirmExchange => self.confirm_exchange(),
        }
    }

    /// Called every tick: moves the round along while the user has nothing
    /// to decide (folded, broke, or between bot-only stages).
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        if self.scene != Scene::Table || self.action_error.is_some() {
            return;
        }
        let in_round = matches!(
            self.game.phase(),
            Phase::BettingRound | Phase::CardExchange | Phase::FinalBetting
        );
        if in_round && self.game.can_continue() && !self.awaiting_human() {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AppState {
        let mut app = AppState::default();
        app.apply_menu();
        app
    }

    #[test]
    fn actions_ignored_before_deal() {
        let mut app = table();
        assert!(!app.handle_input(InputAction::Call));
        assert!(!app.handle_input(InputAction::AmountOpen));
        assert_eq!(app.game.phase(), Phase::RoundStart);
    }

    #[test]
    fn call_moves_to_exchange() {
        let mut app = table();
        app.handle_input(InputAction::NextRound);
        assert!(app.can_bet());
        assert!(app.handle_input(InputAction::Call));
        if app.game.awaiting_input().is_some() {
            assert!(app.handle_input(InputAction::Call));
        }
        assert_eq!(app.game.phase(), Phase::CardExchange);
        assert_eq!(app.discard_marks().len(), 5);
    }

    #[test]
    fn fold_lets_bots_finish_the_round() {
        let mut app = table();
        app.handle_input(InputAction::NextRound);
        assert!(app.handle_input(InputAction::Fold));
        for _ in 0..4 {
            app.on_tick();
        }
        assert_eq!(app.game.phase(), Phase::RoundEnd);
        assert!(app.status().is_some());
    }

    #[test]
    fn bot_raise_after_check_asks_the_user_again() {
        use crate::cards::{parse_cards, CardCode};
        use crate::player::PlayerSnapshot;

        let seat = |name: &str, human: bool, hand: &str| PlayerSnapshot {
            name: name.to_string(),
            chips: 1000,
            human,
            folded: false,
            current_bet: 0,
            last_bet: 0,
            hand: parse_cards(hand).unwrap().into_iter().map(CardCode::from).collect(),
        };
        let mut app = table();
        app.handle_input(InputAction::NextRound);
        app.game
            .restore(&[seat("You", true, "2c 5d 8h Jc Kd"), seat("Bot 1", false, "Ah Ad As Ac 3s")])
            .unwrap();
        assert_eq!(app.to_call(), 0);

        assert!(app.handle_input(InputAction::Call));
        assert_eq!(app.game.phase(), Phase::BettingRound);
        assert_eq!(app.game.awaiting_input(), Some(AppState::HUMAN_SEAT));
        assert!(app.can_bet());
        assert_eq!(app.to_call(), 100);
        assert_eq!(app.game.players()[0].chips(), 1000);
        assert!(app.status().is_some_and(|s| s.contains("100 to call")));

        assert!(app.handle_input(InputAction::Call));
        assert_eq!(app.game.phase(), Phase::CardExchange);
        assert_eq!(app.game.players()[0].chips(), 900);
    }

    #[test]
    fn zero_raise_is_rejected() {
        let mut app = table();
        app.handle_input(InputAction::NextRound);
        assert!(app.handle_input(InputAction::AmountOpen));
        app.handle_input(InputAction::AmountBackspace);
        app.handle_input(InputAction::AmountBackspace);
        app.handle_input(InputAction::AmountDigit(0));
        assert!(!app.handle_input(InputAction::AmountSubmit));
        assert!(app.amount_entry_error().is_some());
        assert_eq!(app.game.phase(), Phase::BettingRound);
    }
}
