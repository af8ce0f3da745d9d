use crate::config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
use crate::hand::{MAX_HAND_SIZE, MIN_HAND_SIZE};

use super::AppState;

const CHIP_STEP: u64 = 100;
const MAX_BETTING_ROUNDS: u32 = 5;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    HandSize,
    Players,
    StartingChips,
    BettingRounds,
}

const MENU_ITEMS: [MenuItem; 4] =
    [MenuItem::HandSize, MenuItem::Players, MenuItem::StartingChips, MenuItem::BettingRounds];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::HandSize => format!("Hand Size: {}", app.cfg_hand_size),
            MenuItem::Players => format!("Players: {}", app.cfg_num_players),
            MenuItem::StartingChips => format!("Starting Chips: {}", app.cfg_starting_chips),
            MenuItem::BettingRounds => format!("Betting Passes: {}", app.cfg_betting_rounds),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::HandSize => {
                if app.cfg_hand_size < MAX_HAND_SIZE {
                    app.cfg_hand_size += 1;
                }
            }
            MenuItem::Players => {
                if app.cfg_num_players < MAX_PLAYERS {
                    app.cfg_num_players += 1;
                }
            }
            MenuItem::StartingChips => {
                app.cfg_starting_chips = app.cfg_starting_chips.saturating_add(CHIP_STEP);
            }
            MenuItem::BettingRounds => {
                if app.cfg_betting_rounds < MAX_BETTING_ROUNDS {
                    app.cfg_betting_rounds += 1;
                }
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::HandSize => {
                if app.cfg_hand_size > MIN_HAND_SIZE {
                    app.cfg_hand_size -= 1;
                }
            }
            MenuItem::Players => {
                if app.cfg_num_players > MIN_PLAYERS {
                    app.cfg_num_players -= 1;
                }
            }
            MenuItem::StartingChips => {
                app.cfg_starting_chips =
                    app.cfg_starting_chips.saturating_sub(CHIP_STEP).max(CHIP_STEP);
            }
            MenuItem::BettingRounds => {
                if app.cfg_betting_rounds > 1 {
                    app.cfg_betting_rounds -= 1;
                }
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        let cfg = *self.game.config();
        self.menu_index = 0;
        self.cfg_hand_size = cfg.hand_size();
        self.cfg_num_players = self.game.players().len().max(MIN_PLAYERS);
        self.cfg_starting_chips = cfg.starting_chips();
        self.cfg_betting_rounds = cfg.betting_rounds();
        self.set_menu_error(None);
        self.scene = super::Scene::Menu;
    }

    /// Build a fresh table from the edited values. Invalid values keep the
    /// menu open with the error shown.
    pub fn apply_menu(&mut self) {
        let config = match GameConfig::new(
            self.cfg_hand_size,
            self.cfg_num_players,
            self.cfg_starting_chips,
            self.cfg_betting_rounds,
        ) {
            Ok(cfg) => cfg,
            Err(err) => {
                self.set_menu_error(Some(err.to_string()));
                return;
            }
        };
        match Self::seat_table(config, self.cfg_num_players) {
            Ok(game) => self.game = game,
            Err(err) => {
                self.set_menu_error(Some(err.to_string()));
                return;
            }
        }
        tracing::info!(?config, "new table");
        self.set_menu_error(None);
        self.reset_table_state();
        self.scene = super::Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
