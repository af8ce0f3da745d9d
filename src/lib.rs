//! draw-poker: rules engine for five-card-style draw poker
//!
//! Goals:
//! - Deterministic evaluation and play for hands of 1 to 10 cards
//! - A phase-driven round: deal, bet, exchange, bet, showdown, split the pot
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate a hand
//! ```
//! use draw_poker::cards::parse_cards;
//! use draw_poker::evaluator::{evaluate, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th").unwrap();
//! let eval = evaluate(&cards);
//! assert_eq!(eval.category, Category::RoyalFlush);
//! assert_eq!(eval.score(), 100);
//!
//! let pair = evaluate(&parse_cards("9s 9d 4c 3h 2s").unwrap());
//! assert_eq!(pair.category, Category::Pair);
//! assert!(eval > pair);
//! ```
//!
//! ## Playing a round
//! ```
//! use draw_poker::agents::QueuedInput;
//! use draw_poker::config::GameConfig;
//! use draw_poker::game::Game;
//!
//! let mut game = Game::with_seed(GameConfig::three_card(), 1);
//! game.initialize_game(&["North", "East", "South"]).unwrap();
//! let outcome = game.play_round(&mut QueuedInput::new()).unwrap();
//! assert_eq!(outcome.round, 1);
//! assert_eq!(game.pot(), 0);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin draw-poker
//! ```

pub mod agents;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod phase;
pub mod player;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
