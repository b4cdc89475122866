//! blackjack-rs: single-deck blackjack for one to seven players against the house.
//!
//! Goals:
//! - Card, hand and deck types with exact blackjack totals
//! - A round engine that walks the same phases every time and reports the result
//! - No panics at the table; running out of cards is announced, not fatal
//!
//! ## Quick start: play a round without a terminal
//! ```
//! use blackjack_rs::config::TableConfig;
//! use blackjack_rs::events::TableEvent;
//! use blackjack_rs::game::Game;
//! use blackjack_rs::participant::{Participant, ScriptedPort};
//!
//! let config = TableConfig::new(["Ann", "Bo"]).unwrap().with_seed(42);
//! let mut game = Game::new(&config);
//! let mut events: Vec<TableEvent> = Vec::new();
//! // Ann stands right away; Bo takes one card and stands.
//! let mut port = ScriptedPort::new(["n", "y", "n"]);
//! let report = game.play_round(&mut port, &mut events);
//! assert_eq!(report.seats.len(), 2);
//! assert!(game.players().iter().all(|p| p.hand().is_empty()));
//! ```
//!
//! ## Console
//! Play at the terminal with:
//! ```sh
//! cargo run --bin blackjack
//! ```

pub mod cards;
pub mod config;
pub mod console;
pub mod deck;
pub mod events;
pub mod game;
pub mod hand;
pub mod participant;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
