//! # shoggoth-engine: Five-Card Draw Core
//!
//! Rules engine for heads-up five-card draw poker, played for "sanity"
//! against a computer opponent. The crate owns the authoritative game state;
//! hosts (a CLI, a server) drive it and persist it as JSON.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), text parsing
//! - [`deck`] - Shuffled 52-card deck and the session RNG
//! - [`hand`] - Five-card hand evaluation and comparison
//! - [`player`] - Seats, players and declared actions
//! - [`rules`] - Action validation and betting-round closure
//! - [`opponent`] - The seam the computer player plugs into
//! - [`game`] - Round state machine and phase vocabulary
//! - [`esp`] - The between-rounds ESP minigame
//! - [`logger`] - Round records and JSONL history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use shoggoth_engine::cards::parse_cards;
//! use shoggoth_engine::hand::{compare_hands, Showdown};
//!
//! let flush = parse_cards("2h 7h 9h Jh Kh").unwrap();
//! let straight = parse_cards("5s 6d 7c 8h 9s").unwrap();
//! assert_eq!(compare_hands(&flush, &straight).unwrap(), Showdown::Hand1Wins);
//! ```
//!
//! ## Driving a Round
//!
//! Randomness is always supplied by the caller, so a seeded session replays
//! identically:
//!
//! ```rust
//! use shoggoth_engine::deck::session_rng;
//! use shoggoth_engine::game::{GameState, Phase};
//! use shoggoth_engine::player::PlayerAction;
//!
//! let mut rng = session_rng(Some(42));
//! let mut game = GameState::new(&mut rng);
//! game.collect_ante(10).unwrap();
//! game.player_action(PlayerAction::Check).unwrap();
//! assert_eq!(game.phase(), Phase::PreDrawBetting);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod esp;
pub mod game;
pub mod hand;
pub mod logger;
pub mod opponent;
pub mod player;
pub mod rules;
