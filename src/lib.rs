//! tile-merge: rules engine for an n x n sliding-tile merge puzzle (2048-style)
//!
//! This crate provides:
//! - A square `Grid` of power-of-two tiles with a maintained free-slot count (`grid`)
//! - The single-line slide-and-merge pass shared by all four directions (`line`)
//! - Whole-grid moves (`moves`), random tile spawning (`spawn`) and win/loss checks (`status`)
//! - A `Game` aggregate tying those together, and a `Session` that drives one game
//!   against pluggable input and rendering
//!
//! Quick start:
//! ```
//! use tile_merge::game::Game;
//! use tile_merge::moves::Move;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut game = Game::new(4, 2048).unwrap();
//! game.spawn(&mut rng);
//! game.spawn(&mut rng);
//! let sum = game.grid().tile_sum();
//! if game.shift(Move::Left) {
//!     game.spawn(&mut rng);
//! }
//! assert!(game.grid().tile_sum() >= sum);
//! assert_eq!(game.grid().count_free(), game.grid().recount_free());
//! ```
//!
//! Full loop with a scripted player
//! ```
//! use tile_merge::config::GameConfig;
//! use tile_merge::game::Game;
//! use tile_merge::moves::Move;
//! use tile_merge::session::{Command, InputSource, Renderer, Session, SessionError, SessionState};
//!
//! struct Cycle(usize);
//! impl InputSource for Cycle {
//!     fn next_command(&mut self) -> Result<Command, SessionError> {
//!         self.0 += 1;
//!         Ok(if self.0 > 200 { Command::Quit } else { Command::Move(Move::ALL[self.0 % 4]) })
//!     }
//! }
//!
//! struct Silent;
//! impl Renderer for Silent {
//!     fn render(&mut self, _: &Game, _: SessionState) -> Result<(), SessionError> { Ok(()) }
//! }
//!
//! let cfg = GameConfig { seed: Some(123), ..GameConfig::default() };
//! let mut session = Session::from_config(&cfg).unwrap();
//! let end = session.run(&mut Cycle(0), &mut Silent).unwrap();
//! assert!(end.is_terminal());
//! ```
//!
pub mod config;
pub mod game;
pub mod grid;
pub mod line;
pub mod moves;
pub mod session;
pub mod spawn;
pub mod status;
