//! One game from first spawn to a terminal state.
//!
//! The session only drives the rules engine. Reading commands and drawing the
//! grid are left to an [`InputSource`] and a [`Renderer`].

use std::io;

use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::config::{ConfigError, GameConfig};
use crate::game::Game;
use crate::moves::Move;
use crate::spawn::TileSource;

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Playing,
    Won,
    Lost,
    Quit,
}

impl SessionState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != SessionState::Playing
    }

    /// Closing line shown to the player, if the game has ended.
    pub fn outcome_message(self) -> Option<&'static str> {
        match self {
            SessionState::Playing => None,
            SessionState::Won => Some("You win!"),
            SessionState::Lost => Some("Game over."),
            SessionState::Quit => Some("Quit."),
        }
    }
}

/// Blocking supplier of player commands.
///
/// Implementations keep reading until they have a real command; they never
/// hand back a "nothing happened" value.
pub trait InputSource {
    fn next_command(&mut self) -> Result<Command, SessionError>;
}

/// Draws the game. Gets read-only access and may not affect play.
pub trait Renderer {
    fn render(&mut self, game: &Game, state: SessionState) -> Result<(), SessionError>;
}

pub struct Session<S: TileSource = StdRng> {
    game: Game,
    source: S,
    state: SessionState,
    moves: u32,
}

impl Session<StdRng> {
    /// Session seeded from `config.seed`, or from OS entropy when unset.
    pub fn from_config(config: &GameConfig) -> Result<Self, SessionError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Session::new(config, rng)
    }
}

impl<S: TileSource> Session<S> {
    /// Build the game and place the first tile.
    pub fn new(config: &GameConfig, source: S) -> Result<Self, SessionError> {
        config.validate()?;
        let game = config.build_game()?;
        Ok(Session::with_game(game, source))
    }

    /// Start a session on an existing game, placing one tile.
    pub fn with_game(mut game: Game, mut source: S) -> Self {
        game.spawn(&mut source);
        info!("new {0}x{0} game, target {1}", game.size(), game.target());
        Session { game, source, state: SessionState::Playing, moves: 0 }
    }

    #[inline]
    pub fn game(&self) -> &Game { &self.game }

    #[inline]
    pub fn state(&self) -> SessionState { self.state }

    /// Number of moves that changed the grid.
    #[inline]
    pub fn moves(&self) -> u32 { self.moves }

    /// Apply one command. Does nothing once the session has ended.
    ///
    /// A move that changes the grid is followed by a spawn. Victory is checked
    /// before defeat.
    pub fn step(&mut self, command: Command) -> SessionState {
        if self.state.is_terminal() {
            return self.state;
        }
        match command {
            Command::Quit => self.state = SessionState::Quit,
            Command::Move(dir) => {
                if self.game.make_move(dir, &mut self.source) {
                    self.moves += 1;
                } else {
                    debug!("move {} blocked", dir);
                }
                if self.game.is_victory() {
                    self.state = SessionState::Won;
                } else if self.game.is_defeat() {
                    self.state = SessionState::Lost;
                }
            }
        }
        if self.state.is_terminal() {
            info!(
                "session ended: {:?} after {} moves, highest tile {}",
                self.state,
                self.moves,
                self.game.grid().highest_tile()
            );
        }
        self.state
    }

    /// Render, then read and apply commands until the session ends. The final
    /// state is rendered too.
    pub fn run<I, R>(&mut self, input: &mut I, renderer: &mut R) -> Result<SessionState, SessionError>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        renderer.render(&self.game, self.state)?;
        while !self.state.is_terminal() {
            let command = input.next_command()?;
            self.step(command);
            renderer.render(&self.game, self.state)?;
        }
        Ok(self.state)
    }
}
