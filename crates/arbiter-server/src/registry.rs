//! In-memory game sessions.
//!
//! Every game sits behind its own mutex; the map of games is behind a
//! read-write lock that is only held long enough to look up or insert an
//! entry. Requests for different games never wait on each other.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use tracing::{info, warn};
use uuid::Uuid;

use arbiter_core::{Board, Color, Game, GameConfig};

use crate::error::ServerError;

/// Identifier of a registered game.
pub type GameId = Uuid;

/// A game shared between request handlers.
pub type SharedGame = Arc<Mutex<Game>>;

/// Every live game: the default one plus any created through `/games`.
#[derive(Debug)]
pub struct GameRegistry {
    default_game: SharedGame,
    games: RwLock<HashMap<GameId, SharedGame>>,
    config: GameConfig,
}

impl GameRegistry {
    pub fn new(config: GameConfig) -> Self {
        Self {
            default_game: Arc::new(Mutex::new(Game::with_config(config))),
            games: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// The game served by the unscoped `/board-state` and `/move` routes.
    pub fn default_game(&self) -> SharedGame {
        Arc::clone(&self.default_game)
    }

    /// Register a new game at the start position.
    pub fn create(&self) -> (GameId, SharedGame) {
        self.insert(Game::with_config(self.config))
    }

    /// Register a new game from a custom position.
    pub fn create_from(&self, board: Board, turn: Color) -> (GameId, SharedGame) {
        self.insert(Game::from_position(board, turn).configured(self.config))
    }

    fn insert(&self, game: Game) -> (GameId, SharedGame) {
        let id = Uuid::new_v4();
        let shared = Arc::new(Mutex::new(game));
        let mut games = self.games.write().unwrap_or_else(|poisoned| {
            warn!("game map lock poisoned; recovering");
            poisoned.into_inner()
        });
        games.insert(id, Arc::clone(&shared));
        info!(game_id = %id, total = games.len(), "game created");
        (id, shared)
    }

    /// Look up a game by id.
    pub fn get(&self, id: GameId) -> Result<SharedGame, ServerError> {
        let games = self.games.read().unwrap_or_else(PoisonError::into_inner);
        games
            .get(&id)
            .map(Arc::clone)
            .ok_or(ServerError::GameNotFound { id })
    }

    /// Number of games created through `/games`.
    pub fn len(&self) -> usize {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lock a game, recovering from a handler that panicked while holding it.
///
/// `Game::play` commits only after validation succeeds, so the state behind
/// a poisoned lock is still a consistent position.
pub fn lock_game(game: &Mutex<Game>) -> MutexGuard<'_, Game> {
    game.lock().unwrap_or_else(|poisoned| {
        warn!("game lock poisoned; recovering");
        poisoned.into_inner()
    })
}
