//! Load-time errors.
//!
//! Content errors are fatal: a game cannot start from a configuration that
//! fails to load. Runtime rule violations are not errors at all; the
//! responsible operation simply does nothing.

use thiserror::Error;

/// Error raised while loading game content.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Malformed JSON, missing required field, unknown tag or enum name, or a
    /// bad mana string. serde reports line and column.
    #[error("invalid game data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not read game data: {0}")]
    Io(#[from] std::io::Error),

    /// A deck list names a card that is not in the card table.
    #[error("deck for player {player} names unknown card {name:?}")]
    UnknownCard { player: usize, name: String },

    #[error("expected 2 player entries, found {found}")]
    PlayerCount { found: usize },

    #[error("expected 2 deck lists, found {found}")]
    DeckCount { found: usize },
}

/// Result alias for content loading.
pub type LoadResult<T> = Result<T, LoadError>;
