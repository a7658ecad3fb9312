//! Error types shared across the crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading game assets.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TriviaError {
    #[error("background image not found: {}", path.display())]
    MissingBackgroundAsset { path: PathBuf },
    #[error("question file not found: {}", path.display())]
    MissingQuestionFile { path: PathBuf },
    #[error("{}:{line}: expected one separator in {content:?}", path.display())]
    MalformedQuestionLine {
        path: PathBuf,
        line: usize,
        content: String,
    },
    #[error("unreadable background image: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid JSON question file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors raised by the game state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("no game in progress")]
    NotPlaying,
}
