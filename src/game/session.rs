/// Where a game is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    NotStarted,
    Playing,
    Finished,
}

/// Mutable state of one play-through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameSession {
    pub current_index: usize,
    pub score: usize,
    /// Set after an empty answer; the next empty answer skips the question.
    pub awaiting_skip_confirmation: bool,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the next question, optionally awarding a point.
    pub(crate) fn advance(&mut self, correct: bool) {
        if correct {
            self.score += 1;
        }
        self.current_index += 1;
        self.awaiting_skip_confirmation = false;
    }
}
