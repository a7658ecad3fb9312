//! Answer-checking state machine.
//!
//! A [`Game`] owns the question set and the current [`GameSession`]. Every
//! operation queues [`GameEvent`]s that the caller drains with
//! [`Game::drain_events`] and renders however it likes.

mod events;
mod session;

use std::collections::VecDeque;

pub use events::{summary, GameEvent, Notice, SubmitOutcome};
pub use session::{GameSession, Phase};

use crate::data::QuestionSource;
use crate::error::{GameError, TriviaError};
use crate::models::{Question, QuestionSet};

pub struct Game {
    source: QuestionSource,
    questions: QuestionSet,
    session: GameSession,
    phase: Phase,
    events: VecDeque<GameEvent>,
}

impl Game {
    pub fn new(source: QuestionSource) -> Self {
        Self {
            source,
            questions: QuestionSet::default(),
            session: GameSession::new(),
            phase: Phase::NotStarted,
            events: VecDeque::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn score(&self) -> usize {
        self.session.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.questions.get(self.session.current_index)
    }

    /// Header for the current question, numbered from 1.
    pub fn question_text(&self) -> Option<String> {
        self.current_question().map(|question| {
            format!(
                "Question {}: {}",
                self.session.current_index + 1,
                question.prompt
            )
        })
    }

    /// Reload the questions and begin a fresh session.
    ///
    /// On failure the game is left in [`Phase::NotStarted`] with nothing from
    /// the previous session visible.
    pub fn start(&mut self) -> Result<(), TriviaError> {
        match self.source.load() {
            Ok(questions) => {
                self.start_with(questions);
                Ok(())
            }
            Err(err) => {
                tracing::error!(path = %self.source.path().display(), "failed to load questions: {}", err);
                self.questions = QuestionSet::default();
                self.session = GameSession::new();
                self.phase = Phase::NotStarted;
                self.events.clear();
                Err(err)
            }
        }
    }

    pub fn restart(&mut self) -> Result<(), TriviaError> {
        self.start()
    }

    /// Begin a session over an already loaded set.
    pub fn start_with(&mut self, questions: QuestionSet) {
        tracing::info!(total = questions.len(), "game started");

        self.questions = questions;
        self.session = GameSession::new();
        self.phase = Phase::Playing;
        self.events.clear();
        self.events.push_back(GameEvent::ScoreChanged(0));
        self.show_next();
    }

    /// Judge one answer. Only valid while [`Phase::Playing`].
    pub fn submit(&mut self, raw_input: &str) -> Result<SubmitOutcome, GameError> {
        let Some(question) = self.current_question() else {
            return Err(GameError::NotPlaying);
        };

        let trimmed = raw_input.trim();
        let answer = question.answer.clone();

        let (outcome, notice) = if trimmed.is_empty() {
            if self.session.awaiting_skip_confirmation {
                (SubmitOutcome::Skipped, Notice::Skipped { answer })
            } else {
                (SubmitOutcome::Warned, Notice::EnterAnswer)
            }
        } else if question.accepts(trimmed) {
            (SubmitOutcome::Correct, Notice::Correct)
        } else {
            (SubmitOutcome::Incorrect, Notice::Incorrect { answer })
        };

        tracing::debug!(
            index = self.session.current_index,
            ?outcome,
            "answer submitted"
        );
        self.events.push_back(GameEvent::Notice(notice));

        if outcome.advances() {
            self.session.advance(outcome == SubmitOutcome::Correct);
            self.events
                .push_back(GameEvent::ScoreChanged(self.session.score));
            self.show_next();
        } else {
            self.session.awaiting_skip_confirmation = true;
        }

        Ok(outcome)
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    fn show_next(&mut self) {
        match self.question_text() {
            Some(text) => self.events.push_back(GameEvent::QuestionShown(text)),
            None => {
                self.phase = Phase::Finished;
                tracing::info!(score = self.session.score, total = self.total(), "game finished");
                self.events.push_back(GameEvent::Finished {
                    score: self.session.score,
                    total: self.total(),
                });
            }
        }
    }
}
