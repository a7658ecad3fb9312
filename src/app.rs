use std::collections::VecDeque;

use crate::backdrop::Backdrop;
use crate::data::QuestionSource;
use crate::game::{Game, GameEvent, Notice};

const MAX_ANSWER_LENGTH: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Playing,
    Result,
}

pub struct App {
    pub screen: Screen,
    game: Game,
    backdrop: Backdrop,
    input: String,
    question_text: String,
    score: usize,
    total: usize,
    notices: VecDeque<Notice>,
    status: Option<String>,
    started: bool,
}

impl App {
    pub fn new(source: QuestionSource, backdrop: Backdrop) -> Self {
        Self {
            screen: Screen::Welcome,
            game: Game::new(source),
            backdrop,
            input: String::new(),
            question_text: String::new(),
            score: 0,
            total: 0,
            notices: VecDeque::new(),
            status: None,
            started: false,
        }
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Notice currently on top of the screen, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    /// Why the last start attempt failed.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Whether any game has been started since launch.
    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn start_game(&mut self) {
        self.input.clear();
        self.question_text.clear();
        self.notices.clear();
        self.score = 0;

        match self.game.start() {
            Ok(()) => {
                self.status = None;
                self.started = true;
                self.total = self.game.total();
                self.screen = Screen::Playing;
                self.apply_events();
            }
            Err(err) => {
                self.total = 0;
                self.status = Some(err.to_string());
                self.screen = Screen::Welcome;
            }
        }
    }

    pub fn restart(&mut self) {
        self.start_game();
    }

    pub fn submit_answer(&mut self) {
        let input = std::mem::take(&mut self.input);
        if let Err(err) = self.game.submit(&input) {
            tracing::warn!("ignored submission: {}", err);
            return;
        }
        self.apply_events();
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    pub fn push_char(&mut self, c: char) {
        if self.input.chars().count() < MAX_ANSWER_LENGTH {
            self.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    fn apply_events(&mut self) {
        let events: Vec<GameEvent> = self.game.drain_events().collect();

        for event in events {
            match event {
                GameEvent::Notice(notice) => self.notices.push_back(notice),
                GameEvent::ScoreChanged(score) => self.score = score,
                GameEvent::QuestionShown(text) => self.question_text = text,
                GameEvent::Finished { score, total } => {
                    self.score = score;
                    self.total = total;
                    self.question_text.clear();
                    self.screen = Screen::Result;
                }
            }
        }
    }
}
