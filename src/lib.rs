//! # trivia
//!
//! A terminal trivia game. Questions come from a `prompt|answer` text file,
//! answers are typed in and matched exactly, ignoring case and surrounding
//! whitespace.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia::{Settings, Trivia, TriviaError};
//!
//! fn main() -> Result<(), TriviaError> {
//!     // Reads trivia.txt and background.png from the working directory
//!     let trivia = Trivia::new(Settings::default())?;
//!
//!     trivia.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod backdrop;
mod config;
mod data;
mod error;
mod game;
pub mod logging;
mod models;
pub mod terminal;
mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub use app::{App, Screen};
pub use backdrop::{Backdrop, DEFAULT_BACKGROUND_PATH};
pub use config::Settings;
pub use data::{
    parse_questions, MalformedLines, QuestionSource, DEFAULT_QUESTIONS_PATH, DEFAULT_SEPARATOR,
};
pub use error::{GameError, TriviaError};
pub use game::{summary, Game, GameEvent, GameSession, Notice, Phase, SubmitOutcome};
pub use models::{Question, QuestionSet};
pub use ui::render;

/// A trivia game ready to run in the terminal.
pub struct Trivia {
    app: App,
}

impl Trivia {
    /// Load the background and check that the question file is usable.
    ///
    /// Either failure is fatal: the game never opens.
    pub fn new(settings: Settings) -> Result<Self, TriviaError> {
        let backdrop = match &settings.background {
            Some(path) => Backdrop::load(path)?,
            None => Backdrop::blank(),
        };

        let source = settings.question_source();
        source.load()?;

        Ok(Self {
            app: App::new(source, backdrop),
        })
    }

    /// Take over the terminal until the player quits.
    pub fn run(mut self) -> Result<(), TriviaError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::GameTerminal, app: &mut App) -> Result<(), TriviaError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key) {
                tracing::info!("player quit");
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    // Notices are modal.
    if app.notice().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc) {
            app.dismiss_notice();
        }
        return false;
    }

    match app.screen {
        Screen::Welcome => handle_welcome_input(app, key.code),
        Screen::Playing => handle_playing_input(app, key),
        Screen::Result => handle_result_input(app, key.code),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_game();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        // Escape stays bound after the first game, even if a restart failed.
        KeyCode::Esc => app.has_started(),
        _ => false,
    }
}

fn handle_playing_input(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            app.submit_answer();
            false
        }
        KeyCode::Backspace => {
            app.pop_char();
            false
        }
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            false
        }
        KeyCode::Char(c) => {
            app.push_char(c);
            false
        }
        KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}
