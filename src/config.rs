//! Runtime settings.

use std::path::PathBuf;

use crate::backdrop::DEFAULT_BACKGROUND_PATH;
use crate::data::{MalformedLines, QuestionSource, DEFAULT_QUESTIONS_PATH, DEFAULT_SEPARATOR};

/// Where assets live and how the question file is parsed.
///
/// The defaults read `trivia.txt` and `background.png` from the working
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub questions: PathBuf,
    /// `None` runs without a background and uses the whole terminal.
    pub background: Option<PathBuf>,
    pub separator: char,
    pub malformed: MalformedLines,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            questions: PathBuf::from(DEFAULT_QUESTIONS_PATH),
            background: Some(PathBuf::from(DEFAULT_BACKGROUND_PATH)),
            separator: DEFAULT_SEPARATOR,
            malformed: MalformedLines::default(),
        }
    }
}

impl Settings {
    pub fn question_source(&self) -> QuestionSource {
        QuestionSource::new(&self.questions)
            .with_separator(self.separator)
            .with_malformed_lines(self.malformed)
    }
}
