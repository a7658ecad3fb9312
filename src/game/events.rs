use std::fmt;

/// Feedback shown to the player after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    EnterAnswer,
    Correct,
    Incorrect { answer: String },
    Skipped { answer: String },
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::EnterAnswer => "No answer",
            Notice::Correct => "Correct!",
            Notice::Incorrect { .. } => "Wrong!",
            Notice::Skipped { .. } => "Skipped",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::EnterAnswer => write!(f, "Please enter an answer before continuing."),
            Notice::Correct => write!(f, "You answered correctly!"),
            Notice::Incorrect { answer } => write!(f, "The correct answer was: {}", answer),
            Notice::Skipped { answer } => {
                write!(f, "You skipped this question. The correct answer was: {}", answer)
            }
        }
    }
}

/// Output of the game for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Notice(Notice),
    ScoreChanged(usize),
    QuestionShown(String),
    Finished { score: usize, total: usize },
}

/// How a single submission was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty answer, first time for this question.
    Warned,
    Correct,
    Incorrect,
    Skipped,
}

impl SubmitOutcome {
    pub fn advances(self) -> bool {
        !matches!(self, SubmitOutcome::Warned)
    }
}

/// Final score line for the result screen.
pub fn summary(score: usize, total: usize) -> String {
    format!("Game over!\nYou scored {} out of {} points.", score, total)
}
