mod loader;

pub use loader::{parse_questions, MalformedLines, QuestionSource, DEFAULT_QUESTIONS_PATH, DEFAULT_SEPARATOR};
