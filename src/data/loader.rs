use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::TriviaError;
use crate::models::{Question, QuestionSet};

pub const DEFAULT_QUESTIONS_PATH: &str = "trivia.txt";
pub const DEFAULT_SEPARATOR: char = '|';

/// What to do with a line holding more than one separator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedLines {
    /// Fail the whole load.
    #[default]
    Reject,
    /// Drop the line and keep going.
    Skip,
}

/// Where questions come from. Re-read on every [`QuestionSource::load`].
#[derive(Debug, Clone)]
pub struct QuestionSource {
    path: PathBuf,
    separator: char,
    malformed: MalformedLines,
}

impl QuestionSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            separator: DEFAULT_SEPARATOR,
            malformed: MalformedLines::default(),
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_malformed_lines(mut self, policy: MalformedLines) -> Self {
        self.malformed = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the question file.
    ///
    /// Files ending in `.json` are read as an array of
    /// `{"prompt": .., "answer": ..}` objects, everything else as
    /// `prompt|answer` lines.
    pub fn load(&self) -> Result<QuestionSet, TriviaError> {
        let content = fs::read_to_string(&self.path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => TriviaError::MissingQuestionFile {
                path: self.path.clone(),
            },
            _ => TriviaError::Io(err),
        })?;

        let questions = if self.is_json() {
            parse_json(&content)?
        } else {
            parse_questions(&content, self.separator, self.malformed).map_err(
                |(line, content)| TriviaError::MalformedQuestionLine {
                    path: self.path.clone(),
                    line,
                    content,
                },
            )?
        };

        tracing::debug!(
            path = %self.path.display(),
            count = questions.len(),
            "loaded questions"
        );
        Ok(questions)
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

impl Default for QuestionSource {
    fn default() -> Self {
        Self::new(DEFAULT_QUESTIONS_PATH)
    }
}

/// Parse `prompt<sep>answer` lines.
///
/// Blank lines and lines without the separator are ignored. On a line with
/// more than one separator, `Reject` returns the 1-based line number and its
/// text as the error.
pub fn parse_questions(
    content: &str,
    separator: char,
    malformed: MalformedLines,
) -> Result<QuestionSet, (usize, String)> {
    let mut questions = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((prompt, answer)) = line.split_once(separator) else {
            continue;
        };

        if answer.contains(separator) {
            match malformed {
                MalformedLines::Reject => return Err((index + 1, line.to_string())),
                MalformedLines::Skip => {
                    tracing::warn!(line = index + 1, content = line, "skipping malformed question line");
                    continue;
                }
            }
        }

        questions.push(Question::new(prompt.trim(), answer.trim()));
    }

    Ok(QuestionSet::new(questions))
}

fn parse_json(content: &str) -> Result<QuestionSet, TriviaError> {
    let questions: Vec<Question> = serde_json::from_str(content)?;

    Ok(questions
        .into_iter()
        .map(|q| Question::new(q.prompt.trim(), q.answer.trim()))
        .collect::<Vec<_>>()
        .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_keeps_file_order_and_skips_blank_lines() {
        let set = parse_questions("Q1|A1\n\nQ2|A2\n", '|', MalformedLines::Reject).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set[0], Question::new("Q1", "A1"));
        assert_eq!(set[1], Question::new("Q2", "A2"));
    }

    #[test]
    fn test_parse_trims_fields() {
        let set = parse_questions("  2+2?  |  4 \r\n", '|', MalformedLines::Reject).unwrap();
        assert_eq!(set[0], Question::new("2+2?", "4"));
    }

    #[test]
    fn test_parse_skips_lines_without_separator() {
        let set = parse_questions("# heading\nQ1|A1\njust text\n", '|', MalformedLines::Reject)
            .unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set[0].prompt, "Q1");
    }

    #[test]
    fn test_parse_rejects_extra_separator() {
        let err = parse_questions("Q1|A1\nQ2|A2|B2\n", '|', MalformedLines::Reject).unwrap_err();
        assert_eq!(err, (2, "Q2|A2|B2".to_string()));
    }

    #[test]
    fn test_parse_skips_extra_separator_when_asked() {
        let set = parse_questions("Q1|A1\nQ2|A2|B2\nQ3|A3", '|', MalformedLines::Skip).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set[1].prompt, "Q3");
    }

    #[test]
    fn test_parse_custom_separator() {
        let set = parse_questions("Is a|b valid?;yes\n", ';', MalformedLines::Reject).unwrap();
        assert_eq!(set[0], Question::new("Is a|b valid?", "yes"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = QuestionSource::new(dir.path().join("trivia.txt"));
        let err = source.load().unwrap_err();
        assert!(matches!(err, TriviaError::MissingQuestionFile { .. }));
    }

    #[test]
    fn test_load_reports_malformed_line_with_path() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "trivia.txt", "a|b|c\n");
        let err = QuestionSource::new(&path).load().unwrap_err();
        match err {
            TriviaError::MalformedQuestionLine { path: p, line, .. } => {
                assert_eq!(p, path);
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_rereads_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "trivia.txt", "Q1|A1\n");
        let source = QuestionSource::new(&path);
        assert_eq!(source.load().unwrap().len(), 1);

        write_file(&dir, "trivia.txt", "Q1|A1\nQ2|A2\n");
        assert_eq!(source.load().unwrap().len(), 2);
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "trivia.json",
            r#"[{"prompt": " 2+2? ", "answer": "4"}, {"prompt": "Capital of France?", "answer": "Paris"}]"#,
        );
        let set = QuestionSource::new(path).load().unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set[0], Question::new("2+2?", "4"));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "trivia.json", "Q1|A1");
        let err = QuestionSource::new(path).load().unwrap_err();
        assert!(matches!(err, TriviaError::Json(_)));
    }
}
