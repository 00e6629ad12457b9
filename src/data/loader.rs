use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::QuestionBank;
use crate::models::{ChoiceError, ChoiceSet, Question, QuestionKind};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse question data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question data must contain at least one question")]
    Empty,
    #[error("question {number}: {source}")]
    InvalidChoices {
        number: usize,
        #[source]
        source: ChoiceError,
    },
}

#[derive(Deserialize)]
struct RawQuestion {
    #[serde(default)]
    kind: QuestionKind,
    prompt: String,
    explanation: String,
    choices: Vec<String>,
    correct_index: usize,
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<QuestionBank, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_questions(&json_content)
}

pub fn parse_questions(json: &str) -> Result<QuestionBank, LoadError> {
    let raw: Vec<RawQuestion> = serde_json::from_str(json)?;

    if raw.is_empty() {
        return Err(LoadError::Empty);
    }

    let questions = raw
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let choices = ChoiceSet::new(raw.choices, raw.correct_index).map_err(|source| {
                LoadError::InvalidChoices {
                    number: index + 1,
                    source,
                }
            })?;
            Ok(Question::new(raw.kind, raw.prompt, raw.explanation, choices))
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    Ok(QuestionBank::new(questions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_questions_defaults_kind() {
        let bank = parse_questions(
            r#"[
                {"prompt": "2 + 2?", "explanation": "Arithmetic.", "choices": ["3", "4"], "correct_index": 1},
                {"kind": "audio_multiple_choice", "prompt": "Name that tune", "explanation": "It was the bass line.", "choices": ["x"], "correct_index": 0}
            ]"#,
        )
        .unwrap();

        let questions: Vec<&Question> = bank.questions().collect();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].kind(), QuestionKind::TextMultipleChoice);
        assert_eq!(questions[0].choices().correct_label(), "4");
        assert_eq!(questions[1].kind(), QuestionKind::AudioMultipleChoice);
    }

    #[test]
    fn test_parse_questions_rejects_invalid_data() {
        assert!(matches!(parse_questions("[]"), Err(LoadError::Empty)));
        assert!(matches!(parse_questions("{"), Err(LoadError::Parse(_))));

        let err = parse_questions(
            r#"[{"prompt": "p", "explanation": "e", "choices": ["a", "b"], "correct_index": 2}]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidChoices {
                number: 1,
                source: ChoiceError::CorrectIndexOutOfRange { index: 2, len: 2 }
            }
        ));

        let err = parse_questions(
            r#"[{"prompt": "p", "explanation": "e", "choices": [], "correct_index": 0}]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidChoices {
                source: ChoiceError::Empty,
                ..
            }
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_questions_from_json("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.json"));
    }
}
