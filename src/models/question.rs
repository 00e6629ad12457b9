use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a question is presented and answered.
///
/// Only [`QuestionKind::TextMultipleChoice`] has a renderer. The media kinds
/// are reserved so question data can name them, but selecting one stops the
/// quiz with [`crate::QuizError::NotImplemented`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    #[default]
    TextMultipleChoice,
    ImageMultipleChoice,
    VideoMultipleChoice,
    AudioMultipleChoice,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionKind::TextMultipleChoice => "text multiple choice",
            QuestionKind::ImageMultipleChoice => "image multiple choice",
            QuestionKind::VideoMultipleChoice => "video multiple choice",
            QuestionKind::AudioMultipleChoice => "audio multiple choice",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("a question needs at least one choice")]
    Empty,
    #[error("correct index {index} is out of range for {len} choices")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

/// The ordered answer labels of a question together with the correct one.
///
/// Always non-empty, and `correct_index` always points into `labels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSet {
    labels: Vec<String>,
    correct_index: usize,
}

impl ChoiceSet {
    pub fn new(labels: Vec<String>, correct_index: usize) -> Result<Self, ChoiceError> {
        if labels.is_empty() {
            return Err(ChoiceError::Empty);
        }
        if correct_index >= labels.len() {
            return Err(ChoiceError::CorrectIndexOutOfRange {
                index: correct_index,
                len: labels.len(),
            });
        }
        Ok(Self {
            labels,
            correct_index,
        })
    }

    /// Builds a four-way choice from compiled-in data.
    pub(crate) fn four(labels: [&str; 4], correct_index: usize) -> Self {
        debug_assert!(
            correct_index < labels.len(),
            "correct index {correct_index} out of range for {labels:?}"
        );
        Self {
            labels: labels.iter().map(|label| label.to_string()).collect(),
            correct_index,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn correct_label(&self) -> &str {
        &self.labels[self.correct_index]
    }
}

/// A single quiz question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    kind: QuestionKind,
    prompt: String,
    explanation: String,
    choices: ChoiceSet,
}

impl Question {
    pub fn new(
        kind: QuestionKind,
        prompt: impl Into<String>,
        explanation: impl Into<String>,
        choices: ChoiceSet,
    ) -> Self {
        Self {
            kind,
            prompt: prompt.into(),
            explanation: explanation.into(),
            choices,
        }
    }

    /// Shorthand for a text multiple choice question.
    pub fn text(
        prompt: impl Into<String>,
        explanation: impl Into<String>,
        choices: ChoiceSet,
    ) -> Self {
        Self::new(QuestionKind::TextMultipleChoice, prompt, explanation, choices)
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn choices(&self) -> &ChoiceSet {
        &self.choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_choice_set_rejects_bad_input() {
        assert_eq!(ChoiceSet::new(Vec::new(), 0), Err(ChoiceError::Empty));
        assert_eq!(
            ChoiceSet::new(labels(&["a", "b"]), 2),
            Err(ChoiceError::CorrectIndexOutOfRange { index: 2, len: 2 })
        );
        let choices = ChoiceSet::new(labels(&["a", "b"]), 1).unwrap();
        assert_eq!(choices.correct_label(), "b");
        assert_eq!(choices.len(), 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn test_four_rejects_out_of_range_index_in_debug() {
        ChoiceSet::four(["a", "b", "c", "d"], 4);
    }

    #[test]
    fn test_kind_deserializes_snake_case() {
        let kind: QuestionKind = serde_json::from_str("\"video_multiple_choice\"").unwrap();
        assert_eq!(kind, QuestionKind::VideoMultipleChoice);
        assert_eq!(QuestionKind::default(), QuestionKind::TextMultipleChoice);
    }
}
