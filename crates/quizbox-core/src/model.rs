//! Core data model types for quizbox.
//!
//! A [`Question`] is a closed set of variants. Each variant knows how to
//! list its own selectable options and how to judge a submitted
//! [`AnswerValue`], so callers never branch on the variant themselves.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;

/// The value an option resolves to when it is picked.
///
/// Multiple-choice options produce [`AnswerValue::Index`] and true/false
/// options produce [`AnswerValue::Bool`]. [`AnswerValue::Text`] carries raw
/// input from a presentation layer; it is coerced when judged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Index(usize),
    Text(String),
}

impl AnswerValue {
    /// Numeric view of the value, if it has one.
    ///
    /// Booleans count as 0/1. Text is trimmed and accepted when it is a
    /// non-negative whole number (`"2"`, `"2.0"`). Empty text has no numeric
    /// view; it is not read as 0.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            AnswerValue::Index(i) => Some(*i),
            AnswerValue::Bool(b) => Some(usize::from(*b)),
            AnswerValue::Text(s) => parse_whole_number(s),
        }
    }

    /// Truth view of the value.
    ///
    /// Indices are true when non-zero. Text is `true`/`false`
    /// (case-insensitive), a number (true when non-zero), or otherwise true
    /// when non-empty. This is not string truthiness: `"false"` and `"0"`
    /// are false even though they are non-empty.
    pub fn as_bool(&self) -> bool {
        match self {
            AnswerValue::Bool(b) => *b,
            AnswerValue::Index(i) => *i != 0,
            AnswerValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.eq_ignore_ascii_case("true") {
                    true
                } else if trimmed.eq_ignore_ascii_case("false") {
                    false
                } else if let Ok(n) = trimmed.parse::<f64>() {
                    n != 0.0
                } else {
                    !trimmed.is_empty()
                }
            }
        }
    }
}

fn parse_whole_number(s: &str) -> Option<usize> {
    let trimmed = s.trim();
    if let Ok(i) = trimmed.parse::<usize>() {
        return Some(i);
    }
    let f = trimmed.parse::<f64>().ok()?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= usize::MAX as f64 {
        Some(f as usize)
    } else {
        None
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Bool(b) => write!(f, "{b}"),
            AnswerValue::Index(i) => write!(f, "{i}"),
            AnswerValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for AnswerValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(i) = trimmed.parse::<usize>() {
            return Ok(AnswerValue::Index(i));
        }
        if trimmed.eq_ignore_ascii_case("true") {
            return Ok(AnswerValue::Bool(true));
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Ok(AnswerValue::Bool(false));
        }
        Ok(AnswerValue::Text(s.to_string()))
    }
}

impl From<usize> for AnswerValue {
    fn from(i: usize) -> Self {
        AnswerValue::Index(i)
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        AnswerValue::Bool(b)
    }
}

/// One selectable option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Text shown to the user.
    pub label: String,
    /// Value handed back to the quiz when this option is picked.
    pub value: AnswerValue,
}

/// Display labels for the two true/false options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceLabels {
    pub true_label: String,
    pub false_label: String,
}

impl Default for ChoiceLabels {
    fn default() -> Self {
        Self {
            true_label: "True".to_string(),
            false_label: "False".to_string(),
        }
    }
}

/// The variant-specific part of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Pick one of several labelled choices.
    MultipleChoice {
        choices: Vec<String>,
        correct_index: usize,
    },
    /// Decide whether the statement is true.
    TrueFalse { is_true: bool },
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::MultipleChoice { .. } => write!(f, "multiple-choice"),
            QuestionKind::TrueFalse { .. } => write!(f, "true-false"),
        }
    }
}

/// A single quiz item. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    text: String,
    points: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    explanation: String,
    #[serde(flatten)]
    kind: QuestionKind,
}

impl Question {
    /// Build a multiple-choice question worth one point.
    ///
    /// Needs at least two choices and a `correct_index` inside them.
    pub fn multiple_choice<I, S>(
        text: impl Into<String>,
        choices: I,
        correct_index: usize,
    ) -> Result<Self, QuizError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        if choices.len() < 2 {
            return Err(QuizError::InvalidQuestion(format!(
                "multiple-choice question needs at least 2 choices, got {}",
                choices.len()
            )));
        }
        if correct_index >= choices.len() {
            return Err(QuizError::InvalidQuestion(format!(
                "correct index {correct_index} is out of range for {} choices",
                choices.len()
            )));
        }
        Self::build(
            text.into(),
            QuestionKind::MultipleChoice {
                choices,
                correct_index,
            },
        )
    }

    /// Build a true/false question worth one point.
    pub fn true_false(text: impl Into<String>, is_true: bool) -> Result<Self, QuizError> {
        Self::build(text.into(), QuestionKind::TrueFalse { is_true })
    }

    fn build(text: String, kind: QuestionKind) -> Result<Self, QuizError> {
        if text.trim().is_empty() {
            return Err(QuizError::InvalidQuestion("question text is empty".into()));
        }
        Ok(Self {
            text,
            points: 1,
            explanation: String::new(),
            kind,
        })
    }

    /// Set the weight of this question. Zero is rejected.
    pub fn with_points(mut self, points: u32) -> Result<Self, QuizError> {
        if points == 0 {
            return Err(QuizError::InvalidQuestion(
                "points must be positive".into(),
            ));
        }
        self.points = points;
        Ok(self)
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Options in presentation order, using the default true/false labels.
    pub fn options(&self) -> Vec<AnswerOption> {
        self.options_labeled(&ChoiceLabels::default())
    }

    /// Options in presentation order.
    ///
    /// True/false questions always yield `true` first and `false` second.
    pub fn options_labeled(&self, labels: &ChoiceLabels) -> Vec<AnswerOption> {
        match &self.kind {
            QuestionKind::MultipleChoice { choices, .. } => choices
                .iter()
                .enumerate()
                .map(|(i, label)| AnswerOption {
                    label: label.clone(),
                    value: AnswerValue::Index(i),
                })
                .collect(),
            QuestionKind::TrueFalse { .. } => vec![
                AnswerOption {
                    label: labels.true_label.clone(),
                    value: AnswerValue::Bool(true),
                },
                AnswerOption {
                    label: labels.false_label.clone(),
                    value: AnswerValue::Bool(false),
                },
            ],
        }
    }

    /// Judge a submitted value.
    pub fn check_answer(&self, answer: &AnswerValue) -> bool {
        match &self.kind {
            QuestionKind::MultipleChoice { correct_index, .. } => {
                answer.as_index() == Some(*correct_index)
            }
            QuestionKind::TrueFalse { is_true } => answer.as_bool() == *is_true,
        }
    }

    /// Positions in [`Question::options`] that hold the correct answer.
    pub fn correct_positions(&self) -> Vec<usize> {
        match &self.kind {
            QuestionKind::MultipleChoice { correct_index, .. } => vec![*correct_index],
            QuestionKind::TrueFalse { is_true: true } => vec![0],
            QuestionKind::TrueFalse { is_true: false } => vec![1],
        }
    }
}
