//! Quiz error types.
//!
//! Every variant is recoverable: a failed transition leaves the quiz and the
//! player exactly as they were.

use thiserror::Error;

/// Errors returned by question construction and quiz transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The question data does not describe a well-formed question.
    #[error("invalid question: {0}")]
    InvalidQuestion(String),

    /// `submit` was called before any answer was selected.
    #[error("no answer selected for the current question")]
    NotReady,

    /// The current question has already been judged.
    #[error("question {index} has already been answered")]
    AlreadyAnswered { index: usize },

    /// There is no current question left.
    #[error("the quiz is finished")]
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            QuizError::AlreadyAnswered { index: 3 }.to_string(),
            "question 3 has already been answered"
        );
        assert_eq!(
            QuizError::InvalidQuestion("no choices".into()).to_string(),
            "invalid question: no choices"
        );
    }
}
