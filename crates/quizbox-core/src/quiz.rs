//! Quiz controller: sequencing, per-question answer state and scoring.
//!
//! ```text
//! AwaitingSelection --select--> AwaitingSubmission --submit--> Answered
//!        ^                          |  (re-select)                |
//!        +-------------------------advance------------------------+--> Finished
//! ```
//!
//! Transitions made in the wrong state return a [`QuizError`] and change
//! nothing, so a question can never be scored twice.

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::{AnswerValue, Question};
use crate::player::Player;

/// Where the quiz is in its per-question cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizState {
    AwaitingSelection,
    AwaitingSubmission,
    Answered,
    Finished,
}

/// Outcome of judging the current question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgement {
    pub correct: bool,
    /// Points added to the player; zero for a wrong answer.
    pub points_awarded: u32,
    pub explanation: String,
    /// Option positions to highlight as correct.
    pub correct_positions: Vec<usize>,
}

impl Judgement {
    /// Feedback line: the explanation, or a plain verdict when there is none.
    pub fn message(&self) -> &str {
        if !self.explanation.is_empty() {
            &self.explanation
        } else if self.correct {
            "Correct!"
        } else {
            "Wrong answer"
        }
    }
}

/// Final result of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub player_name: String,
    pub score: u32,
    /// Sum of all question weights.
    pub max_score: u32,
    pub correct: u32,
    pub total: usize,
    /// Rounded share of correct answers; `None` for an empty quiz.
    pub percent: Option<u32>,
}

impl Summary {
    /// Percentage for display, `"-"` when there were no questions.
    pub fn percent_display(&self) -> String {
        match self.percent {
            Some(p) => p.to_string(),
            None => "-".to_string(),
        }
    }
}

/// `round(100 * correct / total)`, halves rounded up.
fn percent(correct: u32, total: usize) -> Option<u32> {
    if total == 0 {
        return None;
    }
    let correct = u64::from(correct);
    let total = total as u64;
    let rounded = (200 * correct + total) / (2 * total);
    Some(u32::try_from(rounded).unwrap_or(u32::MAX))
}

/// Session controller owning the questions and the player.
#[derive(Debug, Clone)]
pub struct Quiz {
    questions: Vec<Question>,
    player: Player,
    index: usize,
    answered: bool,
    selected: Option<AnswerValue>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>, player: Player) -> Self {
        Self {
            questions,
            player,
            index: 0,
            answered: false,
            selected: None,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Zero-based position of the current question.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn selected_answer(&self) -> Option<&AnswerValue> {
        self.selected.as_ref()
    }

    /// The question being played, or `None` once finished.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    /// One-based position and question count, for "Question i/n" lines.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.questions.len();
        ((self.index + 1).min(total), total)
    }

    pub fn state(&self) -> QuizState {
        if self.is_finished() {
            QuizState::Finished
        } else if self.answered {
            QuizState::Answered
        } else if self.selected.is_some() {
            QuizState::AwaitingSubmission
        } else {
            QuizState::AwaitingSelection
        }
    }

    /// Record the pending answer for the current question.
    ///
    /// Picking again before submitting replaces the earlier pick.
    pub fn select_answer(&mut self, value: impl Into<AnswerValue>) -> Result<(), QuizError> {
        match self.state() {
            QuizState::Finished => Err(QuizError::Finished),
            QuizState::Answered => Err(QuizError::AlreadyAnswered { index: self.index }),
            QuizState::AwaitingSelection | QuizState::AwaitingSubmission => {
                self.selected = Some(value.into());
                Ok(())
            }
        }
    }

    /// Judge the pending answer and score it.
    ///
    /// A correct answer adds the question's points and one correct answer
    /// to the player.
    pub fn submit(&mut self) -> Result<Judgement, QuizError> {
        let index = self.index;
        let question = self.questions.get(index).ok_or(QuizError::Finished)?;
        if self.answered {
            return Err(QuizError::AlreadyAnswered { index });
        }
        let answer = self.selected.as_ref().ok_or(QuizError::NotReady)?;

        let correct = question.check_answer(answer);
        let points_awarded = if correct { question.points() } else { 0 };
        let judgement = Judgement {
            correct,
            points_awarded,
            explanation: question.explanation().to_string(),
            correct_positions: question.correct_positions(),
        };

        if correct {
            self.player.add_points(points_awarded);
            self.player.add_correct();
        }
        self.answered = true;

        tracing::debug!(
            index,
            answer = %answer,
            correct,
            points_awarded,
            score = self.player.score(),
            "answer judged"
        );
        Ok(judgement)
    }

    /// Move to the next question. A no-op once finished.
    pub fn advance(&mut self) -> QuizState {
        if !self.is_finished() {
            self.index += 1;
            self.clear_transient();
            if self.is_finished() {
                tracing::debug!(
                    score = self.player.score(),
                    correct = self.player.correct(),
                    "quiz finished"
                );
            }
        }
        self.state()
    }

    /// Back to the first question with a zeroed player.
    pub fn reset(&mut self) {
        self.index = 0;
        self.clear_transient();
        self.player.reset();
    }

    /// Name the player and reset for a fresh play-through.
    pub fn start(&mut self, player_name: impl Into<String>) {
        self.player.set_name(player_name);
        self.reset();
        tracing::info!(
            player = self.player.name(),
            questions = self.questions.len(),
            "quiz started"
        );
    }

    pub fn summary(&self) -> Summary {
        let max_score = self
            .questions
            .iter()
            .fold(0u32, |acc, q| acc.saturating_add(q.points()));
        Summary {
            player_name: self.player.name().to_string(),
            score: self.player.score(),
            max_score,
            correct: self.player.correct(),
            total: self.questions.len(),
            percent: percent(self.player.correct(), self.questions.len()),
        }
    }

    fn clear_transient(&mut self) {
        self.answered = false;
        self.selected = None;
    }
}
