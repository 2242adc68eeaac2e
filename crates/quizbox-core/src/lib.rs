//! quizbox-core — Quiz domain model, answer state machine, and scoring.
//!
//! This crate defines the question types, the player score accumulator and
//! the quiz controller that the rest of quizbox builds on. Presentation code
//! talks to it through the [`engine::Presenter`] seam.

pub mod bank;
pub mod engine;
pub mod error;
pub mod model;
pub mod player;
pub mod quiz;

pub use error::QuizError;
pub use model::{AnswerOption, AnswerValue, ChoiceLabels, Question, QuestionKind};
pub use player::Player;
pub use quiz::{Judgement, Quiz, QuizState, Summary};
