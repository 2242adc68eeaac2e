//! Session driver.
//!
//! Runs a play-through of a [`Quiz`] against a [`Presenter`], which renders
//! questions and reports back which option the user picked.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::model::{AnswerOption, AnswerValue, ChoiceLabels};
use crate::quiz::{Judgement, Quiz, Summary};

/// What a presenter needs to draw the current question.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    /// One-based position.
    pub position: usize,
    pub total: usize,
    pub text: String,
    pub points: u32,
    /// Player score before this question.
    pub score: u32,
    pub options: Vec<AnswerOption>,
}

/// Presentation seam between the quiz and whatever shows it to a user.
pub trait Presenter {
    fn show_question(&mut self, view: &QuestionView) -> Result<()>;

    /// Ask the user to pick one of `options`. `Ok(None)` means they quit.
    fn choose(&mut self, options: &[AnswerOption]) -> Result<Option<AnswerValue>>;

    fn show_judgement(&mut self, judgement: &Judgement, options: &[AnswerOption]) -> Result<()>;

    fn show_summary(&mut self, summary: &Summary) -> Result<()>;
}

/// Result of [`play`].
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub summary: Summary,
    /// `false` when the user quit before the last question.
    pub completed: bool,
}

/// Drive `quiz` from its current position to the end.
///
/// A question that was already judged before the call is skipped. The
/// summary is shown only when every question was played.
pub fn play(
    quiz: &mut Quiz,
    presenter: &mut dyn Presenter,
    labels: &ChoiceLabels,
) -> Result<SessionReport> {
    while let Some(question) = quiz.current() {
        if quiz.is_answered() {
            quiz.advance();
            continue;
        }
        let (position, total) = quiz.progress();
        let options = question.options_labeled(labels);
        let view = QuestionView {
            position,
            total,
            text: question.text().to_string(),
            points: question.points(),
            score: quiz.player().score(),
            options: options.clone(),
        };
        presenter
            .show_question(&view)
            .with_context(|| format!("failed to show question {position}"))?;

        let Some(value) = presenter
            .choose(&options)
            .with_context(|| format!("failed to read answer for question {position}"))?
        else {
            tracing::info!(position, total, "quiz abandoned");
            return Ok(SessionReport {
                summary: quiz.summary(),
                completed: false,
            });
        };

        quiz.select_answer(value)?;
        let judgement = quiz.submit()?;
        presenter.show_judgement(&judgement, &options)?;
        quiz.advance();
    }

    let summary = quiz.summary();
    tracing::info!(
        player = %summary.player_name,
        score = summary.score,
        correct = summary.correct,
        total = summary.total,
        "quiz complete"
    );
    presenter.show_summary(&summary)?;
    Ok(SessionReport {
        summary,
        completed: true,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::bank::sample_questions;
    use crate::player::Player;

    /// Presenter that answers from a script and records what it was shown.
    #[derive(Default)]
    struct ScriptedPresenter {
        answers: VecDeque<Option<AnswerValue>>,
        shown: Vec<QuestionView>,
        judgements: Vec<Judgement>,
        summary: Option<Summary>,
    }

    impl ScriptedPresenter {
        fn new(answers: Vec<Option<AnswerValue>>) -> Self {
            Self {
                answers: answers.into(),
                ..Default::default()
            }
        }
    }

    impl Presenter for ScriptedPresenter {
        fn show_question(&mut self, view: &QuestionView) -> Result<()> {
            self.shown.push(view.clone());
            Ok(())
        }

        fn choose(&mut self, _options: &[AnswerOption]) -> Result<Option<AnswerValue>> {
            Ok(self.answers.pop_front().flatten())
        }

        fn show_judgement(&mut self, judgement: &Judgement, _: &[AnswerOption]) -> Result<()> {
            self.judgements.push(judgement.clone());
            Ok(())
        }

        fn show_summary(&mut self, summary: &Summary) -> Result<()> {
            self.summary = Some(summary.clone());
            Ok(())
        }
    }

    #[test]
    fn plays_sample_bank_to_the_end() {
        let mut quiz = Quiz::new(sample_questions().unwrap(), Player::new("Ada"));
        // Right, wrong, right, wrong, right.
        let mut presenter = ScriptedPresenter::new(vec![
            Some(AnswerValue::Index(0)),
            Some(AnswerValue::Index(0)),
            Some(AnswerValue::Bool(false)),
            Some(AnswerValue::Index(0)),
            Some(AnswerValue::Bool(true)),
        ]);

        let report = play(&mut quiz, &mut presenter, &ChoiceLabels::default()).unwrap();

        assert!(report.completed);
        assert_eq!(report.summary.score, 6);
        assert_eq!(report.summary.correct, 3);
        assert_eq!(report.summary.percent, Some(60));
        assert_eq!(presenter.summary, Some(report.summary));
        assert_eq!(presenter.shown.len(), 5);
        assert_eq!(presenter.shown[2].options.len(), 2);
        assert_eq!(presenter.shown[4].position, 5);
        assert_eq!(presenter.shown[1].score, 2);
        let verdicts: Vec<bool> = presenter.judgements.iter().map(|j| j.correct).collect();
        assert_eq!(verdicts, vec![true, false, true, false, true]);
    }

    #[test]
    fn quitting_stops_without_summary() {
        let mut quiz = Quiz::new(sample_questions().unwrap(), Player::default());
        let mut presenter = ScriptedPresenter::new(vec![Some(AnswerValue::Index(0)), None]);

        let report = play(&mut quiz, &mut presenter, &ChoiceLabels::default()).unwrap();

        assert!(!report.completed);
        assert_eq!(report.summary.score, 2);
        assert!(presenter.summary.is_none());
        assert_eq!(quiz.index(), 1);
    }

    #[test]
    fn resumes_after_an_already_judged_question() {
        let mut quiz = Quiz::new(sample_questions().unwrap(), Player::default());
        quiz.select_answer(AnswerValue::Index(0)).unwrap();
        quiz.submit().unwrap();
        let mut presenter = ScriptedPresenter::new(vec![
            Some(AnswerValue::Index(1)),
            Some(AnswerValue::Bool(false)),
            Some(AnswerValue::Index(2)),
            Some(AnswerValue::Bool(true)),
        ]);

        let report = play(&mut quiz, &mut presenter, &ChoiceLabels::default()).unwrap();

        assert!(report.completed);
        assert_eq!(presenter.shown.len(), 4);
        assert_eq!(presenter.shown[0].position, 2);
        assert_eq!(presenter.shown[0].score, 2);
        assert_eq!(report.summary.score, 10);
        assert_eq!(report.summary.correct, 5);
    }

    #[test]
    fn empty_quiz_goes_straight_to_summary() {
        let mut quiz = Quiz::new(vec![], Player::default());
        let mut presenter = ScriptedPresenter::new(vec![]);

        let report = play(&mut quiz, &mut presenter, &ChoiceLabels::default()).unwrap();

        assert!(report.completed);
        assert!(presenter.shown.is_empty());
        assert_eq!(presenter.summary.unwrap().percent, None);
    }

    #[test]
    fn labels_reach_the_presenter() {
        let questions = vec![crate::model::Question::true_false("Water is wet", true).unwrap()];
        let mut quiz = Quiz::new(questions, Player::default());
        let mut presenter = ScriptedPresenter::new(vec![Some(AnswerValue::Bool(true))]);
        let labels = ChoiceLabels {
            true_label: "Yes".into(),
            false_label: "No".into(),
        };

        play(&mut quiz, &mut presenter, &labels).unwrap();

        assert_eq!(presenter.shown[0].options[0].label, "Yes");
        assert_eq!(presenter.judgements[0].points_awarded, 1);
    }
}
