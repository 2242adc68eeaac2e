//! The `quizbox play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use quizbox_core::bank::sample_questions;
use quizbox_core::engine::{self, Presenter, QuestionView};
use quizbox_core::model::{AnswerOption, AnswerValue};
use quizbox_core::player::Player;
use quizbox_core::quiz::{Judgement, Quiz, Summary};

use crate::config::load_config_from;

/// Presenter that plays the quiz over a line-based terminal.
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line. `None` on end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim().to_string()))
        }
    }

    /// Ask a yes/no question; anything but `y`/`yes` is no.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        write!(self.output, "{prompt} [y/N]: ")?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes")))
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn show_question(&mut self, view: &QuestionView) -> Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Question {}/{} ({} pt) | Score: {}",
            view.position, view.total, view.points, view.score
        )?;
        writeln!(self.output, "{}", view.text)?;
        for (i, option) in view.options.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, option.label)?;
        }
        Ok(())
    }

    fn choose(&mut self, options: &[AnswerOption]) -> Result<Option<AnswerValue>> {
        loop {
            write!(
                self.output,
                "Your answer [1-{}, q to quit]: ",
                options.len()
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(None);
            };
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }
            match line.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => {
                    return Ok(Some(options[n - 1].value.clone()));
                }
                _ => writeln!(
                    self.output,
                    "Please enter a number between 1 and {}.",
                    options.len()
                )?,
            }
        }
    }

    fn show_judgement(&mut self, judgement: &Judgement, options: &[AnswerOption]) -> Result<()> {
        if judgement.correct {
            writeln!(
                self.output,
                "Correct! +{} point(s)",
                judgement.points_awarded
            )?;
        } else {
            let answers: Vec<&str> = judgement
                .correct_positions
                .iter()
                .filter_map(|&pos| options.get(pos))
                .map(|option| option.label.as_str())
                .collect();
            writeln!(
                self.output,
                "Wrong. The correct answer is: {}",
                answers.join(", ")
            )?;
        }
        if !judgement.explanation.is_empty() {
            writeln!(self.output, "{}", judgement.message())?;
        }
        Ok(())
    }

    fn show_summary(&mut self, summary: &Summary) -> Result<()> {
        let percent = match summary.percent {
            Some(_) => format!("{}%", summary.percent_display()),
            None => summary.percent_display(),
        };
        writeln!(self.output)?;
        writeln!(self.output, "Results for {}", summary.player_name)?;
        writeln!(self.output, "  Score:   {}/{}", summary.score, summary.max_score)?;
        writeln!(self.output, "  Correct: {}/{}", summary.correct, summary.total)?;
        writeln!(self.output, "  Percent: {percent}")?;
        Ok(())
    }
}

pub fn execute(name: Option<String>, config_path: Option<PathBuf>, json: bool) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let labels = config.labels();
    let player_name = name.unwrap_or(config.player_name);

    let mut quiz = Quiz::new(sample_questions()?, Player::default());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut presenter = TerminalPresenter::new(stdin.lock(), stdout.lock());

    let mut reports = Vec::new();
    loop {
        quiz.start(player_name.as_str());
        let report = engine::play(&mut quiz, &mut presenter, &labels)?;
        let completed = report.completed;
        reports.push(report);

        if !completed {
            writeln!(
                presenter.output,
                "Quiz abandoned at question {}/{}.",
                quiz.progress().0,
                quiz.questions().len()
            )?;
            break;
        }
        if !presenter.confirm("Play again?")? {
            break;
        }
    }
    drop(presenter);

    if json {
        let json = if reports.len() == 1 {
            serde_json::to_string_pretty(&reports[0])?
        } else {
            serde_json::to_string_pretty(&reports)?
        };
        println!("{json}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizbox_core::model::ChoiceLabels;

    fn run(input: &str) -> (engine::SessionReport, String) {
        let mut quiz = Quiz::new(sample_questions().unwrap(), Player::new("Ada"));
        let mut output = Vec::new();
        let report = {
            let mut presenter = TerminalPresenter::new(input.as_bytes(), &mut output);
            engine::play(&mut quiz, &mut presenter, &ChoiceLabels::default()).unwrap()
        };
        (report, String::from_utf8(output).unwrap())
    }

    #[test]
    fn numbered_options_map_to_values() {
        let (report, output) = run("1\n2\n2\n3\n1\n");
        assert!(report.completed);
        assert_eq!(report.summary.score, 10);
        assert!(output.contains("Question 1/5 (2 pt) | Score: 0"));
        assert!(output.contains("  1. True"));
        assert!(output.contains("  2. False"));
        assert!(output.contains("Percent: 100%"));
    }

    #[test]
    fn invalid_input_reprompts() {
        let (report, output) = run("0\nabc\n7\n1\nq\n");
        assert!(!report.completed);
        assert_eq!(report.summary.correct, 1);
        assert_eq!(
            output.matches("Please enter a number between 1 and 4.").count(),
            3
        );
    }

    #[test]
    fn wrong_answer_names_the_correct_option() {
        let (_, output) = run("2\n");
        assert!(output.contains("Wrong. The correct answer is: Bundling data"));
        assert!(output.contains("Encapsulation hides internal details"));
    }

    #[test]
    fn end_of_input_quits() {
        let (report, _) = run("");
        assert!(!report.completed);
        assert_eq!(report.summary.score, 0);
    }

    #[test]
    fn confirm_accepts_yes_only() {
        let mut output = Vec::new();
        let mut presenter = TerminalPresenter::new("Y\nno\n".as_bytes(), &mut output);
        assert!(presenter.confirm("Again?").unwrap());
        assert!(!presenter.confirm("Again?").unwrap());
        assert!(!presenter.confirm("Again?").unwrap());
    }

    #[test]
    fn empty_summary_shows_placeholder() {
        let mut output = Vec::new();
        let summary = Quiz::new(vec![], Player::default()).summary();
        TerminalPresenter::new("".as_bytes(), &mut output)
            .show_summary(&summary)
            .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Percent: -"));
        assert!(output.contains("Correct: 0/0"));
    }
}
