//! The `quizbox list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizbox_core::bank::sample_questions;

use crate::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>, show_answers: bool) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let labels = config.labels();
    let questions = sample_questions()?;

    let mut table = Table::new();
    table.set_header(vec!["#", "Type", "Points", "Question", "Options"]);

    for (i, question) in questions.iter().enumerate() {
        let correct = question.correct_positions();
        let options = question
            .options_labeled(&labels)
            .iter()
            .enumerate()
            .map(|(pos, option)| {
                if show_answers && correct.contains(&pos) {
                    format!("{}. {} *", pos + 1, option.label)
                } else {
                    format!("{}. {}", pos + 1, option.label)
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(question.kind()),
            Cell::new(question.points()),
            Cell::new(question.text()),
            Cell::new(options),
        ]);
    }

    println!("{table}");
    let total_points: u32 = questions.iter().map(|q| q.points()).sum();
    println!("{} question(s), {total_points} point(s) total", questions.len());

    Ok(())
}
