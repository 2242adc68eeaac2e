//! Built-in question bank.

use crate::error::QuizError;
use crate::model::Question;

/// Weight of every built-in question.
pub const SAMPLE_POINTS: u32 = 2;

/// The five object-oriented programming questions shipped with quizbox.
pub fn sample_questions() -> Result<Vec<Question>, QuizError> {
    Ok(vec![
        Question::multiple_choice(
            "Which of these describes Encapsulation in OOP?",
            [
                "Bundling data and the methods that use it inside a class",
                "Inheriting features from a parent class",
                "Methods with the same name behaving differently",
                "Creating objects from a class",
            ],
            0,
        )?
        .with_points(SAMPLE_POINTS)?
        .with_explanation("Encapsulation hides internal details behind public methods."),
        Question::multiple_choice(
            "What does Polymorphism mean?",
            [
                "One object, many values",
                "One method, many forms",
                "One class, many instances",
                "One piece of code, many files",
            ],
            1,
        )?
        .with_points(SAMPLE_POINTS)?
        .with_explanation(
            "The same method behaves differently depending on the object's actual type.",
        ),
        Question::true_false("An abstract class can be instantiated directly.", false)?
            .with_points(SAMPLE_POINTS)?
            .with_explanation("An abstract class is a template that subclasses must extend."),
        Question::multiple_choice(
            "Which of these is NOT a core property of OOP?",
            ["Encapsulation", "Inheritance", "Compilation", "Polymorphism"],
            2,
        )?
        .with_points(SAMPLE_POINTS)?
        .with_explanation(
            "The core properties are Encapsulation, Inheritance, Polymorphism and Abstraction.",
        ),
        Question::true_false(
            "Composition is a \"has-a\" relationship, e.g. a car has wheels.",
            true,
        )?
        .with_points(SAMPLE_POINTS)?
        .with_explanation("Right: the wheels are parts of the car and mean little without it."),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionKind;

    #[test]
    fn sample_bank_shape() {
        let questions = sample_questions().unwrap();
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| q.points() == SAMPLE_POINTS));
        assert!(questions.iter().all(|q| !q.explanation().is_empty()));

        let kinds: Vec<String> = questions.iter().map(|q| q.kind().to_string()).collect();
        assert_eq!(
            kinds,
            [
                "multiple-choice",
                "multiple-choice",
                "true-false",
                "multiple-choice",
                "true-false"
            ]
        );
        assert_eq!(
            questions[3].kind(),
            &QuestionKind::MultipleChoice {
                choices: vec![
                    "Encapsulation".into(),
                    "Inheritance".into(),
                    "Compilation".into(),
                    "Polymorphism".into()
                ],
                correct_index: 2,
            }
        );
    }
}
