//! Category and question data authored in `assets/quiz.toml`.
//!
//! The file is loaded once at startup and never mutated afterwards. When it
//! is missing or broken the copy compiled into the binary is used instead.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::settings::QuizSettings;

pub const CONTENT_PATH: &str = "assets/quiz.toml";

const BUILTIN_CONTENT: &str = include_str!("../assets/quiz.toml");

pub const MAX_DELAY_SECS: f32 = 60.0;
pub const MAX_POINTS: i32 = 1_000_000;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("could not read quiz file: {0}")]
    Io(#[from] std::io::Error),
    #[error("quiz file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("delay_after_reply must be between 0 and 60 seconds, got {0}")]
    InvalidDelay(f32),
    #[error("{field} must be between 0 and 1000000, got {value}")]
    InvalidPoints { field: &'static str, value: i32 },
    #[error("quiz file contains no categories")]
    NoCategories,
    #[error("question {question} of category '{category}' has no replies")]
    NoReplies { category: String, question: usize },
    #[error(
        "question {question} of category '{category}' marks reply {correct} as correct but has {replies} replies"
    )]
    CorrectReplyOutOfRange {
        category: String,
        question: usize,
        correct: usize,
        replies: usize,
    },
    #[error(
        "question {question} of category '{category}' marks reply {correct} as correct but only {slots} reply slots are shown"
    )]
    CorrectReplyHidden {
        category: String,
        question: usize,
        correct: usize,
        slots: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Question {
    pub prompt: String,
    /// Asset path of an illustration, relative to `assets/`.
    #[serde(default)]
    pub image: Option<String>,
    pub replies: Vec<String>,
    pub correct_reply: usize,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct QuizContent {
    #[serde(default)]
    pub settings: QuizSettings,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl QuizContent {
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_toml_str(BUILTIN_CONTENT)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ContentError> {
        let content: QuizContent = toml::from_str(text)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let delay = self.settings.delay_after_reply;
        if !(0.0..=MAX_DELAY_SECS).contains(&delay) || Duration::try_from_secs_f32(delay).is_err() {
            return Err(ContentError::InvalidDelay(delay));
        }

        for (field, value) in [
            ("points_for_correct", self.settings.points_for_correct),
            ("points_for_wrong", self.settings.points_for_wrong),
        ] {
            if !(0..=MAX_POINTS).contains(&value) {
                return Err(ContentError::InvalidPoints { field, value });
            }
        }

        if self.categories.is_empty() {
            return Err(ContentError::NoCategories);
        }

        for category in &self.categories {
            for (i, question) in category.questions.iter().enumerate() {
                if question.replies.is_empty() {
                    return Err(ContentError::NoReplies {
                        category: category.name.clone(),
                        question: i,
                    });
                }
                if question.correct_reply >= question.replies.len() {
                    return Err(ContentError::CorrectReplyOutOfRange {
                        category: category.name.clone(),
                        question: i,
                        correct: question.correct_reply,
                        replies: question.replies.len(),
                    });
                }
                if question.correct_reply >= self.settings.reply_slots {
                    return Err(ContentError::CorrectReplyHidden {
                        category: category.name.clone(),
                        question: i,
                        correct: question.correct_reply,
                        slots: self.settings.reply_slots,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_valid() {
        let content = QuizContent::builtin().unwrap();
        assert!(!content.categories.is_empty());
        assert!(content.categories.iter().all(|c| !c.questions.is_empty()));
    }

    #[test]
    fn parses_optional_image_and_default_settings() {
        let content = QuizContent::from_toml_str(
            r#"
            [[categories]]
            name = "Flags"

            [[categories.questions]]
            prompt = "Whose flag is this?"
            image = "flags/jp.png"
            replies = ["Japan", "Bangladesh"]
            correct_reply = 0

            [[categories.questions]]
            prompt = "How many stars on the flag of the USA?"
            replies = ["13", "48", "50"]
            correct_reply = 2
            "#,
        )
        .unwrap();

        assert_eq!(content.settings, QuizSettings::default());
        let questions = &content.categories[0].questions;
        assert_eq!(questions[0].image.as_deref(), Some("flags/jp.png"));
        assert_eq!(questions[1].image, None);
        assert_eq!(questions[1].correct_reply, 2);
    }

    #[test]
    fn rejects_correct_reply_outside_replies() {
        let err = QuizContent::from_toml_str(
            r#"
            [[categories]]
            name = "Broken"

            [[categories.questions]]
            prompt = "?"
            replies = ["a", "b"]
            correct_reply = 2
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ContentError::CorrectReplyOutOfRange { correct: 2, replies: 2, .. }
        ));
    }

    #[test]
    fn rejects_correct_reply_in_hidden_slot() {
        let err = QuizContent::from_toml_str(
            r#"
            [settings]
            reply_slots = 2

            [[categories]]
            name = "Too many"

            [[categories.questions]]
            prompt = "?"
            replies = ["a", "b", "c"]
            correct_reply = 2
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::CorrectReplyHidden { slots: 2, .. }));
    }

    #[test]
    fn rejects_empty_files_and_reply_lists() {
        assert!(matches!(
            QuizContent::from_toml_str("").unwrap_err(),
            ContentError::NoCategories
        ));

        let err = QuizContent::from_toml_str(
            r#"
            [[categories]]
            name = "Silent"

            [[categories.questions]]
            prompt = "?"
            replies = []
            correct_reply = 0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::NoReplies { question: 0, .. }));
    }

    const ONE_QUESTION: &str = r#"
        [[categories]]
        name = "One"

        [[categories.questions]]
        prompt = "?"
        replies = ["a", "b"]
        correct_reply = 0
    "#;

    #[test]
    fn rejects_delays_a_timer_cannot_hold() {
        for delay in ["1e30", "inf", "nan", "-1.0", "61.0"] {
            let text = format!("[settings]\ndelay_after_reply = {delay}\n{ONE_QUESTION}");
            let err = QuizContent::from_toml_str(&text).unwrap_err();
            assert!(matches!(err, ContentError::InvalidDelay(_)), "{delay}: {err}");
        }

        let text = format!("[settings]\ndelay_after_reply = 0.0\n{ONE_QUESTION}");
        assert!(QuizContent::from_toml_str(&text).is_ok());
    }

    #[test]
    fn rejects_negative_or_huge_points() {
        for (field, value) in [
            ("points_for_correct", "2000000000"),
            ("points_for_wrong", "-5"),
        ] {
            let text = format!("[settings]\n{field} = {value}\n{ONE_QUESTION}");
            let err = QuizContent::from_toml_str(&text).unwrap_err();
            assert!(
                matches!(err, ContentError::InvalidPoints { field: f, .. } if f == field),
                "{field}: {err}"
            );
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = QuizContent::load(Path::new("does/not/exist/quiz.toml")).unwrap_err();
        assert!(matches!(err, ContentError::Io(_)));
    }
}
