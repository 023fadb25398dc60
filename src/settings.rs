use serde::{Deserialize, Serialize};

/// Designer-tunable scoring and pacing, read from the `[settings]` table of
/// the quiz file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    pub points_for_correct: i32,
    pub points_for_wrong: i32,
    /// Seconds between a reply and the next question.
    pub delay_after_reply: f32,
    /// Number of reply buttons on the quiz screen.
    pub reply_slots: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            points_for_correct: 10,
            points_for_wrong: 5,
            delay_after_reply: 1.5,
            reply_slots: 4,
        }
    }
}
