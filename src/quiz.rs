use std::fmt;
use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use thiserror::Error;

use crate::content::{Category, Question, QuizContent, CONTENT_PATH};
use crate::menu::Screen;
use crate::prefs::{load_prefs, Prefs};
use crate::score::Score;
use crate::settings::QuizSettings;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum QuizPhase {
    #[default]
    Idle,
    QuestionDisplayed,
    AwaitingAdvance,
    Finished,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuizError {
    #[error("Category index {index} is out of bounds! ({count} categories)")]
    CategoryOutOfBounds { index: usize, count: usize },
}

/// Result of scoring one reply.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ReplyOutcome {
    pub reply: usize,
    pub correct_reply: usize,
    /// Signed change applied to the score.
    pub points: i32,
}

impl ReplyOutcome {
    pub fn is_correct(&self) -> bool {
        self.reply == self.correct_reply
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Advance {
    NextQuestion,
    Finished,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Summary {
    pub score: i32,
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Final Score: {}\nCorrect Answers: {} / {}",
            self.score, self.correct, self.total
        )
    }
}

/// What the quiz screen should show for the current question.
#[derive(Debug)]
pub struct QuestionView<'a> {
    /// 1-based position in the category.
    pub number: usize,
    pub total: usize,
    pub prompt: &'a str,
    pub image: Option<&'a str>,
    /// One entry per reply button; `None` hides the button.
    pub slots: Vec<Option<&'a str>>,
    pub interactable: bool,
    pub answered: Option<ReplyOutcome>,
}

/// The quiz state machine for one screen visit.
#[derive(Resource, Debug)]
pub struct Quiz {
    categories: Vec<Category>,
    settings: QuizSettings,
    selected: Option<usize>,
    question_index: usize,
    correct_count: usize,
    phase: QuizPhase,
    advance_timer: Timer,
    last_reply: Option<ReplyOutcome>,
}

impl Quiz {
    pub fn new(content: QuizContent) -> Self {
        // Unvalidated settings must not panic the timer.
        let delay = Duration::try_from_secs_f32(content.settings.delay_after_reply)
            .unwrap_or_default();
        Self {
            categories: content.categories,
            settings: content.settings,
            selected: None,
            question_index: 0,
            correct_count: 0,
            phase: QuizPhase::Idle,
            advance_timer: Timer::new(delay, TimerMode::Once),
            last_reply: None,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.selected.and_then(|i| self.categories.get(i))
    }

    fn current_question(&self) -> Option<&Question> {
        self.selected_category()?.questions.get(self.question_index)
    }

    /// Starts a playthrough of the category at `index`. Out-of-range indices
    /// leave the quiz untouched.
    pub fn select_category(&mut self, index: usize) -> Result<(), QuizError> {
        if index >= self.categories.len() {
            return Err(QuizError::CategoryOutOfBounds {
                index,
                count: self.categories.len(),
            });
        }

        self.selected = Some(index);
        self.question_index = 0;
        self.correct_count = 0;
        self.display_question();
        Ok(())
    }

    pub fn display_question(&mut self) {
        let Some(category) = self.selected_category() else {
            return;
        };

        if self.question_index >= category.questions.len() {
            self.phase = QuizPhase::Finished;
            return;
        }

        self.last_reply = None;
        self.phase = QuizPhase::QuestionDisplayed;
    }

    /// Scores `reply` for the current question and arms the advance timer.
    /// Returns `None` when input is disabled or the reply slot is not shown.
    pub fn on_reply_selected(&mut self, reply: usize, score: &mut Score) -> Option<ReplyOutcome> {
        if self.phase != QuizPhase::QuestionDisplayed {
            return None;
        }

        let (visible, correct_reply) = {
            let question = self.current_question()?;
            (
                question.replies.len().min(self.settings.reply_slots),
                question.correct_reply,
            )
        };
        if reply >= visible {
            return None;
        }

        self.phase = QuizPhase::AwaitingAdvance;

        let points = if reply == correct_reply {
            self.correct_count += 1;
            score.add(self.settings.points_for_correct);
            self.settings.points_for_correct
        } else {
            score.subtract(self.settings.points_for_wrong);
            self.settings.points_for_wrong.saturating_neg()
        };

        let outcome = ReplyOutcome {
            reply,
            correct_reply,
            points,
        };
        self.last_reply = Some(outcome);
        self.advance_timer.reset();
        Some(outcome)
    }

    /// Runs the post-reply delay. Reports a step once the delay has elapsed.
    pub fn tick(&mut self, delta: Duration) -> Option<Advance> {
        if self.phase != QuizPhase::AwaitingAdvance {
            return None;
        }

        self.advance_timer.tick(delta);
        if !self.advance_timer.finished() {
            return None;
        }

        self.question_index += 1;
        self.display_question();

        if self.phase == QuizPhase::Finished {
            Some(Advance::Finished)
        } else {
            Some(Advance::NextQuestion)
        }
    }

    pub fn current_view(&self) -> Option<QuestionView<'_>> {
        let interactable = match self.phase {
            QuizPhase::QuestionDisplayed => true,
            QuizPhase::AwaitingAdvance => false,
            QuizPhase::Idle | QuizPhase::Finished => return None,
        };
        let category = self.selected_category()?;
        let question = category.questions.get(self.question_index)?;

        Some(QuestionView {
            number: self.question_index + 1,
            total: category.questions.len(),
            prompt: &question.prompt,
            image: question.image.as_deref(),
            slots: (0..self.settings.reply_slots)
                .map(|i| question.replies.get(i).map(String::as_str))
                .collect(),
            interactable,
            answered: self.last_reply,
        })
    }

    pub fn summary(&self, score: &Score) -> Option<Summary> {
        if self.phase != QuizPhase::Finished {
            return None;
        }
        let category = self.selected_category()?;
        Some(Summary {
            score: score.value(),
            correct: self.correct_count,
            total: category.questions.len(),
        })
    }

    /// Drops the playthrough, including a pending advance.
    pub fn reset(&mut self) {
        self.selected = None;
        self.question_index = 0;
        self.correct_count = 0;
        self.phase = QuizPhase::Idle;
        self.last_reply = None;
    }
}

/// A reply button (or its hotkey) was pressed.
#[derive(Event, Clone, Copy, PartialEq, Eq, Debug)]
pub struct ReplySelected(pub usize);

/// Consumes `ReplySelected`. Systems sending it must run before this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReplyHandling;

pub struct QuizPlugin;
impl Plugin for QuizPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>()
            .add_event::<ReplySelected>()
            .add_systems(Startup, (load_content, load_prefs));
        add_quiz_flow(app);
    }
}

/// Replies are drained before the advance timer runs, so anything sent while
/// input was disabled is dropped instead of answering the next question.
fn add_quiz_flow(app: &mut App) {
    app.add_systems(OnEnter(Screen::Quiz), start_quiz)
        .add_systems(OnExit(Screen::Quiz), leave_quiz)
        .add_systems(
            Update,
            (handle_replies.in_set(ReplyHandling), advance_quiz)
                .chain()
                .run_if(in_state(Screen::Quiz)),
        );
}

fn load_content(mut commands: Commands) {
    let path = Path::new(CONTENT_PATH);
    let content = match QuizContent::load(path) {
        Ok(content) => {
            info!(
                "Loaded {} categories from {}",
                content.categories.len(),
                path.display()
            );
            content
        }
        Err(err) => {
            warn!("Using built-in questions, {} is unusable: {err}", path.display());
            QuizContent::builtin().unwrap_or_else(|err| {
                error!("Built-in questions are invalid: {err}");
                QuizContent::default()
            })
        }
    };
    commands.insert_resource(Quiz::new(content));
}

fn start_quiz(mut quiz: ResMut<Quiz>, mut score: ResMut<Score>, prefs: Res<Prefs>) {
    score.reset();

    let index = prefs
        .category_index(quiz.categories().len())
        .unwrap_or_else(|| {
            warn!(
                "Invalid category index {}, resetting to 0.",
                prefs.selected_category
            );
            0
        });

    match quiz.select_category(index) {
        Ok(()) => {
            if let Some(category) = quiz.selected_category() {
                info!(
                    "Starting category '{}' ({} questions)",
                    category.name,
                    category.questions.len()
                );
            }
        }
        Err(err) => error!("{err}"),
    }
}

fn leave_quiz(mut quiz: ResMut<Quiz>) {
    quiz.reset();
}

fn handle_replies(
    mut ev_reply: EventReader<ReplySelected>,
    mut quiz: ResMut<Quiz>,
    mut score: ResMut<Score>,
) {
    for ReplySelected(reply) in ev_reply.read() {
        let Some(outcome) = quiz.on_reply_selected(*reply, &mut score) else {
            continue;
        };
        if outcome.is_correct() {
            info!("Correct reply! (+{})", outcome.points);
        } else {
            info!("Wrong reply! ({})", outcome.points);
        }
        debug!("{} correct so far", quiz.correct_count());
    }
}

fn advance_quiz(time: Res<Time>, mut quiz: ResMut<Quiz>, score: Res<Score>) {
    match quiz.tick(time.delta()) {
        Some(Advance::NextQuestion) => debug!("Showing question {}", quiz.question_index() + 1),
        Some(Advance::Finished) => {
            if let Some(summary) = quiz.summary(&score) {
                info!(
                    "Quiz finished! {} / {} correct, score {}",
                    summary.correct, summary.total, summary.score
                );
            }
        }
        None => {}
    }
}
