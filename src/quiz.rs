use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::classifier::{classify, PatternLabel};
use crate::error::AppError;
use crate::model::candle::Candle;
use crate::patterns::{PatternCatalog, PatternKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
}

/// Session counters, threaded explicitly through `record` so there is no
/// ambient state to leak between sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub streak: u32,
    pub total_attempts: u32,
    pub correct_answers: u32,
}

impl ScoreBoard {
    pub fn record(&mut self, guess: PatternLabel, answer: PatternLabel) -> GuessOutcome {
        self.total_attempts = self.total_attempts.saturating_add(1);
        if guess == answer {
            self.streak = self.streak.saturating_add(1);
            self.correct_answers = self.correct_answers.saturating_add(1);
            GuessOutcome::Correct
        } else {
            self.streak = 0;
            GuessOutcome::Incorrect
        }
    }

    /// Fraction of correct answers; `None` before the first attempt.
    pub fn accuracy(&self) -> Option<f64> {
        if self.total_attempts == 0 {
            None
        } else {
            Some(self.correct_answers as f64 / self.total_attempts as f64)
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One question: the bar to classify and which card it came from.
#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub kind: PatternKind,
    pub candle: Candle,
}

#[derive(Debug, Clone, Copy)]
pub struct AnswerReport {
    pub outcome: GuessOutcome,
    pub correct_label: PatternLabel,
}

/// Draws questions from the catalog and scores answers.
///
/// Seeded so a session (and its tests) can be replayed; draws avoid repeating
/// the previous card back to back.
#[derive(Debug)]
pub struct QuizSession {
    catalog: PatternCatalog,
    rng: StdRng,
    last_index: Option<usize>,
    current: Option<QuizQuestion>,
    pub score: ScoreBoard,
}

impl QuizSession {
    pub fn new(catalog: PatternCatalog, seed: u64) -> Self {
        assert!(!catalog.is_empty(), "catalog must not be empty");
        Self {
            catalog,
            rng: StdRng::seed_from_u64(seed),
            last_index: None,
            current: None,
            score: ScoreBoard::default(),
        }
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.current.as_ref()
    }

    /// Pick the next question.
    pub fn draw(&mut self) -> QuizQuestion {
        let len = self.catalog.len();
        let index = loop {
            let candidate = self.rng.gen_range(0..len);
            if len == 1 || Some(candidate) != self.last_index {
                break candidate;
            }
        };
        self.last_index = Some(index);

        let card = &self.catalog.cards()[index];
        let question = QuizQuestion {
            kind: card.kind,
            candle: card.question_candle(),
        };
        self.current = Some(question);
        question
    }

    /// Score a guess against the current question. Returns an error only if
    /// the question candle itself is malformed, which the built-in fixtures
    /// never are.
    pub fn answer(&mut self, guess: PatternLabel) -> Result<AnswerReport, AppError> {
        let question = self
            .current
            .take()
            .ok_or_else(|| AppError::Quiz("no question drawn".to_string()))?;
        let correct_label = classify(&question.candle)?;
        let outcome = self.score.record(guess, correct_label);
        Ok(AnswerReport {
            outcome,
            correct_label,
        })
    }
}
