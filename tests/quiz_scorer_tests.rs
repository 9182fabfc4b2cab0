use candle_coach::classifier::{classify, PatternLabel};
use candle_coach::patterns::PatternCatalog;
use candle_coach::quiz::{GuessOutcome, QuizSession, ScoreBoard};

#[test]
fn three_correct_then_one_wrong_resets_streak() {
    let mut score = ScoreBoard::default();
    assert_eq!(
        score.record(PatternLabel::Doji, PatternLabel::Doji),
        GuessOutcome::Correct
    );
    assert_eq!(
        score.record(PatternLabel::Bearish, PatternLabel::Bearish),
        GuessOutcome::Correct
    );
    assert_eq!(
        score.record(PatternLabel::Bullish, PatternLabel::Bullish),
        GuessOutcome::Correct
    );
    assert_eq!(
        score.record(PatternLabel::Bullish, PatternLabel::Doji),
        GuessOutcome::Incorrect
    );

    assert_eq!(score.streak, 0);
    assert_eq!(score.total_attempts, 4);
    assert_eq!(score.correct_answers, 3);
    assert!((score.accuracy().unwrap() - 0.75).abs() < f64::EPSILON);
}

#[test]
fn fresh_scoreboard_reports_no_accuracy() {
    assert_eq!(ScoreBoard::default().accuracy(), None);
}

#[test]
fn reset_clears_all_counters() {
    let mut score = ScoreBoard::default();
    score.record(PatternLabel::Doji, PatternLabel::Doji);
    score.record(PatternLabel::Doji, PatternLabel::Bearish);
    score.reset();
    assert_eq!(score, ScoreBoard::default());
    assert_eq!(score.accuracy(), None);
}

#[test]
fn session_scores_a_full_round() {
    let mut session = QuizSession::new(PatternCatalog::standard(), 99);
    for _ in 0..20 {
        let question = session.draw();
        let truth = classify(&question.candle).unwrap();
        session.answer(truth).unwrap();
    }
    assert_eq!(session.score.total_attempts, 20);
    assert_eq!(session.score.correct_answers, 20);
    assert_eq!(session.score.streak, 20);
    assert!((session.score.accuracy().unwrap() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn wrong_guess_resets_streak_but_keeps_attempts() {
    let mut session = QuizSession::new(PatternCatalog::standard(), 5);
    let question = session.draw();
    let truth = classify(&question.candle).unwrap();
    // pick any label that is not the truth
    let wrong = [
        PatternLabel::Doji,
        PatternLabel::Bullish,
        PatternLabel::Bearish,
    ]
    .into_iter()
    .find(|l| *l != truth)
    .unwrap();

    let report = session.answer(wrong).unwrap();
    assert_eq!(report.outcome, GuessOutcome::Incorrect);
    assert_eq!(report.correct_label, truth);
    assert_eq!(session.score.streak, 0);
    assert_eq!(session.score.total_attempts, 1);
    assert_eq!(session.score.correct_answers, 0);
}

#[test]
fn drawing_replaces_the_current_question() {
    let mut session = QuizSession::new(PatternCatalog::standard(), 11);
    session.draw();
    let second = session.draw();
    assert_eq!(
        session.current_question().map(|q| q.kind),
        Some(second.kind)
    );
}
