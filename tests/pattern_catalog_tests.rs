use candle_coach::classifier::{classify, PatternLabel};
use candle_coach::patterns::{PatternCatalog, PatternKind};

#[test]
fn deck_order_matches_the_study_material() {
    let catalog = PatternCatalog::standard();
    let kinds: Vec<PatternKind> = catalog.cards().iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            PatternKind::Doji,
            PatternKind::BullishEngulfing,
            PatternKind::BearishEngulfing,
            PatternKind::Hammer,
            PatternKind::ShootingStar,
        ]
    );
}

#[test]
fn every_card_has_term_and_definition() {
    for card in PatternCatalog::standard().cards() {
        assert!(!card.term.is_empty());
        assert!(card.definition.len() > 20, "{}", card.term);
    }
}

#[test]
fn doji_fixture_ends_with_the_canonical_doji_bar() {
    let catalog = PatternCatalog::standard();
    let candle = catalog
        .get_by_kind(PatternKind::Doji)
        .unwrap()
        .question_candle();
    assert!((candle.open - 1.0).abs() < f64::EPSILON);
    assert!((candle.high - 1.08).abs() < f64::EPSILON);
    assert!((candle.low - 0.97).abs() < f64::EPSILON);
    assert!((candle.close - 1.0).abs() < f64::EPSILON);
}

#[test]
fn engulfing_fixtures_engulf_the_previous_body() {
    let catalog = PatternCatalog::standard();

    let bullish = catalog
        .get_by_kind(PatternKind::BullishEngulfing)
        .unwrap()
        .fixture();
    let (prev, last) = (bullish[3], bullish[4]);
    assert!(last.open < prev.close && last.close > prev.open);
    assert_eq!(classify(&last).unwrap(), PatternLabel::Bullish);

    let bearish = catalog
        .get_by_kind(PatternKind::BearishEngulfing)
        .unwrap()
        .fixture();
    let (prev, last) = (bearish[3], bearish[4]);
    assert!(last.open > prev.close && last.close < prev.open);
    assert_eq!(classify(&last).unwrap(), PatternLabel::Bearish);
}

#[test]
fn wick_patterns_have_the_advertised_wick_shape() {
    let catalog = PatternCatalog::standard();

    let hammer = catalog
        .get_by_kind(PatternKind::Hammer)
        .unwrap()
        .question_candle();
    assert!(hammer.lower_wick() > hammer.body() * 2.0);
    assert!(hammer.upper_wick() < hammer.body());

    let star = catalog
        .get_by_kind(PatternKind::ShootingStar)
        .unwrap()
        .question_candle();
    assert!(star.upper_wick() > star.body() * 2.0);
    assert!(star.lower_wick() < star.body());
}

#[test]
fn all_fixture_bars_are_valid() {
    for card in PatternCatalog::standard().cards() {
        for candle in card.fixture() {
            candle.validate().unwrap();
        }
    }
}
