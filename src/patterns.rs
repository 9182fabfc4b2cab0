use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::candle::Candle;

/// The five patterns the flashcard deck teaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternKind {
    Doji,
    BullishEngulfing,
    BearishEngulfing,
    Hammer,
    ShootingStar,
}

impl PatternKind {
    pub const ALL: [PatternKind; 5] = [
        PatternKind::Doji,
        PatternKind::BullishEngulfing,
        PatternKind::BearishEngulfing,
        PatternKind::Hammer,
        PatternKind::ShootingStar,
    ];
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(card_term(*self))
    }
}

#[derive(Debug, Clone)]
pub struct PatternCard {
    pub kind: PatternKind,
    pub term: &'static str,
    pub definition: &'static str,
}

impl PatternCard {
    /// Synthetic five-bar sequence whose last bar exhibits the pattern.
    pub fn fixture(&self) -> Vec<Candle> {
        fixture_candles(self.kind)
    }

    /// The bar the quiz asks about.
    pub fn question_candle(&self) -> Candle {
        *fixture_candles(self.kind)
            .last()
            .expect("every fixture has at least one bar")
    }
}

fn card_term(kind: PatternKind) -> &'static str {
    match kind {
        PatternKind::Doji => "Doji",
        PatternKind::BullishEngulfing => "Bullish Engulfing",
        PatternKind::BearishEngulfing => "Bearish Engulfing",
        PatternKind::Hammer => "Hammer",
        PatternKind::ShootingStar => "Shooting Star",
    }
}

fn card_definition(kind: PatternKind) -> &'static str {
    match kind {
        PatternKind::Doji => {
            "A candle where open and close are almost the same, indicating market indecision."
        }
        PatternKind::BullishEngulfing => {
            "A small bearish candle followed by a larger bullish candle that engulfs it, \
             signaling potential reversal."
        }
        PatternKind::BearishEngulfing => {
            "A small bullish candle followed by a larger bearish candle that engulfs it, \
             signaling potential reversal."
        }
        PatternKind::Hammer => {
            "A candle with a small body and long lower wick, indicating rejection of lower prices."
        }
        PatternKind::ShootingStar => {
            "A candle with a small body and long upper wick, indicating rejection of higher prices."
        }
    }
}

/// Hand-authored OHLC arrays, one short sequence per pattern. The first four
/// bars set up the trend; the fifth is the pattern bar itself. The Doji bar
/// reuses the canonical zero-body example from the study material.
fn fixture_candles(kind: PatternKind) -> Vec<Candle> {
    match kind {
        PatternKind::Doji => vec![
            Candle::new(1.10, 1.12, 1.06, 1.07),
            Candle::new(1.07, 1.09, 1.03, 1.04),
            Candle::new(1.04, 1.06, 1.00, 1.02),
            Candle::new(1.02, 1.04, 0.99, 1.00),
            Candle::new(1.00, 1.08, 0.97, 1.00),
        ],
        PatternKind::BullishEngulfing => vec![
            Candle::new(104.0, 105.0, 101.5, 102.0),
            Candle::new(102.0, 102.8, 99.9, 100.5),
            Candle::new(100.5, 101.2, 98.8, 99.4),
            Candle::new(99.4, 99.8, 98.2, 98.6),
            Candle::new(98.0, 104.5, 97.5, 104.0),
        ],
        PatternKind::BearishEngulfing => vec![
            Candle::new(96.0, 98.2, 95.5, 97.8),
            Candle::new(97.8, 99.6, 97.4, 99.1),
            Candle::new(99.1, 100.9, 98.8, 100.4),
            Candle::new(100.4, 101.3, 100.0, 101.0),
            Candle::new(101.5, 102.0, 95.2, 95.8),
        ],
        PatternKind::Hammer => vec![
            Candle::new(108.0, 108.8, 105.6, 106.0),
            Candle::new(106.0, 106.5, 103.4, 104.0),
            Candle::new(104.0, 104.6, 101.2, 102.0),
            Candle::new(102.0, 102.4, 99.7, 100.2),
            Candle::new(100.0, 101.3, 95.0, 101.0),
        ],
        PatternKind::ShootingStar => vec![
            Candle::new(94.0, 96.2, 93.8, 95.9),
            Candle::new(95.9, 97.8, 95.5, 97.4),
            Candle::new(97.4, 99.1, 97.1, 98.8),
            Candle::new(98.8, 100.4, 98.5, 100.1),
            Candle::new(101.0, 106.0, 99.8, 100.0),
        ],
    }
}

/// Fixed flashcard deck in presentation order.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    cards: Vec<PatternCard>,
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl PatternCatalog {
    pub fn standard() -> Self {
        Self {
            cards: PatternKind::ALL
                .iter()
                .map(|&kind| PatternCard {
                    kind,
                    term: card_term(kind),
                    definition: card_definition(kind),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[PatternCard] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&PatternCard> {
        self.cards.get(index)
    }

    pub fn get_by_kind(&self, kind: PatternKind) -> Option<&PatternCard> {
        self.cards.iter().find(|c| c.kind == kind)
    }

    pub fn index_of_term(&self, term: &str) -> Option<usize> {
        self.cards
            .iter()
            .position(|c| c.term.eq_ignore_ascii_case(term.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{classify, PatternLabel};

    #[test]
    fn catalog_has_all_five_cards_in_order() {
        let catalog = PatternCatalog::standard();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.get(0).unwrap().kind, PatternKind::Doji);
        assert_eq!(catalog.get(4).unwrap().kind, PatternKind::ShootingStar);
    }

    #[test]
    fn every_fixture_has_five_bars() {
        let catalog = PatternCatalog::standard();
        for card in catalog.cards() {
            assert_eq!(card.fixture().len(), 5, "{}", card.term);
        }
    }

    #[test]
    fn question_candles_classify_as_expected() {
        let catalog = PatternCatalog::standard();
        let expect = |kind| classify(&catalog.get_by_kind(kind).unwrap().question_candle()).unwrap();
        assert_eq!(expect(PatternKind::Doji), PatternLabel::Doji);
        assert_eq!(expect(PatternKind::BullishEngulfing), PatternLabel::Bullish);
        assert_eq!(expect(PatternKind::BearishEngulfing), PatternLabel::Bearish);
        assert_eq!(expect(PatternKind::Hammer), PatternLabel::Bullish);
        assert_eq!(expect(PatternKind::ShootingStar), PatternLabel::Bearish);
    }

    #[test]
    fn term_lookup_is_case_insensitive() {
        let catalog = PatternCatalog::standard();
        assert_eq!(catalog.index_of_term("shooting star"), Some(4));
        assert_eq!(catalog.index_of_term("  HAMMER "), Some(3));
        assert_eq!(catalog.index_of_term("marubozu"), None);
    }
}
