// Copyright (C) 2026 Oddsmith Developers
// SPDX-License-Identifier: Apache-2.0

//! Hand scoring interface.
use oddsmith_cards::Card;
use oddsmith_eval::HandValue;

use crate::{BOARD_SIZE, HOLE_SIZE};

/// Error returned for a malformed card set passed to scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidHandError {
    /// A hand or a board with the wrong number of cards.
    #[error("expected {expected} cards, got {actual}")]
    WrongCardCount {
        /// The expected number of cards.
        expected: usize,
        /// The number of cards received.
        actual: usize,
    },
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Scores a 2 cards hole hand against a 5 cards board.
///
/// Implementations must be pure, for two holes scored against the same
/// board the objectively stronger poker hand gets the strictly greater
/// score and equal strength gets equal scores.
pub trait Scorer {
    /// The totally ordered hand score.
    type Score: Copy + Ord;

    /// Scores a hole hand against a board.
    ///
    /// Fails with [InvalidHandError] if the board is not 5 cards, the hole
    /// is not 2 cards, or any of the 7 cards is duplicated.
    fn score(&self, board: &[Card], hole: &[Card]) -> Result<Self::Score, InvalidHandError>;
}

/// A [Scorer] backed by the `oddsmith-eval` showdown evaluator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShowdownScorer;

impl Scorer for ShowdownScorer {
    type Score = HandValue;

    fn score(&self, board: &[Card], hole: &[Card]) -> Result<HandValue, InvalidHandError> {
        if board.len() != BOARD_SIZE {
            return Err(InvalidHandError::WrongCardCount {
                expected: BOARD_SIZE,
                actual: board.len(),
            });
        }

        if hole.len() != HOLE_SIZE {
            return Err(InvalidHandError::WrongCardCount {
                expected: HOLE_SIZE,
                actual: hole.len(),
            });
        }

        let mut cards = [board[0]; BOARD_SIZE + HOLE_SIZE];
        cards[..BOARD_SIZE].copy_from_slice(board);
        cards[BOARD_SIZE..].copy_from_slice(hole);

        if let Some(card) = find_duplicate(&cards) {
            return Err(InvalidHandError::DuplicateCard(card));
        }

        Ok(HandValue::eval(&cards))
    }
}

/// Returns the first card that appears more than once.
fn find_duplicate(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .enumerate()
        .find(|(pos, card)| cards[..*pos].contains(card))
        .map(|(_, card)| *card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oddsmith_eval::HandRank;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| c.parse().expect("valid card"))
            .collect()
    }

    #[test]
    fn showdown_scorer_orders_hands() {
        let board = cards("QH 9D 5C 3S 2H");
        let scorer = ShowdownScorer;

        let pair = scorer.score(&board, &cards("QS QD")).unwrap();
        let kicker = scorer.score(&board, &cards("AH QC")).unwrap();
        let air = scorer.score(&board, &cards("7H 6D")).unwrap();

        assert_eq!(pair.rank(), HandRank::ThreeOfAKind);
        assert!(pair > kicker);
        assert!(kicker > air);

        // Same strength different suits is a tie.
        let a = scorer.score(&board, &cards("AH KD")).unwrap();
        let b = scorer.score(&board, &cards("AD KS")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn showdown_scorer_rejects_bad_cardinality() {
        let scorer = ShowdownScorer;

        assert_eq!(
            scorer.score(&cards("QH 9D 5C 3S"), &cards("AH KD")),
            Err(InvalidHandError::WrongCardCount {
                expected: 5,
                actual: 4
            })
        );

        assert_eq!(
            scorer.score(&cards("QH 9D 5C 3S 2H"), &cards("AH KD 2D")),
            Err(InvalidHandError::WrongCardCount {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn showdown_scorer_rejects_duplicates() {
        let scorer = ShowdownScorer;
        let qh = "QH".parse::<Card>().unwrap();

        assert_eq!(
            scorer.score(&cards("QH 9D 5C 3S 2H"), &cards("AH QH")),
            Err(InvalidHandError::DuplicateCard(qh))
        );
    }
}
