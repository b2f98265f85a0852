// Copyright (C) 2026 Oddsmith Developers
// SPDX-License-Identifier: Apache-2.0

//! Input parsing and validation.
//!
//! Parsing is pure and fallible, the re-prompt policy on errors belongs to
//! the caller loop.
use oddsmith_cards::{Card, ParseCardError};

/// Error returned when an input line is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// A token is not a valid card.
    #[error("{0}")]
    Card(#[from] ParseCardError),
    /// The wrong number of cards on the line.
    #[error("expected {expected} cards, got {actual}")]
    WrongCardCount {
        /// The expected number of cards.
        expected: usize,
        /// The number of cards received.
        actual: usize,
    },
    /// A card repeated on the line or already entered before.
    #[error("card {0} already used")]
    DuplicateCard(Card),
    /// An amount that is not a positive number.
    #[error("expected a positive amount, got {0:?}")]
    InvalidAmount(String),
}

/// Parses `count` whitespace or comma separated cards from a line.
///
/// The cards must be distinct between themselves and from the `known`
/// cards entered before.
pub fn parse_cards(line: &str, count: usize, known: &[Card]) -> Result<Vec<Card>, InputError> {
    let mut cards = Vec::with_capacity(count);

    for token in line.split([' ', ',', '\t']).filter(|t| !t.is_empty()) {
        let card = token.parse::<Card>()?;
        if cards.contains(&card) || known.contains(&card) {
            return Err(InputError::DuplicateCard(card));
        }

        cards.push(card);
    }

    if cards.len() != count {
        return Err(InputError::WrongCardCount {
            expected: count,
            actual: cards.len(),
        });
    }

    Ok(cards)
}

/// Parses a strictly positive amount.
pub fn parse_amount(line: &str) -> Result<f64, InputError> {
    line.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| InputError::InvalidAmount(line.trim().to_string()))
}
