// Copyright (C) 2026 Oddsmith Developers
// SPDX-License-Identifier: Apache-2.0

//! Oddsmith Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator counts
//! ranks and suits to find the best five cards hand and packs its rank and
//! tie-break ranks into a [HandValue], a total order where a greater value
//! beats a lesser one and hands of equal strength compare equal.
//!
//! ```
//! # use oddsmith_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]);
//! let v2 = HandValue::eval(&cards[5..]);
//! assert!(v2 > v1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use oddsmith_cards::{Card, Deck, Rank, Suit};
