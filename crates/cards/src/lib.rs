// Copyright (C) 2026 Oddsmith Developers
// SPDX-License-Identifier: Apache-2.0

//! Oddsmith Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use oddsmith_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! cards can also be parsed from a rank and suit pair:
//!
//! ```
//! # use oddsmith_cards::{Card, Rank, Suit};
//! let ah = "AH".parse::<Card>().unwrap();
//! assert_eq!(ah, Card::new(Rank::Ace, Suit::Hearts));
//! ```
//!
//! and a [Deck] type for building the canonical 52 cards deck, removing
//! known cards, and shuffling:
//!
//! ```
//! # use oddsmith_cards::{Card, Deck, Rank, Suit};
//! let deck = Deck::without(&[Card::new(Rank::Ace, Suit::Hearts)]);
//! assert_eq!(deck.count(), 51);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
