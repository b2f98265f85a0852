// Copyright (C) 2026 Oddsmith Developers
// SPDX-License-Identifier: Apache-2.0

//! Oddsmith Monte Carlo equity simulator.
//!
//! Estimates a hero hand win and tie probability on a fully known 5 cards
//! board against any number of opponents dealt at random from the unknown
//! cards:
//!
//! ```
//! # use oddsmith_sim::*;
//! # use oddsmith_cards::Card;
//! # use rand::{SeedableRng, rngs::SmallRng};
//! let hero = ["AS", "AH"].map(|c| c.parse::<Card>().unwrap());
//! let board = ["KD", "7C", "3S", "9H", "2D"].map(|c| c.parse::<Card>().unwrap());
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let sim = EquitySimulator::new();
//! let result = sim.estimate(&hero, &board, 1, 10_000, &mut rng).unwrap();
//!
//! assert!(result.win_percentage() > 85.0);
//! assert_eq!(result.trials(), 10_000);
//! ```
//!
//! Trials are independent, [EquitySimulator::par_estimate] splits them
//! across threads with a random source per task, and
//! [EquitySimulator::estimate_with_deadline] truncates a long simulation
//! at a deadline reporting the completed trials.
//!
//! Scoring goes through the [Scorer] trait so the simulator can be tested
//! with stub scorers, [ShowdownScorer] wires in the `oddsmith-eval`
//! evaluator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

/// The number of cards on a full board.
pub const BOARD_SIZE: usize = 5;

/// The number of cards in a hole hand.
pub const HOLE_SIZE: usize = 2;

mod equity;
mod parallel;
mod scorer;

pub use equity::{EquityError, EquityResult, EquitySimulator};
pub use scorer::{InvalidHandError, Scorer, ShowdownScorer};
