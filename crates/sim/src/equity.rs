// Copyright (C) 2026 Oddsmith Developers
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo equity estimation.
use log::debug;
use rand::prelude::*;
use std::time::Instant;

use oddsmith_cards::{Card, Deck};

use crate::{
    BOARD_SIZE, HOLE_SIZE,
    scorer::{InvalidHandError, Scorer, ShowdownScorer},
};

/// Error returned by an equity estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EquityError {
    /// The hero hand or the board is malformed.
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] InvalidHandError),
    /// Not enough unknown cards to deal every opponent.
    #[error("cannot deal {opponents} opponents, {needed} cards needed but {available} unknown")]
    InsufficientCards {
        /// The requested number of opponents.
        opponents: usize,
        /// The number of cards needed to deal them.
        needed: usize,
        /// The number of unknown cards available.
        available: usize,
    },
}

/// Win and tie tallies over the completed simulation trials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EquityResult {
    wins: u64,
    ties: u64,
    losses: u64,
}

impl EquityResult {
    /// The number of trials the hero won outright.
    pub fn wins(&self) -> u64 {
        self.wins
    }

    /// The number of trials the hero tied with the best opponent.
    pub fn ties(&self) -> u64 {
        self.ties
    }

    /// The number of trials the hero lost.
    pub fn losses(&self) -> u64 {
        self.losses
    }

    /// The number of completed trials.
    ///
    /// This can be lower than the requested iterations when a deadline
    /// truncates the simulation, percentages stay valid over the completed
    /// trials.
    pub fn trials(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// The percentage of trials the hero won, in [0, 100].
    pub fn win_percentage(&self) -> f64 {
        self.percent(self.wins)
    }

    /// The percentage of trials the hero tied, in [0, 100].
    pub fn tie_percentage(&self) -> f64 {
        self.percent(self.ties)
    }

    /// Merges another tally into this one, merge order is irrelevant.
    pub fn merge(&mut self, other: &EquityResult) {
        self.wins += other.wins;
        self.ties += other.ties;
        self.losses += other.losses;
    }

    fn percent(&self, count: u64) -> f64 {
        let trials = self.trials();
        if trials == 0 {
            0.0
        } else {
            count as f64 * 100.0 / trials as f64
        }
    }
}

/// Monte Carlo equity simulator.
///
/// Estimates the hero win and tie probability on a fully known board
/// against opponents dealt at random from the unknown cards, scoring every
/// hand with a [Scorer].
#[derive(Debug, Clone)]
pub struct EquitySimulator<S = ShowdownScorer> {
    scorer: S,
}

impl EquitySimulator<ShowdownScorer> {
    /// Creates a simulator with the showdown evaluator scorer.
    pub fn new() -> Self {
        Self::with_scorer(ShowdownScorer)
    }
}

impl Default for EquitySimulator<ShowdownScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scorer> EquitySimulator<S> {
    /// Creates a simulator with the given scorer.
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Estimates the hero equity against `opponents` random hands.
    ///
    /// Runs `iterations` independent trials, each trial deals 2 cards per
    /// opponent from a fresh random permutation of the unknown cards, no
    /// trial deals the same card twice. With no opponents every trial is a
    /// hero win.
    ///
    /// Fails fast before any trial with [EquityError::InvalidHand] if the
    /// hero hand is not 2 cards, the board is not 5 cards, or a card is
    /// duplicated, and with [EquityError::InsufficientCards] if the unknown
    /// cards cannot cover every opponent.
    pub fn estimate<R: Rng>(
        &self,
        hero: &[Card],
        board: &[Card],
        opponents: usize,
        iterations: u64,
        rng: &mut R,
    ) -> Result<EquityResult, EquityError> {
        self.run(hero, board, opponents, iterations, None, rng)
    }

    /// Same as [estimate](Self::estimate) with a deadline.
    ///
    /// Stops dealing new trials once the deadline has passed, the result
    /// reports percentages over the completed trials, see
    /// [EquityResult::trials].
    pub fn estimate_with_deadline<R: Rng>(
        &self,
        hero: &[Card],
        board: &[Card],
        opponents: usize,
        iterations: u64,
        deadline: Instant,
        rng: &mut R,
    ) -> Result<EquityResult, EquityError> {
        self.run(hero, board, opponents, iterations, Some(deadline), rng)
    }

    pub(crate) fn run<R: Rng>(
        &self,
        hero: &[Card],
        board: &[Card],
        opponents: usize,
        iterations: u64,
        deadline: Option<Instant>,
        rng: &mut R,
    ) -> Result<EquityResult, EquityError> {
        // The board and the hero hand are fixed for the whole simulation,
        // score the hero once. This also validates cardinality and
        // duplicates before any trial runs.
        let hero_score = self.scorer.score(board, hero)?;

        let known = hero
            .iter()
            .chain(board.iter())
            .copied()
            .collect::<Vec<_>>();
        let mut unknown = Deck::without(&known).into_iter().collect::<Vec<_>>();
        debug_assert_eq!(unknown.len(), Deck::SIZE - BOARD_SIZE - HOLE_SIZE);

        // Compare before multiplying, a huge opponent count must not
        // overflow the cards count.
        if opponents > unknown.len() / HOLE_SIZE {
            return Err(EquityError::InsufficientCards {
                opponents,
                needed: opponents.saturating_mul(HOLE_SIZE),
                available: unknown.len(),
            });
        }

        let needed = opponents * HOLE_SIZE;

        let mut tally = EquityResult::default();
        for _ in 0..iterations {
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                debug!("deadline reached after {} trials", tally.trials());
                break;
            }

            // Deal every opponent from the front of a random permutation
            // of the unknown cards, opponents never share a card.
            let (dealt, _) = unknown.partial_shuffle(rng, needed);

            let mut best = None;
            for hole in dealt.chunks_exact(HOLE_SIZE) {
                let score = self.scorer.score(board, hole)?;
                best = Some(best.map_or(score, |b: S::Score| b.max(score)));
            }

            match best {
                // No opponents, the trial is an automatic hero win.
                None => tally.wins += 1,
                Some(best) if hero_score > best => tally.wins += 1,
                Some(best) if hero_score == best => tally.ties += 1,
                Some(_) => tally.losses += 1,
            }
        }

        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::SmallRng;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| c.parse().expect("valid card"))
            .collect()
    }

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    /// Scores the first call (the hero) with a fixed score and cycles the
    /// given scores over the opponent calls.
    struct SeqScorer {
        hero: u32,
        opponents: Vec<u32>,
        calls: Cell<usize>,
    }

    impl SeqScorer {
        fn new(hero: u32, opponents: &[u32]) -> Self {
            Self {
                hero,
                opponents: opponents.to_vec(),
                calls: Cell::new(0),
            }
        }
    }

    impl Scorer for SeqScorer {
        type Score = u32;

        fn score(&self, _board: &[Card], _hole: &[Card]) -> Result<u32, InvalidHandError> {
            let call = self.calls.get();
            self.calls.set(call + 1);

            if call == 0 {
                Ok(self.hero)
            } else {
                Ok(self.opponents[(call - 1) % self.opponents.len()])
            }
        }
    }

    fn estimate_seq(hero: u32, opponents: &[u32]) -> EquityResult {
        let sim = EquitySimulator::with_scorer(SeqScorer::new(hero, opponents));
        sim.estimate(
            &cards("AH KD"),
            &cards("QH 9D 5C 3S 2H"),
            opponents.len(),
            1,
            &mut rng(),
        )
        .unwrap()
    }

    #[test]
    fn tie_only_with_best_opponent() {
        // Hero ties the maximum opponent score.
        let result = estimate_seq(5, &[5, 5]);
        assert_eq!((result.wins(), result.ties(), result.losses()), (0, 1, 0));

        // Hero ties one opponent but another one beats it, that is a loss.
        let result = estimate_seq(5, &[5, 9]);
        assert_eq!((result.wins(), result.ties(), result.losses()), (0, 0, 1));

        // Hero beats every opponent.
        let result = estimate_seq(9, &[5, 5, 8]);
        assert_eq!((result.wins(), result.ties(), result.losses()), (1, 0, 0));
    }

    #[test]
    fn zero_opponents_always_wins() {
        let sim = EquitySimulator::new();
        let result = sim
            .estimate(&cards("AH KD"), &cards("QH 9D 5C 3S 2H"), 0, 100, &mut rng())
            .unwrap();

        assert_eq!(result.trials(), 100);
        assert_relative_eq!(result.win_percentage(), 100.0);
        assert_relative_eq!(result.tie_percentage(), 0.0);
    }

    #[test]
    fn tallies_add_up() {
        let sim = EquitySimulator::new();
        let result = sim
            .estimate(&cards("AH KD"), &cards("QH 9D 5C 3S 2H"), 3, 500, &mut rng())
            .unwrap();

        assert_eq!(result.wins() + result.ties() + result.losses(), 500);
        assert!((0.0..=100.0).contains(&result.win_percentage()));
        assert!((0.0..=100.0).contains(&result.tie_percentage()));
    }

    /// Records every hole it scores, every hand ties.
    #[derive(Default)]
    struct RecordingScorer {
        seen: RefCell<Vec<Card>>,
    }

    impl Scorer for RecordingScorer {
        type Score = u32;

        fn score(&self, _board: &[Card], hole: &[Card]) -> Result<u32, InvalidHandError> {
            self.seen.borrow_mut().extend_from_slice(hole);
            Ok(0)
        }
    }

    #[test]
    fn no_card_is_dealt_twice_in_a_trial() {
        let hero = cards("AH KD");
        let board = cards("QH 9D 5C 3S 2H");

        for seed in 0..20 {
            let sim = EquitySimulator::with_scorer(RecordingScorer::default());
            let mut rng = SmallRng::seed_from_u64(seed);
            sim.estimate(&hero, &board, 5, 1, &mut rng).unwrap();

            let seen = sim.scorer.seen.borrow();
            // Hero hole plus 5 opponent holes.
            assert_eq!(seen.len(), 12);

            let unique = seen.iter().collect::<ahash::HashSet<_>>();
            assert_eq!(unique.len(), seen.len(), "duplicate dealt card");

            // Dealt cards never overlap the board.
            assert!(seen.iter().all(|c| !board.contains(c)));
        }
    }

    #[test]
    fn insufficient_cards_fails_before_any_trial() {
        let sim = EquitySimulator::new();
        let err = sim
            .estimate(
                &cards("AH KD"),
                &cards("QH 9D 5C 3S 2H"),
                23,
                100,
                &mut rng(),
            )
            .unwrap_err();

        assert_eq!(
            err,
            EquityError::InsufficientCards {
                opponents: 23,
                needed: 46,
                available: 45,
            }
        );
    }

    #[test]
    fn huge_opponent_counts_are_insufficient() {
        // Large enough to overflow the needed cards multiplication.
        let opponents = usize::MAX / 2 + 1;

        let sim = EquitySimulator::new();
        let err = sim
            .estimate(
                &cards("AH KD"),
                &cards("QH 9D 5C 3S 2H"),
                opponents,
                10,
                &mut rng(),
            )
            .unwrap_err();

        assert_eq!(
            err,
            EquityError::InsufficientCards {
                opponents,
                needed: usize::MAX,
                available: 45,
            }
        );
    }

    #[test]
    fn malformed_inputs_fail_fast() {
        let sim = EquitySimulator::new();

        // Four cards board.
        let err = sim
            .estimate(&cards("AH KD"), &cards("QH 9D 5C 3S"), 1, 100, &mut rng())
            .unwrap_err();
        assert_eq!(
            err,
            EquityError::InvalidHand(InvalidHandError::WrongCardCount {
                expected: 5,
                actual: 4
            })
        );

        // Hero card also on the board.
        let err = sim
            .estimate(&cards("AH QH"), &cards("QH 9D 5C 3S 2H"), 1, 100, &mut rng())
            .unwrap_err();
        assert_eq!(
            err,
            EquityError::InvalidHand(InvalidHandError::DuplicateCard(
                "QH".parse().unwrap()
            ))
        );
    }

    #[test]
    fn aces_have_high_equity_heads_up() {
        let sim = EquitySimulator::new();
        let result = sim
            .estimate(
                &cards("AS AH"),
                &cards("KD 7C 3S 9H 2D"),
                1,
                2_000,
                &mut rng(),
            )
            .unwrap();

        assert!(
            result.win_percentage() > 85.0,
            "AA win: {}",
            result.win_percentage()
        );
    }

    #[test]
    fn more_opponents_never_help() {
        let sim = EquitySimulator::new();
        let hero = cards("AS KS");
        let board = cards("QH 7D 3C 9H 2D");

        let one = sim.estimate(&hero, &board, 1, 4_000, &mut rng()).unwrap();
        let four = sim.estimate(&hero, &board, 4, 4_000, &mut rng()).unwrap();

        // Statistical, allow for sampling noise.
        assert!(
            one.win_percentage() + 3.0 > four.win_percentage(),
            "1 opp: {} 4 opps: {}",
            one.win_percentage(),
            four.win_percentage()
        );
    }

    #[test]
    fn deadline_truncates_trials() {
        let sim = EquitySimulator::new();
        let hero = cards("AH KD");
        let board = cards("QH 9D 5C 3S 2H");

        // Already expired, no trial runs.
        let deadline = Instant::now() - Duration::from_millis(1);
        let result = sim
            .estimate_with_deadline(&hero, &board, 2, 1_000, deadline, &mut rng())
            .unwrap();
        assert_eq!(result.trials(), 0);
        assert_relative_eq!(result.win_percentage(), 0.0);

        // A generous deadline completes every trial.
        let deadline = Instant::now() + Duration::from_secs(60);
        let result = sim
            .estimate_with_deadline(&hero, &board, 2, 100, deadline, &mut rng())
            .unwrap();
        assert_eq!(result.trials(), 100);
    }

    #[test]
    fn merge_accumulates_tallies() {
        let mut a = EquityResult {
            wins: 10,
            ties: 2,
            losses: 8,
        };
        let b = EquityResult {
            wins: 5,
            ties: 0,
            losses: 15,
        };

        a.merge(&b);
        assert_eq!((a.wins(), a.ties(), a.losses()), (15, 2, 23));
        assert_eq!(a.trials(), 40);
        assert_relative_eq!(a.win_percentage(), 37.5);
        assert_relative_eq!(a.tie_percentage(), 5.0);
    }
}
