// Copyright (C) 2026 Oddsmith Developers
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
use std::fmt;

use oddsmith_cards::Card;

/// The rank of a poker hand from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of a poker hand.
///
/// A hand value is a total order over poker hands, a hand value compares
/// greater than another if and only if its best five cards hand beats the
/// other's, hands of equal strength compare equal whatever their suits.
///
/// The value packs the [HandRank] in the high bits and up to five tie-break
/// ranks in the low nibbles:
///
/// ```text
///   +--------+--------+--------+--------+
///   |00000000|hhhhtttt|tttttttt|tttttttt|
///   +--------+--------+--------+--------+
///   h = hand rank (high card=0 up to straight flush=8)
///   t = tie-break ranks, most significant first (deuce=0 ... ace=12)
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u32);

impl HandValue {
    /// Evaluates a 5, 6, or 7 cards hand.
    ///
    /// Panics if the number of cards is not 5 <= n <= 7, cards must be
    /// distinct.
    pub fn eval(cards: &[Card]) -> HandValue {
        assert!(
            (5..=7).contains(&cards.len()),
            "eval requires 5 to 7 cards, got {}",
            cards.len()
        );

        let mut rank_counts = [0u8; 13];
        let mut suit_counts = [0u8; 4];
        let mut suit_masks = [0u16; 4];
        let mut rank_mask = 0u16;

        for c in cards {
            let rank = c.rank_bits() as usize;
            let suit = c.suit_bits().trailing_zeros() as usize;
            rank_counts[rank] += 1;
            suit_counts[suit] += 1;
            suit_masks[suit] |= 1 << rank;
            rank_mask |= 1 << rank;
        }

        // With at most 7 cards there is at most one flush suit.
        let flush_mask = suit_counts
            .iter()
            .position(|&n| n >= 5)
            .map(|suit| suit_masks[suit]);

        if let Some(mask) = flush_mask {
            if let Some(high) = straight_high(mask) {
                return Self::pack(HandRank::StraightFlush, &[high]);
            }
        }

        // Group ranks by count, from aces down to deuces.
        let mut quad = None;
        let mut trips = [None; 2];
        let mut pairs = [None; 2];
        for rank in (0..13u8).rev() {
            match rank_counts[rank as usize] {
                4 => quad = quad.or(Some(rank)),
                3 if trips[0].is_none() => trips[0] = Some(rank),
                3 if trips[1].is_none() => trips[1] = Some(rank),
                2 if pairs[0].is_none() => pairs[0] = Some(rank),
                2 if pairs[1].is_none() => pairs[1] = Some(rank),
                _ => {}
            }
        }

        if let Some(quad) = quad {
            let kicker = ranks_desc(rank_mask).find(|&r| r != quad);
            return Self::pack(HandRank::FourOfAKind, &[quad, kicker.unwrap_or(0)]);
        }

        if let (Some(three), Some(pair)) = (trips[0], trips[1].or(pairs[0])) {
            return Self::pack(HandRank::FullHouse, &[three, pair]);
        }

        if let Some(mask) = flush_mask {
            let mut ranks = [0u8; 5];
            for (slot, rank) in ranks.iter_mut().zip(ranks_desc(mask)) {
                *slot = rank;
            }
            return Self::pack(HandRank::Flush, &ranks);
        }

        if let Some(high) = straight_high(rank_mask) {
            return Self::pack(HandRank::Straight, &[high]);
        }

        if let Some(three) = trips[0] {
            let mut tie = [three, 0, 0];
            for (slot, rank) in tie[1..]
                .iter_mut()
                .zip(ranks_desc(rank_mask).filter(|&r| r != three))
            {
                *slot = rank;
            }
            return Self::pack(HandRank::ThreeOfAKind, &tie);
        }

        match pairs {
            [Some(hi), Some(lo)] => {
                let kicker = ranks_desc(rank_mask).find(|&r| r != hi && r != lo);
                Self::pack(HandRank::TwoPair, &[hi, lo, kicker.unwrap_or(0)])
            }
            [Some(pair), None] => {
                let mut tie = [pair, 0, 0, 0];
                for (slot, rank) in tie[1..]
                    .iter_mut()
                    .zip(ranks_desc(rank_mask).filter(|&r| r != pair))
                {
                    *slot = rank;
                }
                Self::pack(HandRank::OnePair, &tie)
            }
            _ => {
                let mut tie = [0u8; 5];
                for (slot, rank) in tie.iter_mut().zip(ranks_desc(rank_mask)) {
                    *slot = rank;
                }
                Self::pack(HandRank::HighCard, &tie)
            }
        }
    }

    /// Returns the rank of this hand.
    pub fn rank(&self) -> HandRank {
        use HandRank::*;
        const RANKS: [HandRank; 9] = [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ];
        RANKS[(self.0 >> 20) as usize]
    }

    /// Packs a hand rank and up to 5 tie-break ranks, most significant first.
    fn pack(rank: HandRank, tie_breaks: &[u8]) -> HandValue {
        debug_assert!(tie_breaks.len() <= 5);

        let mut value = (rank as u32) << 20;
        for (pos, &rank) in tie_breaks.iter().enumerate() {
            value |= (rank as u32) << (16 - pos * 4);
        }

        HandValue(value)
    }
}

impl fmt::Debug for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandValue({}, 0x{:05x})", self.rank(), self.0 & 0xFFFFF)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank())
    }
}

/// Returns the high card rank of the best straight in a ranks mask.
///
/// The ace bit counts both as the top of a broadway straight and as the
/// bottom of a five high wheel.
fn straight_high(mask: u16) -> Option<u8> {
    const WHEEL: u16 = 0b1_0000_0000_1111;

    for high in (4..=12u8).rev() {
        let run = 0b11111 << (high - 4);
        if mask & run == run {
            return Some(high);
        }
    }

    (mask & WHEEL == WHEEL).then_some(3)
}

/// Iterates the ranks present in a mask from the ace down to the deuce.
fn ranks_desc(mask: u16) -> impl Iterator<Item = u8> {
    (0..13u8).rev().filter(move |r| mask & (1 << r) != 0)
}
