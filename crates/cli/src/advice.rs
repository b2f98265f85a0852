// Copyright (C) 2026 Oddsmith Developers
// SPDX-License-Identifier: Apache-2.0

//! Betting advice from estimated equity and pot odds.

/// Extra win percentage over break-even above which a raise is suggested.
const RAISE_MARGIN: f64 = 10.0;

/// A suggested betting action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advice {
    /// The win percentage is below break-even.
    Fold,
    /// The win percentage is at or slightly above break-even.
    Call,
    /// The win percentage is well above break-even.
    Raise {
        /// The suggested raise, one pot.
        raise_amount: f64,
        /// The pot after calling and raising.
        new_pot: f64,
    },
}

/// The win percentage needed to break even on a call.
pub fn break_even_equity(pot_size: f64, call_amount: f64) -> f64 {
    100.0 * call_amount / (pot_size + call_amount)
}

/// Suggests an action given an estimated win percentage and the pot odds.
pub fn advise(win_percentage: f64, pot_size: f64, call_amount: f64) -> Advice {
    let break_even = break_even_equity(pot_size, call_amount);

    if win_percentage < break_even {
        Advice::Fold
    } else if win_percentage < break_even + RAISE_MARGIN {
        Advice::Call
    } else {
        Advice::Raise {
            raise_amount: pot_size,
            new_pot: pot_size + call_amount + pot_size,
        }
    }
}
