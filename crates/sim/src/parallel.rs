// Copyright (C) 2026 Oddsmith Developers
// SPDX-License-Identifier: Apache-2.0

//! Parallel equity estimation.
use rand::prelude::*;
use std::{thread, time::Instant};

use oddsmith_cards::Card;

use crate::{
    equity::{EquityError, EquityResult, EquitySimulator},
    scorer::Scorer,
};

impl<S: Scorer + Sync> EquitySimulator<S> {
    /// Estimates equity running trials over `num_tasks` parallel tasks.
    ///
    /// Trials are independent so the iterations are split across tasks,
    /// each task draws from its own random source and accumulates its own
    /// tally, the tallies are merged once every task completes. The
    /// optional deadline truncates each task's trials, see
    /// [estimate_with_deadline](Self::estimate_with_deadline).
    ///
    /// Panics if `num_tasks` is zero.
    pub fn par_estimate(
        &self,
        num_tasks: usize,
        hero: &[Card],
        board: &[Card],
        opponents: usize,
        iterations: u64,
        deadline: Option<Instant>,
    ) -> Result<EquityResult, EquityError> {
        assert!(num_tasks > 0);

        // Validate inputs before spawning any task.
        self.run(hero, board, opponents, 0, None, &mut rand::rng())?;

        let per_task = iterations.div_ceil(num_tasks as u64);

        thread::scope(|s| {
            let tasks = (0..num_tasks as u64)
                .map(|task_id| {
                    let count = per_task.min(iterations.saturating_sub(task_id * per_task));
                    s.spawn(move || {
                        let mut rng = SmallRng::from_os_rng();
                        self.run(hero, board, opponents, count, deadline, &mut rng)
                    })
                })
                .collect::<Vec<_>>();

            let mut tally = EquityResult::default();
            for task in tasks {
                let partial = task.join().expect("equity task panicked")?;
                tally.merge(&partial);
            }

            Ok(tally)
        })
    }
}
