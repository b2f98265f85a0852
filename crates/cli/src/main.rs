// Copyright (C) 2026 Oddsmith Developers
// SPDX-License-Identifier: Apache-2.0

//! Oddsmith Poker equity advisor CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use log::info;
use std::{
    fmt,
    io::{self, BufRead, Write},
    time::{Duration, Instant},
};

use oddsmith_eval::HandValue;
use oddsmith_sim::{BOARD_SIZE, EquitySimulator, HOLE_SIZE};

mod advice;
mod input;

use advice::Advice;

#[derive(Debug, Parser)]
#[command(about = "Estimates showdown equity and suggests a betting action")]
struct Cli {
    /// Number of opponents to simulate against.
    #[clap(long, short, default_value_t = 1)]
    opponents: usize,
    /// Number of Monte Carlo trials.
    #[clap(long, short, default_value_t = 10_000)]
    iterations: u64,
    /// Number of parallel tasks, 0 runs on the calling thread.
    #[clap(long, short, default_value_t = 0)]
    tasks: usize,
    /// Stop the simulation after this many milliseconds.
    #[clap(long)]
    timeout_ms: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin().lock();
    let mut lines = stdin.lines();

    println!("Enter your 2 hole cards (e.g. AH KD):");
    let hero = prompt(&mut lines, "Hole cards: ", |line| {
        input::parse_cards(line, HOLE_SIZE, &[])
    })?;

    println!("\nEnter the 5 community cards:");
    let board = prompt(&mut lines, "Board cards: ", |line| {
        input::parse_cards(line, BOARD_SIZE, &hero)
    })?;

    let pot_size = prompt(&mut lines, "\nCurrent pot size: ", input::parse_amount)?;
    let call_amount = prompt(&mut lines, "Amount to call: ", input::parse_amount)?;

    let showdown = board
        .iter()
        .chain(hero.iter())
        .copied()
        .collect::<Vec<_>>();
    println!("\nYour hand: {}", HandValue::eval(&showdown));

    let deadline = cli
        .timeout_ms
        .map(|ms| Instant::now() + Duration::from_millis(ms));

    let sim = EquitySimulator::new();
    let result = if cli.tasks > 0 {
        sim.par_estimate(
            cli.tasks,
            &hero,
            &board,
            cli.opponents,
            cli.iterations,
            deadline,
        )?
    } else if let Some(deadline) = deadline {
        sim.estimate_with_deadline(
            &hero,
            &board,
            cli.opponents,
            cli.iterations,
            deadline,
            &mut rand::rng(),
        )?
    } else {
        sim.estimate(&hero, &board, cli.opponents, cli.iterations, &mut rand::rng())?
    };

    if result.trials() < cli.iterations {
        info!(
            "deadline reached after {} of {} trials",
            result.trials(),
            cli.iterations
        );
    }

    println!(
        "\nEstimated win percentage: {:.2}% over {} trials",
        result.win_percentage(),
        result.trials()
    );
    println!("Estimated tie percentage: {:.2}%", result.tie_percentage());
    println!(
        "\nBreak-even equity needed: {:.2}%",
        advice::break_even_equity(pot_size, call_amount)
    );

    match advice::advise(result.win_percentage(), pot_size, call_amount) {
        Advice::Fold => {
            println!("Your win percentage is below the break-even point. You should fold.");
        }
        Advice::Call => {
            println!(
                "Your win percentage is slightly above the break-even point. \
                 Calling is reasonable."
            );
        }
        Advice::Raise {
            raise_amount,
            new_pot,
        } => {
            println!("Your win percentage is significantly above the break-even point.");
            println!(
                "Consider raising by about {raise_amount:.2}, making the pot {new_pot:.2}."
            );
        }
    }

    Ok(())
}

/// Prompts until the parse function accepts a line, fails at end of input.
fn prompt<B, T, E, F>(lines: &mut io::Lines<B>, msg: &str, parse: F) -> Result<T>
where
    B: BufRead,
    E: fmt::Display,
    F: Fn(&str) -> Result<T, E>,
{
    loop {
        print!("{msg}");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("unexpected end of input");
        };

        match parse(&line?) {
            Ok(value) => return Ok(value),
            Err(err) => println!("{err}, try again."),
        }
    }
}
