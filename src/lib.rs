//! Advent of Code 2017 solvers, days 1 to 3.
//!
//! Each day lives in its own module and exposes plain functions over its
//! parsed input. The [`Day`] trait erases the per-day differences so the
//! binary can dispatch on a day number.

pub mod captcha;
pub mod checksum;
pub mod error;
pub mod grid;
pub mod inputs;
pub mod ring;
pub mod spiral;

use std::fmt;

use tracing::debug;

pub use error::{Error, Result};

/// One of the two puzzles of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub const BOTH: [Part; 2] = [Part::One, Part::Two];
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::One => f.write_str("part 1"),
            Part::Two => f.write_str("part 2"),
        }
    }
}

/// A day's pair of puzzles, independent of how its input is parsed.
pub trait Day: Sync {
    fn number(&self) -> u8;
    fn title(&self) -> &'static str;
    /// The embedded puzzle input.
    fn input(&self) -> &'static str;
    fn part_one(&self, input: &str) -> Result<u64>;
    fn part_two(&self, input: &str) -> Result<u64>;

    fn solve(&self, part: Part, input: &str) -> Result<u64> {
        debug!(day = self.number(), %part, input_len = input.len(), "solving");
        match part {
            Part::One => self.part_one(input),
            Part::Two => self.part_two(input),
        }
    }
}

/// Day 1: Inverse Captcha.
pub struct InverseCaptcha;

impl Day for InverseCaptcha {
    fn number(&self) -> u8 {
        1
    }

    fn title(&self) -> &'static str {
        "Inverse Captcha"
    }

    fn input(&self) -> &'static str {
        inputs::CAPTCHA
    }

    fn part_one(&self, input: &str) -> Result<u64> {
        captcha::sum_matching_next(input)
    }

    fn part_two(&self, input: &str) -> Result<u64> {
        captcha::sum_matching_halfway(input)
    }
}

/// Day 2: Corruption Checksum.
pub struct CorruptionChecksum;

impl Day for CorruptionChecksum {
    fn number(&self) -> u8 {
        2
    }

    fn title(&self) -> &'static str {
        "Corruption Checksum"
    }

    fn input(&self) -> &'static str {
        inputs::SPREADSHEET
    }

    fn part_one(&self, input: &str) -> Result<u64> {
        let spreadsheet = checksum::parse_spreadsheet(input)?;
        Ok(checksum::checksum(&spreadsheet))
    }

    fn part_two(&self, input: &str) -> Result<u64> {
        let spreadsheet = checksum::parse_spreadsheet(input)?;
        checksum::divisible_sum(&spreadsheet)
    }
}

/// Day 3: Spiral Memory.
pub struct SpiralMemory;

impl Day for SpiralMemory {
    fn number(&self) -> u8 {
        3
    }

    fn title(&self) -> &'static str {
        "Spiral Memory"
    }

    fn input(&self) -> &'static str {
        inputs::SPIRAL_SQUARE
    }

    fn part_one(&self, input: &str) -> Result<u64> {
        spiral::distance(spiral::parse_target(input)?)
    }

    fn part_two(&self, input: &str) -> Result<u64> {
        spiral::first_stress_value_above(spiral::parse_target(input)?)
    }
}

/// Every implemented day, in order.
pub const DAYS: [&dyn Day; 3] = [&InverseCaptcha, &CorruptionChecksum, &SpiralMemory];

/// Looks up the solver for day `number`.
pub fn day(number: u8) -> Result<&'static dyn Day> {
    DAYS.iter()
        .copied()
        .find(|day| day.number() == number)
        .ok_or(Error::UnknownDay(number))
}
