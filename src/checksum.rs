//! Corruption checksum.
//!
//! The spreadsheet is a list of whitespace-separated rows of numbers. Part one
//! adds up each row's range; part two finds the one pair in each row where one
//! value evenly divides the other and adds up the quotients.

use itertools::{Itertools, MinMaxResult};

use crate::error::{Error, Result};

/// Parsed spreadsheet rows.
pub type Spreadsheet = Vec<Vec<u64>>;

/// Parses the spreadsheet, skipping blank lines.
pub fn parse_spreadsheet(input: &str) -> Result<Spreadsheet> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_index, line)| {
            line.split_whitespace()
                .map(|cell| {
                    cell.parse::<u64>().map_err(|_| {
                        Error::invalid(format!(
                            "line {}: {cell:?} is not a non-negative integer",
                            line_index + 1
                        ))
                    })
                })
                .collect()
        })
        .collect()
}

/// Difference between the largest and smallest value of a row.
pub fn row_range(row: &[u64]) -> u64 {
    match row.iter().minmax() {
        MinMaxResult::NoElements => 0,
        MinMaxResult::OneElement(_) => 0,
        MinMaxResult::MinMax(min, max) => max - min,
    }
}

/// Sum of every row's range.
pub fn checksum(spreadsheet: &[Vec<u64>]) -> u64 {
    spreadsheet.iter().map(|row| row_range(row)).sum()
}

/// Finds the first pair `(big, small)` of a row where `small` evenly divides
/// `big`, trying pairs of the sorted row in order.
pub fn row_divisors(row: &[u64]) -> Option<(u64, u64)> {
    row.iter()
        .copied()
        .sorted_unstable()
        .tuple_combinations()
        .find(|&(small, big)| small != 0 && big % small == 0)
        .map(|(small, big)| (big, small))
}

/// Sum of the quotient of each row's divisible pair.
pub fn divisible_sum(spreadsheet: &[Vec<u64>]) -> Result<u64> {
    spreadsheet
        .iter()
        .enumerate()
        .map(|(index, row)| {
            row_divisors(row)
                .map(|(big, small)| big / small)
                .ok_or(Error::NoDivisiblePair { row: index + 1 })
        })
        .sum()
}
