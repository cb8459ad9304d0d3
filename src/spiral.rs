//! Spiral memory.
//!
//! Squares are allocated on an infinite grid in a spiral starting at 1 and
//! counting up while spiraling outward counter-clockwise:
//!
//! ```text
//! 17  16  15  14  13
//! 18   5   4   3  12
//! 19   6   1   2  11
//! 20   7   8   9  10
//! 21  22  23---> ...
//! ```
//!
//! Nothing here materializes the grid. Each index is located by finding its
//! [`Ring`], then the side of that ring it lies on, then its offset from the
//! midpoint of that side.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::error::{Error, Result};
use crate::ring::{check_target, Ring, Side, MAX_RING};

/// A grid cell. x grows to the right, y grows upward, index 1 sits at the origin.
pub type Position = (i64, i64);

/// Offsets of the eight cells surrounding a position.
const NEIGHBOURS: [Position; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Parses a spiral index from text.
///
/// Only positive decimal integers are accepted; zero, negative numbers and
/// fractions all fail with [`Error::InvalidInput`].
pub fn parse_target(text: &str) -> Result<u64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::invalid("empty spiral index"));
    }
    let target = text
        .parse::<u64>()
        .map_err(|_| Error::invalid(format!("{text:?} is not a positive integer")))?;
    check_target(target)?;
    Ok(target)
}

/// Vertical and horizontal distance from `target` to the center.
fn axis_distances(target: u64) -> Result<(u64, u64)> {
    if target == 1 {
        return Ok((0, 0));
    }

    let ring = Ring::containing(target)?;
    let distances = match ring.side(target) {
        Side::Top => (ring.rank, target.abs_diff(ring.middle_top)),
        Side::Bottom => (ring.rank, target.abs_diff(ring.middle_bottom)),
        Side::Right => (target.abs_diff(ring.middle_right), ring.rank),
        Side::Left => (target.abs_diff(ring.middle_left), ring.rank),
    };
    Ok(distances)
}

/// Number of rows between `target` and the center row.
///
/// Top and bottom sides (corners included) are whole rows `rank` away from
/// the center. On the right and left sides the offset is measured from the
/// side's midpoint.
pub fn vertical_distance(target: u64) -> Result<u64> {
    axis_distances(target).map(|(vertical, _)| vertical)
}

/// Number of columns between `target` and the center column.
pub fn horizontal_distance(target: u64) -> Result<u64> {
    axis_distances(target).map(|(_, horizontal)| horizontal)
}

/// Manhattan distance from the cell holding `target` to the cell holding 1.
pub fn distance(target: u64) -> Result<u64> {
    let (vertical, horizontal) = axis_distances(target)?;
    Ok(vertical + horizontal)
}

/// Signed difference `a - b` for indices within one ring.
#[inline]
fn signed_offset(a: u64, b: u64) -> i64 {
    if a >= b {
        (a - b) as i64
    } else {
        -((b - a) as i64)
    }
}

/// Grid position of `target`.
pub fn position(target: u64) -> Result<Position> {
    let ring = Ring::containing(target)?;
    let rank = ring.rank as i64;

    let position = match ring.side(target) {
        Side::Right => (rank, signed_offset(target, ring.middle_right)),
        Side::Top => (signed_offset(ring.middle_top, target), rank),
        Side::Left => (-rank, signed_offset(ring.middle_left, target)),
        Side::Bottom => (signed_offset(target, ring.middle_bottom), -rank),
    };
    Ok(position)
}

/// Linear index stored at `position`; the inverse of [`position`].
pub fn index_at((x, y): Position) -> Result<u64> {
    let rank = x.unsigned_abs().max(y.unsigned_abs());
    if rank > MAX_RING {
        return Err(Error::invalid(format!(
            "({x}, {y}) lies outside the largest supported ring"
        )));
    }

    let ring = Ring::new(rank);
    let rank = rank as i64;
    let index = if rank == 0 {
        1
    } else if x == rank && y > -rank {
        ring.middle_right.wrapping_add_signed(y)
    } else if y == rank {
        ring.middle_top.wrapping_add_signed(-x)
    } else if x == -rank {
        ring.middle_left.wrapping_add_signed(-y)
    } else {
        ring.middle_bottom.wrapping_add_signed(x)
    };
    Ok(index)
}

/// Values written by the spiral stress test.
///
/// The center cell holds 1. Every later cell, in spiral order, holds the sum of
/// the values already written into its eight neighbours. Iteration ends if a
/// value would overflow `u64`.
pub struct StressTest {
    next_index: u64,
    cells: FxHashMap<Position, u64>,
}

impl StressTest {
    pub fn new() -> Self {
        Self {
            next_index: 1,
            cells: FxHashMap::default(),
        }
    }
}

impl Default for StressTest {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for StressTest {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next_index;
        let (x, y) = position(index).ok()?;

        let value = if index == 1 {
            1
        } else {
            NEIGHBOURS
                .iter()
                .filter_map(|&(dx, dy)| self.cells.get(&(x + dx, y + dy)))
                .try_fold(0u64, |sum, &value| sum.checked_add(value))?
        };

        trace!(index, x, y, value, "stress test cell");
        self.cells.insert((x, y), value);
        self.next_index += 1;
        Some(value)
    }
}

/// Iterator over the stress-test sequence, starting at the center.
pub fn stress_test_values() -> StressTest {
    StressTest::new()
}

/// First value written by the stress test that is larger than `limit`.
pub fn first_stress_value_above(limit: u64) -> Result<u64> {
    stress_test_values()
        .find(|&value| value > limit)
        .ok_or_else(|| Error::invalid(format!("no stress test value above {limit} fits in u64")))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::ring::{last_in_ring, MAX_TARGET};

    #[test]
    fn test_reference_distances() {
        for (target, steps) in [(1, 0), (12, 3), (23, 2), (1024, 31)] {
            assert_eq!(distance(target).unwrap(), steps, "distance({target})");
        }
    }

    #[test]
    fn test_vertical_distance_examples() {
        let cases = [
            (1, 0),
            (2, 0),
            (3, 1),
            (9, 1),
            (11, 0),
            (15, 2),
            (16, 2),
            (23, 2),
            (26, 2),
        ];
        for (target, expected) in cases {
            assert_eq!(vertical_distance(target).unwrap(), expected, "vertical({target})");
        }
    }

    #[test]
    fn test_horizontal_distance_examples() {
        let cases = [
            (1, 0),
            (2, 1),
            (3, 1),
            (9, 1),
            (11, 2),
            (15, 0),
            (16, 1),
            (23, 0),
            (26, 3),
        ];
        for (target, expected) in cases {
            assert_eq!(
                horizontal_distance(target).unwrap(),
                expected,
                "horizontal({target})"
            );
        }
    }

    #[test]
    fn test_corners_are_rank_away_on_both_axes() {
        for rank in 1..500 {
            let ring = Ring::new(rank);
            for corner in ring.corners() {
                assert_eq!(vertical_distance(corner).unwrap(), rank, "corner {corner}");
                assert_eq!(horizontal_distance(corner).unwrap(), rank, "corner {corner}");
                assert_eq!(distance(corner).unwrap(), 2 * rank, "corner {corner}");
            }
        }
    }

    #[test]
    fn test_midpoints_are_rank_away() {
        for rank in 1..500 {
            let ring = Ring::new(rank);
            for midpoint in ring.midpoints() {
                assert_eq!(distance(midpoint).unwrap(), rank, "midpoint {midpoint}");
            }
        }
    }

    #[test]
    fn test_distance_grows_up_to_top_right_corner() {
        for rank in 1..100 {
            let ring = Ring::new(rank);
            let distances: Vec<u64> = (ring.middle_right..=ring.top_right)
                .map(|target| distance(target).unwrap())
                .collect();
            assert!(
                distances.windows(2).all(|pair| pair[0] <= pair[1]),
                "ring {rank}: {distances:?}"
            );
        }
    }

    #[test]
    fn test_positions_of_first_ring() {
        let expected = [
            (0, 0),
            (1, 0),
            (1, 1),
            (0, 1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
            (0, -1),
            (1, -1),
            (2, -1),
        ];
        for (index, want) in (1..).zip(expected) {
            assert_eq!(position(index).unwrap(), want, "position({index})");
        }
    }

    #[test]
    fn test_index_at_examples() {
        assert_eq!(index_at((0, 0)).unwrap(), 1);
        assert_eq!(index_at((-2, 2)).unwrap(), 17);
        assert_eq!(index_at((0, -2)).unwrap(), 23);
        assert_eq!(index_at((2, -2)).unwrap(), 25);
        assert!(index_at((i64::MIN, 0)).is_err());
    }

    #[test]
    fn test_largest_target() {
        let rank = MAX_RING as i64;
        assert_eq!(position(MAX_TARGET).unwrap(), (rank, -rank));
        assert_eq!(distance(MAX_TARGET).unwrap(), 2 * MAX_RING);
        assert_eq!(index_at((rank, -rank)).unwrap(), MAX_TARGET);
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("368078\n").unwrap(), 368078);
        assert_eq!(parse_target(" 1 ").unwrap(), 1);
        for bad in ["", "   ", "0", "-3", "2.5", "twelve", "18446744073709551616"] {
            assert!(
                matches!(parse_target(bad), Err(Error::InvalidInput(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_zero_is_invalid() {
        assert!(matches!(distance(0), Err(Error::InvalidInput(_))));
        assert!(matches!(position(0), Err(Error::InvalidInput(_))));
        assert!(matches!(distance(MAX_TARGET + 1), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_stress_test_prefix() {
        let values: Vec<u64> = stress_test_values().take(23).collect();
        assert_eq!(
            values,
            [
                1, 1, 2, 4, 5, 10, 11, 23, 25, 26, 54, 57, 59, 122, 133, 142, 147, 304, 330, 351,
                362, 747, 806
            ]
        );
    }

    #[test]
    fn test_first_stress_value_above() {
        assert_eq!(first_stress_value_above(0).unwrap(), 1);
        assert_eq!(first_stress_value_above(5).unwrap(), 10);
        assert_eq!(first_stress_value_above(747).unwrap(), 806);
        assert_eq!(first_stress_value_above(368078).unwrap(), 369601);
    }

    #[test]
    fn test_stress_test_stops_before_overflow() {
        let last = stress_test_values().last().unwrap();
        assert!(last > u64::MAX / 16, "sequence ended early at {last}");
        assert!(first_stress_value_above(u64::MAX - 1).is_err());
    }

    proptest! {
        #[test]
        fn prop_distance_is_manhattan_norm(target in 1u64..=10_000_000) {
            let (x, y) = position(target).unwrap();
            prop_assert_eq!(distance(target).unwrap(), x.unsigned_abs() + y.unsigned_abs());
        }

        #[test]
        fn prop_index_at_inverts_position(target in 1u64..=MAX_TARGET) {
            prop_assert_eq!(index_at(position(target).unwrap()).unwrap(), target);
        }

        #[test]
        fn prop_ring_holds_its_positions(rank in 0u64..10_000) {
            let last = last_in_ring(rank);
            let (x, y) = position(last).unwrap();
            prop_assert_eq!(x.unsigned_abs().max(y.unsigned_abs()), rank);
        }
    }
}
