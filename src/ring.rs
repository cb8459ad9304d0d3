//! Ring descriptors for the square spiral.
//!
//! The spiral is a sequence of concentric square rings. Ring 0 holds only the
//! center (index 1); ring `n` ends on the odd square `(2n + 1)^2` and is made of
//! four straight sides of `2n` cells each. Everything about a ring is a pure
//! function of its rank, so descriptors are built on demand and never cached.

use tracing::debug;

use crate::error::{Error, Result};

/// Largest ring whose indices all fit in a `u64`.
pub const MAX_RING: u64 = (1 << 31) - 1;

/// Largest supported linear index: the last cell of [`MAX_RING`].
pub const MAX_TARGET: u64 = last_in_ring(MAX_RING);

/// Last linear index of ring `rank`: `(2 * rank + 1)^2`.
#[inline]
pub const fn last_in_ring(rank: u64) -> u64 {
    let side = 2 * rank + 1;
    side * side
}

/// First linear index of ring `rank`.
#[inline]
pub const fn first_in_ring(rank: u64) -> u64 {
    if rank == 0 {
        1
    } else {
        last_in_ring(rank - 1) + 1
    }
}

/// Rejects indices outside `1..=MAX_TARGET`.
pub fn check_target(target: u64) -> Result<()> {
    if target == 0 {
        return Err(Error::invalid("spiral indices start at 1"));
    }
    if target > MAX_TARGET {
        return Err(Error::invalid(format!(
            "{target} is beyond the largest supported square {MAX_TARGET}"
        )));
    }
    Ok(())
}

/// Returns the smallest ring rank `n` with `target <= (2n + 1)^2`.
///
/// Uses the ceiling square root: the side of the smallest odd square covering
/// `target` is `ceil(sqrt(target))` rounded up to odd, and halving it gives the
/// rank directly.
pub fn ring_of(target: u64) -> Result<u64> {
    check_target(target)?;

    let mut side = target.isqrt();
    if side * side < target {
        side += 1;
    }
    Ok(side / 2)
}

/// Which straight side of a ring an index lies on.
///
/// Corners belong to the top and bottom sides, so the right side stops just
/// before the top-right corner and the left side sits strictly between the
/// top-left and bottom-left corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Right,
    Top,
    Left,
    Bottom,
}

/// All the useful indices of one ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    pub rank: u64,
    pub first: u64,
    pub last: u64,
    /// Length of one side in steps (`2 * rank`), i.e. the distance between
    /// consecutive corners.
    pub step: u64,
    pub top_right: u64,
    pub top_left: u64,
    pub bottom_left: u64,
    pub bottom_right: u64,
    pub middle_top: u64,
    pub middle_bottom: u64,
    pub middle_right: u64,
    pub middle_left: u64,
}

impl Ring {
    /// The degenerate center ring: every index field is 1.
    pub const CENTER: Self = Self {
        rank: 0,
        first: 1,
        last: 1,
        step: 0,
        top_right: 1,
        top_left: 1,
        bottom_left: 1,
        bottom_right: 1,
        middle_top: 1,
        middle_bottom: 1,
        middle_right: 1,
        middle_left: 1,
    };

    /// Builds the descriptor for ring `rank`.
    pub const fn new(rank: u64) -> Self {
        assert!(rank <= MAX_RING, "ring rank exceeds MAX_RING");
        if rank == 0 {
            return Self::CENTER;
        }

        let first = first_in_ring(rank);
        let step = 2 * rank;
        let top_right = first + step - 1;
        let top_left = top_right + step;
        let bottom_left = top_left + step;
        let bottom_right = bottom_left + step;

        Self {
            rank,
            first,
            last: last_in_ring(rank),
            step,
            top_right,
            top_left,
            bottom_left,
            bottom_right,
            middle_top: top_right + rank,
            middle_bottom: bottom_left + rank,
            middle_right: top_right - rank,
            middle_left: top_left + rank,
        }
    }

    /// Builds the descriptor of the ring holding `target`.
    pub fn containing(target: u64) -> Result<Self> {
        let ring = Self::new(ring_of(target)?);
        debug!(target, ?ring, "resolved ring");
        Ok(ring)
    }

    /// Side length of the ring in cells (`2 * rank + 1`).
    #[inline]
    pub const fn side_len(&self) -> u64 {
        self.step + 1
    }

    #[inline]
    pub const fn contains(&self, target: u64) -> bool {
        self.first <= target && target <= self.last
    }

    /// Classifies an index of this ring by side.
    ///
    /// `target` must lie in this ring.
    pub fn side(&self, target: u64) -> Side {
        debug_assert!(self.contains(target), "{target} is not in ring {}", self.rank);
        if (self.top_right..=self.top_left).contains(&target) {
            Side::Top
        } else if (self.bottom_left..=self.bottom_right).contains(&target) {
            Side::Bottom
        } else if target < self.top_right {
            Side::Right
        } else {
            Side::Left
        }
    }

    /// The four corners in traversal order.
    pub const fn corners(&self) -> [u64; 4] {
        [
            self.top_right,
            self.top_left,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    /// The four edge midpoints in traversal order.
    pub const fn midpoints(&self) -> [u64; 4] {
        [
            self.middle_right,
            self.middle_top,
            self.middle_left,
            self.middle_bottom,
        ]
    }
}

/// Descriptor for ring `rank`; see [`Ring::new`].
pub const fn ring_descriptor(rank: u64) -> Ring {
    Ring::new(rank)
}
