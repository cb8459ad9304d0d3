//! Text rendering of the spiral around the center.
//!
//! Only the window of rings `0..=rings` is drawn. Every cell is looked up with
//! [`index_at`], so rendering shares the coordinate math with the solvers and
//! doubles as a visual check of it.

use crate::error::{Error, Result};
use crate::ring::last_in_ring;
use crate::spiral::index_at;

/// Largest number of rings [`render`] will draw.
pub const MAX_RENDER_RINGS: u64 = 50;

/// Renders rings `0..=rings` as a square of right-aligned indices.
///
/// Rows go from top (y = rings) to bottom (y = -rings). Cells are padded to
/// the width of the largest index and separated by two spaces.
pub fn render(rings: u64) -> Result<String> {
    if rings > MAX_RENDER_RINGS {
        return Err(Error::invalid(format!(
            "cannot render {rings} rings, the limit is {MAX_RENDER_RINGS}"
        )));
    }

    let width = last_in_ring(rings).to_string().len();
    let extent = rings as i64;

    let mut output = String::new();
    for y in (-extent..=extent).rev() {
        for x in -extent..=extent {
            if x > -extent {
                output.push_str("  ");
            }
            let index = index_at((x, y))?;
            output.push_str(&format!("{index:>width$}"));
        }
        output.push('\n');
    }

    Ok(output)
}
