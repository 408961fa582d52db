//! Start correction: bring a far-away start into the field around the
//! destination with long runs of knight jumps, so that the exponential search
//! only ever runs over a small neighbourhood.

use knight_core::Point;

use crate::config::SearchConfig;
use crate::distance::{chebyshev, euclidean};

/// Axis along which a correction jump makes its two-square advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Offset of one correction jump: two squares along `axis` with sign
/// `toward`, one square across it with sign `side`.
#[inline]
pub fn axis_jump(axis: Axis, toward: i32, side: i32) -> Point {
    match axis {
        Axis::X => Point::new(2 * toward, side),
        Axis::Y => Point::new(side, 2 * toward),
    }
}

/// Result of [`correct_start`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Correction {
    /// Where the bounded search begins.
    pub start: Point,
    /// Distance covered by the jumps.
    pub baseline: f64,
    /// Squares left behind by the jumps, original start first. Excludes
    /// [`Correction::start`].
    pub approach: Vec<Point>,
}

impl Correction {
    /// Whether the start was already inside the field.
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.approach.is_empty()
    }
}

#[inline]
fn axis_within(config: &SearchConfig, from: i32, to: i32) -> bool {
    f64::from((to - from).abs()) < config.field_radius
}

/// Jump from `start` toward `dest` until both axis offsets are strictly
/// below the field radius.
///
/// Jumps alternate between the axes while both are out of range; once one
/// axis is in range only the other is advanced. The sideways square of
/// successive jumps along the same axis alternates +1, -1, ... so the other
/// coordinate does not drift, and is flipped when it would leave the board.
pub fn correct_start(config: &SearchConfig, start: Point, dest: Point) -> Correction {
    let mut cur = start;
    let mut baseline = 0.0;
    let mut approach = Vec::new();
    // Next sideways sign for X jumps and Y jumps.
    let mut side = [1, 1];

    let mut k = 0usize;
    while f64::from(chebyshev(cur, dest)) >= config.field_radius {
        let x_near = axis_within(config, cur.x, dest.x);
        let y_near = axis_within(config, cur.y, dest.y);
        let axis = if !x_near && (k % 2 == 0 || y_near) {
            Axis::X
        } else {
            Axis::Y
        };

        let heading = cur.heading(dest);
        let (toward, lateral) = match axis {
            Axis::X => (heading.x, &mut side[0]),
            Axis::Y => (heading.y, &mut side[1]),
        };
        let mut next = cur + axis_jump(axis, toward, *lateral);
        if !config.board.contains(next) {
            *lateral = -*lateral;
            next = cur + axis_jump(axis, toward, *lateral);
        }
        *lateral = -*lateral;

        approach.push(cur);
        baseline += euclidean(cur, next);
        cur = next;
        k += 1;
    }

    if !approach.is_empty() {
        log::debug!(
            "corrected start {start} -> {cur} in {} jumps, baseline {baseline:.5}",
            approach.len()
        );
    }
    Correction {
        start: cur,
        baseline,
        approach,
    }
}
