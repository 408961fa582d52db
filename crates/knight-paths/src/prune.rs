//! Cutoffs that keep the depth-first search inside a small neighbourhood of
//! the destination.
//!
//! Each predicate is a pure function of the candidate and its surroundings.
//! [`Probe::first_cutoff`] applies them in a fixed order and reports the first
//! one that rejects the candidate.

use std::fmt;

use knight_core::Point;

use crate::config::{DISTANCE_EPSILON, SearchConfig};
use crate::distance::euclidean;
use crate::trail::TrailNode;

/// Why a candidate was not expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cutoff {
    /// Already as long as the shortest match found so far.
    BestDistance,
    /// Too far from the destination.
    FieldRadius,
    /// Leaves the one-move neighbourhood of the destination after reaching it.
    NearTarget,
    /// Turns back against the start → destination direction too early.
    DirectionReversal,
    /// Off the board.
    OutOfBoard,
}

impl Cutoff {
    /// All cutoffs, in evaluation order.
    pub const ALL: [Cutoff; 5] = [
        Cutoff::BestDistance,
        Cutoff::FieldRadius,
        Cutoff::NearTarget,
        Cutoff::DirectionReversal,
        Cutoff::OutOfBoard,
    ];

    /// Position in [`Cutoff::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Cutoff::BestDistance => "best-distance",
            Cutoff::FieldRadius => "field-radius",
            Cutoff::NearTarget => "near-target",
            Cutoff::DirectionReversal => "direction-reversal",
            Cutoff::OutOfBoard => "out-of-board",
        }
    }
}

impl fmt::Display for Cutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// A candidate that already reaches the best known distance cannot lead to a
/// shorter path. Reaching the destination at exactly that distance is a tie
/// and is let through.
#[inline]
pub fn exceeds_best(best: Option<f64>, candidate: &TrailNode, dest: Point) -> bool {
    let Some(best) = best else {
        return false;
    };
    if candidate.pos == dest {
        candidate.cost > best + DISTANCE_EPSILON
    } else {
        candidate.cost >= best - DISTANCE_EPSILON
    }
}

#[inline]
pub fn outside_field(config: &SearchConfig, candidate_to_dest: f64) -> bool {
    candidate_to_dest > config.field_radius
}

/// Once the current square is within one move of the destination, only
/// candidates that stay within one move are kept.
#[inline]
pub fn leaves_target(config: &SearchConfig, current_to_dest: f64, candidate_to_dest: f64) -> bool {
    current_to_dest <= config.unit && candidate_to_dest > config.unit
}

/// Outside the inner radius a move may not go backward on an axis along
/// which the destination lies ahead of the start. `heading` is the per-axis
/// sign of start → destination; a zero component leaves that axis free.
#[inline]
pub fn reverses_direction(
    config: &SearchConfig,
    heading: Point,
    current: Point,
    candidate: Point,
    candidate_to_dest: f64,
) -> bool {
    if candidate_to_dest <= config.inner_radius {
        return false;
    }
    let step = candidate - current;
    step.x * heading.x < 0 || step.y * heading.y < 0
}

#[inline]
pub fn off_board(config: &SearchConfig, candidate: Point) -> bool {
    !config.board.contains(candidate)
}

// ---------------------------------------------------------------------------
// Probe
// ---------------------------------------------------------------------------

/// Everything the predicates need about the square being expanded.
pub(crate) struct Probe<'a> {
    pub(crate) config: &'a SearchConfig,
    pub(crate) dest: Point,
    pub(crate) heading: Point,
    pub(crate) current: Point,
    pub(crate) current_to_dest: f64,
}

impl Probe<'_> {
    /// First cutoff rejecting `candidate`, or `None` if it should be expanded.
    pub(crate) fn first_cutoff(&self, candidate: &TrailNode, best: Option<f64>) -> Option<Cutoff> {
        let to_dest = euclidean(candidate.pos, self.dest);
        if exceeds_best(best, candidate, self.dest) {
            Some(Cutoff::BestDistance)
        } else if outside_field(self.config, to_dest) {
            Some(Cutoff::FieldRadius)
        } else if leaves_target(self.config, self.current_to_dest, to_dest) {
            Some(Cutoff::NearTarget)
        } else if reverses_direction(self.config, self.heading, self.current, candidate.pos, to_dest)
        {
            Some(Cutoff::DirectionReversal)
        } else if off_board(self.config, candidate.pos) {
            Some(Cutoff::OutOfBoard)
        } else {
            None
        }
    }
}
