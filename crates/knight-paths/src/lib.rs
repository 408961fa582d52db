//! Shortest knight-move paths on a bounded grid.
//!
//! Given a start and a destination square, [`find_paths`] returns every path
//! of minimal total Euclidean length whose steps are all knight moves. The
//! work is split in two stages:
//!
//! - **Start correction** ([`correct_start`]) jumps a far-away start into a
//!   small field around the destination, so search cost does not depend on
//!   how far apart the endpoints are.
//! - **Branch and bound** ([`search_from`]) explores the field depth-first,
//!   skipping candidates rejected by the [`Cutoff`] predicates and tightening
//!   the bound as matches are found. Equal-length matches are all kept.
//!
//! All parameters (board, move length, radii, offsets) live in an immutable
//! [`SearchConfig`]. [`bfs_moves`] is a plain breadth-first oracle used to
//! cross-check results.

mod bfs;
mod config;
mod correct;
mod distance;
mod error;
mod moves;
mod prune;
mod search;
mod solve;
mod trail;

pub use bfs::{UNREACHABLE, bfs_moves};
pub use config::{
    BOARD_SIZE, DISTANCE_EPSILON, FIELD_RADIUS, KNIGHT_OFFSETS, SearchConfig, UNIT_DISTANCE,
};
pub use correct::{Axis, Correction, axis_jump, correct_start};
pub use distance::{chebyshev, euclidean};
pub use error::SearchError;
pub use moves::successors;
pub use prune::{Cutoff, exceeds_best, leaves_target, off_board, outside_field, reverses_direction};
pub use search::{Accumulator, KnightPath, SearchStats, search_from};
pub use solve::{Solution, find_paths};
pub use trail::{Ancestors, NO_PARENT, Trail, TrailNode};
