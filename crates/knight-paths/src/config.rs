use knight_core::{Point, Range};

use crate::SearchError;

/// Side length of the default square board.
pub const BOARD_SIZE: i32 = 1000;

/// Length of one knight move, √5 rounded to five decimals.
pub const UNIT_DISTANCE: f64 = 2.23607;

/// Radius, in board squares, of the neighbourhood around the destination
/// that the search explores. Also the per-axis threshold below which the
/// start needs no correction.
pub const FIELD_RADIUS: f64 = 8.0;

/// Tolerance used when comparing accumulated path distances.
pub const DISTANCE_EPSILON: f64 = 1e-9;

/// The eight knight moves, in the order the search expands them.
///
/// The order decides which of several equally short paths is found first.
pub const KNIGHT_OFFSETS: [Point; 8] = [
    Point::new(1, -2),
    Point::new(2, -1),
    Point::new(1, 2),
    Point::new(2, 1),
    Point::new(-1, -2),
    Point::new(-2, -1),
    Point::new(-1, 2),
    Point::new(-2, 1),
];

/// Immutable parameters of a search.
///
/// The defaults describe a 1000 × 1000 board, the unit knight move, an inner
/// radius of two moves and a field radius of eight squares. Tests shrink the
/// board to exercise edge behaviour cheaply.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Legal squares. Coordinates are 1-based, so the default is `[1, 1001)`.
    pub board: Range,
    /// Length of one move. Within this distance of the destination the
    /// search only takes moves that stay within it.
    pub unit: f64,
    /// Outside this distance of the destination a path may not turn back
    /// against the start → destination direction.
    pub inner_radius: f64,
    /// Candidates farther than this from the destination are never expanded.
    pub field_radius: f64,
    /// Move offsets, expanded in order.
    pub offsets: Vec<Point>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            board: Range::board(BOARD_SIZE, BOARD_SIZE),
            unit: UNIT_DISTANCE,
            inner_radius: 2.0 * UNIT_DISTANCE,
            field_radius: FIELD_RADIUS,
            offsets: KNIGHT_OFFSETS.to_vec(),
        }
    }
}

impl SearchConfig {
    /// Replace the board with one of `width` × `height` squares.
    pub fn with_board(mut self, width: i32, height: i32) -> Self {
        self.board = Range::board(width, height);
        self
    }

    /// Set the move length. The inner radius is rescaled to two moves.
    pub fn with_unit(mut self, unit: f64) -> Self {
        self.unit = unit;
        self.inner_radius = 2.0 * unit;
        self
    }

    pub fn with_inner_radius(mut self, radius: f64) -> Self {
        self.inner_radius = radius;
        self
    }

    pub fn with_field_radius(mut self, radius: f64) -> Self {
        self.field_radius = radius;
        self
    }

    /// Check that the configuration can drive a search.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.board.is_empty() {
            return Err(SearchError::InvalidConfig("board has no squares"));
        }
        if !(self.unit > 0.0) {
            return Err(SearchError::InvalidConfig("unit distance must be positive"));
        }
        if !(self.inner_radius > 0.0) {
            return Err(SearchError::InvalidConfig("inner radius must be positive"));
        }
        // Correction jumps advance two squares at a time and can leave an
        // odd gap of one behind.
        if !(self.field_radius > 1.0) {
            return Err(SearchError::InvalidConfig("field radius must exceed one square"));
        }
        if self.offsets.is_empty() {
            return Err(SearchError::InvalidConfig("empty offset table"));
        }
        if self.offsets.contains(&Point::ZERO) {
            return Err(SearchError::InvalidConfig("offset table contains a null move"));
        }
        if !self.moves_fit_in_i32() {
            return Err(SearchError::InvalidConfig("board too large for its move offsets"));
        }
        Ok(())
    }

    /// Whether every offset applied to every board square stays within `i32`.
    fn moves_fit_in_i32(&self) -> bool {
        let reach = self
            .offsets
            .iter()
            .map(|o| o.x.unsigned_abs().max(o.y.unsigned_abs()))
            .max()
            .unwrap_or(0);
        let Ok(reach) = i32::try_from(reach) else {
            return false;
        };
        let (lo, hi) = (self.board.min, self.board.max);
        // `max` is exclusive, so the last square is `max - 1`.
        lo.x.checked_sub(reach).is_some()
            && lo.y.checked_sub(reach).is_some()
            && (hi.x - 1).checked_add(reach).is_some()
            && (hi.y - 1).checked_add(reach).is_some()
    }

    /// Fail with [`SearchError::InvalidCoordinate`] unless `p` is on the board.
    pub fn check_on_board(&self, p: Point) -> Result<(), SearchError> {
        if self.board.contains(p) {
            Ok(())
        } else {
            Err(SearchError::InvalidCoordinate {
                point: p,
                board: self.board,
            })
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig::default().with_board(16, 12);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.board, cfg.board);
        assert_eq!(back.offsets, cfg.offsets);
        assert!((back.unit - cfg.unit).abs() < 1e-12);
        assert!((back.inner_radius - cfg.inner_radius).abs() < 1e-12);
        assert_eq!(back.field_radius, 8.0);
    }
}
