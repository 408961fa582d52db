use knight_core::Point;

use crate::config::SearchConfig;
use crate::correct::correct_start;
use crate::error::SearchError;
use crate::search::{KnightPath, SearchStats, search_from};

/// Every shortest path found between two squares.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// The start as requested.
    pub start: Point,
    /// Where the bounded search began.
    pub corrected_start: Point,
    pub destination: Point,
    /// Squares crossed by start correction, `start` first, excluding
    /// `corrected_start`. Empty when no correction was needed.
    pub approach: Vec<Point>,
    /// Distance covered by start correction.
    pub baseline: f64,
    /// The tied shortest paths from `corrected_start`, in discovery order.
    pub paths: Vec<KnightPath>,
    /// Their common distance, baseline included.
    pub shortest: f64,
    pub stats: SearchStats,
}

impl Solution {
    #[inline]
    pub fn paths(&self) -> &[KnightPath] {
        &self.paths
    }

    #[inline]
    pub fn shortest(&self) -> f64 {
        self.shortest
    }

    /// Path `i` preceded by the approach squares, i.e. the complete route
    /// from the original start.
    pub fn full_path(&self, i: usize) -> Option<Vec<Point>> {
        let path = self.paths.get(i)?;
        let mut full = Vec::with_capacity(self.approach.len() + path.points.len());
        full.extend_from_slice(&self.approach);
        full.extend_from_slice(&path.points);
        Some(full)
    }
}

/// Find the shortest knight paths from `start` to `dest`.
///
/// Both squares must be on the board. A start farther than the field radius
/// from `dest` is first brought close with [`correct_start`]; the search
/// then runs from the corrected start and only the minimal matches are kept.
///
/// The result holds every minimal path that passes the search cutoffs, not
/// every minimal path of the move graph. Paths that turn back against the
/// direction of travel outside the inner radius, or leave the one-move
/// neighbourhood of `dest` once inside it, are never explored. From
/// (50, 50) to (54, 54) 18 of the 32 four-move paths are returned.
pub fn find_paths(config: &SearchConfig, start: Point, dest: Point) -> Result<Solution, SearchError> {
    config.validate()?;
    config.check_on_board(start)?;
    config.check_on_board(dest)?;

    let correction = correct_start(config, start, dest);
    let mut acc = search_from(config, correction.start, dest, correction.baseline);
    acc.finish();

    let (paths, min, stats) = acc.into_parts();
    let Some(shortest) = min else {
        return Err(SearchError::NoPathFound {
            from: start,
            to: dest,
        });
    };
    Ok(Solution {
        start,
        corrected_start: correction.start,
        destination: dest,
        approach: correction.approach,
        baseline: correction.baseline,
        paths,
        shortest,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_square() {
        let cfg = SearchConfig::default();
        let sol = find_paths(&cfg, Point::new(1, 1), Point::new(1, 1)).unwrap();
        assert_eq!(sol.paths().len(), 1);
        assert_eq!(sol.paths()[0].points, vec![Point::new(1, 1)]);
        assert_eq!(sol.shortest(), 0.0);
        assert_eq!(sol.full_path(0), Some(vec![Point::new(1, 1)]));
        assert_eq!(sol.full_path(1), None);
    }

    #[test]
    fn rejects_off_board_endpoints() {
        let cfg = SearchConfig::default();
        for (s, d) in [
            (Point::new(0, 5), Point::new(5, 5)),
            (Point::new(5, 5), Point::new(5, -2)),
            (Point::new(1001, 5), Point::new(5, 5)),
            (Point::new(5, 5), Point::new(5, 1001)),
        ] {
            let err = find_paths(&cfg, s, d).unwrap_err();
            assert!(matches!(err, SearchError::InvalidCoordinate { .. }), "{err}");
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let cfg = SearchConfig::default().with_field_radius(0.0);
        assert!(matches!(
            find_paths(&cfg, Point::new(1, 1), Point::new(2, 3)),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn board_at_the_i32_edge() {
        let huge = SearchConfig::default().with_board(i32::MAX - 1, 10);
        let (s, d) = (Point::new(i32::MAX - 3, 5), Point::new(i32::MAX - 1, 5));
        assert!(matches!(find_paths(&huge, s, d), Err(SearchError::InvalidConfig(_))));

        let widest = SearchConfig::default().with_board(i32::MAX - 2, 10);
        let (s, d) = (Point::new(i32::MAX - 4, 5), Point::new(i32::MAX - 2, 5));
        let sol = find_paths(&widest, s, d).unwrap();
        assert_eq!(sol.paths()[0].moves(), 2);
        assert!(sol.paths()[0].points.iter().all(|&p| widest.board.contains(p)));
    }

    #[test]
    fn no_path_is_an_error_not_a_panic() {
        let cfg = SearchConfig::default();
        assert_eq!(
            find_paths(&cfg, Point::new(2, 2), Point::new(1, 1)),
            Err(SearchError::NoPathFound {
                from: Point::new(2, 2),
                to: Point::new(1, 1)
            })
        );
    }

    #[test]
    fn corrected_route_is_prefixed_by_approach() {
        let cfg = SearchConfig::default();
        let start = Point::new(100, 100);
        let dest = Point::new(140, 125);
        let sol = find_paths(&cfg, start, dest).unwrap();
        assert!(!sol.approach.is_empty());
        assert_eq!(sol.approach[0], start);
        assert!(sol.baseline > 0.0);
        assert!(sol.shortest > sol.baseline);
        for (i, p) in sol.paths().iter().enumerate() {
            assert_eq!(p.points[0], sol.corrected_start);
            let full = sol.full_path(i).unwrap();
            assert_eq!(full.first(), Some(&start));
            assert_eq!(full.last(), Some(&dest));
            assert_eq!(full.len(), sol.approach.len() + p.points.len());
        }
    }
}
