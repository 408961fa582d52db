use std::collections::VecDeque;

use knight_core::{Point, Range};

use crate::config::SearchConfig;

/// Sentinel value meaning "not reached" in the breadth-first map.
pub const UNREACHABLE: u32 = u32::MAX;

/// Minimum number of moves from `from` to `to` over the configured offsets.
///
/// A plain breadth-first search over the board, restricted to the squares
/// whose chebyshev distance from `to` is at most `limit`. Returns `None` if
/// the configuration is invalid, either endpoint is outside that window, or
/// `to` cannot be reached inside it. Used to cross-check the branch-and-bound
/// search.
pub fn bfs_moves(config: &SearchConfig, from: Point, to: Point, limit: i32) -> Option<u32> {
    config.validate().ok()?;
    let window = Range::around(to, limit.max(0)).intersect(config.board);
    let start = window.index_of(from)?;
    let goal = window.index_of(to)?;
    if start == goal {
        return Some(0);
    }

    let mut dist = vec![UNREACHABLE; window.len()];
    let mut queue: VecDeque<(Point, usize)> = VecDeque::new();
    dist[start] = 0;
    queue.push_back((from, start));

    while let Some((cp, ci)) = queue.pop_front() {
        let nd = dist[ci] + 1;
        for &o in &config.offsets {
            let np = cp + o;
            let Some(ni) = window.index_of(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            if ni == goal {
                return Some(nd);
            }
            dist[ni] = nd;
            queue.push_back((np, ni));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_knight_distances() {
        let cfg = SearchConfig::default();
        let o = Point::new(50, 50);
        for (dx, dy, moves) in [
            (0, 0, 0),
            (1, 2, 1),
            (2, 2, 4),
            (1, 0, 3),
            (1, 1, 2),
            (3, 3, 2),
            (4, 4, 4),
            (0, 4, 2),
            (6, 6, 4),
        ] {
            assert_eq!(bfs_moves(&cfg, o, o.shift(dx, dy), 16), Some(moves), "({dx}, {dy})");
        }
    }

    #[test]
    fn corner_costs_more() {
        let cfg = SearchConfig::default();
        // (2, 2) -> (1, 1) is two moves in open space but four in the corner.
        assert_eq!(bfs_moves(&cfg, Point::new(2, 2), Point::new(1, 1), 16), Some(4));
        assert_eq!(
            bfs_moves(&cfg, Point::new(20, 20), Point::new(19, 19), 16),
            Some(2)
        );
    }

    #[test]
    fn outside_window_is_none() {
        let cfg = SearchConfig::default();
        assert_eq!(bfs_moves(&cfg, Point::new(1, 1), Point::new(40, 40), 8), None);
        assert_eq!(bfs_moves(&cfg, Point::new(0, 1), Point::new(2, 2), 8), None);
    }

    #[test]
    fn invalid_config_is_none() {
        let cfg = SearchConfig::default().with_board(i32::MAX, 10);
        let to = Point::new(i32::MAX - 1, 5);
        assert_eq!(bfs_moves(&cfg, to.shift(-2, 0), to, 8), None);

        let cfg = SearchConfig::default().with_board(i32::MAX - 2, 10);
        let to = Point::new(i32::MAX - 2, 5);
        assert_eq!(bfs_moves(&cfg, to.shift(-2, 0), to, 8), Some(2));
    }

    #[test]
    fn tiny_board_can_be_disconnected() {
        // On a 3 × 3 board the centre square has no knight moves.
        let cfg = SearchConfig::default().with_board(3, 3);
        assert_eq!(bfs_moves(&cfg, Point::new(1, 1), Point::new(2, 2), 8), None);
        assert_eq!(bfs_moves(&cfg, Point::new(1, 1), Point::new(2, 3), 8), Some(1));
    }
}
