use knight_core::Point;

use crate::distance::euclidean;
use crate::trail::{Trail, TrailNode};

/// Append the successors of node `idx` into `buf`, one per offset, in
/// offset order. The caller clears `buf` before calling.
///
/// Each successor records its cumulative distance and `idx` as its parent.
/// Squares already on the chain ending at `idx` are skipped, so a branch
/// never revisits a square.
pub fn successors(trail: &Trail, idx: usize, offsets: &[Point], buf: &mut Vec<TrailNode>) {
    let from = *trail.node(idx);
    for &o in offsets {
        let pos = from.pos + o;
        if trail.visited(idx, pos) {
            continue;
        }
        buf.push(TrailNode {
            pos,
            cost: from.cost + euclidean(from.pos, pos),
            parent: idx,
        });
    }
}
