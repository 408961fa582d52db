use knight_core::Point;

use crate::config::{DISTANCE_EPSILON, SearchConfig};
use crate::distance::euclidean;
use crate::moves::successors;
use crate::prune::{Cutoff, Probe};
use crate::trail::{Trail, TrailNode};

/// One matched path, from the corrected start to the destination.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnightPath {
    pub points: Vec<Point>,
    /// Cumulative distance, including the correction baseline.
    pub distance: f64,
}

impl KnightPath {
    /// Number of moves along the path.
    #[inline]
    pub fn moves(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Squares whose successors were generated.
    pub expanded: usize,
    /// Times the destination was reached, before the final filtering.
    pub matched: usize,
    /// Rejected candidates, indexed by [`Cutoff::index`].
    pub pruned: [usize; Cutoff::ALL.len()],
}

impl SearchStats {
    #[inline]
    pub fn pruned_by(&self, cutoff: Cutoff) -> usize {
        self.pruned[cutoff.index()]
    }

    pub fn total_pruned(&self) -> usize {
        self.pruned.iter().sum()
    }
}

// ---------------------------------------------------------------------------
// Accumulator
// ---------------------------------------------------------------------------

/// Search state threaded through the traversal: matched paths in discovery
/// order and the shortest distance seen.
///
/// While the search runs, earlier matches may be longer than later ones.
/// [`Accumulator::finish`] drops everything but the minimal matches.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    matches: Vec<KnightPath>,
    min: Option<f64>,
    stats: SearchStats,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortest distance matched so far, `None` before the first match.
    #[inline]
    pub fn min_distance(&self) -> Option<f64> {
        self.min
    }

    #[inline]
    pub fn matches(&self) -> &[KnightPath] {
        &self.matches
    }

    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Record a match and lower the minimum if it is shorter.
    pub fn record(&mut self, path: KnightPath) {
        self.min = match self.min {
            Some(m) if m <= path.distance => Some(m),
            _ => Some(path.distance),
        };
        self.stats.matched += 1;
        self.matches.push(path);
    }

    /// Keep only the matches whose distance equals the minimum.
    pub fn finish(&mut self) {
        let Some(min) = self.min else {
            return;
        };
        self.matches
            .retain(|p| (p.distance - min).abs() <= DISTANCE_EPSILON);
    }

    /// Consume the accumulator into its matches, minimum and counters.
    pub fn into_parts(self) -> (Vec<KnightPath>, Option<f64>, SearchStats) {
        (self.matches, self.min, self.stats)
    }
}

// ---------------------------------------------------------------------------
// Branch and bound
// ---------------------------------------------------------------------------

/// Search every path from `start` to `dest` that survives the cutoffs.
///
/// `start` is the corrected start; its root node carries `baseline` as the
/// distance already travelled. The returned accumulator is not finished:
/// call [`Accumulator::finish`] to drop matches longer than the minimum.
pub fn search_from(config: &SearchConfig, start: Point, dest: Point, baseline: f64) -> Accumulator {
    let mut acc = Accumulator::new();
    let mut search = Search {
        config,
        dest,
        heading: start.heading(dest),
        trail: Trail::new(start, baseline),
        scratch: Vec::new(),
    };
    let root = search.trail.root();
    search.visit(root, &mut acc);
    log::debug!(
        "search {start} -> {dest}: {} matches, min {:?}, {} expanded, {} pruned",
        acc.stats.matched,
        acc.min,
        acc.stats.expanded,
        acc.stats.total_pruned()
    );
    acc
}

struct Search<'a> {
    config: &'a SearchConfig,
    dest: Point,
    /// Per-axis sign of corrected start → destination.
    heading: Point,
    trail: Trail,
    /// Candidate buffers, one per depth, reused across siblings.
    scratch: Vec<Vec<TrailNode>>,
}

impl Search<'_> {
    fn visit(&mut self, idx: usize, acc: &mut Accumulator) {
        let node = *self.trail.node(idx);
        if node.pos == self.dest {
            acc.record(KnightPath {
                points: self.trail.path(idx),
                distance: node.cost,
            });
            return;
        }
        acc.stats.expanded += 1;

        // The trail holds exactly the live branch, so `idx` is the depth.
        if self.scratch.len() <= idx {
            self.scratch.resize_with(idx + 1, || Vec::with_capacity(8));
        }
        let mut candidates = std::mem::take(&mut self.scratch[idx]);
        candidates.clear();
        successors(&self.trail, idx, &self.config.offsets, &mut candidates);

        let probe = Probe {
            config: self.config,
            dest: self.dest,
            heading: self.heading,
            current: node.pos,
            current_to_dest: euclidean(node.pos, self.dest),
        };
        for cand in &candidates {
            if let Some(cutoff) = probe.first_cutoff(cand, acc.min) {
                acc.stats.pruned[cutoff.index()] += 1;
                log::trace!("{} -> {}: {cutoff}", node.pos, cand.pos);
                continue;
            }
            let mark = self.trail.len();
            let child = self.trail.push(*cand);
            self.visit(child, acc);
            self.trail.truncate(mark);
        }

        self.scratch[idx] = candidates;
    }
}
