use knight_core::Point;

/// Parent index of the root node.
pub const NO_PARENT: usize = usize::MAX;

/// A square reached by the search, with the distance travelled to reach it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrailNode {
    pub pos: Point,
    /// Cumulative distance from the corrected start, baseline included.
    pub cost: f64,
    /// Index of the predecessor in the owning [`Trail`], or [`NO_PARENT`].
    pub parent: usize,
}

// ---------------------------------------------------------------------------
// Trail
// ---------------------------------------------------------------------------

/// Arena of the nodes on the branch currently being explored.
///
/// Nodes refer to their predecessor by index, never by reference. The search
/// pushes a node before descending into it and truncates back on return, so
/// the arena only ever holds the live branch and its length is the depth.
#[derive(Debug, Clone)]
pub struct Trail {
    nodes: Vec<TrailNode>,
}

impl Trail {
    /// Create a trail rooted at `root`, which has already travelled `baseline`.
    pub fn new(root: Point, baseline: f64) -> Self {
        let mut nodes = Vec::with_capacity(32);
        nodes.push(TrailNode {
            pos: root,
            cost: baseline,
            parent: NO_PARENT,
        });
        Self { nodes }
    }

    /// Index of the root node.
    #[inline]
    pub fn root(&self) -> usize {
        0
    }

    #[inline]
    pub fn node(&self, idx: usize) -> &TrailNode {
        &self.nodes[idx]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root is never removed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append `node` and return its index.
    #[inline]
    pub fn push(&mut self, node: TrailNode) -> usize {
        debug_assert!(node.parent < self.nodes.len());
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Drop every node at index `len` and above. The root always survives.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len.max(1));
    }

    /// Walk from `idx` back to the root, `idx` first.
    pub fn ancestors(&self, idx: usize) -> Ancestors<'_> {
        Ancestors {
            trail: self,
            cur: idx,
        }
    }

    /// Whether `p` occurs on the chain ending at `idx` (inclusive).
    pub fn visited(&self, idx: usize, p: Point) -> bool {
        self.ancestors(idx).any(|n| n.pos == p)
    }

    /// Reconstruct the coordinates from the root to `idx`, root first.
    pub fn path(&self, idx: usize) -> Vec<Point> {
        let mut path: Vec<Point> = self.ancestors(idx).map(|n| n.pos).collect();
        path.reverse();
        path
    }
}

/// Iterator over a node and its predecessors; see [`Trail::ancestors`].
pub struct Ancestors<'a> {
    trail: &'a Trail,
    cur: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a TrailNode;

    fn next(&mut self) -> Option<&'a TrailNode> {
        if self.cur == NO_PARENT {
            return None;
        }
        let node = self.trail.nodes.get(self.cur)?;
        self.cur = node.parent;
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Trail {
        let mut t = Trail::new(Point::new(1, 1), 0.5);
        let a = t.push(TrailNode {
            pos: Point::new(2, 3),
            cost: 2.5,
            parent: 0,
        });
        t.push(TrailNode {
            pos: Point::new(4, 4),
            cost: 4.5,
            parent: a,
        });
        t
    }

    #[test]
    fn root_carries_baseline() {
        let t = Trail::new(Point::new(7, 7), 11.0);
        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
        assert_eq!(t.node(t.root()).cost, 11.0);
        assert_eq!(t.node(t.root()).parent, NO_PARENT);
        assert_eq!(t.path(t.root()), vec![Point::new(7, 7)]);
    }

    #[test]
    fn path_runs_root_first() {
        let t = chain();
        assert_eq!(
            t.path(2),
            vec![Point::new(1, 1), Point::new(2, 3), Point::new(4, 4)]
        );
        assert_eq!(t.path(1), vec![Point::new(1, 1), Point::new(2, 3)]);
    }

    #[test]
    fn visited_checks_whole_chain() {
        let t = chain();
        assert!(t.visited(2, Point::new(1, 1)));
        assert!(t.visited(2, Point::new(4, 4)));
        assert!(!t.visited(1, Point::new(4, 4)));
        assert!(!t.visited(2, Point::new(3, 5)));
    }

    #[test]
    fn ancestor_costs_strictly_decrease() {
        let t = chain();
        let costs: Vec<f64> = t.ancestors(2).map(|n| n.cost).collect();
        assert_eq!(costs, vec![4.5, 2.5, 0.5]);
    }

    #[test]
    fn truncate_keeps_root() {
        let mut t = chain();
        t.truncate(1);
        assert_eq!(t.len(), 1);
        t.truncate(0);
        assert_eq!(t.len(), 1);
        assert_eq!(t.node(0).pos, Point::new(1, 1));
    }
}
