//! Query implementations for [`KdTree`]
//!
//! This module contains the nearest-neighbor query methods. Both public
//! queries delegate to one bounded recursive search: descend into the child
//! on the query's side of the splitting coordinate first, then enter the far
//! child only if its region could still hold a closer point than the current
//! worst candidate.

use crate::kdtree::{KdTree, KdTreeError, Point};

/// Candidate found during a search: a stored point and its squared distance
/// to the query point.
#[derive(Clone, Copy, Debug)]
struct Neighbor {
    point: Point,
    dist_sq: f64,
}

/// Bounded candidate list, ascending by squared distance, at most
/// `capacity` entries.
#[derive(Debug)]
struct NeighborList {
    capacity: usize,
    entries: Vec<Neighbor>,
}

impl NeighborList {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity + 1),
        }
    }

    /// Inserts a candidate keeping the list sorted; a tie lands after the
    /// existing entries of equal distance. Overflow drops the worst entry.
    ///
    /// O(capacity) per insertion; k is expected small relative to the tree.
    fn insert(&mut self, point: Point, dist_sq: f64) {
        let mut at = self.entries.len();
        while at > 0 && self.entries[at - 1].dist_sq > dist_sq {
            at -= 1;
        }
        self.entries.insert(at, Neighbor { point, dist_sq });
        if self.entries.len() > self.capacity {
            self.entries.truncate(self.capacity);
        }
    }

    fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Largest squared distance currently held
    fn worst_dist_sq(&self) -> f64 {
        self.entries.last().map_or(f64::INFINITY, |n| n.dist_sq)
    }
}

impl KdTree {
    /// Queries for the stored point nearest to `(x, y)`
    ///
    /// Returns `None` if the tree is empty. A query coincident with a stored
    /// point returns that point at distance zero.
    ///
    /// # Examples
    /// ```
    /// use kdtree2d::{KdTree, Point};
    ///
    /// let tree = KdTree::build(&[
    ///     Point::new(0.5, 0.5),
    ///     Point::new(2.5, 2.5),
    /// ]).unwrap();
    ///
    /// assert_eq!(tree.query_nearest(0.6, 0.6), Some(Point::new(0.5, 0.5)));
    /// assert_eq!(tree.query_nearest(2.4, 2.4), Some(Point::new(2.5, 2.5)));
    /// ```
    pub fn query_nearest(&self, x: f64, y: f64) -> Option<Point> {
        self.query_nearest_internal(x, y, &mut None)
    }

    /// Queries for the `k` stored points nearest to `(x, y)`
    ///
    /// Results are appended to the output vector (not cleared first),
    /// sorted ascending by distance to the query. Fewer than `k` points are
    /// appended when the tree holds fewer than `k`; an empty tree appends
    /// nothing.
    ///
    /// # Errors
    /// Returns [`KdTreeError::ZeroNeighbors`] if `k` is zero. The bound is
    /// never silently clamped.
    ///
    /// # Examples
    /// ```
    /// use kdtree2d::{KdTree, Point};
    ///
    /// let tree = KdTree::build(&[
    ///     Point::new(0.0, 0.0),
    ///     Point::new(2.0, 2.0),
    ///     Point::new(4.0, 4.0),
    ///     Point::new(6.0, 6.0),
    /// ]).unwrap();
    ///
    /// let mut results = Vec::new();
    /// tree.query_nearest_k(2.5, 2.5, 2, &mut results).unwrap();
    /// assert_eq!(results, vec![Point::new(2.0, 2.0), Point::new(4.0, 4.0)]);
    /// ```
    pub fn query_nearest_k(
        &self,
        x: f64,
        y: f64,
        k: usize,
        results: &mut Vec<Point>,
    ) -> Result<(), KdTreeError> {
        self.query_nearest_k_internal(x, y, k, results, &mut None)
    }

    /// Same as [`KdTree::query_nearest`], additionally appending every point
    /// examined during the descent to `visited`, in visitation order
    ///
    /// The trace is a testing and visualization aid; it has no effect on the
    /// result.
    pub fn query_nearest_traced(
        &self,
        x: f64,
        y: f64,
        visited: &mut Vec<Point>,
    ) -> Option<Point> {
        self.query_nearest_internal(x, y, &mut Some(visited))
    }

    /// Same as [`KdTree::query_nearest_k`], additionally appending every
    /// point examined during the descent to `visited`, in visitation order
    ///
    /// # Errors
    /// Returns [`KdTreeError::ZeroNeighbors`] if `k` is zero.
    pub fn query_nearest_k_traced(
        &self,
        x: f64,
        y: f64,
        k: usize,
        results: &mut Vec<Point>,
        visited: &mut Vec<Point>,
    ) -> Result<(), KdTreeError> {
        self.query_nearest_k_internal(x, y, k, results, &mut Some(visited))
    }

    fn query_nearest_internal(
        &self,
        x: f64,
        y: f64,
        visited: &mut Option<&mut Vec<Point>>,
    ) -> Option<Point> {
        let root = self.root?;
        let mut best = NeighborList::new(1);
        self.search(root, 0, x, y, &mut best, visited);
        best.entries.first().map(|n| n.point)
    }

    fn query_nearest_k_internal(
        &self,
        x: f64,
        y: f64,
        k: usize,
        results: &mut Vec<Point>,
        visited: &mut Option<&mut Vec<Point>>,
    ) -> Result<(), KdTreeError> {
        if k == 0 {
            return Err(KdTreeError::ZeroNeighbors);
        }
        let Some(root) = self.root else {
            return Ok(());
        };
        let mut best = NeighborList::new(k);
        self.search(root, 0, x, y, &mut best, visited);
        results.extend(best.entries.iter().map(|n| n.point));
        Ok(())
    }

    /// Recursive branch-and-bound descent
    fn search(
        &self,
        idx: usize,
        depth: usize,
        x: f64,
        y: f64,
        best: &mut NeighborList,
        visited: &mut Option<&mut Vec<Point>>,
    ) {
        let node = self.nodes[idx];
        if let Some(trace) = visited {
            trace.push(node.point);
        }
        best.insert(node.point, node.point.distance_sq(Point::new(x, y)));

        let axis = depth % 2;
        let query_coord = if axis == 0 { x } else { y };
        let (near, far) = if query_coord < node.point.coord(axis) {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(child) = near {
            self.search(child, depth + 1, x, y, best, visited);
        }
        if let Some(child) = far {
            // The far region can only contribute if its closest possible
            // point beats the current worst candidate, or there is still
            // room in the list.
            let bound = self.nodes[child].region.distance_sq_to(x, y);
            if !best.is_full() || bound <= best.worst_dist_sq() {
                self.search(child, depth + 1, x, y, best, visited);
            }
        }
    }
}
