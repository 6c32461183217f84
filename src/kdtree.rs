//! Core k-d tree types and construction.
//!
//! The tree keeps its nodes in a flat arena referenced by index, built in a
//! single pass from a point slice and immutable afterwards. Each node carries
//! the rectangular region of the plane assigned to its subtree; queries use
//! these regions to prune whole branches.

use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in the plane.
///
/// Plain value type; equality is coordinate equality.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point
    pub fn distance_sq(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Coordinate on the given axis (0 = X, 1 = Y)
    #[inline]
    pub(crate) fn coord(self, axis: usize) -> f64 {
        if axis == 0 { self.x } else { self.y }
    }
}

/// Axis-aligned rectangle: `min_x`, `min_y`, `max_x`, `max_y`
///
/// Invariant: `min_x <= max_x` and `min_y <= max_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Minimum X bound
    pub min_x: f64,
    /// Minimum Y bound
    pub min_y: f64,
    /// Maximum X bound
    pub max_x: f64,
    /// Maximum Y bound
    pub max_y: f64,
}

impl Rect {
    /// Creates a rectangle from its bounds
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Returns whether `other` lies entirely within this rectangle
    pub fn contains(self, other: Self) -> bool {
        self.min_x <= other.min_x
            && self.max_x >= other.max_x
            && self.min_y <= other.min_y
            && self.max_y >= other.max_y
    }

    /// Squared distance from a point to the closest point of this rectangle
    /// (zero if the point lies inside)
    #[inline]
    pub fn distance_sq_to(self, x: f64, y: f64) -> f64 {
        let dx = axis_distance(x, self.min_x, self.max_x);
        let dy = axis_distance(y, self.min_y, self.max_y);
        dx * dx + dy * dy
    }

    /// Bounding rectangle of a non-empty point slice
    fn of_points(points: &[Point]) -> Self {
        let mut rect = Self::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        );
        for p in points {
            rect.min_x = rect.min_x.min(p.x);
            rect.min_y = rect.min_y.min(p.y);
            rect.max_x = rect.max_x.max(p.x);
            rect.max_y = rect.max_y.max(p.y);
        }
        rect
    }

    /// Splits at `value` on `axis`; the low half keeps the region below the
    /// split coordinate. Both halves keep the full extent of the other axis.
    fn split_at(self, axis: usize, value: f64) -> (Self, Self) {
        let mut low = self;
        let mut high = self;
        if axis == 0 {
            low.max_x = value;
            high.min_x = value;
        } else {
            low.max_y = value;
            high.min_y = value;
        }
        (low, high)
    }
}

/// Distance along an axis from a coordinate to an interval, 0 inside
#[inline]
fn axis_distance(coordinate: f64, min: f64, max: f64) -> f64 {
    if coordinate < min {
        min - coordinate
    } else if coordinate > max {
        coordinate - max
    } else {
        0.0
    }
}

/// Tree node: one point, the region of the plane assigned to its subtree,
/// and optional children as arena indices.
///
/// The region is the half-plane slab inherited from the parent, clipped at
/// the parent's splitting coordinate, not the bounding box of the points the
/// subtree happens to contain. A missing child is `None`, never a sentinel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Node {
    pub(crate) point: Point,
    pub(crate) region: Rect,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
}

/// Errors reported by tree construction and queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum KdTreeError {
    /// An input point had a NaN or infinite coordinate; the whole batch
    /// is rejected.
    NonFiniteCoordinate {
        /// Position of the offending point in the input slice
        index: usize,
    },
    /// `k` was zero in a k-nearest query.
    ZeroNeighbors,
}

impl fmt::Display for KdTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCoordinate { index } => {
                write!(f, "point at index {index} has a non-finite coordinate")
            }
            Self::ZeroNeighbors => write!(f, "k must be at least 1"),
        }
    }
}

impl Error for KdTreeError {}

/// Balanced k-d tree over a fixed set of 2D points
///
/// Built once with [`KdTree::build`] and immutable afterwards, so a shared
/// reference can be queried from multiple threads without locking.
///
/// # Examples
/// ```
/// use kdtree2d::{KdTree, Point};
///
/// let tree = KdTree::build(&[
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 2.0),
///     Point::new(5.0, 5.0),
/// ]).unwrap();
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.query_nearest(1.8, 2.1), Some(Point::new(2.0, 2.0)));
/// ```
#[derive(Clone, Debug)]
pub struct KdTree {
    /// Node arena; children refer to entries by index
    pub(crate) nodes: Vec<Node>,
    /// Index of the root node, `None` for an empty tree
    pub(crate) root: Option<usize>,
}

impl KdTree {
    /// Builds a tree from a point slice
    ///
    /// The input is copied into a working buffer; the caller's slice is left
    /// untouched. An empty slice produces a valid empty tree, not an error.
    /// For a fixed input order the resulting tree is always identical;
    /// points sharing a coordinate on a splitting axis may shape the tree
    /// differently across input orders without affecting query results.
    ///
    /// # Errors
    /// Returns [`KdTreeError::NonFiniteCoordinate`] if any point has a NaN
    /// or infinite coordinate. No tree is built in that case.
    pub fn build(points: &[Point]) -> Result<Self, KdTreeError> {
        for (index, p) in points.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(KdTreeError::NonFiniteCoordinate { index });
            }
        }

        let mut tree = Self {
            nodes: Vec::with_capacity(points.len()),
            root: None,
        };
        if points.is_empty() {
            return Ok(tree);
        }

        // Construction sorts sub-ranges in place; the sorting must not be
        // visible through the caller's slice.
        let mut work = points.to_vec();
        let region = Rect::of_points(&work);
        let root = tree.build_subtree(&mut work, 0, region);
        tree.root = Some(root);
        Ok(tree)
    }

    /// Recursively partitions `pts` (never empty) and returns the arena
    /// index of the subtree root.
    fn build_subtree(&mut self, pts: &mut [Point], depth: usize, region: Rect) -> usize {
        let axis = depth % 2;

        // Stable sort: tied coordinates keep their incoming relative order,
        // so a fixed input order always yields the same tree.
        pts.sort_by(|a, b| {
            a.coord(axis)
                .partial_cmp(&b.coord(axis))
                .unwrap_or(Ordering::Equal)
        });

        let median = pts.len() / 2;
        let pivot = pts[median];
        let (low, high) = region.split_at(axis, pivot.coord(axis));

        // The lower-median point belongs to this node alone; children get
        // the points strictly before and strictly after it.
        let left = if median > 0 {
            Some(self.build_subtree(&mut pts[..median], depth + 1, low))
        } else {
            None
        };
        let right = if median + 1 < pts.len() {
            Some(self.build_subtree(&mut pts[median + 1..], depth + 1, high))
        } else {
            None
        };

        self.nodes.push(Node {
            point: pivot,
            region,
            left,
            right,
        });
        self.nodes.len() - 1
    }

    /// Returns the number of indexed points
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Bounding rectangle of all indexed points, `None` for an empty tree
    pub fn bounds(&self) -> Option<Rect> {
        self.root.map(|idx| self.nodes[idx].region)
    }
}

impl Default for KdTree {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }
}
