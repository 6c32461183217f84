//! # kdtree2d - Static 2D k-d Tree
//!
//! A Rust library providing a balanced k-d tree for fast nearest-neighbor
//! queries over a fixed set of points in the plane.
//!
//! ## Features
//!
//! - **Balanced Construction**: Median splits on alternating axes keep the tree depth logarithmic
//! - **Branch-and-Bound Search**: Per-node regions prune whole subtrees during queries
//! - **Simple API**: Build from a point slice, query with plain coordinates
//! - **Static Optimization**: Build once, query many times; immutable and safe to share across threads
//!
//! ## Quick Start
//!
//! ```rust
//! use kdtree2d::prelude::*;
//!
//! // Index a fixed set of points
//! let tree = KdTree::build(&[
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(2.0, 2.0),
//!     Point::new(5.0, 5.0),
//!     Point::new(0.0, 5.0),
//! ]).unwrap();
//!
//! // Single nearest neighbor
//! assert_eq!(tree.query_nearest(1.1, 0.9), Some(Point::new(1.0, 1.0)));
//!
//! // K nearest neighbors, ascending by distance
//! let mut results = Vec::new();
//! tree.query_nearest_k(4.5, 4.4, 2, &mut results).unwrap();
//! assert_eq!(results, vec![Point::new(5.0, 5.0), Point::new(2.0, 2.0)]);
//!
//! // The results vector can be reused for multiple queries
//! results.clear();
//! tree.query_nearest_k(0.1, 4.9, 1, &mut results).unwrap();
//! assert_eq!(results, vec![Point::new(0.0, 5.0)]);
//! ```
//!
//! ## How It Works
//!
//! Construction sorts the points by X, places the lower median at the root,
//! and recurses on both halves with the splitting axis alternating between X
//! and Y at each depth. Every node records the rectangular region of the
//! plane assigned to its subtree: the parent's region clipped at the
//! parent's splitting coordinate.
//!
//! A query descends the tree, always exploring the child on its own side of
//! the split first. The opposite child is entered only when the distance
//! from the query to that child's region is no larger than the worst
//! candidate found so far - otherwise the whole subtree is skipped. For
//! well-distributed points this visits O(log n) nodes per query instead of
//! all n.

pub mod kdtree;
pub mod prelude;

mod queries;

pub use kdtree::{KdTree, KdTreeError, Point, Rect};
