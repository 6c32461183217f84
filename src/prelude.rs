//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use kdtree2d::prelude::*;
//! ```

pub use crate::KdTree;
pub use crate::KdTreeError;
pub use crate::Point;
pub use crate::Rect;
