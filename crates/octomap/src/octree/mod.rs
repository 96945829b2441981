//! Octree module for probabilistic occupancy.
//!
//! The tree is made of owned, recursively nested nodes. A node never stores
//! its own position or size; the cube geometry is derived on demand from the
//! root cube and the path taken through the tree.
//!
//! # Octant Convention
//!
//! ```text
//! index = (x >= mid.x) | (y >= mid.y) << 1 | (z >= mid.z) << 2
//! ```
//!
//! # Module Structure
//!
//! - [`geometry`]: containment, octant index and child origin math
//! - [`node`]: `OccupancyNode` - leaf or internal node with log-odds
//! - [`bounds`]: `CubeBounds` - half-open cube used while walking the tree
//! - [`leaves`]: `Leaves` - read-only leaf iterator

pub mod bounds;
pub mod geometry;
pub mod leaves;
pub mod node;

// Re-exports
pub use bounds::CubeBounds;
pub use geometry::OCTANT_COUNT;
pub use leaves::{LeafCell, Leaves};
pub use node::OccupancyNode;
