//! octomap - Probabilistic 3D occupancy mapping
//!
//! This crate provides a spatial index over a bounded cubic volume that
//! answers "how likely is this location occupied?" and fuses noisy sensor
//! observations into that estimate.
//!
//! # Features
//!
//! - **Lazy octree**: Leaves split into 8 octants only when an observation
//!   needs a finer cell; queries never split
//! - **Log-odds fusion**: Independent observations combine by addition, so
//!   update order does not matter
//! - **Ad hoc geometry**: Nodes store no position or size; cubes are derived
//!   from the map parameters during each descent
//! - **Metrics**: Opt-in update counters and timings (`metrics` feature)
//!
//! # Example
//!
//! ```
//! use glam::DVec3;
//! use octomap::OccupancyOctoMap;
//!
//! // 4x4x4 cube around the origin, observations stored 2 levels deep
//! let mut map = OccupancyOctoMap::new(DVec3::ZERO, 2.0, 2)?;
//!
//! map.update(&[0.9, 0.9, 0.9], 0.9)?;
//!
//! assert!((map.probability(&[0.9, 0.9, 0.9])? - 0.9).abs() < 1e-12);
//! assert_eq!(map.probability(&[-0.9, -0.9, -0.9])?, 0.5);
//! # Ok::<(), octomap::OctoMapError>(())
//! ```

pub mod config;
pub mod error;
pub mod log_odds;
pub mod point;

// Re-export commonly used items
pub use config::{MapConfig, MAX_DEPTH};
pub use error::{InvalidArgument, OctoMapError, Result};
pub use point::AsPoint;

// Octree nodes and geometry
pub mod octree;
pub use octree::{CubeBounds, LeafCell, OccupancyNode};

// Map facade
pub mod map;
pub use map::OccupancyOctoMap;

// Engine-agnostic statistics
pub mod metrics;
pub use metrics::MapMetrics;

// Re-export glam so callers can build points without a direct dependency
pub use glam;
