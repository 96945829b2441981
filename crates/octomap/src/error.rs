//! Error type for map and node operations.
//!
//! Every failure is an invalid argument supplied by the caller. Errors are
//! raised before any node is touched, so a failed call leaves the tree as it
//! was.

use glam::DVec3;
use thiserror::Error;

use crate::config::MAX_DEPTH;

/// Reason an argument was rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InvalidArgument {
  /// Point representation did not have exactly x, y and z.
  #[error("point should contain x, y, z but has {0} components")]
  PointDimension(usize),

  /// Occupancy probability outside the open interval (0, 1).
  #[error("probability {0} should be strictly between 0.0 and 1.0")]
  Probability(f64),

  /// Point lies outside the half-open cube handed to a node.
  #[error("point {point} is not contained in the cube at {origin} with width {width}")]
  OutsideCube {
    point: DVec3,
    origin: DVec3,
    width: f64,
  },

  /// Point lies outside the map bounds.
  #[error("point {0} is outside the map")]
  OutsideMap(DVec3),

  /// Resolution must be finite and positive.
  #[error("resolution {0} should be finite and greater than 0")]
  Resolution(f64),

  /// Depth beyond what the map supports.
  #[error("max depth {0} exceeds the supported maximum of {}", MAX_DEPTH)]
  Depth(u32),
}

/// Octomap error. There is a single kind: the caller passed an invalid
/// argument.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum OctoMapError {
  #[error("invalid argument: {0}")]
  InvalidArgument(#[from] InvalidArgument),
}

impl OctoMapError {
  /// The rejected argument.
  pub fn reason(&self) -> &InvalidArgument {
    match self {
      OctoMapError::InvalidArgument(reason) => reason,
    }
  }
}

pub type Result<T> = std::result::Result<T, OctoMapError>;
