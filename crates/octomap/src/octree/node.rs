//! OccupancyNode - recursive cube holding an occupancy estimate.
//!
//! A node is either a leaf carrying accumulated log-odds or an internal node
//! owning exactly 8 children. Nodes know nothing about where they are: every
//! operation takes the cube's `origin` and `width` from the caller.

use std::array;

use glam::DVec3;
use tracing::trace;

use super::geometry::{self, OCTANT_COUNT};
use crate::error::{InvalidArgument, Result};
use crate::log_odds::{logit, sigmoid};

/// Octree node keeping track of the probability of occupancy.
///
/// The leaf -> internal transition is one-way. Internal nodes keep their own
/// log-odds as the seed handed to children, but queries never read it once
/// children exist.
#[derive(Clone, Debug, PartialEq)]
pub enum OccupancyNode {
  /// Node without children.
  Leaf {
    /// Accumulated log-odds of occupancy.
    log_odds: f64,
  },
  /// Node with one child per octant.
  Internal {
    /// Log-odds held at the time of the split.
    log_odds: f64,
    /// Children indexed by octant (bit 0 = +X, bit 1 = +Y, bit 2 = +Z).
    children: Box<[OccupancyNode; OCTANT_COUNT]>,
  },
}

impl OccupancyNode {
  /// Create a leaf with the given prior probability of occupancy.
  ///
  /// The caller guarantees `0 < prior_prob < 1`.
  pub fn new(prior_prob: f64) -> Self {
    Self::from_log_odds(logit(prior_prob))
  }

  /// Create a leaf directly from log-odds.
  pub fn from_log_odds(log_odds: f64) -> Self {
    Self::Leaf { log_odds }
  }

  /// Whether this node has no children.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    matches!(self, Self::Leaf { .. })
  }

  /// Accumulated log-odds of this node.
  #[inline]
  pub fn log_odds(&self) -> f64 {
    match self {
      Self::Leaf { log_odds } | Self::Internal { log_odds, .. } => *log_odds,
    }
  }

  /// Probability of occupancy, `e^L / (1 + e^L)`.
  #[inline]
  pub fn probability(&self) -> f64 {
    sigmoid(self.log_odds())
  }

  /// Children in octant order, or `None` for a leaf.
  pub fn children(&self) -> Option<&[OccupancyNode; OCTANT_COUNT]> {
    match self {
      Self::Leaf { .. } => None,
      Self::Internal { children, .. } => Some(children),
    }
  }

  /// Split a leaf into 8 children. No-op on an internal node.
  ///
  /// Every child starts from this node's current log-odds, so the estimate
  /// stays continuous when the tree gets deeper.
  pub fn split(&mut self) {
    if let Self::Leaf { log_odds } = *self {
      trace!(log_odds, "splitting leaf");
      *self = Self::Internal {
        log_odds,
        children: Box::new(array::from_fn(|_| Self::from_log_odds(log_odds))),
      };
    }
  }

  /// See [`geometry::contains`].
  #[inline]
  pub fn contains(&self, point: DVec3, origin: DVec3, width: f64) -> bool {
    geometry::contains(point, origin, width)
  }

  /// See [`geometry::index`].
  #[inline]
  pub fn index(&self, point: DVec3, origin: DVec3, width: f64) -> Result<u8> {
    geometry::index(point, origin, width)
  }

  /// See [`geometry::child_origin`].
  #[inline]
  pub fn child_origin(&self, index: u8, origin: DVec3, width: f64) -> DVec3 {
    geometry::child_origin(index, origin, width)
  }

  /// Fuse an observation into the cube holding `point`, `remaining_depth`
  /// levels below this node.
  ///
  /// At depth 0 the observation lands on this node. Otherwise the node is
  /// split if needed and the update descends into the matching octant.
  /// Returns the number of splits performed.
  ///
  /// # Errors
  /// Fails if `point` is outside `[origin, origin + width)`. Containment is
  /// checked before anything is split, so a failed update changes nothing.
  pub fn update(
    &mut self,
    point: DVec3,
    probability: f64,
    origin: DVec3,
    width: f64,
    remaining_depth: u32,
  ) -> Result<usize> {
    if !geometry::contains(point, origin, width) {
      return Err(InvalidArgument::OutsideCube { point, origin, width }.into());
    }
    Ok(self.descend_and_fuse(point, probability, origin, width, remaining_depth))
  }

  fn descend_and_fuse(
    &mut self,
    point: DVec3,
    probability: f64,
    origin: DVec3,
    width: f64,
    remaining_depth: u32,
  ) -> usize {
    if remaining_depth == 0 {
      self.fuse(probability);
      return 0;
    }

    match self {
      Self::Internal { children, .. } => {
        let child_index = geometry::octant(point, origin, width);
        children[child_index as usize].descend_and_fuse(
          point,
          probability,
          geometry::child_origin(child_index, origin, width),
          width / 2.0,
          remaining_depth - 1,
        )
      }
      Self::Leaf { .. } => {
        self.split();
        1 + self.descend_and_fuse(point, probability, origin, width, remaining_depth)
      }
    }
  }

  /// Probability of occupancy at `point`.
  ///
  /// Descends until the first leaf; a leaf answers for its whole cube.
  ///
  /// # Errors
  /// Fails if this node is internal and `point` is outside
  /// `[origin, origin + width)`.
  pub fn probability_at(&self, point: DVec3, origin: DVec3, width: f64) -> Result<f64> {
    if !self.is_leaf() && !geometry::contains(point, origin, width) {
      return Err(InvalidArgument::OutsideCube { point, origin, width }.into());
    }
    let (leaf, _) = self.leaf_at(point, origin, width);
    Ok(leaf.probability())
  }

  /// First leaf on the path towards `point`, with its depth below this node.
  ///
  /// The caller has already checked that `point` is inside this node's cube.
  pub(crate) fn leaf_at(&self, point: DVec3, origin: DVec3, width: f64) -> (&Self, u32) {
    let mut node = self;
    let mut origin = origin;
    let mut width = width;
    let mut depth = 0;
    while let Self::Internal { children, .. } = node {
      let child_index = geometry::octant(point, origin, width);
      origin = geometry::child_origin(child_index, origin, width);
      width /= 2.0;
      node = &children[child_index as usize];
      depth += 1;
    }
    (node, depth)
  }

  /// Add the log-odds of one observation.
  fn fuse(&mut self, probability: f64) {
    let delta = logit(probability);
    match self {
      Self::Leaf { log_odds } | Self::Internal { log_odds, .. } => {
        *log_odds += delta;
        trace!(delta, log_odds = *log_odds, "fused observation");
      }
    }
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
