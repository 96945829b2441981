//! OccupancyOctoMap - facade over the occupancy octree.
//!
//! The map owns the root node and the geometric parameters. It validates
//! caller input and turns absolute points into the origin/width pairs the
//! nodes work with.

use glam::DVec3;
use tracing::debug;

use crate::config::MapConfig;
use crate::error::{InvalidArgument, OctoMapError, Result};
use crate::log_odds::is_valid_probability;
use crate::metrics::{MapMetrics, UpdateTimer};
use crate::octree::{CubeBounds, Leaves, OccupancyNode};
use crate::point::AsPoint;

/// Probabilistic 3D occupancy map.
///
/// Based on "OctoMap: An Efficient Probabilistic 3D Mapping Framework Based
/// on Octrees" by A. Hornung, K. M. Wurm, M. Bennewitz, C. Stachniss and
/// W. Burgard.
///
/// Geometry is fixed at construction; only the tree contents change, and
/// only through [`update`](Self::update).
#[derive(Clone, Debug)]
pub struct OccupancyOctoMap {
  config: MapConfig,
  root: OccupancyNode,
  metrics: MapMetrics,
}

impl OccupancyOctoMap {
  /// Create a map with a prior occupancy probability of 0.5.
  pub fn new(center: DVec3, resolution: f64, max_depth: u32) -> Result<Self> {
    Self::from_config(MapConfig::new(center, resolution, max_depth))
  }

  /// Create a map whose unobserved space has occupancy `prior_prob`.
  pub fn with_prior(
    center: DVec3,
    resolution: f64,
    max_depth: u32,
    prior_prob: f64,
  ) -> Result<Self> {
    Self::from_config(MapConfig::new(center, resolution, max_depth).with_prior(prior_prob))
  }

  /// Create a map from a configuration.
  ///
  /// # Errors
  /// Fails if the configuration does not pass [`MapConfig::validate`].
  pub fn from_config(config: MapConfig) -> Result<Self> {
    config.validate()?;
    debug!(
      center = %config.center,
      resolution = config.resolution,
      max_depth = config.max_depth,
      prior = config.prior_probability,
      "created occupancy map"
    );
    Ok(Self {
      root: OccupancyNode::new(config.prior_probability),
      config,
      metrics: MapMetrics::default(),
    })
  }

  pub fn config(&self) -> &MapConfig {
    &self.config
  }

  pub fn center(&self) -> DVec3 {
    self.config.center
  }

  pub fn resolution(&self) -> f64 {
    self.config.resolution
  }

  pub fn max_depth(&self) -> u32 {
    self.config.max_depth
  }

  /// Half extent of the map, `resolution ^ (max_depth - 1)`.
  pub fn radius(&self) -> f64 {
    self.config.radius()
  }

  /// Edge length of the root cube, `resolution ^ max_depth`.
  pub fn width(&self) -> f64 {
    self.config.width()
  }

  /// Minimum corner of the map.
  pub fn origin(&self) -> DVec3 {
    self.config.origin()
  }

  /// Whether `point` is inside `[center - radius, center + radius)`.
  ///
  /// # Errors
  /// Fails if `point` does not have exactly 3 components.
  pub fn contains<P: AsPoint + ?Sized>(&self, point: &P) -> Result<bool> {
    Ok(self.config.contains(point.as_point()?))
  }

  /// Fuse an observation of occupancy `probability` at `point`.
  ///
  /// The observation lands on the leaf at `max_depth`, splitting nodes on
  /// the way down as needed.
  ///
  /// # Errors
  /// Fails if `point` does not have exactly 3 components, if `probability`
  /// is not strictly inside (0, 1), or if the point is outside the root
  /// cube. The tree is untouched on failure.
  #[cfg_attr(feature = "instrument", tracing::instrument(skip_all, name = "octomap::update"))]
  pub fn update<P: AsPoint + ?Sized>(&mut self, point: &P, probability: f64) -> Result<()> {
    let timer = UpdateTimer::start();
    let result = self.try_update(point, probability);
    match &result {
      Ok(splits) => self.metrics.record_update(*splits, timer.elapsed_us()),
      Err(error) => {
        debug!(%error, "rejected observation");
        self.metrics.record_rejected();
      }
    }
    result.map(|_| ())
  }

  fn try_update<P: AsPoint + ?Sized>(&mut self, point: &P, probability: f64) -> Result<usize> {
    let point = point.as_point()?;
    if !is_valid_probability(probability) {
      return Err(InvalidArgument::Probability(probability).into());
    }
    let bounds = self.config.root_bounds();
    self
      .root
      .update(point, probability, bounds.origin, bounds.width, self.config.max_depth)
  }

  /// Probability of occupancy at `point`.
  ///
  /// # Errors
  /// Fails if `point` does not have exactly 3 components or is outside the
  /// map.
  #[cfg_attr(feature = "instrument", tracing::instrument(skip_all, name = "octomap::probability"))]
  pub fn probability<P: AsPoint + ?Sized>(&self, point: &P) -> Result<f64> {
    let point = point.as_point()?;
    if !self.config.contains(point) {
      return Err(InvalidArgument::OutsideMap(point).into());
    }
    let bounds = self.config.root_bounds();
    self.root.probability_at(point, bounds.origin, bounds.width)
  }

  /// Whether the probability at `point` reaches `threshold`.
  pub fn is_occupied<P: AsPoint + ?Sized>(&self, point: &P, threshold: f64) -> Result<bool> {
    Ok(self.probability(point)? >= threshold)
  }

  /// Root of the tree.
  pub fn root(&self) -> &OccupancyNode {
    &self.root
  }

  /// Cube covered by the root node.
  pub fn root_bounds(&self) -> CubeBounds {
    self.config.root_bounds()
  }

  /// Iterate over every leaf with its cube, in octant order.
  pub fn leaves(&self) -> Leaves<'_> {
    Leaves::new(&self.root, self.config.root_bounds())
  }

  /// Number of leaves.
  pub fn leaf_count(&self) -> usize {
    self.leaves().count()
  }

  /// Number of nodes, internal nodes included.
  ///
  /// Every split replaces one leaf with 8, so the count follows from the
  /// number of leaves.
  pub fn node_count(&self) -> usize {
    let leaves = self.leaf_count();
    leaves + (leaves - 1) / 7
  }

  /// Deepest level holding a leaf (0 for an unsplit map).
  pub fn depth(&self) -> u32 {
    self.leaves().map(|leaf| leaf.depth).max().unwrap_or(0)
  }

  /// Update statistics.
  pub fn metrics(&self) -> &MapMetrics {
    &self.metrics
  }

  /// Mutable access to statistics, e.g. for resetting.
  pub fn metrics_mut(&mut self) -> &mut MapMetrics {
    &mut self.metrics
  }
}

impl TryFrom<MapConfig> for OccupancyOctoMap {
  type Error = OctoMapError;

  fn try_from(config: MapConfig) -> Result<Self> {
    Self::from_config(config)
  }
}

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;
