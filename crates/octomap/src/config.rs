//! MapConfig - geometric parameters and prior of an occupancy map.

use glam::DVec3;

use crate::error::{InvalidArgument, Result};
use crate::log_odds::is_valid_probability;
use crate::octree::CubeBounds;

/// Deepest tree a map may be configured with.
pub const MAX_DEPTH: u32 = 32;

/// Configuration of an occupancy map.
///
/// ```text
/// width  = resolution ^ max_depth
/// radius = resolution ^ (max_depth - 1)
/// map    = [center - radius, center + radius) on every axis
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
  /// Center of the map.
  pub center: DVec3,

  /// Base of the depth expansion.
  pub resolution: f64,

  /// Number of levels below the root at which observations are stored.
  pub max_depth: u32,

  /// Occupancy probability of space that was never observed.
  pub prior_probability: f64,
}

impl MapConfig {
  /// Configuration with the default prior of 0.5.
  pub fn new(center: DVec3, resolution: f64, max_depth: u32) -> Self {
    Self {
      center,
      resolution,
      max_depth,
      ..Default::default()
    }
  }

  /// Replace the prior probability.
  pub fn with_prior(mut self, prior_probability: f64) -> Self {
    self.prior_probability = prior_probability;
    self
  }

  /// Check every parameter.
  ///
  /// The prior follows the same rule as observations: strictly inside
  /// (0, 1), since 0 and 1 have infinite log-odds.
  pub fn validate(&self) -> Result<()> {
    if !(self.resolution.is_finite() && self.resolution > 0.0) {
      return Err(InvalidArgument::Resolution(self.resolution).into());
    }
    if self.max_depth > MAX_DEPTH {
      return Err(InvalidArgument::Depth(self.max_depth).into());
    }
    if !is_valid_probability(self.prior_probability) {
      return Err(InvalidArgument::Probability(self.prior_probability).into());
    }
    Ok(())
  }

  /// Half extent of the map, `resolution ^ (max_depth - 1)`.
  #[inline]
  pub fn radius(&self) -> f64 {
    self.resolution.powi(self.max_depth as i32 - 1)
  }

  /// Edge length of the root cube, `resolution ^ max_depth`.
  #[inline]
  pub fn width(&self) -> f64 {
    self.resolution.powi(self.max_depth as i32)
  }

  /// Minimum corner of the map, where the descent starts.
  #[inline]
  pub fn origin(&self) -> DVec3 {
    self.center - DVec3::splat(self.radius())
  }

  /// Cube of the root node.
  #[inline]
  pub fn root_bounds(&self) -> CubeBounds {
    CubeBounds::new(self.origin(), self.width())
  }

  /// Whether `point` lies in `[center - radius, center + radius)` on all axes.
  #[inline]
  pub fn contains(&self, point: DVec3) -> bool {
    let radius = DVec3::splat(self.radius());
    point.cmpge(self.center - radius).all() && point.cmplt(self.center + radius).all()
  }
}

impl Default for MapConfig {
  fn default() -> Self {
    Self {
      center: DVec3::ZERO,
      resolution: 2.0,
      max_depth: 16,
      prior_probability: 0.5,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
