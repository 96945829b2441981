use super::*;
use crate::error::OctoMapError;

// =========================================================================
// MapConfig - geometry
// =========================================================================

/// resolution=2, max_depth=1: radius 1, width 2.
#[test]
fn test_unit_map_geometry() {
  let config = MapConfig::new(DVec3::ZERO, 2.0, 1);

  assert_eq!(config.radius(), 1.0);
  assert_eq!(config.width(), 2.0);
  assert_eq!(config.origin(), DVec3::splat(-1.0));
  assert_eq!(config.root_bounds(), CubeBounds::new(DVec3::splat(-1.0), 2.0));
}

/// Width is resolution^depth, radius is resolution^(depth - 1).
#[test]
fn test_geometry_follows_resolution_powers() {
  let config = MapConfig::new(DVec3::new(10.0, -4.0, 0.5), 3.0, 4);

  assert_eq!(config.width(), 81.0);
  assert_eq!(config.radius(), 27.0);
  assert_eq!(config.origin(), DVec3::new(-17.0, -31.0, -26.5));
}

/// Depth 0 has a radius of 1 / resolution.
#[test]
fn test_depth_zero_geometry() {
  let config = MapConfig::new(DVec3::ZERO, 2.0, 0);

  assert_eq!(config.width(), 1.0);
  assert_eq!(config.radius(), 0.5);
}

#[test]
fn test_contains_is_half_open() {
  let config = MapConfig::new(DVec3::ZERO, 2.0, 1);

  assert!(config.contains(DVec3::splat(0.5)));
  assert!(config.contains(DVec3::new(-1.0, 0.0, 0.0)));
  assert!(!config.contains(DVec3::new(1.0, 0.0, 0.0)));
  assert!(!config.contains(DVec3::new(1.5, 0.0, 0.0)));
  assert!(!config.contains(DVec3::new(-1.0001, 0.0, 0.0)));
}

// =========================================================================
// MapConfig - validation
// =========================================================================

#[test]
fn test_default_is_valid() {
  let config = MapConfig::default();
  assert_eq!(config.prior_probability, 0.5);
  assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_prior_must_be_open_probability() {
  for prior in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
    let config = MapConfig::default().with_prior(prior);
    assert!(
      matches!(
        config.validate(),
        Err(OctoMapError::InvalidArgument(InvalidArgument::Probability(_)))
      ),
      "prior {} should be rejected",
      prior
    );
  }
  assert_eq!(MapConfig::default().with_prior(0.01).validate(), Ok(()));
}

#[test]
fn test_resolution_must_be_positive_and_finite() {
  for resolution in [0.0, -2.0, f64::INFINITY, f64::NAN] {
    let config = MapConfig::new(DVec3::ZERO, resolution, 4);
    assert!(
      matches!(
        config.validate(),
        Err(OctoMapError::InvalidArgument(InvalidArgument::Resolution(_)))
      ),
      "resolution {} should be rejected",
      resolution
    );
  }
}

#[test]
fn test_depth_limit() {
  let at_limit = MapConfig::new(DVec3::ZERO, 2.0, MAX_DEPTH);
  assert_eq!(at_limit.validate(), Ok(()));

  let too_deep = MapConfig::new(DVec3::ZERO, 2.0, MAX_DEPTH + 1);
  assert_eq!(
    too_deep.validate(),
    Err(OctoMapError::InvalidArgument(InvalidArgument::Depth(MAX_DEPTH + 1)))
  );
}
