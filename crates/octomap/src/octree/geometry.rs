//! Ad hoc cube geometry for octree nodes.
//!
//! Nodes do not store their origin or size. The caller threads both through
//! the descent and these functions derive each child's cube on the fly.
//!
//! Octant index bits represent the upper half along each axis:
//! - bit 0: X (`point.x >= origin.x + width / 2`)
//! - bit 1: Y
//! - bit 2: Z

use glam::DVec3;

use crate::error::{InvalidArgument, Result};

/// Number of children of an internal node.
pub const OCTANT_COUNT: usize = 8;

/// Check whether `point` lies in `[origin, origin + width)` on all 3 axes.
#[inline]
pub fn contains(point: DVec3, origin: DVec3, width: f64) -> bool {
  let max = origin + DVec3::splat(width);
  point.cmpge(origin).all() && point.cmplt(max).all()
}

/// Octant of the cube at `origin` with edge `width` that holds `point`.
///
/// Fails if the point is outside the cube.
#[inline]
pub fn index(point: DVec3, origin: DVec3, width: f64) -> Result<u8> {
  if !contains(point, origin, width) {
    return Err(InvalidArgument::OutsideCube { point, origin, width }.into());
  }
  Ok(octant(point, origin, width))
}

/// Octant of `point` without the containment check.
///
/// Points outside the cube are clamped to the nearest octant. Only used once
/// the caller has already checked containment at the top of a descent.
#[inline]
pub fn octant(point: DVec3, origin: DVec3, width: f64) -> u8 {
  let half = origin + DVec3::splat(width / 2.0);
  point.cmpge(half).bitmask() as u8
}

/// Origin of the child cube at octant `index`.
///
/// The inverse of [`index`]: the parent origin shifted by half the width
/// along every axis whose bit is set.
#[inline]
pub fn child_origin(index: u8, origin: DVec3, width: f64) -> DVec3 {
  let half = width / 2.0;
  origin
    + DVec3::new(
      if index & 1 != 0 { half } else { 0.0 },
      if index & 2 != 0 { half } else { 0.0 },
      if index & 4 != 0 { half } else { 0.0 },
    )
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;
