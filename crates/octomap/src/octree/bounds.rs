//! Half-open axis-aligned cube with double precision.

use glam::DVec3;

use super::geometry;

/// Cube spanning `[origin, origin + width)` on every axis.
///
/// Nodes never store one of these; the map rebuilds them from its own
/// geometry while walking the tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeBounds {
	/// Minimum corner (inclusive).
	pub origin: DVec3,
	/// Edge length.
	pub width: f64,
}

impl CubeBounds {
	/// Create a cube from its minimum corner and edge length.
	pub fn new(origin: DVec3, width: f64) -> Self {
		Self { origin, width }
	}

	/// Maximum corner (exclusive).
	#[inline]
	pub fn max(&self) -> DVec3 {
		self.origin + DVec3::splat(self.width)
	}

	/// Center of the cube.
	#[inline]
	pub fn center(&self) -> DVec3 {
		self.origin + DVec3::splat(self.width * 0.5)
	}

	/// Check if the cube contains a point. The maximum face is excluded.
	#[inline]
	pub fn contains_point(&self, point: DVec3) -> bool {
		geometry::contains(point, self.origin, self.width)
	}

	/// Child cube for an octant index in `0..8`.
	#[inline]
	pub fn octant(&self, index: u8) -> Self {
		Self {
			origin: geometry::child_origin(index, self.origin, self.width),
			width: self.width * 0.5,
		}
	}
}
