//! Conversion of caller point representations into `DVec3`.
//!
//! Map queries accept anything implementing [`AsPoint`]. Fixed-size inputs
//! always convert; slices and vectors are checked for exactly 3 components.

use glam::DVec3;

use crate::error::{InvalidArgument, Result};

/// A value that can be read as an (x, y, z) point.
pub trait AsPoint {
  /// Read the point, failing if it does not have exactly 3 components.
  fn as_point(&self) -> Result<DVec3>;
}

impl AsPoint for DVec3 {
  #[inline]
  fn as_point(&self) -> Result<DVec3> {
    Ok(*self)
  }
}

impl AsPoint for [f64; 3] {
  #[inline]
  fn as_point(&self) -> Result<DVec3> {
    Ok(DVec3::from_array(*self))
  }
}

impl AsPoint for (f64, f64, f64) {
  #[inline]
  fn as_point(&self) -> Result<DVec3> {
    Ok(DVec3::new(self.0, self.1, self.2))
  }
}

impl AsPoint for [f64] {
  fn as_point(&self) -> Result<DVec3> {
    match *self {
      [x, y, z] => Ok(DVec3::new(x, y, z)),
      _ => Err(InvalidArgument::PointDimension(self.len()).into()),
    }
  }
}

impl AsPoint for Vec<f64> {
  #[inline]
  fn as_point(&self) -> Result<DVec3> {
    self.as_slice().as_point()
  }
}

impl<P: AsPoint + ?Sized> AsPoint for &P {
  #[inline]
  fn as_point(&self) -> Result<DVec3> {
    (**self).as_point()
  }
}
