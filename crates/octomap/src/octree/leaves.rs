//! Read-only walk over the leaves of an occupancy tree.
//!
//! Leaf cubes are rebuilt from the root bounds on the way down; nothing is
//! split or written.

use super::bounds::CubeBounds;
use super::node::OccupancyNode;

/// A leaf of the tree with its reconstructed cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafCell {
  /// Cube covered by the leaf.
  pub bounds: CubeBounds,
  /// Levels below the root (0 = the root itself).
  pub depth: u32,
  /// Probability of occupancy.
  pub probability: f64,
}

/// Depth-first iterator over leaves in octant order.
pub struct Leaves<'a> {
  stack: Vec<(&'a OccupancyNode, CubeBounds, u32)>,
}

impl<'a> Leaves<'a> {
  /// Walk the tree rooted at `root`, whose cube is `bounds`.
  pub fn new(root: &'a OccupancyNode, bounds: CubeBounds) -> Self {
    Self {
      stack: vec![(root, bounds, 0)],
    }
  }
}

impl Iterator for Leaves<'_> {
  type Item = LeafCell;

  fn next(&mut self) -> Option<LeafCell> {
    while let Some((node, bounds, depth)) = self.stack.pop() {
      match node.children() {
        None => {
          return Some(LeafCell {
            bounds,
            depth,
            probability: node.probability(),
          })
        }
        Some(children) => {
          // Reverse push so octant 0 pops first
          for (octant, child) in children.iter().enumerate().rev() {
            self.stack.push((child, bounds.octant(octant as u8), depth + 1));
          }
        }
      }
    }
    None
  }
}

#[cfg(test)]
#[path = "leaves_test.rs"]
mod leaves_test;
