use {
  super::{BoundingBox, WorldSpace},
  crate::sdf::SDF,
  euclid::{Box2D, Point2D}
};

/// `[-1, 1]²`, the extent shared by both primitives.
fn unit_box<S>() -> Box2D<f32, S> {
  Box2D::new(Point2D::splat(-1.0), Point2D::splat(1.0))
}

/// Unit circle
#[derive(Debug, Copy, Clone)]
pub struct Circle;

/// Square spanning `[-1, 1]²`
#[derive(Debug, Copy, Clone)]
pub struct Square;

impl<S> BoundingBox<f32, S> for Circle { fn bounding_box(&self) -> Box2D<f32, S> { unit_box() } }
impl<S> BoundingBox<f32, S> for Square { fn bounding_box(&self) -> Box2D<f32, S> { unit_box() } }

impl SDF<f32> for Circle {
  fn sdf(&self, p: Point2D<f32, WorldSpace>) -> f32 {
    p.x.hypot(p.y) - 1.0
  }
}

/// Chebyshev distance: exact inside, a lower bound outside.
impl SDF<f32> for Square {
  fn sdf(&self, p: Point2D<f32, WorldSpace>) -> f32 {
    p.x.abs().max(p.y.abs()) - 1.0
  }
}
