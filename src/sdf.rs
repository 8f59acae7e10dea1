use {
  euclid::{Point2D, Box2D},
  crate::geometry::{WorldSpace, Shape, Scale, Translation, BoundingBox},
  num_traits::Float
};

/// Signed distance to a shape: negative inside, positive outside, zero on the edge.
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, WorldSpace>) -> T;
}

impl <S: Shape> SDF<f32> for Translation<S, f32> {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    self.shape.sdf(pixel - self.offset)
  }
}

impl <S: Shape> SDF<f32> for Scale<S, f32> {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    let pivot = self.shape.bounding_box().center();
    let local = pivot + (pixel - pivot).component_div(self.scale);
    // the shorter axis keeps the stretched distance a lower bound
    self.shape.sdf(local) * self.scale.x.min(self.scale.y)
  }
}

/// Points covered by either shape.
#[derive(Clone, Copy, Debug)]
pub struct Union<A, B> {
  pub a: A,
  pub b: B,
}

impl<T: Float, A: SDF<T>, B: SDF<T>> SDF<T> for Union<A, B> {
  fn sdf(&self, pixel: Point2D<T, WorldSpace>) -> T {
    T::min(self.a.sdf(pixel), self.b.sdf(pixel))
  }}

impl<T, A, B> BoundingBox<T, WorldSpace> for Union<A, B>
  where T: Copy + PartialOrd,
        A: BoundingBox<T, WorldSpace>,
        B: BoundingBox<T, WorldSpace> {
  fn bounding_box(&self) -> Box2D<T, WorldSpace> {
    self.a.bounding_box().union(&self.b.bounding_box())
  }}
