//! .
//!
//! The origin of coordinate system is in top-left corner. Primitives are represented in the
//! interval `[-1, 1]`, and center in the origin. The canvas itself spans `[0, 1]` in
//! [`WorldSpace`], whatever its resolution in pixels.

use {
  euclid::{Point2D, Box2D, Vector2D as V2},
  crate::sdf::{SDF, Union}
};

pub mod shapes;
pub use shapes::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// Normalized coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct WorldSpace;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something inside a rectangular area.
pub trait Shape: SDF<f32> + BoundingBox<f32, WorldSpace> {
  fn translate<T>(self, offset: V2<T, WorldSpace>) -> Translation<Self, T> where Self: Sized {
    Translation { shape: self, offset }
  }
  /// Scale around the center of shape's bounding box
  fn scale<T>(self, scale: V2<T, WorldSpace>) -> Scale<Self, T> where Self: Sized {
    Scale { shape: self, scale }
  }
  /// Union of two SDFs.
  fn union<U>(self, other: U) -> Union<Self, U> where Self: Sized {
    Union { a: self, b: other }
  }
  fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
}
impl <T> Shape for T where T: SDF<f32> + BoundingBox<f32, WorldSpace> {}

#[derive(Debug, Copy, Clone)]
pub struct Translation<S, T> {
  pub shape: S,
  pub offset: V2<T, WorldSpace>
}
impl <S> BoundingBox<f32, WorldSpace> for Translation<S, f32>
  where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    self.shape.bounding_box().translate(self.offset)
  }
}

/// Scale around the center of shape's bounding box
#[derive(Debug, Copy, Clone)]
pub struct Scale<S, T> {
  pub shape: S,
  pub scale: V2<T, WorldSpace>
}
impl <S> BoundingBox<f32, WorldSpace> for Scale<S, f32>
  where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    let c = self.shape.bounding_box().center().to_vector();
    self.shape.bounding_box()
      .translate(-c)
      .scale(self.scale.x, self.scale.y)
      .translate(c)
  }
}

/// Axis-aligned ellipse, a unit circle stretched to its semi-axes.
pub type Ellipse = Translation<Scale<Circle, f32>, f32>;
/// Axis-aligned rectangle, a unit square stretched to its half extents.
pub type Rectangle = Translation<Scale<Square, f32>, f32>;

/// Box of pixels `[(x0, y0), (x1, y1)]` where both corners belong to the box,
/// i.e. it covers `[x0, x1 + 1) × [y0, y1 + 1)`.
pub type PixelBox = Box2D<i32, PixelSpace>;

pub fn pixel_box(x0: i32, y0: i32, x1: i32, y1: i32) -> PixelBox {
  Box2D::new(Point2D::new(x0, y0), Point2D::new(x1, y1))
}

/// Continuous extent of an inclusive pixel box, on a square canvas `resolution` pixels wide.
pub fn to_world_box(bbox: PixelBox, resolution: u32) -> Box2D<f32, WorldSpace> {
  let side = resolution as f32;
  Box2D::new(bbox.min.to_f32(), (bbox.max + V2::splat(1)).to_f32())
    .scale(1.0 / side, 1.0 / side)
    .cast_unit()
}

/// Center of a pixel, in world coordinates.
pub fn pixel_center(
  pixel: Point2D<u32, PixelSpace>,
  offset: V2<f32, PixelSpace>,
  min_side: f32
) -> Point2D<f32, WorldSpace> {
  ((pixel.to_f32() + V2::splat(0.5) - offset).to_vector() / min_side)
    .cast_unit()
    .to_point()
}

/// Ellipse inscribed in the pixel box.
pub fn ellipse(bbox: PixelBox, resolution: u32) -> Ellipse {
  let world = to_world_box(bbox, resolution);
  Circle
    .scale(world.size().to_vector() / 2.0)
    .translate(world.center().to_vector())
}

/// Rectangle filling the pixel box.
pub fn rectangle(bbox: PixelBox, resolution: u32) -> Rectangle {
  let world = to_world_box(bbox, resolution);
  Square
    .scale(world.size().to_vector() / 2.0)
    .translate(world.center().to_vector())
}
