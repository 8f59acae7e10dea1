use {
  euclid::{Point2D, Size2D},
  image::{Rgba, RgbaImage},
  crate::{
    drawing::{Draw, Shape, Texture, rescale_bounding_box},
    geometry::{self, BoundingBox, PixelSpace},
    sdf::SDF
  }
};

/// Solid fill. A pixel is covered when the shape contains its center, and covered pixels
/// are overwritten with the fill color, alpha included.
impl <Cutie> Draw<RgbaImage> for Texture<Cutie, Rgba<u8>>
  where Cutie: Shape
{
  fn draw(&self, image: &mut RgbaImage) {
    let resolution: Size2D<_, PixelSpace> = image.dimensions().into();
    let (bounding_box, offset, min_side) = rescale_bounding_box(self.bounding_box(), resolution);
    let bounding_box = match bounding_box {
      Some(x) => x,
      None => return // bounding box has no intersection with screen at all
    };

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::from([x, y]))
      .filter(|&pixel| self.sdf(geometry::pixel_center(pixel, offset, min_side)) <= 0.0)
      .for_each(|pixel| image.put_pixel(pixel.x, pixel.y, self.texture));
  }
}
