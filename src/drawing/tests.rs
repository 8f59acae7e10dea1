use {
  super::*,
  crate::geometry::{self, pixel_box, Circle, Square},
  image::{Rgba, RgbaImage},
};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

fn covered(image: &RgbaImage, color: Rgba<u8>) -> Vec<(u32, u32)> {
  image.enumerate_pixels()
    .filter(|(_, _, p)| **p == color)
    .map(|(x, y, _)| (x, y))
    .collect()
}

#[test] fn rectangle_covers_inclusive_box() {
  let mut image = RgbaImage::new(8, 8);
  geometry::rectangle(pixel_box(2, 2, 4, 5), 8)
    .texture(RED)
    .draw(&mut image);
  let expected = itertools::iproduct!(2..6, 2..5)
    .map(|(y, x)| (x, y))
    .collect::<Vec<_>>();
  assert_eq!(covered(&image, RED), expected);
}

#[test] fn single_pixel_ellipse() {
  let mut image = RgbaImage::new(8, 8);
  geometry::ellipse(pixel_box(3, 3, 3, 3), 8)
    .texture(RED)
    .draw(&mut image);
  assert_eq!(covered(&image, RED), vec![(3, 3)]);
}

#[test] fn inscribed_ellipse() {
  let mut image = RgbaImage::new(32, 32);
  geometry::ellipse(pixel_box(0, 0, 31, 31), 32)
    .texture(RED)
    .draw(&mut image);
  [(0, 16), (31, 16), (16, 0), (16, 31), (16, 16)].iter()
    .for_each(|&(x, y)| assert_eq!(*image.get_pixel(x, y), RED, "({}, {})", x, y));
  [(0, 0), (31, 0), (0, 31), (31, 31)].iter()
    .for_each(|&(x, y)| assert_eq!(image.get_pixel(x, y)[3], 0, "({}, {})", x, y));
}

#[test] fn offscreen_draws_nothing() {
  let mut image = RgbaImage::new(8, 8);
  geometry::ellipse(pixel_box(20, 20, 30, 30), 8)
    .texture(RED)
    .draw(&mut image);
  assert!(covered(&image, RED).is_empty());
}

#[test] fn partially_offscreen_is_clipped() {
  let mut image = RgbaImage::new(8, 8);
  geometry::rectangle(pixel_box(-4, -4, 1, 1), 8)
    .texture(RED)
    .draw(&mut image);
  assert_eq!(covered(&image, RED), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
}

#[test] fn fill_replaces_pixels() {
  let translucent = Rgba([0, 255, 0, 100]);
  let mut image = RgbaImage::from_pixel(4, 4, BLUE);
  geometry::rectangle(pixel_box(0, 0, 3, 3), 4)
    .texture(translucent)
    .draw(&mut image);
  assert!(image.pixels().all(|&p| p == translucent));
}

#[test] fn layers_in_order() {
  let mut image = RgbaImage::new(16, 16);
  let layers: Vec<Box<dyn Draw<RgbaImage>>> = vec![
    Box::new(geometry::rectangle(pixel_box(0, 0, 15, 15), 16).texture(RED)),
    Box::new(Circle
      .scale(V2::splat(0.25))
      .translate(V2::splat(0.5))
      .texture(BLUE))
  ];
  draw_layers(&mut image, &layers);
  assert_eq!(*image.get_pixel(8, 8), BLUE);
  assert_eq!(*image.get_pixel(0, 0), RED);
}

#[test] fn union_of_shapes() {
  let mut image = RgbaImage::new(8, 8);
  geometry::rectangle(pixel_box(0, 0, 0, 0), 8)
    .union(geometry::rectangle(pixel_box(7, 7, 7, 7), 8))
    .texture(RED)
    .draw(&mut image);
  assert_eq!(covered(&image, RED), vec![(0, 0), (7, 7)]);
}

#[test] fn primitive_signs() {
  assert_eq!(Square.sdf(Point2D::origin()), -1.0);
  assert!(Square.sdf(Point2D::new(0.99, -0.99)) < 0.0);
  assert!(Square.sdf(Point2D::new(1.01, 0.0)) > 0.0);
  assert!(Circle.sdf(Point2D::new(0.7, 0.7)) < 0.0);
  assert!(Circle.sdf(Point2D::new(0.75, 0.75)) > 0.0);
}

#[test] fn stretched_ellipse() {
  let mut image = RgbaImage::new(16, 16);
  geometry::ellipse(pixel_box(0, 6, 15, 9), 16)
    .texture(RED)
    .draw(&mut image);
  assert_eq!(*image.get_pixel(0, 7), RED);
  assert_eq!(*image.get_pixel(15, 8), RED);
  assert_eq!(image.get_pixel(8, 5)[3], 0);
  assert_eq!(image.get_pixel(8, 10)[3], 0);
}
