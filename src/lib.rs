//! Procedural balance-scale icons.
//!
//! An icon is a filled circle with a balance drawn on top of it: a horizontal beam, a pivot
//! disc in the middle and two pan discs. Shapes are signed distance functions in
//! [`geometry`] and [`sdf`], rasterized onto an [`image::RgbaImage`] by [`drawing`].
//!
//! # Basic usage
//! ```no_run
//! # use balance_icons::{error::Result, config::{STEEL_BLUE, WHITE}, icon};
//! # fn main() -> Result<()> {
//! // 48x48 steel-blue icon with a white balance, saved as PNG
//! icon::render(48, "icon48.png", STEEL_BLUE, WHITE)?;
//! # Ok(())
//! # }
//! ```
//! Shapes compose the same way the icon is built:
//! ```
//! # use {
//! #   balance_icons::{
//! #     geometry::{self, pixel_box, Shape},
//! #     drawing::Draw
//! #   },
//! #   image::{Rgba, RgbaImage}
//! # };
//! let mut image = RgbaImage::new(16, 16);
//! // pixel boxes include both corners
//! geometry::ellipse(pixel_box(0, 0, 15, 15), 16)
//!   .union(geometry::rectangle(pixel_box(0, 7, 15, 8), 16))
//!   .texture(Rgba([255u8, 255, 255, 255]))
//!   .draw(&mut image);
//! assert_eq!(image.get_pixel(8, 8)[3], 255);
//! ```
//! The full set of icons is rendered by [`driver::generate`].

pub mod util;
pub mod error;
pub mod sdf;
pub mod geometry;
pub mod drawing;
pub mod config;
pub mod icon;
pub mod driver;
