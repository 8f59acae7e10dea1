//! Balance-scale icon: a filled circle with a beam, a pivot and two pans on top.
//!
//! All geometry is integer arithmetic on the icon side, floor division included, so the
//! same size always yields the same pixels.

use {
  crate::{
    config::{ColorRGBA, MAX_SIZE, MIN_SIZE},
    drawing::{self, Draw},
    error::Result,
    geometry::{self, Ellipse, PixelBox, Rectangle, Shape, pixel_box},
    sdf::Union
  },
  anyhow::{ensure, Context},
  humansize::{FileSize, file_size_opts as options},
  image::{ImageFormat, RgbaImage},
  std::{fs, path::Path}
};


/// Beam, pivot, left pan, right pan.
pub type Glyph = Union<Union<Union<Rectangle, Ellipse>, Ellipse>, Ellipse>;

/// Glyph geometry of an icon, in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Layout {
  pub size: i32,
  pub center: i32,
  pub line_width: i32,
  pub pivot_radius: i32,
  pub pan_radius: i32,
  pub pan_half_height: i32
}

impl Layout {
  pub fn new(size: u32) -> Result<Self> {
    ensure!(
      (MIN_SIZE..=MAX_SIZE).contains(&size),
      "icon size {}px is outside {}..={}px", size, MIN_SIZE, MAX_SIZE
    );
    let size = size as i32;
    Ok(Self {
      size,
      center: size / 2,
      line_width: (size / 10).max(1),
      pivot_radius: size / 8,
      pan_radius: size / 6,
      pan_half_height: size / 5
    })
  }

  /// The whole canvas, so the background circle is centered and never reaches a corner.
  pub fn background(&self) -> PixelBox {
    pixel_box(0, 0, self.size - 1, self.size - 1)
  }

  pub fn beam(&self) -> PixelBox {
    let Self { size, center, line_width, .. } = *self;
    pixel_box(size / 4, center, size * 3 / 4, center + line_width)
  }

  pub fn pivot(&self) -> PixelBox {
    let Self { center, pivot_radius: r, .. } = *self;
    pixel_box(center - r, center - r, center + r, center + r)
  }

  /// Left and right pans.
  pub fn pans(&self) -> [PixelBox; 2] {
    let Self { size, center, pan_radius: r, pan_half_height: h, .. } = *self;
    [size / 3, size * 2 / 3]
      .map(|x| pixel_box(x - r, center - h, x + r, center + h))
  }

  pub fn glyph(&self) -> Glyph {
    let size = self.size as u32;
    let [left, right] = self.pans();
    geometry::rectangle(self.beam(), size)
      .union(geometry::ellipse(self.pivot(), size))
      .union(geometry::ellipse(left, size))
      .union(geometry::ellipse(right, size))
  }
}

/// Draw the icon on a transparent canvas.
pub fn render_image(size: u32, primary: ColorRGBA, secondary: ColorRGBA) -> Result<RgbaImage> {
  let layout = Layout::new(size)?;
  log::debug!("{:?}", layout);

  let mut image = RgbaImage::new(size, size);
  let layers: [Box<dyn Draw<RgbaImage>>; 2] = [
    Box::new(geometry::ellipse(layout.background(), size).texture(primary)),
    Box::new(layout.glyph().texture(secondary))
  ];
  drawing::draw_layers(&mut image, &layers);
  Ok(image)
}

/// Encode as PNG, whatever the extension, replacing any existing file.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
  image.save_with_format(path, ImageFormat::Png)
    .with_context(|| format!("unable to write {}", path.display()))
}

/// Render an icon of `size` pixels to `filename`.
pub fn render(
  size: u32,
  filename: impl AsRef<Path>,
  primary: ColorRGBA,
  secondary: ColorRGBA
) -> Result<()> {
  let path = filename.as_ref();
  let image = render_image(size, primary, secondary)?;
  save_png(&image, path)?;

  log::info!("wrote {} ({}x{}, {})", path.display(), size, size, written_size(path));
  Ok(())
}

/// Human readable file size, for logging only.
fn written_size(path: &Path) -> String {
  fs::metadata(path)
    .ok()
    .and_then(|meta| meta.len().file_size(options::BINARY).ok())
    .unwrap_or_else(|| "size unknown".to_string())
}
