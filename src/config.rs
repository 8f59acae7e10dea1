//! Palette and icon set.
//!
//! There is no configuration file and no command line. [`Config::default`] carries the
//! fixed values the binary renders with; library users build their own.

use {
  crate::error::Result,
  anyhow::ensure,
  image::Rgba,
  std::path::{Path, PathBuf}
};

pub type ColorRGBA = Rgba<u8>;

pub const STEEL_BLUE: ColorRGBA = Rgba([70, 130, 180, 255]);
pub const WHITE: ColorRGBA = Rgba([255, 255, 255, 255]);

/// Smallest icon where the pivot and pan radii are at least one pixel.
pub const MIN_SIZE: u32 = 8;
/// Largest icon side. Keeps the layout arithmetic (`size * 3`) inside `i32`.
pub const MAX_SIZE: u32 = 16384;

const DEFAULT_ICONS: [(u32, &str); 3] = [
  (16, "icon16.png"),
  (48, "icon48.png"),
  (128, "icon128.png"),
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
  /// Background circle
  pub primary: ColorRGBA,
  /// Beam, pivot and pans
  pub secondary: ColorRGBA
}

impl Default for Palette {
  fn default() -> Self {
    Self { primary: STEEL_BLUE, secondary: WHITE }
  }
}

/// One icon to render: its side in pixels and the file it goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
  size: u32,
  filename: PathBuf
}

impl IconSpec {
  pub fn new(size: u32, filename: impl Into<PathBuf>) -> Result<Self> {
    ensure!(
      (MIN_SIZE..=MAX_SIZE).contains(&size),
      "icon size {}px is outside {}..={}px", size, MIN_SIZE, MAX_SIZE
    );
    Ok(Self { size, filename: filename.into() })
  }

  pub fn size(&self) -> u32 { self.size }

  pub fn filename(&self) -> &Path { &self.filename }

  /// `icon16.png`, `icon48.png`, `icon128.png`, in this order.
  pub fn default_set() -> Vec<Self> {
    DEFAULT_ICONS.iter()
      .map(|&(size, filename)| Self { size, filename: filename.into() })
      .collect()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub palette: Palette,
  pub icons: Vec<IconSpec>,
  /// Directory the icon files are written to.
  pub out_dir: PathBuf
}

impl Default for Config {
  fn default() -> Self {
    Self {
      palette: Palette::default(),
      icons: IconSpec::default_set(),
      out_dir: PathBuf::from(".")
    }
  }
}
