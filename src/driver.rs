use {
  crate::{config::Config, error::Result, icon},
  std::path::PathBuf
};

/// Render every icon of the config, one after another, in declaration order.
/// Stops at the first failure. Returns the written paths.
pub fn generate(config: &Config) -> Result<Vec<PathBuf>> {
  let Config { palette, icons, out_dir } = config;
  icons.iter()
    .map(|spec| -> Result<PathBuf> {
      let path = out_dir.join(spec.filename());
      crate::profile!(
        spec.filename().display(),
        icon::render(spec.size(), &path, palette.primary, palette.secondary)
      )?;
      Ok(path)
    })
    .collect()
}
