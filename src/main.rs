use {
  balance_icons::{
    config::Config,
    driver,
    error::{self, Result}
  },
  simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode}
};

fn run() -> Result<()> {
  TermLogger::init(
    LevelFilter::Info,
    simplelog::Config::default(),
    TerminalMode::Stderr,
    ColorChoice::Auto
  )?;

  let config = Config::default();
  driver::generate(&config)?;

  println!("Generated icon files:");
  config.icons.iter()
    .for_each(|icon| println!("- {}", icon.filename().display()));
  Ok(())
}

fn main() {
  if let Err(e) = run() {
    eprint!("{}", error::display(&e));
    std::process::exit(1);
  }
}
