//! .
//!
//! Errors are [`anyhow::Error`]; failures from `std::io` and `image` are wrapped with the
//! path they happened on.

pub use anyhow::Error;

/// Convenient wrapper around `std::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Render the error and its chain of causes, one per line.
pub fn display(error: &Error) -> String {
  let mut msg = "Error:\n".to_string();
  error
    .chain()
    .enumerate()
    .for_each(|(index, cause)| msg.push_str(&format!("└> {} - {}\n", index, cause)));
  msg
}
