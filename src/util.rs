/// Evaluate an expression, logging how long it took at debug level.
#[macro_export]
macro_rules! profile(
  ($title: expr, $body: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $body;
    log::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);
