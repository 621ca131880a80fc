#[macro_export]
macro_rules! profile {
  ($name:expr) => {{
    let _span = tracing::span!(tracing::Level::DEBUG, $name);
    let _enter = _span.enter();
  }};
}

pub mod commit;
pub mod config;
pub mod filesystem;
pub mod gemini;
pub mod hook;
