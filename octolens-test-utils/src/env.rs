//! Environment variable management for testing
//!
//! Tests that read `GITHUB_TOKEN` or `GITHUB_API_URL` override them through a
//! guard so the original process environment is restored afterwards.

use std::env;

/// RAII guard that sets or removes one environment variable and restores the
/// previous value on drop
pub struct EnvVarGuard {
  name: String,
  original: Option<String>,
}

impl EnvVarGuard {
  /// Set `name` to `value` for the lifetime of the guard
  pub fn set(name: &str, value: &str) -> Self {
    let original = env::var(name).ok();
    unsafe {
      env::set_var(name, value);
    }
    Self {
      name: name.to_string(),
      original,
    }
  }

  /// Remove `name` for the lifetime of the guard
  pub fn unset(name: &str) -> Self {
    let original = env::var(name).ok();
    unsafe {
      env::remove_var(name);
    }
    Self {
      name: name.to_string(),
      original,
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(&self.name, val);
      },
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}
