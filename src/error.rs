//! Error types for configuration and generation.

use thiserror::Error;

/// Rejected configuration. Raised before any buffer is sized.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  /// Fewer than 2 sample points on some axis leaves no voxel to march.
  #[error("grid must have at least 2 points per axis, got {x}x{y}x{z}")]
  GridTooSmall { x: u32, y: u32, z: u32 },
}

/// Failure of a generation pass.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
  /// A pass was requested with no density field installed.
  #[error("no density field configured; call configure() before generate()")]
  MissingField,
}
