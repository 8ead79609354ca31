//! Error types for cielab operations.
//!
//! The Lab/XYZ math itself is total and never fails. Errors only come from
//! the edges: building a [`crate::Color`] from a slice of the wrong size, or
//! converting an interleaved buffer whose length is not a whole number of
//! colors.

use thiserror::Error;

/// Result type alias using [`ColorError`] as the error type.
pub type ColorResult<T> = std::result::Result<T, ColorError>;

/// Errors raised at the boundaries of color conversion.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// Wrong number of components for a color value.
    #[error("channel mismatch: expected {expected}, got {got}")]
    ChannelMismatch {
        /// Expected component count
        expected: usize,
        /// Actual component count
        got: usize,
    },

    /// Interleaved buffer does not hold a whole number of colors.
    #[error("buffer length {len} is not a multiple of {channels} channels")]
    InvalidBufferLength {
        /// Buffer length in components
        len: usize,
        /// Components per color
        channels: usize,
    },

    /// Input value could not be interpreted.
    #[error("invalid input value: {0}")]
    InvalidValue(String),
}

impl ColorError {
    /// Creates a [`ColorError::ChannelMismatch`] error.
    #[inline]
    pub fn channel_mismatch(expected: usize, got: usize) -> Self {
        Self::ChannelMismatch { expected, got }
    }

    /// Creates a [`ColorError::InvalidBufferLength`] error.
    #[inline]
    pub fn invalid_buffer_length(len: usize, channels: usize) -> Self {
        Self::InvalidBufferLength { len, channels }
    }

    /// Creates a [`ColorError::InvalidValue`] error.
    #[inline]
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }
}
