//! In-place conversion of interleaved color buffers.
//!
//! Buffers hold [`CHANNELS`] values per color: three components followed by
//! alpha. Alpha is never touched. A buffer whose length is not a multiple of
//! [`CHANNELS`] is rejected before any value is modified.
//!
//! # Example
//!
//! ```rust
//! use cielab_color::buffer::xyz_to_lab_buffer;
//!
//! let mut data = vec![
//!     95.047, 100.0, 108.883, 1.0,
//!     0.0, 0.0, 0.0, 0.5,
//! ];
//! xyz_to_lab_buffer(&mut data).unwrap();
//! assert_eq!(&data[..4], &[100.0, 0.0, 0.0, 1.0]);
//! assert_eq!(data[7], 0.5);
//! ```

use crate::lab::{lab_to_xyz, xyz_to_lab};
use cielab_core::{ColorError, ColorResult, CHANNELS};
use tracing::{debug, trace};

/// Converts interleaved `[L, a, b, alpha]` data to `[X, Y, Z, alpha]` in place.
pub fn lab_to_xyz_buffer(data: &mut [f64]) -> ColorResult<()> {
    apply(data, lab_to_xyz)?;
    trace!(colors = data.len() / CHANNELS, "lab -> xyz buffer");
    Ok(())
}

/// Converts interleaved `[X, Y, Z, alpha]` data to `[L, a, b, alpha]` in place.
pub fn xyz_to_lab_buffer(data: &mut [f64]) -> ColorResult<()> {
    apply(data, xyz_to_lab)?;
    trace!(colors = data.len() / CHANNELS, "xyz -> lab buffer");
    Ok(())
}

fn apply(data: &mut [f64], f: fn([f64; 3]) -> [f64; 3]) -> ColorResult<()> {
    if data.len() % CHANNELS != 0 {
        debug!(len = data.len(), "rejecting ragged color buffer");
        return Err(ColorError::invalid_buffer_length(data.len(), CHANNELS));
    }

    for px in data.chunks_exact_mut(CHANNELS) {
        let out = f([px[0], px[1], px[2]]);
        px[..3].copy_from_slice(&out);
    }
    Ok(())
}
