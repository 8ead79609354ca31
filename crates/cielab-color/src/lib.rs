//! # cielab-color
//!
//! CIE Lab <-> XYZ conversion anchored to the D65 illuminant.
//!
//! - **Color values** - [`from_lab`], [`set_lab`], [`get_lab`] over any
//!   [`ColorValue`] container
//! - **Triples** - [`lab_to_xyz`], [`xyz_to_lab`] and the [`LabConvert`] trait
//! - **Buffers** - [`buffer`] converts interleaved 4-channel data in place
//!
//! # Architecture
//!
//! ```text
//!   cielab-color
//!        |
//!   cielab-core  (ColorValue, Color, ColorError)
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use cielab_color::{from_lab, get_lab, set_lab, Color, ColorValue};
//!
//! // Lab -> new color value (alpha defaults to 1)
//! let mut color: Color = from_lab(50.0, 25.0, -40.0, None);
//!
//! // Update in place with explicit alpha
//! set_lab(&mut color, 75.0, -10.0, 5.0, Some(0.5));
//!
//! // Back to Lab
//! let lab = get_lab(&color);
//! assert!((lab.l - 75.0).abs() < 1e-4);
//! assert_eq!(lab.alpha, 0.5);
//! ```
//!
//! # Conventions
//!
//! | Quantity | Scale |
//! |----------|-------|
//! | L | 0..100 |
//! | a, b | about -128..127 |
//! | X, Y, Z | 0..100, D65 white = (95.047, 100, 108.883) |
//! | alpha | passed through, defaults to 1 |
//!
//! None of these ranges are enforced.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod illuminant;
mod lab;
pub mod buffer;
pub mod convert;

pub use cielab_core::{Color, ColorError, ColorResult, ColorValue, CHANNELS};
pub use convert::LabConvert;
pub use illuminant::{CIE_EPSILON, CIE_OFFSET, CIE_SLOPE, D65};
pub use lab::{from_lab, get_lab, lab_to_xyz, set_lab, xyz_to_lab, Lab, DEFAULT_ALPHA};

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        from_lab, get_lab, set_lab, Color, ColorValue, Lab, LabConvert, D65, DEFAULT_ALPHA,
    };
}
