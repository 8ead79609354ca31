//! # cielab-core
//!
//! Core types shared by the cielab crates.
//!
//! - [`ColorValue`] - Capability trait for four-slot color containers
//! - [`Color`] - The default container: XYZ tristimulus + alpha
//! - [`ColorError`], [`ColorResult`] - Error handling for the fallible edges
//!
//! ## Design
//!
//! Conversions never own the color representation. They only need to
//! construct a value and read/write its XYZ + alpha slots, which is exactly
//! what [`ColorValue`] exposes. Any container holding four numbers can opt in:
//!
//! ```
//! use cielab_core::{Color, ColorValue};
//!
//! let mut c = Color::create();
//! c.set_xyz(41.24, 21.26, 1.93, 1.0);
//! assert_eq!(c.xyz(), [41.24, 21.26, 1.93]);
//! assert_eq!(c.alpha(), 1.0);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! cielab-core (this crate)
//!    ^
//!    |
//!    +-- cielab-color (Lab <-> XYZ conversion)
//!    +-- cielab-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;

pub use color::{Color, ColorValue, CHANNELS};
pub use error::{ColorError, ColorResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::color::{Color, ColorValue, CHANNELS};
    pub use crate::error::{ColorError, ColorResult};
}
