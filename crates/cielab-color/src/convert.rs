//! Chainable Lab/XYZ conversions on plain triples.
//!
//! # Example
//!
//! ```rust
//! use cielab_color::LabConvert;
//!
//! let lab = [62.5_f64, -20.0, 35.0];
//! let back = lab.lab_to_xyz().xyz_to_lab();
//!
//! assert!((back[0] - lab[0]).abs() < 1e-9);
//! assert!((back[1] - lab[1]).abs() < 1e-9);
//! assert!((back[2] - lab[2]).abs() < 1e-9);
//! ```

use crate::lab;

/// Lab/XYZ conversion methods for triples.
pub trait LabConvert: Sized {
    /// Treats `self` as `[L, a, b]` and returns D65 `[X, Y, Z]`.
    fn lab_to_xyz(self) -> Self;

    /// Treats `self` as D65 `[X, Y, Z]` and returns `[L, a, b]`.
    fn xyz_to_lab(self) -> Self;
}

impl LabConvert for [f64; 3] {
    #[inline]
    fn lab_to_xyz(self) -> Self {
        lab::lab_to_xyz(self)
    }

    #[inline]
    fn xyz_to_lab(self) -> Self {
        lab::xyz_to_lab(self)
    }
}

impl LabConvert for [f32; 3] {
    #[inline]
    fn lab_to_xyz(self) -> Self {
        narrow(lab::lab_to_xyz(widen(self)))
    }

    #[inline]
    fn xyz_to_lab(self) -> Self {
        narrow(lab::xyz_to_lab(widen(self)))
    }
}

#[inline]
fn widen(v: [f32; 3]) -> [f64; 3] {
    [v[0] as f64, v[1] as f64, v[2] as f64]
}

#[inline]
fn narrow(v: [f64; 3]) -> [f32; 3] {
    [v[0] as f32, v[1] as f32, v[2] as f32]
}
