//! Color value container and the capability trait conversions rely on.
//!
//! # Types
//!
//! - [`ColorValue`] - Trait: construct a value, read/write XYZ + alpha
//! - [`Color`] - Four-slot container `[X, Y, Z, alpha]`
//!
//! `[f64; 4]` also implements [`ColorValue`], so plain arrays can be used
//! wherever a color value is expected.
//!
//! # Memory Layout
//!
//! [`Color`] is `#[repr(C)]` over `[f64; 4]`, in slot order X, Y, Z, alpha.

use crate::error::{ColorError, ColorResult};
use std::ops::Index;

/// Number of numeric slots in a color value (three components + alpha).
pub const CHANNELS: usize = 4;

/// Capability set for color containers.
///
/// A color value can be constructed, and exposes/accepts its four numeric
/// slots interpreted as XYZ tristimulus + alpha. Conversions into other
/// spaces are written against this trait, never against a concrete type.
///
/// # Implementing
///
/// ```
/// use cielab_core::ColorValue;
///
/// #[derive(Default)]
/// struct Swatch {
///     xyz: [f64; 3],
///     opacity: f64,
/// }
///
/// impl ColorValue for Swatch {
///     fn xyz(&self) -> [f64; 3] {
///         self.xyz
///     }
///
///     fn alpha(&self) -> f64 {
///         self.opacity
///     }
///
///     fn set_xyz(&mut self, x: f64, y: f64, z: f64, alpha: f64) -> &mut Self {
///         self.xyz = [x, y, z];
///         self.opacity = alpha;
///         self
///     }
/// }
///
/// let s = Swatch::create();
/// assert_eq!(s.xyz(), [0.0, 0.0, 0.0]);
/// ```
pub trait ColorValue: Default {
    /// Allocates a new zero-initialized color value.
    #[inline]
    fn create() -> Self {
        Self::default()
    }

    /// Returns the stored `[X, Y, Z]` triple.
    fn xyz(&self) -> [f64; 3];

    /// Returns the stored alpha (fourth slot).
    fn alpha(&self) -> f64;

    /// Overwrites all four slots in place and returns the same value.
    fn set_xyz(&mut self, x: f64, y: f64, z: f64, alpha: f64) -> &mut Self;
}

/// Color value holding XYZ tristimulus + alpha.
///
/// Components are unrestricted `f64`: negative, huge, NaN and infinite
/// values are stored as given.
///
/// # Example
///
/// ```
/// use cielab_core::{Color, ColorValue};
///
/// let c = Color::new(95.047, 100.0, 108.883, 1.0);
/// assert_eq!(c[1], 100.0);
/// assert_eq!(c.to_array(), [95.047, 100.0, 108.883, 1.0]);
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    components: [f64; CHANNELS],
}

impl Color {
    /// Creates a color from XYZ + alpha.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, alpha: f64) -> Self {
        Self {
            components: [x, y, z, alpha],
        }
    }

    /// Creates a color from `[X, Y, Z, alpha]`.
    #[inline]
    pub const fn from_array(components: [f64; CHANNELS]) -> Self {
        Self { components }
    }

    /// Returns `[X, Y, Z, alpha]`.
    #[inline]
    pub const fn to_array(self) -> [f64; CHANNELS] {
        self.components
    }

    /// Borrows the four slots.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }
}

impl ColorValue for Color {
    #[inline]
    fn xyz(&self) -> [f64; 3] {
        [self.components[0], self.components[1], self.components[2]]
    }

    #[inline]
    fn alpha(&self) -> f64 {
        self.components[3]
    }

    #[inline]
    fn set_xyz(&mut self, x: f64, y: f64, z: f64, alpha: f64) -> &mut Self {
        self.components = [x, y, z, alpha];
        self
    }
}

impl ColorValue for [f64; CHANNELS] {
    #[inline]
    fn xyz(&self) -> [f64; 3] {
        [self[0], self[1], self[2]]
    }

    #[inline]
    fn alpha(&self) -> f64 {
        self[3]
    }

    #[inline]
    fn set_xyz(&mut self, x: f64, y: f64, z: f64, alpha: f64) -> &mut Self {
        *self = [x, y, z, alpha];
        self
    }
}

impl From<[f64; CHANNELS]> for Color {
    #[inline]
    fn from(components: [f64; CHANNELS]) -> Self {
        Self::from_array(components)
    }
}

impl From<Color> for [f64; CHANNELS] {
    #[inline]
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl TryFrom<&[f64]> for Color {
    type Error = ColorError;

    fn try_from(values: &[f64]) -> ColorResult<Self> {
        let components: [f64; CHANNELS] = values
            .try_into()
            .map_err(|_| ColorError::channel_mismatch(CHANNELS, values.len()))?;
        Ok(Self { components })
    }
}

impl Index<usize> for Color {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.components[index]
    }
}
