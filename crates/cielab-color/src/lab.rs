//! CIE Lab <-> XYZ conversion.
//!
//! Lab is encoded from XYZ by normalizing each component against the D65
//! reference white and companding it with the CIE curve: a cube root above
//! [`CIE_EPSILON`], a straight line below it.
//!
//! # Formula
//!
//! ```text
//! Lab -> XYZ                         XYZ -> Lab
//!   fy = (L + 16) / 116                fx = f(X / Xn)
//!   fx = a / 500 + fy                  fy = f(Y / Yn)
//!   fz = fy - b / 200                  fz = f(Z / Zn)
//!   X  = Xn * f^-1(fx)                 L  = 116 * fy - 16
//!   Y  = Yn * f^-1(fy)                 a  = 500 * (fx - fy)
//!   Z  = Zn * f^-1(fz)                 b  = 200 * (fy - fz)
//! ```
//!
//! # Range
//!
//! - L: [0, 100], a/b: [-128, 127] (advisory, never enforced)
//! - XYZ: 0..100 scale, D65 white at `[95.047, 100, 108.883]`
//!
//! Inputs are not validated. Out-of-range values produce whatever the math
//! yields, and NaN/Inf propagate.
//!
//! # Example
//!
//! ```rust
//! use cielab_color::{from_lab, get_lab, Color};
//!
//! let color: Color = from_lab(53.24, 80.09, 67.20, None);
//! let lab = get_lab(&color);
//! assert!((lab.l - 53.24).abs() < 1e-4);
//! assert_eq!(lab.alpha, 1.0);
//! ```

use crate::illuminant::{CIE_EPSILON, CIE_OFFSET, CIE_SLOPE, D65};
use cielab_core::ColorValue;

/// Alpha written when a conversion is not given one.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// A Lab color with alpha, as returned by [`get_lab`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Lab {
    /// Lightness.
    pub l: f64,
    /// Green (-) to red (+).
    pub a: f64,
    /// Blue (-) to yellow (+).
    pub b: f64,
    /// Alpha, carried through conversions untouched.
    pub alpha: f64,
}

impl Lab {
    /// Creates an opaque Lab color (alpha = [`DEFAULT_ALPHA`]).
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self::with_alpha(l, a, b, DEFAULT_ALPHA)
    }

    /// Creates a Lab color with explicit alpha.
    #[inline]
    pub const fn with_alpha(l: f64, a: f64, b: f64, alpha: f64) -> Self {
        Self { l, a, b, alpha }
    }

    /// Creates from `[l, a, b, alpha]`.
    #[inline]
    pub const fn from_array(v: [f64; 4]) -> Self {
        Self::with_alpha(v[0], v[1], v[2], v[3])
    }

    /// Returns `[l, a, b, alpha]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.l, self.a, self.b, self.alpha]
    }

    /// Returns `[l, a, b]` without alpha.
    #[inline]
    pub const fn lab(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

impl Default for Lab {
    /// Opaque black.
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl From<[f64; 4]> for Lab {
    fn from(v: [f64; 4]) -> Self {
        Self::from_array(v)
    }
}

impl From<Lab> for [f64; 4] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}

/// Decodes one companded Lab-derived coordinate into a tristimulus value.
///
/// The threshold is tested on the cube, not on `value`.
#[inline]
fn lab_component_to_xyz(value: f64, white: f64) -> f64 {
    let cube = value * value * value;
    let linear = if cube > CIE_EPSILON {
        cube
    } else {
        (value - CIE_OFFSET) / CIE_SLOPE
    };
    linear * white
}

/// Encodes one tristimulus value into its companded Lab-derived coordinate.
///
/// The threshold is tested on the white-normalized value.
#[inline]
fn xyz_component_to_lab(value: f64, white: f64) -> f64 {
    let normalized = value / white;
    if normalized > CIE_EPSILON {
        normalized.cbrt()
    } else {
        CIE_SLOPE * normalized + CIE_OFFSET
    }
}

/// Converts `[L, a, b]` to D65 `[X, Y, Z]`.
///
/// # Example
///
/// ```rust
/// use cielab_color::lab_to_xyz;
///
/// assert_eq!(lab_to_xyz([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
/// ```
#[inline]
pub fn lab_to_xyz(lab: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = lab;
    let y = (l + 16.0) / 116.0;
    let x = a / 500.0 + y;
    let z = y - b / 200.0;

    [
        lab_component_to_xyz(x, D65[0]),
        lab_component_to_xyz(y, D65[1]),
        lab_component_to_xyz(z, D65[2]),
    ]
}

/// Converts D65 `[X, Y, Z]` to `[L, a, b]`.
///
/// # Example
///
/// ```rust
/// use cielab_color::{xyz_to_lab, D65};
///
/// let [l, a, b] = xyz_to_lab(D65);
/// assert_eq!((l, a, b), (100.0, 0.0, 0.0));
/// ```
#[inline]
pub fn xyz_to_lab(xyz: [f64; 3]) -> [f64; 3] {
    let fx = xyz_component_to_lab(xyz[0], D65[0]);
    let fy = xyz_component_to_lab(xyz[1], D65[1]);
    let fz = xyz_component_to_lab(xyz[2], D65[2]);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Creates a new color value from Lab components.
///
/// `alpha` defaults to [`DEFAULT_ALPHA`] when `None`.
///
/// # Example
///
/// ```rust
/// use cielab_color::{from_lab, Color, ColorValue};
///
/// let white: Color = from_lab(100.0, 0.0, 0.0, None);
/// assert!((white.xyz()[1] - 100.0).abs() < 1e-9);
/// assert_eq!(white.alpha(), 1.0);
/// ```
pub fn from_lab<C: ColorValue>(l: f64, a: f64, b: f64, alpha: Option<f64>) -> C {
    let mut color = C::create();
    set_lab(&mut color, l, a, b, alpha);
    color
}

/// Updates a color value in place from Lab components and returns it.
///
/// `alpha` defaults to [`DEFAULT_ALPHA`] when `None`.
///
/// # Example
///
/// ```rust
/// use cielab_color::{set_lab, Color, ColorValue};
///
/// let mut c = Color::create();
/// set_lab(&mut c, 0.0, 0.0, 0.0, Some(0.25));
/// assert_eq!(c.to_array(), [0.0, 0.0, 0.0, 0.25]);
/// ```
pub fn set_lab<C: ColorValue>(
    color: &mut C,
    l: f64,
    a: f64,
    b: f64,
    alpha: Option<f64>,
) -> &mut C {
    let [x, y, z] = lab_to_xyz([l, a, b]);
    color.set_xyz(x, y, z, alpha.unwrap_or(DEFAULT_ALPHA))
}

/// Returns the Lab representation of a color value.
///
/// Reads XYZ + alpha, never mutates the input.
///
/// # Example
///
/// ```rust
/// use cielab_color::{get_lab, Color};
///
/// let lab = get_lab(&Color::new(95.047, 100.0, 108.883, 0.5));
/// assert_eq!(lab.to_array(), [100.0, 0.0, 0.0, 0.5]);
/// ```
pub fn get_lab<C: ColorValue>(color: &C) -> Lab {
    let [l, a, b] = xyz_to_lab(color.xyz());
    Lab::with_alpha(l, a, b, color.alpha())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use cielab_core::Color;

    #[test]
    fn test_white_point() {
        let lab = get_lab(&Color::new(D65[0], D65[1], D65[2], 1.0));
        assert_abs_diff_eq!(lab.l, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lab.a, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lab.b, 0.0, epsilon = 1e-9);
        assert_eq!(lab.alpha, 1.0);
    }

    #[test]
    fn test_black_point() {
        let mut c = Color::new(1.0, 1.0, 1.0, 1.0);
        set_lab(&mut c, 0.0, 0.0, 0.0, None);
        assert_eq!(c.xyz(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_lab_white_to_xyz() {
        let xyz = lab_to_xyz([100.0, 0.0, 0.0]);
        for i in 0..3 {
            assert_relative_eq!(xyz[i], D65[i], max_relative = 1e-12);
        }
    }

    #[test]
    fn test_known_red() {
        // sRGB red: XYZ (41.24, 21.26, 1.93) ~ Lab (53.24, 80.09, 67.20)
        let lab = xyz_to_lab([41.24, 21.26, 1.93]);
        assert_abs_diff_eq!(lab[0], 53.24, epsilon = 0.05);
        assert_abs_diff_eq!(lab[1], 80.09, epsilon = 0.1);
        assert_abs_diff_eq!(lab[2], 67.20, epsilon = 0.1);
    }

    #[test]
    fn test_roundtrip() {
        for l in (0..=100).step_by(10) {
            for a in (-128..=127).step_by(15) {
                for b in (-128..=127).step_by(15) {
                    let (l, a, b) = (l as f64, a as f64, b as f64);
                    let c: Color = from_lab(l, a, b, Some(0.75));
                    let back = get_lab(&c);
                    assert_abs_diff_eq!(back.l, l, epsilon = 1e-4);
                    assert_abs_diff_eq!(back.a, a, epsilon = 1e-4);
                    assert_abs_diff_eq!(back.b, b, epsilon = 1e-4);
                    assert_eq!(back.alpha, 0.75);
                }
            }
        }
    }

    #[test]
    fn test_default_alpha() {
        let implicit: Color = from_lab(50.0, 20.0, -30.0, None);
        let explicit: Color = from_lab(50.0, 20.0, -30.0, Some(1.0));
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn test_alpha_passthrough() {
        for alpha in [-1.0, 0.0, 0.5, 2.0, 1e9] {
            let c: Color = from_lab(30.0, -5.0, 12.0, Some(alpha));
            assert_eq!(c.alpha(), alpha);
            assert_eq!(get_lab(&c).alpha, alpha);
        }
    }

    #[test]
    fn test_set_lab_returns_same_value() {
        let mut c = Color::create();
        let ptr = &c as *const Color;
        let back = set_lab(&mut c, 10.0, 10.0, 10.0, None);
        assert_eq!(back as *const Color, ptr);
    }

    #[test]
    fn test_get_lab_is_pure() {
        let c = Color::new(20.0, 30.0, 40.0, 0.3);
        let first = get_lab(&c);
        let second = get_lab(&c);
        assert_eq!(first, second);
        assert_eq!(c, Color::new(20.0, 30.0, 40.0, 0.3));
    }

    #[test]
    fn test_decode_boundary_continuity() {
        let at = CIE_EPSILON.cbrt();
        let cube = at * at * at;
        let linear = (at - CIE_OFFSET) / CIE_SLOPE;
        assert_abs_diff_eq!(cube, linear, epsilon = 1e-6);

        let below = lab_component_to_xyz(at - 1e-9, 1.0);
        let above = lab_component_to_xyz(at + 1e-9, 1.0);
        assert_abs_diff_eq!(below, above, epsilon = 1e-6);
    }

    #[test]
    fn test_encode_boundary_continuity() {
        let below = xyz_component_to_lab(CIE_EPSILON, 1.0);
        let above = xyz_component_to_lab(CIE_EPSILON + 1e-12, 1.0);
        assert_abs_diff_eq!(below, above, epsilon = 1e-6);
    }

    #[test]
    fn test_branch_conditions() {
        // Decode tests the cube: 0.2^3 = 0.008 takes the linear segment
        // even though 0.2 itself is above the breakpoint.
        assert_abs_diff_eq!(
            lab_component_to_xyz(0.2, 1.0),
            (0.2 - CIE_OFFSET) / CIE_SLOPE,
            epsilon = 1e-15
        );
        // Encode tests the normalized value: 0.5 / 100 = 0.005 is below.
        assert_abs_diff_eq!(
            xyz_component_to_lab(0.5, 100.0),
            CIE_SLOPE * 0.005 + CIE_OFFSET,
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(xyz_component_to_lab(0.9, 100.0), 0.009_f64.cbrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_decode_is_bit_stable() {
        let inputs = [[60.0, -12.0, 40.0], [53.24, 80.09, 67.2], [5.0, 3.0, -2.0]];
        for lab in inputs {
            let folded = lab_to_xyz(lab);
            let runtime = lab_to_xyz(std::hint::black_box(lab));
            for i in 0..3 {
                assert_eq!(folded[i].to_bits(), runtime[i].to_bits(), "lab={:?}", lab);
            }
        }
    }

    #[test]
    fn test_helpers_scale_by_white() {
        assert_abs_diff_eq!(lab_component_to_xyz(1.0, D65[2]), D65[2], epsilon = 1e-12);
        assert_abs_diff_eq!(xyz_component_to_lab(D65[0], D65[0]), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_range_accepted() {
        let xyz = lab_to_xyz([150.0, 300.0, -300.0]);
        assert!(xyz.iter().all(|v| v.is_finite()));

        let dark = lab_to_xyz([-50.0, 0.0, 0.0]);
        assert!(dark[1] < 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        let c: Color = from_lab(f64::NAN, 0.0, 0.0, None);
        assert!(c.xyz().iter().all(|v| v.is_nan()));
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn test_lab_type() {
        let lab = Lab::new(50.0, 1.0, 2.0);
        assert_eq!(lab.alpha, DEFAULT_ALPHA);
        assert_eq!(lab.lab(), [50.0, 1.0, 2.0]);
        assert_eq!(Lab::from([1.0, 2.0, 3.0, 4.0]).to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Lab::default(), Lab::new(0.0, 0.0, 0.0));
    }
}
